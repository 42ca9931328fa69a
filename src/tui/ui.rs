//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, ListState as WidgetListState, Paragraph, Tabs, Wrap,
};

use crate::core::attributes::CLAUSE_SEPARATOR;
use crate::core::dataset::DatasetVersion;
use crate::core::navigation::ActiveView;
use crate::core::view::CardView;
use crate::tui::app::{App, Pane};
use crate::tui::theme::Theme;

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    // Render help overlay on top if active
    if app.show_help {
        render_help_overlay(frame, app);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let view_name = match app.active_view() {
        ActiveView::None => "Recommended Audiences",
        ActiveView::Details => "Audience Details",
        ActiveView::Attributes => "Audience Attributes",
    };

    let title = format!(
        " Audience Recommendation Agent │ dataset: {} │ {} ",
        app.version(),
        view_name
    );

    let header = Paragraph::new(title)
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Render the main content area based on the active view
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.active_view() {
        ActiveView::None => render_list(frame, area, app),
        ActiveView::Details => render_details(frame, area, app),
        ActiveView::Attributes => render_attributes(frame, area, app),
    }
}

fn pane_border(app: &App, pane: Pane) -> Style {
    if app.focus == pane {
        Theme::focused_border()
    } else {
        Theme::normal()
    }
}

/// Render the selectors and the three audience cards
fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Dataset selector
            Constraint::Percentage(35), // Description selector
            Constraint::Min(0),         // Cards
            Constraint::Length(1),      // Help line
        ])
        .split(area);

    render_dataset_tabs(frame, chunks[0], app);

    if let Some(err) = &app.load_error {
        let error = Paragraph::new(format!("\n  {}", err))
            .style(Theme::error())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Load error ")
                    .borders(Borders::ALL),
            );
        let error_area = chunks[1].union(chunks[2]);
        frame.render_widget(error, error_area);
    } else {
        render_descriptions(frame, chunks[1], app);
        render_cards(frame, chunks[2], app);
    }

    let help = Paragraph::new(
        " [Tab] Switch pane  [v] Dataset  [1-3] Card  [Enter/d] Details  [a] Attributes  [q] Quit",
    )
    .style(Theme::muted());
    frame.render_widget(help, chunks[3]);
}

fn render_dataset_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let versions = DatasetVersion::all();
    let titles: Vec<Line> = versions.iter().map(|v| Line::from(v.name())).collect();
    let selected = versions
        .iter()
        .position(|v| *v == app.version())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Theme::selected())
        .block(
            Block::default()
                .title(" Select version ")
                .borders(Borders::ALL),
        );

    frame.render_widget(tabs, area);
}

fn render_descriptions(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = if app.descriptions.is_empty() {
        vec![ListItem::new("  No audience descriptions in this dataset")]
    } else {
        app.descriptions
            .iter()
            .map(|d| ListItem::new(format!("  {}", d)))
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Audience Description ")
                .borders(Borders::ALL)
                .border_style(pane_border(app, Pane::Descriptions)),
        )
        .highlight_style(Theme::selected());

    let mut state = WidgetListState::default();
    if !app.descriptions.is_empty() {
        state.select(Some(app.description_selection.selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Recommended Audiences ")
        .borders(Borders::ALL)
        .border_style(pane_border(app, Pane::Cards));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // No matching row: show nothing
    if app.cards.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    for (card, column) in app.cards.iter().zip(columns.iter()) {
        let focused = app.focus == Pane::Cards
            && card.index.position() == app.card_selection.selected;
        render_card(frame, *column, card, focused);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView, focused: bool) {
    let lines = vec![
        Line::from(Span::styled(card.image.describe(card.index), Theme::muted())),
        Line::from(""),
        Line::from(Span::styled(card.name.clone(), Theme::audience_name())),
        Line::from(card.oneliner.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!("[d] View Details {}", card.index),
            Theme::muted(),
        )),
        Line::from(Span::styled(
            format!("[a] View Attributes {}", card.index),
            Theme::muted(),
        )),
    ];

    let border = if focused {
        Theme::focused_border()
    } else {
        Theme::normal()
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" Audience {} ", card.index))
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(paragraph, area);
}

/// Render the details page of the focused audience
fn render_details(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.details_page() else {
        render_placeholder(frame, area, "Audience Details", "Nothing to show");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(page.image.describe(page.index), Theme::muted())),
        Line::from(""),
    ];
    lines.extend(page.summary.lines().map(|l| Line::from(l.to_string())));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.page_scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", page.title),
                    Theme::audience_name(),
                ))
                .borders(Borders::ALL),
        );
    frame.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(" [j/k] Scroll  [Esc/b] Back to Main Page").style(Theme::muted());
    frame.render_widget(help, chunks[1]);
}

/// Render the attributes page of the focused audience
fn render_attributes(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.attributes_page() else {
        render_placeholder(frame, area, "Audience Attributes", "Nothing to show");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let lines: Vec<Line> = page
        .lines
        .iter()
        .map(|line| {
            if line == CLAUSE_SEPARATOR {
                Line::from(Span::styled(line.clone(), Theme::clause_separator()))
            } else {
                Line::from(format!("  {}", line))
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.page_scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", page.title),
                    Theme::audience_name(),
                ))
                .borders(Borders::ALL),
        );
    frame.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(" [j/k] Scroll  [Esc/b] Back to Main Page").style(Theme::muted());
    frame.render_widget(help, chunks[1]);
}

fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(format!("\n  {}", message)).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = if let Some(msg) = &app.status_message {
        format!(" {} ", msg)
    } else {
        format!(
            " Dataset: {} │ {} descriptions │ ? for help ",
            app.version(),
            app.descriptions.len()
        )
    };

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Calculate centered popup area (60% width, 70% height)
    let popup_width = (area.width * 60 / 100).min(60);
    let popup_height = (area.height * 70 / 100).min(20);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let (title, help_lines) = get_help_content(app.active_view());

    let text: Vec<Line> = help_lines
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), Style::default().fg(Theme::PRIMARY)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::SECONDARY)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}

/// Get help content for the active view
fn get_help_content(view: ActiveView) -> (&'static str, Vec<(&'static str, &'static str)>) {
    match view {
        ActiveView::None => (
            "Help - Recommended Audiences",
            vec![
                ("Tab", "Switch descriptions / cards"),
                ("j / ↓", "Next description or card"),
                ("k / ↑", "Previous description or card"),
                ("h / l", "Previous / next card"),
                ("1 - 3", "Focus a card"),
                ("Enter / d", "View details"),
                ("a", "View attributes"),
                ("v", "Switch dataset version"),
                ("r", "Reload dataset"),
                ("q", "Quit application"),
                ("?", "Show this help"),
            ],
        ),
        ActiveView::Details | ActiveView::Attributes => (
            "Help - Audience Page",
            vec![
                ("j / ↓", "Scroll down"),
                ("k / ↑", "Scroll up"),
                ("Esc / b / q", "Back to main page"),
                ("?", "Show this help"),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::fixtures::sample_csv;
    use crate::core::dataset::CsvDataProvider;
    use crate::core::images::ImageDir;
    use crate::core::navigation::ViewController;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app_in(dir: &std::path::Path, with_data: bool) -> App {
        if with_data {
            std::fs::write(
                dir.join(DatasetVersion::AttributeSwap.file_name()),
                sample_csv(),
            )
            .unwrap();
        }
        let controller =
            ViewController::new(CsvDataProvider::new(dir), DatasetVersion::AttributeSwap);
        App::new(controller, ImageDir::new(dir.join("images")))
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_list_view_shows_cards() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path(), true);
        let screen = draw(&app);

        assert!(screen.contains("Audience Recommendation Agent │ dataset: attribute_swap"));
        assert!(screen.contains("naive_clustering"));
        assert!(screen.contains("Young runners in the city"));
        assert!(screen.contains("Urban Joggers"));
        assert!(screen.contains("Gear Shoppers"));
        assert!(screen.contains("Image for Audience 2 not found"));
    }

    #[test]
    fn test_attributes_page_lists_clauses() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), true);
        press(&mut app, KeyCode::Char('a'));
        let screen = draw(&app);

        assert!(screen.contains("Attributes for Urban Joggers"));
        assert!(screen.contains("Interest: Running"));
        assert!(screen.contains("Back to Main Page"));
    }

    #[test]
    fn test_details_page_shows_summary() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), true);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('d'));
        let screen = draw(&app);

        assert!(screen.contains("Audience Details"));
        assert!(screen.contains("Frequent sportswear buyers."));
    }

    #[test]
    fn test_missing_dataset_shows_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path(), false);
        let screen = draw(&app);

        assert!(screen.contains("Load error"));
        assert!(screen.contains("could not be loaded"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), true);
        press(&mut app, KeyCode::Char('?'));
        let screen = draw(&app);

        assert!(screen.contains("Help - Recommended Audiences"));
    }
}
