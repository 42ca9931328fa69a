//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;

use crate::core::dataset::{AudienceIndex, AudienceRecord, CsvDataProvider, DatasetVersion};
use crate::core::images::ImageDir;
use crate::core::navigation::{ActiveView, ViewController};
use crate::core::view::{self, AttributesView, CardView, DetailsView};
use crate::error::{Nl2audError, Result};
use crate::tui::event::{is_back_key, is_quit_key, AppEvent, EventHandler};
use crate::tui::ui;

/// Number of cards in the audience row
const CARD_COUNT: usize = AudienceIndex::ALL.len();

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }
}

/// Which list-view pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Descriptions,
    Cards,
}

/// Main TUI application
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Navigation state and dataset access
    pub controller: ViewController<CsvDataProvider>,
    /// Audience image lookup
    pub images: ImageDir,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // List view data
    // ─────────────────────────────────────────────────────────────────────────
    /// Descriptions of the active dataset, in file order
    pub descriptions: Vec<String>,
    /// Description selector state
    pub description_selection: ListState,
    /// Row matching the selected description, if any
    pub record: Option<AudienceRecord>,
    /// Cards built from `record`
    pub cards: Vec<CardView>,
    /// Focused card
    pub card_selection: ListState,
    /// Pane receiving j/k
    pub focus: Pane,
    /// Error from the last dataset load
    pub load_error: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Detail pages
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll offset of the details/attributes page
    pub page_scroll: u16,
}

impl App {
    /// Create a new app instance and load the active dataset
    pub fn new(controller: ViewController<CsvDataProvider>, images: ImageDir) -> Self {
        let mut app = Self {
            running: true,
            controller,
            images,
            status_message: None,
            show_help: false,

            descriptions: Vec::new(),
            description_selection: ListState::default(),
            record: None,
            cards: Vec::new(),
            card_selection: ListState::new(CARD_COUNT),
            focus: Pane::Descriptions,
            load_error: None,

            page_scroll: 0,
        };
        app.reload_dataset();
        app
    }

    /// Active dataset version
    pub fn version(&self) -> DatasetVersion {
        self.controller.version()
    }

    /// Active sub-view
    pub fn active_view(&self) -> ActiveView {
        self.controller.state().active_view()
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| Nl2audError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| Nl2audError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| Nl2audError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| Nl2audError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| Nl2audError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| Nl2audError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(Duration::from_millis(250));

        // Main event loop
        while self.running {
            if let Err(e) = terminal.draw(|frame| ui::render(frame, self)) {
                Self::restore_terminal(&mut terminal)?;
                return Err(Nl2audError::Terminal(e.to_string()));
            }

            match events.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key),
                // Resize and tick only trigger a redraw
                Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
                None => break,
            }
        }

        Self::restore_terminal(&mut terminal)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Data loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Re-read the active dataset and rebuild the description selector.
    ///
    /// The selected description is kept when the new dataset has it,
    /// otherwise the first row is selected.
    pub fn reload_dataset(&mut self) {
        let previous = self.selected_description().map(str::to_string);

        match self.controller.dataset() {
            Ok(records) => {
                self.descriptions = records.into_iter().map(|r| r.description).collect();
                self.description_selection = ListState::new(self.descriptions.len());
                if let Some(pos) = previous
                    .as_deref()
                    .and_then(|p| self.descriptions.iter().position(|d| d == p))
                {
                    self.description_selection.selected = pos;
                }
                self.load_error = None;
                self.status_message = Some(format!(
                    "Loaded {} audience descriptions from {}",
                    self.descriptions.len(),
                    self.version()
                ));
                self.select_current_description();
            }
            Err(e) => {
                self.descriptions.clear();
                self.description_selection = ListState::default();
                self.record = None;
                self.cards.clear();
                self.load_error = Some(e.to_string());
                self.status_message = Some(format!("Could not load {}", self.version()));
            }
        }
    }

    /// Description under the selector cursor
    pub fn selected_description(&self) -> Option<&str> {
        self.descriptions
            .get(self.description_selection.selected)
            .map(String::as_str)
    }

    /// Filter the dataset to the selected description and rebuild the cards
    fn select_current_description(&mut self) {
        let Some(text) = self.selected_description().map(str::to_string) else {
            self.record = None;
            self.cards.clear();
            return;
        };

        match self.controller.select_description(&text) {
            Ok(rows) => {
                self.record = rows.into_iter().next();
                self.cards = self
                    .record
                    .as_ref()
                    .map(|r| view::cards(r, &self.images))
                    .unwrap_or_default();
            }
            Err(e) => {
                self.record = None;
                self.cards.clear();
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Switch to the next dataset version
    pub fn cycle_dataset(&mut self) {
        let next = self.version().next();
        self.controller.select_dataset(next);
        self.reload_dataset();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Index of the focused card
    pub fn focused_card(&self) -> AudienceIndex {
        AudienceIndex::ALL[self.card_selection.selected % CARD_COUNT]
    }

    /// Open the details page of the focused card
    pub fn show_details(&mut self) {
        if self.record.is_none() {
            return;
        }
        let index = self.focused_card();
        match self.controller.show_details(index) {
            Ok(()) => self.enter_page(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Open the attributes page of the focused card
    pub fn show_attributes(&mut self) {
        if self.record.is_none() {
            return;
        }
        let index = self.focused_card();
        match self.controller.show_attributes(index) {
            Ok(()) => self.enter_page(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn enter_page(&mut self) {
        self.page_scroll = 0;
        self.status_message = None; // Clear stale messages on view change
    }

    /// Go back to the card list
    pub fn go_back(&mut self) {
        if self.controller.state().is_list() {
            return;
        }
        if let Err(e) = self.controller.go_back() {
            self.status_message = Some(e.to_string());
            return;
        }
        self.page_scroll = 0;
        self.status_message = None;
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Details page for the focused audience
    pub fn details_page(&self) -> Option<DetailsView> {
        let index = self.controller.state().focused_index()?;
        let record = self.record.as_ref()?;
        Some(view::details(record, index, &self.images))
    }

    /// Attributes page for the focused audience
    pub fn attributes_page(&self) -> Option<AttributesView> {
        let index = self.controller.state().focused_index()?;
        let record = self.record.as_ref()?;
        Some(view::attributes(record, index))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key handling
    // ─────────────────────────────────────────────────────────────────────────

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Global key handlers
        if key.code == KeyCode::Char('?') {
            self.show_help = true;
            return;
        }

        if is_quit_key(&key) {
            if self.controller.state().is_list() {
                self.quit();
            } else {
                self.go_back();
            }
            return;
        }

        if is_back_key(&key) {
            self.go_back();
            return;
        }

        // View-specific handlers
        match self.active_view() {
            ActiveView::None => self.handle_list_key(key),
            ActiveView::Details | ActiveView::Attributes => self.handle_page_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Pane::Descriptions => Pane::Cards,
                    Pane::Cards => Pane::Descriptions,
                };
            }
            KeyCode::Char('v') => self.cycle_dataset(),
            KeyCode::Char('r') => self.reload_dataset(),
            KeyCode::Char(c @ '1'..='3') => {
                self.card_selection.selected = c as usize - '1' as usize;
                self.focus = Pane::Cards;
            }
            KeyCode::Char('d') => self.show_details(),
            KeyCode::Char('a') => self.show_attributes(),
            KeyCode::Enter => match self.focus {
                Pane::Descriptions => self.focus = Pane::Cards,
                Pane::Cards => self.show_details(),
            },
            KeyCode::Char('h') | KeyCode::Left => self.card_selection.previous(),
            KeyCode::Char('l') | KeyCode::Right => self.card_selection.next(),
            KeyCode::Char('j') | KeyCode::Down => match self.focus {
                Pane::Descriptions => {
                    self.description_selection.next();
                    self.select_current_description();
                }
                Pane::Cards => self.card_selection.next(),
            },
            KeyCode::Char('k') | KeyCode::Up => match self.focus {
                Pane::Descriptions => {
                    self.description_selection.previous();
                    self.select_current_description();
                }
                Pane::Cards => self.card_selection.previous(),
            },
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.page_scroll = self.page_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.page_scroll = self.page_scroll.saturating_sub(1);
            }
            KeyCode::Char('b') => self.go_back(),
            _ => {}
        }
    }
}
