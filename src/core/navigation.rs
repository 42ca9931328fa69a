//! View navigation state
//!
//! The viewer has three states: the card list, the details page of one
//! audience and the attributes page of one audience. Detail pages are only
//! reachable from the list, and "back" always returns to the list.

use serde::Serialize;

use crate::core::dataset::{
    filter_by_description, AudienceIndex, AudienceRecord, DataProvider, DatasetVersion,
};
use crate::error::{Nl2audError, Result};

/// Which sub-view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    /// Card list
    #[default]
    None,
    /// Details page of the focused audience
    Details,
    /// Attributes page of the focused audience
    Attributes,
}

impl std::fmt::Display for ActiveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActiveView::None => "list",
            ActiveView::Details => "details",
            ActiveView::Attributes => "attributes",
        };
        write!(f, "{}", name)
    }
}

/// Internal view with the focused index attached, so a focus can only
/// exist while a detail page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum View {
    #[default]
    List,
    Details(AudienceIndex),
    Attributes(AudienceIndex),
}

/// Ephemeral navigation state for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    selected_description: Option<String>,
    view: View,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_description(&self) -> Option<&str> {
        self.selected_description.as_deref()
    }

    pub fn active_view(&self) -> ActiveView {
        match self.view {
            View::List => ActiveView::None,
            View::Details(_) => ActiveView::Details,
            View::Attributes(_) => ActiveView::Attributes,
        }
    }

    pub fn focused_index(&self) -> Option<AudienceIndex> {
        match self.view {
            View::List => None,
            View::Details(index) | View::Attributes(index) => Some(index),
        }
    }

    /// Whether the card list is showing
    pub fn is_list(&self) -> bool {
        self.view == View::List
    }
}

/// Drives navigation between the list and the detail pages.
///
/// Holds the active dataset version next to the navigation state so the
/// version survives every view switch. All data reads go straight to the
/// provider.
#[derive(Debug)]
pub struct ViewController<P> {
    provider: P,
    version: DatasetVersion,
    state: NavigationState,
}

impl<P: DataProvider> ViewController<P> {
    pub fn new(provider: P, version: DatasetVersion) -> Self {
        Self {
            provider,
            version,
            state: NavigationState::new(),
        }
    }

    pub fn version(&self) -> DatasetVersion {
        self.version
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Choose the dataset that subsequent reads use
    pub fn select_dataset(&mut self, version: DatasetVersion) {
        if self.version != version {
            tracing::info!("Dataset switched: {} -> {}", self.version, version);
        }
        self.version = version;
    }

    /// Read the whole active dataset
    pub fn dataset(&self) -> Result<Vec<AudienceRecord>> {
        self.provider.load_dataset(self.version)
    }

    /// Select a description and return the rows matching it exactly.
    ///
    /// An unknown description yields an empty result rather than an error.
    pub fn select_description(&mut self, text: &str) -> Result<Vec<AudienceRecord>> {
        let records = self.dataset()?;
        let matching = filter_by_description(&records, text);
        if matching.is_empty() {
            tracing::debug!("No row in {} matches description {:?}", self.version, text);
        }
        self.state.selected_description = Some(text.to_string());
        Ok(matching)
    }

    /// Open the details page of an audience
    pub fn show_details(&mut self, index: AudienceIndex) -> Result<()> {
        self.ensure_list("show details")?;
        self.state.view = View::Details(index);
        tracing::info!("Showing details for audience {}", index);
        Ok(())
    }

    /// Open the attributes page of an audience
    pub fn show_attributes(&mut self, index: AudienceIndex) -> Result<()> {
        self.ensure_list("show attributes")?;
        self.state.view = View::Attributes(index);
        tracing::info!("Showing attributes for audience {}", index);
        Ok(())
    }

    /// Return from a detail page to the list
    pub fn go_back(&mut self) -> Result<()> {
        if self.state.is_list() {
            return Err(self.rejected("go back"));
        }
        self.state.view = View::List;
        tracing::info!("Back to audience list");
        Ok(())
    }

    fn ensure_list(&self, action: &'static str) -> Result<()> {
        if self.state.is_list() {
            Ok(())
        } else {
            Err(self.rejected(action))
        }
    }

    fn rejected(&self, action: &'static str) -> Nl2audError {
        let from = self.state.active_view();
        tracing::warn!("Rejected navigation: {} from {} view", action, from);
        Nl2audError::InvalidTransition { from, action }
    }
}
