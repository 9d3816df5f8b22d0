//! State shared with the home page's component subtree.

use serde::{Deserialize, Serialize};

use crate::config::ResolvedConfig;

/// Page shown in the preview pane when nothing has been persisted yet.
pub const DEFAULT_PREVIEW_PAGE: &str = "/dev/base-page";

/// Which view the embedded preview pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewMode {
    #[default]
    Closed,
    /// Showing the sample named by `HomeState::selected_sample_id`.
    Sample,
    /// Showing a page that is not tied to any sample.
    NoSample,
}

impl PreviewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewMode::Closed => "closed",
            PreviewMode::Sample => "sample",
            PreviewMode::NoSample => "no-sample",
        }
    }
}

/// One instance per mounted provider.
///
/// `service_url` and `database_name` are fixed at mount; no action touches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeState {
    pub service_url: String,
    pub database_name: String,
    pub preview_page_path: String,
    pub preview_mode: PreviewMode,
    pub selected_sample_id: Option<String>,
}

impl HomeState {
    /// Build the mount-time state. An absent or empty stored page falls back
    /// to [`DEFAULT_PREVIEW_PAGE`].
    pub fn initial(config: &ResolvedConfig, stored_page: Option<String>) -> Self {
        let preview_page_path = stored_page
            .filter(|page| !page.is_empty())
            .unwrap_or_else(|| DEFAULT_PREVIEW_PAGE.to_string());

        Self {
            service_url: config.service_url.clone(),
            database_name: config.database_name.clone(),
            preview_page_path,
            preview_mode: PreviewMode::Closed,
            selected_sample_id: None,
        }
    }

    /// `Sample` iff a sample is selected.
    pub fn is_consistent(&self) -> bool {
        (self.preview_mode == PreviewMode::Sample) == self.selected_sample_id.is_some()
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::initial(&ResolvedConfig::default(), None)
    }
}
