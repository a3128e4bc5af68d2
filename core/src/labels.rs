//! User-facing strings the screen hands to the view.

use serde::Deserialize;

/// Texts for the busy indicator and the error dialog.
///
/// Loaded from the `[labels]` table of the configuration file; any key left
/// out keeps its default.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    pub progress_title: String,
    pub progress_message: String,
    pub alert_title: String,
    pub alert_error: String,
    pub alert_ok: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            progress_title: "Please wait".to_string(),
            progress_message: "Loading states...".to_string(),
            alert_title: "Error".to_string(),
            alert_error: "Unable to retrieve the list of states.".to_string(),
            alert_ok: "OK".to_string(),
        }
    }
}
