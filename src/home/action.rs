//! Actions accepted by the home store.
//!
//! `HomeAction` is the closed set the update function understands.
//! `RawAction` is the `{ "type": ..., "payload": ... }` shape actions take
//! when they arrive from outside the type system (JSON, the CLI). Converting
//! a raw action is the only place an unknown action can be detected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    /// Show a non-sample page and drop any selected sample.
    OpenNoSample,
    /// Show the given sample. The id is not validated.
    SelectSample(String),
    /// Change the page shown in the preview pane.
    SetPreviewPage(String),
}

impl HomeAction {
    pub const OPEN_NO_SAMPLE: &'static str = "OPEN_NO_SAMPLE";
    pub const SELECT_SAMPLE: &'static str = "SELECT_SAMPLE";
    pub const SET_PREVIEW_PAGE: &'static str = "SET_PREVIEW_PAGE";
    /// Older name for `SET_PREVIEW_PAGE`, still accepted from raw input.
    pub const SET_IFRAME_PAGE: &'static str = "SET_IFRAME_PAGE";

    pub fn kind(&self) -> &'static str {
        match self {
            HomeAction::OpenNoSample => Self::OPEN_NO_SAMPLE,
            HomeAction::SelectSample(_) => Self::SELECT_SAMPLE,
            HomeAction::SetPreviewPage(_) => Self::SET_PREVIEW_PAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>, payload: Option<Value>) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }
}

fn string_payload(raw: &RawAction) -> Result<String, Error> {
    match &raw.payload {
        Some(Value::String(s)) => Ok(s.clone()),
        other => Err(Error::UnknownAction(format!(
            "{} with payload {}",
            raw.kind,
            other
                .as_ref()
                .map(Value::to_string)
                .unwrap_or_else(|| "<none>".to_string())
        ))),
    }
}

impl TryFrom<RawAction> for HomeAction {
    type Error = Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            HomeAction::OPEN_NO_SAMPLE => Ok(HomeAction::OpenNoSample),
            HomeAction::SELECT_SAMPLE => string_payload(&raw).map(HomeAction::SelectSample),
            HomeAction::SET_PREVIEW_PAGE | HomeAction::SET_IFRAME_PAGE => {
                string_payload(&raw).map(HomeAction::SetPreviewPage)
            }
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

impl From<HomeAction> for RawAction {
    fn from(action: HomeAction) -> Self {
        let kind = action.kind();
        let payload = match action {
            HomeAction::OpenNoSample => None,
            HomeAction::SelectSample(id) => Some(Value::String(id)),
            HomeAction::SetPreviewPage(path) => Some(Value::String(path)),
        };
        RawAction::new(kind, payload)
    }
}
