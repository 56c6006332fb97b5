//! Feedback form and submission payload.

use serde::{Deserialize, Serialize};

/// Fields entered in the feedback form.
///
/// The host form marks every field required; nothing is re-validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub description: String,
}

/// Everything handed to a submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    #[serde(flatten)]
    pub form: FeedbackForm,
    /// Annotated screenshot as a `data:image/png;base64,...` URL
    pub screenshot: String,
}

impl FeedbackPayload {
    pub fn new(form: FeedbackForm, screenshot: String) -> Self {
        Self { form, screenshot }
    }
}
