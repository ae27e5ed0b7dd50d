//! Todo request payloads

use serde::Deserialize;

/// Body of POST /todo and PUT /todo/{id}.
///
/// The title is accepted as-is; empty titles are allowed.
#[derive(Debug, Deserialize)]
pub struct TodoTitleRequest {
    pub title: String,
}
