use serde::{Deserialize, Serialize};

/// Confirmation body returned by `DELETE /jobs/{id}`.
///
/// The service is free to send anything here (or nothing); all fields are
/// optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
