//! Server response envelope.

use serde::{Deserialize, Serialize};

/// The `{code, message, data}` wrapper the server puts around most bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}
