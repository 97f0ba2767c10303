use serde::{Deserialize, Serialize};

/// Liveness reply for `GET /ping`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pong {
    pub message: String,
}

impl Default for Pong {
    fn default() -> Self {
        Self { message: "pong".to_string() }
    }
}
