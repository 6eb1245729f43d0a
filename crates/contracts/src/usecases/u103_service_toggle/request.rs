use serde::{Deserialize, Serialize};

/// Request for `POST /enable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableRequest {
    pub enabled: bool,
}
