use serde::{Deserialize, Serialize};

/// Response of `POST /enable`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnableResponse {
    /// "success" when the switch was applied
    #[serde(default)]
    pub status: String,

    /// State of the service after the call
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_reply() {
        let resp: EnableResponse =
            serde_json::from_str(r#"{"status":"success","enabled":true}"#).unwrap();
        assert_eq!(resp.status, "success");
        assert!(resp.enabled);
    }
}
