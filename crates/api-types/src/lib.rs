//! Request/response bodies for the mutation endpoints.

use serde::{Deserialize, Serialize};

/// Body of `/create/folder`, `/create/file` and `/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Directory that holds (or will hold) the entry.
    pub path: String,
    pub name: String,
}

/// Body of `/rename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub path: String,
    pub name: String,
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_payload_shape() {
        let json = serde_json::to_string(&SuccessResponse::ok()).expect("serialize success");
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn rename_request_uses_camel_case_new_name() {
        let request: RenameRequest =
            serde_json::from_str(r#"{"path":"/tmp","name":"a.txt","newName":"b.txt"}"#)
                .expect("deserialize rename request");

        assert_eq!(request.path, "/tmp");
        assert_eq!(request.name, "a.txt");
        assert_eq!(request.new_name, "b.txt");
    }

    #[test]
    fn entry_request_rejects_missing_name() {
        let result = serde_json::from_str::<EntryRequest>(r#"{"path":"/tmp"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn entry_request_rejects_non_string_path() {
        let result = serde_json::from_str::<EntryRequest>(r#"{"path":42,"name":"x"}"#);
        assert!(result.is_err());
    }
}
