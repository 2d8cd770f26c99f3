// Response body types for the non-detection endpoints

use serde::Serialize;
use std::collections::BTreeMap;

/// Body of every GET response
#[derive(Debug, Serialize, Clone)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    /// ISO-8601, generated per request
    pub timestamp: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl StatusResponse {
    pub fn now() -> Self {
        Self::at(chrono::Local::now())
    }

    pub fn at(time: chrono::DateTime<chrono::Local>) -> Self {
        let mut endpoints = BTreeMap::new();
        endpoints.insert(
            "face_detect",
            "POST /face/v1.0/detect?returnFaceAttributes=age,gender,headPose,smile",
        );

        Self {
            status: "ok",
            message: "Mock Face API Server is running",
            timestamp: time.to_rfc3339(),
            endpoints,
        }
    }
}

/// Body of 404 and 501 responses
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found(path: &str) -> Self {
        Self {
            error: "Not Found".to_string(),
            message: format!("Unknown endpoint: {path}"),
        }
    }

    pub fn not_implemented(method: &str) -> Self {
        Self {
            error: "Not Implemented".to_string(),
            message: format!("Unsupported method: {method}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_keys() {
        let json = serde_json::to_value(StatusResponse::now()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["status", "message", "timestamp", "endpoints"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(json["status"], "ok");
        assert!(json["endpoints"]["face_detect"]
            .as_str()
            .unwrap()
            .starts_with("POST /face/v1.0/detect"));
    }

    #[test]
    fn test_timestamp_is_iso8601() {
        let status = StatusResponse::now();
        assert!(chrono::DateTime::parse_from_rfc3339(&status.timestamp).is_ok());
    }

    #[test]
    fn test_not_found_body() {
        let json = serde_json::to_string(&ErrorResponse::not_found("/unknown/path")).unwrap();
        assert_eq!(
            json,
            r#"{"error":"Not Found","message":"Unknown endpoint: /unknown/path"}"#
        );
    }
}
