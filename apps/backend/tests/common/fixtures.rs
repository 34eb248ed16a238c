//! Test fixtures and factory functions for request bodies.

use serde_json::json;
use uuid::Uuid;

/// Create an analyze request body.
pub fn analyze_request(target: &str, recognized: &str) -> serde_json::Value {
    json!({ "target_word": target, "recognized_word": recognized })
}

/// Create an analyze request body with an explicit feedback locale.
pub fn analyze_request_in(target: &str, recognized: &str, locale: &str) -> serde_json::Value {
    json!({ "target_word": target, "recognized_word": recognized, "locale": locale })
}

/// Create a session request body.
pub fn create_session_request(
    vocabulary_id: &str,
    target: &str,
    recognized: &str,
    language: Option<&str>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("vocabulary_id".to_string(), json!(vocabulary_id));
    obj.insert("target_word".to_string(), json!(target));
    obj.insert("recognized_word".to_string(), json!(recognized));
    if let Some(l) = language {
        obj.insert("language".to_string(), json!(l));
    }
    serde_json::Value::Object(obj)
}

/// Generate a unique vocabulary id to keep assertions unambiguous.
pub fn unique_vocabulary_id(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}
