//! # Widget Contract Tests
//!
//! This crate provides "golden" tests for the widget's serialized
//! boundaries to ensure they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Boundary shapes are written as code
//! - **Testability first**: Contract tests fail when interfaces change
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! Each boundary has a module with contract tests that verify:
//! - Intent payload shapes (host → widget)
//! - View frame shapes (widget → host)
//! - Catalog entry shapes (data source → widget)

pub mod catalog;
pub mod frames;
pub mod intents;

/// Common test helpers for contract validation
pub mod test_helpers {
    use serde::Serialize;
    use serde_json::Value;

    /// Serializes a boundary value to a JSON value for shape assertions
    pub fn to_value<T: Serialize>(value: &T) -> Value {
        serde_json::to_value(value).expect("Failed to serialize boundary value")
    }

    /// Verifies a JSON object exposes exactly the expected field names
    pub fn verify_fields(value: &Value, expected: &[&str]) {
        let object = value.as_object().expect("Expected a JSON object");
        let mut names: Vec<&str> = object.keys().map(String::as_str).collect();
        names.sort_unstable();
        let mut wanted = expected.to_vec();
        wanted.sort_unstable();
        assert_eq!(
            names, wanted,
            "Field set changed: expected {:?}, got {:?}",
            wanted, names
        );
    }
}
