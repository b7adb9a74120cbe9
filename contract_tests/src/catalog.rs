//! Contract tests for the catalog entry schema
