//! Contract tests for the host → widget intent schema
