//! Contract tests for the widget → host view frame schema
