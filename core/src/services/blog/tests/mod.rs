//! Tests for blog service
