//! # Common Unit Tests
