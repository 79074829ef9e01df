//! Field integration tests
//!
//! Tests are split between the decomposition rules applied on assignment and
//! the position-based access and mutation API.

mod property_tests;
