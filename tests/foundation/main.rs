//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error, LookupTable, and naming helpers.

mod errors;
mod naming;
