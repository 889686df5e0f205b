//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary, reducing linking
//! overhead.
//!
//! Structure:
//! - helpers: Builders and a caller-side marker store
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests

mod helpers;
mod unit;
