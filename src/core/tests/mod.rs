//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Normalisation tests (aliases, combos, determinism)
//! - Declaration validation tests
//! - Listener chain tests (ordering, cancellation, re-entrancy)
//! - Shortcut table and input guard tests

#[cfg(test)]
mod filter_tests;
#[cfg(test)]
mod normalizer_tests;
#[cfg(test)]
mod shortcuts_tests;
