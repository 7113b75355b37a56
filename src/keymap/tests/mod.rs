//! Keymap module tests
//!
//! - Parser tests (bind lines, modifiers, variables, errors)
//! - Conflict detection tests
//! - Loading and shortcut-building tests
