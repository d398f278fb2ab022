//! Exit codes of the `perfgate` binary. These are part of the public contract.
//!
//! Errors carrying a [`perfgate_core::ReportError`] exit with its
//! `exit_code()`; a selection without builds exits with 3.

use perfgate_core::errors::EXIT_INTERNAL;

pub const SUCCESS: i32 = 0;
pub const INTERNAL_ERROR: i32 = EXIT_INTERNAL; // Config, store or I/O failure
