//! Unit tests for strsafe modules
//!
//! These tests exercise the public API without spawning the binary.

mod test_charset;
mod test_config;
mod test_error_paths;
mod test_reverse;
