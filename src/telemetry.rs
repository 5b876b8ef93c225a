//! Telemetry & Observability
//!
//! Structured logging for the CLI. Output goes to stderr so stdout stays
//! reserved for results. RUST_LOG takes precedence over the configured level.

use crate::charset::CharClass;
use crate::substring::safe_substring_to_index;
use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Longest input echoed into a log line, in characters.
pub const LOG_PREVIEW_CHARS: usize = 64;

/// Initialize tracing, honouring RUST_LOG before `default_filter`.
pub fn init_tracing(default_filter: &str, json: bool) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    init_tracing_with_filter(&filter, json);
}

/// Initialize with custom filter string
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    // Skip if already initialized
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter_layer = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

        if json {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(false)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt_layer)
                .try_init();
        } else {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_level(true)
                .compact()
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt_layer)
                .try_init();
        }
    });
}

/// Escape anything in `s` that could split or restyle a log line: control
/// characters, every `[:newline:]` member (U+2028 and U+2029 included) and
/// bidi overrides. Escapes use Rust syntax (`\n`, `\u{1b}`).
pub fn sanitize_for_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if needs_escape(c) {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

fn needs_escape(c: char) -> bool {
    CharClass::Control.contains(c)
        || CharClass::Newlines.contains(c)
        || matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
}

/// Truncated, sanitized rendering of user input for log fields.
pub fn log_preview(s: &str) -> String {
    let head = safe_substring_to_index(s, LOG_PREVIEW_CHARS);
    if head.len() < s.len() {
        format!("{}…", sanitize_for_log(head))
    } else {
        sanitize_for_log(head)
    }
}
