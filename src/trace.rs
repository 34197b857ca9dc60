//! # Tracing and Debugging Support
//!
//! A small trace facility for following header generation and binding
//! verification. These functions are only available when the `trace`
//! feature is enabled.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ncursesw_shim::trace::*;
//!
//! // Enable call tracing
//! trace(TRACE_CALLS);
//!
//! // Log a custom message
//! tracef("regenerating wrapper.h");
//!
//! // Get a string representation of attributes
//! let attr_str = traceattr(attr::A_BOLD | attr::A_UNDERLINE);
//! ```

use crate::attr;
use crate::symbol::ATTRIBUTE_SYMBOLS;
use crate::types::AttrT;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Trace level constants
// ============================================================================

/// Disable tracing.
pub const TRACE_DISABLE: u32 = 0x0000;

/// Trace shim calls: header rendering, writing and binding verification.
pub const TRACE_CALLS: u32 = 0x0020;

/// Trace the value of every attribute checked by binding verification.
pub const TRACE_ATTRS: u32 = 0x1000;

/// Maximum trace level - enables all trace features.
pub const TRACE_MAXIMUM: u32 = 0xFFFF;

/// Default trace file, created in the current directory.
pub const TRACE_FILE: &str = "trace";

// ============================================================================
// Global trace state
// ============================================================================

#[derive(Default)]
struct TraceState {
    /// Current trace level bitmask.
    level: u32,
    /// Trace output file.
    file: Option<File>,
}

static TRACE_STATE: OnceLock<Mutex<TraceState>> = OnceLock::new();

fn get_trace_state() -> MutexGuard<'static, TraceState> {
    let state = TRACE_STATE.get_or_init(|| Mutex::new(TraceState::default()));
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn open_trace_file(path: &Path) -> Option<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .ok()
}

// ============================================================================
// Main trace functions
// ============================================================================

/// Set the trace level, opening the `trace` file if needed.
///
/// The parameter is formed by OR'ing values from the `TRACE_*` constants.
/// `TRACE_DISABLE` closes the file.
pub fn trace(param: u32) {
    let mut state = get_trace_state();

    if param != TRACE_DISABLE && state.file.is_none() {
        state.file = open_trace_file(Path::new(TRACE_FILE));
    } else if param == TRACE_DISABLE {
        state.file = None;
    }

    state.level = param;
}

/// Set the trace level and send output to `path`.
pub fn trace_to(param: u32, path: impl AsRef<Path>) {
    let mut state = get_trace_state();
    state.file = if param == TRACE_DISABLE {
        None
    } else {
        open_trace_file(path.as_ref())
    };
    state.level = param;
}

/// Get the current trace level.
pub fn curses_trace() -> u32 {
    get_trace_state().level
}

/// Check whether a trace flag is enabled.
pub fn trace_enabled(flag: u32) -> bool {
    let state = get_trace_state();
    state.level != TRACE_DISABLE && (state.level & flag) != 0
}

/// Write a message to the trace file.
pub fn tracef(msg: &str) {
    let mut state = get_trace_state();

    if state.level == TRACE_DISABLE {
        return;
    }

    if let Some(ref mut file) = state.file {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros())
            .unwrap_or(0);

        let _ = writeln!(file, "[{:012}] {}", timestamp, msg);
        let _ = file.flush();
    }
}

// ============================================================================
// Attribute tracing
// ============================================================================

/// Return a string representation of video attributes.
///
/// Single-bit attributes are named after the re-exported macros; the color
/// pair field is shown as `COLOR_PAIR(n)`.
pub fn traceattr(attr: AttrT) -> String {
    let mut parts: Vec<String> = ATTRIBUTE_SYMBOLS
        .iter()
        .filter(|sym| sym.value.count_ones() == 1 && attr & sym.value != 0)
        .map(|sym| sym.source.to_string())
        .collect();

    let pair = attr::pair_number(attr);
    if pair != 0 {
        parts.push(format!("COLOR_PAIR({})", pair));
    }

    if parts.is_empty() {
        "A_NORMAL".to_string()
    } else {
        parts.join("|")
    }
}

// ============================================================================
// Tests
// ============================================================================
