//! # ncursesw-shim
//!
//! Umbrella headers and typed attribute constants for generating Rust
//! bindings to ncursesw and its panel, menu and form libraries.
//!
//! ncurses defines its video attributes (`A_BOLD`, `A_COLOR`, ...) as
//! macros with no type of their own. A binding generator cannot always give
//! such a macro the right type, so the umbrella header re-declares each one
//! as `const attr_t shim_<NAME> = <NAME>;` and the generator sees an ordinary
//! typed declaration instead.
//!
//! ## Features
//!
//! - **native**: run bindgen against the system ncursesw headers at build
//!   time and expose the result as [`sys`]
//! - **trace**: write shim activity to a trace file
//!
//! ## Example
//!
//! ```rust
//! use ncursesw_shim::*;
//!
//! // The typed constant emitted for A_BOLD, and the value it must hold
//! let bold = symbol::lookup("A_BOLD").unwrap();
//! assert_eq!(bold.exported(), "shim_A_BOLD");
//! assert_eq!(bold.value, attr::A_BOLD);
//!
//! // The header handed to bindgen
//! let header = UmbrellaHeader::system().render();
//! assert!(header.contains("SHIM_TYPED_CONST(A_BOLD, attr_t);"));
//! ```

#![warn(missing_docs)]

/// Write a formatted line to the trace file when call tracing is on.
macro_rules! shim_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        {
            if $crate::trace::trace_enabled($crate::trace::TRACE_CALLS) {
                $crate::trace::tracef(&format!($($arg)*));
            }
        }
    };
}

pub mod attr;
pub mod bindings;
pub mod error;
pub mod header;
pub mod naming;
pub mod symbol;
pub mod types;

#[cfg(feature = "trace")]
pub mod trace;

#[cfg(feature = "native")]
pub mod sys;

// Re-export commonly used items at crate root
pub use attr::Attribute;
pub use bindings::{parse_constants, verify, ConstantSet, VerifyReport};
pub use error::{Error, Result};
pub use header::{Extension, HeaderConfig, IncludeStyle, UmbrellaHeader};
pub use symbol::{AttrSymbol, ATTRIBUTE_SYMBOLS, EXPORT_PREFIX};
pub use types::*;

/// The ncursesw-shim version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
