//! bindgen configuration for the umbrella header.
//!
//! Compiled into `build.rs` and into the native integration tests, so both
//! run the same callbacks. The including crate provides a `naming` module
//! at its root.

use std::collections::HashSet;
use std::path::Path;

use bindgen::callbacks::{MacroParsingBehavior, ParseCallbacks};

use super::naming;

/// Renames typed constants back to their macro names and hides the
/// macros themselves, so the typed constant is their only definition.
#[derive(Debug)]
pub struct TypedConstants {
    marked: HashSet<String>,
}

impl TypedConstants {
    /// Callbacks for the names an umbrella header marks.
    pub fn from_header(header: &str) -> Self {
        Self {
            marked: naming::marked_symbols(header)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl ParseCallbacks for TypedConstants {
    fn will_parse_macro(&self, name: &str) -> MacroParsingBehavior {
        if self.marked.contains(name) {
            MacroParsingBehavior::Ignore
        } else {
            MacroParsingBehavior::Default
        }
    }

    fn item_name(&self, original_item_name: &str) -> Option<String> {
        naming::rename_marked(original_item_name, |name| self.marked.contains(name))
    }
}

/// A bindgen builder for the umbrella header at `header`, whose text is
/// `header_text`.
pub fn builder(header: &Path, header_text: &str) -> bindgen::Builder {
    bindgen::Builder::default()
        .header(header.to_string_lossy())
        // Byte-identical output for identical input
        .formatter(bindgen::Formatter::Prettyplease)
        // clashes with the std definition and breaks layout tests
        .blocklist_type("max_align_t")
        // declared in `sys`
        .blocklist_function("ripoffline")
        .parse_callbacks(Box::new(TypedConstants::from_header(header_text)))
}
