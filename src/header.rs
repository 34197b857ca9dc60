//! Umbrella headers handed to the binding generator.
//!
//! An umbrella header pulls in every public ncurses header plus the panel,
//! menu and form extensions, then re-declares each entry of
//! [`ATTRIBUTE_SYMBOLS`](crate::symbol::ATTRIBUTE_SYMBOLS) as a typed
//! constant. Two flavours ship with the crate:
//!
//! - `wrapper.h` includes the system headers (`#include <ncurses.h>`).
//! - `assets/wrapper.h` is a template whose includes are rooted at
//!   [`INCLUDE_PLACEHOLDER`], for builds against headers outside the
//!   compiler's search path.
//!
//! Rendering is deterministic: the same configuration always produces the
//! same bytes, and the checked-in headers are tested against it.
//!
//! ## Example
//!
//! ```rust
//! use ncursesw_shim::header::UmbrellaHeader;
//!
//! let text = UmbrellaHeader::system().render();
//! assert!(text.contains("SHIM_TYPED_CONST(A_BOLD, attr_t);"));
//! ```

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::naming::{normalize_include_dir, EXPORT_PREFIX};
use crate::symbol::{AttrSymbol, ATTRIBUTE_SYMBOLS};

pub use crate::naming::{
    marked_symbols, substitute_include_dir, INCLUDE_PLACEHOLDER, MARKER_MACRO,
};

/// First line of every rendered header.
pub const BANNER: &str = "/* Generated by ncursesw-shim; do not edit. */";

/// C library headers included ahead of ncurses.
const PRELUDE_HEADERS: [&str; 2] = ["ctype.h", "locale.h"];

/// Header that carries the DLL import/export macros on Windows builds.
const DLL_HEADER: &str = "ncurses_dll.h";

/// Core ncurses header.
const CORE_HEADER: &str = "ncurses.h";

/// An ncurses extension library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Extension {
    /// Panel stacking library (`libpanelw`).
    Panel,
    /// Menu library (`libmenuw`).
    Menu,
    /// Form library (`libformw`).
    Form,
}

impl Extension {
    /// All extensions, in include order.
    pub const ALL: [Extension; 3] = [Extension::Panel, Extension::Menu, Extension::Form];

    /// The public header of the extension.
    pub const fn header(self) -> &'static str {
        match self {
            Extension::Panel => "panel.h",
            Extension::Menu => "menu.h",
            Extension::Form => "form.h",
        }
    }

    /// Base name of the wide-character library to link.
    pub const fn library(self) -> &'static str {
        match self {
            Extension::Panel => "panelw",
            Extension::Menu => "menuw",
            Extension::Form => "formw",
        }
    }
}

/// How library headers are referenced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncludeStyle {
    /// `#include <ncurses.h>`, resolved on the compiler's search path.
    System,
    /// `#include "<dir>/ncurses.h"`, preceded by `ncurses_dll.h`.
    Directory(String),
}

impl IncludeStyle {
    fn include_line(&self, header: &str) -> String {
        match self {
            IncludeStyle::System => format!("#include <{header}>"),
            IncludeStyle::Directory(dir) => {
                format!("#include \"{}/{header}\"", normalize_include_dir(dir))
            }
        }
    }
}

/// Configuration of an umbrella header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderConfig {
    /// How library headers are referenced.
    pub style: IncludeStyle,
    /// Extension libraries to include, in order.
    pub extensions: Vec<Extension>,
    /// Preprocessor definitions emitted before any include.
    pub defines: Vec<(String, String)>,
    /// Attributes to re-export.
    pub symbols: &'static [AttrSymbol],
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            style: IncludeStyle::System,
            extensions: Extension::ALL.to_vec(),
            // Wide-character declarations in curses.h are gated on this
            defines: vec![("_XOPEN_SOURCE_EXTENDED".to_string(), "1".to_string())],
            symbols: ATTRIBUTE_SYMBOLS,
        }
    }
}

impl HeaderConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the include style.
    pub fn with_style(mut self, style: IncludeStyle) -> Self {
        self.style = style;
        self
    }

    /// Restrict the extension libraries to `extensions`.
    pub fn with_extensions(mut self, extensions: &[Extension]) -> Self {
        self.extensions = extensions.to_vec();
        self
    }

    /// Add a preprocessor definition.
    pub fn with_define(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defines.push((name.into(), value.into()));
        self
    }

    /// Re-export a different attribute table.
    pub fn with_symbols(mut self, symbols: &'static [AttrSymbol]) -> Self {
        self.symbols = symbols;
        self
    }
}

/// A renderable umbrella header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UmbrellaHeader {
    config: HeaderConfig,
}

impl UmbrellaHeader {
    /// Create a header from a configuration.
    pub fn new(config: HeaderConfig) -> Self {
        Self { config }
    }

    /// The header shipped as `wrapper.h`.
    pub fn system() -> Self {
        Self::new(HeaderConfig::default())
    }

    /// The header shipped as `assets/wrapper.h`.
    pub fn template() -> Self {
        Self::new(
            HeaderConfig::default()
                .with_style(IncludeStyle::Directory(INCLUDE_PLACEHOLDER.to_string())),
        )
    }

    /// The configuration this header renders.
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Library headers in include order.
    pub fn library_headers(&self) -> Vec<&'static str> {
        let mut headers = Vec::with_capacity(self.config.extensions.len() + 2);
        if matches!(self.config.style, IncludeStyle::Directory(_)) {
            headers.push(DLL_HEADER);
        }
        headers.push(CORE_HEADER);
        headers.extend(self.config.extensions.iter().map(|ext| ext.header()));
        headers
    }

    /// Render the header text.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = vec![BANNER.to_string(), String::new()];

        for (name, value) in &self.config.defines {
            lines.push(format!("#define {name} {value}"));
        }
        lines.push(String::new());

        for header in PRELUDE_HEADERS {
            lines.push(IncludeStyle::System.include_line(header));
        }
        lines.push(String::new());

        for header in self.library_headers() {
            lines.push(self.config.style.include_line(header));
        }
        lines.push(String::new());

        lines.push(format!(
            "#define {MARKER_MACRO}(name, type) const type {EXPORT_PREFIX}##name = name"
        ));
        lines.push(String::new());

        for sym in self.config.symbols {
            lines.push(format!("{MARKER_MACRO}({}, {});", sym.source, sym.ty.c_name()));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Write the header to `path`, leaving an identical file untouched.
    ///
    /// Returns whether the file was written. Skipping identical content keeps
    /// the file's mtime stable, so cargo does not rerun dependent build steps.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let text = self.render();

        if fs::read_to_string(path).is_ok_and(|existing| existing == text) {
            shim_trace!("header {} is up to date", path.display());
            return Ok(false);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)?;
        shim_trace!(
            "wrote header {} ({} typed constants)",
            path.display(),
            self.config.symbols.len()
        );
        Ok(true)
    }
}
