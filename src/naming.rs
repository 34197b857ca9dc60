//! Names and text conventions shared by the umbrella header, the bindgen
//! callbacks and the verification code.
//!
//! `build.rs` compiles this file as well, through `#[path]`, so it must only
//! depend on `std`.

/// Prefix that keeps the typed constant from colliding with the macro.
pub const EXPORT_PREFIX: &str = "shim_";

/// Name of the macro that declares one typed constant.
pub const MARKER_MACRO: &str = "SHIM_TYPED_CONST";

/// Placeholder for the include directory in the template header.
pub const INCLUDE_PLACEHOLDER: &str = "%include%";

/// Derive the typed constant's name from the macro name.
pub fn exported_name(source: &str) -> String {
    format!("{EXPORT_PREFIX}{source}")
}

/// Recover the macro name from a typed constant's name.
///
/// Returns `None` for names that do not carry the export prefix.
pub fn source_name(exported: &str) -> Option<&str> {
    exported
        .strip_prefix(EXPORT_PREFIX)
        .filter(|rest| !rest.is_empty())
}

/// Rename a generated item back to its macro name.
///
/// Only names whose macro `is_marked` are renamed; any other item that
/// happens to start with the export prefix keeps its name.
pub fn rename_marked(name: &str, is_marked: impl Fn(&str) -> bool) -> Option<String> {
    source_name(name)
        .filter(|source| is_marked(source))
        .map(str::to_owned)
}

/// Names declared through the marker macro in a header, in order.
pub fn marked_symbols(header: &str) -> Vec<&str> {
    header
        .lines()
        .filter_map(|line| line.trim().strip_prefix(MARKER_MACRO)?.strip_prefix('('))
        .filter_map(|args| args.split(',').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Normalise an include directory for use inside a quoted `#include`.
///
/// Backslashes become forward slashes, so Windows paths stay valid, and
/// trailing separators are dropped.
pub fn normalize_include_dir(dir: &str) -> String {
    dir.replace('\\', "/").trim_end_matches('/').to_string()
}

/// Resolve the include placeholder of a template header to `dir`.
pub fn substitute_include_dir(template: &str, dir: &str) -> String {
    template.replace(INCLUDE_PLACEHOLDER, &normalize_include_dir(dir))
}
