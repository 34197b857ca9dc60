//! Checking generated bindings against the attribute table.
//!
//! After bindgen has processed the umbrella header, every entry of
//! [`ATTRIBUTE_SYMBOLS`] must come out as a `pub const` with the identical
//! type and bit pattern. This module reads the generated Rust source back
//! in and holds it to that. It also scans a library header for the
//! attribute macros it defines, so the hand-maintained table can be
//! compared with what a given ncurses version actually ships.
//!
//! ## Example
//!
//! ```rust
//! use ncursesw_shim::bindings::{parse_constants, verify};
//! use ncursesw_shim::symbol::lookup;
//!
//! let generated = "pub const A_BOLD: attr_t = 2097152;\n";
//! let set = parse_constants(generated).unwrap();
//!
//! let bold = std::slice::from_ref(lookup("A_BOLD").unwrap());
//! let report = verify(bold, &set).unwrap();
//! assert_eq!(report.checked, 1);
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::naming;
use crate::symbol::{self, AttrSymbol, ATTRIBUTE_SYMBOLS};
use crate::types::TypedConstant;

/// Prefix shared by every attribute macro in `curses.h`.
pub const ATTRIBUTE_MACRO_PREFIX: &str = "A_";

fn const_item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?m)^\s*pub\s+const\s+([A-Za-z_][A-Za-z0-9_]*)\s*:\s*((?:::)?[A-Za-z_][A-Za-z0-9_]*(?:::[A-Za-z_][A-Za-z0-9_]*)*)\s*=\s*([^;]+);",
        )
        .expect("const item pattern is valid")
    })
}

fn attribute_define_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*#[ \t]*define[ \t]+(A_[A-Z0-9_]+)\b")
            .expect("define pattern is valid")
    })
}

/// Integer suffixes bindgen and C sources may attach to a literal.
const LITERAL_SUFFIXES: [&str; 14] = [
    "usize", "isize", "u128", "i128", "u64", "i64", "u32", "i32", "u16", "i16", "u8", "i8", "ULL",
    "UL",
];

/// Parse an integer literal as written in generated code.
///
/// Accepts decimal, hex, octal and binary, `_` separators, a leading minus
/// sign, and a trailing type suffix. Negative values are kept as their
/// two's complement bit pattern.
pub fn parse_integer_literal(literal: &str) -> Option<u64> {
    let mut text: String = literal.trim().chars().filter(|c| *c != '_').collect();

    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        text = inner.trim().to_string();
    }

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim()),
        None => (false, text.as_str()),
    };

    let (radix, digits) = if let Some(hex) = body.strip_prefix("0x").or(body.strip_prefix("0X")) {
        (16, hex)
    } else if let Some(bin) = body.strip_prefix("0b") {
        (2, bin)
    } else if let Some(oct) = body.strip_prefix("0o") {
        (8, oct)
    } else {
        (10, body)
    };

    let mut digits = digits;
    for suffix in LITERAL_SUFFIXES {
        if let Some(stripped) = digits.strip_suffix(suffix) {
            digits = stripped;
            break;
        }
    }
    // C-style suffixes; none of these letters is a hex digit
    digits = digits.trim_end_matches(['u', 'U', 'l', 'L']);

    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    Some(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// The integer constants found in a generated bindings file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstantSet {
    constants: BTreeMap<String, TypedConstant>,
}

impl ConstantSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constant, rejecting a second declaration of the same name.
    pub fn insert(&mut self, constant: TypedConstant) -> Result<()> {
        match self.constants.entry(constant.name.clone()) {
            btree_map::Entry::Occupied(_) => Err(Error::DuplicateSymbol(constant.name)),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(constant);
                Ok(())
            }
        }
    }

    /// Look a constant up by name.
    pub fn get(&self, name: &str) -> Option<&TypedConstant> {
        self.constants.get(name)
    }

    /// Number of constants.
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Iterate over constants in name order.
    pub fn iter(&self) -> impl Iterator<Item = &TypedConstant> {
        self.constants.values()
    }

    /// Find the generated constant for a table entry.
    ///
    /// Bindings built with the rename callback carry the macro name; raw
    /// bindings still carry the prefixed name.
    pub fn find_symbol(&self, sym: &AttrSymbol) -> Option<&TypedConstant> {
        self.get(sym.source).or_else(|| self.get(&sym.exported()))
    }
}

/// Read every integer `pub const` item out of generated Rust source.
///
/// Items declared with one of the shim's C types must carry an integer
/// literal; other constants with non-integer initializers (strings,
/// floats) are skipped.
pub fn parse_constants(source: &str) -> Result<ConstantSet> {
    let mut set = ConstantSet::new();

    for caps in const_item_regex().captures_iter(source) {
        let name = &caps[1];
        let ty = &caps[2];
        let literal = caps[3].trim();

        match parse_integer_literal(literal) {
            Some(value) => set.insert(TypedConstant::new(name, ty, value))?,
            None if crate::types::CType::from_binding_name(ty).is_some() => {
                return Err(Error::InvalidLiteral {
                    name: name.to_string(),
                    literal: literal.to_string(),
                });
            }
            None => {}
        }
    }

    shim_trace!("parsed {} integer constants", set.len());
    Ok(set)
}

/// Rename a generated item from its typed-constant name to the macro name.
///
/// Only names derived from an entry of `symbols` are renamed. Any other
/// item keeps its name, including library functions that happen to start
/// with the export prefix. The build script's bindgen callback applies the
/// same rule through [`naming::rename_marked`] to the names marked in the
/// umbrella header.
pub fn rename_item(name: &str, symbols: &[AttrSymbol]) -> Option<String> {
    naming::rename_marked(name, |source| symbols.iter().any(|sym| sym.source == source))
}

/// Outcome of a successful verification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Table entries found with the expected type and value.
    pub checked: usize,
    /// Attribute constants in the bindings that the table does not list.
    pub unlisted: Vec<String>,
}

/// Check that every table entry appears in `set` with the expected type and
/// value.
///
/// The first offending entry, in table order, is returned as the error.
pub fn verify(symbols: &[AttrSymbol], set: &ConstantSet) -> Result<VerifyReport> {
    for sym in symbols {
        let found = set
            .find_symbol(sym)
            .ok_or_else(|| Error::MissingSymbol(sym.source.to_string()))?;

        if found.c_type() != Some(sym.ty) {
            return Err(Error::TypeMismatch {
                name: sym.source.to_string(),
                expected: sym.ty.c_name().to_string(),
                found: found.ty.clone(),
            });
        }

        let expected = u64::from(sym.value);
        if found.value != expected {
            return Err(Error::ValueMismatch {
                name: sym.source.to_string(),
                expected,
                found: found.value,
            });
        }

        #[cfg(feature = "trace")]
        if crate::trace::trace_enabled(crate::trace::TRACE_ATTRS) {
            crate::trace::tracef(&format!(
                "{} = {:#x} {}",
                sym.source,
                sym.value,
                crate::trace::traceattr(sym.value)
            ));
        }
    }

    let unlisted = set
        .iter()
        .map(|c| symbol::source_name(&c.name).unwrap_or(&c.name))
        .filter(|name| name.starts_with(ATTRIBUTE_MACRO_PREFIX))
        .filter(|name| !symbols.iter().any(|sym| sym.source == *name))
        .map(str::to_owned)
        .collect();

    shim_trace!("verified {} typed constants", symbols.len());
    Ok(VerifyReport {
        checked: symbols.len(),
        unlisted,
    })
}

/// Verify a generated bindings file against the full attribute table.
pub fn verify_file(path: impl AsRef<Path>) -> Result<VerifyReport> {
    let source = fs::read_to_string(path.as_ref())?;
    verify(ATTRIBUTE_SYMBOLS, &parse_constants(&source)?)
}

/// Names of every attribute macro `#define`d in a library header, in order
/// of first appearance.
pub fn scan_header_attributes(header: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in attribute_define_regex().captures_iter(header) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// How the attribute table lines up with a library's header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Macros the library defines that the table does not re-export.
    pub unlisted: Vec<String>,
    /// Table entries the library does not define.
    pub unavailable: Vec<String>,
}

impl Coverage {
    /// Whether the table and the header agree exactly.
    pub fn is_exhaustive(&self) -> bool {
        self.unlisted.is_empty() && self.unavailable.is_empty()
    }
}

/// Compare the table with the attribute macros a header defines.
pub fn coverage(symbols: &[AttrSymbol], header_names: &[String]) -> Coverage {
    let unlisted = header_names
        .iter()
        .filter(|name| !symbols.iter().any(|sym| sym.source == name.as_str()))
        .cloned()
        .collect();
    let unavailable = symbols
        .iter()
        .filter(|sym| !header_names.iter().any(|name| name == sym.source))
        .map(|sym| sym.source.to_string())
        .collect();

    Coverage {
        unlisted,
        unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr;
    use crate::symbol::lookup;

    const GENERATED: &str = r#"
pub const _XOPEN_SOURCE_EXTENDED: u32 = 1;
pub const NCURSES_VERSION: &[u8; 4] = b"6.4\0";
pub const KEY_CODE_YES: u32 = 256;
pub type attr_t = chtype;
pub const A_NORMAL: attr_t = 0;
pub const A_BOLD: attr_t = 2097152;
pub const A_ITALIC: attr_t = 2147483648;
"#;

    fn symbols(names: &[&str]) -> Vec<AttrSymbol> {
        names.iter().map(|n| *lookup(n).unwrap()).collect()
    }

    #[test]
    fn test_parse_integer_literal() {
        assert_eq!(parse_integer_literal("2097152"), Some(2_097_152));
        assert_eq!(parse_integer_literal("0x200000"), Some(0x20_0000));
        assert_eq!(parse_integer_literal("4294967040u32"), Some(0xFFFF_FF00));
        assert_eq!(parse_integer_literal("1_000"), Some(1000));
        assert_eq!(parse_integer_literal("(256)"), Some(256));
        assert_eq!(parse_integer_literal("255UL"), Some(255));
        assert_eq!(parse_integer_literal("0xFFu"), Some(0xFF));
        assert_eq!(parse_integer_literal("-1"), Some(u64::MAX));
        assert_eq!(parse_integer_literal("1.5"), None);
        assert_eq!(parse_integer_literal("b\"x\\0\""), None);
    }

    #[test]
    fn test_parse_constants() {
        let set = parse_constants(GENERATED).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.get("A_BOLD").map(|c| c.value), Some(u64::from(attr::A_BOLD)));
        assert_eq!(set.get("A_BOLD").map(|c| c.ty.as_str()), Some("attr_t"));
        assert!(set.get("NCURSES_VERSION").is_none());
    }

    #[test]
    fn test_parse_constants_rejects_duplicates() {
        let source = "pub const A_BOLD: attr_t = 1;\npub const A_BOLD: attr_t = 1;\n";
        assert_eq!(
            parse_constants(source),
            Err(Error::DuplicateSymbol("A_BOLD".into()))
        );
    }

    #[test]
    fn test_parse_constants_rejects_bad_attr_literal() {
        let source = "pub const A_BOLD: attr_t = NCURSES_BITS(1, 13);\n";
        assert!(matches!(
            parse_constants(source),
            Err(Error::InvalidLiteral { .. })
        ));
    }

    #[test]
    fn test_verify_accepts_matching_bindings() {
        let set = parse_constants(GENERATED).unwrap();
        let report = verify(&symbols(&["A_NORMAL", "A_BOLD", "A_ITALIC"]), &set).unwrap();
        assert_eq!(report.checked, 3);
        assert!(report.unlisted.is_empty());
    }

    #[test]
    fn test_verify_accepts_unrenamed_bindings() {
        let set = parse_constants("pub const shim_A_BOLD: attr_t = 2097152;\n").unwrap();
        assert!(verify(&symbols(&["A_BOLD"]), &set).is_ok());
    }

    #[test]
    fn test_verify_reports_missing_symbol() {
        let set = parse_constants(GENERATED).unwrap();
        assert_eq!(
            verify(&symbols(&["A_BOLD", "A_UNDERLINE"]), &set),
            Err(Error::MissingSymbol("A_UNDERLINE".into()))
        );
    }

    #[test]
    fn test_verify_reports_value_mismatch() {
        let set = parse_constants("pub const A_BOLD: attr_t = 1048576;\n").unwrap();
        assert_eq!(
            verify(&symbols(&["A_BOLD"]), &set),
            Err(Error::ValueMismatch {
                name: "A_BOLD".into(),
                expected: 0x20_0000,
                found: 0x10_0000,
            })
        );
    }

    #[test]
    fn test_verify_reports_type_mismatch() {
        let set = parse_constants("pub const A_BOLD: u32 = 2097152;\n").unwrap();
        assert!(matches!(
            verify(&symbols(&["A_BOLD"]), &set),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_lists_unknown_attributes() {
        let source = "pub const A_BOLD: attr_t = 2097152;\npub const shim_A_SPARKLE: attr_t = 1;\n";
        let set = parse_constants(source).unwrap();
        let report = verify(&symbols(&["A_BOLD"]), &set).unwrap();
        assert_eq!(report.unlisted, vec!["A_SPARKLE".to_string()]);
    }

    #[test]
    fn test_rename_item() {
        assert_eq!(
            rename_item("shim_A_BOLD", ATTRIBUTE_SYMBOLS).as_deref(),
            Some("A_BOLD")
        );
        assert_eq!(rename_item("wattr_on", ATTRIBUTE_SYMBOLS), None);
        assert_eq!(rename_item("A_BOLD", ATTRIBUTE_SYMBOLS), None);
    }

    #[test]
    fn test_rename_item_leaves_unmarked_prefixed_names() {
        // A library function that starts with the prefix is not a typed constant
        assert_eq!(rename_item("shim_wattr_on", ATTRIBUTE_SYMBOLS), None);
        // Neither is an attribute the given table does not list
        assert_eq!(rename_item("shim_A_ITALIC", &symbols(&["A_BOLD"])), None);
    }

    #[test]
    fn test_rename_item_agrees_with_header_marks() {
        let header = crate::header::UmbrellaHeader::system().render();
        let marked = naming::marked_symbols(&header);
        let from_header = |name: &str| naming::rename_marked(name, |s| marked.contains(&s));

        for name in ["shim_A_BOLD", "shim_A_ITALIC", "shim_wattr_on", "shim_", "A_DIM", "COLS"] {
            assert_eq!(rename_item(name, ATTRIBUTE_SYMBOLS), from_header(name), "{name}");
        }
        for sym in ATTRIBUTE_SYMBOLS {
            let exported = sym.exported();
            assert_eq!(from_header(&exported).as_deref(), Some(sym.source));
        }
    }

    #[test]
    fn test_verify_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bindings.rs");
        let mut source = String::new();
        for decl in crate::symbol::declarations() {
            source.push_str(&format!("pub const {}: {} = {};\n", decl.name, decl.ty, decl.value));
        }
        fs::write(&path, source).unwrap();

        let report = verify_file(&path).unwrap();
        assert_eq!(report.checked, ATTRIBUTE_SYMBOLS.len());

        assert_eq!(
            verify_file(dir.path().join("missing.rs")),
            Err(Error::Io(std::io::ErrorKind::NotFound))
        );
    }

    #[test]
    fn test_scan_and_coverage() {
        let header = "\
#define A_NORMAL\t(1U - 1U)
#define A_BOLD\t\tNCURSES_BITS(1U,13)
 #  define A_ITALIC NCURSES_BITS(1U,23)
#define A_BOLD NCURSES_BITS(1U,13)
#define WA_BOLD A_BOLD
#define ACS_ULCORNER NCURSES_ACS('l')
";
        let names = scan_header_attributes(header);
        assert_eq!(names, vec!["A_NORMAL", "A_BOLD", "A_ITALIC"]);

        let table = symbols(&["A_NORMAL", "A_BOLD", "A_UNDERLINE"]);
        let cov = coverage(&table, &names);
        assert_eq!(cov.unlisted, vec!["A_ITALIC".to_string()]);
        assert_eq!(cov.unavailable, vec!["A_UNDERLINE".to_string()]);
        assert!(!cov.is_exhaustive());

        let exact = coverage(&symbols(&["A_NORMAL", "A_BOLD", "A_ITALIC"]), &names);
        assert!(exact.is_exhaustive());
    }
}
