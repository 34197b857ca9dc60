//! The table of attribute macros re-exported as typed constants.
//!
//! Binding generators evaluate preprocessor macros on their own and cannot
//! always infer a type for bit-field constants built with `NCURSES_BITS`.
//! Every entry here is therefore re-declared in the umbrella header as
//! `const attr_t shim_<NAME> = <NAME>;`, which the generator does see as a
//! typed declaration.
//!
//! The list is maintained by hand alongside the library's public interface.
//! Entries are written as identifiers resolved against [`crate::attr`], so a
//! name the layout does not define is a compile error rather than a silent
//! omission.

use crate::attr;
use crate::types::{AttrT, CType, TypedConstant};

pub use crate::naming::{exported_name, source_name, EXPORT_PREFIX};

/// One re-exported attribute: the library macro and its expected value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttrSymbol {
    /// Name of the macro in `curses.h`.
    pub source: &'static str,
    /// Type the constant is declared with.
    pub ty: CType,
    /// Value the macro expands to.
    pub value: AttrT,
}

impl AttrSymbol {
    /// Create a table entry.
    pub const fn new(source: &'static str, ty: CType, value: AttrT) -> Self {
        Self { source, ty, value }
    }

    /// Name of the typed constant emitted for this entry.
    pub fn exported(&self) -> String {
        exported_name(self.source)
    }

    /// The typed constant this entry declares.
    pub fn declaration(&self) -> TypedConstant {
        TypedConstant::new(self.exported(), self.ty.c_name(), u64::from(self.value))
    }
}

macro_rules! attribute_symbols {
    ($($name:ident),+ $(,)?) => {
        /// Every attribute re-exported by the shim, in header order.
        pub static ATTRIBUTE_SYMBOLS: &[AttrSymbol] = &[
            $(AttrSymbol::new(stringify!($name), CType::AttrT, attr::$name)),+
        ];
    };
}

attribute_symbols![
    A_NORMAL,
    A_ATTRIBUTES,
    A_CHARTEXT,
    A_COLOR,
    A_STANDOUT,
    A_UNDERLINE,
    A_REVERSE,
    A_BLINK,
    A_DIM,
    A_BOLD,
    A_ALTCHARSET,
    A_INVIS,
    A_PROTECT,
    A_HORIZONTAL,
    A_LEFT,
    A_LOW,
    A_RIGHT,
    A_TOP,
    A_VERTICAL,
    A_ITALIC,
];

/// Find a table entry by macro name.
pub fn lookup(source: &str) -> Option<&'static AttrSymbol> {
    ATTRIBUTE_SYMBOLS.iter().find(|sym| sym.source == source)
}

/// Find a table entry by typed constant name.
pub fn lookup_exported(exported: &str) -> Option<&'static AttrSymbol> {
    source_name(exported).and_then(lookup)
}

/// Whether `source` is one of the re-exported macros.
pub fn is_reexported(source: &str) -> bool {
    lookup(source).is_some()
}

/// The typed constants declared by the shim, in table order.
pub fn declarations() -> Vec<TypedConstant> {
    ATTRIBUTE_SYMBOLS.iter().map(AttrSymbol::declaration).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_matches_layout() {
        assert_eq!(ATTRIBUTE_SYMBOLS.len(), 20);
        assert_eq!(lookup("A_BOLD").map(|s| s.value), Some(attr::A_BOLD));
        assert_eq!(lookup("A_BOLD").map(|s| s.value), Some(0x0020_0000));
        assert_eq!(lookup("A_CHARTEXT").map(|s| s.value), Some(0xFF));
        assert!(lookup("A_BOGUS").is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let sources: HashSet<_> = ATTRIBUTE_SYMBOLS.iter().map(|s| s.source).collect();
        assert_eq!(sources.len(), ATTRIBUTE_SYMBOLS.len());

        let exported: HashSet<_> = ATTRIBUTE_SYMBOLS.iter().map(AttrSymbol::exported).collect();
        assert_eq!(exported.len(), ATTRIBUTE_SYMBOLS.len());
    }

    #[test]
    fn test_export_name_round_trip() {
        for sym in ATTRIBUTE_SYMBOLS {
            let exported = sym.exported();
            assert_ne!(exported, sym.source);
            assert_eq!(source_name(&exported), Some(sym.source));
            assert_eq!(lookup_exported(&exported), Some(sym));
        }
    }

    #[test]
    fn test_source_name_rejects_foreign_names() {
        assert_eq!(source_name("A_BOLD"), None);
        assert_eq!(source_name("shim_"), None);
        assert_eq!(source_name("shim_wattr_on"), Some("wattr_on"));
        assert!(lookup_exported("shim_wattr_on").is_none());
    }

    #[test]
    fn test_declarations() {
        let decls = declarations();
        assert_eq!(decls.len(), ATTRIBUTE_SYMBOLS.len());
        assert_eq!(decls[0].name, "shim_A_NORMAL");
        assert_eq!(decls[0].value, 0);

        let bold = decls.iter().find(|d| d.name == "shim_A_BOLD").unwrap();
        assert_eq!(bold.ty, "attr_t");
        assert_eq!(bold.value, 1 << 21);
    }

    #[test]
    fn test_values_fit_declared_type() {
        for sym in ATTRIBUTE_SYMBOLS {
            assert!(sym.ty.holds(u64::from(sym.value)), "{}", sym.source);
        }
    }
}
