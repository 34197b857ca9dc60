//! Core type definitions for ncursesw-shim.
//!
//! The integer types here mirror the C typedefs that the umbrella headers
//! declare typed constants with, so that a constant read back out of the
//! generated bindings can be compared against the table bit for bit.

use std::fmt;

/// Character type with embedded attributes.
///
/// In ncurses, `chtype` is a 32-bit value where:
/// - Bits 0-7: The character (or character index)
/// - Bits 8-31: Attributes and color pair
pub type ChType = libc::c_uint;

/// Attribute type. Must be at least as wide as `ChType`.
pub type AttrT = ChType;

/// Mouse event mask type.
pub type MmaskT = libc::c_uint;

/// C spelling of the attribute type, as it appears in `curses.h`.
#[allow(non_camel_case_types)]
pub type attr_t = AttrT;

/// The C type a typed constant is declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CType {
    /// `attr_t`, the video attribute type.
    AttrT,
    /// `chtype`, a character with embedded attributes.
    ChType,
    /// `mmask_t`, the mouse event mask.
    MmaskT,
    /// Plain `int`.
    Int,
}

impl CType {
    /// All declarable types.
    pub const ALL: [CType; 4] = [CType::AttrT, CType::ChType, CType::MmaskT, CType::Int];

    /// The type name as written in C (and as bindgen keeps it).
    pub const fn c_name(self) -> &'static str {
        match self {
            CType::AttrT => "attr_t",
            CType::ChType => "chtype",
            CType::MmaskT => "mmask_t",
            CType::Int => "int",
        }
    }

    /// Look a type up by the name a binding generator emitted for it.
    ///
    /// bindgen renders `int` as `::std::os::raw::c_int` (or `c_int` with
    /// `use_core`), so both spellings are accepted.
    pub fn from_binding_name(name: &str) -> Option<CType> {
        let name = name.trim();
        let tail = name.rsplit("::").next().unwrap_or(name);
        match tail {
            "attr_t" => Some(CType::AttrT),
            "chtype" => Some(CType::ChType),
            "mmask_t" => Some(CType::MmaskT),
            "int" | "c_int" => Some(CType::Int),
            _ => None,
        }
    }

    /// Size of the type in bytes.
    pub const fn size(self) -> usize {
        match self {
            CType::AttrT => std::mem::size_of::<AttrT>(),
            CType::ChType => std::mem::size_of::<ChType>(),
            CType::MmaskT => std::mem::size_of::<MmaskT>(),
            CType::Int => std::mem::size_of::<libc::c_int>(),
        }
    }

    /// Whether `value` fits in this type without truncation.
    pub const fn holds(self, value: u64) -> bool {
        let bits = self.size() * 8;
        bits >= 64 || value < (1u64 << bits)
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

/// A typed constant declaration: `(name, type, value)`.
///
/// Values are widened to `u64` so declarations from the table and
/// declarations parsed out of generated code compare without casts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypedConstant {
    /// Declared name.
    pub name: String,
    /// Declared type, as spelled at the declaration site.
    pub ty: String,
    /// Bit pattern of the value.
    pub value: u64,
}

impl TypedConstant {
    /// Create a new declaration.
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value,
        }
    }

    /// The declared type, if it is one the shim knows about.
    pub fn c_type(&self) -> Option<CType> {
        CType::from_binding_name(&self.ty)
    }
}

impl fmt::Display for TypedConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "const {} {} = {:#x};", self.ty, self.name, self.value)
    }
}
