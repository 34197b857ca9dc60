//! Reference attribute layout of the wrapped ncurses library.
//!
//! ncurses defines its video attributes as untyped macros built from
//! `NCURSES_BITS(mask, shift)`. The values below follow that layout for the
//! standard 32-bit `chtype` build, and are what the typed constants in the
//! umbrella header must evaluate to.

use crate::types::{AttrT, ChType};

/// Attribute shift - characters occupy bits 0-7.
pub const NCURSES_ATTR_SHIFT: u32 = 8;

/// Equivalent of the `NCURSES_BITS` macro.
#[inline]
pub const fn ncurses_bits(mask: u32, shift: u32) -> ChType {
    (mask as ChType) << (shift + NCURSES_ATTR_SHIFT)
}

// ============================================================================
// Standard X/Open Curses Attributes
// ============================================================================

/// Normal display (no attributes).
pub const A_NORMAL: AttrT = 0;

/// Mask for extracting the character portion of a chtype.
pub const A_CHARTEXT: AttrT = (1 << NCURSES_ATTR_SHIFT) - 1;

/// Mask for extracting the color pair portion of a chtype.
pub const A_COLOR: AttrT = ncurses_bits((1 << 8) - 1, 0);

/// Mask for extracting all attributes (everything except the character).
pub const A_ATTRIBUTES: AttrT = !A_CHARTEXT;

/// Standout mode.
pub const A_STANDOUT: AttrT = ncurses_bits(1, 8);

/// Underline mode.
pub const A_UNDERLINE: AttrT = ncurses_bits(1, 9);

/// Reverse video mode.
pub const A_REVERSE: AttrT = ncurses_bits(1, 10);

/// Blinking text.
pub const A_BLINK: AttrT = ncurses_bits(1, 11);

/// Half-bright or dim text.
pub const A_DIM: AttrT = ncurses_bits(1, 12);

/// Bold or extra-bright text.
pub const A_BOLD: AttrT = ncurses_bits(1, 13);

/// Alternate character set (line drawing characters).
pub const A_ALTCHARSET: AttrT = ncurses_bits(1, 14);

/// Invisible text.
pub const A_INVIS: AttrT = ncurses_bits(1, 15);

/// Protected text.
pub const A_PROTECT: AttrT = ncurses_bits(1, 16);

// X/Open features not found in SVr4 curses

/// Horizontal highlight.
pub const A_HORIZONTAL: AttrT = ncurses_bits(1, 17);

/// Left highlight.
pub const A_LEFT: AttrT = ncurses_bits(1, 18);

/// Low highlight.
pub const A_LOW: AttrT = ncurses_bits(1, 19);

/// Right highlight.
pub const A_RIGHT: AttrT = ncurses_bits(1, 20);

/// Top highlight.
pub const A_TOP: AttrT = ncurses_bits(1, 21);

/// Vertical highlight.
pub const A_VERTICAL: AttrT = ncurses_bits(1, 22);

/// Italic text (ncurses extension).
pub const A_ITALIC: AttrT = ncurses_bits(1, 23);

/// Extract the color pair number from an attribute value.
#[inline]
pub const fn pair_number(attr: AttrT) -> i16 {
    ((attr & A_COLOR) >> NCURSES_ATTR_SHIFT) as i16
}

bitflags::bitflags! {
    /// The single-bit video attributes as a flags type.
    ///
    /// Masks (`A_CHARTEXT`, `A_COLOR`, `A_ATTRIBUTES`) are deliberately not
    /// flags; they select fields rather than switch a rendition on.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attribute: AttrT {
        /// Standout mode.
        const STANDOUT = A_STANDOUT;
        /// Underline mode.
        const UNDERLINE = A_UNDERLINE;
        /// Reverse video.
        const REVERSE = A_REVERSE;
        /// Blinking text.
        const BLINK = A_BLINK;
        /// Dim or half-bright.
        const DIM = A_DIM;
        /// Bold or extra-bright.
        const BOLD = A_BOLD;
        /// Alternate character set.
        const ALTCHARSET = A_ALTCHARSET;
        /// Invisible text.
        const INVIS = A_INVIS;
        /// Protected text.
        const PROTECT = A_PROTECT;
        /// Horizontal highlight.
        const HORIZONTAL = A_HORIZONTAL;
        /// Left highlight.
        const LEFT = A_LEFT;
        /// Low highlight.
        const LOW = A_LOW;
        /// Right highlight.
        const RIGHT = A_RIGHT;
        /// Top highlight.
        const TOP = A_TOP;
        /// Vertical highlight.
        const VERTICAL = A_VERTICAL;
        /// Italic text.
        const ITALIC = A_ITALIC;
    }
}

impl From<AttrT> for Attribute {
    fn from(attr: AttrT) -> Self {
        // Color pair and character bits are not renditions
        Attribute::from_bits_truncate(attr & !A_COLOR & !A_CHARTEXT)
    }
}

impl From<Attribute> for AttrT {
    fn from(attr: Attribute) -> Self {
        attr.bits()
    }
}
