//! Character class sections
//!
//! Each section detects one character class and reports how much it adds to
//! the effective alphabet size.

mod digits;
mod letters;
mod symbols;

pub use digits::digit_section;
pub use letters::{lowercase_section, uppercase_section};
pub use symbols::symbol_section;

/// Result type for section functions.
/// - `Some(size)` - Class present, contributes `size` symbols to the pool
/// - `None` - Class absent
pub type SectionResult = Option<u32>;

/// Signature shared by all sections.
pub type Section = fn(&str) -> SectionResult;

/// All sections, in evaluation order.
pub const SECTIONS: [(&str, Section); 4] = [
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digits", digit_section),
    ("symbols", symbol_section),
];
