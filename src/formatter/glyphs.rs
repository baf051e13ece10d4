// ============================================================================
// Glyph Tables
// Read-only digit, positional, section and monetary glyphs
// ============================================================================

/// Capitalized digit glyphs, indexed by digit value
pub const DIGIT_GLYPHS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];

/// Positional glyphs inside a section, indexed by exponent (10^0..10^3)
pub const POSITION_GLYPHS: [&str; 4] = ["", "拾", "佰", "仟"];

/// Section glyphs, indexed by 4-digit group counted from the ones group
pub const SECTION_GLYPHS: [&str; SECTION_COUNT] = ["", "万", "亿", "万亿"];

/// Number of sections the vocabulary can name
pub const SECTION_COUNT: usize = 4;

/// Digits per section
pub const SECTION_WIDTH: usize = 4;

/// Value of one full section (10^4)
pub const SECTION_BASE: u64 = 10_000;

pub const ZERO: char = DIGIT_GLYPHS[0];
pub const YUAN: char = '元';
pub const JIAO: char = '角';
pub const FEN: char = '分';
pub const ZHENG: char = '整';

/// Rendering of a zero amount
pub const ZERO_AMOUNT: &str = "零元整";

#[inline]
pub(crate) const fn digit_glyph(digit: u8) -> char {
    DIGIT_GLYPHS[digit as usize]
}

#[inline]
pub(crate) const fn position_glyph(exponent: usize) -> &'static str {
    POSITION_GLYPHS[exponent]
}

#[inline]
pub(crate) const fn section_glyph(index: usize) -> &'static str {
    SECTION_GLYPHS[index]
}

// ============================================================================
// Reference Table
// ============================================================================

/// One row of the quick-reference chart shown next to a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphReference {
    /// Arabic label ("7", "10K", ...)
    pub arabic: &'static str,
    /// Capitalized glyph
    pub glyph: &'static str,
    /// Mandarin reading
    pub pinyin: &'static str,
}

const fn reference(
    arabic: &'static str,
    glyph: &'static str,
    pinyin: &'static str,
) -> GlyphReference {
    GlyphReference {
        arabic,
        glyph,
        pinyin,
    }
}

/// Numerals 0-9
pub const NUMERAL_REFERENCE: [GlyphReference; 10] = [
    reference("0", "零", "líng"),
    reference("1", "壹", "yī"),
    reference("2", "贰", "èr"),
    reference("3", "叁", "sān"),
    reference("4", "肆", "sì"),
    reference("5", "伍", "wǔ"),
    reference("6", "陆", "lù"),
    reference("7", "柒", "qī"),
    reference("8", "捌", "bā"),
    reference("9", "玖", "jiǔ"),
];

/// Positional and section units
pub const UNIT_REFERENCE: [GlyphReference; 5] = [
    reference("10", "拾", "shí"),
    reference("100", "佰", "bǎi"),
    reference("1K", "仟", "qiān"),
    reference("10K", "万", "wàn"),
    reference("100M", "亿", "yì"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeral_reference_matches_digit_table() {
        for (digit, row) in NUMERAL_REFERENCE.iter().enumerate() {
            assert_eq!(row.arabic, digit.to_string());
            assert_eq!(row.glyph, DIGIT_GLYPHS[digit].to_string());
        }
    }

    #[test]
    fn test_unit_reference_matches_unit_tables() {
        assert_eq!(UNIT_REFERENCE[0].glyph, position_glyph(1));
        assert_eq!(UNIT_REFERENCE[1].glyph, position_glyph(2));
        assert_eq!(UNIT_REFERENCE[2].glyph, position_glyph(3));
        assert_eq!(UNIT_REFERENCE[3].glyph, section_glyph(1));
        assert_eq!(UNIT_REFERENCE[4].glyph, section_glyph(2));
    }

    #[test]
    fn test_top_section_composes_lower_units() {
        assert_eq!(
            section_glyph(3),
            format!("{}{}", section_glyph(1), section_glyph(2))
        );
    }

    #[test]
    fn test_ones_place_has_no_glyph() {
        assert_eq!(position_glyph(0), "");
        assert_eq!(section_glyph(0), "");
    }
}
