// ============================================================================
// Capitalization Formatter
// CanonicalAmount -> 大写金额, total over the supported range
// ============================================================================

use super::capitalized::CapitalizedAmount;
use super::glyphs::{digit_glyph, FEN, JIAO, YUAN, ZERO, ZERO_AMOUNT, ZHENG};
use super::sections::render_major;
use crate::numeric::CanonicalAmount;

/// Upper bound on rendered bytes (MAX renders to 37 glyphs of 3 bytes)
const RENDER_CAPACITY: usize = 128;

/// Render an amount as capitalized numerals.
///
/// Never fails: every `CanonicalAmount` is already within the range the
/// section vocabulary can name.
///
/// # Example
/// ```
/// use amount_capitalizer::{format, validate};
///
/// let amount = validate("1234.56").unwrap();
/// assert_eq!(format(amount).as_str(), "壹仟贰佰叁拾肆元伍角陆分");
/// ```
pub fn format(amount: CanonicalAmount) -> CapitalizedAmount {
    if amount.is_zero() {
        return CapitalizedAmount::new(ZERO_AMOUNT.to_string());
    }

    let mut out = String::with_capacity(RENDER_CAPACITY);
    let major = amount.major();
    if major != 0 {
        render_major(major, &mut out);
        out.push(YUAN);
    }
    render_fraction(major != 0, amount.jiao(), amount.fen(), &mut out);

    CapitalizedAmount::new(out)
}

/// Append the jiao/fen tail, or 整 when there is none.
fn render_fraction(has_major: bool, jiao: u8, fen: u8, out: &mut String) {
    if jiao == 0 && fen == 0 {
        out.push(ZHENG);
        return;
    }

    if jiao != 0 {
        out.push(digit_glyph(jiao));
        out.push(JIAO);
    } else if has_major {
        // Zero jiao is only spoken between 元 and a nonzero fen
        out.push(ZERO);
    }

    if fen != 0 {
        out.push(digit_glyph(fen));
        out.push(FEN);
    }
}
