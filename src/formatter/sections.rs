// ============================================================================
// Section Fold
// Renders the major part as a left-to-right fold over 4-digit sections
// ============================================================================
//
// Every zero-elision rule is one branch of `DigitStep` or `SectionStep`:
//
//   digit        state                     step
//   ---------    -----------------------   ------------------------------
//   0            nothing emitted yet       SkipLeadingZero
//   0            output started            DeferZero   (pending_zero = on)
//   1-9          pending_zero off          Emit { zero_prefix: false }
//   1-9          pending_zero on           Emit { zero_prefix: true }
//
//   group end    state                     step
//   ---------    -----------------------   ------------------------------
//                section_open              Close       (glyph, pending off)
//                !section_open, started    ElideZeroGroup (pending stays on)
//                nothing emitted yet       SkipLeading

use super::glyphs::{
    digit_glyph, position_glyph, section_glyph, SECTION_BASE, SECTION_COUNT, SECTION_WIDTH, ZERO,
};
use arrayvec::ArrayVec;

/// Flags threaded through the fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FoldState {
    /// A zero has been passed since the last emitted digit
    pending_zero: bool,
    /// The current section has emitted a digit
    section_open: bool,
    /// Any digit has been emitted
    started: bool,
}

/// Outcome of feeding one digit into the fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DigitStep {
    SkipLeadingZero,
    DeferZero,
    Emit { zero_prefix: bool },
}

/// Outcome of reaching the end of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionStep {
    SkipLeading,
    ElideZeroGroup,
    Close,
}

impl FoldState {
    pub(crate) fn step_digit(&mut self, digit: u8) -> DigitStep {
        if digit == 0 {
            if !self.started {
                return DigitStep::SkipLeadingZero;
            }
            self.pending_zero = true;
            return DigitStep::DeferZero;
        }

        let zero_prefix = self.pending_zero;
        self.pending_zero = false;
        self.section_open = true;
        self.started = true;
        DigitStep::Emit { zero_prefix }
    }

    pub(crate) fn end_section(&mut self) -> SectionStep {
        if self.section_open {
            // Trailing zeros are absorbed by the unit: never 零 before 万/亿
            self.section_open = false;
            self.pending_zero = false;
            SectionStep::Close
        } else if self.started {
            self.pending_zero = true;
            SectionStep::ElideZeroGroup
        } else {
            SectionStep::SkipLeading
        }
    }
}

/// Split into 4-digit groups, least significant first.
///
/// Stops at the most significant nonzero group; zero yields no groups.
/// `major` must be below 10^16.
pub(crate) fn split_sections(major: u64) -> ArrayVec<u16, SECTION_COUNT> {
    let mut groups = ArrayVec::new();
    let mut rest = major;
    for _ in 0..SECTION_COUNT {
        if rest == 0 {
            break;
        }
        groups.push((rest % SECTION_BASE) as u16);
        rest /= SECTION_BASE;
    }
    debug_assert_eq!(rest, 0, "major part exceeds the 万亿 section");
    groups
}

/// Digits of one group with their exponent, most significant first.
fn group_digits(group: u16) -> impl Iterator<Item = (usize, u8)> {
    (0..SECTION_WIDTH).rev().map(move |exponent| {
        let digit = (group / 10u16.pow(exponent as u32)) % 10;
        (exponent, digit as u8)
    })
}

/// Append the capitalized rendering of `major` (without 元) to `out`.
pub(crate) fn render_major(major: u64, out: &mut String) {
    let mut state = FoldState::default();
    let groups = split_sections(major);

    for (index, group) in groups.iter().enumerate().rev() {
        for (exponent, digit) in group_digits(*group) {
            if let DigitStep::Emit { zero_prefix } = state.step_digit(digit) {
                if zero_prefix {
                    out.push(ZERO);
                }
                out.push(digit_glyph(digit));
                out.push_str(position_glyph(exponent));
            }
        }

        if state.end_section() == SectionStep::Close {
            out.push_str(section_glyph(index));
        }
    }
}
