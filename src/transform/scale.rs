//! Damage scale-code normalization.
//!
//! The PROPDMGEXP / CROPDMGEXP columns use an inconsistent, partially
//! free-text vocabulary: letter codes, bare digits, signs, empty strings and
//! stray symbols. Every token resolves to a power-of-ten multiplier; nothing
//! is ever rejected, so the pipeline stays total over malformed input.
//!
//! Resolution is an ordered rule table evaluated top to bottom, which keeps
//! the precedence auditable in one place rather than scattered branches.

/// Classification of a raw scale-code token.
///
/// **Public** - exposed so the precedence order is unit-testable in isolation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleRule {
    /// One of the fixed letter codes H/K/M/B; carries the exponent
    FixedLetterCode(u32),

    /// Empty string or a bare sign character, multiplier 1
    EmptyOrSign,

    /// Token containing decimal digits; carries their numeric value as exponent
    NumericDigit(u32),

    /// Anything else (`?`, `Z`, ...), multiplier 1 via fallback
    Unrecognized,
}

/// Classify a raw scale code against the ordered rule table
///
/// **Public** - case-insensitive; the input is upper-cased, never trimmed
/// (a padded `" K"` is not a letter code and falls through to the default,
/// matching the source behavior).
pub fn classify(code: &str) -> ScaleRule {
    let normalized = code.to_uppercase();

    match normalized.as_str() {
        "H" => ScaleRule::FixedLetterCode(2),
        "K" => ScaleRule::FixedLetterCode(3),
        "M" => ScaleRule::FixedLetterCode(6),
        "B" => ScaleRule::FixedLetterCode(9),
        "" | "-" | "+" => ScaleRule::EmptyOrSign,
        other => match digit_exponent(other) {
            Some(exp) => ScaleRule::NumericDigit(exp),
            None => ScaleRule::Unrecognized,
        },
    }
}

/// Resolve a raw scale code to its numeric multiplier
///
/// **Public** - the normalizer contract: total, deterministic, never errors
///
/// # Examples
/// * `"K"`, `"k"` → 1 000
/// * `"B"` → 1 000 000 000
/// * `"3"` → 1 000
/// * `""`, `"-"`, `"+"`, `"?"` → 1
pub fn multiplier(code: &str) -> f64 {
    match classify(code) {
        ScaleRule::FixedLetterCode(exp) | ScaleRule::NumericDigit(exp) => {
            10f64.powi(exp as i32)
        }
        ScaleRule::EmptyOrSign | ScaleRule::Unrecognized => 1.0,
    }
}

/// Numeric value of the digit characters in a token, if any
///
/// **Private** - `"3"` → 3, `"10"` → 10; `None` when no digit is present.
/// A digit run too large for `u32` also yields `None`, so an absurd token
/// like `"99999999999"` lands on the default multiplier instead of an
/// infinite scale factor. Real codes are single digits.
fn digit_exponent(code: &str) -> Option<u32> {
    let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
