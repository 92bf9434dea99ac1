use once_cell::sync::Lazy;
use regex::Regex;

/// PAF Exception Rule names, matched whole: first and last characters both
/// numeric ("1to1", "100:1"), first and penultimate numeric with a single
/// trailing letter ("12A"), or a one-character name ("A").
pub(crate) static NAME_EXCEPTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d|\d.*\d|\d(.*\d)?[a-z]|[a-z])$").unwrap());

/// Trailing building-range tokens. Wider than the Exception Rule: the
/// interior may be any non-digit run, so spans like "12-13" qualify.
pub(crate) static BUILDING_RANGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d.*\D.*\d|\d(.*\d)?[a-z]|[a-z])$").unwrap());

/// A sub building name that is one bare letter ("A"), concatenated directly
/// onto the building number under rule 5.
pub(crate) static SINGLE_LETTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z]$").unwrap());

/// Building names like "Unit 12-13", whose trailing token is never split
/// off as a range.
pub(crate) static UNIT_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^unit\s").unwrap());

/// Returns true when the string is empty after trimming. Whitespace-only
/// content is the universal "absent" signal on PAF records.
pub(crate) fn is_empty(s: &str) -> bool {
    s.trim().is_empty()
}

pub(crate) fn not_empty(s: &str) -> bool {
    !is_empty(s)
}

/// Returns true when a building or sub building name falls under the PAF
/// Exception Rule: a short numeric or numeric-alpha token ("1", "12A",
/// "1to1", "100:1", "A") that renders inline with adjacent address elements
/// rather than on its own line.
pub fn name_exception(name: &str) -> bool {
    NAME_EXCEPTION_REGEX.is_match(name)
}

/// Returns true when the sub building name is a single letter.
pub(crate) fn is_single_letter(name: &str) -> bool {
    SINGLE_LETTER_REGEX.is_match(name)
}

/// Returns true when the building name starts with "unit " (any case).
pub(crate) fn has_unit_prefix(name: &str) -> bool {
    UNIT_PREFIX_REGEX.is_match(name)
}
