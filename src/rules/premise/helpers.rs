use crate::address::{Address, FormattedPremise};
use crate::rules::premise::predicates::{BUILDING_RANGE_REGEX, not_empty};

/// Ordered premise fragments for one formatting pass, lowest specificity
/// first. Owned by a single rule invocation; `combine_premise` consumes it.
pub(crate) type AddressElements = Vec<String>;

/// Collect the populated locality fields in their fixed precedence order:
/// dependant locality, double dependant locality, thoroughfare, dependant
/// thoroughfare. The order never varies; absent fields are just skipped.
pub(crate) fn premise_localities(address: &Address) -> AddressElements {
    [
        &address.dependant_locality,
        &address.double_dependant_locality,
        &address.thoroughfare,
        &address.dependant_thoroughfare,
    ]
    .into_iter()
    .filter(|locality| not_empty(locality))
    .cloned()
    .collect()
}

/// Merge `premise` onto the front of the last locality element — after the
/// composer's reversal that element is the first thoroughfare line, or the
/// first locality line when there is no thoroughfare, which is where the
/// guide puts building numbers. With no localities at all the premise
/// becomes the sole element.
pub(crate) fn prepend_locality(localities: &mut AddressElements, premise: &str) {
    match localities.last_mut() {
        Some(last) => *last = format!("{premise} {last}"),
        None => localities.push(premise.to_string()),
    }
}

/// Append department and organisation names, organisation last. Organisation
/// info always outranks building detail, so it lands on `line_1`.
pub(crate) fn append_organisation_info(elements: &mut AddressElements, address: &Address) {
    if not_empty(&address.organisation_name) {
        if not_empty(&address.department_name) {
            elements.push(address.department_name.clone());
        }
        elements.push(address.organisation_name.clone());
    }
}

/// Fold the ordered element list into the output record: organisation info
/// is appended, the list is reversed so the most specific fragment comes
/// first, and everything beyond the first two lines joins `line_3` with
/// `", "` separators.
pub(crate) fn combine_premise(
    mut elements: AddressElements,
    address: &Address,
    premise: &str,
) -> FormattedPremise {
    append_organisation_info(&mut elements, address);
    elements.reverse();

    let mut lines = elements.into_iter();
    let line_1 = lines.next().unwrap_or_default();
    let line_2 = lines.next().unwrap_or_default();
    let line_3 = lines.collect::<Vec<_>>().join(", ");

    FormattedPremise { premise: premise.to_string(), line_1, line_2, line_3 }
}

/// A building name split into its descriptive part and a trailing range
/// token, e.g. `"Stables 4-6"` into `"Stables"` and `"4-6"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingRangeMatch {
    /// The range token, exactly as it appeared.
    pub range: String,
    /// The remaining tokens rejoined with single spaces.
    pub actual_name: String,
}

/// Split a building name on single spaces and test its last token against
/// the range pattern. Names carrying both a descriptive part and a number
/// range hold the range in the building name field, since the building
/// number field only takes plain numerics.
pub fn check_building_range(building_name: &str) -> Option<BuildingRangeMatch> {
    let mut tokens: Vec<&str> = building_name.split(' ').collect();
    let last = tokens.pop().unwrap_or("");
    if BUILDING_RANGE_REGEX.is_match(last) {
        return Some(BuildingRangeMatch {
            range: last.to_string(),
            actual_name: tokens.join(" "),
        });
    }
    None
}
