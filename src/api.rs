use crate::address::{Address, FormattedPremise};
use crate::rules::premise::rules;

pub use crate::rules::premise::rules::PremiseRule;

/// Format the premise attributes of a PAF record.
///
/// Selects the single applicable formatting rule (PO Box first, then the
/// sub building name / building name / building number presence table) and
/// returns the composed premise lines. Pure and stateless: the same record
/// always formats to the same value.
///
/// # Example
/// ```
/// use clearaddress::{Address, format_premise};
///
/// let address = Address {
///     sub_building_name: "A".to_string(),
///     building_number: "12".to_string(),
///     thoroughfare: "High Street North".to_string(),
///     dependant_locality: "Pinner".to_string(),
///     ..Address::default()
/// };
///
/// let premise = format_premise(&address);
/// assert_eq!(premise.premise, "12A");
/// assert_eq!(premise.line_1, "12A High Street North");
/// assert_eq!(premise.line_2, "Pinner");
/// ```
pub fn format_premise(address: &Address) -> FormattedPremise {
    rules::formatter(address)
}

/// Classify a record to the rule [`format_premise`] would apply, without
/// formatting it.
///
/// # Example
/// ```
/// use clearaddress::{Address, PremiseRule, premise_rule};
///
/// let address = Address { po_box: "61".to_string(), ..Address::default() };
/// assert_eq!(premise_rule(&address), PremiseRule::PoBox);
/// ```
pub fn premise_rule(address: &Address) -> PremiseRule {
    rules::select(address)
}
