//! The premise formatting rules from the PAF programmer's guide.
//!
//! Exactly one rule applies to any record: a populated PO Box wins outright,
//! and every other record dispatches on which of the sub building name,
//! building name and building number fields are populated. Each rule builds
//! its element list from the localities, mutates it, and hands it to
//! [`combine_premise`] together with the rule's canonical premise string.

use crate::address::{Address, FormattedPremise};
use crate::rules::premise::helpers::{
    check_building_range, combine_premise, premise_localities, prepend_locality,
};
use crate::rules::premise::predicates::{
    has_unit_prefix, is_single_letter, name_exception, not_empty,
};

bitflags::bitflags! {
    /// Which premise-identifying fields are populated on a record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct Present: u8 {
        const NUMBER = 1 << 0;
        const NAME   = 1 << 1;
        const SUB    = 1 << 2;
    }
}

impl Present {
    pub(crate) fn of(address: &Address) -> Self {
        let mut present = Present::empty();
        if not_empty(&address.building_number) {
            present |= Present::NUMBER;
        }
        if not_empty(&address.building_name) {
            present |= Present::NAME;
        }
        if not_empty(&address.sub_building_name) {
            present |= Present::SUB;
        }
        present
    }
}

/// The formatting rule selected for a record.
///
/// Rules 1-7 carry the numbering used in the Royal Mail programmer's guide.
/// The remaining variants cover PO Box records and the sub-building-only
/// records that occur in live data despite not being documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PremiseRule {
    /// PO Box record. Overrides every other rule.
    PoBox,
    /// Rule 1: no building name, number or sub building name.
    NoPremiseElements,
    /// Rule 2: building number only.
    BuildingNumber,
    /// Rule 3: building name only.
    BuildingName,
    /// Rule 4: building name and building number.
    NameAndNumber,
    /// Rule 5: sub building name and building number.
    SubAndNumber,
    /// Rule 6: sub building name and building name.
    SubAndName,
    /// Rule 7: sub building name, building name and building number.
    AllElements,
    /// Sub building name only. Absent from the guide, present in the wild.
    SubBuildingOnly,
}

impl PremiseRule {
    /// Short label for report and log output.
    pub fn label(self) -> &'static str {
        match self {
            PremiseRule::PoBox => "po-box",
            PremiseRule::NoPremiseElements => "rule-1 (no premise elements)",
            PremiseRule::BuildingNumber => "rule-2 (building number)",
            PremiseRule::BuildingName => "rule-3 (building name)",
            PremiseRule::NameAndNumber => "rule-4 (name and number)",
            PremiseRule::SubAndNumber => "rule-5 (sub building and number)",
            PremiseRule::SubAndName => "rule-6 (sub building and name)",
            PremiseRule::AllElements => "rule-7 (sub building, name and number)",
            PremiseRule::SubBuildingOnly => "undocumented (sub building only)",
        }
    }
}

/// Classify a record to the single rule that applies.
pub(crate) fn select(address: &Address) -> PremiseRule {
    if not_empty(&address.po_box) {
        return PremiseRule::PoBox;
    }
    // Bits read (sub, name, number), most significant first.
    match Present::of(address).bits() {
        0b111 => PremiseRule::AllElements,
        0b110 => PremiseRule::SubAndName,
        0b101 => PremiseRule::SubAndNumber,
        0b100 => PremiseRule::SubBuildingOnly,
        0b011 => PremiseRule::NameAndNumber,
        0b010 => PremiseRule::BuildingName,
        0b001 => PremiseRule::BuildingNumber,
        _ => PremiseRule::NoPremiseElements,
    }
}

/// Apply a previously selected rule.
pub(crate) fn apply(rule: PremiseRule, address: &Address) -> FormattedPremise {
    match rule {
        PremiseRule::PoBox => po_box(address),
        PremiseRule::NoPremiseElements => rule1(address),
        PremiseRule::BuildingNumber => rule2(address),
        PremiseRule::BuildingName => rule3(address),
        PremiseRule::NameAndNumber => rule4(address),
        PremiseRule::SubAndNumber => rule5(address),
        PremiseRule::SubAndName => rule6(address),
        PremiseRule::AllElements => rule7(address),
        PremiseRule::SubBuildingOnly => undocumented_rule(address),
    }
}

/// Select and apply in one step.
pub(crate) fn formatter(address: &Address) -> FormattedPremise {
    apply(select(address), address)
}

/// Rule 1: nothing but localities (and possibly organisation info).
fn rule1(address: &Address) -> FormattedPremise {
    combine_premise(premise_localities(address), address, "")
}

/// Rule 2: the building number merges onto the first thoroughfare or
/// locality line.
fn rule2(address: &Address) -> FormattedPremise {
    let mut elements = premise_localities(address);
    prepend_locality(&mut elements, &address.building_number);
    combine_premise(elements, address, &address.building_number)
}

/// Rule 3: building name only.
///
/// Exception Rule names ("12A") are lowercased and merged onto the first
/// thoroughfare or locality line. A name whose last token is a range
/// ("Stables 4-6") splits: the range is treated as a building number and
/// the descriptive part keeps its own line. "Unit ..." names never split.
fn rule3(address: &Address) -> FormattedPremise {
    let building_name = &address.building_name;
    let mut elements = premise_localities(address);
    let premise;

    if name_exception(building_name) {
        premise = building_name.to_lowercase();
        prepend_locality(&mut elements, &premise);
    } else if let Some(found) =
        check_building_range(building_name).filter(|_| !has_unit_prefix(building_name))
    {
        let range = found.range.to_lowercase();
        premise = format!("{}, {}", found.actual_name, range);
        prepend_locality(&mut elements, &range);
        elements.push(found.actual_name);
    } else {
        premise = building_name.clone();
        elements.push(building_name.clone());
    }

    combine_premise(elements, address, &premise)
}

/// Rule 4: the building name keeps the line preceding the thoroughfare and
/// locality information; the number merges onto the first thoroughfare or
/// locality line.
fn rule4(address: &Address) -> FormattedPremise {
    let mut elements = premise_localities(address);
    let premise = format!("{}, {}", address.building_name, address.building_number);
    prepend_locality(&mut elements, &address.building_number);
    elements.push(address.building_name.clone());
    combine_premise(elements, address, &premise)
}

/// Rule 5: sub building name and building number. A bare-letter sub
/// building concatenates straight onto the number ("12A"); any other sub
/// building keeps its own line above the numbered line.
fn rule5(address: &Address) -> FormattedPremise {
    let sub = &address.sub_building_name;
    let number = &address.building_number;
    let mut elements = premise_localities(address);
    let premise;

    if is_single_letter(sub) {
        premise = format!("{number}{sub}");
        prepend_locality(&mut elements, &premise);
    } else {
        premise = format!("{sub}, {number}");
        prepend_locality(&mut elements, number);
        elements.push(sub.clone());
    }

    combine_premise(elements, address, &premise)
}

/// Rule 6: sub building name and building name.
///
/// An Exception Rule sub building shares a line with, and precedes, the
/// building name. Failing that, an Exception Rule building name merges
/// onto the first thoroughfare or locality line while the sub building
/// keeps its own line. Records the normalizer flagged for merging render
/// both names on one combined line; everything else gets a line each.
fn rule6(address: &Address) -> FormattedPremise {
    let sub = &address.sub_building_name;
    let name = &address.building_name;
    let mut elements = premise_localities(address);
    let premise;

    if name_exception(sub) {
        premise = format!("{sub} {name}");
        elements.push(premise.clone());
    } else if name_exception(name) {
        premise = format!("{sub}, {name}");
        prepend_locality(&mut elements, name);
        elements.push(sub.clone());
    } else if address.merge_sub_and_building {
        premise = format!("{sub}, {name}");
        elements.push(premise.clone());
    } else {
        premise = format!("{sub}, {name}");
        elements.push(name.clone());
        elements.push(sub.clone());
    }

    combine_premise(elements, address, &premise)
}

/// Rule 7: sub building name, building name and building number.
///
/// An Exception Rule sub building shares a line with the building name,
/// with the number merged onto the first thoroughfare or locality line as
/// usual. The merge branch mirrors rule 6 and leaves the number off
/// entirely; correctly normalized records never carry the merge flag here,
/// but the behavior is pinned down all the same.
fn rule7(address: &Address) -> FormattedPremise {
    let sub = &address.sub_building_name;
    let name = &address.building_name;
    let number = &address.building_number;
    let mut elements = premise_localities(address);
    prepend_locality(&mut elements, number);
    let premise;

    if name_exception(sub) {
        premise = format!("{sub} {name}, {number}");
        elements.push(format!("{sub} {name}"));
    } else if address.merge_sub_and_building {
        // Not reachable from correctly normalized input.
        elements = premise_localities(address);
        premise = format!("{sub}, {name}");
        elements.push(premise.clone());
    } else {
        premise = format!("{sub}, {name}, {number}");
        elements.push(name.clone());
        elements.push(sub.clone());
    }

    combine_premise(elements, address, &premise)
}

/// Sub building name only. Not listed in the guide; live records carrying
/// nothing else do exist, and the sub building merges onto the first
/// thoroughfare or locality line like a building number would.
fn undocumented_rule(address: &Address) -> FormattedPremise {
    let mut elements = premise_localities(address);
    prepend_locality(&mut elements, &address.sub_building_name);
    combine_premise(elements, address, &address.sub_building_name)
}

/// PO Box record: "PO Box <number>" takes its own line.
fn po_box(address: &Address) -> FormattedPremise {
    let mut elements = premise_localities(address);
    let premise = format!("PO Box {}", address.po_box);
    elements.push(premise.clone());
    combine_premise(elements, address, &premise)
}
