use crate::address::{Address, FormattedPremise};
use crate::rules::premise::rules::formatter;

fn expect(premise: &str, line_1: &str, line_2: &str, line_3: &str) -> FormattedPremise {
    FormattedPremise {
        premise: premise.to_string(),
        line_1: line_1.to_string(),
        line_2: line_2.to_string(),
        line_3: line_3.to_string(),
    }
}

#[test]
fn premise_rule_corpus() {
    // Array of (label, address, expected premise attributes), one entry per
    // rule branch plus the organisation and priority interactions.
    let cases: Vec<(&str, Address, FormattedPremise)> = vec![
        (
            "rule 1: organisation only",
            Address {
                organisation_name: "Leda Engineering Ltd".to_string(),
                dependant_locality: "Appleford".to_string(),
                ..Address::default()
            },
            expect("", "Leda Engineering Ltd", "Appleford", ""),
        ),
        (
            "rule 1: localities only",
            Address {
                dependant_locality: "Tiddington".to_string(),
                thoroughfare: "Banbury Road".to_string(),
                ..Address::default()
            },
            expect("", "Banbury Road", "Tiddington", ""),
        ),
        (
            "rule 2: number joins the thoroughfare line",
            Address {
                building_number: "1".to_string(),
                thoroughfare: "Acacia Avenue".to_string(),
                ..Address::default()
            },
            expect("1", "1 Acacia Avenue", "", ""),
        ),
        (
            "rule 2: dependant thoroughfare is the more specific line",
            Address {
                building_number: "10".to_string(),
                thoroughfare: "Broad Street".to_string(),
                dependant_thoroughfare: "The Mews".to_string(),
                ..Address::default()
            },
            expect("10", "10 The Mews", "Broad Street", ""),
        ),
        (
            "rule 2: whitespace-only thoroughfare falls back to the locality",
            Address {
                building_number: "3".to_string(),
                thoroughfare: " ".to_string(),
                dependant_locality: "Kington".to_string(),
                ..Address::default()
            },
            expect("3", "3 Kington", "", ""),
        ),
        (
            "rule 2: no localities leaves the bare number",
            Address { building_number: "7".to_string(), ..Address::default() },
            expect("7", "7", "", ""),
        ),
        (
            "rule 3: exception name lowercases onto the thoroughfare line",
            Address {
                building_name: "12A".to_string(),
                thoroughfare: "Upperkirkgate".to_string(),
                ..Address::default()
            },
            expect("12a", "12a Upperkirkgate", "", ""),
        ),
        (
            "rule 3: trailing range splits off as a number",
            Address {
                building_name: "Stables 4-6".to_string(),
                thoroughfare: "Wilberforce Road".to_string(),
                ..Address::default()
            },
            expect("Stables, 4-6", "Stables", "4-6 Wilberforce Road", ""),
        ),
        (
            "rule 3: unit names never split",
            Address {
                building_name: "Unit 1-2".to_string(),
                thoroughfare: "Horsefair".to_string(),
                ..Address::default()
            },
            expect("Unit 1-2", "Unit 1-2", "Horsefair", ""),
        ),
        (
            "rule 3: plain name keeps its own line",
            Address {
                building_name: "The Manor".to_string(),
                thoroughfare: "Upper Hill Street".to_string(),
                ..Address::default()
            },
            expect("The Manor", "The Manor", "Upper Hill Street", ""),
        ),
        (
            "rule 4: name above, number on the thoroughfare line",
            Address {
                building_name: "Victoria House".to_string(),
                building_number: "15".to_string(),
                thoroughfare: "The Street".to_string(),
                ..Address::default()
            },
            expect("Victoria House, 15", "Victoria House", "15 The Street", ""),
        ),
        (
            "rule 5: bare-letter sub building concatenates onto the number",
            Address {
                sub_building_name: "A".to_string(),
                building_number: "12".to_string(),
                thoroughfare: "High Street North".to_string(),
                ..Address::default()
            },
            expect("12A", "12A High Street North", "", ""),
        ),
        (
            "rule 5: named sub building keeps its own line",
            Address {
                sub_building_name: "Basement Flat".to_string(),
                building_number: "12".to_string(),
                thoroughfare: "High Street North".to_string(),
                ..Address::default()
            },
            expect("Basement Flat, 12", "Basement Flat", "12 High Street North", ""),
        ),
        (
            "rule 6: exception sub building shares the name line",
            Address {
                sub_building_name: "10B".to_string(),
                building_name: "Bloomsbury Court".to_string(),
                thoroughfare: "Great Russell Street".to_string(),
                ..Address::default()
            },
            expect("10B Bloomsbury Court", "10B Bloomsbury Court", "Great Russell Street", ""),
        ),
        (
            "rule 6: exception building name joins the thoroughfare line",
            Address {
                sub_building_name: "Basement Flat".to_string(),
                building_name: "10B".to_string(),
                thoroughfare: "Quay Street".to_string(),
                ..Address::default()
            },
            expect("Basement Flat, 10B", "Basement Flat", "10B Quay Street", ""),
        ),
        (
            "rule 6: merge flag renders both names on one line",
            Address {
                sub_building_name: "Stable Flat".to_string(),
                building_name: "The Lodge".to_string(),
                merge_sub_and_building: true,
                thoroughfare: "Ixworth Road".to_string(),
                ..Address::default()
            },
            expect("Stable Flat, The Lodge", "Stable Flat, The Lodge", "Ixworth Road", ""),
        ),
        (
            "rule 6: plain sub and name get a line each",
            Address {
                sub_building_name: "The Annexe".to_string(),
                building_name: "Barton House".to_string(),
                thoroughfare: "Oakfield Road".to_string(),
                ..Address::default()
            },
            expect("The Annexe, Barton House", "The Annexe", "Barton House", "Oakfield Road"),
        ),
        (
            "rule 7: exception sub building shares the name line",
            Address {
                sub_building_name: "2B".to_string(),
                building_name: "The Tower".to_string(),
                building_number: "27".to_string(),
                thoroughfare: "John Street".to_string(),
                ..Address::default()
            },
            expect("2B The Tower, 27", "2B The Tower", "27 John Street", ""),
        ),
        (
            "rule 7: merge flag drops the number from the locality line",
            Address {
                sub_building_name: "Garden Flat".to_string(),
                building_name: "Lansdowne House".to_string(),
                building_number: "38".to_string(),
                merge_sub_and_building: true,
                thoroughfare: "Clarendon Road".to_string(),
                ..Address::default()
            },
            expect(
                "Garden Flat, Lansdowne House",
                "Garden Flat, Lansdowne House",
                "Clarendon Road",
                "",
            ),
        ),
        (
            "rule 7: all three elements cascade",
            Address {
                sub_building_name: "Stables Flat".to_string(),
                building_name: "The Manor".to_string(),
                building_number: "65".to_string(),
                thoroughfare: "Wolverhampton Road".to_string(),
                ..Address::default()
            },
            expect(
                "Stables Flat, The Manor, 65",
                "Stables Flat",
                "The Manor",
                "65 Wolverhampton Road",
            ),
        ),
        (
            "undocumented: bare sub building joins the thoroughfare line",
            Address {
                sub_building_name: "Flat 20".to_string(),
                thoroughfare: "Primrose Hill".to_string(),
                ..Address::default()
            },
            expect("Flat 20", "Flat 20 Primrose Hill", "", ""),
        ),
        (
            "po box: premise takes its own line",
            Address {
                po_box: "61".to_string(),
                post_town: "Farnham".to_string(),
                ..Address::default()
            },
            expect("PO Box 61", "PO Box 61", "", ""),
        ),
        (
            "po box: overrides sub, name and number",
            Address {
                po_box: "100".to_string(),
                sub_building_name: "Flat 1".to_string(),
                building_name: "Pennine House".to_string(),
                building_number: "9".to_string(),
                thoroughfare: "Yorkshire Street".to_string(),
                ..Address::default()
            },
            expect("PO Box 100", "PO Box 100", "Yorkshire Street", ""),
        ),
        (
            "organisation and department outrank the numbered line",
            Address {
                organisation_name: "South East Water Services Ltd".to_string(),
                department_name: "Customer Services".to_string(),
                building_number: "20".to_string(),
                thoroughfare: "Garrett Field".to_string(),
                ..Address::default()
            },
            expect(
                "20",
                "South East Water Services Ltd",
                "Customer Services",
                "20 Garrett Field",
            ),
        ),
        (
            "overflow lines join line 3 in ascending specificity",
            Address {
                organisation_name: "Quill Press".to_string(),
                sub_building_name: "The Annexe".to_string(),
                building_name: "Barton House".to_string(),
                thoroughfare: "Oakfield Road".to_string(),
                dependant_locality: "Springfield".to_string(),
                ..Address::default()
            },
            expect(
                "The Annexe, Barton House",
                "Quill Press",
                "The Annexe",
                "Barton House, Oakfield Road, Springfield",
            ),
        ),
    ];

    for (label, address, expected) in cases {
        let formatted = formatter(&address);
        assert_eq!(formatted, expected, "case failed: {label}");
    }
}

#[test]
fn formatting_is_idempotent() {
    let address = Address {
        sub_building_name: "Caretakers Flat".to_string(),
        building_name: "110-114 High Street West".to_string(),
        thoroughfare: "Cannock Road".to_string(),
        post_town: "Wolverhampton".to_string(),
        ..Address::default()
    };
    assert_eq!(formatter(&address), formatter(&address));
}

#[test]
fn exception_building_name_range_is_not_a_split_candidate() {
    // "110-114 High Street West" has a word as its last token, so the range
    // detector does not fire and the whole name keeps its own line.
    let address = Address {
        building_name: "110-114 High Street West".to_string(),
        thoroughfare: "Cannock Road".to_string(),
        ..Address::default()
    };
    let formatted = formatter(&address);
    assert_eq!(formatted.premise, "110-114 High Street West");
    assert_eq!(formatted.line_1, "110-114 High Street West");
    assert_eq!(formatted.line_2, "Cannock Road");
}
