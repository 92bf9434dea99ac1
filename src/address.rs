use serde::{Deserialize, Serialize};

/// A UK Postcode Address File (PAF) delivery point record.
///
/// Every text field defaults to the empty string: emptiness (including
/// whitespace-only content) is the universal "absent" signal throughout the
/// formatting engine, so there is no `Option` wrapping on them. Upstream
/// sources are inconsistent about numeric-looking fields (a CSV export may
/// carry `building_number` as a JSON number), so deserialization coerces
/// numbers into the string fields and numeric strings into the numeric ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Name of the building, e.g. `"Victoria House"` or a range like `"1-2"`.
    #[serde(default, deserialize_with = "de::field")]
    pub building_name: String,
    /// Number of the building. Held as a string: PAF only guarantees digits
    /// here for records that also carry a separate building name.
    #[serde(default, deserialize_with = "de::field")]
    pub building_number: String,
    /// Name of a unit within the building, e.g. `"Flat 2"` or `"A"`.
    #[serde(default, deserialize_with = "de::field")]
    pub sub_building_name: String,
    /// Organisation registered at this delivery point.
    #[serde(default, deserialize_with = "de::field")]
    pub organisation_name: String,
    /// Department within the organisation.
    #[serde(default, deserialize_with = "de::field")]
    pub department_name: String,
    /// PO Box number. When present it overrides every other premise field.
    #[serde(default, deserialize_with = "de::field")]
    pub po_box: String,

    /// Road name, e.g. `"High Street North"`.
    #[serde(default, deserialize_with = "de::field")]
    pub thoroughfare: String,
    /// Named subordinate section of the thoroughfare, e.g. a mews or court
    /// off the main road. More specific than `thoroughfare`.
    #[serde(default, deserialize_with = "de::field")]
    pub dependant_thoroughfare: String,
    /// Named sub-area within the post town.
    #[serde(default, deserialize_with = "de::field")]
    pub dependant_locality: String,
    /// Named sub-area within the dependant locality.
    #[serde(default, deserialize_with = "de::field")]
    pub double_dependant_locality: String,

    // Delivery point context. Not consumed by the premise rules.
    #[serde(default, deserialize_with = "de::field")]
    pub post_town: String,
    #[serde(default, deserialize_with = "de::field")]
    pub postcode: String,
    #[serde(default, deserialize_with = "de::field")]
    pub postcode_type: String,
    #[serde(default, deserialize_with = "de::field")]
    pub su_organisation_indicator: String,
    #[serde(default, deserialize_with = "de::field")]
    pub delivery_point_suffix: String,

    // Administrative geography.
    #[serde(default, deserialize_with = "de::field")]
    pub county: String,
    #[serde(default, deserialize_with = "de::field")]
    pub traditional_county: String,
    #[serde(default, deserialize_with = "de::field")]
    pub administrative_county: String,
    #[serde(default, deserialize_with = "de::field")]
    pub postal_county: String,
    #[serde(default, deserialize_with = "de::field")]
    pub district: String,
    #[serde(default, deserialize_with = "de::field")]
    pub ward: String,
    #[serde(default, deserialize_with = "de::field")]
    pub country: String,

    // Identifiers and grid references.
    #[serde(default, deserialize_with = "de::integer")]
    pub udprn: Option<i64>,
    #[serde(default, deserialize_with = "de::integer")]
    pub umprn: Option<i64>,
    #[serde(default, deserialize_with = "de::integer")]
    pub northings: Option<i64>,
    #[serde(default, deserialize_with = "de::integer")]
    pub eastings: Option<i64>,
    #[serde(default, deserialize_with = "de::float")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "de::float")]
    pub latitude: Option<f64>,

    /// Set by the upstream normalizer when the sub building name and
    /// building name should render on one combined line instead of two.
    #[serde(default)]
    pub merge_sub_and_building: bool,
}

/// Premise attributes of an address formatted for presentation.
///
/// `premise` is the canonical single-string form of the full premise;
/// `line_1`..`line_3` are the printable address lines, most specific first.
/// Absent lines are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedPremise {
    pub premise: String,
    pub line_1: String,
    pub line_2: String,
    pub line_3: String,
}

/// Field-level coercions matching the PAF accessor conventions: absent or
/// null text fields become `""`, numbers stringify; numeric fields accept
/// numeric strings, with empty or unparseable input collapsing to `None`.
mod de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    pub(super) fn field<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => String::new(),
            Some(Raw::Text(s)) => s,
            Some(Raw::Int(n)) => n.to_string(),
            Some(Raw::Float(n)) => n.to_string(),
        })
    }

    pub(super) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => None,
            Some(Raw::Int(n)) => Some(n),
            Some(Raw::Float(n)) => Some(n as i64),
            Some(Raw::Text(s)) => s.trim().parse().ok(),
        })
    }

    pub(super) fn float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => None,
            Some(Raw::Int(n)) => Some(n as f64),
            Some(Raw::Float(n)) => Some(n),
            Some(Raw::Text(s)) => s.trim().parse().ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let address: Address = serde_json::from_str("{}").unwrap();
        assert_eq!(address, Address::default());
        assert_eq!(address.building_name, "");
        assert_eq!(address.udprn, None);
        assert!(!address.merge_sub_and_building);
    }

    #[test]
    fn numbers_coerce_into_text_fields() {
        let address: Address = serde_json::from_str(r#"{"building_number": 12}"#).unwrap();
        assert_eq!(address.building_number, "12");
    }

    #[test]
    fn null_text_fields_become_empty() {
        let address: Address = serde_json::from_str(r#"{"thoroughfare": null}"#).unwrap();
        assert_eq!(address.thoroughfare, "");
    }

    #[test]
    fn numeric_fields_accept_numbers_and_strings() {
        let address: Address =
            serde_json::from_str(r#"{"udprn": 19036203, "umprn": "50906066"}"#).unwrap();
        assert_eq!(address.udprn, Some(19036203));
        assert_eq!(address.umprn, Some(50906066));
    }

    #[test]
    fn empty_strings_collapse_numeric_fields() {
        let address: Address =
            serde_json::from_str(r#"{"udprn": "", "longitude": "", "latitude": "-0.38122"}"#)
                .unwrap();
        assert_eq!(address.udprn, None);
        assert_eq!(address.longitude, None);
        assert_eq!(address.latitude, Some(-0.38122));
    }

    #[test]
    fn full_record_round_trips() {
        let input = r#"{
            "building_number": "2",
            "thoroughfare": "Barons Court Road",
            "post_town": "LONDON",
            "postcode": "W14 9DT",
            "longitude": -0.208644362,
            "latitude": 51.48905487,
            "eastings": 524466,
            "northings": 178299
        }"#;
        let address: Address = serde_json::from_str(input).unwrap();
        assert_eq!(address.building_number, "2");
        assert_eq!(address.post_town, "LONDON");
        assert_eq!(address.eastings, Some(524466));

        let json = serde_json::to_string(&address).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
