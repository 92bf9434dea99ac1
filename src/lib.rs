//! Formats UK Postcode Address File (PAF) records into presentable premise
//! lines, following the premise rules in the Royal Mail programmer's guide.
//!
//! The engine is a deterministic classifier: it inspects which structural
//! fields are populated (sub building name, building name, building number,
//! PO Box) and applies exactly one of nine formatting rules, including the
//! guide's Exception Rule for short numeric names and the building-range
//! split for names like "Stables 4-6". Formatting is pure and allocation
//! local, so records can be formatted from any number of threads.
//!
//! ```
//! use clearaddress::{Address, format_premise};
//!
//! let address = Address {
//!     building_number: "2".to_string(),
//!     thoroughfare: "Barons Court Road".to_string(),
//!     post_town: "LONDON".to_string(),
//!     postcode: "W14 9DT".to_string(),
//!     ..Address::default()
//! };
//!
//! let premise = format_premise(&address);
//! assert_eq!(premise.line_1, "2 Barons Court Road");
//! ```

mod address;
mod api;
mod rules;

pub use address::{Address, FormattedPremise};
pub use api::{PremiseRule, format_premise, premise_rule};
pub use rules::premise::helpers::{BuildingRangeMatch, check_building_range};
pub use rules::premise::predicates::name_exception;
