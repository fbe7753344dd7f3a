//! Random address record generation.
//!
//! The record shape mirrors what the real provider returns; callers of the
//! proxy never parse it, so plausibility is all that matters here.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use pcw_core::Catalog;

const STREETS: &[&str] = &[
    "Main Street",
    "Church Road",
    "High Street",
    "Mill Lane",
    "Station Road",
    "The Green",
    "Park Avenue",
    "Castle Street",
];

const IE_TOWNS: &[(&str, &str)] = &[
    ("Dublin", "Co. Dublin"),
    ("Cork", "Co. Cork"),
    ("Limerick", "Co. Limerick"),
    ("Galway", "Co. Galway"),
    ("Waterford", "Co. Waterford"),
];

const UK_TOWNS: &[(&str, &str)] = &[
    ("London", "Greater London"),
    ("Manchester", "Greater Manchester"),
    ("Birmingham", "West Midlands"),
    ("Leeds", "West Yorkshire"),
    ("Bristol", "Somerset"),
];

const ORGANISATIONS: &[&str] = &["", "", "", "Acme Ltd", "Riverside Surgery", "The Old Forge"];

/// A single mocked address record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MockAddress {
    /// First address line, e.g. "12 Main Street".
    pub addressline1: String,
    /// Second address line (post town).
    pub addressline2: String,
    /// One-line summary of the whole address.
    pub summaryline: String,
    /// Organisation at the address, often empty.
    pub organisation: String,
    /// Street name.
    pub street: String,
    /// Post town.
    pub posttown: String,
    /// County.
    pub county: String,
    /// Full postcode, starting with the queried fragment.
    pub postcode: String,
}

/// Generates 1-10 random records whose postcodes extend `fragment`.
pub fn random_addresses(
    rng: &mut impl Rng,
    catalog: Catalog,
    fragment: &str,
) -> Vec<MockAddress> {
    let count = rng.gen_range(1..=10);
    (0..count)
        .map(|_| random_address(rng, catalog, fragment))
        .collect()
}

fn random_address(rng: &mut impl Rng, catalog: Catalog, fragment: &str) -> MockAddress {
    let towns = match catalog {
        Catalog::Eircode => IE_TOWNS,
        Catalog::Premise => UK_TOWNS,
    };

    let street = *STREETS.choose(rng).expect("streets are non-empty");
    let (posttown, county) = *towns.choose(rng).expect("towns are non-empty");
    let organisation = *ORGANISATIONS.choose(rng).expect("organisations are non-empty");
    let number = rng.gen_range(1..200);
    let postcode = format!("{}{}", fragment.to_uppercase(), random_suffix(rng));

    let addressline1 = format!("{number} {street}");
    let summaryline = if organisation.is_empty() {
        format!("{addressline1}, {posttown}, {county}, {postcode}")
    } else {
        format!("{organisation}, {addressline1}, {posttown}, {county}, {postcode}")
    };

    MockAddress {
        addressline1,
        addressline2: posttown.to_string(),
        summaryline,
        organisation: organisation.to_string(),
        street: street.to_string(),
        posttown: posttown.to_string(),
        county: county.to_string(),
        postcode,
    }
}

fn random_suffix(rng: &mut impl Rng) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHJKNPRTUVWXY0123456789";
    (0..3)
        .map(|_| *ALPHABET.choose(rng).expect("alphabet is non-empty") as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_count_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let records = random_addresses(&mut rng, Catalog::Eircode, "D02");
            assert!((1..=10).contains(&records.len()));
        }
    }

    #[test]
    fn test_postcode_extends_fragment() {
        let mut rng = StdRng::seed_from_u64(7);
        for record in random_addresses(&mut rng, Catalog::Premise, "sw1a") {
            assert!(record.postcode.starts_with("SW1A"));
        }
    }

    #[test]
    fn test_county_matches_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for record in random_addresses(&mut rng, Catalog::Eircode, "T12") {
            assert!(record.county.starts_with("Co. "));
        }
    }

    #[test]
    fn test_serializes_with_expected_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let records = random_addresses(&mut rng, Catalog::Eircode, "D02");
        let json = serde_json::to_value(&records).unwrap();

        let first = &json[0];
        for field in [
            "addressline1",
            "addressline2",
            "summaryline",
            "organisation",
            "street",
            "posttown",
            "county",
            "postcode",
        ] {
            assert!(first.get(field).is_some(), "missing field {field}");
        }
    }
}
