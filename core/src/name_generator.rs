//! Deterministic names for synthetic employees and customer accounts.
//!
//! Same RNG seed = same names.

use crate::rng::SeedRng;

pub struct NameGenerator;

impl NameGenerator {
    /// "First Last".
    pub fn employee_name(rng: &mut SeedRng) -> String {
        format!("{} {}", rng.pick(Self::first_names()), rng.pick(Self::last_names()))
    }

    /// "Stem Industry Suffix", e.g. "Northwind Logistics Group".
    pub fn company_name(rng: &mut SeedRng, industry: &str) -> String {
        format!("{} {} {}", rng.pick(Self::company_stems()), industry, rng.pick(Self::company_suffixes()))
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Sarah", "Michael", "Emily", "David", "Jessica", "Robert", "Ashley", "James",
            "Olivia", "Daniel", "Sophia", "Matthew", "Priya", "Wei", "Carlos", "Amara",
            "Hiroshi", "Fatima", "Lucas", "Ingrid", "Mateo", "Aisha", "Noah", "Elena",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Johnson", "Chen", "Rodriguez", "Patel", "Williams", "Kim", "Nguyen", "Garcia",
            "Martinez", "Thompson", "Okafor", "Schmidt", "Rossi", "Tanaka", "Haddad", "Larsen",
            "Murphy", "Silva", "Kowalski", "Andersson",
        ]
    }

    fn company_stems() -> &'static [&'static str] {
        &[
            "Northwind", "Acme", "Globex", "Initech", "Summit", "Bluewater", "Ironclad",
            "Evergreen", "Pinnacle", "Redwood", "Stellar", "Harbor",
        ]
    }

    fn company_suffixes() -> &'static [&'static str] {
        &["Inc", "Group", "Corp", "Partners", "Holdings", "LLC"]
    }
}
