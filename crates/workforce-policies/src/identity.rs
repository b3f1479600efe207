//! Personal name generation.
//!
//! The simulation only needs a first and last name that fit the employing
//! country and the sampled gender. [`IdentityProvider`] is the seam; the
//! built-in [`LocaleNameBank`] draws from small per-locale pools using the
//! simulation's own generator, so names are reproducible under a seed.

use std::collections::BTreeMap;

use rand::RngCore;
use rand::seq::IndexedRandom;
use workforce_types::{Gender, PersonName};

/// Produces culturally consistent names for a locale and gender.
pub trait IdentityProvider: core::fmt::Debug {
    /// Generate a name. Implementations must draw only from `rng` if they
    /// want runs to be reproducible.
    fn name(&self, locale: &str, gender: Gender, rng: &mut dyn RngCore) -> PersonName;
}

/// Name pools for one locale.
#[derive(Debug, Clone, Copy)]
pub struct NamePool {
    male: &'static [&'static str],
    female: &'static [&'static str],
    last: &'static [&'static str],
}

impl NamePool {
    /// Build a pool from static name lists.
    pub const fn new(
        male: &'static [&'static str],
        female: &'static [&'static str],
        last: &'static [&'static str],
    ) -> Self {
        Self { male, female, last }
    }

    fn draw(&self, gender: Gender, rng: &mut dyn RngCore) -> PersonName {
        let firsts = match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        };
        let first_name = firsts.choose(rng).copied().unwrap_or("Alex");
        let last_name = self.last.choose(rng).copied().unwrap_or("Taylor");
        PersonName {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        }
    }
}

const EN_IN: NamePool = NamePool::new(
    &[
        "Aarav", "Vivaan", "Aditya", "Arjun", "Rahul", "Rohan", "Karan", "Vikram", "Sanjay",
        "Amit", "Nikhil", "Siddharth",
    ],
    &[
        "Priya", "Ananya", "Diya", "Kavya", "Meera", "Neha", "Pooja", "Sneha", "Riya", "Aisha",
        "Lakshmi", "Shreya",
    ],
    &[
        "Sharma", "Patel", "Iyer", "Reddy", "Nair", "Gupta", "Singh", "Mehta", "Kapoor", "Rao",
        "Chatterjee", "Desai", "Joshi", "Verma",
    ],
);

const EN_US: NamePool = NamePool::new(
    &[
        "James", "Michael", "Robert", "David", "William", "Joseph", "Daniel", "Matthew", "Andrew",
        "Christopher", "Ethan", "Tyler",
    ],
    &[
        "Mary", "Jennifer", "Linda", "Elizabeth", "Jessica", "Sarah", "Emily", "Ashley", "Megan",
        "Rachel", "Hannah", "Olivia",
    ],
    &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
        "Anderson", "Taylor", "Thomas", "Moore", "Jackson",
    ],
);

const EN_AU: NamePool = NamePool::new(
    &[
        "Jack", "Oliver", "William", "Noah", "Thomas", "Lachlan", "Cooper", "Riley", "Liam",
        "Harrison", "Mitchell", "Hamish",
    ],
    &[
        "Charlotte", "Olivia", "Amelia", "Isla", "Mia", "Chloe", "Sophie", "Emily", "Matilda",
        "Ruby", "Grace", "Zoe",
    ],
    &[
        "Smith", "Jones", "Williams", "Brown", "Wilson", "Taylor", "Nguyen", "Johnson", "Martin",
        "White", "Anderson", "Walker", "Kelly", "Ryan",
    ],
);

const FALLBACK: NamePool = NamePool::new(
    &["Alex", "Sam", "Daniel", "Leo", "Adam", "Max"],
    &["Anna", "Maria", "Sara", "Laura", "Nina", "Eva"],
    &["Taylor", "Lee", "Morgan", "Carter", "Evans", "Fischer"],
);

/// Built-in name bank for `en_IN`, `en_US` and `en_AU`, with a generic
/// pool for any other locale.
#[derive(Debug, Clone)]
pub struct LocaleNameBank {
    pools: BTreeMap<&'static str, NamePool>,
    fallback: NamePool,
}

impl LocaleNameBank {
    /// The bank with its built-in locales.
    pub fn new() -> Self {
        Self {
            pools: BTreeMap::from([("en_IN", EN_IN), ("en_US", EN_US), ("en_AU", EN_AU)]),
            fallback: FALLBACK,
        }
    }

    /// Whether `locale` has a dedicated pool.
    pub fn supports(&self, locale: &str) -> bool {
        self.pools.contains_key(locale)
    }
}

impl Default for LocaleNameBank {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for LocaleNameBank {
    fn name(&self, locale: &str, gender: Gender, rng: &mut dyn RngCore) -> PersonName {
        self.pools
            .get(locale)
            .unwrap_or(&self.fallback)
            .draw(gender, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn names_come_from_the_locale_pool() {
        let bank = LocaleNameBank::new();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..50 {
            let name = bank.name("en_IN", Gender::Female, &mut rng);
            assert!(EN_IN.female.contains(&name.first_name.as_str()));
            assert!(EN_IN.last.contains(&name.last_name.as_str()));
        }
    }

    #[test]
    fn gender_selects_first_name_list() {
        let bank = LocaleNameBank::new();
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        for _ in 0..50 {
            let name = bank.name("en_AU", Gender::Male, &mut rng);
            assert!(EN_AU.male.contains(&name.first_name.as_str()));
        }
    }

    #[test]
    fn unknown_locale_uses_fallback_pool() {
        let bank = LocaleNameBank::new();
        assert!(!bank.supports("de_DE"));
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let name = bank.name("de_DE", Gender::Female, &mut rng);
        assert!(FALLBACK.female.contains(&name.first_name.as_str()));
    }

    #[test]
    fn seeded_names_repeat() {
        let bank = LocaleNameBank::new();
        let a = bank.name("en_US", Gender::Male, &mut ChaCha8Rng::seed_from_u64(3));
        let b = bank.name("en_US", Gender::Male, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
