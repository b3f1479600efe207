//! Job title resolution from department and salary.
//!
//! The salary picks a tier by checking the ordered bands; the department's
//! role list for that tier supplies the title. Anything unmapped (a salary
//! between bands or above the top band, an unknown department, a tier with
//! no roles) resolves to the fallback title. Resolution never fails.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;
use workforce_types::SalaryTier;

use crate::config::{DepartmentConfig, SalaryBands, TierRoles};

/// A resolved title and the tier it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleAssignment {
    /// Tier whose band contains the salary, if any.
    pub tier: Option<SalaryTier>,
    /// The job title.
    pub title: String,
}

/// Maps `(department, salary)` to a job title.
#[derive(Debug, Clone)]
pub struct JobTitleResolver {
    bands: SalaryBands,
    roles: BTreeMap<String, TierRoles>,
    fallback: String,
}

impl JobTitleResolver {
    /// Build a resolver from the band table and department role lists.
    pub fn new(bands: SalaryBands, departments: &[DepartmentConfig], fallback: &str) -> Self {
        let roles = departments
            .iter()
            .map(|d| (d.name.clone(), d.roles.clone()))
            .collect();
        Self {
            bands,
            roles,
            fallback: fallback.to_owned(),
        }
    }

    /// The tier whose band contains `salary`. Bands are checked from
    /// Junior upward and the first match wins.
    pub fn tier_for(&self, salary: Decimal) -> Option<SalaryTier> {
        SalaryTier::ALL
            .into_iter()
            .find(|tier| self.bands.band(*tier).contains(salary))
    }

    /// The fallback title.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Resolve a title. Consumes one draw only when a non-empty role list
    /// exists for the department and tier.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        department: &str,
        salary: Decimal,
        rng: &mut R,
    ) -> TitleAssignment {
        let tier = self.tier_for(salary);
        let title = tier
            .and_then(|t| {
                self.roles
                    .get(department)
                    .map(|roles| roles.for_tier(t))
            })
            .and_then(|pool| pool.choose(rng))
            .map_or_else(|| self.fallback.clone(), Clone::clone);
        TitleAssignment { tier, title }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::config::{SalaryConfig, default_departments};

    fn resolver() -> JobTitleResolver {
        JobTitleResolver::new(
            SalaryConfig::default().bands,
            &default_departments(),
            "General Employee",
        )
    }

    #[test]
    fn band_edges_are_inclusive() {
        let r = resolver();
        assert_eq!(r.tier_for(dec!(50000)), Some(SalaryTier::Junior));
        assert_eq!(r.tier_for(dec!(75000)), Some(SalaryTier::Junior));
        assert_eq!(r.tier_for(dec!(75001)), Some(SalaryTier::Mid));
        assert_eq!(r.tier_for(dec!(120000)), Some(SalaryTier::Mid));
        assert_eq!(r.tier_for(dec!(200000)), Some(SalaryTier::Senior));
    }

    #[test]
    fn gaps_and_overflow_have_no_tier() {
        let r = resolver();
        assert_eq!(r.tier_for(dec!(75000.50)), None);
        assert_eq!(r.tier_for(dec!(200000.01)), None);
        assert_eq!(r.tier_for(dec!(49999.99)), None);
    }

    #[test]
    fn resolves_from_department_roles() {
        let r = resolver();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let assigned = r.resolve("HR", dec!(130000), &mut rng);
            assert_eq!(assigned.tier, Some(SalaryTier::Senior));
            assert!(
                assigned.title == "HR Director" || assigned.title == "Chief Human Resources Officer"
            );
        }
    }

    #[test]
    fn unknown_department_falls_back() {
        let r = resolver();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let assigned = r.resolve("Legal", dec!(60000), &mut rng);
        assert_eq!(assigned.tier, Some(SalaryTier::Junior));
        assert_eq!(assigned.title, "General Employee");
    }

    #[test]
    fn salary_above_top_band_falls_back() {
        let r = resolver();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let assigned = r.resolve("IT", dec!(250000), &mut rng);
        assert_eq!(assigned.tier, None);
        assert_eq!(assigned.title, r.fallback());
    }

    #[test]
    fn same_draw_same_title() {
        let r = resolver();
        let a = r.resolve("Finance", dec!(90000), &mut ChaCha8Rng::seed_from_u64(9));
        let b = r.resolve("Finance", dec!(90000), &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
