//! New employee construction, shared by the initial cohort and hiring.
//!
//! Given an id, a country and a hire date, draws every other attribute in a
//! fixed order so a seeded run always produces the same people:
//!
//! gender ratio, gender, age at hire, city, department, name, salary tier,
//! salary, marital status, citizenship, recruitment source, engagement,
//! satisfaction, absence count, job title.
//!
//! The resulting snapshot describes the employee in the year they enter the
//! history: age and tenure are measured in that year, and no rating or
//! bonus has been awarded yet.

use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use workforce_types::{
    EmployeeId, EmployeeSnapshot, EmploymentStatus, Gender, MaritalStatus, SalaryTier,
};

use crate::calendar;
use crate::config::{
    CompensationConfig, CountryConfig, DepartmentConfig, SalaryBands, SalaryConfig,
    WorkforceConfig, label_table,
};
use crate::error::PolicyError;
use crate::identity::IdentityProvider;
use crate::sampler::{self, IntRange, RateRange, WeightedTable};
use crate::titles::JobTitleResolver;

/// Where and when a new employee starts.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    /// Employing country.
    pub country: &'a CountryConfig,
    /// Date of hire.
    pub hire_date: NaiveDate,
    /// Year of the first snapshot.
    pub year: i32,
}

/// Builds first-year snapshots for new employees.
#[derive(Debug)]
pub struct EmployeeFactory {
    female_ratio: RateRange,
    age_at_hire: IntRange<u32>,
    citizenship_home_probability: f64,
    citizenships: Vec<String>,
    departments: WeightedTable<String>,
    tiers: WeightedTable<SalaryTier>,
    bands: SalaryBands,
    recruitment_sources: WeightedTable<String>,
    engagement: IntRange<u8>,
    satisfaction: IntRange<u8>,
    absence_count: IntRange<u32>,
    titles: JobTitleResolver,
    identity: Box<dyn IdentityProvider>,
}

impl EmployeeFactory {
    /// Build the factory from the configuration sections it samples from.
    pub fn new(
        countries: &[CountryConfig],
        departments: &[DepartmentConfig],
        salary: &SalaryConfig,
        workforce: &WorkforceConfig,
        compensation: &CompensationConfig,
        identity: Box<dyn IdentityProvider>,
    ) -> Result<Self, PolicyError> {
        let department_table =
            WeightedTable::new(departments.iter().map(|d| (d.name.clone(), d.weight))).map_err(
                |source| PolicyError::Sampler {
                    context: "departments",
                    source,
                },
            )?;
        let tiers = WeightedTable::new(
            SalaryTier::ALL.map(|tier| (tier, salary.tier_weights.weight(tier))),
        )
        .map_err(|source| PolicyError::Sampler {
            context: "tier weights",
            source,
        })?;

        Ok(Self {
            female_ratio: workforce.female_ratio,
            age_at_hire: workforce.age_at_hire,
            citizenship_home_probability: workforce.citizenship_home_probability,
            citizenships: countries.iter().map(|c| c.name.clone()).collect(),
            departments: department_table,
            tiers,
            bands: salary.bands,
            recruitment_sources: label_table(&workforce.recruitment_sources, "recruitment sources")?,
            engagement: compensation.engagement,
            satisfaction: compensation.satisfaction,
            absence_count: compensation.absence_count,
            titles: JobTitleResolver::new(salary.bands, departments, &workforce.fallback_title),
            identity,
        })
    }

    /// The title resolver built from the same bands and departments.
    pub const fn titles(&self) -> &JobTitleResolver {
        &self.titles
    }

    /// Create one employee.
    pub fn create<R: Rng>(
        &self,
        employee_id: EmployeeId,
        placement: Placement<'_>,
        rng: &mut R,
    ) -> Result<EmployeeSnapshot, PolicyError> {
        let Placement {
            country,
            hire_date,
            year,
        } = placement;

        let female_ratio = self.female_ratio.sample(rng);
        let gender = if rng.random::<f64>() < female_ratio {
            Gender::Female
        } else {
            Gender::Male
        };
        let age_at_hire = self.age_at_hire.sample(rng);
        let city = sampler::choose(&country.cities, rng, "cities")?.clone();
        let department = self.departments.sample(rng)?.clone();
        let name = self.identity.name(&country.locale, gender, rng);
        let tier = *self.tiers.sample(rng)?;
        let salary = Decimal::from(self.bands.band(tier).range().sample(rng));
        let marital_status = *sampler::choose(&MaritalStatus::ALL, rng, "marital statuses")?;
        let citizenship_country = if rng.random::<f64>() < self.citizenship_home_probability {
            country.name.clone()
        } else {
            sampler::choose(&self.citizenships, rng, "citizenships")?.clone()
        };
        let recruitment_source = self.recruitment_sources.sample(rng)?.clone();
        let employee_engagement = self.engagement.sample(rng);
        let employee_satisfaction = self.satisfaction.sample(rng);
        let absence_count = self.absence_count.sample(rng);
        let job_title = self.titles.resolve(&department, salary, rng).title;

        let birth_date = calendar::birth_date_for(hire_date, age_at_hire)?;

        Ok(EmployeeSnapshot {
            year,
            employee_id,
            first_name: name.first_name,
            last_name: name.last_name,
            gender,
            marital_status,
            citizenship_country,
            recruitment_source,
            country: country.name.clone(),
            city,
            department,
            job_title,
            hire_date,
            birth_date,
            age: calendar::age_in(year, birth_date)?,
            status: EmploymentStatus::Active,
            termination_date: None,
            exit_reason: None,
            tenure_days: calendar::days_between(hire_date, calendar::year_end(year)?),
            salary,
            bonus: None,
            performance_rating: None,
            employee_engagement,
            employee_satisfaction,
            absence_count,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::config::{default_countries, default_departments};
    use crate::identity::LocaleNameBank;

    pub(crate) fn factory() -> EmployeeFactory {
        EmployeeFactory::new(
            &default_countries(),
            &default_departments(),
            &SalaryConfig::default(),
            &WorkforceConfig::default(),
            &CompensationConfig::default(),
            Box::new(LocaleNameBank::new()),
        )
        .unwrap()
    }

    #[test]
    fn new_employee_fields_are_in_range() {
        let f = factory();
        let countries = default_countries();
        let usa = countries.iter().find(|c| c.name == "USA").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let hire_date = NaiveDate::from_ymd_opt(2021, 9, 14).unwrap();

        for n in 1..=200 {
            let e = f
                .create(
                    EmployeeId::new(n),
                    Placement {
                        country: usa,
                        hire_date,
                        year: 2021,
                    },
                    &mut rng,
                )
                .unwrap();
            assert_eq!(e.country, "USA");
            assert!(usa.cities.contains(&e.city));
            assert!((22..=55).contains(&e.age));
            assert_eq!(e.tenure_days, 108);
            assert!(e.salary >= Decimal::from(50_000) && e.salary <= Decimal::from(200_000));
            assert_ne!(e.job_title, "General Employee");
            assert!(e.is_active());
            assert_eq!(e.bonus, None);
            assert_eq!(e.performance_rating, None);
            assert!(countries.iter().any(|c| c.name == e.citizenship_country));
        }
    }

    #[test]
    fn backdated_employee_is_measured_in_entry_year() {
        let f = factory();
        let countries = default_countries();
        let india = countries.first().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        let e = f
            .create(
                EmployeeId::new(1),
                Placement {
                    country: india,
                    hire_date: NaiveDate::from_ymd_opt(2017, 12, 31).unwrap(),
                    year: 2018,
                },
                &mut rng,
            )
            .unwrap();
        assert_eq!(e.year, 2018);
        assert_eq!(e.tenure_days, 365);
        assert_eq!(i32::try_from(e.age).unwrap(), 2018 - e.birth_date.year());
    }
}
