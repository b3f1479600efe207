//! Typed configuration sections consumed by the policies.
//!
//! These structs mirror sections of `workforce-config.yaml`. Every field
//! has a serde default equal to the shipped generator's constants, so an
//! empty file yields the reference dataset. Validation lives next to each
//! section and runs once, before the first simulated year.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use workforce_types::SalaryTier;

use crate::error::PolicyError;
use crate::sampler::{IntRange, RateRange, WeightedTable};

// ---------------------------------------------------------------------------
// Shared shapes
// ---------------------------------------------------------------------------

/// A label with a relative weight (exit reasons, recruitment sources).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedLabel {
    /// The label written to the dataset.
    pub name: String,
    /// Relative weight.
    pub weight: f64,
}

impl WeightedLabel {
    /// Build a label.
    pub fn new(name: &str, weight: f64) -> Self {
        Self {
            name: name.to_owned(),
            weight,
        }
    }
}

/// Build a sampling table from weighted labels.
pub fn label_table(
    labels: &[WeightedLabel],
    context: &'static str,
) -> Result<WeightedTable<String>, PolicyError> {
    WeightedTable::new(labels.iter().map(|l| (l.name.clone(), l.weight)))
        .map_err(|source| PolicyError::Sampler { context, source })
}

// ---------------------------------------------------------------------------
// Countries and departments
// ---------------------------------------------------------------------------

/// One employing country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryConfig {
    /// Country name written to the dataset.
    pub name: String,
    /// Locale passed to the identity provider (e.g. `en_IN`).
    pub locale: String,
    /// Office cities; each employee is placed in one uniformly.
    pub cities: Vec<String>,
    /// Headcount of the initial cohort.
    pub starting_headcount: u32,
}

impl CountryConfig {
    fn new(name: &str, locale: &str, cities: &[&str], starting_headcount: u32) -> Self {
        Self {
            name: name.to_owned(),
            locale: locale.to_owned(),
            cities: cities.iter().map(|c| (*c).to_owned()).collect(),
            starting_headcount,
        }
    }
}

/// Role names per salary tier for one department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRoles {
    /// Titles for the Junior band.
    #[serde(default)]
    pub junior: Vec<String>,
    /// Titles for the Mid band.
    #[serde(default)]
    pub mid: Vec<String>,
    /// Titles for the Senior band.
    #[serde(default)]
    pub senior: Vec<String>,
}

impl TierRoles {
    fn new(junior: [&str; 2], mid: [&str; 2], senior: [&str; 2]) -> Self {
        let owned = |names: [&str; 2]| names.iter().map(|n| (*n).to_owned()).collect();
        Self {
            junior: owned(junior),
            mid: owned(mid),
            senior: owned(senior),
        }
    }

    /// Titles registered for `tier`.
    pub fn for_tier(&self, tier: SalaryTier) -> &[String] {
        match tier {
            SalaryTier::Junior => &self.junior,
            SalaryTier::Mid => &self.mid,
            SalaryTier::Senior => &self.senior,
        }
    }
}

/// One department: its hiring weight and title table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentConfig {
    /// Department name.
    pub name: String,
    /// Relative weight when assigning new employees.
    pub weight: f64,
    /// Titles per tier. Missing tiers fall back to the generic title.
    #[serde(default)]
    pub roles: TierRoles,
}

impl DepartmentConfig {
    fn new(name: &str, weight: f64, roles: TierRoles) -> Self {
        Self {
            name: name.to_owned(),
            weight,
            roles,
        }
    }
}

/// Check the country list.
pub fn validate_countries(countries: &[CountryConfig]) -> Result<(), PolicyError> {
    if countries.is_empty() {
        return Err(PolicyError::invalid("at least one country must be configured"));
    }
    let mut seen = BTreeSet::new();
    for country in countries {
        if !seen.insert(country.name.as_str()) {
            return Err(PolicyError::invalid(format!(
                "country {} is configured twice",
                country.name
            )));
        }
        if country.cities.is_empty() {
            return Err(PolicyError::invalid(format!(
                "country {} has no cities",
                country.name
            )));
        }
    }
    Ok(())
}

/// Check the department list.
pub fn validate_departments(departments: &[DepartmentConfig]) -> Result<(), PolicyError> {
    let mut seen = BTreeSet::new();
    for department in departments {
        if !seen.insert(department.name.as_str()) {
            return Err(PolicyError::invalid(format!(
                "department {} is configured twice",
                department.name
            )));
        }
    }
    WeightedTable::new(departments.iter().map(|d| (&d.name, d.weight)))
        .map(|_table| ())
        .map_err(|source| PolicyError::Sampler {
            context: "departments",
            source,
        })
}

// ---------------------------------------------------------------------------
// Salary
// ---------------------------------------------------------------------------

/// A closed salary band in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    /// Lowest salary in the band.
    pub min: i64,
    /// Highest salary in the band.
    pub max: i64,
}

impl SalaryBand {
    /// Whether `salary` falls inside the band.
    pub fn contains(&self, salary: Decimal) -> bool {
        Decimal::from(self.min) <= salary && salary <= Decimal::from(self.max)
    }

    /// The band as a drawable range.
    pub const fn range(&self) -> IntRange<i64> {
        IntRange {
            min: self.min,
            max: self.max,
        }
    }
}

/// The three salary bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBands {
    /// Junior band.
    pub junior: SalaryBand,
    /// Mid band.
    pub mid: SalaryBand,
    /// Senior band.
    pub senior: SalaryBand,
}

impl SalaryBands {
    /// The band for `tier`.
    pub const fn band(&self, tier: SalaryTier) -> SalaryBand {
        match tier {
            SalaryTier::Junior => self.junior,
            SalaryTier::Mid => self.mid,
            SalaryTier::Senior => self.senior,
        }
    }
}

/// Relative weights for the starting tier of a new employee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    /// Junior weight.
    pub junior: f64,
    /// Mid weight.
    pub mid: f64,
    /// Senior weight.
    pub senior: f64,
}

impl TierWeights {
    /// Weight for `tier`.
    pub const fn weight(&self, tier: SalaryTier) -> f64 {
        match tier {
            SalaryTier::Junior => self.junior,
            SalaryTier::Mid => self.mid,
            SalaryTier::Senior => self.senior,
        }
    }
}

/// Salary bands and the starting-tier distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// Bands used for starting salaries and title resolution.
    #[serde(default = "default_bands")]
    pub bands: SalaryBands,
    /// Starting-tier weights.
    #[serde(default = "default_tier_weights")]
    pub tier_weights: TierWeights,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            bands: default_bands(),
            tier_weights: default_tier_weights(),
        }
    }
}

impl SalaryConfig {
    /// Bands must be non-empty, non-negative, ordered and non-overlapping.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let mut previous_max: Option<i64> = None;
        for tier in SalaryTier::ALL {
            let band = self.bands.band(tier);
            if band.min < 0 || band.min > band.max {
                return Err(PolicyError::invalid(format!(
                    "{tier} salary band [{}, {}] is invalid",
                    band.min, band.max
                )));
            }
            if previous_max.is_some_and(|prev| band.min <= prev) {
                return Err(PolicyError::invalid(format!(
                    "{tier} salary band overlaps or precedes the band below it"
                )));
            }
            previous_max = Some(band.max);
        }
        WeightedTable::new(SalaryTier::ALL.map(|t| (t, self.tier_weights.weight(t))))
            .map(|_table| ())
            .map_err(|source| PolicyError::Sampler {
                context: "tier weights",
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Workforce attributes
// ---------------------------------------------------------------------------

/// Attribute distributions for newly created employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkforceConfig {
    /// Range of the per-employee female ratio.
    #[serde(default = "default_female_ratio")]
    pub female_ratio: RateRange,
    /// Age at hire, in whole years.
    #[serde(default = "default_age_at_hire")]
    pub age_at_hire: IntRange<u32>,
    /// Hire years for the backdated initial cohort.
    #[serde(default = "default_initial_hire_years")]
    pub initial_hire_years: IntRange<i32>,
    /// Probability that citizenship is the employing country.
    #[serde(default = "default_citizenship_home_probability")]
    pub citizenship_home_probability: f64,
    /// Recruitment channels.
    #[serde(default = "default_recruitment_sources")]
    pub recruitment_sources: Vec<WeightedLabel>,
    /// Title used when no role is registered for a department and tier.
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,
}

impl Default for WorkforceConfig {
    fn default() -> Self {
        Self {
            female_ratio: default_female_ratio(),
            age_at_hire: default_age_at_hire(),
            initial_hire_years: default_initial_hire_years(),
            citizenship_home_probability: default_citizenship_home_probability(),
            recruitment_sources: default_recruitment_sources(),
            fallback_title: default_fallback_title(),
        }
    }
}

impl WorkforceConfig {
    /// Check ranges, probabilities and the recruitment table.
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.female_ratio.validate_probability("workforce.female_ratio")?;
        self.age_at_hire.validate("workforce.age_at_hire")?;
        self.initial_hire_years
            .validate("workforce.initial_hire_years")?;
        RateRange::new(
            self.citizenship_home_probability,
            self.citizenship_home_probability,
        )
        .validate_probability("workforce.citizenship_home_probability")?;
        label_table(&self.recruitment_sources, "recruitment sources").map(|_table| ())
    }
}

// ---------------------------------------------------------------------------
// Lifecycle policies
// ---------------------------------------------------------------------------

/// Retirement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementConfig {
    /// Age (`year - birth_year`) at which an employee retires.
    #[serde(default = "default_retirement_age")]
    pub age: u32,
}

impl Default for RetirementConfig {
    fn default() -> Self {
        Self {
            age: default_retirement_age(),
        }
    }
}

/// Voluntary attrition rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttritionConfig {
    /// Range of the per-employee yearly leaving probability.
    #[serde(default = "default_attrition_probability")]
    pub probability: RateRange,
    /// Tenure (days, at January 1) within which leaving is possible.
    #[serde(default = "default_tenure_window_days")]
    pub tenure_window_days: IntRange<i64>,
    /// Reasons recorded for leavers.
    #[serde(default = "default_exit_reasons")]
    pub exit_reasons: Vec<WeightedLabel>,
}

impl Default for AttritionConfig {
    fn default() -> Self {
        Self {
            probability: default_attrition_probability(),
            tenure_window_days: default_tenure_window_days(),
            exit_reasons: default_exit_reasons(),
        }
    }
}

impl AttritionConfig {
    /// Check the probability range, tenure window and reason table.
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.probability
            .validate_probability("attrition.probability")?;
        self.tenure_window_days
            .validate("attrition.tenure_window_days")?;
        label_table(&self.exit_reasons, "exit reasons").map(|_table| ())
    }
}

/// A year whose growth rate is fixed instead of sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthShock {
    /// The affected year.
    pub year: i32,
    /// Growth rate used in that year.
    pub rate: f64,
}

/// Hiring rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiringConfig {
    /// Range of the yearly organic growth rate.
    #[serde(default = "default_growth_rate")]
    pub growth_rate: RateRange,
    /// Optional fixed-rate year.
    #[serde(default = "default_growth_shock")]
    pub shock: Option<GrowthShock>,
}

impl Default for HiringConfig {
    fn default() -> Self {
        Self {
            growth_rate: default_growth_rate(),
            shock: default_growth_shock(),
        }
    }
}

impl HiringConfig {
    /// Check the growth range and shock rate.
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.growth_rate.validate_probability("hiring.growth_rate")?;
        if let Some(shock) = self.shock {
            RateRange::new(shock.rate, shock.rate).validate_probability("hiring.shock.rate")?;
        }
        Ok(())
    }
}

/// One entry of the performance rating distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingWeight {
    /// Rating value.
    pub rating: u8,
    /// Relative weight.
    pub weight: f64,
}

/// Yearly compensation and engagement refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationConfig {
    /// Rating distribution over consecutive integers.
    #[serde(default = "default_ratings")]
    pub ratings: Vec<RatingWeight>,
    /// Salary growth at the lowest rating.
    #[serde(default = "default_base_growth")]
    pub base_growth: Decimal,
    /// Additional growth per rating step above the lowest.
    #[serde(default = "default_growth_per_rating")]
    pub growth_per_rating: Decimal,
    /// Bonus in months of salary, by rating. Missing ratings earn nothing.
    #[serde(default = "default_bonus_months")]
    pub bonus_months: BTreeMap<u8, u32>,
    /// Engagement scale.
    #[serde(default = "default_score_scale")]
    pub engagement: IntRange<u8>,
    /// Satisfaction scale.
    #[serde(default = "default_score_scale")]
    pub satisfaction: IntRange<u8>,
    /// Yearly absence count range.
    #[serde(default = "default_absence_count")]
    pub absence_count: IntRange<u32>,
}

impl Default for CompensationConfig {
    fn default() -> Self {
        Self {
            ratings: default_ratings(),
            base_growth: default_base_growth(),
            growth_per_rating: default_growth_per_rating(),
            bonus_months: default_bonus_months(),
            engagement: default_score_scale(),
            satisfaction: default_score_scale(),
            absence_count: default_absence_count(),
        }
    }
}

impl CompensationConfig {
    /// Lowest configured rating.
    pub fn min_rating(&self) -> Option<u8> {
        self.ratings.iter().map(|r| r.rating).min()
    }

    /// Check the rating table, growth parameters and score ranges.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let mut seen = BTreeSet::new();
        for entry in &self.ratings {
            if !seen.insert(entry.rating) {
                return Err(PolicyError::invalid(format!(
                    "rating {} is configured twice",
                    entry.rating
                )));
            }
        }
        WeightedTable::new(self.ratings.iter().map(|r| (r.rating, r.weight))).map_err(
            |source| PolicyError::Sampler {
                context: "performance ratings",
                source,
            },
        )?;
        if self.base_growth.is_sign_negative() || self.growth_per_rating.is_sign_negative() {
            return Err(PolicyError::invalid(
                "salary growth must not decrease with rating",
            ));
        }
        self.engagement.validate("compensation.engagement")?;
        self.satisfaction.validate("compensation.satisfaction")?;
        self.absence_count.validate("compensation.absence_count")
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

/// The three reference countries.
pub fn default_countries() -> Vec<CountryConfig> {
    vec![
        CountryConfig::new("India", "en_IN", &["Delhi", "Bangalore", "Pune", "Mumbai"], 2500),
        CountryConfig::new(
            "USA",
            "en_US",
            &["New York", "San Francisco", "Austin", "Seattle"],
            1200,
        ),
        CountryConfig::new("Australia", "en_AU", &["Sydney", "Perth", "Adelaide"], 800),
    ]
}

/// The seven reference departments and their titles.
pub fn default_departments() -> Vec<DepartmentConfig> {
    vec![
        DepartmentConfig::new(
            "Finance",
            0.15,
            TierRoles::new(
                ["Financial Analyst", "Accountant"],
                ["Senior Financial Analyst", "Finance Manager"],
                ["Controller", "Director of Finance"],
            ),
        ),
        DepartmentConfig::new(
            "IT",
            0.20,
            TierRoles::new(
                ["Software Engineer", "IT Support Specialist"],
                ["Data Scientist", "Solutions Architect"],
                ["IT Manager", "Principal Engineer"],
            ),
        ),
        DepartmentConfig::new(
            "Retail",
            0.30,
            TierRoles::new(
                ["Sales Associate", "Store Clerk"],
                ["Store Manager", "Retail Supervisor"],
                ["Regional Director", "Head of Retail Operations"],
            ),
        ),
        DepartmentConfig::new(
            "Research",
            0.05,
            TierRoles::new(
                ["Research Assistant", "Junior Scientist"],
                ["Senior Researcher", "Research Scientist"],
                ["Lead Scientist", "Director of Research"],
            ),
        ),
        DepartmentConfig::new(
            "Marketing",
            0.15,
            TierRoles::new(
                ["Marketing Assistant", "Digital Marketing Specialist"],
                ["Marketing Manager", "Brand Strategist"],
                ["Head of Marketing", "Chief Marketing Officer"],
            ),
        ),
        DepartmentConfig::new(
            "HR",
            0.10,
            TierRoles::new(
                ["HR Assistant", "Recruiter"],
                ["HR Manager", "Talent Acquisition Manager"],
                ["HR Director", "Chief Human Resources Officer"],
            ),
        ),
        DepartmentConfig::new(
            "Risk Management",
            0.05,
            TierRoles::new(
                ["Risk Analyst", "Compliance Officer"],
                ["Senior Risk Analyst", "Risk Manager"],
                ["Chief Risk Officer", "Director of Risk"],
            ),
        ),
    ]
}

const fn default_bands() -> SalaryBands {
    SalaryBands {
        junior: SalaryBand {
            min: 50_000,
            max: 75_000,
        },
        mid: SalaryBand {
            min: 75_001,
            max: 120_000,
        },
        senior: SalaryBand {
            min: 120_001,
            max: 200_000,
        },
    }
}

const fn default_tier_weights() -> TierWeights {
    TierWeights {
        junior: 0.5,
        mid: 0.4,
        senior: 0.1,
    }
}

const fn default_female_ratio() -> RateRange {
    RateRange::new(0.35, 0.50)
}

const fn default_age_at_hire() -> IntRange<u32> {
    IntRange { min: 22, max: 55 }
}

const fn default_initial_hire_years() -> IntRange<i32> {
    IntRange {
        min: 2007,
        max: 2017,
    }
}

const fn default_citizenship_home_probability() -> f64 {
    0.9
}

fn default_recruitment_sources() -> Vec<WeightedLabel> {
    vec![
        WeightedLabel::new("LinkedIn", 0.3),
        WeightedLabel::new("Company Website", 0.25),
        WeightedLabel::new("Referral", 0.2),
        WeightedLabel::new("Job Fair", 0.1),
        WeightedLabel::new("University Partner", 0.1),
        WeightedLabel::new("Online Job Board", 0.05),
    ]
}

fn default_fallback_title() -> String {
    "General Employee".to_owned()
}

const fn default_retirement_age() -> u32 {
    60
}

const fn default_attrition_probability() -> RateRange {
    RateRange::new(0.12, 0.18)
}

const fn default_tenure_window_days() -> IntRange<i64> {
    IntRange {
        min: 15,
        max: 365 * 25,
    }
}

fn default_exit_reasons() -> Vec<WeightedLabel> {
    vec![
        WeightedLabel::new("Better Opportunity", 0.5),
        WeightedLabel::new("Family Circumstances", 0.2),
        WeightedLabel::new("Relocation/Migration", 0.15),
        WeightedLabel::new("Health Issue", 0.1),
        WeightedLabel::new("Termination", 0.05),
    ]
}

const fn default_growth_rate() -> RateRange {
    RateRange::new(0.02, 0.05)
}

const fn default_growth_shock() -> Option<GrowthShock> {
    Some(GrowthShock {
        year: 2020,
        rate: 0.05,
    })
}

fn default_ratings() -> Vec<RatingWeight> {
    [(2, 0.05), (3, 0.10), (4, 0.20), (5, 0.30), (6, 0.20), (7, 0.10)]
        .into_iter()
        .map(|(rating, weight)| RatingWeight { rating, weight })
        .collect()
}

const fn default_base_growth() -> Decimal {
    Decimal::from_parts(5, 0, 0, false, 2)
}

const fn default_growth_per_rating() -> Decimal {
    Decimal::from_parts(2, 0, 0, false, 2)
}

fn default_bonus_months() -> BTreeMap<u8, u32> {
    BTreeMap::from([(2, 0), (3, 0), (4, 1), (5, 2), (6, 3), (7, 4)])
}

const fn default_score_scale() -> IntRange<u8> {
    IntRange { min: 1, max: 5 }
}

const fn default_absence_count() -> IntRange<u32> {
    IntRange { min: 0, max: 20 }
}
