//! Configuration loading and typed config structures for the workforce
//! history synthesizer.
//!
//! The canonical configuration lives in `workforce-config.yaml` at the
//! project root. This module defines the top-level [`SimulationConfig`]
//! that mirrors the YAML structure, a loader that reads it, and the
//! validation pass that must succeed before the first simulated year.
//! Policy sections are defined in `workforce-policies` and embedded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use workforce_policies::config::{
    AttritionConfig, CompensationConfig, CountryConfig, DepartmentConfig, HiringConfig,
    RetirementConfig, SalaryConfig, WorkforceConfig, default_countries, default_departments,
    validate_countries, validate_departments,
};
use workforce_policies::PolicyError;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be applied.
    #[error("invalid value {value:?} for {variable}")]
    Override {
        /// The environment variable name.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A section failed validation.
    #[error("invalid {section} configuration: {source}")]
    Section {
        /// The offending section.
        section: &'static str,
        /// The underlying validation error.
        source: PolicyError,
    },

    /// Sections are individually valid but inconsistent with each other.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Environment variable overriding [`SimulationConfig::seed`].
pub const SEED_ENV: &str = "WORKFORCE_SEED";

/// Environment variable overriding [`LoggingConfig::level`].
pub const LOG_LEVEL_ENV: &str = "WORKFORCE_LOG_LEVEL";

/// Top-level simulation configuration.
///
/// Mirrors the structure of `workforce-config.yaml`. Every field has a
/// default, so an empty file is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed for the single random stream every policy draws from.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Simulated years, inclusive.
    #[serde(default)]
    pub years: YearRange,

    /// Employing countries.
    #[serde(default = "default_countries")]
    pub countries: Vec<CountryConfig>,

    /// Departments, their weights and title tables.
    #[serde(default = "default_departments")]
    pub departments: Vec<DepartmentConfig>,

    /// Salary bands and starting-tier weights.
    #[serde(default)]
    pub salary: SalaryConfig,

    /// New-employee attribute distributions.
    #[serde(default)]
    pub workforce: WorkforceConfig,

    /// Retirement rule.
    #[serde(default)]
    pub retirement: RetirementConfig,

    /// Voluntary attrition rule.
    #[serde(default)]
    pub attrition: AttritionConfig,

    /// Hiring rule.
    #[serde(default)]
    pub hiring: HiringConfig,

    /// Yearly compensation refresh.
    #[serde(default)]
    pub compensation: CompensationConfig,

    /// Dataset output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            years: YearRange::default(),
            countries: default_countries(),
            departments: default_departments(),
            salary: SalaryConfig::default(),
            workforce: WorkforceConfig::default(),
            retirement: RetirementConfig::default(),
            attrition: AttritionConfig::default(),
            hiring: HiringConfig::default(),
            compensation: CompensationConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `WORKFORCE_SEED` overrides `seed`
    /// - `WORKFORCE_LOG_LEVEL` overrides `logging.level`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Override`] if an override is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(SEED_ENV) {
            self.seed = value.trim().parse().map_err(|_err| ConfigError::Override {
                variable: SEED_ENV,
                value,
            })?;
        }
        if let Some(value) = lookup(LOG_LEVEL_ENV) {
            self.logging.level = value;
        }
        Ok(())
    }

    /// Check every section and the relations between them.
    ///
    /// # Errors
    ///
    /// Returns the first problem found. Nothing is simulated on error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.years.validate()?;
        let section = |section: &'static str| move |source| ConfigError::Section { section, source };
        validate_countries(&self.countries).map_err(section("countries"))?;
        validate_departments(&self.departments).map_err(section("departments"))?;
        self.salary.validate().map_err(section("salary"))?;
        self.workforce.validate().map_err(section("workforce"))?;
        self.attrition.validate().map_err(section("attrition"))?;
        self.hiring.validate().map_err(section("hiring"))?;
        self.compensation.validate().map_err(section("compensation"))?;

        if self.retirement.age <= self.workforce.age_at_hire.min {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "retirement age {} must exceed the minimum age at hire {}",
                    self.retirement.age, self.workforce.age_at_hire.min
                ),
            });
        }
        if self.workforce.initial_hire_years.max >= self.years.start {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "initial hires must predate the first simulated year {} (latest hire year {})",
                    self.years.start, self.workforce.initial_hire_years.max
                ),
            });
        }
        Ok(())
    }
}

/// The inclusive range of simulated years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First simulated year; the initial cohort is recorded here.
    #[serde(default = "default_start_year")]
    pub start: i32,

    /// Last simulated year.
    #[serde(default = "default_end_year")]
    pub end: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: default_start_year(),
            end: default_end_year(),
        }
    }
}

impl YearRange {
    /// Years in simulation order.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    /// Check that the range is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start > self.end {
            return Err(ConfigError::Invalid {
                reason: format!("year range {}..={} is empty", self.start, self.end),
            });
        }
        Ok(())
    }
}

/// Dataset serialization format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// One JSON object per line.
    Jsonl,
}

impl core::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Dataset output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination file.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Serialization format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: OutputFormat::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

const fn default_start_year() -> i32 {
    2018
}

const fn default_end_year() -> i32 {
    2025
}

fn default_output_path() -> PathBuf {
    PathBuf::from("employee_history.csv")
}

fn default_log_level() -> String {
    "info".to_owned()
}
