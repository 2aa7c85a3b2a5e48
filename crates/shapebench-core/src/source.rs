//! Random profile and company-name providers.
//!
//! The generators only depend on the [`ProfileSource`] and [`CompanySource`]
//! traits. The synthetic implementations here draw from small built-in
//! vocabularies with an injected RNG, so seeded runs are reproducible.

use rand::seq::SliceRandom;
use rand::Rng;
use time::{Date, Month, OffsetDateTime};

use crate::domain::profile_map;
use crate::{ProfileMap, ProfileRecord, ValidationError};

const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

const LAST_NAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

const COMPANY_SUFFIXES: [&str; 5] = ["Inc", "Group", "LLC", "Ltd", "PLC"];

/// One raw profile as handed out by a profile provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProfile {
    pub blood_group: String,
    pub current_location: (f64, f64),
    pub birthdate: Date,
}

impl RawProfile {
    /// Age in whole years relative to `current_year`; never negative.
    pub fn age_in(&self, current_year: i32) -> u32 {
        current_year.saturating_sub(self.birthdate.year()).max(0) as u32
    }
}

/// Provider of random person profiles.
pub trait ProfileSource {
    fn next_profile(&mut self) -> RawProfile;
}

/// Provider of random company names.
pub trait CompanySource {
    fn next_company_name(&mut self) -> String;
}

/// Age bounds for synthetic birthdates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSourceConfig {
    pub min_age: u32,
    pub max_age: u32,
}

impl Default for ProfileSourceConfig {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 90,
        }
    }
}

/// Calendar year used when deriving ages from birthdates.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Profile provider backed by built-in vocabularies and an injected RNG.
#[derive(Debug)]
pub struct SyntheticProfileSource<R> {
    rng: R,
    config: ProfileSourceConfig,
    current_year: i32,
}

impl<R: Rng> SyntheticProfileSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: ProfileSourceConfig::default(),
            current_year: current_year(),
        }
    }

    pub fn with_config(rng: R, config: ProfileSourceConfig) -> Result<Self, ValidationError> {
        if config.min_age > config.max_age {
            return Err(ValidationError::InvalidAgeBounds {
                min: config.min_age,
                max: config.max_age,
            });
        }
        Ok(Self {
            config,
            ..Self::new(rng)
        })
    }

    /// Pin the reference year instead of reading the clock.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    fn birthdate(&mut self) -> Date {
        let age = self.rng.gen_range(self.config.min_age..=self.config.max_age) as i32;
        let year = self.current_year - age;
        let month = Month::try_from(self.rng.gen_range(1..=12_u8)).unwrap_or(Month::January);
        let day = self.rng.gen_range(1..=28_u8);
        Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN)
    }
}

impl<R: Rng> ProfileSource for SyntheticProfileSource<R> {
    fn next_profile(&mut self) -> RawProfile {
        let blood_group = BLOOD_GROUPS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("O+")
            .to_owned();
        let latitude = coordinate(&mut self.rng, 90.0);
        let longitude = coordinate(&mut self.rng, 180.0);
        RawProfile {
            blood_group,
            current_location: (latitude, longitude),
            birthdate: self.birthdate(),
        }
    }
}

fn coordinate<R: Rng>(rng: &mut R, bound: f64) -> f64 {
    crate::numeric::round_to(rng.gen_range(-bound..=bound), 6)
}

/// Company-name provider producing names such as `"Walker, Hill and Young"`.
#[derive(Debug)]
pub struct SyntheticCompanySource<R> {
    rng: R,
}

impl<R: Rng> SyntheticCompanySource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn last_name(&mut self) -> &'static str {
        LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Smith")
    }
}

impl<R: Rng> CompanySource for SyntheticCompanySource<R> {
    fn next_company_name(&mut self) -> String {
        match self.rng.gen_range(0..3) {
            0 => {
                let suffix = COMPANY_SUFFIXES
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or("Inc");
                format!("{} {}", self.last_name(), suffix)
            }
            1 => format!("{}-{}", self.last_name(), self.last_name()),
            _ => format!(
                "{}, {} and {}",
                self.last_name(),
                self.last_name(),
                self.last_name()
            ),
        }
    }
}

/// Draw `n` profiles in the fixed-shape representation.
pub fn generate_profile_records<S: ProfileSource + ?Sized>(
    source: &mut S,
    n: usize,
    current_year: i32,
) -> Vec<ProfileRecord> {
    (0..n)
        .map(|_| {
            let raw = source.next_profile();
            let age = raw.age_in(current_year);
            let (latitude, longitude) = raw.current_location;
            ProfileRecord::new(raw.blood_group, latitude, longitude, age)
        })
        .collect()
}

/// Draw `n` profiles in the string-keyed representation.
pub fn generate_profile_maps<S: ProfileSource + ?Sized>(
    source: &mut S,
    n: usize,
    current_year: i32,
) -> Vec<ProfileMap> {
    (0..n)
        .map(|_| {
            let raw = source.next_profile();
            let age = raw.age_in(current_year);
            let (latitude, longitude) = raw.current_location;
            profile_map(raw.blood_group, latitude, longitude, age)
        })
        .collect()
}
