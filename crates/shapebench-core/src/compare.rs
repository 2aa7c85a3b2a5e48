//! Record vs. map performance comparison.
//!
//! Each representation gets its own freshly generated batch of the same size,
//! so the two sides see different values. Only the timings are compared, and
//! the verdict reflects whatever was measured on this run.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use serde::{Serialize, Serializer};
use tracing::info;

use crate::aggregate::{map, record, ProfileStatistics};
use crate::source::{generate_profile_maps, generate_profile_records, ProfileSource};
use crate::timing::{instrument, try_instrument, TimingLog, TimingReport};
use crate::{ages, StatsError};

/// In-memory shape a batch of profiles is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    Record,
    Map,
}

impl Representation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Record => "Record",
            Self::Map => "Map",
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timings and results of the four statistics for one representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepresentationRun {
    pub representation: Representation,
    pub statistics: ProfileStatistics,
    pub timings: Vec<TimingReport>,
    #[serde(rename = "total_secs", serialize_with = "duration_secs")]
    pub total: Duration,
}

/// Outcome of [`PerformanceComparator::compare`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub profiles: usize,
    pub record: RepresentationRun,
    pub map: RepresentationRun,
    pub faster: Representation,
    pub ratio: f64,
}

impl Comparison {
    fn from_runs(profiles: usize, record: RepresentationRun, map: RepresentationRun) -> Self {
        let (faster, fast, slow) = if map.total > record.total {
            (Representation::Record, record.total, map.total)
        } else {
            (Representation::Map, map.total, record.total)
        };

        Self {
            profiles,
            record,
            map,
            faster,
            ratio: speedup(fast, slow),
        }
    }

    pub fn slower(&self) -> Representation {
        match self.faster {
            Representation::Record => Representation::Map,
            Representation::Map => Representation::Record,
        }
    }

    /// Human-readable sentence naming the faster representation.
    pub fn verdict(&self) -> String {
        format!(
            "{} is {:.2} times faster than {}.",
            self.faster,
            self.ratio,
            self.slower()
        )
    }
}

fn speedup(fast: Duration, slow: Duration) -> f64 {
    if fast.is_zero() {
        if slow.is_zero() {
            1.0
        } else {
            f64::INFINITY
        }
    } else {
        slow.as_secs_f64() / fast.as_secs_f64()
    }
}

fn duration_secs<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(value.as_secs_f64())
}

/// Times the record and map aggregators against each other.
#[derive(Debug)]
pub struct PerformanceComparator<S> {
    source: S,
    current_year: i32,
}

impl<S: ProfileSource> PerformanceComparator<S> {
    pub fn new(source: S, current_year: i32) -> Self {
        Self {
            source,
            current_year,
        }
    }

    /// Generate `n` profiles per representation and time all four statistics.
    ///
    /// Fails with [`StatsError::EmptyBatch`] when `n == 0`.
    pub fn compare(&mut self, n: usize) -> Result<Comparison, StatsError> {
        let record = self.run_records(n)?;
        info!(
            representation = "record",
            total_secs = record.total.as_secs_f64(),
            "Total elapsed time for record calculations: {:.4} seconds",
            record.total.as_secs_f64()
        );

        let map = self.run_maps(n)?;
        info!(
            representation = "map",
            total_secs = map.total.as_secs_f64(),
            "Total elapsed time for map calculations: {:.4} seconds",
            map.total.as_secs_f64()
        );

        let comparison = Comparison::from_runs(n, record, map);
        info!("{}", comparison.verdict());
        Ok(comparison)
    }

    fn run_records(&mut self, n: usize) -> Result<RepresentationRun, StatsError> {
        let profiles = generate_profile_records(&mut self.source, n, self.current_year);
        let ages = ages(&profiles);

        let log = TimingLog::new();
        let largest_blood_type =
            instrument("largest_blood_type_record", &log, record::largest_blood_type);
        let mean_location = try_instrument("mean_location_record", &log, record::mean_location);
        let oldest_age = try_instrument("oldest_age_record", &log, record::oldest_age);
        let average_age = try_instrument("average_age_record", &log, record::average_age);

        let statistics = ProfileStatistics {
            largest_blood_type: largest_blood_type(profiles.as_slice()),
            mean_location: mean_location(profiles.as_slice())?,
            oldest_age: oldest_age(ages.as_slice())?,
            average_age: average_age(ages.as_slice())?,
        };

        let total = log.total();
        Ok(RepresentationRun {
            representation: Representation::Record,
            statistics,
            timings: log.drain(),
            total,
        })
    }

    fn run_maps(&mut self, n: usize) -> Result<RepresentationRun, StatsError> {
        let profiles = generate_profile_maps(&mut self.source, n, self.current_year);

        let log = TimingLog::new();
        let largest_blood_type =
            try_instrument("largest_blood_type_map", &log, map::largest_blood_type);
        let mean_location = try_instrument("mean_location_map", &log, map::mean_location);
        let oldest_age = try_instrument("oldest_age_map", &log, map::oldest_age);
        let average_age = try_instrument("average_age_map", &log, map::average_age);

        let statistics = ProfileStatistics {
            largest_blood_type: Some(largest_blood_type(profiles.as_slice())?),
            mean_location: mean_location(profiles.as_slice())?,
            oldest_age: oldest_age(profiles.as_slice())?,
            average_age: average_age(profiles.as_slice())?,
        };

        let total = log.total();
        Ok(RepresentationRun {
            representation: Representation::Map,
            statistics,
            timings: log.drain(),
            total,
        })
    }
}
