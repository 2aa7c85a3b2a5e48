//! Statistics over fixed-shape [`ProfileRecord`]s.

use crate::numeric::round_to;
use crate::{ProfileRecord, StatsError};

use super::Tally;

/// Most frequent blood type, or `None` for an empty batch.
pub fn largest_blood_type(profiles: &[ProfileRecord]) -> Option<String> {
    let mut tally = Tally::default();
    for profile in profiles {
        tally.add(&profile.blood_type);
    }
    tally.most_common().map(str::to_owned)
}

/// Arithmetic mean of `(latitude, longitude)`.
pub fn mean_location(profiles: &[ProfileRecord]) -> Result<(f64, f64), StatsError> {
    if profiles.is_empty() {
        return Err(StatsError::EmptyBatch {
            statistic: "mean_location",
        });
    }

    let count = profiles.len() as f64;
    let latitude = profiles.iter().fold(0.0, |sum, p| sum + p.latitude);
    let longitude = profiles.iter().fold(0.0, |sum, p| sum + p.longitude);
    Ok((latitude / count, longitude / count))
}

pub fn oldest_age(ages: &[u32]) -> Result<u32, StatsError> {
    ages.iter().copied().max().ok_or(StatsError::EmptyBatch {
        statistic: "oldest_age",
    })
}

/// Mean age rounded to two decimals.
pub fn average_age(ages: &[u32]) -> Result<f64, StatsError> {
    if ages.is_empty() {
        return Err(StatsError::EmptyBatch {
            statistic: "average_age",
        });
    }

    let total: u64 = ages.iter().map(|&age| u64::from(age)).sum();
    Ok(round_to(total as f64 / ages.len() as f64, 2))
}
