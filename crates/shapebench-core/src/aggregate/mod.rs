//! # Profile Aggregators
//!
//! Two implementations of the same four statistics:
//!
//! | Statistic | [`record`] input | [`map`] input |
//! |-----------|------------------|---------------|
//! | most frequent blood type | `&[ProfileRecord]` | `&[ProfileMap]` |
//! | mean location | `&[ProfileRecord]` | `&[ProfileMap]` |
//! | oldest age | `&[u32]` (ages) | `&[ProfileMap]` |
//! | average age | `&[u32]` (ages) | `&[ProfileMap]` |
//!
//! Given the same data both produce identical values; they only differ in how
//! a field is reached (struct field vs. string-key lookup).
//!
//! Empty input is asymmetric on purpose: the record form of
//! `largest_blood_type` yields `None`, the map form fails with
//! [`StatsError::EmptyBatch`](crate::StatsError::EmptyBatch). Every other
//! statistic fails with `EmptyBatch` in both forms.

use std::collections::HashMap;

use serde::Serialize;

use crate::{ages, ProfileMap, ProfileRecord, StatsError};

pub mod map;
pub mod record;

/// The four statistics of one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStatistics {
    pub largest_blood_type: Option<String>,
    pub mean_location: (f64, f64),
    pub oldest_age: u32,
    pub average_age: f64,
}

impl ProfileStatistics {
    pub fn from_records(profiles: &[ProfileRecord]) -> Result<Self, StatsError> {
        let ages = ages(profiles);
        Ok(Self {
            largest_blood_type: record::largest_blood_type(profiles),
            mean_location: record::mean_location(profiles)?,
            oldest_age: record::oldest_age(&ages)?,
            average_age: record::average_age(&ages)?,
        })
    }

    pub fn from_maps(profiles: &[ProfileMap]) -> Result<Self, StatsError> {
        Ok(Self {
            largest_blood_type: Some(map::largest_blood_type(profiles)?),
            mean_location: map::mean_location(profiles)?,
            oldest_age: map::oldest_age(profiles)?,
            average_age: map::average_age(profiles)?,
        })
    }
}

/// Frequency table that remembers first-seen order, so ties resolve to the
/// value encountered first.
#[derive(Debug, Default)]
pub(crate) struct Tally<'a> {
    positions: HashMap<&'a str, usize>,
    counts: Vec<(&'a str, usize)>,
}

impl<'a> Tally<'a> {
    pub(crate) fn add(&mut self, value: &'a str) {
        match self.positions.get(value) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.positions.insert(value, self.counts.len());
                self.counts.push((value, 1));
            }
        }
    }

    pub(crate) fn most_common(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(value, count) in &self.counts {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_prefers_first_seen_on_tie() {
        let mut tally = Tally::default();
        for value in ["B-", "A+", "A+", "B-"] {
            tally.add(value);
        }
        assert_eq!(tally.most_common(), Some("B-"));
    }

    #[test]
    fn tally_of_nothing_is_none() {
        assert_eq!(Tally::default().most_common(), None);
    }
}
