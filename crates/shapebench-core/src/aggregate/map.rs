//! Statistics over string-keyed [`ProfileMap`]s.
//!
//! Every field is fetched by key on every access; a missing key or a value of
//! the wrong kind is reported rather than skipped.

use crate::domain::{AGE, BLOOD_TYPE, LATITUDE, LONGITUDE};
use crate::numeric::round_to;
use crate::{FieldValue, ProfileMap, StatsError};

use super::Tally;

fn field<'a>(profile: &'a ProfileMap, key: &'static str) -> Result<&'a FieldValue, StatsError> {
    profile
        .get(key)
        .ok_or(StatsError::MissingField { field: key })
}

fn text<'a>(profile: &'a ProfileMap, key: &'static str) -> Result<&'a str, StatsError> {
    field(profile, key)?.as_text().ok_or(StatsError::FieldType {
        field: key,
        expected: "string",
    })
}

fn float(profile: &ProfileMap, key: &'static str) -> Result<f64, StatsError> {
    field(profile, key)?.as_float().ok_or(StatsError::FieldType {
        field: key,
        expected: "float",
    })
}

fn int(profile: &ProfileMap, key: &'static str) -> Result<u32, StatsError> {
    field(profile, key)?.as_int().ok_or(StatsError::FieldType {
        field: key,
        expected: "integer",
    })
}

/// Most frequent blood type. Unlike the record form, an empty batch is an error.
pub fn largest_blood_type(profiles: &[ProfileMap]) -> Result<String, StatsError> {
    let mut tally = Tally::default();
    for profile in profiles {
        tally.add(text(profile, BLOOD_TYPE)?);
    }
    tally
        .most_common()
        .map(str::to_owned)
        .ok_or(StatsError::EmptyBatch {
            statistic: "largest_blood_type",
        })
}

/// Arithmetic mean of `(latitude, longitude)`.
pub fn mean_location(profiles: &[ProfileMap]) -> Result<(f64, f64), StatsError> {
    if profiles.is_empty() {
        return Err(StatsError::EmptyBatch {
            statistic: "mean_location",
        });
    }

    let mut latitude = 0.0;
    let mut longitude = 0.0;
    for profile in profiles {
        latitude += float(profile, LATITUDE)?;
        longitude += float(profile, LONGITUDE)?;
    }
    let count = profiles.len() as f64;
    Ok((latitude / count, longitude / count))
}

pub fn oldest_age(profiles: &[ProfileMap]) -> Result<u32, StatsError> {
    let mut oldest = None;
    for profile in profiles {
        let age = int(profile, AGE)?;
        oldest = Some(oldest.map_or(age, |current: u32| current.max(age)));
    }
    oldest.ok_or(StatsError::EmptyBatch {
        statistic: "oldest_age",
    })
}

/// Mean age rounded to two decimals.
pub fn average_age(profiles: &[ProfileMap]) -> Result<f64, StatsError> {
    if profiles.is_empty() {
        return Err(StatsError::EmptyBatch {
            statistic: "average_age",
        });
    }

    let mut total = 0_u64;
    for profile in profiles {
        total += u64::from(int(profile, AGE)?);
    }
    Ok(round_to(total as f64 / profiles.len() as f64, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileRecord;

    #[test]
    fn empty_batch_is_an_error_for_blood_type() {
        assert_eq!(
            largest_blood_type(&[]),
            Err(StatsError::EmptyBatch {
                statistic: "largest_blood_type"
            })
        );
    }

    #[test]
    fn missing_key_is_reported() {
        let mut profile = ProfileRecord::new("A+", 1.0, 2.0, 30).to_map();
        profile.remove(LONGITUDE);
        assert_eq!(
            mean_location(&[profile]),
            Err(StatsError::MissingField { field: "longitude" })
        );
    }

    #[test]
    fn mistyped_value_is_reported() {
        let mut profile = ProfileRecord::new("A+", 1.0, 2.0, 30).to_map();
        profile.insert(AGE.to_owned(), FieldValue::Text("thirty".into()));
        assert_eq!(
            oldest_age(&[profile]),
            Err(StatsError::FieldType {
                field: "age",
                expected: "integer"
            })
        );
    }

    #[test]
    fn average_age_rounds_to_two_places() {
        let profiles: Vec<ProfileMap> = [1, 2, 2]
            .into_iter()
            .map(|age| ProfileRecord::new("O+", 0.0, 0.0, age).to_map())
            .collect();
        assert_eq!(average_age(&profiles), Ok(1.67));
        assert_eq!(oldest_age(&profiles), Ok(2));
    }
}
