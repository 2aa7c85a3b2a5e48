//! Behaviour tests for the profile aggregators and the comparator.

use rand::rngs::StdRng;
use rand::SeedableRng;
use shapebench_core::aggregate::{map, record};
use shapebench_core::{
    ages, generate_profile_maps, generate_profile_records, PerformanceComparator, ProfileMap,
    ProfileRecord, ProfileStatistics, Representation, StatsError, SyntheticProfileSource,
};

const TOLERANCE: f64 = 1e-9;

fn sample_profiles() -> Vec<ProfileRecord> {
    vec![
        ProfileRecord::new("A+", -40.7, -74.0, 30),
        ProfileRecord::new("B-", 34.0, 118.2, 25),
        ProfileRecord::new("AB+", 41.8, -87.6, 35),
        ProfileRecord::new("O-", -37.7, -122.4, 28),
        ProfileRecord::new("A+", 40.7, 74.0, 40),
        ProfileRecord::new("B-", -34.0, -118.2, 22),
        ProfileRecord::new("AB+", 41.8, 87.6, 31),
        ProfileRecord::new("A+", 37.7, -122.4, 29),
    ]
}

fn as_maps(profiles: &[ProfileRecord]) -> Vec<ProfileMap> {
    profiles.iter().map(ProfileRecord::to_map).collect()
}

fn seeded_source(seed: u64) -> SyntheticProfileSource<StdRng> {
    SyntheticProfileSource::new(StdRng::seed_from_u64(seed)).with_current_year(2024)
}

#[test]
fn record_statistics_match_known_fixture() {
    let profiles = sample_profiles();
    let ages = ages(&profiles);

    assert_eq!(record::largest_blood_type(&profiles).as_deref(), Some("A+"));

    let (latitude, longitude) = record::mean_location(&profiles).expect("non-empty");
    assert!((latitude - 10.45).abs() < TOLERANCE, "latitude {latitude}");
    assert!((longitude - -30.6).abs() < TOLERANCE, "longitude {longitude}");

    assert_eq!(record::oldest_age(&ages), Ok(40));
    assert_eq!(record::average_age(&ages), Ok(30.0));
}

#[test]
fn map_statistics_match_known_fixture() {
    let profiles = as_maps(&sample_profiles());

    assert_eq!(map::largest_blood_type(&profiles).as_deref(), Ok("A+"));

    let (latitude, longitude) = map::mean_location(&profiles).expect("non-empty");
    assert!((latitude - 10.45).abs() < TOLERANCE, "latitude {latitude}");
    assert!((longitude - -30.6).abs() < TOLERANCE, "longitude {longitude}");

    assert_eq!(map::oldest_age(&profiles), Ok(40));
    assert_eq!(map::average_age(&profiles), Ok(30.0));
}

#[test]
fn representations_agree_on_equivalent_data() {
    let mut source = seeded_source(99);
    for size in [1, 7, 250, 2_000] {
        let records = generate_profile_records(&mut source, size, 2024);
        let maps = as_maps(&records);

        let from_records = ProfileStatistics::from_records(&records).expect("record stats");
        let from_maps = ProfileStatistics::from_maps(&maps).expect("map stats");
        assert_eq!(from_records, from_maps, "batch of {size}");
    }
}

#[test]
fn most_frequent_blood_type_has_maximal_count() {
    let mut source = seeded_source(5);
    let records = generate_profile_records(&mut source, 300, 2024);
    let winner = record::largest_blood_type(&records).expect("non-empty");

    let count = |value: &str| records.iter().filter(|p| p.blood_type == value).count();
    let winner_count = count(&winner);
    assert!(winner_count > 0);
    for profile in &records {
        assert!(winner_count >= count(&profile.blood_type));
    }
}

#[test]
fn mean_location_is_sum_over_count() {
    let mut source = seeded_source(17);
    let records = generate_profile_records(&mut source, 64, 2024);
    let (latitude, longitude) = record::mean_location(&records).expect("non-empty");

    let expected_lat: f64 = records.iter().map(|p| p.latitude).sum::<f64>() / 64.0;
    let expected_lon: f64 = records.iter().map(|p| p.longitude).sum::<f64>() / 64.0;
    assert!((latitude - expected_lat).abs() < TOLERANCE);
    assert!((longitude - expected_lon).abs() < TOLERANCE);
}

#[test]
fn aggregators_are_idempotent() {
    let profiles = sample_profiles();
    let maps = as_maps(&profiles);

    assert_eq!(
        ProfileStatistics::from_records(&profiles),
        ProfileStatistics::from_records(&profiles)
    );
    assert_eq!(
        ProfileStatistics::from_maps(&maps),
        ProfileStatistics::from_maps(&maps)
    );
}

#[test]
fn generated_batches_have_requested_size_and_valid_ages() {
    let mut source = seeded_source(3);
    for n in [0, 1, 100, 1_000] {
        let records = generate_profile_records(&mut source, n, 2024);
        let maps = generate_profile_maps(&mut source, n, 2024);
        assert_eq!(records.len(), n);
        assert_eq!(maps.len(), n);
        assert!(records.iter().all(|p| !p.blood_type.is_empty()));
    }
}

#[test]
fn empty_batches_keep_representation_asymmetry() {
    assert_eq!(record::largest_blood_type(&[]), None);
    assert!(matches!(
        map::largest_blood_type(&[]),
        Err(StatsError::EmptyBatch { .. })
    ));
}

#[test]
fn comparator_reports_faster_representation() {
    let mut comparator = PerformanceComparator::new(seeded_source(1), 2024);
    let comparison = comparator.compare(10_000).expect("non-empty batches");

    // the two batches are drawn independently, so either side may win on a given run
    let expected = match comparison.faster {
        Representation::Record => "Record is",
        Representation::Map => "Map is",
    };
    assert!(comparison.verdict().starts_with(expected));
    assert!(comparison.ratio >= 1.0);
    assert!(comparison.record.statistics.oldest_age <= 90);
}
