use std::fmt::Write as _;

use serde::Serialize;
use shapebench_core::{
    current_year, generate_profile_maps, generate_profile_records, ProfileStatistics,
    SyntheticProfileSource,
};

use crate::cli::{ProfilesArgs, RepresentationArg};
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ProfilesResponseData {
    representation: &'static str,
    count: usize,
    statistics: ProfileStatistics,
}

pub fn run(args: &ProfilesArgs, seed: Option<u64>) -> Result<CommandResult, CliError> {
    let year = current_year();
    let mut source = SyntheticProfileSource::new(super::rng(seed, 0)).with_current_year(year);

    let (representation, statistics) = match args.representation {
        RepresentationArg::Record => {
            let profiles = generate_profile_records(&mut source, args.count, year);
            ("record", ProfileStatistics::from_records(&profiles)?)
        }
        RepresentationArg::Map => {
            let profiles = generate_profile_maps(&mut source, args.count, year);
            ("map", ProfileStatistics::from_maps(&profiles)?)
        }
    };

    let mut text = String::new();
    let _ = writeln!(text, "{} {representation} profiles", args.count);
    let _ = writeln!(
        text,
        "  largest blood type : {}",
        statistics.largest_blood_type.as_deref().unwrap_or("-")
    );
    let _ = writeln!(
        text,
        "  mean location      : ({:.6}, {:.6})",
        statistics.mean_location.0, statistics.mean_location.1
    );
    let _ = writeln!(text, "  oldest age         : {}", statistics.oldest_age);
    let _ = writeln!(text, "  average age        : {:.2}", statistics.average_age);

    let data = serde_json::to_value(ProfilesResponseData {
        representation,
        count: args.count,
        statistics,
    })?;

    Ok(CommandResult::ok(data).with_text(text))
}
