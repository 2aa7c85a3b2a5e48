use std::fmt::Write as _;

use shapebench_core::{current_year, PerformanceComparator, RepresentationRun, SyntheticProfileSource};

use crate::cli::CompareArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &CompareArgs, seed: Option<u64>) -> Result<CommandResult, CliError> {
    let year = current_year();
    let source = SyntheticProfileSource::new(super::rng(seed, 0)).with_current_year(year);
    let comparison = PerformanceComparator::new(source, year).compare(args.count)?;

    let mut text = String::new();
    write_run(&mut text, &comparison.record);
    write_run(&mut text, &comparison.map);
    let _ = writeln!(text, "{}", comparison.verdict());

    let data = serde_json::to_value(&comparison)?;
    Ok(CommandResult::ok(data)
        .with_text(text)
        .with_warning("record and map batches are generated independently; verdicts can vary between runs"))
}

fn write_run(text: &mut String, run: &RepresentationRun) {
    let _ = writeln!(text, "{} calculations:", run.representation);
    for timing in &run.timings {
        let _ = writeln!(
            text,
            "  {:<28} {:.6} s",
            timing.function,
            timing.elapsed.as_secs_f64()
        );
    }
    let _ = writeln!(text, "  total elapsed                {:.4} s", run.total.as_secs_f64());
    let _ = writeln!(text);
}
