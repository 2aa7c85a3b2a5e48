use shapebench_core::{ScoreConfig, ScoreSummary};

use crate::cli::ScoreArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ScoreArgs) -> Result<CommandResult, CliError> {
    let summary = ScoreSummary::from_path(&args.log_file, &ScoreConfig::default())?;
    let text = summary.render_table();
    let failures = summary.failed;

    let data = serde_json::to_value(&summary)?;
    Ok(CommandResult::ok(data)
        .with_text(text)
        .with_failures(failures))
}
