use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

/// JSON wrapper around a command's data.
#[derive(Debug, Serialize)]
pub struct Report {
    pub run_id: String,
    pub generated_at: String,
    pub warnings: Vec<String>,
    pub data: Value,
    #[serde(skip)]
    pub text: Option<String>,
}

impl Report {
    pub fn new(result: CommandResult) -> Self {
        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("<unformattable>"));

        Self {
            run_id: Uuid::new_v4().to_string(),
            generated_at,
            warnings: result.warnings,
            data: result.data,
            text: result.text,
        }
    }
}

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report)?,
    }

    Ok(())
}

fn render_table(report: &Report) -> Result<(), CliError> {
    if let Some(text) = &report.text {
        print!("{text}");
    } else {
        println!("run_id      : {}", report.run_id);
        println!("generated_at: {}", report.generated_at);
        println!("data:");
        let pretty_data = serde_json::to_string_pretty(&report.data)?;
        for line in pretty_data.lines() {
            println!("  {line}");
        }
    }

    if !report.warnings.is_empty() {
        println!("warnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    Ok(())
}
