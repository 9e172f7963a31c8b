use anyhow::Result;
use serde::Serialize;

use crate::engine::Solution;

use super::OutputFormat;

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub solutions: &'a [Solution],
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(solutions: &[Solution], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(Self::format_text(solutions)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&JsonOutput { solutions })?),
        }
    }

    fn format_text(solutions: &[Solution]) -> String {
        solutions
            .iter()
            .map(|solution| format!("{solution}\n"))
            .collect()
    }
}
