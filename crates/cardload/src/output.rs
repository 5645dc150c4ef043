use crate::cli::OutputFormat;
use board_core::{BoardList, Label};
use colored::Colorize;
use serde::Serialize;

pub fn output_list<T: Serialize + Displayable>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            for item in items {
                println!("{}", item.display());
            }
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

/// Report a recoverable problem without failing the run
pub fn output_warning(message: &str) {
    eprintln!("{}: {}", "Warning".yellow().bold(), message);
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for BoardList {
    fn display(&self) -> String {
        format!("{} ({})", self.name.white().bold(), self.id.dimmed())
    }
}

impl Displayable for Label {
    fn display(&self) -> String {
        let mut output = format!("{} ({})", self.name.magenta(), self.id.dimmed());
        if let Some(color) = &self.color {
            output.push_str(&format!(" [{}]", color));
        }
        output
    }
}
