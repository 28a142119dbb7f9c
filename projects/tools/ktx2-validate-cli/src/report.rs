//! Rendering of collected diagnostics as text or JSON.

use ktx2_validate::ValidationReport;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    MiniJson,
}

impl argh::FromArgValue for OutputFormat {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "mini-json" => Ok(Self::MiniJson),
            other => Err(format!(
                "unknown format \"{other}\", expected text, json or mini-json"
            )),
        }
    }
}

/// One diagnostic in the JSON report.
#[derive(Debug, Serialize)]
struct Message {
    id: u16,
    r#type: &'static str,
    message: &'static str,
    details: String,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    valid: bool,
    messages: Vec<Message>,
}

/// Collects diagnostics in delivery order for rendering once validation is
/// done.
#[derive(Debug, Default)]
pub struct ReportLog {
    messages: Vec<Message>,
}

impl ReportLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: &ValidationReport) {
        self.messages.push(Message {
            id: report.id,
            r#type: report.severity.as_str(),
            message: report.message,
            details: report.details.clone(),
        });
    }

    pub fn render(self, format: OutputFormat, valid: bool) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(&JsonReport {
                valid,
                messages: self.messages,
            }),
            OutputFormat::MiniJson => serde_json::to_string(&JsonReport {
                valid,
                messages: self.messages,
            }),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!(
                "{}-{:04}: {}\n    {}",
                message.r#type, message.id, message.message, message.details
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ktx2_validate::Severity;

    fn sample_report() -> ValidationReport {
        ValidationReport {
            severity: Severity::Error,
            id: 3006,
            message: "Invalid pixelWidth. pixelWidth cannot be 0.",
            details: "pixelWidth is 0, but textures must have width.".into(),
        }
    }

    #[test]
    fn text_format_prints_severity_padded_id_and_details() {
        let mut log = ReportLog::new();
        log.push(&sample_report());

        let rendered = log.render(OutputFormat::Text, false).unwrap();
        assert_eq!(
            rendered,
            "error-3006: Invalid pixelWidth. pixelWidth cannot be 0.\n    pixelWidth is 0, but textures must have width."
        );
    }

    #[test]
    fn text_format_is_empty_for_a_clean_file() {
        let log = ReportLog::new();
        assert_eq!(log.render(OutputFormat::Text, true).unwrap(), "");
    }

    #[test]
    fn json_format_carries_validity_and_every_field() {
        let mut log = ReportLog::new();
        log.push(&sample_report());

        let rendered = log.render(OutputFormat::Json, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["valid"], false);
        assert_eq!(parsed["messages"][0]["id"], 3006);
        assert_eq!(parsed["messages"][0]["type"], "error");
        assert_eq!(
            parsed["messages"][0]["details"],
            "pixelWidth is 0, but textures must have width."
        );
    }

    #[test]
    fn mini_json_has_no_insignificant_whitespace() {
        let mut log = ReportLog::new();
        log.push(&sample_report());

        let rendered = log.render(OutputFormat::MiniJson, false).unwrap();
        assert!(!rendered.contains('\n'));
        assert!(rendered.starts_with("{\"valid\":false,"));
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        use argh::FromArgValue;
        assert!(OutputFormat::from_arg_value("text").is_ok());
        assert!(OutputFormat::from_arg_value("yaml").is_err());
    }
}
