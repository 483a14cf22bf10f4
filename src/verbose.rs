//! Verbose report of an acquired data source.

use anyhow::{Context, Result};
use serde::Serialize;
use tabular_source::{DataSource, Options, Output, Serialization};

/// Writes the source report, by default to stderr.
#[derive(Debug)]
pub(crate) struct Verbose {
    output: Output,
}

impl Default for Verbose {
    /// Default verbose logger writes to stderr.
    fn default() -> Self {
        Self {
            output: Output::stderr(),
        }
    }
}

/// Report data that can be serialized to text, JSON and CSV.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
struct VerboseData {
    source: String,
    format: String,
    is_pipe: bool,
    is_fifo: bool,
    is_file: bool,
    is_blocking: bool,
    detect_truncation: bool,
    last_known_size: Option<u64>,
    stream_mode: bool,
    hold_stream: String,
    state: String,
}

impl VerboseData {
    /// Create from a classified `DataSource` and the options used to acquire it.
    fn from_source(source: &DataSource, options: &Options) -> Self {
        Self {
            source: source.source(),
            format: source.format().to_string(),
            is_pipe: source.is_pipe(),
            is_fifo: source.is_fifo(),
            is_file: source.is_file(),
            is_blocking: source.is_blocking(),
            detect_truncation: source.detect_truncation(),
            last_known_size: source.last_known_size(),
            stream_mode: options.stream_mode(),
            hold_stream: options.hold_stream().to_string(),
            state: source.state().to_string(),
        }
    }

    /// Get all fields as name-value pairs.
    fn field_pairs(&self) -> Vec<(&str, String)> {
        vec![
            ("source", self.source.clone()),
            ("format", self.format.clone()),
            ("pipe", self.is_pipe.to_string()),
            ("fifo", self.is_fifo.to_string()),
            ("file", self.is_file.to_string()),
            ("blocking", self.is_blocking.to_string()),
            ("detect-truncation", self.detect_truncation.to_string()),
            (
                "last-known-size",
                self.last_known_size
                    .map_or_else(|| "none".to_string(), |size| size.to_string()),
            ),
            ("stream-mode", self.stream_mode.to_string()),
            ("hold-stream", self.hold_stream.clone()),
            ("state", self.state.clone()),
        ]
    }
}

impl Verbose {
    /// Writes the report in the requested format.
    pub(crate) fn write_report(
        &mut self,
        source: &DataSource,
        options: &Options,
        serialization: Serialization,
    ) -> Result<()> {
        let data = VerboseData::from_source(source, options);

        match serialization {
            Serialization::Json => self.write_json(&data),
            Serialization::Csv => self.write_csv(&data),
            Serialization::Text => self.write_text(&data),
        }?;

        self.output.flush()
    }

    /// Write the report in JSON format.
    fn write_json(&mut self, data: &VerboseData) -> Result<()> {
        let json = serde_json::to_string(data).context("failed to serialize report to JSON")?;

        self.output
            .write_chunk(&format!("{json}\n"))
            .context("failed to write JSON output")
    }

    /// Write the report in CSV format.
    fn write_csv(&mut self, data: &VerboseData) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let field_pairs = data.field_pairs();

        writer.write_record(field_pairs.iter().map(|(name, _)| *name))?;
        writer.write_record(field_pairs.iter().map(|(_, value)| value))?;

        let csv = String::from_utf8(writer.into_inner()?)
            .context("failed to convert CSV output to UTF-8")?;

        self.output
            .write_chunk(&csv)
            .context("failed to write CSV output")
    }

    /// Write the report as `field value` lines.
    fn write_text(&mut self, data: &VerboseData) -> Result<()> {
        data.field_pairs()
            .into_iter()
            .try_for_each(|(field_name, value)| {
                self.output.write_chunk(&format!("{field_name} {value}\n"))
            })
    }
}
