//! Output-format handling shared by the subcommands.

/// Non-JSON output formats.
#[derive(Clone, Copy)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse the `--format` flag.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

/// `--json` and `--format` are mutually exclusive.
pub fn ensure_json_exclusive(json: bool, format: Option<OutputFormat>) -> anyhow::Result<()> {
    if json && format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    Ok(())
}
