use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

use crate::config::OutputFormat;
use crate::errors::{SearchError, SearchResult};
use crate::results::SearchReport;

/// Renders the text report: grid rows, then one line per word
pub fn render_text(report: &SearchReport) -> String {
    let mut out = String::new();
    for row in &report.grid {
        let _ = writeln!(out, "{}", row);
    }
    for result in &report.results {
        let _ = writeln!(out, "{}", result);
    }
    out
}

pub fn render_json(report: &SearchReport) -> SearchResult<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn render(report: &SearchReport, format: OutputFormat) -> SearchResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Writes the report to `path`, replacing any existing file
pub fn write_report(report: &SearchReport, path: &Path, format: OutputFormat) -> SearchResult<()> {
    let contents = render(report, format)?;
    std::fs::write(path, contents).map_err(|e| SearchError::from_io(e, path))?;
    debug!("Wrote {} report to {}", format, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::WordMatch;
    use crate::search::{Direction, Placement};
    use tempfile::tempdir;

    fn report() -> SearchReport {
        SearchReport::new(
            vec!["CAT".to_string(), "ATX".to_string(), "TXX".to_string()],
            vec![
                WordMatch::found(
                    "CAT",
                    Placement {
                        row: 0,
                        col: 0,
                        direction: Direction::Right,
                    },
                ),
                WordMatch::not_found("dog"),
            ],
        )
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_text(&report()),
            "CAT\nATX\nTXX\nCAT (1,1): right\ndog: not found\n"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["grid"].as_array().unwrap().len(), 3);
        assert_eq!(value["results"][0]["direction"], "right");
        assert_eq!(value["results"][0]["row"], 1);
        assert_eq!(value["results"][1]["found"], false);
    }

    #[test]
    fn test_write_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_report(&report(), &path, OutputFormat::Text).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("CAT\nATX\nTXX\n"));
    }

    #[test]
    fn test_write_report_to_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");
        let err = write_report(&report(), &path, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, SearchError::FileNotFound(_)));
    }
}
