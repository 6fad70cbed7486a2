//! Output mode control.
//!
//! [`OutputMode`] decides how a result list is presented, from terminal
//! styling to structured data serialization. [`TextMode`] is what the text
//! renderer receives once the mode is resolved.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Controls how output is rendered.
///
/// This is the user-facing enum for the `--output` CLI flag and the
/// `output` configuration key.
///
/// - `Auto` - Detect terminal capabilities (TTY → Term, pipe → Text)
/// - `Term` - Always apply terminal styling
/// - `Text` - Never apply styling
/// - `Json`, `Yaml`, `Xml`, `Csv` - Serialize the results directly (skip templates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Auto-detect: TTY gets Term, pipe gets Text
    #[default]
    Auto,
    /// Always use terminal styling
    Term,
    /// Never use styling (plain text)
    Text,
    /// Serialize data as JSON
    Json,
    /// Serialize data as YAML
    Yaml,
    /// Serialize data as XML
    Xml,
    /// Serialize data as CSV
    Csv,
}

impl OutputMode {
    /// Returns true if this is a structured output mode (JSON, YAML, XML, CSV).
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            OutputMode::Json | OutputMode::Yaml | OutputMode::Xml | OutputMode::Csv
        )
    }

    /// Resolves Auto mode to concrete Term or Text based on TTY detection.
    ///
    /// For non-Auto modes, returns self unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if atty::is(atty::Stream::Stdout) {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }

    /// Converts this output mode to a TextMode for the text renderer.
    ///
    /// Returns None for structured modes (which bypass rendering).
    pub fn to_text_mode(&self) -> Option<TextMode> {
        match self.resolve_auto() {
            OutputMode::Term => Some(TextMode::Styled),
            OutputMode::Text => Some(TextMode::Plain),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Json => "json",
            OutputMode::Yaml => "yaml",
            OutputMode::Xml => "xml",
            OutputMode::Csv => "csv",
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            "yaml" => Ok(OutputMode::Yaml),
            "xml" => Ok(OutputMode::Xml),
            "csv" => Ok(OutputMode::Csv),
            other => Err(format!(
                "unknown output mode '{}' (expected auto, term, text, json, yaml, xml, or csv)",
                other
            )),
        }
    }
}

/// How the text renderer should treat styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Apply styles (generate ANSI escape codes)
    Styled,
    /// No styling (plain text output)
    Plain,
}

/// Destination for rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputDestination {
    /// Write to standard output
    #[default]
    Stdout,
    /// Write to a specific file
    File(PathBuf),
}

impl OutputDestination {
    /// Writes text content to this destination.
    pub fn write_text(&self, content: &str) -> std::io::Result<()> {
        match self {
            OutputDestination::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", content)
            }
            OutputDestination::File(path) => {
                validate_path(path)?;
                std::fs::write(path, content)
            }
        }
    }
}

/// Validates that a file path's parent directory exists.
fn validate_path(path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_default_is_auto() {
        assert_eq!(OutputMode::default(), OutputMode::Auto);
    }

    #[test]
    fn test_output_mode_is_structured() {
        assert!(OutputMode::Json.is_structured());
        assert!(OutputMode::Yaml.is_structured());
        assert!(OutputMode::Xml.is_structured());
        assert!(OutputMode::Csv.is_structured());
        assert!(!OutputMode::Auto.is_structured());
        assert!(!OutputMode::Term.is_structured());
        assert!(!OutputMode::Text.is_structured());
    }

    #[test]
    fn test_output_mode_to_text_mode() {
        assert_eq!(OutputMode::Term.to_text_mode(), Some(TextMode::Styled));
        assert_eq!(OutputMode::Text.to_text_mode(), Some(TextMode::Plain));
        assert_eq!(OutputMode::Json.to_text_mode(), None);
        assert_eq!(OutputMode::Csv.to_text_mode(), None);
        assert!(OutputMode::Auto.to_text_mode().is_some());
    }

    #[test]
    fn test_resolve_auto_non_auto_unchanged() {
        assert_eq!(OutputMode::Term.resolve_auto(), OutputMode::Term);
        assert_eq!(OutputMode::Text.resolve_auto(), OutputMode::Text);
        assert_eq!(OutputMode::Json.resolve_auto(), OutputMode::Json);
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("json".parse::<OutputMode>(), Ok(OutputMode::Json));
        assert_eq!("YAML".parse::<OutputMode>(), Ok(OutputMode::Yaml));
        assert!("html".parse::<OutputMode>().is_err());
        for mode in [OutputMode::Auto, OutputMode::Text, OutputMode::Xml] {
            assert_eq!(mode.as_str().parse::<OutputMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_write_text_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("results.txt");
        let dest = OutputDestination::File(file_path.clone());

        dest.write_text("No results found").unwrap();

        let content = std::fs::read_to_string(file_path).unwrap();
        assert_eq!(content, "No results found");
    }

    #[test]
    fn test_write_to_invalid_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("missing").join("results.txt");
        let dest = OutputDestination::File(file_path);

        assert!(dest.write_text("hello").is_err());
    }
}
