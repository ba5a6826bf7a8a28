//! Plain-text graph file formats.
//!
//! Two encodings exist:
//!
//! - [`Format::Minimal`]: a `<vertices> <edges>` header, one `label x y`
//!   line per vertex, then one `from to` line per edge.
//! - [`Format::Extended`]: a `<entities>` header followed by tagged `V` and
//!   `E` lines that also carry colours, sizes and fonts, in creation order.
//!
//! Fields are separated by whitespace; there is no escaping, which is why
//! labels may not contain whitespace.

mod extended;
mod minimal;

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::session::GraphSession;
use crate::style::StyleConfig;

/// Which encoding a graph file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Topology and positions only.
    #[default]
    Minimal,
    /// Topology, positions and per-entity styles.
    Extended,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Minimal => f.write_str("minimal"),
            Format::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(Format::Minimal),
            "extended" => Ok(Format::Extended),
            other => Err(format!("unknown format \"{other}\", expected minimal or extended")),
        }
    }
}

/// Serialize a session.
pub fn encode(session: &GraphSession, format: Format) -> String {
    match format {
        Format::Minimal => minimal::encode(session),
        Format::Extended => extended::encode(session),
    }
}

/// Parse a graph file into a fresh, clean session. Vertices of a minimal
/// file take their style from `style`; `style` also becomes the session style.
pub fn decode(text: &str, format: Format, style: &StyleConfig) -> GraphResult<GraphSession> {
    let mut session = match format {
        Format::Minimal => minimal::decode(text, style)?,
        Format::Extended => extended::decode(text, style)?,
    };
    session.set_format(format);
    session.mark_clean();
    Ok(session)
}

/// Guess the format from the header line: two counts mean minimal, one
/// count means extended.
pub fn detect(text: &str) -> Option<Format> {
    let header = text.lines().find(|line| !line.trim().is_empty())?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    if !fields.iter().all(|field| field.parse::<usize>().is_ok()) {
        return None;
    }
    match fields.len() {
        2 => Some(Format::Minimal),
        1 => Some(Format::Extended),
        _ => None,
    }
}

/// Read and decode a graph file. `None` detects the format from the header.
pub fn load_from_file(
    path: &Path,
    format: Option<Format>,
    style: &StyleConfig,
) -> GraphResult<GraphSession> {
    let text = std::fs::read_to_string(path).map_err(|e| GraphError::persistence(path, e))?;
    let format = match format {
        Some(format) => format,
        None => detect(&text).ok_or_else(|| GraphError::parse(1, "unrecognised header line"))?,
    };
    decode(&text, format, style)
}

/// Encode a session and atomically replace `path` with it.
///
/// The text goes to a temporary file next to the target which is then
/// renamed over it, so a failed write never leaves a truncated graph file.
pub fn save_to_file(session: &GraphSession, path: &Path, format: Format) -> GraphResult<()> {
    let text = encode(session, format);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| GraphError::persistence(dir, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| GraphError::persistence(tmp.path(), e))?;
    tmp.persist(path)
        .map_err(|e| GraphError::persistence(path, e.error))?;

    log::debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Decimal text for a coordinate. Whole numbers keep a `.0` suffix so files
/// look the same as those written by earlier versions (`10.0`, not `10`).
pub(crate) fn format_number(value: f64) -> String {
    let text = value.to_string();
    if text.contains(['.', 'e', 'E']) || !value.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

pub(crate) fn parse_coordinate(field: &str, line: usize) -> GraphResult<f64> {
    let value: f64 = field
        .parse()
        .map_err(|_| GraphError::parse(line, format!("\"{field}\" is not a number")))?;
    if !value.is_finite() {
        return Err(GraphError::parse(line, format!("\"{field}\" is not a finite number")));
    }
    Ok(value)
}

pub(crate) fn parse_count(field: &str, line: usize, what: &str) -> GraphResult<usize> {
    field
        .parse()
        .map_err(|_| GraphError::parse(line, format!("{what} \"{field}\" is not a count")))
}

/// Re-tag session errors raised while rebuilding a graph from a file so
/// they point at the offending line.
pub(crate) fn at_line(line: usize, err: GraphError) -> GraphError {
    match err {
        GraphError::MissingVertex(label) => GraphError::DanglingEdgeReference { line, label },
        GraphError::ParseError { .. } | GraphError::DanglingEdgeReference { .. } => err,
        other => GraphError::parse(line, other.to_string()),
    }
}

/// Non-blank lines with their 1-based numbers.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_keep_a_fractional_part() {
        assert_eq!(format_number(10.0), "10.0");
        assert_eq!(format_number(-3.0), "-3.0");
        assert_eq!(format_number(123.456), "123.456");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn coordinates_must_be_finite() {
        assert!(parse_coordinate("1.0E7", 1).is_ok());
        assert!(parse_coordinate("NaN", 1).is_err());
        assert!(parse_coordinate("inf", 1).is_err());
        assert!(parse_coordinate("ten", 1).is_err());
    }

    #[test]
    fn detects_format_from_header() {
        assert_eq!(detect("2 1\nA 1.0 1.0\n"), Some(Format::Minimal));
        assert_eq!(detect("\n3\nV A 1.0 1.0"), Some(Format::Extended));
        assert_eq!(detect("V A 1.0 1.0"), None);
        assert_eq!(detect(""), None);
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("Extended".parse::<Format>().unwrap(), Format::Extended);
        assert!("binary".parse::<Format>().is_err());
    }
}
