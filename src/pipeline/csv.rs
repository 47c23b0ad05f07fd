//! CSV codec for the candidate board.
//!
//! Export writes the fixed four-column schema (`name,linkedin_url,stage,
//! created_at`) with CRLF row separators. Import accepts a looser two-column
//! subset (name, optional url) located by header-name heuristics.

use chrono::SecondsFormat;

use crate::models::candidate::Candidate;

pub const EXPORT_HEADER: &str = "name,linkedin_url,stage,created_at";

/// Quote a field iff it contains a comma, a double quote or a line break.
/// Internal double quotes are doubled.
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Split one line into fields, honoring RFC-4180-style quoting: a quote
/// toggles quote-mode, a doubled quote inside quote-mode yields one literal
/// quote, unquoted commas separate fields. Each field is trimmed.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                cur.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == ',' && !in_quotes {
            out.push(cur.trim().to_string());
            cur.clear();
        } else {
            cur.push(ch);
        }
    }
    out.push(cur.trim().to_string());
    out
}

/// Encode a candidate list as a CSV document (header line first, CRLF
/// separators, no trailing line break). Timestamps are ISO-8601 UTC with
/// millisecond precision.
pub fn encode_candidates(candidates: &[Candidate]) -> String {
    let mut lines = Vec::with_capacity(candidates.len() + 1);
    lines.push(EXPORT_HEADER.to_string());
    for c in candidates {
        let row = [
            escape_csv(&c.name),
            escape_csv(c.linkedin_url.as_deref().unwrap_or("")),
            escape_csv(&c.stage),
            escape_csv(&c.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        ];
        lines.push(row.join(","));
    }
    lines.join("\r\n")
}

/// Result of inspecting the first line of an import file.
///
/// The heuristic is deliberately loose: an exact "name" cell resolves the
/// name column, an exact "linkedin_url"/"linkedin"/"url" cell resolves the
/// url column. When neither resolves but some cell merely *contains* "name"
/// or "linkedin" (e.g. `Full Name`), the line is still treated as a header
/// and skipped, with the name column falling back to 0 and no url column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderScan {
    pub has_header: bool,
    pub name_col: usize,
    pub url_col: Option<usize>,
}

pub fn detect_header(cells: &[String]) -> HeaderScan {
    let lower: Vec<String> = cells.iter().map(|c| c.to_lowercase()).collect();
    let name_col = lower.iter().position(|h| h == "name");
    let url_col = lower
        .iter()
        .position(|h| h == "linkedin_url" || h == "linkedin" || h == "url");
    let has_header = name_col.is_some()
        || url_col.is_some()
        || lower
            .iter()
            .any(|h| h.contains("name") || h.contains("linkedin"));

    HeaderScan {
        has_header,
        name_col: name_col.unwrap_or(0),
        url_col,
    }
}

/// A parsed import row, ready for candidate creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub name: String,
    pub linkedin_url: Option<String>,
}

/// Parse raw CSV text into creation rows. Pure parsing, no I/O: blank lines
/// are discarded, the header is detected per [`detect_header`], rows with an
/// empty trimmed name are skipped.
pub fn parse_import(text: &str) -> Result<Vec<ImportRow>, crate::error::Error> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(crate::error::Error::BadRequest("CSV file is empty.".into()));
    }

    let scan = detect_header(&parse_csv_line(lines[0]));
    let start = usize::from(scan.has_header);

    let mut rows = Vec::new();
    for line in &lines[start..] {
        let parts = parse_csv_line(line);
        let name = parts
            .get(scan.name_col)
            .map(|s| s.trim())
            .unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let linkedin_url = scan
            .url_col
            .and_then(|i| parts.get(i))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        rows.push(ImportRow {
            name: name.to_string(),
            linkedin_url,
        });
    }
    Ok(rows)
}

/// Download filename for an exported board: job title with every
/// non-alphanumeric character replaced by an underscore.
pub fn export_filename(job_title: &str) -> String {
    let sanitized: String = job_title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_candidates.csv", sanitized)
}
