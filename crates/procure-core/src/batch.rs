//! Line-delimited request input and JSON array output.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::Result;
use crate::models::record::Record;
use crate::request::{RequestParser, request_lines};

/// Counts from one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Non-blank request lines read.
    pub requests: usize,
    /// Records written.
    pub records: usize,
}

/// Read the non-blank request lines of a file, in order.
pub fn read_requests(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let requests: Vec<String> = request_lines(&content).map(str::to_string).collect();

    debug!("Read {} requests from {}", requests.len(), path.display());
    Ok(requests)
}

/// Render records as a JSON array.
///
/// Pretty output uses 2-space indentation and has no trailing newline.
/// Non-ASCII characters are written as `\uXXXX` escapes.
pub fn render_records(records: &[Record], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(escape_non_ascii(&json))
}

/// Replace every non-ASCII character with its UTF-16 `\uXXXX` escape(s).
///
/// serde_json only emits non-ASCII inside string literals, so the result is
/// still the same JSON document.
fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_string();
    }

    let mut escaped = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    escaped
}

/// Write records to `path` as a JSON array.
pub fn write_records(path: &Path, records: &[Record], pretty: bool) -> Result<()> {
    let json = render_records(records, pretty)?;
    fs::write(path, json)?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Convert a request file into a JSON array file.
///
/// I/O failures are returned as-is; nothing is written if the input cannot
/// be read.
pub fn run<C: Clock>(
    input: &Path,
    output: &Path,
    parser: &RequestParser<C>,
    pretty: bool,
) -> Result<BatchSummary> {
    let requests = read_requests(input)?;
    let today = parser.clock().today();

    let records: Vec<Record> = requests
        .iter()
        .map(|request| parser.parse_at(request, today))
        .collect();

    write_records(output, &records, pretty)?;

    info!(
        "Converted {} requests from {} to {}",
        requests.len(),
        input.display(),
        output.display()
    );

    Ok(BatchSummary {
        requests: requests.len(),
        records: records.len(),
    })
}
