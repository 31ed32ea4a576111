use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{read_context, write_context, SkipReason};

/// Fail fast when a required input file is missing
pub fn require_input(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Input file '{}' not found", path.display());
    }
    Ok(())
}

/// Read a whole JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    require_input(path)?;
    let json = fs::read_to_string(path).with_context(|| read_context(path))?;
    parse_json(&json, path)
}

pub fn parse_json<T: DeserializeOwned>(json: &str, origin: &Path) -> Result<T> {
    serde_json::from_str(json).with_context(|| {
        format!(
            "Failed to parse JSON from {:?}. First 200 chars: {}",
            origin,
            json.chars().take(200).collect::<String>()
        )
    })
}

/// Read one JSON record per line.
///
/// Blank lines are ignored. A line that does not parse becomes a
/// [`SkipReason::MalformedLine`] instead of failing the whole file.
pub fn read_json_lines<T: DeserializeOwned>(path: &Path) -> Result<Vec<Result<T, SkipReason>>> {
    require_input(path)?;
    let file = File::open(path).with_context(|| read_context(path))?;

    let mut records = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| read_context(path))?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(&line, idx + 1));
    }

    Ok(records)
}

fn parse_line<T: DeserializeOwned>(line: &str, line_number: usize) -> Result<T, SkipReason> {
    serde_json::from_str(line.trim()).map_err(|e| SkipReason::MalformedLine {
        line: line_number,
        message: e.to_string(),
    })
}

/// First `count` non-blank lines of a text file, for sample output
pub fn preview_lines(path: &Path, count: usize) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| read_context(path))?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| read_context(path))?;
        if line.trim().is_empty() {
            continue;
        }
        lines.push(line);
        if lines.len() >= count {
            break;
        }
    }
    Ok(lines)
}

/// Buffered writer producing one JSON record per line
pub struct JsonLinesWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    written: usize,
}

impl JsonLinesWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).with_context(|| write_context(&path))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let json = serde_json::to_string(record).context("Failed to serialize record")?;
        writeln!(self.writer, "{}", json).with_context(|| write_context(&self.path))?;
        self.written += 1;
        Ok(())
    }

    /// Flush and return the number of records written
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().with_context(|| write_context(&self.path))?;
        info!("Wrote {} records to {}", self.written, self.path.display());
        Ok(self.written)
    }
}

/// Write rows as CSV with a header taken from the row's field names
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path).with_context(|| write_context(path))?;
    for row in rows {
        writer.serialize(row).context("Failed to serialize CSV row")?;
    }
    writer.flush().with_context(|| write_context(path))?;
    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

/// Write plain text lines
pub fn write_text(path: &Path, lines: &[String]) -> Result<()> {
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(path, body).with_context(|| write_context(path))
}
