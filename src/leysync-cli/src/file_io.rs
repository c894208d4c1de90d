//! JSON input/output helpers
//!
//! `-` as an input path reads stdin; a missing output path writes stdout.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read and deserialize a JSON document from a file or stdin
pub fn read_json<T: DeserializeOwned>(input: &Path) -> Result<T> {
    let contents = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON from {}", input.display()))
}

/// Serialize a value as JSON to a file or stdout
pub fn write_json<T: Serialize>(output: Option<&Path>, value: &T, compact: bool) -> Result<()> {
    let mut json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to serialize JSON")?;
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .context("Failed to write stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_write_then_read() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.json");
        let value = json!({ "format": "GOOD", "version": 3 });

        write_json(Some(&path), &value, true)?;
        assert_eq!(fs::read_to_string(&path)?, "{\"format\":\"GOOD\",\"version\":3}\n");

        let back: Value = read_json(&path)?;
        assert_eq!(back, value);
        Ok(())
    }

    #[test]
    fn test_read_missing_file_has_context() {
        let err = read_json::<Value>(Path::new("/nonexistent/leysync.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/leysync.json"));
    }
}
