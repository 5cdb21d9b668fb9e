//! JSON Lines output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::error::Result;

/// Writes parsed messages to JSONL (JSON Lines) format.
///
/// Each line is one message, timestamp kept verbatim:
/// ```jsonl
/// {"sender":"Alice","body":"Hello","timestamp":"1/2/23, 10:30 AM"}
/// {"sender":"Bob","body":"Hi","timestamp":"1/2/23, 10:31 AM"}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        let line = serde_json::to_string(msg)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string, one message per line.
pub fn to_jsonl(messages: &[Message]) -> Result<String> {
    let mut output = String::new();
    for msg in messages {
        output.push_str(&serde_json::to_string(msg)?);
        output.push('\n');
    }
    Ok(output)
}
