//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::analytics::AnalyticsResult;
use crate::error::{ChatlensError, ErrorResponse, Result};

/// Success envelope around an [`AnalyticsResult`].
///
/// ```json
/// {"success": true, "data": {"total_messages": 2, ...}}
/// ```
#[derive(Debug, Serialize)]
pub struct SuccessResponse<'a> {
    /// Always `true`.
    pub success: bool,
    /// The analytics bundle.
    pub data: &'a AnalyticsResult,
}

impl<'a> SuccessResponse<'a> {
    /// Wraps `data` in a success envelope.
    pub fn new(data: &'a AnalyticsResult) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Writes the analytics envelope to a JSON file.
pub fn write_json(analytics: &AnalyticsResult, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &SuccessResponse::new(analytics))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts the analytics envelope to a pretty-printed JSON string.
pub fn to_json(analytics: &AnalyticsResult) -> Result<String> {
    let response = SuccessResponse::new(analytics);
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Renders the `{"success": false, "detail": ...}` envelope for `err`.
pub fn to_error_json(err: &ChatlensError) -> Result<String> {
    Ok(serde_json::to_string(&ErrorResponse::from(err))?)
}
