//! Shared parsing utilities for transcript lines.
//!
//! This module contains the pure, line-level building blocks used by
//! [`TranscriptParser`](crate::parser::TranscriptParser):
//!
//! - [`header`] - recognising `M/D/YY, H:MM AM - Sender: text` header lines
//! - [`notice`] - the system-notice marker table
//! - [`timestamp`] - interpreting verbatim timestamps as calendar values

pub mod header;
pub mod notice;
pub mod timestamp;

pub use header::{HeaderLine, match_header};
pub use notice::{NoticeFilter, NoticeKind, SYSTEM_NOTICE_MARKERS, classify_notice, is_system_notice};
pub use timestamp::interpret_timestamp;
