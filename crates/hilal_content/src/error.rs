//! Error type for content helpers.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    /// Tasbeeh target of zero.
    InvalidTarget,
    /// Page window with no pages or zero width.
    InvalidWindow { total_pages: u32, window: u32 },
    /// A verse line that is not `surah|ayah|text`.
    MalformedLine { line: usize, reason: String },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTarget => write!(f, "tasbeeh target must be at least 1"),
            Self::InvalidWindow {
                total_pages,
                window,
            } => write!(
                f,
                "invalid page window: {window} pages over a total of {total_pages}"
            ),
            Self::MalformedLine { line, reason } => write!(f, "line {line}: {reason}"),
        }
    }
}

impl Error for ContentError {}
