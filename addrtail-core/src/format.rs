//! Address layout conventions

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout convention an address tail follows.
///
/// Exactly one tag is assigned per input. `Empty` is reserved for absent or
/// blank input and never comes out of token analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormatTag {
    /// `CITY STATE ZIP` civilian address
    #[serde(rename = "us_standard")]
    UsStandard,
    /// `ZIP APO|FPO|DPO AA|AE|AP` military or diplomatic address
    #[serde(rename = "us_military")]
    UsMilitary,
    /// `POSTCODE CITY... COUNTRY`
    #[serde(rename = "international")]
    International,
    /// No rule matched; extraction is best effort
    #[serde(rename = "unknown")]
    Unknown,
    /// Absent or blank input
    #[serde(rename = "empty")]
    Empty,
}

impl FormatTag {
    /// Every tag, in detection priority order followed by the fallbacks
    pub const ALL: [FormatTag; 5] = [
        FormatTag::UsMilitary,
        FormatTag::International,
        FormatTag::UsStandard,
        FormatTag::Unknown,
        FormatTag::Empty,
    ];

    /// Serialised name
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::UsStandard => "us_standard",
            FormatTag::UsMilitary => "us_military",
            FormatTag::International => "international",
            FormatTag::Unknown => "unknown",
            FormatTag::Empty => "empty",
        }
    }

    /// One-line description of the layout
    pub fn description(&self) -> &'static str {
        match self {
            FormatTag::UsStandard => "U.S. civilian address: CITY STATE ZIP",
            FormatTag::UsMilitary => "APO/FPO/DPO address: ZIP APO|FPO|DPO STATE",
            FormatTag::International => "international address: POSTCODE CITY COUNTRY",
            FormatTag::Unknown => "unrecognised layout, best-effort fields",
            FormatTag::Empty => "absent or blank address",
        }
    }

    /// Whether extraction under this tag reports `USA` as the country
    pub fn is_domestic(&self) -> bool {
        matches!(self, FormatTag::UsStandard | FormatTag::UsMilitary)
    }

    /// Soft failure: the record should be reviewed by a person
    pub fn needs_review(&self) -> bool {
        matches!(self, FormatTag::Unknown | FormatTag::Empty)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| CoreError::UnknownFormatTag(s.to_string()))
    }
}
