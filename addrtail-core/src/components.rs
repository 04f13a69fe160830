//! Structured output of the extractor

use crate::format::FormatTag;
use serde::{Deserialize, Serialize};

/// Country reported for U.S. civilian and military formats
pub const DOMESTIC_COUNTRY: &str = "USA";

/// Output column names, in the order of [`AddressComponents::values`]
pub const FIELD_NAMES: [&str; 5] = ["CITY", "STATE", "ZIPCODE", "COUNTRY", "FORMAT"];

/// Components of one address tail.
///
/// Every field is present; sparse results carry empty strings. `state` is
/// only ever filled for U.S. formats, and `zipcode` carries the postal code
/// for international addresses too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AddressComponents {
    /// City or locality
    pub city: String,
    /// U.S. state or military region (AA/AE/AP)
    pub state: String,
    /// ZIP or foreign postal code
    pub zipcode: String,
    /// `USA` for domestic formats, otherwise the detected country token
    pub country: String,
    /// Detected layout
    pub format: FormatTag,
}

impl AddressComponents {
    /// All fields blank, tagged `Empty`
    pub fn empty() -> Self {
        Self::blank(FormatTag::Empty)
    }

    /// All fields blank under the given tag
    pub fn blank(format: FormatTag) -> Self {
        Self {
            city: String::new(),
            state: String::new(),
            zipcode: String::new(),
            country: String::new(),
            format,
        }
    }

    /// Field values in [`FIELD_NAMES`] order
    pub fn values(&self) -> [&str; 5] {
        [
            self.city.as_str(),
            self.state.as_str(),
            self.zipcode.as_str(),
            self.country.as_str(),
            self.format.as_str(),
        ]
    }

    /// `true` when no text field was filled
    pub fn is_blank(&self) -> bool {
        self.values()[..4].iter().all(|v| v.is_empty())
    }
}

impl Default for AddressComponents {
    fn default() -> Self {
        Self::empty()
    }
}
