// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::str::FromStr;

use log::warn;

use crate::proto_gen::country_data::CountryEntry;

use super::{enums::Region, errors::ReferenceDataError};

/// One entry of the reference data, before the table expands it into
/// records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCountry {
    pub name: String,
    pub regions: Vec<Region>,
    /// Lowercase ISO 3166-1 alpha-2 code.
    pub iso2: String,
    /// Calling code without the international prefix.
    pub dial_code: String,
    /// National mask without the dial-code token. `None` falls back to the
    /// configured default mask.
    pub format: Option<String>,
    pub priority: i32,
    pub area_codes: Vec<String>,
}

impl RawCountry {
    pub fn new(name: impl Into<String>, iso2: impl Into<String>, dial_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regions: Vec::new(),
            iso2: iso2.into(),
            dial_code: dial_code.into(),
            format: None,
            priority: 0,
            area_codes: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    pub fn with_area_codes<S: Into<String>>(mut self, area_codes: impl IntoIterator<Item = S>) -> Self {
        self.area_codes = area_codes.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the invariants the matcher relies on: a two letter iso2 and
    /// non-empty numeric dial and area codes.
    pub fn validate(&self) -> Result<(), ReferenceDataError> {
        if self.iso2.len() != 2 || !self.iso2.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ReferenceDataError::InvalidIso2(self.iso2.clone()));
        }
        if !is_digit_string(&self.dial_code) {
            return Err(ReferenceDataError::InvalidDialCode {
                iso2: self.iso2.clone(),
                dial_code: self.dial_code.clone(),
            });
        }
        if let Some(area_code) = self.area_codes.iter().find(|code| !is_digit_string(code)) {
            return Err(ReferenceDataError::InvalidAreaCode {
                iso2: self.iso2.clone(),
                area_code: area_code.clone(),
            });
        }
        Ok(())
    }
}

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl TryFrom<CountryEntry> for RawCountry {
    type Error = ReferenceDataError;

    fn try_from(entry: CountryEntry) -> Result<Self, Self::Error> {
        let regions = entry
            .regions
            .iter()
            .filter_map(|tag| match Region::from_str(tag) {
                Ok(region) => Some(region),
                Err(_) => {
                    warn!("Unknown region '{}' for '{}' skipped", tag, entry.iso2);
                    None
                }
            })
            .collect();
        let raw = RawCountry {
            regions,
            format: Some(entry.format).filter(|format| !format.is_empty()),
            name: entry.name,
            iso2: entry.iso2,
            dial_code: entry.dial_code,
            priority: entry.priority,
            area_codes: entry.area_codes,
        };
        raw.validate()?;
        Ok(raw)
    }
}
