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

use super::enums::Region;

/// A country (or area-code variant of one) as the matcher, formatter and
/// picker see it. Records are built once by the
/// [`CountryTable`](super::CountryTable) and shared behind `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryRecord {
    pub name: String,
    pub local_name: Option<String>,
    pub regions: Vec<Region>,
    pub iso2: String,
    /// Calling code; for area-code variants the base code followed by the
    /// area code, e.g. "1204".
    pub dial_code: String,
    /// Full mask: a placeholder run for the base dial code, a space, then
    /// the national mask. `.` stands for one digit.
    pub format: Option<String>,
    pub priority: i32,
    pub is_area_code: bool,
    pub area_code_length: usize,
    /// Set on the main record when its area-code variants are visible.
    pub has_area_codes: bool,
    /// Set on the main record of a country that has area-code variants.
    pub main_code: bool,
}

impl CountryRecord {
    pub fn new(
        name: impl Into<String>,
        iso2: impl Into<String>,
        dial_code: impl Into<String>,
        format: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            local_name: None,
            regions: Vec::new(),
            iso2: iso2.into(),
            dial_code: dial_code.into(),
            format: format.map(str::to_owned),
            priority: 0,
            is_area_code: false,
            area_code_length: 0,
            has_area_codes: false,
            main_code: false,
        }
    }

    /// Name shown in the picker: the localized one when present.
    pub fn display_name(&self) -> &str {
        self.local_name.as_deref().unwrap_or(&self.name)
    }

    /// Records are identified by `(iso2, dial_code)` within a table.
    pub fn same_entry(&self, other: &CountryRecord) -> bool {
        self.iso2 == other.iso2 && self.dial_code == other.dial_code
    }
}
