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

use std::collections::HashMap;

use crate::{
    countrydata::{AreaCodes, Inclusion, ListKind},
    helper_constants::DEFAULT_MASK,
    i18n::Localization,
    number_formatter::FormatOptions,
};

/// Everything that shapes a [`CountryTable`](crate::CountryTable). Unknown
/// iso2 codes anywhere in here are ignored and reported through
/// [`CountryTable::ignored_codes`](crate::CountryTable::ignored_codes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTableConfig {
    pub inclusion: Inclusion,
    pub exclude_countries: Vec<String>,
    /// Shown first in the picker, still part of the matchable set.
    pub preferred_countries: Vec<String>,
    /// Records with these iso2 codes are moved to the front of the visible
    /// list, in this order.
    pub preserve_order: Vec<String>,
    /// User lists whose order is kept instead of sorting by name.
    pub preserve_list_order: Vec<ListKind>,
    /// National mask overrides keyed by iso2.
    pub masks: HashMap<String, String>,
    /// Priority overrides keyed by iso2.
    pub priority: HashMap<String, i32>,
    /// Area code list overrides keyed by iso2.
    pub area_codes: HashMap<String, Vec<String>>,
    pub enable_area_codes: AreaCodes,
    pub enable_territories: bool,
    pub localization: Localization,
    /// Used for countries without a mask of their own.
    pub default_mask: String,
    pub always_default_mask: bool,
}

impl Default for CountryTableConfig {
    fn default() -> Self {
        Self {
            inclusion: Inclusion::default(),
            exclude_countries: Vec::new(),
            preferred_countries: Vec::new(),
            preserve_order: Vec::new(),
            preserve_list_order: Vec::new(),
            masks: HashMap::new(),
            priority: HashMap::new(),
            area_codes: HashMap::new(),
            enable_area_codes: AreaCodes::default(),
            enable_territories: false,
            localization: Localization::default(),
            default_mask: DEFAULT_MASK.to_owned(),
            always_default_mask: false,
        }
    }
}

impl CountryTableConfig {
    pub fn preserves(&self, list: ListKind) -> bool {
        self.preserve_list_order.contains(&list)
    }
}

/// Settings of one input session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInputConfig {
    /// Initial country, also the tie-break hint of every guess. An iso2
    /// code.
    pub country: Option<String>,
    /// Initial value; anything but digits is ignored.
    pub value: String,
    pub table: CountryTableConfig,
    pub format: FormatOptions,
    /// When false, edits that change the selected country's dial code are
    /// rejected.
    pub country_code_editable: bool,
    /// Returned by `validation_error` when the validity predicate fails.
    pub default_error_message: String,
}

impl Default for PhoneInputConfig {
    fn default() -> Self {
        Self {
            country: None,
            value: String::new(),
            table: CountryTableConfig::default(),
            format: FormatOptions::default(),
            country_code_editable: true,
            default_error_message: String::new(),
        }
    }
}
