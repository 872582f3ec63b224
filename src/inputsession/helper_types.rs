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

use std::{borrow::Cow, sync::Arc};

use crate::{countrydata::CountryRecord, string_util::digits_only};

use super::{
    enums::{EditSource, Selection, SessionPhase},
    picker::PickerState,
};

/// One immutable snapshot of an input session. Every event produces a new
/// one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub formatted_text: String,
    pub selection: Selection,
    pub picker: PickerState,
    /// Iso2 (or dial code) the host asked for; breaks ties when guessing.
    pub country_hint: Option<String>,
}

impl SessionState {
    /// Digits of the displayed text.
    pub fn raw_digits(&self) -> Cow<'_, str> {
        digits_only(&self.formatted_text)
    }

    pub fn selected(&self) -> Option<&Arc<CountryRecord>> {
        self.selection.country()
    }

    pub fn selected_record(&self) -> Option<&CountryRecord> {
        self.selection.country().map(|country| country.as_ref())
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.selection {
            Selection::Pinned(_) => SessionPhase::Frozen,
            Selection::Matched(_) => SessionPhase::Active,
            Selection::None if self.formatted_text.is_empty() => SessionPhase::Empty,
            Selection::None => SessionPhase::Active,
        }
    }

    pub(super) fn with_text(&self, formatted_text: impl Into<String>) -> Self {
        Self {
            formatted_text: formatted_text.into(),
            ..self.clone()
        }
    }
}

/// Structured snapshot of the selected country. All fields are empty when
/// no country is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryData {
    pub name: String,
    pub dial_code: String,
    /// Iso2 code.
    pub country_code: String,
    pub format: String,
}

impl From<Option<&CountryRecord>> for CountryData {
    fn from(country: Option<&CountryRecord>) -> Self {
        match country {
            None => Self::default(),
            Some(country) => Self {
                name: country.name.clone(),
                dial_code: country.dial_code.clone(),
                country_code: country.iso2.clone(),
                format: country.format.clone().unwrap_or_default(),
            },
        }
    }
}

/// Sent to the host after an edit changed the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotification {
    /// Prefix followed by the digits of the new text, e.g. "+12025551234".
    pub full_number: String,
    pub country_data: CountryData,
    pub source: EditSource,
    pub formatted_text: String,
}

/// Sent to the host when editing ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndEditing {
    pub country_code: String,
    pub dial_code: String,
    pub format: String,
    pub name: String,
}

impl From<&CountryRecord> for EndEditing {
    fn from(country: &CountryRecord) -> Self {
        Self {
            country_code: country.iso2.clone(),
            dial_code: country.dial_code.clone(),
            format: country.format.clone().unwrap_or_default(),
            name: country.name.clone(),
        }
    }
}

/// Result of applying one event to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub notification: Option<ChangeNotification>,
}

impl Transition {
    pub(super) fn silent(state: SessionState) -> Self {
        Self {
            state,
            notification: None,
        }
    }
}
