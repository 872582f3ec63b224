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

use std::{sync::Arc, time::Instant};

use crate::countrydata::CountryRecord;

/// The selected country of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    /// Chosen by the matcher; the next edit may re-match.
    Matched(Arc<CountryRecord>),
    /// Picked explicitly. Edits keep this country until the number gets
    /// shorter than its dial code.
    Pinned(Arc<CountryRecord>),
}

impl Selection {
    pub fn country(&self) -> Option<&Arc<CountryRecord>> {
        match self {
            Selection::None => None,
            Selection::Matched(country) | Selection::Pinned(country) => Some(country),
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Selection::Pinned(_))
    }

    /// Selects `country`, keeping the pin if there was one.
    pub(super) fn reselect(&self, country: Option<Arc<CountryRecord>>) -> Selection {
        match (country, self.is_pinned()) {
            (None, _) => Selection::None,
            (Some(country), true) => Selection::Pinned(country),
            (Some(country), false) => Selection::Matched(country),
        }
    }
}

/// Coarse lifecycle of a session, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// No country and no text.
    Empty,
    Active,
    /// Active with a pinned country.
    Frozen,
}

/// Where the text of a change notification came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSource {
    /// The raw text the user typed.
    Typed(String),
    /// Iso2 of the country picked in the dropdown.
    CountryPicked(String),
}

/// Everything a host can feed into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TypedInput(String),
    CountryPicked(Arc<CountryRecord>),
    /// The host replaced the value; `None` clears the session.
    ExternalValueChange(Option<String>),
    /// The host replaced the country: an iso2 or a numeric dial code.
    ExternalCountryChange(String),
    Focus,
    ToggleDropdown,
    SearchChanged(String),
    /// Moves the dropdown highlight by this many rows.
    MoveHighlight(isize),
    /// A letter typed while the dropdown is open, at `at`.
    SearchJump { text: String, at: Instant },
    /// Releases a settled type-to-jump query.
    PollSearch(Instant),
}
