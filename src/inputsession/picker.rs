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

use std::sync::Arc;

use crate::{countrydata::CountryRecord, search_index::DebouncedQuery};

/// Transient dropdown state. Cleared whenever a country is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerState {
    pub open: bool,
    pub search: String,
    /// Row of the picker list (preferred countries first) under the cursor.
    pub highlighted: Option<usize>,
    /// Letters typed to jump through the list, waiting to settle.
    pub pending_jump: DebouncedQuery,
}

impl PickerState {
    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub(super) fn closed(&self) -> Self {
        let mut pending_jump = self.pending_jump.clone();
        pending_jump.clear();
        Self {
            open: false,
            search: String::new(),
            highlighted: self.highlighted,
            pending_jump,
        }
    }

    /// Moves the highlight by `direction` rows within `total` rows. A
    /// move past either end is ignored; while searching, a move past the
    /// filtered rows goes back to the first one.
    pub(super) fn moved(&self, direction: isize, total: usize, filtered: usize) -> Self {
        let current = self.highlighted.map_or(-1, |index| index as isize);
        let target = current + direction;
        let highlighted = if target < 0 || target >= total as isize {
            self.highlighted
        } else if self.is_searching() && target >= filtered as isize {
            Some(0)
        } else {
            Some(target as usize)
        };
        Self {
            highlighted,
            ..self.clone()
        }
    }
}

/// Row of `country` in `rows`.
pub(super) fn row_of(rows: &[Arc<CountryRecord>], country: Option<&Arc<CountryRecord>>) -> Option<usize> {
    let country = country?;
    rows.iter().position(|row| row.same_entry(country))
}
