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

use log::trace;

use crate::{
    countrydata::{CountryRecord, CountryTable},
    helper_constants::PRIORITY_SENTINEL,
    match_cache::MatchCache,
    string_util::guess_prefix,
};

type GuessKey = (String, Option<String>, u64);

/// Resolves a digit prefix to the most probable country of a table.
///
/// The longest dial code that prefixes the input wins, ties go to the lower
/// priority. Results are memoized per matcher on the first six digits, the
/// hint and the table fingerprint.
#[derive(Debug)]
pub struct PrefixMatcher {
    table: Arc<CountryTable>,
    cache: MatchCache<GuessKey, Option<Arc<CountryRecord>>>,
}

impl PrefixMatcher {
    pub fn new(table: Arc<CountryTable>) -> Self {
        Self {
            table,
            cache: MatchCache::with_capacity(64),
        }
    }

    pub fn table(&self) -> &Arc<CountryTable> {
        &self.table
    }

    /// Returns the best country for `prefix_digits`, falling back to the
    /// visible record with iso2 `hint` when no dial code matches. Only the
    /// first six digits are examined.
    pub fn guess(&self, prefix_digits: &str, hint: Option<&str>) -> Option<Arc<CountryRecord>> {
        let prefix = guess_prefix(prefix_digits);
        let key = (
            prefix.to_owned(),
            hint.map(str::to_owned),
            self.table.fingerprint(),
        );
        self.cache
            .get_or_insert_with(key, || self.guess_uncached(prefix, hint))
    }

    fn guess_uncached(&self, prefix: &str, hint: Option<&str>) -> Option<Arc<CountryRecord>> {
        if self.table.area_codes().is_disabled() {
            // a hidden variant resolves to its country's main record
            if let Some(variant) = self
                .table
                .hidden()
                .iter()
                .find(|variant| prefix.starts_with(variant.dial_code.as_str()))
            {
                if let Some(main) = self.main_record_for(&variant.iso2) {
                    trace!(
                        "Prefix '{}' resolved to '{}' through area code {}",
                        prefix, main.iso2, variant.dial_code
                    );
                    return Some(main);
                }
            }
        }

        let second_best = hint.and_then(|hint| self.find_by_iso2(hint));
        if prefix.trim().is_empty() {
            return second_best;
        }

        let (best, _, _) = self
            .table
            .visible()
            .iter()
            .filter(|record| prefix.starts_with(record.dial_code.as_str()))
            .fold(
                (None, 0, PRIORITY_SENTINEL),
                |(best, best_len, best_priority), record| {
                    let len = record.dial_code.len();
                    if len > best_len || (len == best_len && record.priority < best_priority) {
                        (Some(record), len, record.priority)
                    } else {
                        (best, best_len, best_priority)
                    }
                },
            );

        match best {
            Some(record) => {
                trace!("Prefix '{}' matched '{}' (+{})", prefix, record.iso2, record.dial_code);
                Some(Arc::clone(record))
            }
            None => {
                trace!("Prefix '{}' matched nothing, hint {:?} used", prefix, hint);
                second_best
            }
        }
    }

    pub fn find_by_iso2(&self, iso2: &str) -> Option<Arc<CountryRecord>> {
        self.table
            .visible()
            .iter()
            .find(|record| record.iso2.eq_ignore_ascii_case(iso2))
            .cloned()
    }

    /// First visible record with exactly this dial code. Leading zeros of
    /// `dial_code` are ignored.
    pub fn find_by_dial_code(&self, dial_code: &str) -> Option<Arc<CountryRecord>> {
        let dial_code = dial_code.trim_start_matches('0');
        self.table
            .visible()
            .iter()
            .find(|record| record.dial_code == dial_code)
            .cloned()
    }

    /// The visible main record of a country that has area-code variants.
    pub fn main_record_for(&self, iso2: &str) -> Option<Arc<CountryRecord>> {
        self.table
            .visible()
            .iter()
            .find(|record| record.iso2 == iso2 && record.main_code)
            .cloned()
    }

    pub fn cached_guesses(&self) -> usize {
        self.cache.len()
    }
}
