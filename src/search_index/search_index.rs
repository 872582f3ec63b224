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

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::{
    countrydata::{CountryRecord, CountryTable},
    match_cache::MatchCache,
    regex_util::RegexFullMatch,
};

static NUMERIC_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("Invalid constant pattern!"));

/// Filters the picker list and finds type-to-jump candidates.
#[derive(Debug)]
pub struct SearchIndex {
    table: Arc<CountryTable>,
    candidates: MatchCache<(String, u64), Option<Arc<CountryRecord>>>,
}

impl SearchIndex {
    pub fn new(table: Arc<CountryTable>) -> Self {
        Self {
            table,
            candidates: MatchCache::with_capacity(16),
        }
    }

    /// Filters `all` by `query`:
    /// - a blank query keeps everything in order;
    /// - a numeric query keeps records whose dial code contains it;
    /// - anything else keeps iso2 matches first, then name matches, each
    ///   record once.
    ///
    /// Matching is case-insensitive.
    pub fn filter(all: &[Arc<CountryRecord>], query: &str) -> Vec<Arc<CountryRecord>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return all.to_vec();
        }
        if NUMERIC_QUERY.full_match(&query) {
            return all
                .iter()
                .filter(|record| record.dial_code.contains(&query))
                .cloned()
                .collect();
        }

        let by_iso2 = all
            .iter()
            .filter(|record| record.iso2.to_lowercase().contains(&query));
        let by_name = all.iter().filter(|record| {
            record.name.to_lowercase().contains(&query)
                || record
                    .local_name
                    .as_deref()
                    .is_some_and(|local_name| local_name.to_lowercase().contains(&query))
        });

        let mut found: Vec<Arc<CountryRecord>> = Vec::new();
        for record in by_iso2.chain(by_name) {
            if !found.iter().any(|seen| seen.same_entry(record)) {
                found.push(Arc::clone(record));
            }
        }
        found
    }

    /// Filters the table's picker order, preferred countries first.
    pub fn search(&self, query: &str) -> Vec<Arc<CountryRecord>> {
        Self::filter(self.table.all_countries(), query)
    }

    /// First visible record whose name starts with `query`, ignoring case.
    /// Preferred countries don't take part.
    pub fn probable_candidate(&self, query: &str) -> Option<Arc<CountryRecord>> {
        if query.is_empty() {
            return None;
        }
        let query = query.to_lowercase();
        let key = (query.clone(), self.table.fingerprint());
        self.candidates.get_or_insert_with(key, || {
            self.table
                .visible()
                .iter()
                .find(|record| record.name.to_lowercase().starts_with(&query))
                .cloned()
        })
    }
}
