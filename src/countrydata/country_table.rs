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

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    sync::Arc,
};

use log::debug;

use crate::{config::CountryTableConfig, interfaces::ReferenceDataProvider};

use super::{
    country_record::CountryRecord,
    enums::{AreaCodes, Inclusion, ListKind},
    helper_functions::{
        apply_overrides, apply_preserve_order, collect_unknown, exclude_countries,
        expand_area_codes, filter_inclusion, filtered_country_list, known_codes,
        listed_area_codes, localize, sort_by_display_name,
    },
};

/// The country list of one input, derived once from configuration and
/// reference data and never changed afterwards.
///
/// Holds three lists of shared records:
/// - `visible`: what the picker shows and the matcher folds over;
/// - `preferred`: the curated subset shown first in the picker;
/// - `hidden`: area-code variants that are not shown, kept to resolve
///   short local prefixes to their country.
#[derive(Debug, Clone)]
pub struct CountryTable {
    visible: Vec<Arc<CountryRecord>>,
    preferred: Vec<Arc<CountryRecord>>,
    hidden: Vec<Arc<CountryRecord>>,
    all_countries: Vec<Arc<CountryRecord>>,
    area_codes: AreaCodes,
    ignored_codes: Vec<String>,
    fingerprint: u64,
}

impl CountryTable {
    pub fn build(config: &CountryTableConfig, data: &dyn ReferenceDataProvider) -> Self {
        let known = known_codes(data.countries(), data.territories());
        let mut ignored = Vec::new();
        collect_unknown(sorted_keys(config.masks.keys()), &known, "masks", &mut ignored);
        collect_unknown(sorted_keys(config.priority.keys()), &known, "priority", &mut ignored);
        collect_unknown(sorted_keys(config.area_codes.keys()), &known, "area codes", &mut ignored);
        collect_unknown(listed_area_codes(&config.enable_area_codes), &known, "enabled area codes", &mut ignored);
        let only_codes: &[String] = match &config.inclusion {
            Inclusion::Only(codes) => codes,
            _ => &[],
        };
        collect_unknown(only_codes, &known, "only countries", &mut ignored);
        collect_unknown(&config.exclude_countries, &known, "excluded countries", &mut ignored);
        collect_unknown(&config.preferred_countries, &known, "preferred countries", &mut ignored);
        collect_unknown(&config.preserve_order, &known, "preserve order", &mut ignored);

        let mut records = Vec::with_capacity(data.countries().len());
        let mut hidden = Vec::new();
        for raw in data.countries() {
            expand_area_codes(&apply_overrides(raw, config), config, &mut records, &mut hidden);
        }
        if config.enable_territories {
            for raw in data.territories() {
                expand_area_codes(&apply_overrides(raw, config), config, &mut records, &mut hidden);
            }
            records.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut records = filter_inclusion(records, &config.inclusion);
        localize(&mut records, &config.localization);
        localize(&mut hidden, &config.localization);
        let records: Vec<Arc<CountryRecord>> = records.into_iter().map(Arc::new).collect();
        let hidden: Vec<Arc<CountryRecord>> = hidden.into_iter().map(Arc::new).collect();

        let sort_localized = !config.localization.is_empty();
        let preserve_only = config.preserves(ListKind::OnlyCountries);
        let mut visible = exclude_countries(
            filtered_country_list(only_codes, &records, preserve_only),
            &config.exclude_countries,
        );
        if sort_localized && !preserve_only {
            sort_by_display_name(&mut visible);
        }
        let visible = apply_preserve_order(visible, &config.preserve_order);

        let preserve_preferred = config.preserves(ListKind::PreferredCountries);
        let mut preferred = if config.preferred_countries.is_empty() {
            Vec::new()
        } else {
            filtered_country_list(&config.preferred_countries, &records, preserve_preferred)
        };
        if sort_localized && !preserve_preferred {
            sort_by_display_name(&mut preferred);
        }

        let hidden = exclude_countries(
            filtered_country_list(only_codes, &hidden, false),
            &config.exclude_countries,
        );

        let mut table = Self::from_parts(visible, preferred, hidden, config.enable_area_codes.clone());
        table.ignored_codes = ignored;
        debug!(
            "Built country table: {} visible, {} preferred, {} hidden, {} ignored codes",
            table.visible.len(),
            table.preferred.len(),
            table.hidden.len(),
            table.ignored_codes.len()
        );
        table
    }

    /// Assembles a table from prepared lists, as `build` does at its end.
    pub fn from_parts(
        visible: Vec<Arc<CountryRecord>>,
        preferred: Vec<Arc<CountryRecord>>,
        hidden: Vec<Arc<CountryRecord>>,
        area_codes: AreaCodes,
    ) -> Self {
        let mut hasher = DefaultHasher::new();
        visible.hash(&mut hasher);
        hidden.hash(&mut hasher);
        area_codes.hash(&mut hasher);
        let fingerprint = hasher.finish();

        let all_countries = preferred.iter().chain(visible.iter()).cloned().collect();
        Self {
            visible,
            preferred,
            hidden,
            all_countries,
            area_codes,
            ignored_codes: Vec::new(),
            fingerprint,
        }
    }

    pub fn visible(&self) -> &[Arc<CountryRecord>] {
        &self.visible
    }

    pub fn preferred(&self) -> &[Arc<CountryRecord>] {
        &self.preferred
    }

    pub fn hidden(&self) -> &[Arc<CountryRecord>] {
        &self.hidden
    }

    /// Preferred records followed by the visible ones; the picker order.
    pub fn all_countries(&self) -> &[Arc<CountryRecord>] {
        &self.all_countries
    }

    pub fn area_codes(&self) -> &AreaCodes {
        &self.area_codes
    }

    /// Configuration codes that named no known country.
    pub fn ignored_codes(&self) -> &[String] {
        &self.ignored_codes
    }

    /// Content hash of the visible and hidden records. Two tables with the
    /// same fingerprint match prefixes the same way.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

fn sorted_keys<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<&'a String> {
    let mut keys: Vec<_> = keys.collect();
    keys.sort();
    keys
}
