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

use std::{collections::HashSet, sync::Arc};

use log::warn;

use crate::{config::CountryTableConfig, helper_constants::MASK_PLACEHOLDER, i18n::Localization};

use super::{
    country_record::CountryRecord,
    enums::{AreaCodes, Inclusion},
    raw_country::RawCountry,
};

/// Builds the full mask of a country: one placeholder per dial code digit,
/// a space, then the national mask.
pub(super) fn build_mask(
    dial_code: &str,
    mask: Option<&str>,
    default_mask: &str,
    always_default_mask: bool,
) -> String {
    let national = match mask {
        Some(mask) if !always_default_mask && !mask.is_empty() => mask,
        _ => default_mask,
    };
    let mut format = String::with_capacity(dial_code.len() + 1 + national.len());
    format.extend(std::iter::repeat_n(MASK_PLACEHOLDER, dial_code.len()));
    format.push(' ');
    format.push_str(national);
    format
}

/// Reports every code of `codes` that is not in `known`.
pub(super) fn collect_unknown<'a>(
    codes: impl IntoIterator<Item = &'a String>,
    known: &HashSet<&str>,
    setting: &str,
    ignored: &mut Vec<String>,
) {
    for code in codes {
        if !known.contains(code.as_str()) {
            warn!("Unknown country code '{}' in {} ignored", code, setting);
            if !ignored.contains(code) {
                ignored.push(code.clone());
            }
        }
    }
}

/// Applies the per-iso2 mask, priority and area code overrides.
pub(super) fn apply_overrides(raw: &RawCountry, config: &CountryTableConfig) -> RawCountry {
    let mut raw = raw.clone();
    if let Some(mask) = config.masks.get(&raw.iso2) {
        raw.format = Some(mask.clone());
    }
    if let Some(priority) = config.priority.get(&raw.iso2) {
        raw.priority = *priority;
    }
    if let Some(area_codes) = config.area_codes.get(&raw.iso2) {
        raw.area_codes = area_codes
            .iter()
            .filter(|code| {
                let valid = !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit());
                if !valid {
                    warn!("Area code '{}' for '{}' is not numeric, ignored", code, raw.iso2);
                }
                valid
            })
            .cloned()
            .collect();
    }
    raw
}

/// Expands a raw entry into its main record and its area-code variants.
/// Variants go to `hidden` unless area codes are enabled for the country.
pub(super) fn expand_area_codes(
    raw: &RawCountry,
    config: &CountryTableConfig,
    visible: &mut Vec<CountryRecord>,
    hidden: &mut Vec<CountryRecord>,
) {
    let mut main = CountryRecord {
        name: raw.name.clone(),
        local_name: None,
        regions: raw.regions.clone(),
        iso2: raw.iso2.clone(),
        dial_code: raw.dial_code.clone(),
        format: Some(build_mask(
            &raw.dial_code,
            raw.format.as_deref(),
            &config.default_mask,
            config.always_default_mask,
        )),
        priority: raw.priority,
        is_area_code: false,
        area_code_length: 0,
        has_area_codes: false,
        main_code: false,
    };
    // variants are copied before the main record gets its flags
    let variants: Vec<CountryRecord> = raw
        .area_codes
        .iter()
        .map(|area_code| CountryRecord {
            dial_code: fast_cat::concat_str!(&raw.dial_code, area_code),
            is_area_code: true,
            area_code_length: area_code.len(),
            ..main.clone()
        })
        .collect();

    if variants.is_empty() {
        visible.push(main);
        return;
    }
    main.main_code = true;
    if config.enable_area_codes.is_enabled_for(&raw.iso2) {
        main.has_area_codes = true;
        visible.push(main);
        visible.extend(variants);
    } else {
        visible.push(main);
        hidden.extend(variants);
    }
}

pub(super) fn filter_inclusion(records: Vec<CountryRecord>, inclusion: &Inclusion) -> Vec<CountryRecord> {
    match inclusion {
        Inclusion::Regions(regions) if !regions.is_empty() => records
            .into_iter()
            .filter(|record| record.regions.iter().any(|region| regions.contains(region)))
            .collect(),
        _ => records,
    }
}

/// Keeps the records whose iso2 is in `codes`. An empty list keeps
/// everything. With `preserve_order` the result follows `codes` and holds
/// only the first record per code.
pub(super) fn filtered_country_list(
    codes: &[String],
    records: &[Arc<CountryRecord>],
    preserve_order: bool,
) -> Vec<Arc<CountryRecord>> {
    if codes.is_empty() {
        return records.to_vec();
    }
    if preserve_order {
        codes
            .iter()
            .filter_map(|code| records.iter().find(|record| &record.iso2 == code))
            .cloned()
            .collect()
    } else {
        records
            .iter()
            .filter(|record| codes.contains(&record.iso2))
            .cloned()
            .collect()
    }
}

pub(super) fn exclude_countries(records: Vec<Arc<CountryRecord>>, excluded: &[String]) -> Vec<Arc<CountryRecord>> {
    if excluded.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| !excluded.contains(&record.iso2))
        .collect()
}

pub(super) fn localize(records: &mut [CountryRecord], localization: &Localization) {
    if localization.is_empty() {
        return;
    }
    for record in records {
        record.local_name = localization
            .local_name_for(&record.iso2, &record.name)
            .map(str::to_owned);
    }
}

pub(super) fn sort_by_display_name(records: &mut [Arc<CountryRecord>]) {
    records.sort_by(|a, b| a.display_name().cmp(b.display_name()));
}

/// Moves the records named in `order` to the front, in that order.
/// Every record of a named country moves, variants included.
pub(super) fn apply_preserve_order(records: Vec<Arc<CountryRecord>>, order: &[String]) -> Vec<Arc<CountryRecord>> {
    if order.is_empty() {
        return records;
    }
    let (mut front, rest): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| order.contains(&record.iso2));
    // stable, so variants stay behind their main record
    front.sort_by_key(|record| order.iter().position(|code| code == &record.iso2));
    front.extend(rest);
    front
}

/// Every iso2 of the reference data, territories included.
pub(super) fn known_codes<'a>(
    countries: &'a [RawCountry],
    territories: &'a [RawCountry],
) -> HashSet<&'a str> {
    countries
        .iter()
        .chain(territories.iter())
        .map(|raw| raw.iso2.as_str())
        .collect()
}

/// Iso2 codes named by an `AreaCodes::Only` setting.
pub(super) fn listed_area_codes(area_codes: &AreaCodes) -> &[String] {
    match area_codes {
        AreaCodes::Only(codes) => codes,
        _ => &[],
    }
}
