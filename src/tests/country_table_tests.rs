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

use std::{collections::HashMap, sync::Arc};

use crate::{
    config::CountryTableConfig,
    countrydata::{CountryTable, ListKind, Region, REFERENCE_DATA},
    i18n::Localization,
    AreaCodes, Inclusion,
};

use super::{init_logger, test_data::reference_data};

fn build(config: &CountryTableConfig) -> CountryTable {
    init_logger();
    CountryTable::build(config, &reference_data())
}

fn iso2s(records: &[Arc<crate::CountryRecord>]) -> Vec<&str> {
    records.iter().map(|record| record.iso2.as_str()).collect()
}

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|code| code.to_string()).collect()
}

#[test]
fn default_table() {
    let table = build(&CountryTableConfig::default());

    assert_eq!(iso2s(table.visible()), ["ca", "de", "kz", "ru", "gb", "us"]);
    assert!(table.preferred().is_empty());
    assert!(table.ignored_codes().is_empty());
    assert_eq!(
        table.hidden().iter().map(|record| record.dial_code.as_str()).collect::<Vec<_>>(),
        ["1204", "1226", "1236", "733", "77"]
    );

    let canada = &table.visible()[0];
    assert!(canada.main_code);
    assert!(!canada.has_area_codes);
    assert_eq!(canada.format.as_deref(), Some(". (...) ...-...."));
    let kazakhstan = &table.visible()[2];
    assert_eq!(kazakhstan.format.as_deref(), Some(". ... ... ... ... .."));
    assert!(table.hidden().iter().all(|record| record.is_area_code));
}

#[test]
fn visible_area_codes() {
    let table = build(&CountryTableConfig {
        enable_area_codes: AreaCodes::All,
        ..Default::default()
    });
    assert_eq!(table.visible().len(), 11);
    assert!(table.hidden().is_empty());
    assert!(table.visible()[0].has_area_codes);
    assert_eq!(table.visible()[1].dial_code, "1204");
    assert_eq!(table.area_codes(), &AreaCodes::All);

    let only_canada = build(&CountryTableConfig {
        enable_area_codes: AreaCodes::Only(codes(&["ca"])),
        ..Default::default()
    });
    assert_eq!(only_canada.visible().len(), 9);
    assert_eq!(
        only_canada.hidden().iter().map(|record| record.dial_code.as_str()).collect::<Vec<_>>(),
        ["733", "77"]
    );
}

#[test]
fn territories_are_merged_by_name() {
    let table = build(&CountryTableConfig {
        enable_territories: true,
        ..Default::default()
    });
    assert_eq!(iso2s(table.visible()), ["ca", "de", "im", "kz", "ru", "gb", "us"]);
    assert!(table.hidden().iter().any(|record| record.dial_code == "441624"));
}

#[test]
fn inclusion_modes() {
    let only = build(&CountryTableConfig {
        inclusion: Inclusion::Only(codes(&["us", "ru", "xx"])),
        ..Default::default()
    });
    assert_eq!(iso2s(only.visible()), ["ru", "us"]);
    assert!(only.hidden().is_empty());
    assert_eq!(only.ignored_codes(), ["xx"]);

    let preserved = build(&CountryTableConfig {
        inclusion: Inclusion::Only(codes(&["us", "ru"])),
        preserve_list_order: vec![ListKind::OnlyCountries],
        ..Default::default()
    });
    assert_eq!(iso2s(preserved.visible()), ["us", "ru"]);

    let europe = build(&CountryTableConfig {
        inclusion: Inclusion::Regions(vec![Region::Europe]),
        ..Default::default()
    });
    assert_eq!(iso2s(europe.visible()), ["de", "ru", "gb"]);
}

#[test]
fn exclude_list() {
    let table = build(&CountryTableConfig {
        exclude_countries: codes(&["ru", "kz"]),
        ..Default::default()
    });
    assert_eq!(iso2s(table.visible()), ["ca", "de", "gb", "us"]);
    assert!(table.hidden().iter().all(|record| record.iso2 == "ca"));
}

#[test]
fn preferred_countries() {
    let table = build(&CountryTableConfig {
        preferred_countries: codes(&["us", "gb"]),
        ..Default::default()
    });
    assert_eq!(iso2s(table.preferred()), ["gb", "us"]);
    assert_eq!(table.all_countries().len(), 8);
    assert_eq!(iso2s(&table.all_countries()[..2]), ["gb", "us"]);
    // preferred records are the visible ones
    assert!(Arc::ptr_eq(&table.preferred()[1], &table.visible()[5]));

    let preserved = build(&CountryTableConfig {
        preferred_countries: codes(&["us", "gb"]),
        preserve_list_order: vec![ListKind::PreferredCountries],
        ..Default::default()
    });
    assert_eq!(iso2s(preserved.preferred()), ["us", "gb"]);

    // taken before the exclude list applies
    let excluded = build(&CountryTableConfig {
        preferred_countries: codes(&["us"]),
        exclude_countries: codes(&["us"]),
        ..Default::default()
    });
    assert_eq!(iso2s(excluded.preferred()), ["us"]);
    assert!(!excluded.visible().iter().any(|record| record.iso2 == "us"));
}

#[test]
fn preserve_order_moves_to_front() {
    let table = build(&CountryTableConfig {
        preserve_order: codes(&["us", "gb"]),
        ..Default::default()
    });
    assert_eq!(iso2s(table.visible()), ["us", "gb", "ca", "de", "kz", "ru"]);
}

#[test]
fn localization_sorts_by_display_name() {
    let localization: Localization = [("us", "Amerika"), ("Germany", "Deutschland")]
        .into_iter()
        .collect();
    let table = build(&CountryTableConfig {
        localization,
        ..Default::default()
    });
    assert_eq!(iso2s(table.visible()), ["us", "ca", "de", "kz", "ru", "gb"]);
    assert_eq!(table.visible()[0].display_name(), "Amerika");
    assert_eq!(table.visible()[2].local_name.as_deref(), Some("Deutschland"));
    assert_eq!(table.visible()[1].local_name, None);
}

#[test]
fn overrides() {
    let table = build(&CountryTableConfig {
        masks: HashMap::from([("de".to_owned(), "...-...".to_owned())]),
        priority: HashMap::from([("ca".to_owned(), -1), ("zz".to_owned(), 3)]),
        area_codes: HashMap::from([("us".to_owned(), codes(&["202", "x1"]))]),
        ..Default::default()
    });
    let find = |iso2: &str| {
        table
            .visible()
            .iter()
            .find(|record| record.iso2 == iso2)
            .cloned()
            .unwrap()
    };
    assert_eq!(find("de").format.as_deref(), Some(".. ...-..."));
    assert_eq!(find("ca").priority, -1);
    assert!(find("us").main_code);
    assert!(table.hidden().iter().any(|record| record.dial_code == "1202"));
    assert!(!table.hidden().iter().any(|record| record.dial_code.contains('x')));
    assert_eq!(table.ignored_codes(), ["zz"]);
}

#[test]
fn default_mask_everywhere() {
    let table = build(&CountryTableConfig {
        default_mask: "... ...".to_owned(),
        always_default_mask: true,
        ..Default::default()
    });
    assert!(table
        .visible()
        .iter()
        .all(|record| record.format.as_deref().is_some_and(|format| format.ends_with(" ... ..."))));
}

#[test]
fn empty_table_is_valid() {
    let table = build(&CountryTableConfig {
        inclusion: Inclusion::Only(codes(&["xx"])),
        ..Default::default()
    });
    assert!(table.visible().is_empty());
    assert!(table.all_countries().is_empty());
}

#[test]
fn fingerprint_follows_content() {
    let first = build(&CountryTableConfig::default());
    let second = build(&CountryTableConfig::default());
    assert_eq!(first.fingerprint(), second.fingerprint());

    let other = build(&CountryTableConfig {
        exclude_countries: codes(&["de"]),
        ..Default::default()
    });
    assert_ne!(first.fingerprint(), other.fingerprint());
}

#[test]
fn bundled_table() {
    init_logger();
    let table = CountryTable::build(&CountryTableConfig::default(), &*REFERENCE_DATA);
    assert!(table.visible().len() > 200);
    let us = table.visible().iter().find(|record| record.iso2 == "us").unwrap();
    assert_eq!(us.format.as_deref(), Some(". (...) ...-...."));
    assert!(us.main_code);
    assert!(table.hidden().iter().any(|record| record.dial_code == "1907"));
}
