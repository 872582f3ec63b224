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

use crate::{
    countrydata::CountryRecord,
    number_formatter::{FormatOptions, NumberFormatter},
    string_util::digits_only,
};

use super::{
    init_logger,
    test_data::{de, record, ru, uk, us},
};

fn formatter(options: FormatOptions) -> NumberFormatter {
    init_logger();
    NumberFormatter::new(options)
}

fn area_code_variant(iso2: &str, base: &str, area_code: &str, format: &str) -> CountryRecord {
    let mut variant = CountryRecord::new(iso2, iso2, format!("{}{}", base, area_code), Some(format));
    variant.is_area_code = true;
    variant.area_code_length = area_code.len();
    variant
}

#[test]
fn formats_us_number() {
    let formatter = formatter(FormatOptions::default());
    assert_eq!(formatter.format("12025551234", Some(&us())), "+1 (202) 555-1234");
    assert_eq!(formatter.format("79161234567", Some(&ru())), "+7 (916) 123-45-67");
}

#[test]
fn disabled_country_code_drops_the_prefix() {
    let formatter = formatter(FormatOptions {
        disable_country_code: true,
        ..Default::default()
    });
    assert_eq!(formatter.format("2025551234", Some(&us())), "(202) 555-1234");
    assert_eq!(formatter.format("", Some(&us())), "");
    assert_eq!(formatter.format("2", Some(&us())), "2");

    // nothing left of a single-token mask
    let single = CountryRecord::new("Testland", "tl", "9", Some("........"));
    assert_eq!(formatter.mask_for(&single), None);
    assert_eq!(formatter.format("123", Some(&single)), "123");
}

#[test]
fn short_and_unformatted_input() {
    let formatter = formatter(FormatOptions::default());
    assert_eq!(formatter.format("123", None), "123");
    assert_eq!(formatter.format("", Some(&us())), "+");
    assert_eq!(formatter.format("1", Some(&us())), "+1");

    let without_mask = CountryRecord::new("Testland", "tl", "9", None);
    assert_eq!(formatter.format("912345", Some(&without_mask)), "+912345");
    let empty_mask = CountryRecord::new("Testland", "tl", "9", Some(""));
    assert_eq!(formatter.mask_for(&empty_mask), None);

    let plain = self::formatter(FormatOptions {
        auto_format: false,
        ..Default::default()
    });
    assert_eq!(plain.format("12025551234", Some(&us())), "+12025551234");
}

#[test]
fn output_ends_with_the_input() {
    let formatter = formatter(FormatOptions::default());
    assert_eq!(formatter.format("12", Some(&us())), "+1 (2");
    assert_eq!(formatter.format("1202", Some(&us())), "+1 (202");
    assert_eq!(formatter.format("12025", Some(&us())), "+1 (202) 5");
}

#[test]
fn long_numbers() {
    let digits = "120255512349";
    let dropped = formatter(FormatOptions::default());
    assert_eq!(dropped.format(digits, Some(&us())), "+1 (202) 555-1234");

    let kept = formatter(FormatOptions {
        enable_long_numbers: true,
        ..Default::default()
    });
    assert_eq!(kept.format(digits, Some(&us())), "+1 (202) 555-12349");
}

#[test]
fn custom_prefix() {
    let formatter = formatter(FormatOptions {
        prefix: "00".to_owned(),
        ..Default::default()
    });
    assert_eq!(formatter.format("4420123", Some(&uk())), "0044 2012 3");
}

#[test]
fn prefix_repair_forces_the_dial_code() {
    let formatter = formatter(FormatOptions::default());
    // digits that don't start with the dial code get it put in front
    assert_eq!(formatter.format("2025551234", Some(&us())), "+12 (025) 551-234");
}

#[test]
fn prefix_repair_duplicates_area_codes() {
    // kept as is: the variant mask only covers the base dial code, so the
    // repair puts the whole variant code in front of the walked output
    let formatter = formatter(FormatOptions::default());
    let winnipeg = area_code_variant("ca", "1", "204", ". (...) ...-....");
    assert_eq!(
        formatter.format("12045551234", Some(&winnipeg)),
        "+12041 (204) 555-1234"
    );
}

#[test]
fn area_code_stretch() {
    let variant = area_code_variant("kz", "7", "33", ". ... ... ... ... ..");
    let stretching = formatter(FormatOptions {
        enable_area_code_stretch: true,
        ..Default::default()
    });
    assert_eq!(
        stretching.mask_for(&variant).as_deref(),
        Some(". .. ... ... ... ..")
    );
    // main records keep their mask
    assert_eq!(stretching.mask_for(&ru()).as_deref(), Some(". (...) ...-..-.."));

    let plain = formatter(FormatOptions::default());
    assert_eq!(plain.mask_for(&variant).as_deref(), Some(". ... ... ... ... .."));

    let disabled = formatter(FormatOptions {
        enable_area_code_stretch: true,
        disable_country_code: true,
        ..Default::default()
    });
    assert_eq!(disabled.mask_for(&variant).as_deref(), Some("... ... ... ... .."));
}

#[test]
fn dial_code_labels() {
    let formatter = formatter(FormatOptions::default());
    assert_eq!(formatter.dial_code_label(&us()), "+1");
    assert_eq!(formatter.dial_code_label(&uk()), "+44");
    let without_mask = CountryRecord::new("Germany", "de", "49", None);
    assert_eq!(formatter.dial_code_label(&without_mask), "+49");
}

#[test]
fn digits_round_trip() {
    let subscriber = "5551234567890";
    for long_numbers in [false, true] {
        let formatter = formatter(FormatOptions {
            enable_long_numbers: long_numbers,
            ..Default::default()
        });
        for country in [us(), ru(), uk(), de(), record("Testland", "tl", "999", "... ..", 0)] {
            let placeholders = formatter
                .mask_for(&country)
                .map(|mask| mask.matches('.').count())
                .unwrap();
            for len in 0..=subscriber.len() {
                let digits = format!("{}{}", country.dial_code, &subscriber[..len]);
                if digits.len() < 2 {
                    continue;
                }
                let formatted = formatter.format(&digits, Some(&country));
                let expected = if long_numbers {
                    digits.as_str()
                } else {
                    &digits[..digits.len().min(placeholders)]
                };
                assert_eq!(digits_only(&formatted), expected, "{} for {}", digits, country.iso2);

                // formatting the digits of a formatted number changes nothing
                let again = formatter.format(&digits_only(&formatted), Some(&country));
                assert_eq!(again, formatted);
            }
        }
    }
}
