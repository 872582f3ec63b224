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
    borrow::Cow,
    sync::LazyLock,
};

use log::trace;
use regex::{NoExpand, Regex};

use crate::{countrydata::CountryRecord, helper_constants::MASK_PLACEHOLDER};

use super::FormatOptions;

static PLACEHOLDER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+").expect("Invalid constant pattern!"));

/// Renders digits into a country's mask.
///
/// Formatting is total: without a country or a mask the digits come back
/// as they are (prefixed unless the country code is disabled).
#[derive(Debug, Clone, Default)]
pub struct NumberFormatter {
    options: FormatOptions,
}

impl NumberFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// The mask used for `country` under the current options, `None` when
    /// nothing is left to walk.
    pub fn mask_for<'a>(&self, country: &'a CountryRecord) -> Option<Cow<'a, str>> {
        let format = country.format.as_deref().filter(|format| !format.is_empty())?;
        if self.options.disable_country_code {
            let national = format.split_once(' ').map(|(_, rest)| rest).unwrap_or("");
            return (!national.is_empty()).then_some(Cow::Borrowed(national));
        }
        if self.options.enable_area_code_stretch && country.is_area_code {
            let mut tokens: Vec<Cow<str>> = format.split(' ').map(Cow::Borrowed).collect();
            if let Some(area_token) = tokens.get_mut(1) {
                let stretched = MASK_PLACEHOLDER.to_string().repeat(country.area_code_length);
                let replaced = PLACEHOLDER_RUN
                    .replace(&**area_token, NoExpand(&stretched))
                    .into_owned();
                *area_token = Cow::Owned(replaced);
                return Some(Cow::Owned(tokens.join(" ")));
            }
        }
        Some(Cow::Borrowed(format))
    }

    /// Formats `digits` for `country`.
    pub fn format(&self, digits: &str, country: Option<&CountryRecord>) -> String {
        let Some(country) = country else {
            return digits.to_owned();
        };
        let options = &self.options;
        let prefix = if options.disable_country_code {
            ""
        } else {
            options.prefix.as_str()
        };

        if digits.is_empty() {
            return prefix.to_owned();
        }
        let mask = self.mask_for(country);
        let mask = match mask {
            Some(mask) if options.auto_format && digits.chars().nth(1).is_some() => mask,
            _ => return fast_cat::concat_str!(prefix, digits),
        };

        let mut remaining = digits.chars().peekable();
        let mut formatted = String::with_capacity(prefix.len() + mask.len() + digits.len());
        formatted.push_str(prefix);
        for mask_char in mask.chars() {
            // output ends where the input ends
            let Some(&next) = remaining.peek() else {
                break;
            };
            if mask_char == MASK_PLACEHOLDER {
                formatted.push(next);
                remaining.next();
            } else {
                formatted.push(mask_char);
            }
        }
        if options.enable_long_numbers {
            formatted.extend(remaining);
        }

        if options.disable_country_code {
            return formatted;
        }
        let expected_start = fast_cat::concat_str!(prefix, &country.dial_code);
        if !formatted.starts_with(&expected_start) {
            trace!(
                "'{}' does not start with '{}', prefix repaired",
                formatted, expected_start
            );
            let rest = formatted.replacen(prefix, "", 1);
            formatted = fast_cat::concat_str!(&expected_start, &rest);
        }
        formatted
    }

    /// Label shown next to a country in the picker, e.g. "+1" or "+44".
    pub fn dial_code_label(&self, country: &CountryRecord) -> String {
        if country.format.is_some() {
            self.format(&country.dial_code, Some(country))
        } else {
            fast_cat::concat_str!(&self.options.prefix, &country.dial_code)
        }
    }
}
