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

use std::borrow::Cow;

use crate::helper_constants::GUESS_PREFIX_LEN;

/// Returns the ascii digits of `text`, dropping everything else.
///
/// Decimal digits from other scripts (full-width, arabic-indic, ...) are
/// normalized to ascii first, so "＋１ ２０２" yields "1202".
/// Borrows when the text is already digits only.
pub fn digits_only(text: &str) -> Cow<'_, str> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(text);
    }
    let normalized = dec_from_char::normalize_decimals(text);
    Cow::Owned(normalized.chars().filter(char::is_ascii_digit).collect())
}

/// Leading part of a digit string that takes part in country guessing.
pub fn guess_prefix(digits: &str) -> &str {
    match digits.char_indices().nth(GUESS_PREFIX_LEN) {
        Some((end, _)) => &digits[..end],
        None => digits,
    }
}

/// Strips prefix of given string Cow. Returns option with `Some` if
/// prefix found and stripped.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(Cow::Borrowed),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}
