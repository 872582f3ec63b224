mod interfaces;
/// This module is automatically generated from /resources/*.proto
mod proto_gen;
mod helper_constants;
mod match_cache;
pub mod config;
pub mod countrydata;
pub mod i18n;
pub mod inputsession;
pub mod number_formatter;
pub mod prefix_matcher;
pub mod search_index;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use config::{CountryTableConfig, PhoneInputConfig};
pub use countrydata::{
    AreaCodes, CountryRecord, CountryTable, Inclusion, ListKind, RawCountry, Region,
    ReferenceDataError, StaticReferenceData, REFERENCE_DATA,
};
pub use helper_constants::{DEFAULT_MASK, DEFAULT_PREFIX, MAX_DIGITS, SEARCH_DEBOUNCE};
pub use i18n::Localization;
pub use inputsession::{
    ChangeNotification, CountryData, EditRejection, EditSource, EndEditing, InputSession,
    PickerState, Selection, SessionEvent, SessionPhase, SessionState, Transition,
};
pub use interfaces::{ReferenceDataProvider, ValidityPredicate};
pub use number_formatter::{FormatOptions, NumberFormatter};
pub use prefix_matcher::PrefixMatcher;
pub use search_index::{DebouncedQuery, SearchIndex};
