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

use std::{borrow::Cow, sync::Arc, time::Instant};

use log::{debug, trace, warn};

use crate::{
    config::PhoneInputConfig,
    countrydata::{CountryRecord, CountryTable},
    helper_constants::MAX_DIGITS,
    interfaces::{ReferenceDataProvider, ValidityPredicate},
    number_formatter::NumberFormatter,
    prefix_matcher::PrefixMatcher,
    search_index::SearchIndex,
    string_util::{digits_only, strip_cow_prefix},
};

use super::{
    enums::{EditSource, Selection, SessionEvent},
    errors::EditRejection,
    helper_types::{ChangeNotification, CountryData, EndEditing, SessionState, Transition},
    picker::{row_of, PickerState},
};

/// Controller of one phone input.
///
/// State lives in immutable [`SessionState`] snapshots.
/// [`InputSession::transition`] computes the next snapshot of an event
/// without touching the session; [`InputSession::apply`] and the `on_*`
/// helpers store it.
pub struct InputSession {
    config: PhoneInputConfig,
    matcher: PrefixMatcher,
    formatter: NumberFormatter,
    search: SearchIndex,
    validity: Option<Box<dyn ValidityPredicate>>,
    state: SessionState,
}

impl InputSession {
    /// Creates a session over `table` and resolves the initial value and
    /// country of `config`.
    pub fn new(table: Arc<CountryTable>, config: PhoneInputConfig) -> Self {
        let matcher = PrefixMatcher::new(Arc::clone(&table));
        let formatter = NumberFormatter::new(config.format.clone());
        let search = SearchIndex::new(table);
        let mut session = Self {
            config,
            matcher,
            formatter,
            search,
            validity: None,
            state: SessionState::default(),
        };
        session.state = session.initial_state();
        session
    }

    /// Builds the table of `config` from `data` first.
    pub fn from_reference_data(config: PhoneInputConfig, data: &dyn ReferenceDataProvider) -> Self {
        let table = Arc::new(CountryTable::build(&config.table, data));
        Self::new(table, config)
    }

    pub fn with_validity(mut self, predicate: impl ValidityPredicate + 'static) -> Self {
        self.validity = Some(Box::new(predicate));
        self
    }

    fn initial_state(&self) -> SessionState {
        let hint = self.config.country.as_deref();
        let digits = digits_only(&self.config.value);
        let country = if digits.len() > 1 {
            self.matcher.guess(&digits, hint)
        } else {
            hint.and_then(|hint| self.matcher.find_by_iso2(hint))
        };

        let formatted_text = if digits.is_empty() && country.is_none() {
            String::new()
        } else {
            let number = self.with_dial_code(&digits, country.as_deref());
            self.formatter.format(&number, country.as_deref())
        };
        debug!(
            "Session started with '{}' for {:?}",
            formatted_text,
            country.as_ref().map(|country| &country.iso2)
        );

        SessionState {
            formatted_text,
            picker: PickerState {
                highlighted: row_of(self.table().all_countries(), country.as_ref()),
                ..Default::default()
            },
            selection: Selection::None.reselect(country),
            country_hint: self.config.country.clone(),
        }
    }

    /// Puts the dial code of `country` in front of digits too short to
    /// carry it themselves.
    fn with_dial_code<'a>(&self, digits: &'a str, country: Option<&CountryRecord>) -> Cow<'a, str> {
        match country {
            Some(country)
                if !self.formatter.options().disable_country_code
                    && digits.len() < 2
                    && !digits.starts_with(country.dial_code.as_str()) =>
            {
                Cow::Owned(fast_cat::concat_str!(country.dial_code.as_str(), digits))
            }
            _ => Cow::Borrowed(digits),
        }
    }

    /// Computes the state that follows `event`. Rejected edits leave the
    /// state as it was.
    pub fn transition(
        &self,
        state: &SessionState,
        event: &SessionEvent,
    ) -> Result<Transition, EditRejection> {
        match event {
            SessionEvent::TypedInput(text) => self.typed_input(state, text),
            SessionEvent::CountryPicked(country) => self.country_picked(state, country),
            SessionEvent::ExternalValueChange(value) => Ok(Transition::silent(
                self.external_value(state, value.as_deref()),
            )),
            SessionEvent::ExternalCountryChange(hint) => {
                Ok(Transition::silent(self.external_country(state, hint)))
            }
            SessionEvent::Focus => Ok(Transition::silent(self.focused(state))),
            SessionEvent::ToggleDropdown
            | SessionEvent::SearchChanged(_)
            | SessionEvent::MoveHighlight(_)
            | SessionEvent::SearchJump { .. }
            | SessionEvent::PollSearch(_) => Ok(Transition::silent(SessionState {
                picker: self.picker_transition(state, event),
                ..state.clone()
            })),
        }
    }

    /// Applies `event` to the current state.
    pub fn apply(&mut self, event: SessionEvent) -> Result<Option<ChangeNotification>, EditRejection> {
        let Transition { state, notification } = self.transition(&self.state, &event)?;
        self.state = state;
        Ok(notification)
    }

    fn typed_input(&self, state: &SessionState, value: &str) -> Result<Transition, EditRejection> {
        let options = self.formatter.options();
        let prefix = options.prefix.as_str();
        if value == prefix {
            return Ok(Transition::silent(state.with_text("")));
        }

        if !self.config.country_code_editable {
            if let Some(selected) = state.selected() {
                let main_record = if selected.has_area_codes {
                    self.matcher.main_record_for(&selected.iso2)
                } else {
                    None
                };
                let dial_code = main_record
                    .as_deref()
                    .map_or(selected.dial_code.as_str(), |main| main.dial_code.as_str());
                let required = fast_cat::concat_str!(prefix, dial_code);
                if !value.starts_with(&required) {
                    trace!("'{}' doesn't start with locked '{}'", value, required);
                    return Err(EditRejection::CountryCodeLocked);
                }
            }
        }

        let digits = digits_only(value);
        if digits.len() > MAX_DIGITS {
            return Err(EditRejection::TooManyDigits);
        }
        if value == state.formatted_text {
            return Err(EditRejection::Unchanged);
        }

        let mut selection = state.selection.clone();
        let formatted_text = if value.is_empty() {
            self.empty_text().to_owned()
        } else {
            let re_match = match &state.selection {
                Selection::Pinned(country) => country.dial_code.len() > digits.len(),
                _ => true,
            };
            if re_match {
                let guessed = self
                    .matcher
                    .guess(&digits, state.country_hint.as_deref())
                    .or_else(|| state.selected().cloned());
                selection = Selection::None.reselect(guessed);
            }
            self.formatter
                .format(&digits, selection.country().map(|country| country.as_ref()))
        };

        let next = SessionState {
            formatted_text,
            selection,
            ..state.clone()
        };
        let notification = self.notification(&next, EditSource::Typed(value.to_owned()));
        Ok(Transition {
            state: next,
            notification: Some(notification),
        })
    }

    fn country_picked(
        &self,
        state: &SessionState,
        picked: &CountryRecord,
    ) -> Result<Transition, EditRejection> {
        let country = self
            .table()
            .visible()
            .iter()
            .find(|record| record.same_entry(picked))
            .cloned()
            .ok_or(EditRejection::UnknownCountry)?;

        let digits = state.raw_digits();
        let number = match state
            .selected()
            .and_then(|previous| strip_cow_prefix(digits, &previous.dial_code))
        {
            Some(national) => Cow::Owned(fast_cat::concat_str!(
                country.dial_code.as_str(),
                &*national
            )),
            None => Cow::Borrowed(country.dial_code.as_str()),
        };
        let formatted_text = self.formatter.format(&number, Some(&*country));

        let mut picker = state.picker.closed();
        picker.highlighted = row_of(self.table().all_countries(), Some(&country));
        let next = SessionState {
            formatted_text,
            selection: Selection::Pinned(Arc::clone(&country)),
            picker,
            country_hint: state.country_hint.clone(),
        };
        let notification = self.notification(&next, EditSource::CountryPicked(country.iso2.clone()));
        Ok(Transition {
            state: next,
            notification: Some(notification),
        })
    }

    fn external_value(&self, state: &SessionState, value: Option<&str>) -> SessionState {
        let Some(value) = value else {
            return SessionState {
                formatted_text: String::new(),
                selection: Selection::None,
                ..state.clone()
            };
        };
        if value.is_empty() {
            return state.with_text("");
        }

        let digits = digits_only(value);
        if let Some(current) = state.selected() {
            if digits.starts_with(current.dial_code.as_str()) {
                return state.with_text(self.formatter.format(&digits, Some(&**current)));
            }
        }
        let guessed = self
            .matcher
            .guess(&digits, state.country_hint.as_deref())
            .or_else(|| state.selected().cloned());
        let number = self.with_dial_code(&digits, guessed.as_deref());
        let formatted_text = self.formatter.format(&number, guessed.as_deref());
        SessionState {
            formatted_text,
            selection: state.selection.reselect(guessed),
            ..state.clone()
        }
    }

    fn external_country(&self, state: &SessionState, hint: &str) -> SessionState {
        let found = if hint.starts_with(|c: char| c.is_ascii_digit()) {
            self.matcher.find_by_dial_code(hint)
        } else {
            self.matcher.find_by_iso2(hint)
        };
        let mut next = SessionState {
            country_hint: Some(hint.to_owned()),
            ..state.clone()
        };
        match found {
            Some(country) => {
                next.formatted_text = if self.formatter.options().disable_country_code {
                    String::new()
                } else {
                    self.formatter.format(&country.dial_code, Some(&*country))
                };
                next.selection = state.selection.reselect(Some(country));
            }
            None => warn!("Unknown country '{}' ignored", hint),
        }
        next
    }

    fn focused(&self, state: &SessionState) -> SessionState {
        let options = self.formatter.options();
        match state.selected() {
            Some(country) if !options.disable_country_code && state.formatted_text == options.prefix => {
                state.with_text(fast_cat::concat_str!(
                    options.prefix.as_str(),
                    country.dial_code.as_str()
                ))
            }
            _ => state.clone(),
        }
    }

    fn picker_transition(&self, state: &SessionState, event: &SessionEvent) -> PickerState {
        let picker = &state.picker;
        let rows = self.table().all_countries();
        match event {
            SessionEvent::ToggleDropdown => PickerState {
                open: !picker.open,
                highlighted: row_of(rows, state.selected()),
                ..picker.clone()
            },
            SessionEvent::SearchChanged(search) => {
                let highlighted = if search.is_empty() && state.selected().is_some() {
                    row_of(rows, state.selected())
                } else {
                    Some(0)
                };
                PickerState {
                    search: search.clone(),
                    highlighted,
                    ..picker.clone()
                }
            }
            SessionEvent::MoveHighlight(direction) => {
                let filtered = if picker.is_searching() {
                    SearchIndex::filter(rows, &picker.search).len()
                } else {
                    rows.len()
                };
                picker.moved(*direction, rows.len(), filtered)
            }
            SessionEvent::SearchJump { text, at } => {
                let mut next = picker.clone();
                next.pending_jump.push(text, *at);
                next
            }
            SessionEvent::PollSearch(now) => {
                let mut next = picker.clone();
                if let Some(query) = next.pending_jump.poll(*now) {
                    let visible = self.table().visible();
                    let candidate = self
                        .search
                        .probable_candidate(&query)
                        .or_else(|| visible.first().cloned());
                    // rows start with the preferred countries
                    next.highlighted = row_of(visible, candidate.as_ref())
                        .map(|row| row + self.table().preferred().len());
                    trace!("Jump query '{}' highlighted row {:?}", query, next.highlighted);
                }
                next
            }
            _ => picker.clone(),
        }
    }

    fn empty_text(&self) -> &str {
        let options = self.formatter.options();
        if options.disable_country_code {
            ""
        } else {
            options.prefix.as_str()
        }
    }

    fn notification(&self, state: &SessionState, source: EditSource) -> ChangeNotification {
        let digits = state.raw_digits();
        ChangeNotification {
            full_number: fast_cat::concat_str!(self.formatter.options().prefix.as_str(), &*digits),
            country_data: CountryData::from(state.selected_record()),
            source,
            formatted_text: state.formatted_text.clone(),
        }
    }

    pub fn on_typed_input(&mut self, text: &str) -> Result<Option<ChangeNotification>, EditRejection> {
        self.apply(SessionEvent::TypedInput(text.to_owned()))
    }

    pub fn on_country_picked(
        &mut self,
        country: &Arc<CountryRecord>,
    ) -> Result<Option<ChangeNotification>, EditRejection> {
        self.apply(SessionEvent::CountryPicked(Arc::clone(country)))
    }

    pub fn on_external_value_change(&mut self, value: Option<&str>) {
        self.state = self.external_value(&self.state, value);
    }

    pub fn on_external_country_change(&mut self, hint: &str) {
        self.state = self.external_country(&self.state, hint);
    }

    pub fn on_focus(&mut self) {
        self.state = self.focused(&self.state);
    }

    pub fn toggle_dropdown(&mut self) {
        self.update_picker(SessionEvent::ToggleDropdown);
    }

    pub fn on_search_change(&mut self, search: &str) {
        self.update_picker(SessionEvent::SearchChanged(search.to_owned()));
    }

    pub fn move_highlight(&mut self, direction: isize) {
        self.update_picker(SessionEvent::MoveHighlight(direction));
    }

    /// Feeds a type-to-jump keystroke typed at `at`.
    pub fn search_jump(&mut self, text: &str, at: Instant) {
        self.update_picker(SessionEvent::SearchJump {
            text: text.to_owned(),
            at,
        });
    }

    /// Highlights the probable candidate once the jump query has settled.
    pub fn poll_search(&mut self, now: Instant) {
        self.update_picker(SessionEvent::PollSearch(now));
    }

    fn update_picker(&mut self, event: SessionEvent) {
        self.state.picker = self.picker_transition(&self.state, &event);
    }

    /// Picker rows matching the current search text.
    pub fn search_results(&self) -> Vec<Arc<CountryRecord>> {
        self.search.search(&self.state.picker.search)
    }

    pub fn end_editing(&self) -> Option<EndEditing> {
        self.state.selected_record().map(EndEditing::from)
    }

    pub fn country_data(&self) -> CountryData {
        CountryData::from(self.state.selected_record())
    }

    /// The configured error message when the validity predicate rejects the
    /// current number.
    pub fn validation_error(&self) -> Option<&str> {
        let predicate = self.validity.as_ref()?;
        let table = self.table();
        let valid = predicate.is_valid(
            &self.state.raw_digits(),
            self.state.selected_record(),
            table.visible(),
            table.hidden(),
        );
        (!valid).then_some(self.config.default_error_message.as_str())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn formatted_text(&self) -> &str {
        &self.state.formatted_text
    }

    pub fn selected_country(&self) -> Option<&Arc<CountryRecord>> {
        self.state.selected()
    }

    pub fn table(&self) -> &Arc<CountryTable> {
        self.matcher.table()
    }

    pub fn matcher(&self) -> &PrefixMatcher {
        &self.matcher
    }

    pub fn formatter(&self) -> &NumberFormatter {
        &self.formatter
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.search
    }
}
