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

mod enums;
mod errors;
mod helper_types;
mod input_session;
mod picker;

pub use enums::{EditSource, Selection, SessionEvent, SessionPhase};
pub use errors::EditRejection;
pub use helper_types::{ChangeNotification, CountryData, EndEditing, SessionState, Transition};
pub use input_session::InputSession;
pub use picker::PickerState;
