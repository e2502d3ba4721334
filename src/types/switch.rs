// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State of switch-like objects (relays, virtual inputs and outputs).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the state of a relay or virtual input/output.
///
/// The device reports `1` for on and `0` for off.
///
/// # Examples
///
/// ```
/// use ipx800_lib::types::SwitchState;
///
/// assert_eq!(SwitchState::from_raw(1), SwitchState::On);
/// assert_eq!(SwitchState::from_raw(0), SwitchState::Off);
/// assert_eq!(SwitchState::On.to_string(), "On");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwitchState {
    /// The object is off.
    Off,
    /// The object is on.
    On,
}

impl SwitchState {
    /// Interprets a raw device value. Only `1` means on.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        if raw == 1 { Self::On } else { Self::Off }
    }

    /// Returns the display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
        }
    }

    /// Returns `true` if the state is [`SwitchState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for SwitchState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<SwitchState> for bool {
    fn from(state: SwitchState) -> Self {
        state.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_only_one_is_on() {
        assert_eq!(SwitchState::from_raw(1), SwitchState::On);
        assert_eq!(SwitchState::from_raw(0), SwitchState::Off);
        assert_eq!(SwitchState::from_raw(2), SwitchState::Off);
        assert_eq!(SwitchState::from_raw(-1), SwitchState::Off);
    }

    #[test]
    fn bool_conversions() {
        assert_eq!(SwitchState::from(true), SwitchState::On);
        assert!(!bool::from(SwitchState::Off));
    }

    #[test]
    fn serializes_as_display_name() {
        assert_eq!(serde_json::to_string(&SwitchState::On).unwrap(), "\"On\"");
    }
}
