// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operations of analog inputs and counters.

use crate::error::Result;
use crate::object::{Analog, Measurable, Object};
use crate::protocol::Protocol;
use crate::types::conversion;

impl<K: Measurable, P: Protocol> Object<'_, K, P> {
    /// Returns the current raw value.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the value is missing.
    pub fn value(&self) -> Result<i64> {
        self.read_value()
    }
}

/// Each conversion reads the raw value once, then applies the matching
/// function of [`conversion`].
impl<P: Protocol> Object<'_, Analog, P> {
    /// Returns the input voltage.
    ///
    /// # Errors
    ///
    /// Returns error if reading the raw value fails.
    pub fn as_volt(&self) -> Result<f64> {
        Ok(conversion::volt(self.value()?))
    }

    /// Returns the temperature of a TC4012 probe, in °C.
    ///
    /// # Errors
    ///
    /// Returns error if reading the raw value fails.
    pub fn as_tc4012(&self) -> Result<f64> {
        Ok(conversion::tc4012(self.value()?))
    }

    /// Returns the temperature of a TC100 probe, in °C.
    ///
    /// # Errors
    ///
    /// Returns error if reading the raw value fails.
    pub fn as_tc100(&self) -> Result<f64> {
        Ok(conversion::tc100(self.value()?))
    }

    /// Returns the temperature of a TC5050 probe on an X-HT-X3, in °C.
    ///
    /// # Errors
    ///
    /// Returns error if reading the raw value fails.
    pub fn as_xhtx3_tc5050(&self) -> Result<f64> {
        Ok(conversion::xhtx3_tc5050(self.value()?))
    }

    /// Returns the light level of an LS100 sensor on an X-HT-X3, in percent.
    ///
    /// # Errors
    ///
    /// Returns error if reading the raw value fails.
    pub fn as_xhtx3_ls100(&self) -> Result<f64> {
        Ok(conversion::xhtx3_ls100(self.value()?))
    }

    /// Returns the humidity of an SH100 sensor on an X-HT-X3, in percent.
    ///
    /// # Errors
    ///
    /// Returns error if reading the raw value fails.
    pub fn as_xhtx3_sh100(&self) -> Result<f64> {
        Ok(conversion::xhtx3_sh100(self.value()?))
    }
}
