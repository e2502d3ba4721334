// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Readings of X-THL extensions (`THL<id>-TEMP`, `-HUM`, `-LUM`).

use crate::error::Result;
use crate::object::{Object, ThlExtension};
use crate::protocol::Protocol;

pub(super) const TEMPERATURE: &str = "TEMP";
pub(super) const HUMIDITY: &str = "HUM";
pub(super) const LUMINOSITY: &str = "LUM";

impl<P: Protocol> Object<'_, ThlExtension, P> {
    /// Returns the temperature, in °C.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the reading is missing.
    pub fn temperature(&self) -> Result<f64> {
        self.read_sub_value(TEMPERATURE)
    }

    /// Returns the relative humidity, in percent.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the reading is missing.
    pub fn humidity(&self) -> Result<f64> {
        self.read_sub_value(HUMIDITY)
    }

    /// Returns the luminosity, in lux.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the reading is missing.
    pub fn luminosity(&self) -> Result<f64> {
        self.read_sub_value(LUMINOSITY)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::device::Ipx800;
    use crate::error::{Error, ParseError};
    use crate::protocol::Query;
    use crate::protocol::testing::FakeProtocol;

    const XTHL: &str = r#"{"product":"IPX800_V4","status":"Success",
        "THL1-TEMP":21.4,"THL1-HUM":48.6,"THL1-LUM":152,
        "THL2-TEMP":-3.5,"THL2-HUM":90,"THL2-LUM":0}"#;

    #[test]
    fn readings_use_sub_keys() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(XTHL));
        let sensors = ipx.thl_extensions();
        assert_eq!(sensors.len().unwrap(), 2);
        let first = sensors.get(0).unwrap();
        assert_eq!(first.temperature().unwrap(), 21.4);
        assert_eq!(first.humidity().unwrap(), 48.6);
        assert_eq!(first.luminosity().unwrap(), 152.0);
        assert!(
            ipx.protocol()
                .sent()
                .iter()
                .all(|q| *q == Query::new().with("Get", "XTHL"))
        );
    }

    #[test]
    fn missing_reading() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(XTHL));
        let ghost = ipx.thl_extensions().slice(4, 5, 1).unwrap()[0];
        assert!(matches!(
            ghost.temperature(),
            Err(Error::Parse(ParseError::MissingField(k))) if k == "THL5-TEMP"
        ));
    }
}
