// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversions of raw analog readings into physical units.
//!
//! The IPX800 reports analog inputs as 16-bit raw values. These functions
//! apply the transfer functions of the GCE sensors commonly wired to them.
//! All arithmetic is plain `f64`, in the same order as the sensor datasheets,
//! so results are reproducible bit for bit.

/// Volts per raw analog step.
pub const VOLTS_PER_STEP: f64 = 0.000_050_354;

#[allow(clippy::cast_precision_loss)]
fn raw_f64(raw: i64) -> f64 {
    raw as f64
}

/// Converts a raw reading to volts.
///
/// # Examples
///
/// ```
/// use ipx800_lib::types::conversion;
///
/// assert_eq!(conversion::volt(44591), 2.245335214);
/// ```
#[must_use]
pub fn volt(raw: i64) -> f64 {
    raw_f64(raw) * VOLTS_PER_STEP
}

/// TC4012 temperature probe, in °C.
#[must_use]
pub fn tc4012(raw: i64) -> f64 {
    volt(raw) - 50.0
}

/// TC100 temperature probe, in °C.
#[must_use]
pub fn tc100(raw: i64) -> f64 {
    (volt(raw) - 0.25) / 0.028
}

/// TC5050 temperature probe on an X-HT-X3, in °C.
#[must_use]
pub fn xhtx3_tc5050(raw: i64) -> f64 {
    (volt(raw) - 1.63) / 0.0326
}

/// LS100 light sensor on an X-HT-X3, in percent.
#[must_use]
pub fn xhtx3_ls100(raw: i64) -> f64 {
    raw_f64(raw) * 0.001_525_8
}

/// SH100 humidity sensor on an X-HT-X3, in percent.
#[must_use]
pub fn xhtx3_sh100(raw: i64) -> f64 {
    ((raw_f64(raw) * 0.003_23) / 211.2 - 0.1515) / 0.006_36
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const RAW: i64 = 44591;

    #[test]
    fn volt_matches_reference() {
        assert_eq!(volt(RAW), 2.245_335_214);
    }

    #[test]
    fn temperature_probes_match_reference() {
        assert_eq!(tc4012(RAW), -47.754_664_786);
        assert_eq!(tc100(RAW), 71.261_971_928_571_43);
        assert_eq!(xhtx3_tc5050(RAW), 18.875_313_312_883_435);
    }

    #[test]
    fn light_and_humidity_match_reference() {
        assert_eq!(xhtx3_ls100(RAW), 68.036_947_8);
        assert_eq!(xhtx3_sh100(RAW), 83.404_899_525_919_59);
    }

    #[test]
    fn zero_reading() {
        assert_eq!(volt(0), 0.0);
        assert_eq!(tc4012(0), -50.0);
    }
}
