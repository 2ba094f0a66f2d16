//! Vendor channel descriptor → canonical [`ChannelInfo`].
//!
//! | vendor type | kind | cal                       | unit | unit_mul        |
//! |-------------|------|---------------------------|------|-----------------|
//! | magnetic    | MEG  | `amvbit / calib` (0.001 if `calib == 0`) | T | fT / pT |
//! | electric    | BIO  | `amvbit / calib`          | V    | mV / "uT"       |
//! | reference   | BIO  | 1.0                       | V    | mV / "uT"       |
//! | other       | MISC | 1.0                       | none | none            |
//!
//! Unknown vendor types never fail: they come out as miscellaneous channels
//! so one odd channel cannot prevent a recording from loading.
use crate::config::ReferencePolicy;
use crate::fiff::constants::*;
use crate::fiff::info::{ChannelInfo, SensorLocation};

use super::header::{SensorPosition, VendorChannelDescriptor, VendorChannelType};

/// Scale used for magnetic channels whose calibration unit is zero.
pub const MAG_FALLBACK_CAL: f64 = 0.001;

fn magnetic_unit_mul(unit: &str) -> i32 {
    match unit {
        "fT" => FIFF_UNITM_F,
        "pT" => FIFF_UNITM_P,
        _ => FIFF_UNITM_NONE,
    }
}

// "uT" on a voltage channel is what the acquisition software writes.
fn electric_unit_mul(unit: &str) -> i32 {
    match unit {
        "mV" => FIFF_UNITM_M,
        "uT" => FIFF_UNITM_MU,
        _ => FIFF_UNITM_NONE,
    }
}

/// Origin in metres plus axis-aligned orientation.
///
/// Only the diagonal orientation terms are stored by the vendor format; the
/// cross terms are always zero.
fn sensor_location(pos: &SensorPosition) -> SensorLocation {
    SensorLocation {
        origin: [pos.posx / 1000.0, pos.posy / 1000.0, pos.posz / 1000.0],
        orientation: [
            [pos.orix, 0.0, 0.0],
            [0.0, pos.oriy, 0.0],
            [0.0, 0.0, pos.oriz],
        ],
    }
}

/// Normalize one vendor channel descriptor.
pub fn normalize_channel(desc: &VendorChannelDescriptor, policy: ReferencePolicy) -> ChannelInfo {
    let mut ch = ChannelInfo::misc(desc.label.clone());

    match desc.kind {
        VendorChannelType::Magnetic => {
            if let Some(pos) = &desc.pos {
                ch.loc = sensor_location(pos);
            }
            ch.kind = FIFFV_MEG_CH;
            ch.coil_type = FIFFV_COIL_POINT_MAGNETOMETER;
            ch.log_no = desc.number;
            ch.cal = if desc.calib == 0.0 {
                MAG_FALLBACK_CAL
            } else {
                desc.amvbit / desc.calib
            };
            ch.unit = FIFF_UNIT_T;
            ch.unit_mul = magnetic_unit_mul(&desc.unit);
        }
        VendorChannelType::Electric => {
            ch.kind = FIFFV_BIO_CH;
            ch.cal = desc.amvbit / desc.calib;
            ch.unit = FIFF_UNIT_V;
            ch.log_no = desc.number;
            ch.unit_mul = electric_unit_mul(&desc.unit);
        }
        t if t.is_reference() && policy == ReferencePolicy::AnyReference => {
            ch.kind = FIFFV_BIO_CH;
            ch.cal = 1.0;
            ch.unit = FIFF_UNIT_V;
            ch.unit_mul = electric_unit_mul(&desc.unit);
        }
        // ReferencePolicy::Literal: the historical guard is never satisfied.
        _ => {}
    }
    ch
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANY: ReferencePolicy = ReferencePolicy::AnyReference;

    fn desc(kind: VendorChannelType, unit: &str) -> VendorChannelDescriptor {
        VendorChannelDescriptor {
            label:  "CH".into(),
            kind,
            number: 7,
            amvbit: 100.0,
            calib:  5.0,
            unit:   unit.into(),
            flag:   0,
            pos:    None,
        }
    }

    #[test]
    fn unknown_unit_leaves_multiplier_unset() {
        let ch = normalize_channel(&desc(VendorChannelType::Magnetic, "T"), ANY);
        assert_eq!(ch.unit_mul, FIFF_UNITM_NONE);
        let ch = normalize_channel(&desc(VendorChannelType::Electric, "uV"), ANY);
        assert_eq!(ch.unit_mul, FIFF_UNITM_NONE);
    }

    #[test]
    fn magnetic_without_position_keeps_zero_loc() {
        let ch = normalize_channel(&desc(VendorChannelType::Magnetic, "fT"), ANY);
        assert!(ch.loc.is_zero());
        assert_eq!(ch.coil_type, FIFFV_COIL_POINT_MAGNETOMETER);
    }

    #[test]
    fn electric_has_no_zero_guard() {
        let mut d = desc(VendorChannelType::Electric, "mV");
        d.calib = 0.0;
        let ch = normalize_channel(&d, ReferencePolicy::default());
        assert!(ch.cal.is_infinite());
    }

    #[test]
    fn sensor_location_converts_mm_and_keeps_diagonal() {
        let loc = sensor_location(&SensorPosition {
            posx: 10.0, posy: -20.0, posz: 30.0,
            orix: 0.6, oriy: 0.0, oriz: 0.8,
        });
        assert_eq!(loc.origin, [0.01, -0.02, 0.03]);
        assert_eq!(loc.orientation, [[0.6, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.8]]);
    }
}
