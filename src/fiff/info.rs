//! Canonical measurement info (MNE's `Info` struct) for a normalized recording.
//!
//! Everything here is device-agnostic: channel kinds, units and coil types are
//! FIFF codes from [`super::constants`], positions are in metres.
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::json;

use super::constants::*;
use crate::error::{ItabError, Result};

// ── Sensor location ──────────────────────────────────────────────────────

/// Sensor origin plus orientation frame.
///
/// `orientation` rows are the unit vectors `ex`, `ey`, `ez`.  The flat
/// 12-element FIFF `loc` vector only exists at the interchange boundary,
/// see [`SensorLocation::flatten`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorLocation {
    /// Origin in metres.
    pub origin:      [f64; 3],
    pub orientation: [[f64; 3]; 3],
}

impl SensorLocation {
    /// FIFF `loc` layout: `[r0(3), ex(3), ey(3), ez(3)]`.
    pub fn flatten(&self) -> [f64; 12] {
        let mut loc = [0f64; 12];
        loc[0..3].copy_from_slice(&self.origin);
        for (i, axis) in self.orientation.iter().enumerate() {
            loc[3 + i * 3..6 + i * 3].copy_from_slice(axis);
        }
        loc
    }

    pub fn is_zero(&self) -> bool {
        self.flatten().iter().all(|&v| v == 0.0)
    }
}

// ── Channel info ─────────────────────────────────────────────────────────

/// One canonical channel.
///
/// Serialized as a FIFF `ch_info` struct by [`ChannelInfo::to_bytes`]
/// (big-endian, 96 bytes):
/// ```text
///  4  scanno       i32
///  4  logno        i32
///  4  kind         i32
///  4  range        f32
///  4  cal          f32
///  4  coil_type    i32
/// 48  loc          12 × f32
///  4  unit         i32
///  4  unit_mul     i32
/// 16  ch_name      16 × u8 (null-padded Latin-1)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInfo {
    pub scan_no:     i32,
    pub log_no:      i32,
    pub kind:        i32,
    pub range:       f64,
    pub cal:         f64,
    pub coil_type:   i32,
    pub coord_frame: i32,
    pub loc:         SensorLocation,
    pub unit:        i32,
    pub unit_mul:    i32,
    pub name:        String,
}

impl ChannelInfo {
    /// A unitless miscellaneous channel with identity calibration.
    pub fn misc(name: impl Into<String>) -> Self {
        ChannelInfo {
            scan_no:     0,
            log_no:      1,
            kind:        FIFFV_MISC_CH,
            range:       1.0,
            cal:         1.0,
            coil_type:   FIFFV_COIL_NONE,
            coord_frame: FIFFV_COORD_UNKNOWN,
            loc:         SensorLocation::default(),
            unit:        FIFF_UNIT_NONE,
            unit_mul:    FIFF_UNITM_NONE,
            name:        name.into(),
        }
    }

    /// Calibration factor applied to raw integer samples: `cal × range`.
    #[inline]
    pub fn calibration(&self) -> f64 {
        self.cal * self.range
    }

    /// Flat 12-element FIFF `loc` vector.
    pub fn loc(&self) -> [f64; 12] {
        self.loc.flatten()
    }

    /// Encode as the 96-byte FIFF `ch_info` payload.
    ///
    /// Names longer than 16 bytes are truncated; characters outside
    /// Latin-1 become `?`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(96);
        out.extend_from_slice(&self.scan_no.to_be_bytes());
        out.extend_from_slice(&self.log_no.to_be_bytes());
        out.extend_from_slice(&self.kind.to_be_bytes());
        out.extend_from_slice(&(self.range as f32).to_be_bytes());
        out.extend_from_slice(&(self.cal as f32).to_be_bytes());
        out.extend_from_slice(&self.coil_type.to_be_bytes());
        for v in self.loc() {
            out.extend_from_slice(&(v as f32).to_be_bytes());
        }
        out.extend_from_slice(&self.unit.to_be_bytes());
        out.extend_from_slice(&self.unit_mul.to_be_bytes());
        let mut name = [0u8; 16];
        for (dst, c) in name.iter_mut().zip(self.name.chars()) {
            *dst = u8::try_from(u32::from(c)).unwrap_or(b'?');
        }
        out.extend_from_slice(&name);
        out
    }
}

// ── Digitization, subject, events ────────────────────────────────────────

/// A digitized head point (fiducial, extra point or HPI coil).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigPoint {
    pub kind:        i32,
    pub ident:       i32,
    /// Position in metres.
    pub r:           [f64; 3],
    pub coord_frame: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubjectInfo {
    pub last_name:  String,
    pub first_name: String,
    /// Vendor sex code, copied verbatim.
    pub sex:        i32,
}

/// One trigger from the vendor event list, passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Onset sample index.
    pub onset:   i64,
    pub kind:    i32,
    pub quality: i32,
}

// ── Measurement info ─────────────────────────────────────────────────────

/// Canonical recording description.
///
/// Built once when a recording is opened and never mutated afterwards, so a
/// `&MeasInfo` can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasInfo {
    pub sfreq:        f64,
    pub meas_date:    DateTime<Utc>,
    pub description:  String,
    pub subject_info: SubjectInfo,
    pub ch_names:     Vec<String>,
    pub bads:         Vec<String>,
    pub chs:          Vec<ChannelInfo>,
    pub lowpass:      Option<f64>,
    pub highpass:     Option<f64>,
    pub n_chan:       usize,
    pub n_samp:       usize,
    /// Always 1: ITAB files hold one continuous acquisition.
    pub n_trials:     usize,
    /// Byte offset of the first sample in the raw file.
    pub start_data:   u64,
    pub dig:          Vec<DigPoint>,
    pub events:       Vec<Event>,
}

impl MeasInfo {
    /// Calibration array `[n_chan]`: `cal[i] = chs[i].cal * chs[i].range`.
    pub fn cals(&self) -> Vec<f64> {
        self.chs.iter().map(|c| c.calibration()).collect()
    }

    pub fn ch_names(&self) -> Vec<&str> {
        self.ch_names.iter().map(String::as_str).collect()
    }

    /// Indices of channels whose kind equals `kind` (e.g. `FIFFV_MEG_CH`).
    pub fn pick_kind(&self, kind: i32) -> Vec<usize> {
        self.chs
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == kind)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of channels not listed in `bads`.
    pub fn pick_good(&self) -> Vec<usize> {
        let bads: HashSet<&str> = self.bads.iter().map(String::as_str).collect();
        self.ch_names
            .iter()
            .enumerate()
            .filter(|(_, n)| !bads.contains(n.as_str()))
            .map(|(i, _)| i)
            .collect()
    }

    /// Cross-check the assembled structure.
    pub fn check_consistency(&self) -> Result<()> {
        let bad = |msg: String| Err(ItabError::InconsistentMetadata(msg));

        if !self.sfreq.is_finite() || self.sfreq <= 0.0 {
            return bad(format!("sampling frequency must be > 0, got {}", self.sfreq));
        }
        if self.ch_names.len() != self.n_chan {
            return bad(format!(
                "n_chan is {} but {} channel names are listed",
                self.n_chan,
                self.ch_names.len()
            ));
        }
        if self.chs.len() != self.n_chan {
            return bad(format!(
                "n_chan is {} but {} channel infos are listed",
                self.n_chan,
                self.chs.len()
            ));
        }
        let mut seen = HashSet::with_capacity(self.n_chan);
        for name in &self.ch_names {
            if !seen.insert(name.as_str()) {
                return bad(format!("channel name {name:?} is not unique"));
            }
        }
        for b in &self.bads {
            if !seen.contains(b.as_str()) {
                return bad(format!("bad channel {b:?} is not a channel of this recording"));
            }
        }
        for (what, v) in [("lowpass", self.lowpass), ("highpass", self.highpass)] {
            if let Some(f) = v {
                if !f.is_finite() {
                    return bad(format!("{what} must be finite, got {f}"));
                }
            }
        }
        Ok(())
    }

    /// JSON summary of the metadata for the surrounding container.
    pub fn to_json(&self) -> serde_json::Value {
        let chs: Vec<_> = self
            .chs
            .iter()
            .map(|c| {
                json!({
                    "ch_name":     c.name,
                    "kind":        c.kind,
                    "coil_type":   c.coil_type,
                    "coord_frame": c.coord_frame,
                    "range":       c.range,
                    "cal":         c.cal,
                    "unit":        c.unit,
                    "unit_mul":    c.unit_mul,
                    "loc":         c.loc().to_vec(),
                    "scanno":      c.scan_no,
                    "logno":       c.log_no,
                })
            })
            .collect();
        let dig: Vec<_> = self
            .dig
            .iter()
            .map(|d| {
                json!({
                    "kind":        d.kind,
                    "ident":       d.ident,
                    "r":           d.r.to_vec(),
                    "coord_frame": d.coord_frame,
                })
            })
            .collect();
        let events: Vec<_> = self
            .events
            .iter()
            .map(|e| json!([e.onset, e.kind, e.quality]))
            .collect();
        json!({
            "sfreq":       self.sfreq,
            "meas_date":   self.meas_date.to_rfc3339(),
            "description": self.description,
            "subject_info": {
                "last_name":  self.subject_info.last_name,
                "first_name": self.subject_info.first_name,
                "sex":        self.subject_info.sex,
            },
            "ch_names":   self.ch_names,
            "bads":       self.bads,
            "chs":        chs,
            "lowpass":    self.lowpass,
            "highpass":   self.highpass,
            "nchan":      self.n_chan,
            "n_samp":     self.n_samp,
            "n_trials":   self.n_trials,
            "start_data": self.start_data,
            "dig":        dig,
            "events":     events,
        })
    }
}
