//! # itab — ITAB MEG/EEG recordings in pure Rust
//!
//! `itab` turns a decoded ITAB acquisition header into MNE's canonical
//! measurement info (FIFF channel kinds, units, calibrations, sensor
//! locations, head digitization) and reads calibrated
//! `[channels × samples]` windows from the big-endian `.raw` sample file.
//!
//! ## Data flow
//!
//! ```text
//! VendorHeaderRecord (decoded .mhd)
//!   │
//!   ├─ resolve_meas_date()     date + time strings → UTC instant
//!   ├─ normalize_channel()     vendor channel → FIFF ChannelInfo
//!   └─ assemble_meas_info()    → MeasInfo (chs, bads, dig, events, …)
//!        │
//!        └─ read_segment()     .raw → calibrated Array2<f64> [idx, t]
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use itab::{assemble_meas_info, read_segment, NullLog, ReaderConfig, VendorHeaderRecord};
//! use std::path::Path;
//!
//! # fn decode_mhd() -> VendorHeaderRecord { unimplemented!() }
//! let mhd  = decode_mhd();
//! let info = assemble_meas_info(&mhd, &ReaderConfig::default(), &NullLog).unwrap();
//!
//! let idx: Vec<usize> = (0..info.n_chan).collect();
//! let cals = info.cals();
//! let path = Path::new("run01.raw");
//! let data = read_segment(path, &info, &idx, 0, Some(1024), &cals, None).unwrap();
//! assert_eq!(data.dim(), (info.n_chan, 1024));
//! ```

pub mod config;
pub mod error;
pub mod fiff;
pub mod itab;

// ── Crate-root re-exports ─────────────────────────────────────────────────

pub use config::{ReaderConfig, ReferencePolicy};
pub use error::{ItabError, Result};

pub use fiff::{ChannelInfo, DigPoint, Event, MeasInfo, SensorLocation, SubjectInfo};

pub use itab::{
    // vendor header
    MarkerPoint, SampleEvent, SensorPosition, VendorChannelDescriptor, VendorChannelType,
    VendorHeaderRecord,
    // normalization
    resolve_meas_date, meas_date_parts, normalize_channel, dig_points, assemble_meas_info,
    AssemblyLog, LogSink, NullLog, MAG_FALLBACK_CAL,
    // reads
    clamp_range, read_segment, read_segment_into, RawItab,
};
