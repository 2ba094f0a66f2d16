//! ITAB (`.raw` + `.mhd`) recordings.
//!
//! # Quick start
//! ```no_run
//! use itab::itab::{RawItab, VendorHeaderRecord};
//! use itab::{LogSink, ReaderConfig};
//!
//! # fn decode_mhd() -> VendorHeaderRecord { unimplemented!() }
//! let mhd: VendorHeaderRecord = decode_mhd();   // upstream `.mhd` decoder
//! let raw = RawItab::open("run01.raw", &mhd, &ReaderConfig::default(), &LogSink).unwrap();
//! println!("{} channels @ {} Hz", raw.info.n_chan, raw.info.sfreq);
//! let meg = raw.info.pick_kind(itab::fiff::constants::FIFFV_MEG_CH);
//! let first_second = raw.read_segment(&meg, 0, Some(raw.info.sfreq as usize)).unwrap();
//! ```
pub mod channel;
pub mod header;
pub mod info;
pub mod raw;
pub mod time;

pub use channel::{normalize_channel, MAG_FALLBACK_CAL};
pub use header::{
    MarkerPoint, SampleEvent, SensorPosition, VendorChannelDescriptor, VendorChannelType,
    VendorHeaderRecord,
};
pub use info::{assemble_meas_info, dig_points, AssemblyLog, LogSink, NullLog};
pub use raw::{clamp_range, read_segment, read_segment_into, RawItab};
pub use time::{meas_date_parts, resolve_meas_date};
