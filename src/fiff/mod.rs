//! Canonical, device-agnostic recording model using FIFF codes.
//!
//! The ITAB reader normalizes vendor headers into these types so downstream
//! code can treat them exactly like MNE's `Info` / `ch_info` records.
pub mod constants;
pub mod info;

pub use info::{ChannelInfo, DigPoint, Event, MeasInfo, SensorLocation, SubjectInfo};
