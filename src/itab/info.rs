//! Vendor header → canonical [`MeasInfo`].
use crate::config::ReaderConfig;
use crate::error::Result;
use crate::fiff::constants::*;
use crate::fiff::info::{DigPoint, Event, MeasInfo, SubjectInfo};

use super::channel::normalize_channel;
use super::header::{MarkerPoint, VendorHeaderRecord};
use super::time::resolve_meas_date;

/// Receives the assembler's progress messages.
///
/// Pass [`LogSink`] to route them to the `log` facade, [`NullLog`] to drop
/// them, or your own implementation to capture them.
pub trait AssemblyLog {
    /// Called once, after `info` passed its consistency check.
    fn meas_info_composed(&self, info: &MeasInfo);
}

/// Forwards to `log::info!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AssemblyLog for LogSink {
    fn meas_info_composed(&self, info: &MeasInfo) {
        log::info!(
            "Measurement info composed: {} channels ({} bad), {} samples @ {} Hz, \
             {} dig points, {} events",
            info.n_chan,
            info.bads.len(),
            info.n_samp,
            info.sfreq,
            info.dig.len(),
            info.events.len()
        );
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl AssemblyLog for NullLog {
    fn meas_info_composed(&self, _info: &MeasInfo) {}
}

/// Nasion, RPA, LPA: order of the first three header markers.
const CARDINAL_SEQUENCE: [i32; 3] = [FIFFV_POINT_NASION, FIFFV_POINT_RPA, FIFFV_POINT_LPA];

/// Head-frame digitization points from the header markers (mm → m).
///
/// Markers 0–2 are the cardinal fiducials, marker 3 is an extra point
/// (vertex) and every later marker is an HPI coil.  Non-cardinal points get
/// `ident = index + 1`.
pub fn dig_points(markers: &[MarkerPoint]) -> Vec<DigPoint> {
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let (kind, ident) = match i {
                0..=2 => (FIFFV_POINT_CARDINAL, CARDINAL_SEQUENCE[i]),
                3 => (FIFFV_POINT_EXTRA, i as i32 + 1),
                _ => (FIFFV_POINT_HPI, i as i32 + 1),
            };
            DigPoint {
                kind,
                ident,
                r: [m.posx / 1000.0, m.posy / 1000.0, m.posz / 1000.0],
                coord_frame: FIFFV_COORD_HEAD,
            }
        })
        .collect()
}

// Zero means "not recorded", not DC.
fn cutoff(v: f64) -> Option<f64> {
    (v != 0.0).then_some(v)
}

/// Build the canonical measurement info from a decoded header.
///
/// # Errors
/// * [`ItabError::InvalidTimestamp`](crate::ItabError::InvalidTimestamp) if
///   the date or time string cannot be parsed.
/// * [`ItabError::InconsistentMetadata`](crate::ItabError::InconsistentMetadata)
///   if the result fails [`MeasInfo::check_consistency`].
pub fn assemble_meas_info(
    mhd: &VendorHeaderRecord,
    cfg: &ReaderConfig,
    log: &dyn AssemblyLog,
) -> Result<MeasInfo> {
    let meas_date = resolve_meas_date(&mhd.date, &mhd.time)?;

    let mut ch_names = Vec::with_capacity(mhd.ch.len());
    let mut bads = Vec::new();
    let mut chs = Vec::with_capacity(mhd.ch.len());
    for desc in &mhd.ch {
        ch_names.push(desc.label.clone());
        if desc.flag != 0 {
            bads.push(desc.label.clone());
        }
        chs.push(normalize_channel(desc, cfg.reference_policy));
    }

    let events = mhd
        .sample
        .iter()
        .map(|s| Event { onset: s.start, kind: s.kind, quality: s.quality })
        .collect();

    let info = MeasInfo {
        sfreq: mhd.smpfq,
        meas_date,
        description: mhd.notes.clone(),
        subject_info: SubjectInfo {
            last_name:  mhd.last_name.clone(),
            first_name: mhd.first_name.clone(),
            sex:        mhd.sex,
        },
        ch_names,
        bads,
        chs,
        lowpass: cutoff(mhd.hw_low_fr),
        highpass: cutoff(mhd.hw_hig_fr),
        n_chan: mhd.nchan,
        n_samp: mhd.ntpdata,
        n_trials: 1,
        start_data: mhd.start_data,
        dig: dig_points(&mhd.marker),
        events,
    };

    info.check_consistency()?;
    log.meas_info_composed(&info);
    Ok(info)
}
