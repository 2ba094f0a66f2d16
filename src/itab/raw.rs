//! Calibrated reads from an ITAB `.raw` sample file.
//!
//! # Wire layout
//! ```text
//! start_data ─┐
//!             ▼
//!   [s0:c0][s0:c1]…[s0:cN-1][s1:c0]…      i32, big-endian, 4 bytes each
//! ```
//! One sample of every channel is stored contiguously before the next
//! sample (`[n_samp, n_chan]`, row-major).
//!
//! # Calibration
//! ```text
//! out[k, t] = raw[start + t, idx[k]] × cals[k]          (no projection)
//! out       = mult · raw[start..stop, :]ᵀ               (with projection)
//! ```
//! `mult` has shape `[idx.len(), n_chan]` and already contains the
//! calibration; it replaces the per-channel scalar.
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use ndarray::{s, Array2, ArrayViewMut2};

use crate::config::ReaderConfig;
use crate::error::{ItabError, Result};
use crate::fiff::info::MeasInfo;

use super::header::VendorHeaderRecord;
use super::info::{assemble_meas_info, AssemblyLog};

/// Bytes per stored sample value.
pub const BYTES_PER_SAMPLE: usize = 4;

/// Clamp `stop` to `n_samp` and reject empty ranges.
///
/// ```
/// use itab::itab::raw::clamp_range;
/// assert_eq!(clamp_range(10, None, 100).unwrap(), (10, 100));
/// assert_eq!(clamp_range(10, Some(500), 100).unwrap(), (10, 100));
/// assert!(clamp_range(100, None, 100).is_err());
/// ```
pub fn clamp_range(start: usize, stop: Option<usize>, n_samp: usize) -> Result<(usize, usize)> {
    let stop = stop.map_or(n_samp, |s| s.min(n_samp));
    if start >= stop {
        return Err(ItabError::EmptyRange { start, stop });
    }
    Ok((start, stop))
}

fn check_picks(idx: &[usize], n_chan: usize) -> Result<()> {
    match idx.iter().find(|&&i| i >= n_chan) {
        Some(&index) => Err(ItabError::ChannelIndex { index, n_chan }),
        None => Ok(()),
    }
}

fn check_shape(what: &'static str, expected: (usize, usize), got: (usize, usize)) -> Result<()> {
    if expected != got {
        return Err(ItabError::ShapeMismatch { what, expected, got });
    }
    Ok(())
}

/// Byte length of `n_samp` samples of `n_chan` channels.
///
/// Header sample/channel counts are untrusted, so the product is checked
/// and capped at the largest allocatable buffer.
pub fn segment_bytes(n_samp: usize, n_chan: usize) -> Result<usize> {
    n_samp
        .checked_mul(n_chan)
        .and_then(|n| n.checked_mul(BYTES_PER_SAMPLE))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or_else(|| {
            ItabError::InconsistentMetadata(format!(
                "{n_samp} samples × {n_chan} channels exceed the addressable size"
            ))
        })
}

/// Read `[start, stop)` of every channel as raw integers, shape `[n_chan, n]`.
fn read_block<R: Read + Seek>(
    reader: &mut R,
    start_data: u64,
    n_chan: usize,
    start: usize,
    n_samp: usize,
) -> Result<Array2<f64>> {
    let len = segment_bytes(n_samp, n_chan)?;
    let offset = segment_bytes(start, n_chan)
        .ok()
        .and_then(|skip| start_data.checked_add(skip as u64))
        .ok_or_else(|| {
            ItabError::InconsistentMetadata(format!(
                "sample {start} lies beyond any file offset"
            ))
        })?;
    reader.seek(SeekFrom::Start(offset))?;

    let mut bytes = vec![0u8; len];
    reader.read_exact(&mut bytes)?;

    let mut block = Array2::<f64>::zeros((n_chan, n_samp));
    for (i, b) in bytes.chunks_exact(BYTES_PER_SAMPLE).enumerate() {
        let raw = i32::from_be_bytes([b[0], b[1], b[2], b[3]]);
        block[[i % n_chan, i / n_chan]] = f64::from(raw);
    }
    Ok(block)
}

/// Read a calibrated `[idx.len(), stop - start]` segment into `out`.
///
/// `stop = None` (or anything past the end) reads to the end of the
/// recording.  `cals` is already sub-indexed (`cals[k]` belongs to
/// `idx[k]`) and is ignored when `mult` is given.
///
/// Returns the number of samples written.
#[allow(clippy::too_many_arguments)]
pub fn read_segment_into<R: Read + Seek>(
    reader: &mut R,
    info:   &MeasInfo,
    idx:    &[usize],
    start:  usize,
    stop:   Option<usize>,
    cals:   &[f64],
    mult:   Option<&Array2<f64>>,
    mut out: ArrayViewMut2<f64>,
) -> Result<usize> {
    let (start, stop) = clamp_range(start, stop, info.n_samp)?;
    let n_samp = stop - start;
    let n_chan = info.n_chan;

    check_picks(idx, n_chan)?;
    check_shape("output buffer", (idx.len(), n_samp), out.dim())?;
    match mult {
        Some(m) => check_shape("projection matrix", (idx.len(), n_chan), m.dim())?,
        None => check_shape("calibration vector", (idx.len(), 1), (cals.len(), 1))?,
    }

    let block = read_block(reader, info.start_data, n_chan, start, n_samp)?;

    match mult {
        Some(m) => out.assign(&m.dot(&block)),
        None => {
            for (k, (&ch, &cal)) in idx.iter().zip(cals).enumerate() {
                out.row_mut(k)
                    .assign(&block.row(ch).mapv(|v| v * cal));
            }
        }
    }
    Ok(n_samp)
}

/// Open `path`, read one calibrated segment and close the file again.
///
/// See [`read_segment_into`] for the meaning of the arguments.
pub fn read_segment(
    path:  &Path,
    info:  &MeasInfo,
    idx:   &[usize],
    start: usize,
    stop:  Option<usize>,
    cals:  &[f64],
    mult:  Option<&Array2<f64>>,
) -> Result<Array2<f64>> {
    let (start, stop) = clamp_range(start, stop, info.n_samp)?;
    // f64 output: two stored-sample widths per value
    segment_bytes(stop - start, info.n_chan.max(idx.len()).saturating_mul(2))?;
    let mut out = Array2::<f64>::zeros((idx.len(), stop - start));
    let mut reader = BufReader::new(File::open(path)?);
    read_segment_into(&mut reader, info, idx, start, Some(stop), cals, mult, out.view_mut())?;
    Ok(out)
}

// ── RawItab ──────────────────────────────────────────────────────────────

/// An opened ITAB recording: canonical info plus the `.raw` sample file.
#[derive(Debug, Clone)]
pub struct RawItab {
    pub info:            MeasInfo,
    /// Always 0: one continuous acquisition per file.
    pub first_samp:      u64,
    /// Last sample index (inclusive).
    pub last_samp:       u64,
    /// Recording length in seconds (`n_samp / sfreq`).
    pub buffer_size_sec: f64,
    pub path:            PathBuf,
    data:                Option<Array2<f64>>,
}

impl RawItab {
    /// Build the measurement info from an already-decoded header and attach
    /// the raw sample file at `path`.
    pub fn open<P: AsRef<Path>>(
        path: P,
        mhd:  &VendorHeaderRecord,
        cfg:  &ReaderConfig,
        log:  &dyn AssemblyLog,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let info = assemble_meas_info(mhd, cfg, log)
            .with_context(|| format!("measurement info for {}", path.display()))?;
        if info.n_samp == 0 {
            bail!("{}: header declares no samples", path.display());
        }

        let expected = segment_bytes(info.n_samp, info.n_chan)
            .ok()
            .and_then(|n| info.start_data.checked_add(n as u64));
        let Some(expected) = expected else {
            bail!(
                "{}: header declares {} samples × {} channels, too large to address",
                path.display(),
                info.n_samp,
                info.n_chan
            );
        };

        let meta = std::fs::metadata(path)
            .with_context(|| format!("stat {}", path.display()))?;
        if meta.len() < expected {
            log::warn!(
                "{}: file is {} bytes, header implies {}; trailing reads will fail",
                path.display(),
                meta.len(),
                expected
            );
        }

        let buffer_size_sec = info.n_samp as f64 / info.sfreq;
        log::debug!("{}: {:.3} s of data", path.display(), buffer_size_sec);

        let mut raw = RawItab {
            first_samp: 0,
            last_samp: info.n_samp as u64 - 1,
            buffer_size_sec,
            path: path.to_path_buf(),
            info,
            data: None,
        };
        if cfg.preload {
            raw.data = Some(raw.read_all_data()?);
        }
        Ok(raw)
    }

    /// Total number of time points.
    #[inline]
    pub fn n_times(&self) -> usize {
        (self.last_samp - self.first_samp + 1) as usize
    }

    /// Total duration in seconds.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.n_times() as f64 / self.info.sfreq
    }

    pub fn is_preloaded(&self) -> bool {
        self.data.is_some()
    }

    /// The preloaded `[n_chan, n_times]` data, if any.
    pub fn data(&self) -> Option<&Array2<f64>> {
        self.data.as_ref()
    }

    /// Calibrated `[idx.len(), stop - start]` segment using the channel
    /// calibrations from `info`.
    pub fn read_segment(
        &self,
        idx:   &[usize],
        start: usize,
        stop:  Option<usize>,
    ) -> anyhow::Result<Array2<f64>> {
        if let Some(data) = &self.data {
            let (start, stop) = clamp_range(start, stop, self.info.n_samp)?;
            check_picks(idx, self.info.n_chan)?;
            let mut out = Array2::<f64>::zeros((idx.len(), stop - start));
            for (k, &ch) in idx.iter().enumerate() {
                out.row_mut(k).assign(&data.slice(s![ch, start..stop]));
            }
            return Ok(out);
        }

        let all_cals = self.info.cals();
        let cals: Vec<f64> = idx
            .iter()
            .map(|&i| all_cals.get(i).copied().unwrap_or(1.0))
            .collect();
        let out = read_segment(&self.path, &self.info, idx, start, stop, &cals, None)
            .with_context(|| {
                format!("read samples [{start}, {stop:?}) from {}", self.path.display())
            })?;
        Ok(out)
    }

    /// Read **all** channels and samples, calibrated, `[n_chan, n_times]`.
    pub fn read_all_data(&self) -> anyhow::Result<Array2<f64>> {
        if let Some(data) = &self.data {
            return Ok(data.clone());
        }
        let idx: Vec<usize> = (0..self.info.n_chan).collect();
        self.read_segment(&idx, 0, None)
    }

    /// Half-open time slice `[start, end)` of all channels.
    pub fn read_slice(&self, start: usize, end: usize) -> anyhow::Result<Array2<f64>> {
        let idx: Vec<usize> = (0..self.info.n_chan).collect();
        self.read_segment(&idx, start, Some(end))
    }
}
