//! FIFF codes used by the canonical channel model.
//!
//! Names mirror [`mne/_fiff/constants.py`][mne-src] so the normalized ITAB
//! metadata can be cross-referenced with MNE's `Info` line-by-line.  Only the
//! codes an ITAB recording can produce are listed.
//!
//! [mne-src]: https://github.com/mne-tools/mne-python/blob/main/mne/_fiff/constants.py

// ── Channel kind codes (`ChannelInfo::kind`) ──────────────────────────────

/// MEG magnetometer or gradiometer channel.
pub const FIFFV_MEG_CH:     i32 = 1;
/// EEG scalp-potential channel.
pub const FIFFV_EEG_CH:     i32 = 2;
/// Stimulus / trigger channel.
pub const FIFFV_STIM_CH:    i32 = 3;
/// Generic biological channel (ITAB electric and reference channels).
pub const FIFFV_BIO_CH:     i32 = 102;
/// MEG reference (compensation) channel.
pub const FIFFV_REF_MEG_CH: i32 = 301;
/// Miscellaneous auxiliary channel.
pub const FIFFV_MISC_CH:    i32 = 502;

// ── Coil types (`ChannelInfo::coil_type`) ─────────────────────────────────

/// No coil (non-MEG channel).
pub const FIFFV_COIL_NONE:               i32 = 0;
/// Idealized point magnetometer.
pub const FIFFV_COIL_POINT_MAGNETOMETER: i32 = 2000;

// ── Units (`ChannelInfo::unit`) ───────────────────────────────────────────

/// Unitless.
pub const FIFF_UNIT_NONE: i32 = -1;
/// Volt.
pub const FIFF_UNIT_V:    i32 = 107;
/// Tesla.
pub const FIFF_UNIT_T:    i32 = 112;

// ── Unit multipliers (`ChannelInfo::unit_mul`, powers of ten) ────────────

/// No prefix (10⁰); also used when the vendor unit string is not recognized.
pub const FIFF_UNITM_NONE: i32 = 0;
/// milli (10⁻³).
pub const FIFF_UNITM_M:    i32 = -3;
/// micro (10⁻⁶).
pub const FIFF_UNITM_MU:   i32 = -6;
/// pico (10⁻¹²).
pub const FIFF_UNITM_P:    i32 = -12;
/// femto (10⁻¹⁵).
pub const FIFF_UNITM_F:    i32 = -15;

// ── Coordinate frames ─────────────────────────────────────────────────────

/// Frame not set.
pub const FIFFV_COORD_UNKNOWN: i32 = 0;
/// Head frame defined by the cardinal fiducials.
pub const FIFFV_COORD_HEAD:    i32 = 4;

// ── Digitization point kinds (`DigPoint::kind`) ──────────────────────────

/// Nasion / LPA / RPA.
pub const FIFFV_POINT_CARDINAL: i32 = 1;
/// Head-position-indicator coil.
pub const FIFFV_POINT_HPI:      i32 = 2;
/// Additional head-surface point.
pub const FIFFV_POINT_EXTRA:    i32 = 4;

// ── Cardinal point identities (`DigPoint::ident` for cardinal points) ─────

/// Left pre-auricular point.
pub const FIFFV_POINT_LPA:    i32 = 1;
/// Nasion.
pub const FIFFV_POINT_NASION: i32 = 2;
/// Right pre-auricular point.
pub const FIFFV_POINT_RPA:    i32 = 3;

// ── Helpers ───────────────────────────────────────────────────────────────

/// Human-readable name of a channel kind code, as printed by MNE.
///
/// ```
/// use itab::fiff::constants::{channel_kind_name, FIFFV_MEG_CH, FIFFV_BIO_CH};
/// assert_eq!(channel_kind_name(FIFFV_MEG_CH), "mag");
/// assert_eq!(channel_kind_name(FIFFV_BIO_CH), "bio");
/// assert_eq!(channel_kind_name(-7),           "unknown");
/// ```
pub fn channel_kind_name(kind: i32) -> &'static str {
    match kind {
        FIFFV_MEG_CH     => "mag",
        FIFFV_EEG_CH     => "eeg",
        FIFFV_STIM_CH    => "stim",
        FIFFV_BIO_CH     => "bio",
        FIFFV_REF_MEG_CH => "ref_meg",
        FIFFV_MISC_CH    => "misc",
        _                => "unknown",
    }
}
