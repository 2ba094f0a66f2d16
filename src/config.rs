//! Reader configuration.
//!
//! [`ReaderConfig`] holds the few tunables of the ITAB reader.  All fields
//! have defaults; override individual ones with struct-update syntax.

/// How reference-category vendor channels (`REF_EEG`, `REF_MAG`, `REF_AUX`,
/// `REF_PARAM`, `REF_DIGIT`, `REF_FLAG`) are normalized.
///
/// Historical ITAB converters guarded the reference branch with a conjunction
/// of all six type codes, which can never hold, so reference channels came out
/// as unitless miscellaneous channels.  [`ReferencePolicy::AnyReference`]
/// treats any one reference code as a match instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Any reference type code selects the reference branch:
    /// kind = BIO, cal = 1.0, unit = V.
    #[default]
    AnyReference,
    /// Reproduce the historical output: the reference branch never fires and
    /// reference channels stay MISC / unitless.
    Literal,
}

/// Configuration for opening an ITAB recording.
///
/// ```
/// use itab::{ReaderConfig, ReferencePolicy};
///
/// let cfg = ReaderConfig {
///     reference_policy: ReferencePolicy::Literal,
///     ..ReaderConfig::default()
/// };
/// assert!(!cfg.preload);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Normalization of reference-category channels.
    ///
    /// Default: [`ReferencePolicy::AnyReference`].
    pub reference_policy: ReferencePolicy,

    /// Read the whole `[n_chan, n_samp]` recording into memory when the
    /// file is opened.  Later slices are served from memory.
    ///
    /// Default: `false`.
    pub preload: bool,
}
