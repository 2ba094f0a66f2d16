//! Decoded ITAB `.mhd` header record.
//!
//! These structs are the output of the upstream `.mhd` decoder; this crate
//! only consumes them.  Field names follow the vendor header so the mapping
//! to the on-disk record stays obvious.

/// Vendor channel type.
///
/// `from_code` / `code` convert from and to the integer stored in the
/// `.mhd` channel record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorChannelType {
    Magnetic,
    Electric,
    ReferenceEeg,
    ReferenceMagnetic,
    ReferenceAuxiliary,
    ReferenceParameter,
    ReferenceDigital,
    ReferenceFlag,
    Unclassified,
}

impl VendorChannelType {
    /// Map a raw type code; codes outside the known set become `Unclassified`.
    ///
    /// ```
    /// use itab::VendorChannelType;
    /// assert_eq!(VendorChannelType::from_code(1), VendorChannelType::Magnetic);
    /// assert_eq!(VendorChannelType::from_code(99), VendorChannelType::Unclassified);
    /// ```
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Magnetic,
            2 => Self::Electric,
            4 => Self::ReferenceEeg,
            8 => Self::ReferenceMagnetic,
            16 => Self::ReferenceAuxiliary,
            32 => Self::ReferenceParameter,
            64 => Self::ReferenceDigital,
            128 => Self::ReferenceFlag,
            _ => Self::Unclassified,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Unclassified => 0,
            Self::Magnetic => 1,
            Self::Electric => 2,
            Self::ReferenceEeg => 4,
            Self::ReferenceMagnetic => 8,
            Self::ReferenceAuxiliary => 16,
            Self::ReferenceParameter => 32,
            Self::ReferenceDigital => 64,
            Self::ReferenceFlag => 128,
        }
    }

    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Self::ReferenceEeg
                | Self::ReferenceMagnetic
                | Self::ReferenceAuxiliary
                | Self::ReferenceParameter
                | Self::ReferenceDigital
                | Self::ReferenceFlag
        )
    }
}

/// Sensor position record of a magnetic channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorPosition {
    /// Position in millimetres.
    pub posx: f64,
    pub posy: f64,
    pub posz: f64,
    /// Orientation direction cosines.
    pub orix: f64,
    pub oriy: f64,
    pub oriz: f64,
}

/// One channel entry of the vendor header.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorChannelDescriptor {
    pub label:  String,
    pub kind:   VendorChannelType,
    pub number: i32,
    /// Amplifier units per bit.
    pub amvbit: f64,
    /// Calibration unit; `amvbit / calib` is the channel scale.
    pub calib:  f64,
    /// Free-text unit, e.g. `"fT"`, `"pT"`, `"mV"`.
    pub unit:   String,
    /// Nonzero marks the channel as bad.
    pub flag:   i32,
    /// Only populated for magnetic channels.
    pub pos:    Option<SensorPosition>,
}

/// Digitized marker position in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkerPoint {
    pub posx: f64,
    pub posy: f64,
    pub posz: f64,
}

/// Trigger entry of the header's sample list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleEvent {
    pub start:   i64,
    pub kind:    i32,
    pub quality: i32,
}

/// The decoded header record.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorHeaderRecord {
    /// Sampling frequency in Hz.
    pub smpfq:      f64,
    pub date:       String,
    pub time:       String,
    pub notes:      String,
    pub last_name:  String,
    pub first_name: String,
    pub sex:        i32,
    pub nchan:      usize,
    pub ch:         Vec<VendorChannelDescriptor>,
    /// Hardware low-frequency cutoff; 0 means not recorded.
    pub hw_low_fr:  f64,
    /// Hardware high-frequency cutoff; 0 means not recorded.
    pub hw_hig_fr:  f64,
    /// Total number of samples in the raw file.
    pub ntpdata:    usize,
    /// Byte offset of the first sample in the raw file.
    pub start_data: u64,
    pub marker:     Vec<MarkerPoint>,
    pub sample:     Vec<SampleEvent>,
}
