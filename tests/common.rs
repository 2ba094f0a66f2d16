//! Shared helpers: synthetic ITAB headers and `.raw` files.
use itab::{
    MarkerPoint, SampleEvent, SensorPosition, VendorChannelDescriptor, VendorChannelType,
    VendorHeaderRecord,
};
use std::io::Write;
use std::path::Path;

#[allow(unused)]
pub fn channel(label: &str, kind: VendorChannelType) -> VendorChannelDescriptor {
    VendorChannelDescriptor {
        label:  label.to_string(),
        kind,
        number: 1,
        amvbit: 1.0,
        calib:  1.0,
        unit:   String::new(),
        flag:   0,
        pos:    None,
    }
}

#[allow(unused)]
pub fn magnetometer(label: &str, number: i32) -> VendorChannelDescriptor {
    VendorChannelDescriptor {
        number,
        amvbit: 100.0,
        calib:  5.0,
        unit:   "fT".into(),
        pos:    Some(SensorPosition {
            posx: 12.0, posy: -34.0, posz: 56.0,
            orix: 0.0, oriy: 0.6, oriz: 0.8,
        }),
        ..channel(label, VendorChannelType::Magnetic)
    }
}

/// `n_mag` magnetometers followed by one EEG and one reference channel.
#[allow(unused)]
pub fn header(n_mag: usize, ntpdata: usize, start_data: u64) -> VendorHeaderRecord {
    let mut ch: Vec<_> = (0..n_mag)
        .map(|i| magnetometer(&format!("MAG_{:03}", i + 1), i as i32 + 1))
        .collect();
    ch.push(VendorChannelDescriptor {
        number: 200,
        amvbit: 3.0,
        calib:  2.0,
        unit:   "mV".into(),
        ..channel("EEG_001", VendorChannelType::Electric)
    });
    ch.push(VendorChannelDescriptor {
        unit: "mV".into(),
        ..channel("REF_001", VendorChannelType::ReferenceEeg)
    });
    VendorHeaderRecord {
        smpfq:      1024.0,
        date:       "07/03/2016".into(),
        time:       "10:32:05".into(),
        notes:      "resting state".into(),
        last_name:  "Doe".into(),
        first_name: "Jane".into(),
        sex:        2,
        nchan:      ch.len(),
        ch,
        hw_low_fr:  0.16,
        hw_hig_fr:  0.0,
        ntpdata,
        start_data,
        marker:     (0..5)
            .map(|i| MarkerPoint { posx: 10.0 * i as f64, posy: 0.0, posz: 1.0 })
            .collect(),
        sample:     vec![
            SampleEvent { start: 100, kind: 1, quality: 0 },
            SampleEvent { start: 900, kind: 4, quality: 1 },
        ],
    }
}

/// Write `header_len` filler bytes then `[n_samp, n_chan]` big-endian i32
/// values produced by `value(t, c)`.
#[allow(unused)]
pub fn write_raw(
    path: &Path,
    header_len: usize,
    n_chan: usize,
    n_samp: usize,
    value: impl Fn(usize, usize) -> i32,
) {
    let mut bytes = vec![0u8; header_len];
    bytes.reserve(n_chan * n_samp * 4);
    for t in 0..n_samp {
        for c in 0..n_chan {
            bytes.extend_from_slice(&value(t, c).to_be_bytes());
        }
    }
    let mut f = std::fs::File::create(path).unwrap();
    f.write_all(&bytes).unwrap();
}
