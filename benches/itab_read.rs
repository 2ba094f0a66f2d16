use std::hint::black_box;
use std::io::Write;

use criterion::{criterion_group, criterion_main, Criterion};
use itab::{
    assemble_meas_info, MeasInfo, NullLog, ReaderConfig, SensorPosition, VendorChannelDescriptor,
    VendorChannelType, VendorHeaderRecord,
};

const N_CHAN: usize = 64;
const N_SAMP: usize = 10_240;

fn synthetic_header() -> VendorHeaderRecord {
    let ch: Vec<_> = (0..N_CHAN)
        .map(|i| VendorChannelDescriptor {
            label:  format!("MAG_{:03}", i + 1),
            kind:   VendorChannelType::Magnetic,
            number: i as i32 + 1,
            amvbit: 1.0,
            calib:  1.0,
            unit:   "fT".into(),
            flag:   0,
            pos:    Some(SensorPosition { posz: 100.0, oriz: 1.0, ..SensorPosition::default() }),
        })
        .collect();
    VendorHeaderRecord {
        smpfq: 1024.0,
        date: "07/03/2016".into(),
        time: "10:00".into(),
        notes: String::new(),
        last_name: String::new(),
        first_name: String::new(),
        sex: 0,
        nchan: N_CHAN,
        ch,
        hw_low_fr: 0.0,
        hw_hig_fr: 0.0,
        ntpdata: N_SAMP,
        start_data: 0,
        marker: vec![],
        sample: vec![],
    }
}

fn write_file(dir: &tempfile::TempDir, info: &MeasInfo) -> std::path::PathBuf {
    let path = dir.path().join("bench.raw");
    let mut bytes = Vec::with_capacity(info.n_samp * info.n_chan * 4);
    for i in 0..info.n_samp * info.n_chan {
        bytes.extend_from_slice(&(i as i32).to_be_bytes());
    }
    std::fs::File::create(&path).unwrap().write_all(&bytes).unwrap();
    path
}

fn bench_assemble(c: &mut Criterion) {
    let mhd = synthetic_header();
    let cfg = ReaderConfig::default();
    c.bench_function("assemble_meas_info (64 ch)", |b| {
        b.iter(|| {
            let info = assemble_meas_info(black_box(&mhd), &cfg, &NullLog).unwrap();
            black_box(info.n_chan)
        })
    });
}

fn bench_read_segment(c: &mut Criterion) {
    let info = assemble_meas_info(&synthetic_header(), &ReaderConfig::default(), &NullLog).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, &info);
    let cals = info.cals();
    let all: Vec<usize> = (0..N_CHAN).collect();
    let half: Vec<usize> = (0..N_CHAN).step_by(2).collect();
    let half_cals: Vec<f64> = half.iter().map(|&i| cals[i]).collect();

    c.bench_function("read_segment [64×10240] all", |b| {
        b.iter(|| {
            let d = itab::read_segment(&path, &info, black_box(&all), 0, None, &cals, None)
                .unwrap();
            black_box(d[[0, 0]])
        })
    });
    c.bench_function("read_segment 1 s, 32 channels", |b| {
        b.iter(|| {
            let picks = black_box(&half);
            let d = itab::read_segment(&path, &info, picks, 2048, Some(3072), &half_cals, None)
                .unwrap();
            black_box(d[[0, 0]])
        })
    });
}

criterion_group!(benches, bench_assemble, bench_read_segment);
criterion_main!(benches);
