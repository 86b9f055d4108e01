mod common;

use ndarray::Array3;

use nuclei_core::error::NucleiError;
use nuclei_core::points::PointMap;
use nuclei_core::ratio::compute_channel_ratios;
use nuclei_core::volume::Volume;

use common::Lcg;

fn volume(data: Array3<f32>) -> Volume {
    Volume::new(data, [0.5, 0.5, 1.0]).unwrap()
}

#[test]
fn test_ratios_bounded_for_non_negative_channels() {
    let mut rng = Lcg::new(19);
    let nuclei = volume(Array3::from_shape_simple_fn((8, 8, 6), || rng.next_f32() * 50.0));
    let signal = volume(Array3::from_shape_simple_fn((8, 8, 6), || rng.next_f32() * 200.0));

    let positions: PointMap<[f64; 3]> = (0..20u64)
        .map(|i| {
            let f = i as f64;
            (i * 3, [f * 0.17 % 4.0, f * 0.23 % 4.0, f * 0.31 % 6.0])
        })
        .collect();

    let ratios = compute_channel_ratios(&nuclei, &signal, &positions, 1.0).unwrap();
    assert_eq!(ratios.len(), positions.len());
    for (id, &r) in ratios.iter() {
        assert!(positions.contains(id));
        assert!((0.0..=1.0).contains(&r), "ratio {r} out of range");
    }
}

#[test]
fn test_zero_channels_give_one() {
    let nuclei = volume(Array3::zeros((4, 4, 4)));
    let signal = volume(Array3::zeros((4, 4, 4)));
    let positions: PointMap<[f64; 3]> = [(5, [0.0, 0.0, 0.0]), (9, [1.5, 1.5, 3.0])]
        .into_iter()
        .collect();

    let ratios = compute_channel_ratios(&nuclei, &signal, &positions, 3.0).unwrap();
    assert_eq!(ratios.get(5), Some(&1.0));
    assert_eq!(ratios.get(9), Some(&1.0));
}

#[test]
fn test_ratio_of_scaled_channel() {
    let nuclei = volume(Array3::from_elem((5, 5, 5), 400.0));
    let signal = volume(Array3::from_elem((5, 5, 5), 100.0));
    let positions: PointMap<[f64; 3]> = [(0, [1.0, 1.0, 2.0])].into_iter().collect();

    let ratios = compute_channel_ratios(&nuclei, &signal, &positions, 3.0).unwrap();
    let r = *ratios.get(0).unwrap();
    assert!((r - 100.001 / 400.001).abs() < 1e-5, "ratio {r}");
}

#[test]
fn test_brighter_signal_is_capped() {
    let nuclei = volume(Array3::from_elem((3, 3, 3), 10.0));
    let signal = volume(Array3::from_elem((3, 3, 3), 1000.0));
    let positions: PointMap<[f64; 3]> = [(0, [0.5, 0.5, 1.0])].into_iter().collect();

    let ratios = compute_channel_ratios(&nuclei, &signal, &positions, 0.0).unwrap();
    assert_eq!(ratios.get(0), Some(&1.0));
}

#[test]
fn test_samples_truncated_voxel() {
    // No smoothing: the ratio reads exactly the voxel at trunc(position / resolution).
    let nuclei = volume(Array3::from_elem((4, 4, 4), 10.0));
    let mut signal_data = Array3::<f32>::zeros((4, 4, 4));
    signal_data[[1, 2, 3]] = 5.0;
    let signal = volume(signal_data);
    let positions: PointMap<[f64; 3]> = [(0, [0.99, 1.2, 3.7]), (1, [1.0, 1.0, 3.0])]
        .into_iter()
        .collect();

    let ratios = compute_channel_ratios(&nuclei, &signal, &positions, 0.0).unwrap();
    assert!((ratios.get(0).unwrap() - 5.001 / 10.001).abs() < 1e-9);
    assert!((ratios.get(1).unwrap() - 0.001 / 10.001).abs() < 1e-9);
}

#[test]
fn test_shape_mismatch_rejected() {
    let nuclei = volume(Array3::zeros((4, 4, 4)));
    let signal = volume(Array3::zeros((4, 4, 5)));
    let positions: PointMap<[f64; 3]> = [(0, [0.0, 0.0, 0.0])].into_iter().collect();
    let err = compute_channel_ratios(&nuclei, &signal, &positions, 3.0).unwrap_err();
    assert!(matches!(err, NucleiError::DimensionMismatch { .. }));
}

#[test]
fn test_no_points_no_ratios() {
    let nuclei = volume(Array3::zeros((2, 2, 2)));
    let signal = volume(Array3::zeros((2, 2, 2)));
    let ratios = compute_channel_ratios(&nuclei, &signal, &PointMap::new(), 3.0).unwrap();
    assert!(ratios.is_empty());
}
