use nuclei_core::consts::POINTS_ID_OFFSET;
use nuclei_core::error::NucleiError;
use nuclei_core::io::{read_points, write_points};
use nuclei_core::points::PointMap;

fn sample_positions() -> PointMap<[f64; 3]> {
    [
        (0, [1.0, 2.5, 3.25]),
        (1, [0.1 + 0.2, 1e-7, 123456.789]),
        (4, [0.0, 0.0, 0.0]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_roundtrip_preserves_coordinates_and_shifts_ids() {
    let positions = sample_positions();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nuclei.csv");

    write_points(&path, &positions, None).unwrap();
    let read = read_points(&path).unwrap().expect("file exists");

    assert_eq!(read.positions.len(), positions.len());
    assert!(read.data.is_none());
    for (id, pos) in positions.iter() {
        let shifted = id + POINTS_ID_OFFSET;
        assert_eq!(shifted, id + 2);
        assert_eq!(read.positions.get(shifted), Some(pos));
    }
}

#[test]
fn test_roundtrip_with_data_column() {
    let positions = sample_positions();
    let ratios: PointMap<f64> = [(0, 0.5), (1, 1.0), (4, 0.0123)].into_iter().collect();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ratios.csv");

    write_points(&path, &positions, Some((&ratios, "ratio"))).unwrap();
    let read = read_points(&path).unwrap().unwrap();

    let data = read.data.expect("data column");
    assert_eq!(data.name, "ratio");
    assert_eq!(data.values.get(2), Some(&0.5));
    assert_eq!(data.values.get(3), Some(&1.0));
    assert_eq!(data.values.get(6), Some(&0.0123));
}

#[test]
fn test_written_layout() {
    let positions: PointMap<[f64; 3]> = [(3, [1.5, 2.0, 0.25])].into_iter().collect();
    let ratios: PointMap<f64> = [(3, 0.75)].into_iter().collect();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.csv");

    write_points(&path, &positions, Some((&ratios, "ratio"))).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Cell id;x;y;z;ratio\n3;1.5;2;0.25;0.75\n");

    write_points(&path, &positions, None).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Cell id;x;y;z\n3;1.5;2;0.25\n");
}

#[test]
fn test_missing_data_value_rejected() {
    let positions = sample_positions();
    let ratios: PointMap<f64> = [(0, 0.5)].into_iter().collect();
    let dir = tempfile::tempdir().unwrap();
    let err = write_points(&dir.path().join("x.csv"), &positions, Some((&ratios, "r"))).unwrap_err();
    assert!(matches!(err, NucleiError::InvalidParameters(_)));
}

#[test]
fn test_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let read = read_points(&dir.path().join("absent.csv")).unwrap();
    assert!(read.is_none());
}

#[test]
fn test_malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "Cell id;x;y;z\n0;1;2;3\n1;4;five;6\n").unwrap();
    let err = read_points(&path).unwrap_err();
    assert!(matches!(err, NucleiError::MalformedPoints { line: 3, .. }));
}

#[test]
fn test_empty_detection_set_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    write_points(&path, &PointMap::new(), None).unwrap();
    let read = read_points(&path).unwrap().unwrap();
    assert!(read.positions.is_empty());
}
