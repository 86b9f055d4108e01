//! Semicolon-separated points files.
//!
//! ```text
//! Cell id;x;y;z[;<data name>]
//! <id>;<x>;<y>;<z>[;<data>]
//! ```
//!
//! Ids read back from a file are shifted by [`POINTS_ID_OFFSET`] relative to
//! the ids that were written. Existing files depend on this, so the shift is
//! kept.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::consts::{POINTS_DELIMITER, POINTS_HEADER, POINTS_ID_OFFSET};
use crate::error::{NucleiError, Result};
use crate::points::{PointMap, Position};

/// Optional per-point data column.
#[derive(Clone, Debug, PartialEq)]
pub struct PointData {
    pub name: String,
    pub values: PointMap<f64>,
}

/// Contents of a points file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointsFile {
    pub positions: PointMap<Position>,
    pub data: Option<PointData>,
}

/// Write positions, and optionally one data column, to `path`.
///
/// Every position must have a data value when `data` is given.
pub fn write_points(
    path: &Path,
    positions: &PointMap<Position>,
    data: Option<(&PointMap<f64>, &str)>,
) -> Result<()> {
    if let Some((values, _)) = data {
        if let Some(id) = positions.ids().find(|id| !values.contains(*id)) {
            return Err(NucleiError::InvalidParameters(format!(
                "no data value for point {id}"
            )));
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "{POINTS_HEADER}")?;
    if let Some((_, name)) = data {
        write!(out, "{POINTS_DELIMITER}{name}")?;
    }
    writeln!(out)?;

    let d = POINTS_DELIMITER;
    for (id, [x, y, z]) in positions.iter() {
        write!(out, "{id}{d}{x}{d}{y}{d}{z}")?;
        if let Some(value) = data.and_then(|(values, _)| values.get(id)) {
            write!(out, "{d}{value}")?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Read a points file. A missing file is `Ok(None)`.
pub fn read_points(path: &Path) -> Result<Option<PointsFile>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    parse_points(BufReader::new(file)).map(Some)
}

/// Parse points from any buffered reader.
pub fn parse_points(reader: impl BufRead) -> Result<PointsFile> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(NucleiError::MalformedPoints {
                line: 1,
                reason: "missing header".into(),
            })
        }
    };
    let columns: Vec<&str> = header.trim_end_matches('\r').split(POINTS_DELIMITER).collect();
    if columns.len() < 4 {
        return Err(NucleiError::MalformedPoints {
            line: 1,
            reason: format!("expected at least 4 columns, got {}", columns.len()),
        });
    }
    let data_name = columns.get(4).map(|s| s.to_string());

    let mut positions = PointMap::new();
    let mut data = PointMap::new();

    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let fields = line
            .split(POINTS_DELIMITER)
            .map(|f| {
                f.trim().parse::<f64>().map_err(|_| NucleiError::MalformedPoints {
                    line: line_no,
                    reason: format!("non-numeric field {f:?}"),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if fields.len() != columns.len() {
            return Err(NucleiError::MalformedPoints {
                line: line_no,
                reason: format!("expected {} fields, got {}", columns.len(), fields.len()),
            });
        }
        if !fields[0].is_finite() || fields[0] < 0.0 {
            return Err(NucleiError::MalformedPoints {
                line: line_no,
                reason: format!("invalid point id {}", fields[0]),
            });
        }

        let id = fields[0].trunc() as u64 + POINTS_ID_OFFSET;
        positions.insert(id, [fields[1], fields[2], fields[3]]);
        if data_name.is_some() {
            data.insert(id, fields[4]);
        }
    }

    Ok(PointsFile {
        positions,
        data: data_name.map(|name| PointData { name, values: data }),
    })
}
