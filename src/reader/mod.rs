//! Problem file reader.
//!
//! Reads files of the form
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-9.100071078494038,-48.89301103772511) (-116.78442279683607,76.80147820713637)
//! 2 (73.38933871575719,-86.93443314676254) (-57.594533352956425,28.662926099543245)
//! ```
//!
//! into a [`LoadSet`]. The header line and blank lines are skipped.
//! Coordinates are rounded to integers as they are read. Loads may be listed
//! in any order, but their numbers must be unique and run from 1 to the
//! number of loads.

mod error;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::models::{Load, LoadId, LoadSet, Point};

pub use error::ReadError;

const HEADER_FIELD: &str = "loadNumber";

/// Reads a problem file from disk.
pub fn read_load_file(path: impl AsRef<Path>) -> Result<LoadSet, ReadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let loads = read_loads(BufReader::new(file))?;
    debug!(path = %path.display(), loads = loads.len(), "read problem file");
    Ok(loads)
}

/// Reads a problem from any buffered source.
///
/// # Examples
///
/// ```
/// use shift_dispatch::reader::read_loads;
///
/// let input = "loadNumber pickup dropoff\n2 (1.5,0.2) (3,4)\n1 (0,0) (-0.5,7.49)\n";
/// let loads = read_loads(input.as_bytes()).unwrap();
/// assert_eq!(loads.len(), 2);
/// assert_eq!(loads.load(1).unwrap().dropoff().x(), -1);
/// assert_eq!(loads.load(2).unwrap().pickup().x(), 2);
/// ```
pub fn read_loads<R: BufRead>(reader: R) -> Result<LoadSet, ReadError> {
    let mut loads = Vec::new();
    let mut seen: HashSet<LoadId> = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let Some(load) = parse_line(&line, number)? else {
            continue;
        };
        if !seen.insert(load.id()) {
            return Err(ReadError::DuplicateId {
                line: number,
                id: load.id(),
            });
        }
        loads.push(load);
    }

    loads.sort_by_key(Load::id);
    if let Some((expected, _)) = loads
        .iter()
        .enumerate()
        .map(|(k, load)| (k + 1, load.id()))
        .find(|(expected, id)| expected != id)
    {
        return Err(ReadError::MissingId { id: expected });
    }

    Ok(LoadSet::new(loads))
}

/// Parses a location of the form `(x,y)`, rounding both coordinates.
///
/// Returns `None` unless both values are finite numbers.
///
/// # Examples
///
/// ```
/// use shift_dispatch::models::Point;
/// use shift_dispatch::reader::parse_location;
///
/// assert_eq!(parse_location("(-9.1,-48.9)"), Some(Point::new(-9, -49)));
/// assert_eq!(parse_location("-9.1,-48.9"), None);
/// ```
pub fn parse_location(field: &str) -> Option<Point> {
    let inner = field.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::from_coordinates(x, y))
}

fn parse_line(line: &str, number: usize) -> Result<Option<Load>, ReadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [] => Ok(None),
        [first, ..] if *first == HEADER_FIELD => Ok(None),
        [id, pickup, dropoff] => {
            let id = parse_id(id, number)?;
            let pickup = location(pickup, number)?;
            let dropoff = location(dropoff, number)?;
            Ok(Some(Load::new(id, pickup, dropoff)))
        }
        _ => Err(ReadError::FieldCount {
            line: number,
            found: fields.len(),
        }),
    }
}

fn parse_id(field: &str, line: usize) -> Result<LoadId, ReadError> {
    match field.parse::<LoadId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ReadError::InvalidId {
            line,
            value: field.to_string(),
        }),
    }
}

fn location(field: &str, line: usize) -> Result<Point, ReadError> {
    parse_location(field).ok_or_else(|| ReadError::InvalidLocation {
        line,
        value: field.to_string(),
    })
}
