use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use super::types::RectangleRecord;
use crate::error::RectoError;
use crate::geometry::Rect;

/// A relation report needs at least one pair.
const MIN_RECTANGLES: usize = 2;

/// A set of rectangles keyed by name.
///
/// `BTreeMap` keeps the names in lexicographic order, which fixes the pair
/// enumeration order of the relation reports.
pub type WorkingSet = BTreeMap<String, Rect>;

/// Load a working set from a JSON array of rectangle records.
///
/// Fails when the JSON cannot be decoded, fewer than two rectangles are
/// defined, or two records share a name.
pub fn load_rectangles(reader: impl Read) -> Result<WorkingSet> {
    let records: Vec<RectangleRecord> =
        serde_json::from_reader(reader).map_err(RectoError::ParseJson)?;

    if records.len() < MIN_RECTANGLES {
        return Err(RectoError::NotEnoughRectangles {
            found: records.len(),
        }
        .into());
    }

    let mut set = WorkingSet::new();
    for record in records {
        let rect = Rect::new(&record.name, record.p1, record.p2);
        if let Some(previous) = set.insert(record.name, rect) {
            return Err(RectoError::DuplicateName(previous.name).into());
        }
    }

    debug!("Loaded {} rectangles", set.len());
    Ok(set)
}

/// Load a working set from a JSON file on disk.
pub fn load_rectangles_from_file(path: &Path) -> Result<WorkingSet> {
    let file = File::open(path).map_err(|source| RectoError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    load_rectangles(BufReader::new(file))
        .with_context(|| format!("failed to load rectangles from {}", path.display()))
}
