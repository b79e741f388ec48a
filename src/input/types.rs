use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One rectangle definition as it appears in the input JSON.
///
/// The corner points carry no ordering requirement; normalization into
/// min/max form happens when the working set is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleRecord {
    pub name: String,
    pub p1: Point,
    pub p2: Point,
}
