//! Pairwise relation reports over a working set of rectangles.

use rayon::prelude::*;

use crate::geometry::{Point, Rect};
use crate::input::WorkingSet;

/// A rectangle the subject intersects, with the boundary crossing points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intersection {
    pub other: String,
    pub points: Vec<Point>,
}

/// Relations of one rectangle against every other rectangle in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectReport {
    pub name: String,
    pub intersects: Vec<Intersection>,
    pub contains: Vec<String>,
    pub adjacent_to: Vec<String>,
}

/// Compute the relation report for every rectangle in the working set.
///
/// Reports come back in name order, and the partner lists inside each
/// report follow that same order, so the output is deterministic. Every
/// pair is an independent pure computation; the per-rectangle reports are
/// computed in parallel.
pub fn analyze(set: &WorkingSet) -> Vec<RectReport> {
    let rects: Vec<&Rect> = set.values().collect();

    rects
        .par_iter()
        .map(|rect| report_for(rect, &rects))
        .collect()
}

fn report_for(rect: &Rect, all: &[&Rect]) -> RectReport {
    let mut intersects = Vec::new();
    let mut contains = Vec::new();
    let mut adjacent_to = Vec::new();

    for other in all {
        if other.name == rect.name {
            continue;
        }

        if rect.intersects(other) {
            intersects.push(Intersection {
                other: other.name.clone(),
                points: rect.intersection_points(other),
            });
        }

        if rect.contains(other) {
            contains.push(other.name.clone());
        }

        if rect.is_adjacent(other) {
            adjacent_to.push(other.name.clone());
        }
    }

    RectReport {
        name: rect.name.clone(),
        intersects,
        contains,
        adjacent_to,
    }
}
