use serde::{Deserialize, Serialize};

use super::Rect;

/// An integer coordinate on the plane.
///
/// Plain value type; two points are equal iff both coordinates match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this point lies in `rect`'s open interior.
    ///
    /// A point exactly on an edge or corner of `rect` is not interior.
    pub fn strictly_inside(&self, rect: &Rect) -> bool {
        self.x > rect.min.x && self.x < rect.max.x && self.y > rect.min.y && self.y < rect.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_inside() {
        let j = Rect::new("J", Point::new(-4, -5), Point::new(7, 6));
        let k = Rect::new("K", Point::new(-5, 5), Point::new(-3, 7));

        // On J's left edge
        assert!(!Point::new(-4, 5).strictly_inside(&j));
        assert!(Point::new(-3, 5).strictly_inside(&j));
        assert!(Point::new(-4, 6).strictly_inside(&k));
        // On K's bottom edge
        assert!(!Point::new(-3, 5).strictly_inside(&k));
    }

    #[test]
    fn test_corner_is_not_interior() {
        let r = Rect::new("R", Point::new(0, 0), Point::new(10, 10));

        assert!(!Point::new(0, 0).strictly_inside(&r));
        assert!(!Point::new(10, 10).strictly_inside(&r));
        assert!(!Point::new(0, 10).strictly_inside(&r));
        assert!(Point::new(1, 1).strictly_inside(&r));
    }

    #[test]
    fn test_degenerate_rect_has_no_interior() {
        let line = Rect::new("L", Point::new(0, 0), Point::new(0, 10));

        assert!(!Point::new(0, 5).strictly_inside(&line));
    }
}
