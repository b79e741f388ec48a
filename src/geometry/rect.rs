use super::Point;

/// A named axis-aligned rectangle on the integer plane.
///
/// Built from two arbitrary corner points, normalized so that
/// `min.x <= max.x` and `min.y <= max.y`. A rectangle with zero width or
/// height is degenerate (a segment or a point) but still a valid value;
/// every predicate stays well-defined for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rect {
    /// Label for reporting; uniqueness is the working set's concern.
    pub name: String,
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Build a rectangle from two opposite corners, in any order.
    pub fn new(name: impl Into<String>, p1: Point, p2: Point) -> Self {
        Self {
            name: name.into(),
            min: Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max: Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Check if this rectangle's vertical span covers `other`'s.
    pub fn height_contains(&self, other: &Rect) -> bool {
        self.min.y <= other.min.y && self.max.y >= other.max.y
    }

    /// Check if this rectangle's horizontal span covers `other`'s.
    pub fn width_contains(&self, other: &Rect) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
    }

    /// Check if `other` lies entirely within this rectangle, boundary
    /// included. Every rectangle contains itself.
    pub fn contains(&self, other: &Rect) -> bool {
        self.width_contains(other) && self.height_contains(other)
    }

    pub fn is_contained_in(&self, other: &Rect) -> bool {
        other.contains(self)
    }

    /// Whether the regions share area on both axes. Strict comparisons:
    /// touch-only contact along an edge does not count as overlap.
    fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Check if the rectangles cross each other without either containing
    /// the other.
    ///
    /// Containment, including equal regions, is excluded on purpose:
    /// nesting and intersecting are distinct classifications. Edge-touching
    /// rectangles do not intersect either; that case is [`Rect::is_adjacent`].
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps(other) && !self.contains(other) && !self.is_contained_in(other)
    }

    /// Points where the two rectangles' boundaries cross.
    ///
    /// Empty when the rectangles do not intersect. Candidates are the four
    /// corners of the overlap rectangle, enumerated (min,min), (min,max),
    /// (max,min), (max,max); a corner is kept only when it lies on the
    /// boundary of both rectangles, i.e. strictly inside neither. The result
    /// keeps the enumeration order and is not deduplicated; its length is
    /// always 0, 2, or 4.
    pub fn intersection_points(&self, other: &Rect) -> Vec<Point> {
        if !self.intersects(other) {
            return Vec::new();
        }

        // Overlap rectangle of the two closed regions
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        if min.x > max.x || min.y > max.y {
            return Vec::new();
        }

        let corners = [
            Point::new(min.x, min.y),
            Point::new(min.x, max.y),
            Point::new(max.x, min.y),
            Point::new(max.x, max.y),
        ];

        corners
            .into_iter()
            .filter(|corner| !corner.strictly_inside(self) && !corner.strictly_inside(other))
            .collect()
    }

    /// Check if the rectangles sit side by side with touching edges.
    ///
    /// Always false when one contains the other. Otherwise two rectangles
    /// are adjacent when one's span is nested in the other's on some axis
    /// and any pair of their edges meets on the perpendicular axis. If both
    /// axes are span-nested, the width-nested decision takes precedence
    /// over the height-nested one; that can only happen for degenerate
    /// geometry, and the precedence is kept explicit here.
    pub fn is_adjacent(&self, other: &Rect) -> bool {
        if self.contains(other) || self.is_contained_in(other) {
            return false;
        }

        let mut adjacent = false;

        if self.height_contains(other) || other.height_contains(self) {
            // Left or right sides must touch
            adjacent = self.min.x == other.min.x
                || self.min.x == other.max.x
                || self.max.x == other.min.x
                || self.max.x == other.max.x;
        }

        if self.width_contains(other) || other.width_contains(self) {
            // Top or bottom sides must touch
            adjacent = self.min.y == other.min.y
                || self.min.y == other.max.y
                || self.max.y == other.min.y
                || self.max.y == other.max.y;
        }

        adjacent
    }
}
