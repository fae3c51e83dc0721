//! Integer point, direction, and bounding-box primitives.
//!
//! x is right-positive, y is up-positive — screen-row order is applied only
//! at render time (§4.5), not baked into the coordinate system itself.

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

// ─── Direction ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The unit step for this direction, y up-positive.
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, 1),
            Direction::Down => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The direction of travel from `from` to `to`, if they are
    /// 4-adjacent; None otherwise (diagonal or identical cells).
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| from + d.delta() == to)
    }

    pub fn parse(token: &str) -> Option<Direction> {
        match token {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

// ─── BoundingBox ─────────────────────────────────────────────────────────────

/// Inclusive integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i64,
    pub right: i64,
    pub bottom: i64,
    pub top: i64,
}

impl BoundingBox {
    pub fn new(left: i64, right: i64, bottom: i64, top: i64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn from_point(p: Point) -> Self {
        Self::new(p.x, p.x, p.y, p.y)
    }

    pub fn width(&self) -> i64 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i64 {
        self.top - self.bottom + 1
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    pub fn union(&self, other: BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.left.min(other.left),
            self.right.max(other.right),
            self.bottom.min(other.bottom),
            self.top.max(other.top),
        )
    }

    /// Wrap-union over a set of boxes. Returns None for an empty set.
    pub fn union_all(boxes: impl IntoIterator<Item = BoundingBox>) -> Option<BoundingBox> {
        boxes.into_iter().reduce(|acc, b| acc.union(b))
    }

    pub fn expand(&self, margin: i64) -> BoundingBox {
        BoundingBox::new(
            self.left - margin,
            self.right + margin,
            self.bottom - margin,
            self.top + margin,
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../tests/rust/test_geometry.rs"]
mod tests;
