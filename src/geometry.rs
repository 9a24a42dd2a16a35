// grid geometry: cells are addressed by signed integer coordinates,
// x grows to the right and y grows downwards

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn get_left(&self) -> Point {
        Point::new(self.x - 1, self.y)
    }
    pub fn get_right(&self) -> Point {
        Point::new(self.x + 1, self.y)
    }
    pub fn get_up(&self) -> Point {
        Point::new(self.x, self.y - 1)
    }
    pub fn get_down(&self) -> Point {
        Point::new(self.x, self.y + 1)
    }

    /// Shifts both coordinates by `offset`, used to move from interior
    /// coordinates into border-inclusive ones.
    pub fn offset(&self, offset: i32) -> Point {
        Point::new(self.x + offset, self.y + offset)
    }
}

/// Axis-aligned box with inclusive bounds, `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Rect {
    /// Builds the box spanned by two opposite corners, in any order.
    pub fn new(a: Point, b: Point) -> Rect {
        Rect {
            x1: a.x.min(b.x),
            y1: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
        }
    }

    /// Box with its top-left corner at `origin` covering `extra` more
    /// cells to the right and downwards.
    pub fn square(origin: Point, extra: i32) -> Rect {
        Rect::new(origin, Point::new(origin.x + extra, origin.y + extra))
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }
    pub fn y1(&self) -> i32 {
        self.y1
    }
    pub fn x2(&self) -> i32 {
        self.x2
    }
    pub fn y2(&self) -> i32 {
        self.y2
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x1..=self.x2).contains(&x) && (self.y1..=self.y2).contains(&y)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }

    /// Every cell covered by the box, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (self.y1..=self.y2).flat_map(move |y| (self.x1..=self.x2).map(move |x| Point::new(x, y)))
    }

    /// True if any cell of `self` lies inside `other`.
    ///
    /// Brute force over the cells of `self`, fine for food-sized boxes.
    /// Since it is a plain intersection test of two cell sets the result
    /// does not depend on argument order.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.cells().any(|p| other.contains_point(p))
    }
}
