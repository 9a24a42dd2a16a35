// the head is tracked apart from the body, the body is the trail of
// positions the head occupied on previous ticks (nearest first)
// growing always appends to the left of the last segment, whatever the heading
use std::collections::VecDeque;

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Snake {
    head: Point,
    direction: Direction,
    body: VecDeque<Point>, // body[0] is the segment right behind the head
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    pub fn new() -> Self {
        Snake {
            head: Point::new(0, 0),
            direction: Direction::Right,
            body: VecDeque::new(),
        }
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    /// Number of body segments, the head not included.
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    // no reversal filtering, any heading is accepted
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn next_head(&self) -> Point {
        match self.direction {
            Direction::Up => self.head.get_up(),
            Direction::Down => self.head.get_down(),
            Direction::Left => self.head.get_left(),
            Direction::Right => self.head.get_right(),
        }
    }

    /// Moves one cell along the current heading inside a
    /// `max_width` x `max_height` area.
    ///
    /// Returns `false` and leaves the snake untouched when the next cell
    /// is outside the area: the snake stalls against the wall instead of
    /// dying or wrapping around.
    pub fn advance(&mut self, max_width: i32, max_height: i32) -> bool {
        let next = self.next_head();
        if next.x < 0 || next.y < 0 || next.x >= max_width || next.y >= max_height {
            return false;
        }

        if self.has_body() {
            self.body.push_front(self.head);
            self.body.pop_back();
        }
        self.head = next;
        true
    }

    pub fn grow(&mut self) {
        let anchor = self.body.back().copied().unwrap_or(self.head);
        self.body.push_back(anchor.get_left());
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, head: Point, body: &[Point]) {
        self.head = head;
        self.body = body.iter().copied().collect();
    }
}
