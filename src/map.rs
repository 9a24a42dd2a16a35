// the playfield and its text frame
// two buffers of (width + 2) * (height + 2) bytes: `new_buf` is drawn into
// during a tick, `old_buf` keeps the last frame that was written out
use std::io::{self, Write};

use tracing::debug;

use crate::config::BORDER_OFFSET;
use crate::food::Food;
use crate::geometry::Point;
use crate::snake::Snake;

pub const CORNER_CHAR: u8 = b'+';
pub const VERTICAL_BORDER_CHAR: u8 = b'|';
pub const HORIZONTAL_BORDER_CHAR: u8 = b'-';
pub const SPACE_CHAR: u8 = b' ';
pub const FOOD_CHAR: u8 = b'$';
pub const SNAKE_HEAD_CHAR: u8 = b'>';
pub const SNAKE_BODY_CHAR: u8 = b'O';

#[derive(Debug, Clone)]
pub struct Map {
    width: i32,
    height: i32,
    width_with_offset: i32,
    height_with_offset: i32,
    old_buf: Vec<u8>,
    new_buf: Vec<u8>,
    foods: Vec<Food>,
}

impl Map {
    pub fn new(width: i32, height: i32) -> Self {
        let width_with_offset = width + BORDER_OFFSET * 2;
        let height_with_offset = height + BORDER_OFFSET * 2;
        let bytesize = (width_with_offset * height_with_offset) as usize;
        Map {
            width,
            height,
            width_with_offset,
            height_with_offset,
            old_buf: vec![SPACE_CHAR; bytesize],
            new_buf: vec![SPACE_CHAR; bytesize],
            foods: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width_with_offset(&self) -> i32 {
        self.width_with_offset
    }

    pub fn height_with_offset(&self) -> i32 {
        self.height_with_offset
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn save_food(&mut self, food: Food) {
        self.foods.push(food);
    }

    /// The frame being built for the current tick.
    pub fn new_buf(&self) -> &[u8] {
        &self.new_buf
    }

    /// The last frame written out by [`Map::render`].
    pub fn old_buf(&self) -> &[u8] {
        &self.old_buf
    }

    /// Last rendered frame as newline separated rows.
    pub fn last_frame(&self) -> String {
        self.old_buf
            .chunks(self.width_with_offset as usize)
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // index into a buffer for a border-inclusive position, `None` if off the grid
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width_with_offset || p.y >= self.height_with_offset {
            return None;
        }
        Some((p.y * self.width_with_offset + p.x) as usize)
    }

    fn border_char(&self, p: Point) -> Option<u8> {
        let on_left_or_right = p.x == 0 || p.x == self.width_with_offset - 1;
        let on_top_or_bottom = p.y == 0 || p.y == self.height_with_offset - 1;
        match (on_left_or_right, on_top_or_bottom) {
            (true, true) => Some(CORNER_CHAR),
            (true, false) => Some(VERTICAL_BORDER_CHAR),
            (false, true) => Some(HORIZONTAL_BORDER_CHAR),
            (false, false) => None,
        }
    }

    pub fn draw_borders(&mut self) {
        for y in 0..self.height_with_offset {
            for x in 0..self.width_with_offset {
                let p = Point::new(x, y);
                if let (Some(c), Some(i)) = (self.border_char(p), self.index(p)) {
                    self.new_buf[i] = c;
                }
            }
        }
    }

    /// Draws `c` at an interior position. Positions that fall off the
    /// border-inclusive grid are dropped.
    pub fn draw(&mut self, p: Point, c: u8) {
        if let Some(i) = self.index(p.offset(BORDER_OFFSET)) {
            self.new_buf[i] = c;
        }
    }

    pub fn draw_foods(&mut self) {
        for f in 0..self.foods.len() {
            let food = self.foods[f];
            for p in food.cells() {
                if p.x < self.width && p.y < self.height {
                    self.draw(p, FOOD_CHAR);
                }
            }
        }
    }

    pub fn draw_snake(&mut self, snake: &Snake) {
        self.draw(snake.head(), SNAKE_HEAD_CHAR);
        for node in snake.body() {
            self.draw(*node, SNAKE_BODY_CHAR);
        }
    }

    /// Draws the whole frame and writes it to `out`, then moves the cursor
    /// back up so the next frame lands on top of this one.
    ///
    /// `new_buf` is blank again afterwards, even if writing failed.
    pub fn render<W: Write>(&mut self, snake: &Snake, out: &mut W) -> io::Result<()> {
        self.draw_borders();
        self.draw_foods();
        self.draw_snake(snake);

        self.old_buf.copy_from_slice(&self.new_buf);
        let written = self.write_frame(out);
        self.new_buf.fill(SPACE_CHAR);
        written
    }

    fn write_frame<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.new_buf.chunks(self.width_with_offset as usize) {
            out.write_all(row)?;
            out.write_all(b"\n")?;
        }
        write!(out, "\x1B[{}A", self.height_with_offset)?;
        out.flush()
    }

    /// Eats every food under the snake's head, growing the snake once per
    /// food. Returns how many were eaten.
    pub fn check_collisions(&mut self, snake: &mut Snake) -> usize {
        let head = snake.head();
        let mut eaten = 0;
        let mut i = 0;
        while i < self.foods.len() {
            if self.foods[i].contains_point(head) {
                // order of the food list does not matter
                let food = self.foods.swap_remove(i);
                snake.grow();
                eaten += 1;
                debug!(?food, length = snake.body_len(), "food eaten");
            } else {
                i += 1;
            }
        }
        eaten
    }
}
