// grid.rs - Grid type for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, Glyphs};
use crate::error::{Error, PatternError};
use crate::patterns::Pattern;

/// A fixed-size rectangle of cells, stored row-major.
///
/// `x` is the column and `y` the row, both 0-indexed. Both dimensions are
/// at least 1 and never change once the grid exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn empty(height: usize, width: usize) -> Self {
        assert!(height >= 1 && width >= 1, "grid must be at least 1x1, got {height}x{width}");
        Self {
            height,
            width,
            cells: vec![Cell::Dead; height * width],
        }
    }

    /// Parses a pattern using the default `X` alive glyph.
    pub fn parse(text: &str) -> Result<Self, Error> {
        Self::parse_with(text, &Glyphs::default())
    }

    /// Parses a pattern, one row per line.
    ///
    /// Whitespace around the whole block is trimmed. The first line sets the
    /// width; every other line must have exactly that many characters.
    pub fn parse_with(text: &str, glyphs: &Glyphs) -> Result<Self, Error> {
        let text = text.trim();
        let Some(first) = text.lines().next().filter(|line| !line.is_empty()) else {
            return Err(PatternError::Empty.into());
        };
        let width = first.chars().count();

        let mut height = 0;
        let mut cells = Vec::with_capacity(text.len());
        for (index, line) in text.lines().enumerate() {
            let start = cells.len();
            cells.extend(line.chars().map(|c| glyphs.cell(c)));
            let found = cells.len() - start;
            if found != width {
                return Err(PatternError::RaggedLine {
                    line: index + 1,
                    expected: width,
                    found,
                }
                .into());
            }
            height += 1;
        }

        Ok(Self { height, width, cells })
    }

    /// Grid of the given size with the pattern's cells alive.
    ///
    /// Pattern cells that fall outside the grid are dropped.
    pub fn from_pattern(height: usize, width: usize, pattern: &Pattern) -> Self {
        let mut grid = Self::empty(height, width);
        for &(row, col) in pattern.cells {
            if row < height && col < width {
                grid.set(col, row, Cell::Alive);
            }
        }
        grid
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Like [`Grid::get`], but `None` for coordinates outside the grid.
    pub fn get_checked(&self, x: isize, y: isize) -> Option<Cell> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(self.cells[y * self.width + x])
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let index = self.index(x, y);
        self.cells[index] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    /// Mutable view over `count` whole rows starting at `first`.
    pub(crate) fn rows_mut(&mut self, first: usize, count: usize) -> &mut [Cell] {
        &mut self.cells[first * self.width..(first + count) * self.width]
    }

    /// One line per row, joined by `\n`, no trailing newline.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&cell| glyphs.glyph(cell)));
        }
        out
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.height,
            self.width
        );
        y * self.width + x
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Glyphs::default()))
    }
}
