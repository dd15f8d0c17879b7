use crate::{Error, Orientation};
use std::fmt;
use std::iter::once;
use std::ops::Deref;

/// Side length of a board when none is given.
pub const DEFAULT_SIDE_LENGTH: usize = 33;

/// A position on the board.
/// The origin is the centre square, `x` increases to the right and `y` increases upwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// The point `n` steps away in reading direction `orientation`.
    /// Negative `n` steps backwards.
    pub fn offset(self, orientation: Orientation, n: i32) -> Point {
        let (dx, dy) = orientation.step();
        Point::new(self.x + dx * n, self.y + dy * n)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square on the board that is either empty or holds a letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(Option<char>);

impl Cell {
    /// An empty cell
    pub const EMPTY: Self = Self(None);

    pub fn new(letter: char) -> Cell {
        Cell(Some(letter))
    }

    /// Get the letter or None
    pub fn letter(&self) -> Option<char> {
        self.0
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// Empty cells show as "-".
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.unwrap_or('-'))
    }
}

/// Square grid of cells on a Cartesian plane centred on the middle square.
///
/// With side length `2h + 1` the coordinates run from `-h` to `h` on both axes.
/// Cells are stored row by row, from the top row (`y = h`) down.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    half: usize,
    cells: Vec<Cell>,
}

impl Deref for Grid {
    type Target = [Cell];
    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::with_half(DEFAULT_SIDE_LENGTH / 2)
    }
}

impl Grid {
    pub(crate) fn with_half(half: usize) -> Grid {
        let side = 2 * half + 1;
        Grid {
            half,
            cells: vec![Cell::EMPTY; side * side],
        }
    }

    /// Create an empty grid with `side` x `side` cells.
    /// ## Errors
    /// If `side` is zero or even, there is no centre square.
    pub fn new(side: usize) -> Result<Grid, Error> {
        if side % 2 == 0 {
            return Err(Error::InvalidSideLength(side));
        }
        Ok(Grid::with_half(side / 2))
    }

    pub fn side_length(&self) -> usize {
        2 * self.half + 1
    }

    /// Smallest x or y coordinate
    pub fn min(&self) -> i32 {
        -(self.half as i32)
    }

    /// Largest x or y coordinate
    pub fn max(&self) -> i32 {
        self.half as i32
    }

    /// Check if `p` is on the grid.
    pub fn contains(&self, p: Point) -> bool {
        (self.min()..=self.max()).contains(&p.x) && (self.min()..=self.max()).contains(&p.y)
    }

    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            let row = (self.max() - p.y) as usize;
            let col = (p.x - self.min()) as usize;
            Some(row * self.side_length() + col)
        } else {
            None
        }
    }

    /// Return the cell at `p`. Points outside the grid read as empty.
    pub fn get(&self, p: Point) -> Cell {
        self.index(p).map_or(Cell::EMPTY, |i| self.cells[i])
    }

    /// Check if `p` is empty or outside the grid.
    pub fn is_empty_at(&self, p: Point) -> bool {
        self.get(p).is_empty()
    }

    /// Put `letter` at `p`.
    /// ## Errors
    /// If `p` is outside the grid.
    pub fn set(&mut self, p: Point, letter: char) -> Result<(), Error> {
        let i = self
            .index(p)
            .ok_or(Error::OutOfBounds { x: p.x, y: p.y })?;
        self.cells[i] = Cell::new(letter);
        Ok(())
    }

    /// Check if no cell holds a letter.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// The run of letters that starts at `p` in reading direction `orientation`, if `p` starts one.
    ///
    /// A run starts at a filled cell whose predecessor is empty (or off the grid) and whose
    /// successor is filled, so every run has at least two letters.
    pub fn run_at(&self, p: Point, orientation: Orientation) -> Option<String> {
        if self.is_empty_at(p)
            || !self.is_empty_at(p.offset(orientation, -1))
            || self.is_empty_at(p.offset(orientation, 1))
        {
            return None;
        }
        let mut run = String::new();
        let mut q = p;
        while let Some(letter) = self.get(q).letter() {
            run.push(letter);
            q = q.offset(orientation, 1);
        }
        Some(run)
    }

    /// The whole run of letters in direction `orientation` that `p` belongs to, if it has
    /// two or more letters.
    pub fn run_through(&self, p: Point, orientation: Orientation) -> Option<String> {
        if self.is_empty_at(p) {
            return None;
        }
        let mut start = p;
        while !self.is_empty_at(start.offset(orientation, -1)) {
            start = start.offset(orientation, -1);
        }
        self.run_at(start, orientation)
    }

    /// All runs of two or more letters, rows read left to right and columns top to bottom.
    pub fn runs(&self) -> impl Iterator<Item = String> + '_ {
        let (min, max) = (self.min(), self.max());
        (min..=max)
            .rev()
            .flat_map(move |y| (min..=max).map(move |x| Point::new(x, y)))
            .flat_map(move |p| {
                once(self.run_at(p, Orientation::Horizontal))
                    .chain(once(self.run_at(p, Orientation::Vertical)))
                    .flatten()
            })
    }

    /// Get the grid as one string per row, top row first, cells separated by a space.
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.side_length())
            .map(|row| {
                row.iter()
                    .map(Cell::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings, as written by [`to_strings`](Grid::to_strings).
    /// Each row holds `side` cells separated by spaces, `-` for an empty cell.
    ///
    /// ## Errors
    /// If the number of rows is even, or a row has the wrong length or a cell is not a single letter.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Grid, Error};
    /// let grid = Grid::from_strings(&[
    ///     "- - -",
    ///     "C A T",
    ///     "- - -",
    /// ])?;
    /// assert_eq!(grid.runs().collect::<Vec<_>>(), ["CAT"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Grid, Error> {
        let mut grid = Grid::new(rows.len())?;
        let (min, max) = (grid.min(), grid.max());
        for (y, row) in (min..=max).rev().zip(rows) {
            let cells: Vec<&str> = row.as_ref().split(' ').collect();
            if cells.len() != rows.len() {
                return Err(Error::InvalidToken(String::from(row.as_ref())));
            }
            for (x, &cell) in (min..=max).zip(&cells) {
                let mut chars = cell.chars();
                match (chars.next(), chars.next()) {
                    (Some('-'), None) => {}
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        grid.set(Point::new(x, y), c.to_ascii_uppercase())?
                    }
                    _ => return Err(Error::InvalidToken(String::from(cell))),
                }
            }
        }
        Ok(grid)
    }
}
