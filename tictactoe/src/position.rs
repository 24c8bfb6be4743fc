
use utils::error::Context;
use utils::*;

use super::board::GRID_SIZE;

///
/// A (row, col) cell address on the board, zero-indexed from the top-left.
///
/// Positions derived from pointer coordinates may fall outside the grid; they
/// remain representable so that the move processor can reject them.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position 
{
    row: i32,
    col: i32
}

impl std::fmt::Display for Position 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl notate::Notate for Position 
{
    fn notate (& self) -> String 
    {
        format!("{}{}", self.row, self.col)
    }

    fn parse (s: & str) -> Result<Position>
    {
        let context = format!("Invalid notation '{}' for position.", s);

        let digits = s.chars().map(|c| c.to_digit(10)).collect::<Option<Vec<u32>>>();
        let digits = match digits 
        {
            Some(digits) if digits.len() == 2 => digits,
            _ => return Err(error::error!("Expected exactly two digits.")).context(context.clone())
        };

        let position = Position::new(digits[0] as i32, digits[1] as i32);
        if ! position.in_bounds()
        {
            return Err(error::error!("Position {} is off the board.", position)).context(context.clone());
        }

        Ok(position)
    }
}

impl Position 
{
    ///
    /// Returns the column.
    ///
    pub fn col (& self) -> i32 
    {
        self.col
    }

    ///
    /// Returns the cell under the given pixel coordinates, by flooring division by 
    /// the cell size. Coordinates left of or above the canvas map to negative indices.
    ///
    pub fn from_pixel (x: f32, y: f32, cell_size: f32) -> Position 
    {
        Position 
        {
            row: (y / cell_size).floor() as i32,
            col: (x / cell_size).floor() as i32
        }
    }

    ///
    /// Determines whether this position is on the board.
    ///
    pub fn in_bounds (& self) -> bool 
    {
        0 <= self.row && self.row < GRID_SIZE as i32 && 0 <= self.col && self.col < GRID_SIZE as i32
    }

    ///
    /// Returns a new position.
    ///
    pub fn new (row: i32, col: i32) -> Position 
    {
        Position { row, col }
    }

    ///
    /// Returns the row.
    ///
    pub fn row (& self) -> i32 
    {
        self.row
    }
}
