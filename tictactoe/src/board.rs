
use super::position::Position;
use super::symbol::Symbol;

use utils::error::Context;
use utils::notate::Notate;
use utils::*;

///
/// The side length of the board, in cells.
///
pub const GRID_SIZE: usize = 3;

///
/// Every line that wins the game, as (row, col) triples, in scan order: 
/// the three rows, the three columns, then the main and anti diagonals.
///
pub const LINES: [[(usize, usize); 3]; 8] = 
[
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)]
];

///
/// Represents a tic-tac-toe board, a 3x3 row-major grid of symbols.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board 
{
    cells: [[Symbol; GRID_SIZE]; GRID_SIZE]
}

impl notate::Notate for Board 
{
    fn notate (& self) -> String 
    {
        self.cells.iter()
            .map(|row| row.iter().map(|s| s.notate()).collect::<String>())
            .collect::<Vec<String>>()
            .join("/")
    }

    fn parse (s: & str) -> Result<Board>
    {
        let context = format!("Invalid notation '{}' for board.", s);

        let rows = s.split('/').collect::<Vec<& str>>();
        if rows.len() != GRID_SIZE 
        {
            return Err(error::error!("Expected {} rows, found {}.", GRID_SIZE, rows.len())).context(context.clone());
        }

        let mut board = Board::blank();
        for (i, row) in rows.iter().enumerate()
        {
            let symbols = row.chars().collect::<Vec<char>>();
            if symbols.len() != GRID_SIZE 
            {
                return Err(error::error!("Expected {} cells in row {}, found {}.", GRID_SIZE, i, symbols.len())).context(context.clone());
            }

            for (j, c) in symbols.iter().enumerate()
            {
                board.cells[i][j] = Symbol::parse(& c.to_string()).context(context.clone())?;
            }
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        for row in & self.cells 
        {
            for symbol in row 
            {
                write!(f, "{}", symbol)?;
            }
            write!(f, "\n")?;
        }

        Ok(())
    }
}

impl Board 
{
    ///
    /// Returns a blank board.
    ///
    pub fn blank () -> Board 
    {
        Board { cells: [[Symbol::Empty; GRID_SIZE]; GRID_SIZE] }
    }

    ///
    /// Scans the rows, columns and diagonals in order and returns the symbol of 
    /// the first line whose three cells hold the same mark, or Empty if there is none.
    ///
    pub fn check_win (& self) -> Symbol 
    {
        match self.winning_line()
        {
            Some(line) => self.symbol_at(& line[0]),
            None       => Symbol::Empty
        }
    }

    ///
    /// Empties the given cell.
    ///
    pub fn clear (& mut self, position: & Position)
    {
        self.set(position, Symbol::Empty);
    }

    ///
    /// Counts the cells holding the given symbol.
    ///
    pub fn count (& self, symbol: Symbol) -> usize 
    {
        self.cells.iter().flatten().filter(|& & s| s == symbol).count()
    }

    ///
    /// Returns the symbol at the given position, or None off the board.
    ///
    pub fn get (& self, position: & Position) -> Option<Symbol>
    {
        match position.in_bounds()
        {
            true  => Some(self.cells[position.row() as usize][position.col() as usize]),
            false => None
        }
    }

    ///
    /// Determines whether every cell holds a mark.
    ///
    pub fn is_full (& self) -> bool 
    {
        self.count(Symbol::Empty) == 0
    }

    ///
    /// Returns every occupied cell with its symbol, in row-major order.
    ///
    pub fn occupied (& self) -> Vec<(Position, Symbol)>
    {
        let mut result = Vec::new();
        for (i, row) in self.cells.iter().enumerate()
        {
            for (j, & symbol) in row.iter().enumerate()
            {
                if symbol.is_player()
                {
                    result.push((Position::new(i as i32, j as i32), symbol));
                }
            }
        }
        result
    }

    ///
    /// Writes a symbol into the given cell; positions off the board are ignored.
    ///
    pub fn set (& mut self, position: & Position, symbol: Symbol)
    {
        if position.in_bounds()
        {
            self.cells[position.row() as usize][position.col() as usize] = symbol;
        }
    }

    ///
    /// Returns the symbol at the given position, treating positions off the board as Empty.
    ///
    pub fn symbol_at (& self, position: & Position) -> Symbol 
    {
        self.get(position).unwrap_or(Symbol::Empty)
    }

    ///
    /// Returns the cells of the first completed line in scan order, if any.
    ///
    pub fn winning_line (& self) -> Option<[Position; 3]>
    {
        LINES.iter()
            .find(|line| 
            {
                let (r, c) = line[0];
                let first = self.cells[r][c];
                first.is_player() && line.iter().all(|& (r, c)| self.cells[r][c] == first)
            })
            .map(|line| (* line).map(|(r, c)| Position::new(r as i32, c as i32)))
    }
}
