
use utils::*;

///
/// The content of a cell on the tic-tac-toe board.
///
/// There are two players, X and O; X always moves first. A cell that holds
/// neither player's mark is Empty, and Empty also stands for "no winner yet".
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol 
{
    X,
    O,
    #[default]
    Empty
}

impl std::fmt::Display for Symbol 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let token = match self 
        {
            Symbol::X     => "❌",
            Symbol::O     => "⭕",
            Symbol::Empty => "⬛"
        };
        write!(f, "{}", token)
    }
}

impl notate::Notate for Symbol 
{
    fn notate (& self) -> String 
    {
        match self 
        {
            Symbol::X     => "X".to_string(),
            Symbol::O     => "O".to_string(),
            Symbol::Empty => ".".to_string()
        }
    }

    fn parse (s: & str) -> Result<Symbol>
    {
        match s 
        {
            "X" | "x"             => Ok(Symbol::X),
            "O" | "o"             => Ok(Symbol::O),
            "_" | "-" | "." | "," => Ok(Symbol::Empty),
            _                     => Err(error::error!("Invalid notation '{}' for symbol.", s))
        }
    }
}

impl Symbol 
{
    ///
    /// Determines whether this symbol belongs to a player.
    ///
    pub fn is_player (& self) -> bool 
    {
        * self != Symbol::Empty
    }

    ///
    /// Returns the player opposite this one.
    ///
    pub fn next (& self) -> Symbol 
    {
        match self 
        {
            Symbol::X     => Symbol::O,
            Symbol::O     => Symbol::X,
            Symbol::Empty => panic!("Something has gone terribly wrong: tried to get next() of an empty symbol.")
        }
    }
}
