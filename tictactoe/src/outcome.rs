
use super::symbol::Symbol;

use utils::notate::Notate;

///
/// An enum that represents the outcome of a game.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome 
{
    InProgress,
    Won(Symbol),
    Draw
}

impl std::fmt::Display for Outcome 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        match self 
        {
            Outcome::InProgress  => write!(f, "The game is in progress."),
            Outcome::Won(symbol) => write!(f, "{} wins.", symbol.notate()),
            Outcome::Draw        => write!(f, "The game is a draw.")
        }
    }
}

impl Outcome 
{
    ///
    /// Returns the status line shown once the game has ended.
    ///
    pub fn banner (& self) -> Option<String>
    {
        match self 
        {
            Outcome::InProgress  => None,
            Outcome::Won(symbol) => Some(format!("Player {} wins! Right-click to reset.", symbol.notate())),
            Outcome::Draw        => Some("Draw! Right-click to reset.".to_string())
        }
    }

    ///
    /// Determines whether the game has ended and is waiting for a reset.
    ///
    pub fn is_over (& self) -> bool 
    {
        * self != Outcome::InProgress
    }
}
