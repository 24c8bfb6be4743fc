
use super::error::Result;

#[macro_export]
///
/// Formats a log or status line whose arguments are all Notate implementors,
/// substituting each argument's canonical notation.
///
/// `notate!("{} played {}", symbol, position)` reads as "X played 12".
///
macro_rules! notate 
{
    ($fmt:expr, $($args:expr),*) => 
    {
        format!($fmt, $($args.notate()),*)
    };
}

///
/// A compact, human-typeable text form for game values.
///
/// notate() gives the one canonical spelling (used in logs and test fixtures,
/// e.g. a board as "XO./.X./..O"); parse() accepts that spelling plus any
/// lenient aliases, and rejects everything else with a contextual error.
///
pub trait Notate 
    where Self: Sized
{
    ///
    /// Returns the canonical spelling.
    ///
    fn notate (& self) -> String;

    ///
    /// Reads a value back from its canonical spelling or an accepted alias.
    ///
    fn parse (s: & str) -> Result<Self>;
}
