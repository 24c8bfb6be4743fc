
use utils::*;

///
/// The rule set a game is played under.
///
/// Under the vanishing rules each player keeps at most three marks on the board;
/// placing a fourth removes that player's oldest mark. The classic rules never 
/// remove marks, so a full board without a line is a draw.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rules 
{
    #[default]
    Vanishing,
    Classic
}

impl std::fmt::Display for Rules 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "{}", notate::Notate::notate(self))
    }
}

impl notate::Notate for Rules 
{
    fn notate (& self) -> String 
    {
        match self 
        {
            Rules::Vanishing => "vanishing".to_string(),
            Rules::Classic   => "classic".to_string()
        }
    }

    fn parse (s: & str) -> Result<Rules>
    {
        match s.to_lowercase().as_str()
        {
            "vanishing" | "rolling" => Ok(Rules::Vanishing),
            "classic"               => Ok(Rules::Classic),
            _                       => Err(error::error!("Invalid notation '{}' for rules.", s))
        }
    }
}

impl Rules 
{
    ///
    /// Determines whether a full board without a winner ends the game.
    ///
    pub fn allows_draw (& self) -> bool 
    {
        * self == Rules::Classic
    }

    ///
    /// Returns the number of marks a player may keep on the board, if limited.
    ///
    pub fn capacity (& self) -> Option<usize>
    {
        match self 
        {
            Rules::Vanishing => Some(3),
            Rules::Classic   => None
        }
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;
    use utils::notate::Notate;

    #[test]
    fn test_capacity () 
    {
        assert_eq!(Rules::Vanishing.capacity(), Some(3));
        assert_eq!(Rules::Classic.capacity(), None);
        assert_eq!(Rules::default(), Rules::Vanishing);
    }

    #[test]
    fn test_notation () 
    {
        assert_eq!(Rules::parse("Classic").unwrap(), Rules::Classic);
        assert_eq!(Rules::parse("vanishing").unwrap(), Rules::Vanishing);
        assert!(Rules::parse("gomoku").is_err());
        assert_eq!(Rules::Classic.to_string(), "classic");
    }
}
