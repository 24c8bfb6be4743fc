
use super::board::Board;
use super::outcome::Outcome;
use super::position::Position;
use super::queue::PositionQueue;
use super::rules::Rules;
use super::symbol::Symbol;

use utils::notate::Notate;
use utils::{debug, info};

///
/// The pointer input of one frame.
///
/// The button flags are press edges: they are set only on the frame in which 
/// the button went down, so holding a button produces a single attempt.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Input 
{
    pub cursor: Position,
    pub primary: bool,
    pub secondary: bool
}

impl Input 
{
    ///
    /// Returns an input with the pointer at the given cell and no buttons pressed.
    ///
    pub fn idle (cursor: Position) -> Input 
    {
        Input { cursor, primary: false, secondary: false }
    }

    ///
    /// Returns a primary click on the given cell.
    ///
    pub fn place (cursor: Position) -> Input 
    {
        Input { cursor, primary: true, secondary: false }
    }

    ///
    /// Returns a secondary click on the given cell.
    ///
    pub fn reset (cursor: Position) -> Input 
    {
        Input { cursor, primary: false, secondary: true }
    }
}

///
/// The reasons a click fails to place a mark. None of these are surfaced to the
/// players; the click is simply ignored.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError 
{
    #[error("the game is over")]
    GameOver,

    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    #[error("position {0} is already occupied")]
    Occupied(Position),

    #[error("position {0} was vacated by the last eviction")]
    JustVacated(Position)
}

///
/// The effect of an accepted move.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement 
{
    pub symbol: Symbol,
    pub position: Position,
    pub evicted: Option<Position>
}

///
/// The full state of a game of tic-tac-toe.
///
/// Alongside the board, the game keeps each player's live marks in placement 
/// order. Under the vanishing rules those queues hold three positions at most;
/// a fourth placement evicts the player's oldest mark. The evicting player may
/// not put a mark straight back into the cell they vacated; their opponent may.
///
/// The game only changes through `update` (or the `try_place` and `reset` 
/// operations it is built on); everything else is a read-only view.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game 
{
    board: Board,
    rules: Rules,
    to_move: Symbol,
    winner: Symbol,
    x_positions: PositionQueue,
    o_positions: PositionQueue
}

impl Default for Game 
{
    fn default () -> Game 
    {
        Game::new(Rules::default())
    }
}

impl Game 
{
    ///
    /// Returns the current state of the board.
    ///
    pub fn board (& self) -> & Board 
    {
        & self.board
    }

    ///
    /// Returns the cell the given player most recently vacated by an eviction, 
    /// which that player may not play into.
    ///
    pub fn last_evicted (& self, player: Symbol) -> Option<Position>
    {
        self.positions(player).last_evicted()
    }

    ///
    /// Returns a blank game under the given rules, with X to move.
    ///
    pub fn new (rules: Rules) -> Game 
    {
        Game 
        {
            board: Board::blank(),
            rules,
            to_move: Symbol::X,
            winner: Symbol::Empty,
            x_positions: PositionQueue::new(rules.capacity()),
            o_positions: PositionQueue::new(rules.capacity())
        }
    }

    ///
    /// Returns the outcome of the game so far.
    ///
    pub fn outcome (& self) -> Outcome 
    {
        if self.winner.is_player()
        {
            Outcome::Won(self.winner)
        }
        else if self.rules.allows_draw() && self.board.is_full()
        {
            Outcome::Draw
        }
        else 
        {
            Outcome::InProgress
        }
    }

    ///
    /// Returns the live marks of the given player, oldest first.
    ///
    pub fn positions (& self, player: Symbol) -> & PositionQueue 
    {
        match player 
        {
            Symbol::X     => & self.x_positions,
            Symbol::O     => & self.o_positions,
            Symbol::Empty => panic!("Something has gone terribly wrong: tried to get positions() of an empty symbol.")
        }
    }

    ///
    /// Restores the initial state in place, keeping the rules.
    ///
    pub fn reset (& mut self)
    {
        self.board = Board::blank();
        self.to_move = Symbol::X;
        self.winner = Symbol::Empty;
        self.x_positions.clear();
        self.o_positions.clear();
    }

    ///
    /// Returns the rules this game is played under.
    ///
    pub fn rules (& self) -> Rules 
    {
        self.rules
    }

    ///
    /// Determines the next player to move in this game.
    ///
    pub fn to_move (& self) -> Symbol 
    {
        self.to_move
    }

    ///
    /// Places the mark of the player to move at the given position, evicting that
    /// player's oldest mark first if they already hold the maximum, then passes the turn.
    ///
    /// A rejected move leaves the game untouched.
    ///
    pub fn try_place (& mut self, position: Position) -> Result<Placement, MoveError>
    {
        self.validate(& position)?;

        let symbol = self.to_move;
        let evicted = self.positions_mut(symbol).push(position);

        if let Some(oldest) = evicted 
        {
            self.board.clear(& oldest);
        }

        self.board.set(& position, symbol);
        self.to_move = symbol.next();
        self.refresh_outcome();

        Ok(Placement { symbol, position, evicted })
    }

    ///
    /// Advances the game by one frame of input.
    ///
    /// A secondary click resets a finished game. While the game is in progress a
    /// primary click attempts a move at the cursor; rejected moves are ignored.
    ///
    pub fn update (& mut self, input: & Input)
    {
        if input.secondary && self.outcome().is_over()
        {
            info!("Resetting after: {}", self.outcome());
            self.reset();
        }

        self.refresh_outcome();
        if self.outcome().is_over()
        {
            return;
        }

        if input.primary 
        {
            match self.try_place(input.cursor)
            {
                Ok(placement) => 
                {
                    debug!("{}", utils::notate!("{} played {}, board is now {}.", placement.symbol, placement.position, self.board));
                    if let Some(evicted) = placement.evicted 
                    {
                        debug!("{} lost its oldest mark at {}.", placement.symbol.notate(), evicted.notate());
                    }
                },
                Err(err) => 
                {
                    debug!("Ignored click at {}: {}.", input.cursor, err);
                }
            }
        }
    }

    ///
    /// Determines whether the player to move may place a mark at the position.
    ///
    pub fn validate (& self, position: & Position) -> Result<(), MoveError>
    {
        if self.outcome().is_over()
        {
            return Err(MoveError::GameOver);
        }

        match self.board.get(position)
        {
            None                => Err(MoveError::OutOfBounds(* position)),
            Some(Symbol::Empty) => match self.last_evicted(self.to_move) == Some(* position)
            {
                true  => Err(MoveError::JustVacated(* position)),
                false => Ok(())
            },
            Some(_)             => Err(MoveError::Occupied(* position))
        }
    }

    ///
    /// Returns a mut reference to the live marks of the given player.
    ///
    fn positions_mut (& mut self, player: Symbol) -> & mut PositionQueue 
    {
        match player 
        {
            Symbol::X     => & mut self.x_positions,
            Symbol::O     => & mut self.o_positions,
            Symbol::Empty => panic!("Something has gone terribly wrong: tried to get positions_mut() of an empty symbol.")
        }
    }

    ///
    /// Records the winner, if the board now holds a line, and logs the end of the game.
    ///
    fn refresh_outcome (& mut self)
    {
        let before = self.outcome();
        self.winner = self.board.check_win();

        let after = self.outcome();
        if after != before && after.is_over()
        {
            info!("{} Final board: {}", after, self.board.notate());
        }
    }
}
