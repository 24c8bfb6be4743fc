
pub mod board;
pub mod game;
pub mod layout;
pub mod outcome;
pub mod position;
pub mod queue;
pub mod render;
pub mod rules;
pub mod symbol;

pub use board::Board;
pub use game::{Game, Input, MoveError, Placement};
pub use layout::Layout;
pub use outcome::Outcome;
pub use position::Position;
pub use queue::PositionQueue;
pub use render::{render, DrawCommand, Rgb};
pub use rules::Rules;
pub use symbol::Symbol;
