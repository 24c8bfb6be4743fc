
use super::board::GRID_SIZE;
use super::game::Game;
use super::layout::Layout;
use super::outcome::Outcome;
use super::position::Position;
use super::symbol::Symbol;

///
/// A 24-bit RGB colour, 0xRRGGBB.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u32);

pub const BACKGROUND: Rgb = Rgb(0x000000);
pub const GRID_LINE: Rgb = Rgb(0xFFFFFF);
pub const HIGHLIGHT: Rgb = Rgb(0xDC2430);
pub const TEXT: Rgb = Rgb(0xFFFFFF);

pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const HIGHLIGHT_WIDTH: f32 = 4.0;

///
/// One drawing primitive, in pixel space. A frame is drawn by executing its 
/// commands in order, each on top of the previous ones.
///
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand 
{
    ///
    /// Fills the whole canvas.
    ///
    Clear(Rgb),

    ///
    /// Strokes a straight segment.
    ///
    Line { from: (f32, f32), to: (f32, f32), width: f32, colour: Rgb },

    ///
    /// Blits the icon of a player's mark, scaled to `size` square, with its top-left 
    /// corner at `origin`. A translucent mark previews the next eviction.
    ///
    Mark { symbol: Symbol, position: Position, origin: (f32, f32), size: f32, translucent: bool },

    ///
    /// Prints a status line.
    ///
    Text { content: String, origin: (f32, f32), colour: Rgb }
}

///
/// Derives the frame for the given game. Rendering never changes the game.
///
/// The frame is: background; the internal grid lines; every mark on the board,
/// except that while the game is in progress the mark the player to move will 
/// lose with their next placement is drawn translucent instead; and once the game has ended, a
/// stroke through the winning line (if any) and the status banner.
///
pub fn render (game: & Game, layout: & Layout) -> Vec<DrawCommand>
{
    let mut commands = vec![DrawCommand::Clear(BACKGROUND)];

    let extent = layout.canvas_size();
    for i in 1 .. GRID_SIZE 
    {
        let offset = i as f32 * layout.cell_size;
        commands.push(DrawCommand::Line { from: (offset, 0.0), to: (offset, extent), width: GRID_LINE_WIDTH, colour: GRID_LINE });
        commands.push(DrawCommand::Line { from: (0.0, offset), to: (extent, offset), width: GRID_LINE_WIDTH, colour: GRID_LINE });
    }

    let outcome = game.outcome();
    let doomed = match outcome 
    {
        Outcome::InProgress => game.positions(game.to_move()).next_eviction(),
        _                   => None
    };

    // The doomed mark is left out here and drawn translucent on its own below.
    for (position, symbol) in game.board().occupied()
    {
        if Some(position) != doomed 
        {
            commands.push(mark(layout, symbol, position, false));
        }
    }

    if let Some(oldest) = doomed 
    {
        commands.push(mark(layout, game.to_move(), oldest, true));
    }

    if let Some(line) = game.board().winning_line()
    {
        commands.push(DrawCommand::Line 
        {
            from: layout.cell_centre(& line[0]),
            to: layout.cell_centre(& line[2]),
            width: HIGHLIGHT_WIDTH,
            colour: HIGHLIGHT
        });
    }

    if let Some(content) = outcome.banner()
    {
        commands.push(DrawCommand::Text { content, origin: (0.0, 0.0), colour: TEXT });
    }

    commands
}

fn mark (layout: & Layout, symbol: Symbol, position: Position, translucent: bool) -> DrawCommand 
{
    DrawCommand::Mark 
    {
        symbol,
        position,
        origin: layout.icon_origin(& position),
        size: layout.icon_size,
        translucent
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;
    use crate::game::Input;
    use crate::rules::Rules;
    use pretty_assertions::assert_eq;

    fn p (row: i32, col: i32) -> Position 
    {
        Position::new(row, col)
    }

    fn play (game: & mut Game, moves: & [(i32, i32)])
    {
        for & (row, col) in moves 
        {
            game.update(& Input::place(p(row, col)));
        }
    }

    fn marks (commands: & [DrawCommand]) -> Vec<(Symbol, Position, bool)>
    {
        commands.iter()
            .filter_map(|c| match c 
            {
                DrawCommand::Mark { symbol, position, translucent, .. } => Some((* symbol, * position, * translucent)),
                _ => None
            })
            .collect()
    }

    fn texts (commands: & [DrawCommand]) -> Vec<String>
    {
        commands.iter()
            .filter_map(|c| match c 
            {
                DrawCommand::Text { content, .. } => Some(content.clone()),
                _ => None
            })
            .collect()
    }

    #[test]
    fn test_blank_board () 
    {
        let commands = render(& Game::default(), & Layout::default());

        assert_eq!(commands, vec![
            DrawCommand::Clear(BACKGROUND),
            DrawCommand::Line { from: (100.0, 0.0), to: (100.0, 300.0), width: 2.0, colour: GRID_LINE },
            DrawCommand::Line { from: (0.0, 100.0), to: (300.0, 100.0), width: 2.0, colour: GRID_LINE },
            DrawCommand::Line { from: (200.0, 0.0), to: (200.0, 300.0), width: 2.0, colour: GRID_LINE },
            DrawCommand::Line { from: (0.0, 200.0), to: (300.0, 200.0), width: 2.0, colour: GRID_LINE }
        ]);
    }

    #[test]
    fn test_marks_are_centred_in_their_cells () 
    {
        let mut game = Game::default();
        play(& mut game, & [(1, 2)]);

        let commands = render(& game, & Layout::default());
        assert_eq!(commands.last(), Some(& DrawCommand::Mark 
        {
            symbol: Symbol::X,
            position: p(1, 2),
            origin: (212.0, 112.0),
            size: 75.0,
            translucent: false
        }));
    }

    #[test]
    fn test_preview_of_next_eviction () 
    {
        let mut game = Game::default();
        play(& mut game, & [(0, 0), (1, 0), (1, 1), (2, 0), (2, 1)]);
        assert_eq!(marks(& render(& game, & Layout::default())).iter().filter(|m| m.2).count(), 0);

        play(& mut game, & [(1, 2)]);
        let shown = marks(& render(& game, & Layout::default()));
        assert_eq!(shown.last(), Some(& (Symbol::X, p(0, 0), true)));
        assert_eq!(shown.iter().filter(|m| m.2).count(), 1);
        assert_eq!(shown.len(), 6);

        let doomed = shown.iter().filter(|m| m.1 == p(0, 0)).map(|m| m.2).collect::<Vec<bool>>();
        assert_eq!(doomed, vec![true]);
    }

    #[test]
    fn test_rendering_does_not_mutate () 
    {
        let mut game = Game::default();
        play(& mut game, & [(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (1, 2)]);
        let before = game.clone();

        render(& game, & Layout::default());
        render(& game, & Layout::default());
        assert_eq!(game, before);
        assert_eq!(game.board().symbol_at(& p(0, 0)), Symbol::X);
    }

    #[test]
    fn test_winner_banner_and_highlight () 
    {
        let mut game = Game::default();
        play(& mut game, & [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        let commands = render(& game, & Layout::default());
        assert_eq!(texts(& commands), vec!["Player X wins! Right-click to reset.".to_string()]);
        assert!(commands.contains(& DrawCommand::Line { from: (50.0, 50.0), to: (250.0, 50.0), width: HIGHLIGHT_WIDTH, colour: HIGHLIGHT }));
    }

    #[test]
    fn test_no_preview_after_the_game_ends () 
    {
        let mut game = Game::default();
        play(& mut game, & [(2, 2), (1, 0), (0, 0), (1, 1), (0, 1), (2, 0), (0, 2)]);
        assert_eq!(game.outcome(), Outcome::Won(Symbol::X));
        assert!(game.positions(Symbol::O).is_full());

        let shown = marks(& render(& game, & Layout::default()));
        assert!(shown.iter().all(|m| ! m.2));
    }

    #[test]
    fn test_draw_banner () 
    {
        let mut game = Game::new(Rules::Classic);
        play(& mut game, & [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)]);

        let commands = render(& game, & Layout::default());
        assert_eq!(texts(& commands), vec!["Draw! Right-click to reset.".to_string()]);
        assert_eq!(marks(& commands).len(), 9);
    }
}
