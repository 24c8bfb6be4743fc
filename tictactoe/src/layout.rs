
use super::board::GRID_SIZE;
use super::position::Position;

///
/// The side length of a cell, in pixels.
///
pub const CELL_SIZE: f32 = 100.0;

///
/// The side length of a mark icon, in pixels.
///
pub const ICON_SIZE: f32 = 75.0;

///
/// The pixel geometry of the board on the canvas.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout 
{
    pub cell_size: f32,
    pub icon_size: f32
}

impl Default for Layout 
{
    fn default () -> Layout 
    {
        Layout { cell_size: CELL_SIZE, icon_size: ICON_SIZE }
    }
}

impl Layout 
{
    ///
    /// Returns the side length of the square canvas.
    ///
    pub fn canvas_size (& self) -> f32 
    {
        GRID_SIZE as f32 * self.cell_size
    }

    ///
    /// Returns the pixel centre of a cell.
    ///
    pub fn cell_centre (& self, position: & Position) -> (f32, f32)
    {
        (
            (position.col() as f32 + 0.5) * self.cell_size,
            (position.row() as f32 + 0.5) * self.cell_size
        )
    }

    ///
    /// Returns the top-left pixel at which an icon is drawn so that it sits centred in its cell.
    ///
    pub fn icon_origin (& self, position: & Position) -> (f32, f32)
    {
        let inset = ((self.cell_size - self.icon_size) / 2.0).floor();
        (
            position.col() as f32 * self.cell_size + inset,
            position.row() as f32 * self.cell_size + inset
        )
    }

    ///
    /// Returns the cell under a pointer.
    ///
    pub fn position_at (& self, x: f32, y: f32) -> Position 
    {
        Position::from_pixel(x, y, self.cell_size)
    }
}
