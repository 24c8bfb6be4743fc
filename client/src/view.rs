
use coffee::{Game, Timer};
use coffee::graphics::{Color, Frame, Gpu, Image, Mesh, Point, Quad, Rectangle, Shape, Window};
use coffee::load::Task;
use coffee::ui::{Column, Element, Renderer, Text, UserInterface};

use lazy_static::lazy_static;

use std::sync::Mutex;

use super::config::{AssetConfig, Config};
use super::states::InputState;

use tictactoe::{DrawCommand, Layout, Rgb, Symbol};
use utils::*;

lazy_static!
{
    static ref CONFIG : Mutex<Config> = Mutex::new(Config::default());
}

///
/// Hands the configuration to the next call of View::load, which the engine 
/// invokes without any arguments of ours.
///
pub fn configure (config: & Config)
{
    * CONFIG.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = config.clone();
}

///
/// The messages produced by the interface. The banner is text only, so there are none.
///
#[derive(Clone, Copy, Debug)]
pub enum Message {}

///
/// The four mark icons, decoded once before the first frame.
///
pub struct MarkImages 
{
    x: Image,
    o: Image,
    x_transparent: Image,
    o_transparent: Image
}

impl MarkImages 
{
    ///
    /// Returns the icon for a player's mark, or for its translucent variant.
    ///
    pub fn get (& self, symbol: Symbol, translucent: bool) -> Option<& Image>
    {
        match (symbol, translucent)
        {
            (Symbol::X, false) => Some(& self.x),
            (Symbol::O, false) => Some(& self.o),
            (Symbol::X, true)  => Some(& self.x_transparent),
            (Symbol::O, true)  => Some(& self.o_transparent),
            _                  => None
        }
    }

    ///
    /// Decodes every icon; the first one that fails aborts the load.
    ///
    pub fn load (gpu: & mut Gpu, assets: & AssetConfig) -> coffee::Result<MarkImages>
    {
        Ok(MarkImages 
        {
            x: load_image(gpu, & assets.x)?,
            o: load_image(gpu, & assets.o)?,
            x_transparent: load_image(gpu, & assets.x_transparent)?,
            o_transparent: load_image(gpu, & assets.o_transparent)?
        })
    }
}

fn load_image (gpu: & mut Gpu, path: & str) -> coffee::Result<Image>
{
    Image::new(gpu, path).map_err(|err| 
    {
        error!("Failed to load image '{}': {:?}", path, err);
        err
    })
}

fn colour (rgb: Rgb) -> Color 
{
    Color::from_rgb_u32(rgb.0)
}

///
/// The window's game: a tic-tac-toe game plus the icons to draw it with.
///
/// Every frame the engine hands over the input, which advances the game, and 
/// then asks for a drawing, which is derived from the game without changing it.
///
pub struct View 
{
    game: tictactoe::Game,
    layout: Layout,
    images: MarkImages
}

impl View 
{
    ///
    /// Returns a fresh game under the configured rules.
    ///
    pub fn new (config: & Config, images: MarkImages) -> View 
    {
        View 
        {
            game: tictactoe::Game::new(config.rules),
            layout: Layout::default(),
            images
        }
    }
}

impl Game for View 
{
    type Input = InputState;
    type LoadingScreen = ();

    fn draw (& mut self, frame: & mut Frame, _timer: & Timer)
    {
        // Lines are batched into a mesh, which is flushed before each icon so 
        // that the drawing order of the commands is kept.

        let mut mesh = Mesh::new();
        let mut pending = false;

        for command in tictactoe::render(& self.game, & self.layout)
        {
            match command 
            {
                DrawCommand::Clear(rgb) => 
                {
                    frame.clear(colour(rgb));
                },
                DrawCommand::Line { from, to, width, colour: rgb } => 
                {
                    mesh.stroke(
                        Shape::Polyline 
                        {
                            points: vec![Point::new(from.0, from.1), Point::new(to.0, to.1)]
                        },
                        colour(rgb),
                        width 
                    );
                    pending = true;
                },
                DrawCommand::Mark { symbol, origin, size, translucent, .. } => 
                {
                    if pending 
                    {
                        mesh.draw(& mut frame.as_target());
                        mesh = Mesh::new();
                        pending = false;
                    }

                    if let Some(image) = self.images.get(symbol, translucent)
                    {
                        image.draw(
                            Quad 
                            {
                                source: Rectangle { x: 0.0, y: 0.0, width: 1.0, height: 1.0 },
                                position: Point::new(origin.0, origin.1),
                                size: (size, size)
                            },
                            & mut frame.as_target()
                        );
                    }
                },
                DrawCommand::Text { .. } => 
                {
                    // Laid out by the user interface on top of the frame.
                }
            }
        }

        if pending 
        {
            mesh.draw(& mut frame.as_target());
        }
    }

    fn interact (& mut self, input: & mut InputState, _window: & mut Window)
    {
        self.game.update(& input.frame_input(& self.layout));
    }

    fn load (_window: & Window) -> Task<View>
    {
        let config = CONFIG.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone();
        let assets = config.assets.clone();

        Task::using_gpu(move |gpu| MarkImages::load(gpu, & assets))
            .map(move |images| View::new(& config, images))
    }
}

impl UserInterface for View 
{
    type Renderer = Renderer;
    type Message = Message;

    fn layout (& mut self, _window: & Window) -> Element<Message>
    {
        let mut column = Column::new().padding(4);

        for command in tictactoe::render(& self.game, & self.layout)
        {
            if let DrawCommand::Text { content, colour: rgb, .. } = command 
            {
                column = column.push(Text::new(& content).size(16).color(colour(rgb)));
            }
        }

        column.into()
    }

    fn react (& mut self, message: Message, _window: & mut Window)
    {
        match message {}
    }
}
