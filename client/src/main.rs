
mod config;
mod states;
mod view;

use std::path::Path;

use clap::Parser;

use coffee::graphics::WindowSettings;
use coffee::ui::UserInterface;

use tictactoe::{Layout, Rules};
use utils::notate::Notate;
use utils::*;

///
/// A structure representing command line arguments.
///
#[derive(Parser)]
struct CLIArgs 
{
    #[clap(short, long, default_value = "config/client.toml")]
    config: String,

    #[clap(short, long)]
    rules: Option<String>
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();

    let loaded = config::Config::load(Path::new(& args.config))?;
    let missing = loaded.is_none();
    let mut config = loaded.unwrap_or_default();

    if let Some(rules) = & args.rules 
    {
        config.rules = Rules::parse(rules)?;
    }

    let _logger = log::initialize(& config.log_path, "client", & config.log_level)?;
    if missing 
    {
        warn!("No configuration found at '{}'; using defaults.", args.config);
    }
    info!("Starting '{}' under {} rules.", config.title, config.rules);

    view::configure(& config);

    let side = Layout::default().canvas_size() as u32;
    let settings = WindowSettings 
    {
        title: config.title.clone(),
        size: (side, side),
        resizable: false,
        fullscreen: false,
        maximized: false
    };

    if let Err(err) = <view::View as UserInterface>::run(settings)
    {
        error!("The game stopped with an error: {:?}", err);
        return Err(error::error!("The game stopped with an error: {:?}", err));
    }

    info!("Window closed.");
    Ok(())
}
