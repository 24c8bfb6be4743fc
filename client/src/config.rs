
use std::fs::OpenOptions;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tictactoe::{Rules, Symbol};

use utils::error::Context;
use utils::*;

///
/// Represents a full client configuration.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default = "title")]
    pub title: String,

    #[serde(default)]
    pub rules: Rules,

    #[serde(default)]
    pub assets: AssetConfig,

    #[serde(default = "log_path")]
    pub log_path: String,

    #[serde(default = "log_level")]
    pub log_level: String
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config 
        {
            title: title(),
            rules: Rules::default(),
            assets: AssetConfig::default(),
            log_path: log_path(),
            log_level: log_level()
        }
    }
}

impl Config 
{
    ///
    /// Reads the configuration at the given path. A missing file is not an error and 
    /// yields None; an unreadable or malformed one is.
    ///
    pub fn load (path: & Path) -> Result<Option<Config>>
    {
        let context = format!("Failed to read configuration '{}'.", path.display());

        let mut config_str = String::new();
        match OpenOptions::new().read(true).open(path)
        {
            Ok(mut file) => 
            {
                file.read_to_string(& mut config_str).context(context.clone())?;
            },
            Err(err) if err.kind() == ErrorKind::NotFound => 
            {
                return Ok(None);
            },
            Err(err) => 
            {
                return Err(err).context(context.clone());
            }
        };

        let config : Config = toml::from_str(& config_str).context(context.clone())?;
        Ok(Some(config))
    }
}

///
/// The image files for the marks, relative to the working directory.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig 
{
    #[serde(default = "x_image")]
    pub x: String,

    #[serde(default = "o_image")]
    pub o: String,

    #[serde(default = "x_transparent_image")]
    pub x_transparent: String,

    #[serde(default = "o_transparent_image")]
    pub o_transparent: String
}

impl Default for AssetConfig 
{
    fn default () -> AssetConfig 
    {
        AssetConfig 
        {
            x: x_image(),
            o: o_image(),
            x_transparent: x_transparent_image(),
            o_transparent: o_transparent_image()
        }
    }
}

impl AssetConfig 
{
    ///
    /// Returns the image file for a player's mark, or for its translucent variant.
    ///
    pub fn path_for (& self, symbol: Symbol, translucent: bool) -> Option<& str>
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
}

fn title () -> String 
{
    "Tic-Tac-Toe".to_owned()
}

fn log_path () -> String 
{
    "logs".to_owned()
}

fn log_level () -> String 
{
    "info".to_owned()
}

fn x_image () -> String 
{
    "assets/x.png".to_owned()
}

fn o_image () -> String 
{
    "assets/o.png".to_owned()
}

fn x_transparent_image () -> String 
{
    "assets/x_transparent.png".to_owned()
}

fn o_transparent_image () -> String 
{
    "assets/o_transparent.png".to_owned()
}

#[cfg(test)]
mod tests 
{
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_none () 
    {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load(& dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_empty_file_is_all_defaults () 
    {
        let file = tempfile::NamedTempFile::new().unwrap();
        let loaded = Config::load(file.path()).unwrap();
        assert_eq!(loaded, Some(Config::default()));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults () 
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rules = \"classic\"").unwrap();
        writeln!(file, "[assets]").unwrap();
        writeln!(file, "x = \"skins/cross.png\"").unwrap();

        let config = Config::load(file.path()).unwrap().unwrap();
        assert_eq!(config.rules, Rules::Classic);
        assert_eq!(config.title, "Tic-Tac-Toe");
        assert_eq!(config.assets.x, "skins/cross.png");
        assert_eq!(config.assets.o, "assets/o.png");
        assert_eq!(config.log_path, "logs");
    }

    #[test]
    fn test_malformed_file_is_an_error () 
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rules = \"checkers\"").unwrap();
        assert!(Config::load(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = ").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_asset_paths () 
    {
        let assets = AssetConfig::default();
        assert_eq!(assets.path_for(Symbol::X, false), Some("assets/x.png"));
        assert_eq!(assets.path_for(Symbol::O, true), Some("assets/o_transparent.png"));
        assert_eq!(assets.path_for(Symbol::Empty, false), None);
    }
}
