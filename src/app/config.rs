//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::config_file::ConfigFile;
use crate::core::ThemeId;
use crate::store::FileStore;

/// Process exit codes
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error
    pub const ERROR: i32 = 2;
    /// Unknown option or invalid value
    pub const INVALID: i32 = 3;
}

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Directory holding the stored bookmarks and theme
    pub data_dir: PathBuf,
    /// JSON file replacing the built-in default bookmarks
    pub defaults_path: Option<PathBuf>,
    /// Theme to persist before starting
    pub theme: Option<ThemeId>,
    /// Remove stored data and exit
    pub reset: bool,
    /// Print the tab collection and exit
    pub list: bool,
    /// Print the rendered document and exit
    pub dump: bool,
    /// Enable mouse support (from config file, `--no-mouse` overrides)
    pub mouse_enabled: bool,
    /// Show the clock in the status bar (from config file)
    pub show_clock: bool,
    /// Clock refresh interval (from config file)
    pub clock_interval: Duration,
}

impl Config {
    /// Parse the process arguments merged over the config file
    pub fn from_args() -> anyhow::Result<Self> {
        Self::parse(env::args().skip(1), ConfigFile::load())
    }

    /// Parse `args` (program name excluded) on top of `file`
    pub fn parse<I>(args: I, file: ConfigFile) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let mut data_dir: Option<PathBuf> = None;
        let mut defaults_path: Option<PathBuf> = None;
        let mut theme: Option<ThemeId> = None;
        let mut reset = false;
        let mut list = false;
        let mut dump = false;
        let mut no_mouse = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" | "-d" => {
                    if let Some(dir) = args.next() {
                        data_dir = Some(PathBuf::from(dir));
                    } else {
                        anyhow::bail!("--data-dir requires a directory");
                    }
                }
                "--defaults" => {
                    if let Some(path) = args.next() {
                        defaults_path = Some(PathBuf::from(path));
                    } else {
                        anyhow::bail!("--defaults requires a file path");
                    }
                }
                "--theme" => {
                    if let Some(value) = args.next() {
                        theme = Some(ThemeId::from_str(&value).map_err(|_| {
                            anyhow::anyhow!(
                                "Invalid theme '{}'. Valid themes: white, g10, g90, g100",
                                value
                            )
                        })?);
                    } else {
                        anyhow::bail!("--theme requires a value (white, g10, g90, or g100)");
                    }
                }
                "--reset" => reset = true,
                "--list" | "-l" => list = true,
                "--dump" => dump = true,
                "--no-mouse" => no_mouse = true,
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("linkdeck {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                other => anyhow::bail!("Unknown option: {}", other),
            }
        }

        // CLI > config file > platform default
        let data_dir = match data_dir.or(file.storage.data_dir) {
            Some(dir) => dir,
            None => FileStore::default_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory"))?,
        };

        Ok(Self {
            data_dir,
            defaults_path: defaults_path.or(file.storage.defaults_path),
            theme,
            reset,
            list,
            dump,
            mouse_enabled: file.general.mouse_enabled && !no_mouse,
            show_clock: file.general.show_clock,
            clock_interval: Duration::from_secs(file.general.clock_interval_secs.max(1)),
        })
    }
}

fn print_help() {
    println!(
        r#"linkdeck - A tabbed bookmark dashboard for the terminal

USAGE:
    linkdeck [OPTIONS]

OPTIONS:
    -d, --data-dir DIR  Storage directory (default: <data dir>/linkdeck)
    --defaults FILE     JSON file replacing the built-in bookmarks
    --theme ID          Save theme before starting: white, g10, g90, g100
    --reset             Remove stored bookmarks and theme, then exit
    -l, --list          Print the stored tabs and exit
    --dump              Print the rendered document and exit
    --no-mouse          Disable mouse support
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/linkdeck/config.toml

ENVIRONMENT:
    LINKDECK_LOG        Log filter (e.g. debug); logs go to <data dir>/linkdeck.log

KEYBINDINGS:
    ←/→, h/l, Tab       Switch tab
    1-9                 Jump to tab
    ↑/↓, j/k            Move focus
    Enter/Space         Activate focused control
    t                   Theme picker
    y                   Copy link URL
    ?                   Show help
    q/Esc               Quit

EXIT CODES:
    0           Success
    2           Error (runtime error)
    3           Invalid arguments (unknown option or invalid value)
"#
    );
}
