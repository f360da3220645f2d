//! Demo configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use skirmish_core::GameConfig;

/// Largest faction size the demo can name with single-letter pseudos.
pub const MAX_FACTION_SIZE: u32 = 26;

/// Configuration for one demo run.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub game: GameConfig,
    pub wolves: u32,
    pub villagers: u32,
    /// Placement seed; random when unset.
    pub seed: Option<u64>,
    pub game_id: String,
    /// Store snapshots on disk instead of in memory.
    pub persist: bool,
    pub save_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub dump_json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            wolves: 2,
            villagers: 2,
            seed: None,
            game_id: default_game_id(),
            persist: false,
            save_dir: None,
            log_dir: None,
            dump_json: false,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_WIDTH` / `SKIRMISH_HEIGHT` - Board size (default: 10 x 5)
    /// - `SKIRMISH_TURN_LIMIT` - Turns before the game ends (default: 10)
    /// - `SKIRMISH_MAX_PLAYERS` - Player cap (default: 8)
    /// - `SKIRMISH_WOLVES` / `SKIRMISH_VILLAGERS` - Faction sizes (default: 2 each, at most 26)
    /// - `SKIRMISH_SEED` - Placement seed (default: random)
    /// - `SKIRMISH_GAME_ID` - Snapshot key (default: timestamp based)
    /// - `SKIRMISH_PERSIST` - Store snapshots on disk (default: false)
    /// - `SKIRMISH_SAVE_DIR` - Snapshot directory; implies persistence (default: platform data dir)
    /// - `SKIRMISH_LOG_DIR` - Also write logs to this directory (default: stderr only)
    /// - `SKIRMISH_DUMP_JSON` - Print the final snapshot as JSON (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env("SKIRMISH_WIDTH") {
            config.game.width = width;
        }
        if let Some(height) = read_env("SKIRMISH_HEIGHT") {
            config.game.height = height;
        }
        if let Some(turn_limit) = read_env("SKIRMISH_TURN_LIMIT") {
            config.game.turn_limit = turn_limit;
        }
        if let Some(max_players) = read_env("SKIRMISH_MAX_PLAYERS") {
            config.game.max_players = max_players;
        }
        if let Some(wolves) = read_env::<u32>("SKIRMISH_WOLVES") {
            config.wolves = wolves.min(MAX_FACTION_SIZE);
        }
        if let Some(villagers) = read_env::<u32>("SKIRMISH_VILLAGERS") {
            config.villagers = villagers.min(MAX_FACTION_SIZE);
        }

        config.seed = read_env("SKIRMISH_SEED");
        if let Ok(game_id) = env::var("SKIRMISH_GAME_ID") {
            config.game_id = game_id;
        }

        config.save_dir = env::var("SKIRMISH_SAVE_DIR").ok().map(PathBuf::from);
        config.persist = read_env("SKIRMISH_PERSIST").unwrap_or(false) || config.save_dir.is_some();
        config.log_dir = env::var("SKIRMISH_LOG_DIR").ok().map(PathBuf::from);
        config.dump_json = read_env("SKIRMISH_DUMP_JSON").unwrap_or(false);

        config
    }

    /// Where file snapshots go when persistence is enabled.
    pub fn snapshot_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(data_dir)
    }
}

/// Platform-specific data directory for saved games.
///
/// - macOS: `~/Library/Application Support/skirmish`
/// - Linux: `~/.local/share/skirmish` (or `$XDG_DATA_HOME/skirmish`)
/// - Windows: `%APPDATA%\skirmish`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "skirmish")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn default_game_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("game_{timestamp}")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
