//! Game configuration.
//!
//! The only externally meaningful knobs are the supported pair counts and
//! the symbol alphabet. Timing delays live here too so the UI contract
//! (how long both faces stay visible) is a named value rather than a
//! literal buried in the session.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! pair_counts = [3, 6, 10]
//! symbols = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
//!
//! [timing]
//! match_delay_ms = 500
//! flip_back_delay_ms = 1000
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{MemoryError, Result};

/// Pair counts offered to the player.
pub const DEFAULT_PAIR_COUNTS: [usize; 3] = [3, 6, 10];

/// Default symbol alphabet. Longer than the largest default pair count,
/// so every symbol appears exactly twice in a default deck.
pub const DEFAULT_SYMBOLS: [&str; 12] = [
    "🍎", "🍌", "🍇", "🍓", "🍒", "🍍", "🥝", "🍉", "🍋", "🍑", "🥥", "🍐",
];

/// Period of the elapsed-time timer. Fixed, so `elapsed_seconds` counts
/// real seconds.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Delays driving the session's scheduled tasks, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between the second selection and match evaluation.
    pub match_delay_ms: u64,

    /// How long a mismatched pair stays face-up after evaluation.
    pub flip_back_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            match_delay_ms: 500,
            flip_back_delay_ms: 1000,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    #[must_use]
    pub fn flip_back_delay(&self) -> Duration {
        Duration::from_millis(self.flip_back_delay_ms)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pair counts a session may be configured with.
    pub pair_counts: Vec<usize>,

    /// Symbol alphabet, used cyclically when a deck needs more pairs
    /// than there are symbols.
    pub symbols: Vec<String>,

    /// Scheduled task delays.
    pub timing: TimingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_counts: DEFAULT_PAIR_COUNTS.to_vec(),
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            timing: TimingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the supported pair counts.
    #[must_use]
    pub fn with_pair_counts(mut self, pair_counts: Vec<usize>) -> Self {
        self.pair_counts = pair_counts;
        self
    }

    /// Replace the symbol alphabet.
    #[must_use]
    pub fn with_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the timing configuration.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Is `pair_count` one of the supported values?
    #[must_use]
    pub fn supports(&self, pair_count: usize) -> bool {
        self.pair_counts.contains(&pair_count)
    }

    /// Reject a pair count outside the supported set.
    pub fn check_pair_count(&self, pair_count: usize) -> Result<()> {
        if self.supports(pair_count) {
            Ok(())
        } else {
            Err(MemoryError::InvalidConfiguration {
                pair_count,
                supported: self.pair_counts.clone(),
            })
        }
    }

    /// Glyph for a symbol index, wrapping around the alphabet.
    #[must_use]
    pub fn glyph(&self, symbol: usize) -> &str {
        if self.symbols.is_empty() {
            return "";
        }
        &self.symbols[symbol % self.symbols.len()]
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.pair_counts.is_empty() {
            return Err(MemoryError::config("pair_counts", "must not be empty"));
        }
        if self.pair_counts.contains(&0) {
            return Err(MemoryError::config("pair_counts", "pair counts must be positive"));
        }
        if self.symbols.is_empty() {
            return Err(MemoryError::config("symbols", "must not be empty"));
        }
        if self.symbols.len() > usize::from(u16::MAX) + 1 {
            return Err(MemoryError::config("symbols", "at most 65536 symbols supported"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to a TOML file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
