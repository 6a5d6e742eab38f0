//! Assistant settings.
//!
//! Defaults match a desktop session: depth 15, a quarter second between the
//! two clicks of a move, piece-density orientation, no extra validation.
//! Every value can be overridden from the environment:
//!
//! ```bash
//! CHESSASSIST_DEPTH=20 CHESSASSIST_ORIENTATION=king chessassist
//! ```

use crate::fen::Orientation;
use crate::types::Depth;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const ENV_DEPTH: &str = "CHESSASSIST_DEPTH";
pub const ENV_CLICK_PAUSE_MS: &str = "CHESSASSIST_CLICK_PAUSE_MS";
pub const ENV_ORIENTATION: &str = "CHESSASSIST_ORIENTATION";
pub const ENV_VALIDATE: &str = "CHESSASSIST_VALIDATE";

/// Default pause between the origin and destination clicks
pub const DEFAULT_CLICK_PAUSE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Engine search depth
    pub depth: Depth,
    /// Pause between the two clicks of a replayed move
    pub click_pause: Duration,
    /// Orientation decision used by the normalizer
    pub orientation: Orientation,
    /// Check positions with the `chess` crate before searching
    pub validate: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            depth: Depth::default(),
            click_pause: DEFAULT_CLICK_PAUSE,
            orientation: Orientation::default(),
            validate: false,
        }
    }
}

impl AssistantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(d) = parse_var::<i32, _>(&lookup, ENV_DEPTH) {
            config.depth = Depth::new(d).clamped();
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, ENV_CLICK_PAUSE_MS) {
            config.click_pause = Duration::from_millis(ms);
        }
        if let Some(o) = parse_var::<Orientation, _>(&lookup, ENV_ORIENTATION) {
            config.orientation = o;
        }
        if let Some(v) = lookup(ENV_VALIDATE) {
            config.validate = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        config
    }

    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth.clamped();
        self
    }

    pub fn with_click_pause(mut self, pause: Duration) -> Self {
        self.click_pause = pause;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::from_lookup(|_| None);
        assert_eq!(config, AssistantConfig::default());
        assert_eq!(config.depth, Depth::new(15));
        assert_eq!(config.click_pause, Duration::from_millis(250));
        assert_eq!(config.orientation, Orientation::PieceDensity);
        assert!(!config.validate);
    }

    #[test]
    fn test_overrides() {
        let config = AssistantConfig::from_lookup(lookup(&[
            (ENV_DEPTH, "22"),
            (ENV_CLICK_PAUSE_MS, "100"),
            (ENV_ORIENTATION, "king"),
            (ENV_VALIDATE, "true"),
        ]));
        assert_eq!(config.depth, Depth::new(22));
        assert_eq!(config.click_pause, Duration::from_millis(100));
        assert_eq!(config.orientation, Orientation::KingOnHomeRank);
        assert!(config.validate);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = AssistantConfig::from_lookup(lookup(&[
            (ENV_DEPTH, "deep"),
            (ENV_CLICK_PAUSE_MS, "-5"),
            (ENV_ORIENTATION, "sideways"),
        ]));
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_depth_clamped() {
        let config = AssistantConfig::from_lookup(lookup(&[(ENV_DEPTH, "1000")]));
        assert_eq!(config.depth, Depth::MAX);
        assert_eq!(AssistantConfig::new().with_depth(Depth::new(0)).depth, Depth::ONE);
    }
}
