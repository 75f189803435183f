//! Client configuration read from the environment.
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use encounter_content::SceneId;

/// Runtime options for one campaign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Dice seed. Replaying a seed with the same answers replays the campaign.
    pub seed: u64,
    /// Let the aggressive AI drive the party.
    pub autoplay: bool,
    pub start_scene: SceneId,
    /// Wait for Enter after every report.
    pub pause: bool,
    /// Also write logs to a daily file under the platform cache directory.
    pub log_file: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            autoplay: false,
            start_scene: SceneId::Start,
            pause: false,
            log_file: false,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MK_SEED` - dice seed (default: current time)
    /// - `MK_AUTOPLAY` - `true` to let the AI play the party (default: false)
    /// - `MK_START_SCENE` - `start` or `last` (default: start)
    /// - `MK_PAUSE` - `true` to wait for Enter after reports (default: false)
    /// - `MK_LOG_FILE` - `true` to add a rolling log file (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64>(&lookup, "MK_SEED") {
            config.seed = seed;
        }
        if let Some(autoplay) = read_var::<bool>(&lookup, "MK_AUTOPLAY") {
            config.autoplay = autoplay;
        }
        if let Some(scene) = read_var::<SceneId>(&lookup, "MK_START_SCENE") {
            config.start_scene = scene;
        }
        if let Some(pause) = read_var::<bool>(&lookup, "MK_PAUSE") {
            config.pause = pause;
        }
        if let Some(log_file) = read_var::<bool>(&lookup, "MK_LOG_FILE") {
            config.log_file = log_file;
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "ignoring unparseable environment variable");
    }
    parsed
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_every_variable() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MK_SEED", "42"),
            ("MK_AUTOPLAY", "true"),
            ("MK_START_SCENE", "last"),
            ("MK_PAUSE", "true"),
            ("MK_LOG_FILE", "true"),
        ]));

        assert_eq!(
            config,
            ClientConfig {
                seed: 42,
                autoplay: true,
                start_scene: SceneId::Last,
                pause: true,
                log_file: true,
            }
        );
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("MK_SEED", "7"),
            ("MK_AUTOPLAY", "yes please"),
            ("MK_START_SCENE", "600"),
        ]));

        assert_eq!(config.seed, 7);
        assert!(!config.autoplay);
        assert_eq!(config.start_scene, SceneId::Start);
        assert!(!config.pause);
    }
}
