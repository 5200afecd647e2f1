use crate::route::Route;
use log::{info, warn};
use std::{env, fmt::Display, str::FromStr, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Latte,
    Frappe,
    Macchiato,
    Mocha,
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latte" => Ok(Theme::Latte),
            "frappe" => Ok(Theme::Frappe),
            "macchiato" => Ok(Theme::Macchiato),
            "mocha" => Ok(Theme::Mocha),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {other:?}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub toast_duration: Duration,
    pub window_width: f32,
    pub window_height: f32,
    pub start_route: Route,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Latte,
            toast_duration: Duration::from_secs(4),
            window_width: 1100.0,
            window_height: 760.0,
            start_route: Route::Home,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; missing or malformed
    /// values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let toast_secs: u64 = try_load(&lookup, "TOWNSQUARE_TOAST_SECS", 4);
        Self {
            theme: try_load(&lookup, "TOWNSQUARE_THEME", defaults.theme),
            toast_duration: Duration::from_secs(toast_secs.max(1)),
            window_width: try_load(&lookup, "TOWNSQUARE_WINDOW_WIDTH", defaults.window_width),
            window_height: try_load(&lookup, "TOWNSQUARE_WINDOW_HEIGHT", defaults.window_height),
            start_route: lookup("TOWNSQUARE_START_ROUTE")
                .map(|path| Route::from_path(&path))
                .unwrap_or(defaults.start_route),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default:?}");
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default:?}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.theme, Theme::Latte);
        assert_eq!(config.toast_duration, Duration::from_secs(4));
        assert_eq!(config.window_width, 1100.0);
        assert_eq!(config.start_route, Route::Home);
    }

    #[test]
    fn values_are_parsed() {
        let config = config_from(&[
            ("TOWNSQUARE_THEME", "Mocha"),
            ("TOWNSQUARE_TOAST_SECS", "10"),
            ("TOWNSQUARE_WINDOW_HEIGHT", "900"),
            ("TOWNSQUARE_START_ROUTE", "/polls"),
        ]);
        assert_eq!(config.theme, Theme::Mocha);
        assert_eq!(config.toast_duration, Duration::from_secs(10));
        assert_eq!(config.window_height, 900.0);
        assert_eq!(config.start_route, Route::Polls);
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = config_from(&[
            ("TOWNSQUARE_THEME", "neon"),
            ("TOWNSQUARE_TOAST_SECS", "soon"),
            ("TOWNSQUARE_WINDOW_WIDTH", "wide"),
            ("TOWNSQUARE_START_ROUTE", "/nowhere"),
        ]);
        assert_eq!(config.theme, Theme::Latte);
        assert_eq!(config.toast_duration, Duration::from_secs(4));
        assert_eq!(config.window_width, 1100.0);
        assert_eq!(config.start_route, Route::NotFound);
    }
}
