use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON events fixture to lay out
    pub events_path: String,
    /// Vertical scale of the printed grid, in pixels per hour
    pub hour_height: f64,
}

impl Config {
    pub fn new() -> Self {
        let default_events_path = "events.json";
        let events_path = match std::env::var("ALMANAC_EVENTS_PATH") {
            Ok(path) => path,
            Err(_) => {
                info!(
                    "Did not find ALMANAC_EVENTS_PATH environment variable. Using the default: {}.",
                    default_events_path
                );
                default_events_path.to_string()
            }
        };

        let default_hour_height = 60.0;
        let hour_height = match std::env::var("ALMANAC_HOUR_HEIGHT") {
            Ok(height) => match height.parse::<f64>() {
                Ok(height) if height > 0.0 => height,
                _ => {
                    warn!(
                        "The given ALMANAC_HOUR_HEIGHT: {} is not valid, falling back to the default: {}.",
                        height, default_hour_height
                    );
                    default_hour_height
                }
            },
            Err(_) => default_hour_height,
        };

        Self {
            events_path,
            hour_height,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
