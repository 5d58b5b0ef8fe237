//! Client configuration.
//!
//! Values are fixed at build time. `CAR_RENTAL_API` overrides the backend
//! origin and `CAR_RENTAL_LOG` the console log level.

use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOGIN_PATH: &str = "login.html";
pub const DEFAULT_PLACEHOLDER_PHOTO: &str =
    "https://images.unsplash.com/photo-1549924231-f129b911e442?q=80&w=1600&auto=format&fit=crop";
pub const DEFAULT_CURRENCY: &str = "SAR";
pub const DEFAULT_SKELETON_COUNT: usize = 6;
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3200);

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub login_path: String,
    pub toast_duration: Duration,
    pub skeleton_count: usize,
    pub placeholder_photo: String,
    pub currency: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            toast_duration: DEFAULT_TOAST_DURATION,
            skeleton_count: DEFAULT_SKELETON_COUNT,
            placeholder_photo: DEFAULT_PLACEHOLDER_PHOTO.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("CAR_RENTAL_API"), option_env!("CAR_RENTAL_LOG"))
    }

    pub fn from_overrides(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(api) = api_base.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base = api.trim_end_matches('/').to_string();
        }

        if let Some(level) = log_level
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<LevelFilter>().ok())
        {
            config.log_level = level;
        }

        config
    }

    /// Absolute URL for an API path such as `/cars`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn toast_millis(&self) -> u32 {
        u32::try_from(self.toast_duration.as_millis()).unwrap_or(u32::MAX)
    }
}
