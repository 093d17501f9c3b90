// User-tunable settings and their persistence as three independent
// key/value fields

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::JsValue;

pub const DEFAULT_NUM_CIRCLES: i32 = 10;
pub const MAX_NUM_CIRCLES: i32 = 1000;
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 240.0;
pub const DEFAULT_FADE_SPEED: f64 = 0.6;

pub const KEY_NUM_CIRCLES: &str = "BouncingSaver.NumCircles";
pub const KEY_SPEED: &str = "BouncingSaver.SpeedMultiplier";
pub const KEY_FADE: &str = "BouncingSaver.FadeSpeed";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub num_circles: i32,
    pub speed_multiplier: f64,
    pub fade_speed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SettingsError {
    NonPositiveCount(i32),
    TooManyCircles(i32),
    InvalidSpeed(f64),
    InvalidFadeSpeed(f64),
    Storage(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NonPositiveCount(n) => {
                write!(f, "number of circles must be positive, got {}", n)
            }
            SettingsError::TooManyCircles(n) => {
                write!(f, "number of circles must be at most {}, got {}", MAX_NUM_CIRCLES, n)
            }
            SettingsError::InvalidSpeed(v) => {
                write!(f, "speed multiplier must be finite and non-negative, got {}", v)
            }
            SettingsError::InvalidFadeSpeed(v) => {
                write!(f, "fade speed must be finite and non-negative, got {}", v)
            }
            SettingsError::Storage(msg) => write!(f, "settings storage failed: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<SettingsError> for JsValue {
    fn from(err: SettingsError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Somewhere the three settings fields can be kept between sessions.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

impl SettingsStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// Browser localStorage
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    pub fn local() -> Result<WebStorage, JsValue> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        let storage = window
            .local_storage()?
            .ok_or("localStorage is not available")?;
        Ok(WebStorage { storage })
    }
}

impl SettingsStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| SettingsError::Storage(format!("{:?}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            num_circles: DEFAULT_NUM_CIRCLES,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            fade_speed: DEFAULT_FADE_SPEED,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.num_circles <= 0 {
            return Err(SettingsError::NonPositiveCount(self.num_circles));
        }
        if self.num_circles > MAX_NUM_CIRCLES {
            return Err(SettingsError::TooManyCircles(self.num_circles));
        }
        if !is_valid_rate(self.speed_multiplier) {
            return Err(SettingsError::InvalidSpeed(self.speed_multiplier));
        }
        if !is_valid_rate(self.fade_speed) {
            return Err(SettingsError::InvalidFadeSpeed(self.fade_speed));
        }
        Ok(())
    }

    /// Starts from the defaults and takes every stored field that parses to
    /// a valid value. A missing or corrupt field leaves only that field at
    /// its default.
    pub fn load<S: SettingsStore>(store: &S) -> Settings {
        let mut settings = Settings::default();
        if let Some(n) = read::<i32, _>(store, KEY_NUM_CIRCLES).filter(|&n| is_valid_count(n)) {
            settings.num_circles = n;
        }
        if let Some(v) = read::<f64, _>(store, KEY_SPEED).filter(|&v| is_valid_rate(v)) {
            settings.speed_multiplier = v;
        }
        if let Some(v) = read::<f64, _>(store, KEY_FADE).filter(|&v| is_valid_rate(v)) {
            settings.fade_speed = v;
        }
        settings
    }

    pub fn save<S: SettingsStore>(&self, store: &mut S) -> Result<(), SettingsError> {
        self.validate()?;
        store.set(KEY_NUM_CIRCLES, &self.num_circles.to_string())?;
        store.set(KEY_SPEED, &self.speed_multiplier.to_string())?;
        store.set(KEY_FADE, &self.fade_speed.to_string())?;
        Ok(())
    }
}

fn is_valid_count(n: i32) -> bool {
    n > 0 && n <= MAX_NUM_CIRCLES
}

fn is_valid_rate(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn read<T: FromStr, S: SettingsStore>(store: &S, key: &str) -> Option<T> {
    store.get(key)?.trim().parse().ok()
}
