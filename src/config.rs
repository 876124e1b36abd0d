use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::Point;

macro_rules! impl_config {
    ($($name:ident: $type:ty = $value:expr),* $(,)*) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Config {
            $(
                pub $name: $type
            ),*
        }

        impl Default for Config {
            fn default() -> Config {
                Config {
                    $(
                        $name: $value
                    ),*
                }
            }
        }

        impl Config {
            pub fn from_json(json: &Value) -> Result<Config> {
                if !json.is_object() {
                    return Err(Error::InvalidConfig("config must be a JSON object".into()));
                }
                let config = Config {
                    $(
                        $name: get_or_default!(json,
                                               &stringify!($name).to_uppercase(),
                                               $value)
                    ),*
                };
                config.validate()?;
                Ok(config)
            }
        }
    };
}

macro_rules! get_or_default {
    ($json:ident, $key:expr, $default_value:expr) => {
        match $json.get($key) {
            Some(value) => FromValue::from_value($key, value)?,
            None => $default_value,
        }
    };
}

trait FromValue: Sized {
    fn from_value(key: &str, value: &Value) -> Result<Self>;
}

macro_rules! impl_from_value {
    ($type:ty, $method:ident) => {
        impl FromValue for $type {
            fn from_value(key: &str, value: &Value) -> Result<$type> {
                value.$method().ok_or_else(|| {
                    Error::InvalidConfig(format!("{} must be {}, got {}", key, stringify!($type), value))
                })
            }
        }
    };
}

impl_from_value!(i64, as_i64);
impl_from_value!(u64, as_u64);
impl_from_value!(f64, as_f64);

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(key: &str, value: &Value) -> Result<Option<T>> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(key, value).map(Some)
        }
    }
}

impl_config! {
    arena_width: f64 = 800.0,
    arena_height: f64 = 500.0,
    gravity: f64 = 1800.0,
    restitution: f64 = 0.8,
    fps: i64 = 60,
    min_radius: f64 = 15.0,
    max_radius: f64 = 30.0,
    separation_epsilon: f64 = 1.0,
    resolution_passes: i64 = 1,
    max_speed: f64 = 1500.0,
    seed: Option<u64> = None,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let reals = [
            ("ARENA_WIDTH", self.arena_width),
            ("ARENA_HEIGHT", self.arena_height),
            ("GRAVITY", self.gravity),
            ("RESTITUTION", self.restitution),
            ("MIN_RADIUS", self.min_radius),
            ("MAX_RADIUS", self.max_radius),
            ("SEPARATION_EPSILON", self.separation_epsilon),
            ("MAX_SPEED", self.max_speed),
        ];
        for &(key, value) in reals.iter() {
            if !value.is_finite() {
                return invalid(format!("{} must be finite", key));
            }
        }
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return invalid("ARENA_WIDTH and ARENA_HEIGHT must be > 0".into());
        }
        if self.gravity < 0.0 {
            return invalid("GRAVITY must be >= 0".into());
        }
        if !(self.restitution > 0.0 && self.restitution < 1.0) {
            return invalid("RESTITUTION must be in (0, 1)".into());
        }
        if self.fps < 0 {
            return invalid("FPS must be >= 0".into());
        }
        if self.min_radius <= 0.0 || self.max_radius < self.min_radius {
            return invalid("radius range must satisfy 0 < MIN_RADIUS <= MAX_RADIUS".into());
        }
        if 2.0 * self.max_radius > self.arena_width.min(self.arena_height) {
            return invalid("MAX_RADIUS does not fit the arena".into());
        }
        if self.separation_epsilon <= 0.0 {
            return invalid("SEPARATION_EPSILON must be > 0".into());
        }
        if self.resolution_passes < 1 {
            return invalid("RESOLUTION_PASSES must be >= 1".into());
        }
        if self.max_speed <= 0.0 {
            return invalid("MAX_SPEED must be > 0".into());
        }
        Ok(())
    }

    pub fn center(&self) -> Point {
        Point::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    pub fn frame_duration(&self) -> Option<f64> {
        if self.fps > 0 {
            Some(1.0 / self.fps as f64)
        } else {
            None
        }
    }
}

fn invalid(message: String) -> Result<()> {
    Err(Error::InvalidConfig(message))
}
