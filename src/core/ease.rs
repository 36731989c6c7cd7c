//! Named easing curves.
//!
//! Names follow the `family.direction` convention used by web tween libraries
//! (`power3.out`, `sine.inOut`, `none`). Every curve maps `[0, 1]` onto
//! `[0, 1]` with `curve(0) = 0` and `curve(1) = 1`.

use crate::core::error::ConfigError;
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EaseDir {
    In,
    #[default]
    Out,
    InOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EaseFamily {
    Linear,
    /// Polynomial of the given power (`power1` is quadratic).
    Power(u8),
    Sine,
    Expo,
    Circ,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ease {
    pub family: EaseFamily,
    pub dir: EaseDir,
}

impl Ease {
    pub const LINEAR: Ease = Ease {
        family: EaseFamily::Linear,
        dir: EaseDir::Out,
    };

    pub const fn new(family: EaseFamily, dir: EaseDir) -> Self {
        Self { family, dir }
    }

    /// Evaluate the curve at normalized time `t`; input is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.dir {
            EaseDir::In => ease_in(self.family, t),
            EaseDir::Out => 1.0 - ease_in(self.family, 1.0 - t),
            EaseDir::InOut => {
                if t < 0.5 {
                    ease_in(self.family, t * 2.0) * 0.5
                } else {
                    1.0 - ease_in(self.family, (1.0 - t) * 2.0) * 0.5
                }
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::new(EaseFamily::Power(3), EaseDir::Out)
    }
}

#[inline]
fn ease_in(family: EaseFamily, t: f32) -> f32 {
    match family {
        EaseFamily::Linear => t,
        EaseFamily::Power(p) => t.powi(p as i32 + 1),
        EaseFamily::Sine => 1.0 - (t * PI * 0.5).cos(),
        EaseFamily::Expo => {
            if t <= 0.0 {
                0.0
            } else {
                2f32.powf(10.0 * (t - 1.0))
            }
        }
        EaseFamily::Circ => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
    }
}

impl FromStr for Ease {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        let (family_name, dir_name) = match trimmed.split_once('.') {
            Some((f, d)) => (f, Some(d)),
            None => (trimmed, None),
        };
        let family = match family_name.to_ascii_lowercase().as_str() {
            "none" | "linear" => return Ok(Ease::LINEAR),
            "power0" => EaseFamily::Linear,
            "power1" | "quad" => EaseFamily::Power(1),
            "power2" | "cubic" => EaseFamily::Power(2),
            "power3" | "quart" => EaseFamily::Power(3),
            "power4" | "quint" | "strong" => EaseFamily::Power(4),
            "sine" => EaseFamily::Sine,
            "expo" => EaseFamily::Expo,
            "circ" => EaseFamily::Circ,
            _ => return Err(ConfigError::UnknownEase(name.to_string())),
        };
        let dir = match dir_name {
            None => EaseDir::Out,
            Some(d) => match d.to_ascii_lowercase().as_str() {
                "in" => EaseDir::In,
                "out" => EaseDir::Out,
                "inout" => EaseDir::InOut,
                _ => return Err(ConfigError::UnknownEase(name.to_string())),
            },
        };
        Ok(Ease::new(family, dir))
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self.family {
            EaseFamily::Linear => return f.write_str("none"),
            EaseFamily::Power(p) => return write!(f, "power{}.{}", p, dir_name(self.dir)),
            EaseFamily::Sine => "sine",
            EaseFamily::Expo => "expo",
            EaseFamily::Circ => "circ",
        };
        write!(f, "{}.{}", family, dir_name(self.dir))
    }
}

fn dir_name(dir: EaseDir) -> &'static str {
    match dir {
        EaseDir::In => "in",
        EaseDir::Out => "out",
        EaseDir::InOut => "inOut",
    }
}
