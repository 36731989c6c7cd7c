//! Radial mask descriptors for the vignette and the fade blanket.
//!
//! Both layers share a centre (the tracked position) and a radius. The
//! vignette is clear at the centre and opaque at the radius, obscuring what
//! lies outside; the blanket carries the inverse ramp and is faded as a
//! whole by [`crate::core::fade::FadeBlanket`].

use crate::core::constants::{BLANKET_STOPS, VIGNETTE_STOPS};
use glam::Vec2;
use smallvec::SmallVec;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Rgba,
    /// Offset along the radius, percent.
    pub offset_pct: f32,
}

pub type StopList = SmallVec<[GradientStop; 8]>;

fn stops_from(table: &[(f32, u8, u8, u8, f32)]) -> StopList {
    table
        .iter()
        .map(|&(offset_pct, r, g, b, a)| GradientStop {
            color: Rgba { r, g, b, a },
            offset_pct,
        })
        .collect()
}

/// Circular gradient centred at `center` with the given radius.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialMask {
    pub center: Vec2,
    pub radius: f32,
    pub stops: StopList,
}

impl RadialMask {
    /// CSS `radial-gradient(...)` suitable for `mask-image`.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "radial-gradient(circle {:.2}px at {:.2}px {:.2}px",
            self.radius, self.center.x, self.center.y
        );
        for s in &self.stops {
            let c = s.color;
            _ = write!(
                css,
                ", rgba({}, {}, {}, {}) {}%",
                c.r, c.g, c.b, c.a, s.offset_pct
            );
        }
        css.push(')');
        css
    }

    /// Mask alpha at `point`, interpolated between the stops. Beyond the
    /// last stop the last colour extends, as in CSS.
    pub fn alpha_at(&self, point: Vec2) -> f32 {
        let Some(first) = self.stops.first() else {
            return 0.0;
        };
        if self.radius <= 0.0 {
            return self.stops.last().map_or(0.0, |s| s.color.a);
        }
        let pct = point.distance(self.center) / self.radius * 100.0;
        if pct <= first.offset_pct {
            return first.color.a;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if pct <= b.offset_pct {
                let span = b.offset_pct - a.offset_pct;
                if span <= 0.0 {
                    return b.color.a;
                }
                let t = (pct - a.offset_pct) / span;
                return a.color.a + (b.color.a - a.color.a) * t;
            }
        }
        self.stops.last().map_or(0.0, |s| s.color.a)
    }
}

/// One frame's worth of mask output.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskFrame {
    pub vignette: RadialMask,
    pub blanket: RadialMask,
}

#[derive(Clone, Debug)]
pub struct MaskRenderer {
    radius: f32,
    vignette_stops: StopList,
    blanket_stops: StopList,
}

impl MaskRenderer {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            vignette_stops: stops_from(&VIGNETTE_STOPS),
            blanket_stops: stops_from(&BLANKET_STOPS),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn render(&self, center: Vec2) -> MaskFrame {
        MaskFrame {
            vignette: RadialMask {
                center,
                radius: self.radius,
                stops: self.vignette_stops.clone(),
            },
            blanket: RadialMask {
                center,
                radius: self.radius,
                stops: self.blanket_stops.clone(),
            },
        }
    }
}
