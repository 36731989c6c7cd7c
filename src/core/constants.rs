// Engine defaults and tuning constants shared by the grid, tracker and overlays.

// Construction defaults
pub const DEFAULT_RADIUS_PX: f32 = 300.0; // vignette radius
pub const DEFAULT_DAMPING_SEC: f64 = 0.45; // tracker transition duration
pub const DEFAULT_FADE_OUT_SEC: f64 = 0.6; // blanket reveal on pointer leave
pub const DEFAULT_EASE: &str = "power3.out";

// Fixed blanket hide duration on pointer enter/move (fast, unlike the reveal)
pub const FADE_HIDE_SEC: f64 = 0.25;
// Blanket is fully visible until the pointer first moves over the grid
pub const FADE_INITIAL_OPACITY: f32 = 1.0;

// Positions closer than this are treated as converged
pub const CONVERGE_EPSILON_PX: f32 = 1e-3;

// Frames to poll for layout before waiting on pointer/resize events instead
pub const MEASURE_POLL_FRAMES: u32 = 120;

// Card presentation fallbacks
pub const DEFAULT_BORDER_COLOR: &str = "#fde047";
pub const SPOTLIGHT_COLOR: &str = "rgba(250, 204, 21, 0.35)";
pub const SPOTLIGHT_FALLOFF_PCT: f32 = 70.0;

// Vignette mask: transparent core ramping to opaque at the radius.
// (offset %, r, g, b, alpha)
pub const VIGNETTE_STOPS: [(f32, u8, u8, u8, f32); 8] = [
    (0.0, 0, 0, 0, 0.0),
    (15.0, 0, 0, 0, 0.0),
    (30.0, 0, 0, 0, 0.04),
    (45.0, 0, 0, 0, 0.08),
    (60.0, 0, 0, 0, 0.12),
    (75.0, 0, 0, 0, 0.18),
    (88.0, 0, 0, 0, 0.26),
    (100.0, 255, 255, 255, 1.0),
];

// Fade blanket mask: the inverse ramp, opaque core fading out at the radius.
pub const BLANKET_STOPS: [(f32, u8, u8, u8, f32); 8] = [
    (0.0, 255, 255, 255, 1.0),
    (15.0, 255, 255, 255, 1.0),
    (30.0, 255, 255, 255, 0.92),
    (45.0, 255, 255, 255, 0.85),
    (60.0, 255, 255, 255, 0.72),
    (75.0, 255, 255, 255, 0.55),
    (88.0, 255, 255, 255, 0.36),
    (100.0, 0, 0, 0, 0.0),
];
