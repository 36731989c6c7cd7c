/// DOM-facing names and fixed inline styles.
///
/// Custom property names are the contract with page stylesheets; class names
/// let the host restyle the generated markup.
// Grid-level coordinate channels and radius
pub const VAR_X: &str = "--x";
pub const VAR_Y: &str = "--y";
pub const VAR_RADIUS: &str = "--r";

// Per-card coordinate channels
pub const VAR_MOUSE_X: &str = "--mouse-x";
pub const VAR_MOUSE_Y: &str = "--mouse-y";
pub const VAR_SPOTLIGHT_COLOR: &str = "--spotlight-color";

// Classes
pub const CLASS_ROOT: &str = "chroma-grid";
pub const CLASS_CARD: &str = "chroma-card";
pub const CLASS_SPOTLIGHT: &str = "chroma-spotlight";
pub const CLASS_IMG_WRAPPER: &str = "chroma-img-wrapper";
pub const CLASS_INFO: &str = "chroma-info";
pub const CLASS_HANDLE: &str = "chroma-handle";
pub const CLASS_LOCATION: &str = "chroma-location";
pub const CLASS_OVERLAY: &str = "chroma-overlay";
pub const CLASS_FADE: &str = "chroma-fade";

// Root container layout; wrapping itself is left to flexbox.
pub const ROOT_STYLE: &[(&str, &str)] = &[
    ("position", "relative"),
    ("width", "100%"),
    ("height", "100%"),
    ("display", "flex"),
    ("flex-wrap", "wrap"),
    ("justify-content", "center"),
    ("align-items", "flex-start"),
    ("gap", "0.75rem"),
];

pub const CARD_STYLE: &str = "position:relative;display:flex;flex-direction:column;width:300px;border-radius:20px;overflow:hidden;border:2px solid;cursor:pointer;transition:transform 300ms,box-shadow 300ms;";
pub const SPOTLIGHT_STYLE: &str = "position:absolute;inset:0;pointer-events:none;z-index:20;opacity:0;";
pub const IMG_WRAPPER_STYLE: &str = "position:relative;z-index:10;flex:1;padding:10px;box-sizing:border-box;";
pub const IMG_STYLE: &str = "width:100%;height:100%;object-fit:cover;border-radius:10px;";
pub const INFO_STYLE: &str = "position:relative;z-index:10;padding:12px;color:#111827;font-family:sans-serif;display:grid;grid-template-columns:1fr auto;column-gap:12px;row-gap:4px;";

pub const SPOTLIGHT_REVEAL_TRANSITION: &str = "opacity 500ms";

// Hover lift, animated by the card's own transform/box-shadow transition.
pub const CARD_LIFT_TRANSFORM: &str = "translateY(-6px)";
pub const CARD_LIFT_SHADOW: &str =
    "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)";

// Overlay layers sit above the cards and never take pointer input.
pub const VIGNETTE_STYLE: &str = "position:absolute;inset:0;pointer-events:none;z-index:30;backdrop-filter:saturate(1.05) brightness(1.03);-webkit-backdrop-filter:saturate(1.05) brightness(1.03);background:rgba(250, 204, 21, 0.06);";
pub const BLANKET_STYLE: &str = "position:absolute;inset:0;pointer-events:none;z-index:40;backdrop-filter:saturate(1.02) brightness(1.02);-webkit-backdrop-filter:saturate(1.02) brightness(1.02);background:rgba(253, 224, 71, 0.08);";

// Navigation target and features: new context, no opener or referrer.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_FEATURES: &str = "noopener,noreferrer";
