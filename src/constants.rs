/// DOM hooks and paint constants for the web front-end.
///
/// Simulation tuning lives in `folio_core::constants`; this file only holds
/// what the browser side needs to find elements and paint frames.
// Host element for the backdrop canvases; falls back to <body>
pub const BACKDROP_HOST_ID: &str = "backdrop";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const VIEW_PANEL_PREFIX: &str = "view-";
pub const VIEW_BUTTON_SELECTOR: &str = "[data-view]";
pub const VIEW_ATTRIBUTE: &str = "data-view";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const HIDDEN_CLASS: &str = "hidden";

// Canvas class names, one per layer
pub const CANVAS_CLASS_2D: &str = "backdrop-2d";
pub const CANVAS_CLASS_3D: &str = "backdrop-3d";

// Trail fades (translucent fills painted before each frame)
pub const LASER_TRAIL_FILL: &str = "rgba(10, 19, 47, 0.1)";
pub const DIGITAL_TRAIL_FILL: &str = "rgba(0, 0, 0, 0.08)";

// Wave grid colours
pub const WAVES_BACKGROUND: &str = "#0a0e27";
pub const WAVES_BACKGROUND_FOOT: &str = "#050a1a";
pub const WAVES_STROKE: &str = "rgba(0, 255, 157, 0.4)";

// Shadow blur radii (px)
pub const LASER_HEAD_BLUR: f64 = 30.0;
pub const EMBER_GLOW_BLUR: f64 = 20.0;
pub const DROP_GLOW_BLUR: f64 = 10.0;
pub const FLAME_CORE_BLUR: f64 = 40.0;

