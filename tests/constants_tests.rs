// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as core;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_hooks_are_well_formed() {
    assert!(!BACKDROP_HOST_ID.is_empty());
    assert!(!THEME_TOGGLE_ID.is_empty());
    assert!(VIEW_PANEL_PREFIX.ends_with('-'));
    assert_eq!(VIEW_BUTTON_SELECTOR, format!("[{VIEW_ATTRIBUTE}]"));
    assert!(THEME_ATTRIBUTE.starts_with("data-"));
    assert_ne!(CANVAS_CLASS_2D, CANVAS_CLASS_3D);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn blur_radii_are_positive() {
    for blur in [LASER_HEAD_BLUR, EMBER_GLOW_BLUR, DROP_GLOW_BLUR, FLAME_CORE_BLUR] {
        assert!(blur > 0.0);
    }
    assert!(FLAME_CORE_BLUR > EMBER_GLOW_BLUR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_fills_are_translucent() {
    for fill in [LASER_TRAIL_FILL, DIGITAL_TRAIL_FILL] {
        assert!(fill.starts_with("rgba("));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn simulation_tuning_is_consistent() {
    assert!(core::LASER_INITIAL_COUNT <= core::LASER_MAX_COUNT);
    assert!(core::WAVES_RELAX_DAMPING > 0.0 && core::WAVES_RELAX_DAMPING < 1.0);
    assert!(core::WAVES_POINTER_SMOOTHING > 0.0 && core::WAVES_POINTER_SMOOTHING <= 1.0);
    assert!(core::SCENE_RELAX_RATE > 0.0 && core::SCENE_RELAX_RATE < 1.0);
    assert!(core::HOVER_SCALE > core::REST_SCALE);
    assert!(core::DROP_SPLASH_LINE > 0.0 && core::DROP_SPLASH_LINE < 1.0);
    assert!(core::EMBER_LIFE_MIN > 0.0);
    assert_eq!(core::LASER_PALETTE.len(), 8);
    assert!(core::CAMERA_NEAR < core::CAMERA_FAR);
}
