// Host-side tests for page state and theme persistence.

use folio_core::{
    load_theme, ActiveView, Backdrop, MemoryStore, PageState, Theme, ThemeStore,
    THEME_STORAGE_KEY,
};

#[test]
fn missing_theme_defaults_to_laser() {
    let store = MemoryStore::new();
    assert_eq!(load_theme(&store), Theme::Laser);
    assert_eq!(PageState::load(&store).view(), ActiveView::Home);
}

#[test]
fn unknown_theme_falls_back_to_default() {
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "neon");
    assert_eq!(PageState::load(&store).theme(), Theme::Laser);
}

#[test]
fn persisted_theme_is_restored() {
    let store = MemoryStore::new();
    let mut state = PageState::load(&store);
    state.set_theme(Theme::Digital, &store);
    assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("digital"));
    assert_eq!(PageState::load(&store).theme(), Theme::Digital);
}

#[test]
fn toggle_cycles_through_all_themes() {
    let store = MemoryStore::new();
    let mut state = PageState::load(&store);
    let seen: Vec<Theme> = (0..4).map(|_| state.toggle_theme(&store)).collect();
    assert_eq!(
        seen,
        [Theme::Regular, Theme::Digital, Theme::FireWater, Theme::Laser]
    );
    assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("laser"));
}

#[test]
fn theme_ids_round_trip() {
    for theme in Theme::ALL {
        assert_eq!(theme.id().parse::<Theme>(), Ok(theme));
        assert!(!theme.label().is_empty());
    }
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn regular_theme_layers_waves_under_scene() {
    assert_eq!(Theme::Regular.backdrops(), &[Backdrop::Waves, Backdrop::Scene]);
    assert_eq!(Theme::Laser.backdrops(), &[Backdrop::LaserWar]);
    assert_eq!(Theme::Digital.backdrops(), &[Backdrop::DigitalBrain]);
    assert_eq!(Theme::FireWater.backdrops(), &[Backdrop::FireWater]);
}

#[test]
fn navigate_reports_changes() {
    let mut state = PageState::default();
    assert!(!state.navigate(ActiveView::Home));
    assert!(state.navigate(ActiveView::Projects));
    assert_eq!(state.view(), ActiveView::Projects);
    assert!(!state.navigate(ActiveView::Projects));
}

#[test]
fn navigate_leaves_theme_alone() {
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "firewater");
    let mut state = PageState::load(&store);
    state.navigate(ActiveView::Contact);
    assert_eq!(state.theme(), Theme::FireWater);
}

#[test]
fn view_ids_parse() {
    for view in ActiveView::ALL {
        assert_eq!(view.id().parse::<ActiveView>(), Ok(view));
    }
    assert!("blog".parse::<ActiveView>().is_err());
}
