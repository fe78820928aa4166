//! Page-level state shared by the shell and the backdrops.
//!
//! The theme and the active view are the only cross-cutting values. They are
//! held in an explicit [`PageState`] owned by the shell and handed to whoever
//! needs them; both are only ever mutated by discrete user actions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Local-storage key holding the theme id.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("unknown theme id {0:?}")]
    UnknownTheme(String),
    #[error("unknown view id {0:?}")]
    UnknownView(String),
}

/// Selectable background family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Laser,
    Regular,
    Digital,
    FireWater,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Laser, Theme::Regular, Theme::Digital, Theme::FireWater];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Laser => "laser",
            Theme::Regular => "regular",
            Theme::Digital => "digital",
            Theme::FireWater => "firewater",
        }
    }

    /// Button label shown by the theme toggle.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Laser => "Laser Mode",
            Theme::Regular => "Classic Mode",
            Theme::Digital => "Digital Mode",
            Theme::FireWater => "Fire & Water",
        }
    }

    pub fn next(self) -> Theme {
        match self {
            Theme::Laser => Theme::Regular,
            Theme::Regular => Theme::Digital,
            Theme::Digital => Theme::FireWater,
            Theme::FireWater => Theme::Laser,
        }
    }

    /// Background layers mounted for this theme, bottom first.
    pub fn backdrops(self) -> &'static [Backdrop] {
        match self {
            Theme::Laser => &[Backdrop::LaserWar],
            Theme::Regular => &[Backdrop::Waves, Backdrop::Scene],
            Theme::Digital => &[Backdrop::DigitalBrain],
            Theme::FireWater => &[Backdrop::FireWater],
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| StateError::UnknownTheme(s.to_string()))
    }
}

/// One full-viewport background variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backdrop {
    LaserWar,
    DigitalBrain,
    Waves,
    Scene,
    FireWater,
}

impl Backdrop {
    pub fn name(self) -> &'static str {
        match self {
            Backdrop::LaserWar => "laser-war",
            Backdrop::DigitalBrain => "digital-brain",
            Backdrop::Waves => "waves",
            Backdrop::Scene => "scene",
            Backdrop::FireWater => "fire-water",
        }
    }
}

/// Content panel currently shown by the page shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    #[default]
    Home,
    Experience,
    Education,
    Projects,
    Contact,
}

impl ActiveView {
    pub const ALL: [ActiveView; 5] = [
        ActiveView::Home,
        ActiveView::Experience,
        ActiveView::Education,
        ActiveView::Projects,
        ActiveView::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ActiveView::Home => "home",
            ActiveView::Experience => "experience",
            ActiveView::Education => "education",
            ActiveView::Projects => "projects",
            ActiveView::Contact => "contact",
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ActiveView {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActiveView::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| StateError::UnknownView(s.to_string()))
    }
}

/// Minimal key/value persistence used for the theme.
///
/// Implementations swallow their own failures: a store that cannot be read
/// behaves as empty, a failed write is dropped.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// In-memory store, used off the browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.save(key, value);
        store
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Reads the persisted theme, falling back to the default for a missing or
/// unrecognised value.
pub fn load_theme(store: &dyn ThemeStore) -> Theme {
    match store.load(THEME_STORAGE_KEY) {
        Some(raw) => raw.parse().unwrap_or_else(|e: StateError| {
            log::warn!("[theme] {e}; using {}", Theme::default());
            Theme::default()
        }),
        None => Theme::default(),
    }
}

/// Explicit page context: the current theme and view.
///
/// Reads are plain getters. Writes go through [`PageState::set_theme`],
/// [`PageState::toggle_theme`] and [`PageState::navigate`]; theme writes are
/// persisted immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    theme: Theme,
    view: ActiveView,
}

impl PageState {
    /// Builds the startup state from persisted storage.
    pub fn load(store: &dyn ThemeStore) -> Self {
        Self {
            theme: load_theme(store),
            view: ActiveView::default(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> ActiveView {
        self.view
    }

    pub fn set_theme(&mut self, theme: Theme, store: &dyn ThemeStore) {
        self.theme = theme;
        store.save(THEME_STORAGE_KEY, theme.id());
    }

    /// Advances to the next theme in the cycle and returns it.
    pub fn toggle_theme(&mut self, store: &dyn ThemeStore) -> Theme {
        let next = self.theme.next();
        log::info!("[theme] {} -> {}", self.theme, next);
        self.set_theme(next, store);
        next
    }

    /// Switches the visible panel; returns `true` when the view changed.
    pub fn navigate(&mut self, view: ActiveView) -> bool {
        let changed = self.view != view;
        self.view = view;
        changed
    }
}
