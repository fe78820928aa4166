use crate::constants::{
    HIDDEN_CLASS, THEME_ATTRIBUTE, THEME_TOGGLE_ID, VIEW_ATTRIBUTE, VIEW_BUTTON_SELECTOR,
    VIEW_PANEL_PREFIX,
};
use crate::dom;
use crate::events::EventListener;
use crate::mount::{self, Mount};
use crate::storage::LocalStorageStore;
use folio_core::{ActiveView, PageState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page shell: owns the page state and the mounted backdrop layers, and keeps
/// the DOM in step with both.
pub struct Shell {
    state: PageState,
    store: LocalStorageStore,
    document: web::Document,
    host: web::Element,
    mounts: Vec<Mount>,
}

impl Shell {
    pub fn new(document: web::Document) -> anyhow::Result<Self> {
        let host = dom::backdrop_host(&document)
            .ok_or_else(|| anyhow::anyhow!("no backdrop host or body"))?;
        let store = LocalStorageStore;
        let state = PageState::load(&store);
        log::info!("[theme] starting with {}", state.theme());
        Ok(Self {
            state,
            store,
            document,
            host,
            mounts: Vec::new(),
        })
    }

    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme(&self.store);
        self.apply_theme();
    }

    pub fn navigate(&mut self, view: ActiveView) {
        if self.state.navigate(view) {
            log::info!("[view] {}", view);
        }
        self.apply_view();
    }

    /// Reflects the theme on the page and swaps the backdrop layers.
    pub fn apply_theme(&mut self) {
        let theme = self.state.theme();
        if let Some(body) = self.document.body() {
            _ = body.set_attribute(THEME_ATTRIBUTE, theme.id());
        }
        if let Some(button) = self.document.get_element_by_id(THEME_TOGGLE_ID) {
            button.set_text_content(Some(theme.label()));
        }

        // Old layers go first so only one set of loops ever runs.
        self.mounts.clear();
        for &backdrop in theme.backdrops() {
            match mount::mount(backdrop, &self.document, &self.host) {
                Ok(m) => self.mounts.push(m),
                Err(e) => log::warn!("[theme] could not mount {}: {:?}", backdrop.name(), e),
            }
        }
    }

    /// Shows the active panel and hides the rest.
    pub fn apply_view(&self) {
        let active = self.state.view();
        for view in ActiveView::ALL {
            let id = format!("{VIEW_PANEL_PREFIX}{}", view.id());
            if let Some(panel) = self.document.get_element_by_id(&id) {
                _ = panel
                    .class_list()
                    .toggle_with_force(HIDDEN_CLASS, view != active);
            }
        }
    }
}

/// Hooks the theme toggle and the view buttons up to `shell`.
pub fn wire_controls(shell: &Rc<RefCell<Shell>>, document: &web::Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    if let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let shell = shell.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            shell.borrow_mut().toggle_theme();
        }));
    } else {
        log::warn!("[theme] #{THEME_TOGGLE_ID} not found; theme is fixed");
    }

    let Ok(buttons) = document.query_selector_all(VIEW_BUTTON_SELECTOR) else {
        return listeners;
    };
    for i in 0..buttons.length() {
        let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(raw) = el.get_attribute(VIEW_ATTRIBUTE) else {
            continue;
        };
        let view: ActiveView = match raw.parse() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[view] {e}");
                continue;
            }
        };
        let shell = shell.clone();
        listeners.push(EventListener::new(&el, "click", move |_| {
            shell.borrow_mut().navigate(view);
        }));
    }
    listeners
}
