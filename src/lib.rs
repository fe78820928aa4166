#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod mount;
mod render;
mod shell;
mod storage;

/// Everything that must outlive `init`: the shell and its control listeners.
struct Page {
    _shell: Rc<RefCell<shell::Shell>>,
    _listeners: Vec<events::EventListener>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let shell = Rc::new(RefCell::new(shell::Shell::new(document.clone())?));
    {
        let mut s = shell.borrow_mut();
        s.apply_view();
        s.apply_theme();
    }
    let listeners = shell::wire_controls(&shell, &document);

    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            _shell: shell,
            _listeners: listeners,
        })
    });
    Ok(())
}
