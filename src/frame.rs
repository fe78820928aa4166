use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` chain running `frame` once per display frame.
///
/// Dropping the loop cancels the pending request and releases the closure.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_clone.set(None);
            frame();
            handle_clone.set(request(&tick_clone));
        }) as Box<dyn FnMut()>));
        handle.set(request(&tick));

        Self { tick, handle }
    }
}

fn request(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // The closure holds a clone of `tick`; dropping it breaks the cycle.
        self.tick.borrow_mut().take();
    }
}
