use super::EventListener;
use crate::dom;
use folio_core::camera::pixel_to_ndc;
use folio_core::PointerState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Coordinate space a backdrop wants its pointer in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSpace {
    /// Canvas pixels; the canvases cover the viewport, so client coordinates.
    Pixels,
    /// Normalized device coordinates, y up.
    Ndc,
}

impl PointerSpace {
    fn convert(self, client: Vec2) -> Vec2 {
        match self {
            PointerSpace::Pixels => client,
            PointerSpace::Ndc => pixel_to_ndc(client, dom::window_viewport()),
        }
    }
}

fn record(pointer: &Rc<RefCell<PointerState>>, space: PointerSpace, client: Vec2) -> Vec2 {
    let pos = space.convert(client);
    pointer.borrow_mut().record(pos.x, pos.y);
    pos
}

/// Wires window pointer/touch events into `pointer`. `on_move` runs after
/// each recorded move with the converted position.
pub fn wire_pointer(
    pointer: Rc<RefCell<PointerState>>,
    space: PointerSpace,
    on_move: impl FnMut(Vec2) + 'static,
) -> Vec<EventListener> {
    let on_move = Rc::new(RefCell::new(on_move));
    let mut listeners = Vec::with_capacity(5);

    {
        let pointer = pointer.clone();
        let on_move = on_move.clone();
        listeners.extend(EventListener::on_window("pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                let pos = record(&pointer, space, client);
                (on_move.borrow_mut())(pos);
            }
        }));
    }
    {
        let pointer = pointer.clone();
        let on_move = on_move.clone();
        listeners.extend(EventListener::on_window("touchmove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            if let Some(touch) = ev.touches().get(0) {
                let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                let pos = record(&pointer, space, client);
                (on_move.borrow_mut())(pos);
            }
        }));
    }
    {
        let pointer = pointer.clone();
        listeners.extend(EventListener::on_window("pointerdown", move |_| {
            pointer.borrow_mut().set_pressed(true);
        }));
    }
    for kind in ["pointerup", "pointerleave", "touchend"] {
        let pointer = pointer.clone();
        listeners.extend(EventListener::on_window(kind, move |_| {
            pointer.borrow_mut().set_pressed(false);
        }));
    }
    listeners
}
