use crate::constants::{CANVAS_CLASS_2D, CANVAS_CLASS_3D};
use crate::dom;
use crate::events::pointer::{wire_pointer, PointerSpace};
use crate::events::EventListener;
use crate::frame::FrameLoop;
use crate::render::scene::SceneRenderer;
use crate::render::Paint2d;
use folio_core::effects::{DigitalParams, FireWaterParams, LaserParams, SceneParams, WavesParams};
use folio_core::{
    Backdrop, DigitalBrain, FireWater, FrameInput, LaserWar, PointerState, Scene, Simulation,
    Viewport, Waves,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// One live backdrop layer: its canvas, listeners and frame loop.
///
/// Dropping a mount stops the loop, detaches every listener and removes the
/// canvas from the page.
pub struct Mount {
    backdrop: Backdrop,
    canvas: web::HtmlCanvasElement,
    // The 3D layer fills these in later, once the GPU is ready.
    listeners: Rc<RefCell<Vec<EventListener>>>,
    frame: Rc<RefCell<Option<FrameLoop>>>,
    alive: Rc<Cell<bool>>,
    /// Element whose cursor hover picking changes.
    cursor_host: Option<web::Element>,
}

impl Mount {
    fn new(backdrop: Backdrop, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            backdrop,
            canvas,
            listeners: Rc::new(RefCell::new(Vec::new())),
            frame: Rc::new(RefCell::new(None)),
            alive: Rc::new(Cell::new(true)),
            cursor_host: None,
        }
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.alive.set(false);
        self.frame.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        if let Some(host) = &self.cursor_host {
            dom::set_cursor(host, "default");
        }
        self.canvas.remove();
        log::debug!("[mount] {} unmounted", self.backdrop.name());
    }
}

/// Creates the layer for `backdrop` under `host`.
pub fn mount(
    backdrop: Backdrop,
    document: &web::Document,
    host: &web::Element,
) -> anyhow::Result<Mount> {
    let seed = rand::random::<u64>();
    let m = match backdrop {
        Backdrop::LaserWar => mount_2d(backdrop, document, host, |vp| {
            LaserWar::new(vp, LaserParams::default(), seed)
        }),
        Backdrop::DigitalBrain => mount_2d(backdrop, document, host, |vp| {
            DigitalBrain::new(vp, DigitalParams::default(), seed)
        }),
        Backdrop::Waves => mount_2d(backdrop, document, host, |vp| {
            Waves::new(vp, WavesParams::default(), seed)
        }),
        Backdrop::FireWater => mount_2d(backdrop, document, host, |vp| {
            FireWater::new(vp, FireWaterParams::default(), seed)
        }),
        Backdrop::Scene => mount_scene(document, host, seed),
    }?;
    log::info!("[mount] {} mounted", backdrop.name());
    Ok(m)
}

fn resize_listener<S: Simulation + 'static>(
    canvas: &web::HtmlCanvasElement,
    sim: &Rc<RefCell<S>>,
) -> Option<EventListener> {
    let canvas = canvas.clone();
    let sim = sim.clone();
    EventListener::on_window("resize", move |_| {
        let vp = dom::window_viewport();
        dom::sync_canvas_backing_size(&canvas, vp);
        sim.borrow_mut().resize(vp);
    })
}

/// Smooths the pointer with the simulation's factor and packs the frame input.
fn frame_input<S: Simulation>(
    sim: &S,
    pointer: &RefCell<PointerState>,
    started: Instant,
) -> FrameInput {
    let mut p = pointer.borrow_mut();
    p.smooth(sim.pointer_smoothing());
    FrameInput {
        elapsed_sec: started.elapsed().as_secs_f32(),
        pointer: *p,
    }
}

fn mount_2d<S, F>(
    backdrop: Backdrop,
    document: &web::Document,
    host: &web::Element,
    make: F,
) -> anyhow::Result<Mount>
where
    S: Simulation + Paint2d + 'static,
    F: FnOnce(Viewport) -> S,
{
    let viewport = dom::window_viewport();
    let canvas = dom::append_canvas(document, host, CANVAS_CLASS_2D, viewport)?;
    let m = Mount::new(backdrop, canvas);

    let ctx = m
        .canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
    let Some(ctx) = ctx else {
        log::warn!("[mount] no 2d context; {} stays blank", backdrop.name());
        return Ok(m);
    };

    let sim = Rc::new(RefCell::new(make(viewport)));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    {
        let mut listeners = m.listeners.borrow_mut();
        listeners.extend(wire_pointer(pointer.clone(), PointerSpace::Pixels, |_| {}));
        listeners.extend(resize_listener(&m.canvas, &sim));
    }

    let started = Instant::now();
    *m.frame.borrow_mut() = Some(FrameLoop::start(move || {
        let mut sim = sim.borrow_mut();
        let input = frame_input(&*sim, &pointer, started);
        sim.step(&input);
        sim.paint(&ctx);
    }));

    Ok(m)
}

fn mount_scene(
    document: &web::Document,
    host: &web::Element,
    seed: u64,
) -> anyhow::Result<Mount> {
    let viewport = dom::window_viewport();
    let canvas = dom::append_canvas(document, host, CANVAS_CLASS_3D, viewport)?;
    let mut m = Mount::new(Backdrop::Scene, canvas);
    m.cursor_host = Some(host.clone());

    let scene = Rc::new(RefCell::new(Scene::new(viewport, SceneParams::default(), seed)));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    let canvas = m.canvas.clone();
    let cursor_host = host.clone();
    let listeners = m.listeners.clone();
    let frame = m.frame.clone();
    let alive = m.alive.clone();
    spawn_local(async move {
        let mut renderer = match SceneRenderer::new(&canvas).await {
            Ok(r) => r,
            Err(e) => {
                // Nothing is wired yet, so the layer stays inert.
                log::warn!("[mount] 3D layer disabled: {:?}", e);
                return;
            }
        };
        if !alive.get() {
            return;
        }
        // The window may have been resized while the GPU came up.
        let vp = dom::window_viewport();
        dom::sync_canvas_backing_size(&canvas, vp);
        {
            let mut scene = scene.borrow_mut();
            scene.resize(vp);
            scene.enable_picking();
        }

        // Picking runs on pointer moves only, not every frame.
        let picker = scene.clone();
        {
            let mut listeners = listeners.borrow_mut();
            listeners.extend(wire_pointer(pointer.clone(), PointerSpace::Ndc, move |ndc| {
                if let Some(cursor) = picker.borrow_mut().pick(ndc).cursor() {
                    dom::set_cursor(&cursor_host, cursor);
                }
            }));
            listeners.extend(resize_listener(&canvas, &scene));
        }

        let started = Instant::now();
        *frame.borrow_mut() = Some(FrameLoop::start(move || {
            let mut scene = scene.borrow_mut();
            let input = frame_input(&*scene, &pointer, started);
            scene.step(&input);
            renderer.resize_if_needed(canvas.width(), canvas.height());
            match renderer.render(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure()
                }
                Err(e) => log::warn!("[scene] render error: {:?}", e),
            }
        }));
    });

    Ok(m)
}
