use crate::constants::BACKDROP_HOST_ID;
use folio_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Element the backdrop canvases are appended to: `#backdrop`, else `<body>`.
pub fn backdrop_host(document: &web::Document) -> Option<web::Element> {
    document
        .get_element_by_id(BACKDROP_HOST_ID)
        .or_else(|| document.body().map(web::Element::from))
}

/// Window inner size in CSS pixels.
pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

/// Creates a full-viewport canvas under `host`, sized to `viewport`.
pub fn append_canvas(
    document: &web::Document,
    host: &web::Element,
    class: &str,
    viewport: Viewport,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
    canvas.set_class_name(class);
    let style = canvas.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("inset", "0");
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");
    _ = style.set_property("pointer-events", "none");
    sync_canvas_backing_size(&canvas, viewport);
    host.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Backing store follows the CSS viewport, never below 1×1.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width((viewport.width as u32).max(1));
    canvas.set_height((viewport.height as u32).max(1));
}

pub fn set_cursor(element: &web::Element, cursor: &str) {
    if let Some(el) = element.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property("cursor", cursor);
    }
}
