use crate::constants::{RESIZER_CLASS, SKETCH_ID, SKETCH_OUTLINE};
use crate::core::{committed_size, Anchor, DragOrigin, Point, Rect, ResizeEdges, SketchUpdate};
use crate::dom::{self, js_err};
use crate::gestures::mouse_handler;
use crate::PaintContext;
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resizers(ctx: &PaintContext) {
    for resizer in dom::elements_by_class::<web::HtmlElement>(&ctx.document, RESIZER_CLASS) {
        let edges = match ResizeEdges::from_id(&resizer.id()) {
            Ok(edges) => edges,
            Err(e) => {
                log::warn!("[resize] {e}");
                continue;
            }
        };
        let ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if let Err(e) = begin(&ctx, edges, &ev) {
                log::error!("[resize] {e:#}");
            }
        }) as Box<dyn FnMut(_)>);
        resizer.set_onmousedown(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }
}

fn begin(ctx: &PaintContext, edges: ResizeEdges, ev: &web::MouseEvent) -> anyhow::Result<()> {
    ev.prevent_default();
    if ctx.document.get_element_by_id(SKETCH_ID).is_some() {
        return Ok(());
    }
    let canvas_rect = ctx.surface.borrow().bounding_rect();
    let sketch = ctx.gestures.borrow_mut().try_paused(|| {
        let sketch = create_sketch(&ctx.document, &canvas_rect)?;
        ctx.body.append_child(&sketch).map_err(js_err)?;
        Ok::<_, anyhow::Error>(Rc::new(sketch))
    })?;
    let origin = DragOrigin::new(edges, &canvas_rect, Point::new(ev.client_x(), ev.client_y()));

    let on_move = {
        let ctx = ctx.clone();
        let sketch = Rc::clone(&sketch);
        mouse_handler(move |ev| {
            let rect = ctx.surface.borrow().bounding_rect();
            let pointer = Point::new(ev.client_x(), ev.client_y());
            let update = origin.sketch_update(&rect, pointer, window_width());
            if let Err(e) = apply_sketch(&sketch, update) {
                log::error!("[resize] {e:#}");
            }
        })
    };
    let on_end = {
        let ctx = ctx.clone();
        mouse_handler(move |_| {
            if let Err(e) = finish(&ctx, edges, &sketch) {
                log::error!("[resize] {e:#}");
            }
        })
    };
    ctx.body.set_onmousemove(Some(&on_move));
    ctx.body.set_onmouseup(Some(&on_end));
    ctx.body.set_onmouseleave(Some(&on_end));
    Ok(())
}

fn finish(ctx: &PaintContext, edges: ResizeEdges, sketch: &web::HtmlElement) -> anyhow::Result<()> {
    let r = sketch.get_bounding_client_rect();
    sketch.remove();
    ctx.body.set_onmousemove(None);
    ctx.body.set_onmouseup(None);
    ctx.body.set_onmouseleave(None);
    ctx.gestures.borrow_mut().resume();

    // a detached sketch measures 0x0
    let Some((width, height)) = committed_size(r.width(), r.height()) else {
        return Ok(());
    };
    ctx.surface.borrow_mut().resize(edges, width, height)?;
    log::info!("[resize] {}x{}", width, height);
    Ok(())
}

fn window_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn create_sketch(document: &web::Document, rect: &Rect) -> anyhow::Result<web::HtmlElement> {
    let sketch = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    sketch.set_id(SKETCH_ID);
    dom::set_style(&sketch, "position", "fixed")?;
    dom::set_style(&sketch, "outline", SKETCH_OUTLINE)?;
    dom::set_px(&sketch, "width", rect.width)?;
    dom::set_px(&sketch, "height", rect.height)?;
    dom::set_px(&sketch, "top", rect.top)?;
    dom::set_px(&sketch, "left", rect.left)?;
    Ok(sketch)
}

fn apply_sketch(sketch: &web::HtmlElement, update: SketchUpdate) -> anyhow::Result<()> {
    if let Some(h) = update.height {
        dom::set_px(sketch, "height", h)?;
    }
    if let Some(w) = update.width {
        dom::set_px(sketch, "width", w)?;
    }
    let style = sketch.style();
    match update.anchor {
        Some(Anchor::Left(left)) => {
            style.remove_property("right").map_err(js_err)?;
            dom::set_px(sketch, "left", left)?;
        }
        Some(Anchor::Right(right)) => {
            style.remove_property("left").map_err(js_err)?;
            dom::set_px(sketch, "right", right)?;
        }
        None => {}
    }
    Ok(())
}
