#![cfg(target_arch = "wasm32")]
use crate::core::Color;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod color_picker;
mod constants;
mod core;
mod dom;
mod draw;
mod gestures;
mod resizer;
mod toolbar;

/// Shared state handed to every event handler.
#[derive(Clone)]
pub(crate) struct PaintContext {
    pub document: web::Document,
    pub body: web::HtmlElement,
    pub surface: Rc<RefCell<canvas::Surface>>,
    pub color: Rc<RefCell<Color>>,
    pub gestures: Rc<RefCell<gestures::Gestures>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("paintbox starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;

    // The pick button works even on a page without a usable canvas.
    if let Err(e) = color_picker::wire_pick_color(&document) {
        log::error!("[picker] pick-color not bound: {e:#}");
    }

    let surface = canvas::Surface::attach(&document)?;
    let ctx = PaintContext {
        document,
        body: body.clone(),
        surface: Rc::new(RefCell::new(surface)),
        color: Rc::new(RefCell::new(Color::default())),
        gestures: Rc::new(RefCell::new(gestures::Gestures::new(body))),
    };
    toolbar::wire_tools(&ctx);
    resizer::wire_resizers(&ctx);
    Ok(())
}
