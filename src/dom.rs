use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Wrap a `JsValue` exception for `?`.
#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{id} has unexpected type: {:?}", e))
}

/// Live elements carrying `class`, skipping any that are not a `T`.
pub fn elements_by_class<T: JsCast>(document: &web::Document, class: &str) -> Vec<T> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<T>().ok())
        .collect()
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let el: web::Element = element_by_id(document, element_id)?;
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) -> anyhow::Result<()> {
    el.style().set_property(property, value).map_err(js_err)
}

pub fn set_px(el: &web::HtmlElement, property: &str, value: impl std::fmt::Display) -> anyhow::Result<()> {
    set_style(el, property, &format!("{value}px"))
}

/// Add or remove `class`; both directions are no-ops when already in place.
pub fn set_class(el: &web::Element, class: &str, on: bool) -> anyhow::Result<()> {
    let list = el.class_list();
    if on {
        list.add_1(class).map_err(js_err)
    } else {
        list.remove_1(class).map_err(js_err)
    }
}
