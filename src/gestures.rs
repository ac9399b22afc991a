use crate::core::gestures::Bind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use crate::core::gestures::BodyEvent;

/// Drawing-tool handlers live on `document.body`.
pub type Gestures = crate::core::gestures::Gestures<web::HtmlElement, js_sys::Function>;

impl Bind<js_sys::Function> for web::HtmlElement {
    fn bind(&self, event: BodyEvent, handler: Option<&js_sys::Function>) {
        match event {
            BodyEvent::MouseDown => self.set_onmousedown(handler),
            BodyEvent::MouseMove => self.set_onmousemove(handler),
            BodyEvent::MouseUp => self.set_onmouseup(handler),
            BodyEvent::MouseLeave => self.set_onmouseleave(handler),
        }
    }
}

/// Hand a mouse callback to JS; the function lives as long as JS references it.
pub fn mouse_handler(handler: impl FnMut(web::MouseEvent) + 'static) -> js_sys::Function {
    Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>)
        .into_js_value()
        .unchecked_into()
}
