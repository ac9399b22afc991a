use crate::color_picker;
use crate::constants::{SELECTED_CLASS, TOOL_CLASS};
use crate::core::{Tool, ToolSelection};
use crate::dom;
use crate::draw;
use crate::PaintContext;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_tools(ctx: &PaintContext) {
    let tools: Rc<Vec<web::HtmlElement>> = Rc::new(dom::elements_by_class(&ctx.document, TOOL_CLASS));
    for tool in tools.iter() {
        let ctx = ctx.clone();
        let all = Rc::clone(&tools);
        let el = tool.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Err(e) = on_tool_click(&ctx, &all, &el) {
                log::error!("[tool] {e:#}");
            }
        }) as Box<dyn FnMut()>);
        if let Err(e) = tool.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
            log::error!("[tool] could not bind #{}: {:?}", tool.id(), e);
        }
        closure.forget();
    }
    log::info!("[tool] wired {} tools", tools.len());
}

// The DOM's `selected` class is the source of truth: the picker's close
// button clears it behind the tool bar's back.
fn current_selection(tools: &[web::HtmlElement]) -> ToolSelection {
    let current = tools
        .iter()
        .filter(|el| el.class_list().contains(SELECTED_CLASS))
        .find_map(|el| Tool::from_id(&el.id()).ok());
    ToolSelection::new(current)
}

fn on_tool_click(
    ctx: &PaintContext,
    tools: &[web::HtmlElement],
    clicked: &web::HtmlElement,
) -> anyhow::Result<()> {
    ctx.gestures.borrow_mut().clear();
    let tool = match Tool::from_id(&clicked.id()) {
        Ok(tool) => tool,
        Err(e) => {
            log::warn!("[tool] {e}");
            return Ok(());
        }
    };

    let before = current_selection(tools);
    let after = before.click(tool);
    for el in tools {
        let on = Tool::from_id(&el.id()).map_or(false, |t| after.is_selected(t));
        dom::set_class(el, SELECTED_CLASS, on)?;
    }
    if before.is_selected(Tool::Color) && !after.is_selected(Tool::Color) {
        color_picker::close(&ctx.document)?;
    }

    match after.selected() {
        Some(Tool::Pencil) => draw::install_pencil(ctx),
        Some(Tool::Line) => draw::install_line(ctx),
        Some(Tool::Color) => color_picker::open(&ctx.document, Rc::clone(&ctx.color))?,
        None => {}
    }
    match after.selected() {
        Some(t) => log::info!("[tool] selected {}", t.id()),
        None => log::info!("[tool] released {}", tool.id()),
    }
    Ok(())
}
