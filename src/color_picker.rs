use crate::constants::{
    BACKGROUND_PROPERTY, CHANNEL_INPUT_CLASS, COLOR_PICKER_ID, COLOR_TOOL_ID, PICK_COLOR_ID,
    SELECTED_CLASS, SWATCH_ID, VISIBILITY_PROPERTY,
};
use crate::core::{parse_channel, sanitize_channel_input, Channel, Color, PickerState};
use crate::dom;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The two elements whose presentation state the picker controls.
pub struct PickerElements {
    color_tool: web::HtmlElement,
    panel: web::HtmlElement,
}

impl PickerElements {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        let color_tool = dom::element_by_id(document, COLOR_TOOL_ID)?;
        let panel = dom::element_by_id::<web::Element>(document, COLOR_PICKER_ID)?
            .parent_element()
            .ok_or_else(|| anyhow!("#{COLOR_PICKER_ID} has no container"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { color_tool, panel })
    }

    pub fn apply(&self, state: PickerState) -> anyhow::Result<()> {
        dom::set_style(&self.panel, VISIBILITY_PROPERTY, state.panel.as_css())?;
        dom::set_class(&self.color_tool, SELECTED_CLASS, state.color_selected)
    }
}

/// "Pick color": hide the panel and unmark the color tool.
pub fn pick_color(elements: &PickerElements) -> anyhow::Result<()> {
    let mut state = PickerState::default();
    state.pick();
    elements.apply(state)
}

/// Bind `pick_color` to `#pick-color`. Elements are resolved once, here.
pub fn wire_pick_color(document: &web::Document) -> anyhow::Result<()> {
    let elements = PickerElements::lookup(document)?;
    dom::add_click_listener(document, PICK_COLOR_ID, move || {
        match pick_color(&elements) {
            Ok(()) => log::info!("[picker] closed"),
            Err(e) => log::error!("[picker] close failed: {e:#}"),
        }
    })
}

/// Close the panel from outside the pick button (tool bar deselect).
pub fn close(document: &web::Document) -> anyhow::Result<()> {
    pick_color(&PickerElements::lookup(document)?)
}

/// Show the panel for `color` and bind its channel inputs.
pub fn open(document: &web::Document, color: Rc<RefCell<Color>>) -> anyhow::Result<()> {
    let mut state = PickerState::default();
    state.open();
    PickerElements::lookup(document)?.apply(state)?;
    let swatch: Rc<web::HtmlElement> = Rc::new(dom::element_by_id(document, SWATCH_ID)?);
    let inputs: Rc<Vec<web::HtmlInputElement>> =
        Rc::new(dom::elements_by_class(document, CHANNEL_INPUT_CLASS));

    for input in inputs.iter() {
        let on_input = on_channel_input(
            input.clone(),
            Rc::clone(&inputs),
            Rc::clone(&swatch),
            Rc::clone(&color),
        );
        // replaces the binding from any earlier open
        input.set_oninput(Some(on_input.as_ref().unchecked_ref()));
        on_input.forget();
    }
    read_color(&swatch, &inputs, &color.borrow())?;
    log::info!("[picker] opened with {}", color.borrow().as_css_value());
    Ok(())
}

fn on_channel_input(
    input: web::HtmlInputElement,
    inputs: Rc<Vec<web::HtmlInputElement>>,
    swatch: Rc<web::HtmlElement>,
    color: Rc<RefCell<Color>>,
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let value = sanitize_channel_input(&input.value());
        input.set_value(&value.to_string());
        if let Err(e) = write_color(&inputs, &swatch, &mut color.borrow_mut()) {
            log::error!("[picker] {e:#}");
        }
    }) as Box<dyn FnMut()>)
}

fn paint_swatch(swatch: &web::HtmlElement, color: &Color) -> anyhow::Result<()> {
    dom::set_style(swatch, BACKGROUND_PROPERTY, &color.as_css_value())
}

// color -> inputs
fn read_color(
    swatch: &web::HtmlElement,
    inputs: &[web::HtmlInputElement],
    color: &Color,
) -> anyhow::Result<()> {
    paint_swatch(swatch, color)?;
    for input in inputs {
        match Channel::from_input_id(&input.id()) {
            Ok(channel) => input.set_value(&color.channel(channel).to_string()),
            Err(e) => log::warn!("[picker] {e}"),
        }
    }
    Ok(())
}

// inputs -> color
fn write_color(
    inputs: &[web::HtmlInputElement],
    swatch: &web::HtmlElement,
    color: &mut Color,
) -> anyhow::Result<()> {
    for input in inputs {
        match Channel::from_input_id(&input.id()) {
            Ok(channel) => color.set_channel(channel, parse_channel(&input.value())),
            Err(e) => log::warn!("[picker] {e}"),
        }
    }
    paint_swatch(swatch, color)
}
