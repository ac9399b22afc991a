// Host-side tests for tool bar selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/core/error.rs");
}
mod tool {
    include!("../src/core/tool.rs");
}

use error::Error;
use tool::*;

#[test]
fn tool_ids_match_toolbar_markup() {
    assert_eq!(Tool::from_id("pencil"), Ok(Tool::Pencil));
    assert_eq!(Tool::from_id("line"), Ok(Tool::Line));
    assert_eq!(Tool::from_id("color"), Ok(Tool::Color));
    assert_eq!(Tool::from_id("eraser"), Err(Error::UnknownTool("eraser".into())));
}

#[test]
fn selection_is_exclusive() {
    let sel = ToolSelection::default().click(Tool::Pencil).click(Tool::Line);
    assert_eq!(sel.selected(), Some(Tool::Line));
    assert!(!sel.is_selected(Tool::Pencil));
}

#[test]
fn clicking_selected_tool_releases_it() {
    let sel = ToolSelection::new(Some(Tool::Color)).click(Tool::Color);
    assert_eq!(sel.selected(), None);
    // and a further click selects it again
    assert_eq!(sel.click(Tool::Color).selected(), Some(Tool::Color));
}
