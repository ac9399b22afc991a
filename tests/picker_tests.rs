// Host-side tests for the color-picker presentation state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod picker {
    include!("../src/core/picker.rs");
}

use picker::*;

fn all_states() -> Vec<PickerState> {
    let mut states = Vec::new();
    for panel in [PanelVisibility::Visible, PanelVisibility::Hidden] {
        for color_selected in [true, false] {
            states.push(PickerState {
                panel,
                color_selected,
            });
        }
    }
    states
}

#[test]
fn pick_hides_panel_from_any_state() {
    for mut state in all_states() {
        state.pick();
        assert_eq!(state.panel, PanelVisibility::Hidden);
        assert_eq!(state.panel.as_css(), "hidden");
    }
}

#[test]
fn pick_unmarks_color_from_any_state() {
    for mut state in all_states() {
        state.pick();
        assert!(!state.color_selected);
    }
}

#[test]
fn pick_twice_equals_pick_once() {
    for start in all_states() {
        let mut once = start;
        once.pick();
        let mut twice = start;
        twice.pick();
        twice.pick();
        assert_eq!(once, twice);
    }
}

#[test]
fn visible_and_selected_becomes_hidden_and_unselected() {
    let mut state = PickerState::opened();
    assert_eq!(state.panel, PanelVisibility::Visible);
    assert!(state.color_selected);

    state.pick();
    assert_eq!(state, PickerState::closed());
    assert_eq!(state.panel.as_css(), "hidden");
}

#[test]
fn already_closed_state_is_unchanged() {
    let mut state = PickerState {
        panel: PanelVisibility::Hidden,
        color_selected: false,
    };
    state.pick();
    assert_eq!(
        state,
        PickerState {
            panel: PanelVisibility::Hidden,
            color_selected: false,
        }
    );
}

#[test]
fn open_after_pick_shows_panel_again() {
    let mut state = PickerState::default();
    assert_eq!(state, PickerState::closed());
    state.open();
    assert_eq!(state.panel.as_css(), "visible");
    assert!(state.color_selected);
}

#[test]
fn pick_on_default_state_yields_closed_state() {
    let mut state = PickerState::default();
    state.pick();
    assert_eq!(state, PickerState::closed());
    assert_eq!(state.panel.as_css(), "hidden");
    assert!(!state.color_selected);
}

#[test]
fn open_on_default_state_yields_opened_state() {
    let mut state = PickerState::default();
    state.open();
    assert_eq!(state, PickerState::opened());
}
