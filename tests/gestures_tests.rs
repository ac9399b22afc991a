// Host-side tests for the drawing-tool handler registry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod gestures {
    include!("../src/core/gestures.rs");
}

use gestures::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Records which handler is currently bound to each event. Clones share
/// the record, so a test keeps one while the registry owns the other.
#[derive(Clone, Default)]
struct Body {
    bound: Rc<RefCell<[Option<&'static str>; 4]>>,
}

impl Bind<&'static str> for Body {
    fn bind(&self, event: BodyEvent, handler: Option<&&'static str>) {
        self.bound.borrow_mut()[event as usize] = handler.copied();
    }
}

impl Body {
    fn bound(&self, event: BodyEvent) -> Option<&'static str> {
        self.bound.borrow()[event as usize]
    }

    fn assert_pencil(&self) {
        assert_eq!(self.bound(BodyEvent::MouseDown), Some("down"));
        assert_eq!(self.bound(BodyEvent::MouseMove), Some("move"));
        assert_eq!(self.bound(BodyEvent::MouseUp), Some("end"));
        assert_eq!(self.bound(BodyEvent::MouseLeave), Some("end"));
    }

    fn assert_empty(&self) {
        for event in BodyEvent::ALL {
            assert_eq!(self.bound(event), None, "{event:?}");
        }
    }
}

fn pencil() -> (Body, Gestures<Body, &'static str>) {
    let body = Body::default();
    let mut gestures = Gestures::new(body.clone());
    gestures.set(BodyEvent::MouseDown, Some("down"));
    gestures.set(BodyEvent::MouseMove, Some("move"));
    gestures.set(BodyEvent::MouseUp, Some("end"));
    gestures.set(BodyEvent::MouseLeave, Some("end"));
    (body, gestures)
}

#[test]
fn set_binds_immediately() {
    let (body, _gestures) = pencil();
    body.assert_pencil();
}

#[test]
fn pause_detaches_and_resume_restores() {
    let (body, mut gestures) = pencil();
    gestures.pause();
    body.assert_empty();
    gestures.resume();
    body.assert_pencil();
}

#[test]
fn handlers_set_while_paused_wait_for_resume() {
    let body = Body::default();
    let mut gestures = Gestures::new(body.clone());
    gestures.pause();
    gestures.set(BodyEvent::MouseDown, Some("down"));
    assert_eq!(body.bound(BodyEvent::MouseDown), None);
    gestures.resume();
    assert_eq!(body.bound(BodyEvent::MouseDown), Some("down"));
}

#[test]
fn clear_unbinds_everything() {
    let (body, mut gestures) = pencil();
    gestures.clear();
    body.assert_empty();
    gestures.pause();
    gestures.resume();
    body.assert_empty();
}

#[test]
fn failed_start_restores_handlers() {
    let (body, mut gestures) = pencil();
    let started: Result<(), &str> = gestures.try_paused(|| Err("no sketch"));
    assert_eq!(started, Err("no sketch"));
    body.assert_pencil();
}

#[test]
fn successful_start_stays_paused() {
    let (body, mut gestures) = pencil();
    let started: Result<u32, &str> = gestures.try_paused(|| Ok(7));
    assert_eq!(started, Ok(7));
    body.assert_empty();
    gestures.resume();
    body.assert_pencil();
}
