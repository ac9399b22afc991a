use crate::core::{Point, Segment};
use crate::gestures::{mouse_handler, BodyEvent};
use crate::PaintContext;
use std::cell::Cell;
use std::rc::Rc;

/// Freehand drawing: every mouse move paints the segment from the previous
/// position. Strokes only start on the canvas but may leave and re-enter it.
pub fn install_pencil(ctx: &PaintContext) {
    let last: Rc<Cell<Option<Point>>> = Rc::new(Cell::new(None));

    let down = {
        let ctx = ctx.clone();
        let last = Rc::clone(&last);
        mouse_handler(move |ev| {
            let mut surface = ctx.surface.borrow_mut();
            let point = surface.point(&ev);
            if !surface.contains(point) {
                return;
            }
            let color = *ctx.color.borrow();
            surface
                .image_mut()
                .draw_segment(&Segment::new(point, point), &color);
            if let Err(e) = surface.present() {
                log::error!("[pencil] {e:#}");
            }
            last.set(Some(point));
        })
    };

    let moved = {
        let ctx = ctx.clone();
        let last = Rc::clone(&last);
        mouse_handler(move |ev| {
            let Some(prev) = last.get() else {
                return;
            };
            let mut surface = ctx.surface.borrow_mut();
            let next = surface.point(&ev);
            if let Some(segment) = surface.clip(Segment::new(prev, next)) {
                let color = *ctx.color.borrow();
                surface.image_mut().draw_segment(&segment, &color);
                if let Err(e) = surface.present() {
                    log::error!("[pencil] {e:#}");
                }
            }
            last.set(Some(next));
        })
    };

    let end = mouse_handler(move |_| last.set(None));

    let mut gestures = ctx.gestures.borrow_mut();
    gestures.set(BodyEvent::MouseDown, Some(down));
    gestures.set(BodyEvent::MouseMove, Some(moved));
    gestures.set(BodyEvent::MouseUp, Some(end.clone()));
    gestures.set(BodyEvent::MouseLeave, Some(end));
}

/// Straight lines: press sets the anchor, moves preview on a scratch copy,
/// release commits into the canvas image.
pub fn install_line(ctx: &PaintContext) {
    let anchor: Rc<Cell<Option<Point>>> = Rc::new(Cell::new(None));

    let down = {
        let ctx = ctx.clone();
        let anchor = Rc::clone(&anchor);
        mouse_handler(move |ev| {
            let surface = ctx.surface.borrow();
            let point = surface.point(&ev);
            if surface.contains(point) {
                anchor.set(Some(point));
            }
        })
    };

    let moved = {
        let ctx = ctx.clone();
        let anchor = Rc::clone(&anchor);
        mouse_handler(move |ev| {
            let Some(a) = anchor.get() else {
                return;
            };
            let surface = ctx.surface.borrow();
            let result = match surface.clip(Segment::new(a, surface.point(&ev))) {
                Some(segment) => {
                    let mut preview = surface.image().clone();
                    preview.draw_segment(&segment, &ctx.color.borrow());
                    surface.present_image(&preview)
                }
                None => surface.present(),
            };
            if let Err(e) = result {
                log::error!("[line] {e:#}");
            }
        })
    };

    let end = {
        let ctx = ctx.clone();
        mouse_handler(move |ev| {
            let Some(a) = anchor.take() else {
                return;
            };
            let mut surface = ctx.surface.borrow_mut();
            if let Some(segment) = surface.clip(Segment::new(a, surface.point(&ev))) {
                let color = *ctx.color.borrow();
                surface.image_mut().draw_segment(&segment, &color);
                log::debug!("[line] {:?} -> {:?}", segment.a, segment.b);
            }
            if let Err(e) = surface.present() {
                log::error!("[line] {e:#}");
            }
        })
    };

    let mut gestures = ctx.gestures.borrow_mut();
    gestures.set(BodyEvent::MouseDown, Some(down));
    gestures.set(BodyEvent::MouseMove, Some(moved));
    gestures.set(BodyEvent::MouseUp, Some(end.clone()));
    gestures.set(BodyEvent::MouseLeave, Some(end));
}
