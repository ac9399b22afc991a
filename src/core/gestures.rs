/// Body-level mouse events a drawing tool listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyEvent {
    MouseDown,
    MouseMove,
    MouseUp,
    MouseLeave,
}

impl BodyEvent {
    pub const ALL: [BodyEvent; 4] = [
        BodyEvent::MouseDown,
        BodyEvent::MouseMove,
        BodyEvent::MouseUp,
        BodyEvent::MouseLeave,
    ];

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

/// Something event handlers of type `H` can be bound to, e.g. `document.body`.
pub trait Bind<H> {
    fn bind(&self, event: BodyEvent, handler: Option<&H>);
}

/// Handlers of the active drawing tool, installed on `target`.
///
/// The registry keeps its own copy of every handler so a canvas resize can
/// detach them all (`pause`) and put them back afterwards (`resume`).
pub struct Gestures<B, H> {
    target: B,
    handlers: [Option<H>; 4],
    paused: bool,
}

impl<B: Bind<H>, H> Gestures<B, H> {
    pub fn new(target: B) -> Self {
        Self {
            target,
            handlers: [None, None, None, None],
            paused: false,
        }
    }

    pub fn set(&mut self, event: BodyEvent, handler: Option<H>) {
        self.handlers[event.slot()] = handler;
        if !self.paused {
            self.attach(event);
        }
    }

    /// Drop every handler, e.g. when the tool bar selection changes.
    pub fn clear(&mut self) {
        for event in BodyEvent::ALL {
            self.set(event, None);
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
        for event in BodyEvent::ALL {
            self.target.bind(event, None);
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
        for event in BodyEvent::ALL {
            self.attach(event);
        }
    }

    /// Pause, then run `start`. If `start` fails the handlers go back.
    pub fn try_paused<T, E>(&mut self, start: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.pause();
        let started = start();
        if started.is_err() {
            self.resume();
        }
        started
    }

    fn attach(&self, event: BodyEvent) {
        self.target.bind(event, self.handlers[event.slot()].as_ref());
    }
}
