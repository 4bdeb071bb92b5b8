use std::cell::RefCell;
use std::collections::VecDeque;

use crate::event::{EventHandler, Scene, SketchEvent};

/// A synchronous observer list.
///
/// Mutators `emit` into a queue; the owner calls `dispatch` before returning
/// control to the input source, which delivers queued events to every
/// handler in emission order.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
    pending: RefCell<VecDeque<SketchEvent>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .field("pending", &self.pending.borrow())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Queue an event for the next dispatch
    pub fn emit(&self, event: impl Into<SketchEvent>) {
        let event = event.into();
        log::trace!("Emitting {:?}", event);
        self.pending.borrow_mut().push_back(event);
    }

    /// Number of events waiting to be dispatched
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Deliver all queued events to every handler. Returns how many were delivered.
    pub fn dispatch(&self, scene: &Scene<'_>) -> usize {
        let mut handlers = self.handlers.borrow_mut();
        let mut delivered = 0;
        loop {
            // Release the queue borrow before calling handlers.
            let next = self.pending.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            for handler in handlers.iter_mut() {
                handler.handle_event(&event, scene);
            }
            delivered += 1;
        }
        delivered
    }
}
