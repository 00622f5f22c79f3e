//! Change notifications raised by a [`Grid`](crate::Grid).
//!
//! Listeners are plain closures invoked synchronously on the call stack of
//! the mutation that caused the event. They cannot reach back into the grid
//! that is notifying them.

use std::fmt;

use crate::geom::Extent;

/// A notification emitted after a grid mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridEvent {
    /// Dimensions changed. Contents must be redrawn as well.
    Resized { extent: Extent, bordered: Extent },
    /// One or more cells changed value.
    Updated,
}

/// Handle returned by [`Grid::subscribe`](crate::Grid::subscribe), used to remove a listener again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&GridEvent)>;

/// An ordered set of event callbacks, owned by a [`Grid`](crate::Grid).
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(ListenerId, Callback)>,
    next: u64,
}

impl Listeners {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks fire in registration order.
    pub fn add(&mut self, f: impl FnMut(&GridEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.entries.push((id, Box::new(f)));
        id
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _)| *eid != id);
        self.entries.len() != before
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Deliver `event` to every callback.
    pub fn emit(&mut self, event: GridEvent) {
        for (_, f) in self.entries.iter_mut() {
            f(&event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ls = Listeners::new();
        let l1 = Rc::clone(&log);
        ls.add(move |_| l1.borrow_mut().push(1));
        let l2 = Rc::clone(&log);
        ls.add(move |_| l2.borrow_mut().push(2));
        ls.emit(GridEvent::Updated);
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn remove_listener() {
        let hits = Rc::new(RefCell::new(0));
        let mut ls = Listeners::new();
        let h = Rc::clone(&hits);
        let id = ls.add(move |_| *h.borrow_mut() += 1);
        assert!(ls.remove(id));
        assert!(!ls.remove(id));
        ls.emit(GridEvent::Updated);
        assert_eq!(*hits.borrow(), 0);
        assert_eq!(ls.len(), 0);
    }
}
