use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

/// A named piece of visual state. Subscribers run synchronously, in
/// subscription order, whenever `set` changes the value.
pub struct VisualCell<T> {
    name: &'static str,
    value: RefCell<T>,
    subscribers: RefCell<Vec<Rc<dyn Fn(&T)>>>,
}

impl<T: Clone + PartialEq> VisualCell<T> {
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            name,
            value: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Returns whether the value changed.
    pub fn set(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            return false;
        }
        *self.value.borrow_mut() = value.clone();

        // Snapshot so a subscriber may subscribe or read the cell.
        let subscribers: Vec<_> = self.subscribers.borrow().clone();
        trace!("{} changed, notifying {}", self.name, subscribers.len());
        for subscriber in subscribers {
            subscriber(&value);
        }
        true
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notifies_only_on_change() {
        let cell = VisualCell::new("opacity", 1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            cell.subscribe(move |v| seen.borrow_mut().push(*v));
        }

        assert!(cell.set(2));
        assert!(!cell.set(2));
        assert!(cell.set(3));
        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert_eq!(cell.get(), 3);
    }

    #[test]
    fn subscribers_run_in_subscription_order() {
        let cell = VisualCell::new("visible", true);
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["dot", "outline"] {
            let order = order.clone();
            cell.subscribe(move |_| order.borrow_mut().push(tag));
        }
        cell.set(false);
        assert_eq!(*order.borrow(), ["dot", "outline"]);
    }

    #[test]
    fn subscriber_can_read_the_cell() {
        let cell = Rc::new(VisualCell::new("x", 0));
        let echoed = Rc::new(Cell::new(0));
        {
            let weak = Rc::downgrade(&cell);
            let echoed = echoed.clone();
            cell.subscribe(move |_| {
                if let Some(cell) = weak.upgrade() {
                    echoed.set(cell.get());
                }
            });
        }
        cell.set(7);
        assert_eq!(echoed.get(), 7);
    }
}
