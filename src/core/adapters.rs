//! core::adapters
//!
//! Stack and queue views over a list.
//!
//! # Design
//!
//! Adapters borrow the list they were created from and never copy it, so
//! every push or pop is visible through the list once the borrow ends.
//! Capacity, kind and length checks are the list's own.
//!
//! # Example
//!
//! ```
//! use typedlist::core::list::List;
//!
//! let mut list = List::integers();
//! {
//!     let mut queue = list.as_queue();
//!     queue.enqueue(1).unwrap();
//!     queue.enqueue(2).unwrap();
//!     assert_eq!(queue.dequeue().unwrap().as_integer(), Some(1));
//! }
//! assert_eq!(list.render(), "0: 2\n");
//! ```

use super::error::ListError;
use super::list::List;
use super::types::Element;

/// LIFO view: push inserts at index 0, pop removes the highest index.
#[derive(Debug)]
pub struct Stack<'a> {
    list: &'a mut List,
}

impl<'a> Stack<'a> {
    pub fn new(list: &'a mut List) -> Self {
        Self { list }
    }

    /// Insert at the front of the backing list.
    pub fn push(&mut self, value: impl Into<Element>) -> Result<(), ListError> {
        self.list.add(0, value)
    }

    /// Remove and return the element at the highest index.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] when the list is empty.
    pub fn pop(&mut self) -> Result<Element, ListError> {
        match self.list.len().checked_sub(1) {
            Some(last) => self.list.remove(last),
            None => Err(self.list.out_of_bounds(0)),
        }
    }

    /// The element `pop` would return.
    pub fn peek(&self) -> Option<&Element> {
        self.list.as_slice().last()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The backing list.
    pub fn list(&self) -> &List {
        &*self.list
    }
}

/// FIFO view: enqueue appends, dequeue removes index 0.
#[derive(Debug)]
pub struct Queue<'a> {
    list: &'a mut List,
}

impl<'a> Queue<'a> {
    pub fn new(list: &'a mut List) -> Self {
        Self { list }
    }

    /// Append to the back of the backing list.
    pub fn enqueue(&mut self, value: impl Into<Element>) -> Result<(), ListError> {
        let back = self.list.len();
        self.list.add(back, value)
    }

    /// Remove and return the element at index 0.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyCollection`] when the list is empty.
    pub fn dequeue(&mut self) -> Result<Element, ListError> {
        if self.list.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        self.list.remove(0)
    }

    /// The element `dequeue` would return.
    pub fn front(&self) -> Option<&Element> {
        self.list.get(0)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The backing list.
    pub fn list(&self) -> &List {
        &*self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CAPACITY;

    fn ints(values: &[i64]) -> List {
        let mut list = List::integers();
        for (i, v) in values.iter().enumerate() {
            list.add(i, *v).unwrap();
        }
        list
    }

    mod stack {
        use super::*;

        #[test]
        fn pop_takes_highest_index() {
            let mut list = ints(&[1, 2, 3]);
            let mut stack = list.as_stack();
            assert_eq!(stack.pop().unwrap(), Element::from(3));
            assert_eq!(stack.pop().unwrap(), Element::from(2));
            assert_eq!(stack.pop().unwrap(), Element::from(1));
            assert!(matches!(
                stack.pop().unwrap_err(),
                ListError::IndexOutOfBounds { .. }
            ));
        }

        #[test]
        fn push_grows_at_front() {
            let mut list = List::integers();
            {
                let mut stack = list.as_stack();
                stack.push(4).unwrap();
                stack.push(5).unwrap();
                stack.push(6).unwrap();
                assert_eq!(stack.peek(), Some(&Element::from(4)));
            }
            assert_eq!(list.render(), "0: 6\n1: 5\n2: 4\n");
        }

        #[test]
        fn push_then_pop_order() {
            let mut list = List::texts();
            let mut stack = list.as_stack();
            for s in ["a", "b", "c"] {
                stack.push(s).unwrap();
            }
            let popped: Vec<_> = (0..3).map(|_| stack.pop().unwrap()).collect();
            assert_eq!(
                popped,
                vec![Element::from("a"), Element::from("b"), Element::from("c")]
            );
        }

        #[test]
        fn inherits_list_checks() {
            let mut list = ints(&[0; CAPACITY]);
            let mut stack = list.as_stack();
            assert!(matches!(
                stack.push(1).unwrap_err(),
                ListError::CapacityExceeded { .. }
            ));

            let mut list = List::integers();
            let mut stack = list.as_stack();
            assert!(matches!(
                stack.push("x").unwrap_err(),
                ListError::InvalidType { .. }
            ));
            assert!(stack.is_empty());
        }
    }

    mod queue {
        use super::*;

        #[test]
        fn fifo_order() {
            let mut list = List::integers();
            let mut queue = list.as_queue();
            for n in 1..=3 {
                queue.enqueue(n).unwrap();
            }
            assert_eq!(queue.front(), Some(&Element::from(1)));
            assert_eq!(queue.dequeue().unwrap(), Element::from(1));
            assert_eq!(queue.dequeue().unwrap(), Element::from(2));
            assert_eq!(queue.dequeue().unwrap(), Element::from(3));
            assert!(matches!(
                queue.dequeue().unwrap_err(),
                ListError::EmptyCollection
            ));
        }

        #[test]
        fn shares_backing_list() {
            let mut list = ints(&[1, 2]);
            list.as_queue().enqueue(3).unwrap();
            assert_eq!(list.len(), 3);
            list.remove(0).unwrap();
            assert_eq!(list.as_queue().dequeue().unwrap(), Element::from(2));
            assert_eq!(list.as_queue().list().render(), "0: 3\n");
        }

        #[test]
        fn inherits_length_check() {
            let mut list = List::texts();
            let mut queue = list.as_queue();
            assert!(matches!(
                queue.enqueue("z".repeat(300)).unwrap_err(),
                ListError::LengthExceeded { .. }
            ));
            assert_eq!(queue.len(), 0);
        }
    }
}
