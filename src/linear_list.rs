// SPDX-License-Identifier: MPL-2.0

//! Sequentially allocated linear lists.
//!
//! [`BoundedStack`] keeps its items in a buffer whose size is fixed when the stack is created.
//! Pushing onto a full stack and popping from an empty one are reported as errors instead of
//! growing the buffer or returning a placeholder.

use tracing::trace;

/// Errors triggered by stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StackError {
    /// Error when inserting into a stack that is at capacity.
    #[error("stack overflow - attempted to insert on a full stack")]
    Overflow,
    /// Error when deleting from a stack without items.
    #[error("stack underflow - attempted to delete on an empty stack")]
    Underflow,
    /// Error when the backing buffer cannot be allocated.
    #[error("cannot allocate a stack buffer")]
    OutOfMemory,
}

/// A last-in-first-out stack with a fixed capacity.
///
/// A stack of capacity 0 is both full and empty: every push overflows and every pop
/// underflows.
#[derive(Debug)]
pub struct BoundedStack<T> {
    /// Reserved up front for `capacity` items and never grown past it.
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack that can hold `capacity` items.
    ///
    /// Returns [`StackError::OutOfMemory`] if the buffer cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, StackError> {
        let items = allocate(capacity)?;
        trace!(capacity, "allocated bounded stack");
        Ok(Self { items, capacity })
    }

    /// Discards the current buffer, along with any items still in it, and starts over as an
    /// empty stack of the given capacity.
    ///
    /// If the new buffer cannot be allocated the stack is left as it was.
    pub fn reset(&mut self, capacity: usize) -> Result<(), StackError> {
        let items = allocate(capacity)?;
        trace!(
            old_capacity = self.capacity,
            capacity,
            discarded = self.items.len(),
            "reset bounded stack"
        );
        self.items = items;
        self.capacity = capacity;
        Ok(())
    }

    /// Inserts a value at the top of the stack.
    ///
    /// On [`StackError::Overflow`] the stack is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow);
        }
        self.items.push(value);
        Ok(())
    }

    /// Alias of [`BoundedStack::push`].
    pub fn insert(&mut self, value: T) -> Result<(), StackError> {
        self.push(value)
    }

    /// Removes the value at the top of the stack and returns it.
    ///
    /// The stack keeps no reference to the returned value.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Alias of [`BoundedStack::pop`].
    pub fn delete(&mut self) -> Result<T, StackError> {
        self.pop()
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Maximum number of items the stack can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if a push would overflow.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }
}

fn allocate<T>(capacity: usize) -> Result<Vec<T>, StackError> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(capacity)
        .map_err(|_| StackError::OutOfMemory)?;
    Ok(items)
}

#[cfg(feature = "test-util")]
impl<T: core::fmt::Display> core::fmt::Display for BoundedStack<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "] ({}/{})", self.len(), self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use assert_matches::assert_matches;
    use rand::Rng;

    use crate::linear_list::{BoundedStack, StackError};

    #[test]
    fn overflow_then_underflow() {
        let mut stack = BoundedStack::new(3).unwrap();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.push(4), Err(StackError::Overflow));
        assert_eq!(stack.len(), 3);

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(StackError::Underflow));
        assert!(stack.is_empty());
    }

    #[test]
    fn zero_capacity() {
        let mut stack = BoundedStack::new(0).unwrap();
        assert!(stack.is_empty() && stack.is_full());
        assert_eq!(stack.insert("overflow"), Err(StackError::Overflow));
        assert_eq!(stack.delete(), Err(StackError::Underflow));
    }

    #[test]
    fn underflow_on_fresh_stack() {
        let mut stack = BoundedStack::<u8>::new(1).unwrap();
        assert_eq!(stack.delete(), Err(StackError::Underflow));
    }

    #[test]
    fn insert_and_delete() {
        let n = 10;
        let mut rng = rand::rng();
        let values: Vec<u32> = (0..n).map(|_| rng.random_range(1..=100)).collect();

        let mut stack = BoundedStack::new(n).unwrap();
        for value in &values {
            stack.insert(*value).unwrap();
        }
        for value in values.iter().rev() {
            assert_eq!(stack.delete(), Ok(*value));
        }
    }

    #[test]
    fn refill_after_overflow() {
        let mut stack = BoundedStack::new(2).unwrap();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert_eq!(stack.push('c'), Err(StackError::Overflow));
        assert_eq!(stack.pop(), Ok('b'));
        stack.push('c').unwrap();
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.pop(), Ok('a'));
    }

    #[test]
    fn repeated_fill_and_drain() {
        let mut stack = BoundedStack::new(2).unwrap();
        for round in 0..3 {
            stack.push(round).unwrap();
            assert_eq!(stack.len(), 1);
            stack.push(round + 10).unwrap();
            assert!(stack.is_full());
            assert_eq!(stack.push(99), Err(StackError::Overflow));
            assert_eq!(stack.len(), 2);

            assert_eq!(stack.pop(), Ok(round + 10));
            assert_eq!(stack.pop(), Ok(round));
            assert!(stack.is_empty());
            assert_eq!(stack.pop(), Err(StackError::Underflow));
        }
        assert_eq!(stack.capacity(), 2);
    }

    #[test]
    fn pop_releases_value() {
        let value = Rc::new(7);
        let mut stack = BoundedStack::new(1).unwrap();
        stack.push(Rc::clone(&value)).unwrap();
        assert_eq!(Rc::strong_count(&value), 2);

        drop(stack.pop().unwrap());
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn reset() {
        let value = Rc::new(());
        let mut stack = BoundedStack::new(0).unwrap();
        stack.reset(1).unwrap();
        stack.push(Rc::clone(&value)).unwrap();

        stack.reset(2).unwrap();
        assert_eq!(Rc::strong_count(&value), 1);
        assert_eq!(stack.capacity(), 2);
        assert!(stack.is_empty());
        assert_matches!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn out_of_memory() {
        assert_matches!(
            BoundedStack::<u64>::new(usize::MAX),
            Err(StackError::OutOfMemory)
        );

        let mut stack = BoundedStack::new(1).unwrap();
        stack.push(1u64).unwrap();
        assert_eq!(stack.reset(usize::MAX), Err(StackError::OutOfMemory));
        assert_eq!(stack.capacity(), 1);
        assert_eq!(stack.pop(), Ok(1));
    }
}
