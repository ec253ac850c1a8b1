// SPDX-License-Identifier: MPL-2.0

//! Linked allocation of linear lists.
//!
//! [`SinglyLinkedList`] supports insertion and removal at its head only, both in constant time.
//! The number of nodes is tracked as the list changes rather than recounted.

use tracing::trace;

/// Errors triggered by linked list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ListError {
    /// Error when popping from a list without nodes.
    #[error("cannot pop an empty list")]
    Underflow,
}

/// Represents a node of a singly linked list.
#[derive(Debug)]
pub struct ListNode<T> {
    value: T,
    next: Link<T>,
}

/// Owning link to the rest of a chain.
#[derive(Debug)]
struct Link<T>(Option<Box<ListNode<T>>>);

// Unlink node by node; the derived drop would recurse once per node.
impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut link = self.0.take();
        while let Some(mut node) = link {
            link = node.next.0.take();
        }
    }
}

impl<T> ListNode<T> {
    /// Creates a node linked in front of `next`.
    pub fn new(value: T, next: Option<Box<ListNode<T>>>) -> Box<Self> {
        Box::new(Self {
            value,
            next: Link(next),
        })
    }

    /// The value stored in the node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The next node in the list.
    pub fn next(&self) -> Option<&ListNode<T>> {
        self.next.0.as_deref()
    }
}

/// A linked list whose nodes have a single link to the next node in the list.
#[derive(Debug)]
pub struct SinglyLinkedList<T> {
    head: Option<Box<ListNode<T>>>,
    size: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Takes ownership of a chain of nodes. `None` denotes the empty list.
    pub fn new(head: Option<Box<ListNode<T>>>) -> Self {
        let mut size = 0;
        let mut node = head.as_deref();
        while let Some(n) = node {
            size += 1;
            node = n.next();
        }
        trace!(size, "adopted linked list chain");
        Self { head, size }
    }

    /// The head of the list.
    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    /// The number of entries in the list.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts a node at the head of the list.
    pub fn insert(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(ListNode::new(value, next));
        self.size += 1;
    }

    /// Removes the head of the list and returns the value stored in it.
    pub fn pop(&mut self) -> Result<T, ListError> {
        let head = self.head.take().ok_or(ListError::Underflow)?;
        let ListNode { value, mut next } = *head;
        self.head = next.0.take();
        self.size -= 1;
        Ok(value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self { head: None, size: 0 }
    }
}

#[cfg(feature = "test-util")]
impl<T: core::fmt::Display> core::fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        let mut node = self.head();
        while let Some(n) = node {
            write!(f, "{}", n.value)?;
            node = n.next();
            if node.is_some() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::linked_list::{ListError, ListNode, SinglyLinkedList};

    #[test]
    fn is_empty() {
        let list = SinglyLinkedList::<u32>::new(None);
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);

        let list = SinglyLinkedList::new(Some(ListNode::new(1, None)));
        assert!(!list.is_empty());
        assert_eq!(list.size(), 1);
    }

    #[test]
    fn insert() {
        let mut list = SinglyLinkedList::default();
        for (i, value) in [1, 2, 3].into_iter().enumerate() {
            list.insert(value);
            assert_eq!(list.size(), i + 1);
        }

        let head = list.head().unwrap();
        assert_eq!(*head.value(), 3);
        assert_eq!(*head.next().unwrap().value(), 2);
        assert_eq!(*head.next().unwrap().next().unwrap().value(), 1);
        assert!(head.next().unwrap().next().unwrap().next().is_none());
    }

    #[test]
    fn pop_is_lifo() {
        let mut list = SinglyLinkedList::default();
        list.insert('a');
        list.insert('b');
        list.insert('c');
        assert_eq!(list.size(), 3);

        assert_eq!(list.pop(), Ok('c'));
        assert_eq!(list.pop(), Ok('b'));
        assert_eq!(list.pop(), Ok('a'));
        assert_eq!(list.size(), 0);
        assert!(list.head().is_none());
        assert_matches!(list.pop(), Err(ListError::Underflow));
        assert_eq!(list.size(), 0);
    }

    #[test]
    fn adopt_chain() {
        let chain = ListNode::new(3, Some(ListNode::new(2, Some(ListNode::new(1, None)))));
        let mut list = SinglyLinkedList::new(Some(chain));
        assert_eq!(list.size(), 3);

        list.insert(4);
        assert_eq!(list.size(), 4);
        for expected in [4, 3, 2, 1] {
            assert_eq!(list.pop(), Ok(expected));
        }
        assert!(list.is_empty());
    }

    #[test]
    fn drop_long_list() {
        let mut list = SinglyLinkedList::default();
        for i in 0..1_000_000u32 {
            list.insert(i);
        }
        assert_eq!(list.size(), 1_000_000);
        drop(list);
    }

    #[test]
    fn drop_long_chain() {
        let chain = (0..1_000_000u32).fold(None, |next, value| Some(ListNode::new(value, next)));
        assert_eq!(chain.as_ref().map(|node| *node.value()), Some(999_999));
        drop(chain);
    }
}
