// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Knuth
//!
//! Classic abstract data types, as found in the opening chapters of a foundational algorithms
//! text:
//!
//! - [`binary_tree`]: a caller-built binary tree with pre-, in- and post-order traversal.
//! - [`linear_list`]: a stack with a fixed capacity that reports overflow and underflow.
//! - [`linked_list`]: a singly linked list with insertion and removal at its head.
//!
//! The three modules are independent. Values stored in the containers are never inspected.

pub mod binary_tree;
pub mod linear_list;
pub mod linked_list;
#[cfg(feature = "test-util")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-util")))]
pub mod test_util;
