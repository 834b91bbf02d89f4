//! ## Intro
//!
//! A minimal growable list stored in one contiguous heap block.
//!
//! [`ArrayList`] keeps its elements in positional order at the front of the block
//! and grows the block by about 1.5 times whenever it runs out of slots. Unlike
//! [`Vec`], every positional operation is checked and reports a [`ListError`]
//! instead of panicking, and a rejected operation never modifies the list.
//!
//! ```
//! use arraylist::{ArrayList, List, ListError};
//!
//! let mut list = ArrayList::with_capacity(2)?;
//! list.add(1);
//! list.add(2);
//! list.add(3); // grows the block
//!
//! assert_eq!(list.size(), 3);
//! assert_eq!(list.get(0)?, &1);
//!
//! assert_eq!(list.remove(1)?, 2);
//! assert_eq!(list, [1, 3]);
//!
//! assert_eq!(list.get(5), Err(ListError::IndexOutOfBounds { index: 5, size: 2 }));
//! # Ok::<(), ListError>(())
//! ```
//!
//! ## Operations
//!
//! All operations live on the object safe [`List`] trait:
//!
//! | Method | Valid index | Failure |
//! |--------|-------------|---------|
//! | [`add`](List::add) | - | none |
//! | [`add_at`](List::add_at) | `0..=size` | [`IndexOutOfBounds`](ListError::IndexOutOfBounds) |
//! | [`add_all`](List::add_all) | - | [`NullReference`](ListError::NullReference) |
//! | [`get`](List::get), [`set`](List::set), [`remove`](List::remove) | `0..size` | [`IndexOutOfBounds`](ListError::IndexOutOfBounds) |
//! | [`remove_element`](List::remove_element) | - | [`ElementNotFound`](ListError::ElementNotFound) |
//! | [`size`](List::size), [`is_empty`](List::is_empty) | - | none |
//!
//! ## Logging
//!
//! Growth events are emitted at `TRACE` level and rejected operations at `DEBUG`
//! level through [`tracing`]. Nothing is recorded unless the application installs
//! a subscriber.
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`.
//!
//! [`Vec`]: alloc::vec::Vec
#![no_std]

extern crate alloc;

mod utils;

pub mod error;
#[doc(inline)]
pub use error::ListError;

pub mod list;
#[doc(inline)]
pub use list::List;

pub mod array_list;
#[doc(inline)]
pub use array_list::{ArrayList, DEFAULT_CAPACITY};
