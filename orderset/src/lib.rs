#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

//! [`OrderedSet`] is a key/value container that remembers the order in which
//! keys were inserted.
//!
//! It is built from two collections kept in lock step:
//!
//! - an ordered sequence of keys (a `Vec<K>`), appended on every insertion,
//! - a hash index from key to value (a `HashMap<K, V, S>`), giving
//!   **O(1)** average lookup, insertion and removal.
//!
//! ### Order
//!
//! Iteration follows the key sequence. Updating the value of a present key
//! never moves it. Removing a key swaps the last key into the vacated slot,
//! so insertion order is only kept until the first removal disturbs it.
//!
//! ### Errors
//!
//! [`add`][OrderedSet::add], [`borrow`][OrderedSet::borrow],
//! [`borrow_mut`][OrderedSet::borrow_mut] and [`remove`][OrderedSet::remove]
//! fail with a [`SetError`] and leave the container untouched. The
//! `Option`-returning [`get`][OrderedSet::get] family never fails.
//!
//! ### Feature Flags
//!
//! * `invariant-check`: verify the consistency of the key sequence and the
//!   hash index after every mutating call. Always on in unit tests.
//!
//! ### Alternate Hashers
//!
//! The default hasher is [`fxhash::FxBuildHasher`], which is fast but not
//! resistant to HashDoS. Use [`OrderedSet::with_hasher`] to pick another one.
//!
//! ```
//! use orderset::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.add("a", 1).unwrap();
//! set.add("b", 2).unwrap();
//! set.upsert("a", 10);
//!
//! assert_eq!(set.borrow("a"), Ok(&10));
//! assert!(set.keys().eq(&["a", "b"]));
//! ```

#[macro_use]
mod macros;
mod error;

pub mod set;

pub use crate::error::SetError;
pub use crate::set::OrderedSet;
