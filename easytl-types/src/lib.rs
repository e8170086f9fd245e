//! Telegram API object shapes consumed by the easytl facade.
//!
//! Only the constructors the facade actually touches are modelled here; the
//! wire encoding belongs to whatever transport produces these values.
//!
//! # Overview
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`types`] | Concrete constructors (bare types) as `struct`s            |
//! | [`enums`] | Boxed types as `enum`s, one variant per constructor        |
//!
//! Every bare type converts into its boxed enum with `From`, and back out
//! with `TryFrom` (failing with the original value when the variant does not
//! match).
//!
//! # Paginated results
//!
//! `messages.getHistory` and `messages.getDialogs` answer either with the
//! complete set or with a slice of it. Both framings are explicit variants of
//! [`enums::messages::Messages`] and [`enums::messages::Dialogs`], and each
//! union has exactly one unwrap function, `into_full`:
//!
//! ```rust
//! use easytl_types::{enums, types};
//!
//! let raw = enums::messages::Messages::Slice(types::messages::MessagesSlice {
//!     count: 120,
//!     ..Default::default()
//! });
//! assert!(!raw.is_complete());
//! let full: types::messages::Messages = raw.into_full();
//! assert!(full.messages.is_empty());
//! ```

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

pub mod enums;
pub mod types;
