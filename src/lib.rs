//! This crate is a small collections library built around a circular singly linked list.
//!
//! # Purpose
//! This crate is written as a learning exercise around linked data structures in Rust: raw
//! pointers, manual allocation and iterators over structures that don't end.
//!
//! # Error Handling
//! For a collection, it is more ergonomic for functions to panic in some cases, because users don't
//! want to be forced to handle an error every time they invoke a method. Imagine handling a
//! possible capacity overflow on every push into a list. So the primary methods panic, and each
//! has a `try_` counterpart that returns a [`Result`] instead.
//!
//! When this crate employs errors via [`Result`]s, it does so in a way that is strongly typed, with
//! structs (often ZSTs) that implement [`Error`](std::error::Error).
//!
//! # Configuration
//! Each collection module sits behind a Cargo feature (`circ`), all of which are enabled by the
//! default `collections-all` feature.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
