//! Implementation of the `#[derive(Seekable)]` macro.
//!
//! Generates field accessors and field-name constants from `#[seek(...)]`
//! struct annotations.

mod attrs;
mod derive;

pub use derive::seekable_derive_impl;
