//! Implementation of the `#[derive(FieldAccessible)]` macro.
//!
//! This module turns a struct's named fields into the descriptor table and
//! value getter that listpick uses in place of runtime reflection.

mod attrs;
mod derive;

pub use derive::field_accessible_derive_impl;
