//! Item domain

mod entity;

pub use entity::{ItemSelector, Person};
