//! Application state module

mod screen;

pub use screen::*;
