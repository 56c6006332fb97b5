//! Input routing - maps host pointer and keyboard events onto the annotator

mod keyboard;
mod pointer;

pub use keyboard::{KeyCommand, KeyRouter};
pub use pointer::route_pointer;
