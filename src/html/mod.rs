//! Maud markup for the generator page.

pub mod pages;
mod wrappers;
