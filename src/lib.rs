//! ascii-render library crate.
//!
//! Converts a raster image into lines of text where each glyph stands for
//! the brightness of one sampled pixel. The binary is thin glue over
//! [`render::run`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod raster;
pub mod render;
pub mod sink;
pub mod terminal;
