//! Defines the packed bitmap font structures produced by `bmf-converter` and walked by the
//! embedded text renderer.
//!
//! Includes both read-only and writable interfaces.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod glyph;
pub mod info;
pub mod offset_table;
