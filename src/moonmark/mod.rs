//! Main module for moonmark library functionality

pub mod ast;
pub mod error;
pub mod formats;
pub mod formatter;
pub mod inlines;
pub mod tables;
pub mod testing;
pub mod transforms;
