//! File format support

pub mod stx;
