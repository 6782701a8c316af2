//! Conversion adapters - external document converter implementations.

mod pandoc;

pub use pandoc::PandocConverter;
