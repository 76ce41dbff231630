//! Trait definitions for the Vetrina content studio.

mod driver;

pub use driver::GenerationDriver;
