//! Core types shared across the game crates.
//!
//! This crate provides the foundational pieces every other system builds on:
//! - Viewport transform between galaxy-map world space and screen space
//! - Hit testing for entities on the map
//! - HSL colors for generated content

pub mod color;
pub mod picking;
pub mod viewport;

pub use color::*;
pub use picking::*;
pub use viewport::*;

// Re-export commonly used types
pub use glam::{DVec2, Vec3};
