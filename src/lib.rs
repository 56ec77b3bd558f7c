//! Planisphere star wheel generator.
//!
//! Projects stars, constellation figures and names onto the rotating disc of
//! a planisphere for a given latitude, surrounds it with a 27-sector
//! Nakshatra ring, and issues the drawing calls against a pluggable
//! [`renderer::DrawingSurface`].

pub mod calendar;
pub mod catalogue;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod i18n;
pub mod layout;
pub mod projection;
pub mod renderer;

pub use error::{Result, StarWheelError};
