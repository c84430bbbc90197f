//! Cell state abstractions.
//!
//! - [`ComputationalCell`]: primitive state (density, pressure, velocity,
//!   tracer concentrations, stickers)
//! - [`Extensive`]: conserved record (mass, momentum, energy, tracer masses),
//!   also used as the flux vector
//! - [`TracerStickerNames`]: registry fixing tracer and sticker ordering

mod cell;
mod extensive;
mod names;

pub use cell::ComputationalCell;
pub use extensive::Extensive;
pub use names::TracerStickerNames;
