//! Cell state and conservative update.
//!
//! # Submodules
//!
//! - [`state`]: cell state, extensive records and the tracer/sticker registry
//! - [`update`]: extensive updaters applying edge fluxes to the records
//!
//! # Updater Trait
//!
//! The [`ExtensiveUpdater`] trait provides a generic interface for the
//! conservative update:
//!
//! - [`SimpleExtensiveUpdater`]: baseline flux × area × dt update
//! - [`LagrangianExtensiveUpdater`]: baseline plus swept-volume correction

pub mod state;
pub mod update;

// Re-export state types
pub use state::{ComputationalCell, Extensive, TracerStickerNames};

// Re-export updater types
pub use update::{
    ExtensiveUpdater, LagrangianExtensiveUpdater, SimpleExtensiveUpdater, UpdateContext,
};
