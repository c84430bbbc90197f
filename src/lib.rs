//! # ale-rs
//!
//! Conservative-update core of a two-dimensional arbitrary
//! Lagrangian-Eulerian (moving mesh) finite-volume hydrodynamics solver.
//!
//! This crate provides the building blocks of one timestep:
//! - Mesh point motion with cell rounding and boundary overshoot clamping
//! - Edge velocities from point velocities
//! - A condition-action flux dispatcher over a catalogue of flux strategies
//!   (regular, rigid wall, ratchet, Lagrangian)
//! - Extensive updaters with a swept-volume correction for Lagrangian edges
//!
//! The tessellation, equation of state, Riemann solvers and interface
//! reconstruction are collaborators behind traits; simple implementations
//! ([`PolygonMesh2D`], [`IdealGas`], [`Hllc`], [`LagrangianHllc`],
//! [`flux::PiecewiseConstant`]) are included.
//!
//! Control flow per timestep: motion → edge velocities → fluxes → update.

pub mod boundary;
pub mod equations;
pub mod error;
pub mod flux;
pub mod mesh;
pub mod motion;
pub mod solver;
pub mod types;

// Re-export main types for convenience
pub use boundary::{BoundaryKind, OuterBoundary};
pub use equations::{EquationOfState, IdealGas};
pub use error::AleError;
pub use flux::{
    CellSide, ConditionActionSequence, EdgeKinematics, FluxAction, FluxCalculator,
    FluxCondition, FluxContext, FluxInput, FreeFlowFlux, Hllc, LagrangianFlux, LagrangianHllc,
    Ratchet, RatchetDirection, RegularFlux, RigidWallFlux, WallsMassFlux,
};
pub use mesh::{CellRef, Edge, GeometryCache, PolygonMesh2D, Tessellation};
pub use motion::{Eulerian, Lagrangian, PointMotion, RoundCells, RoundCellsConfig, edge_velocities};
pub use solver::{
    ComputationalCell, Extensive, ExtensiveUpdater, LagrangianExtensiveUpdater,
    SimpleExtensiveUpdater, TracerStickerNames, UpdateContext,
};
pub use types::{Bounds2D, CellIndex, EdgeIndex, SideBoundaries};
