//! Edge flux computation.
//!
//! Fluxes are produced by a condition-action dispatcher: an ordered list of
//! predicates over edges, each paired with the strategy that computes the
//! flux for the edges it accepts.
//!
//! # Flux Traits
//!
//! - [`FluxCondition`]: decides whether a rule applies to an edge
//! - [`FluxAction`]: computes the flux vector of one edge
//! - [`FluxCalculator`]: produces the fluxes of all edges
//!
//! ## Built-in Actions
//! - [`RegularFlux`]: Riemann flux between the two interface values
//! - [`RigidWallFlux`]: reflecting wall
//! - [`FreeFlowFlux`]: physical flux of one side
//! - [`Ratchet`]: one-way valve between wall and free flow
//! - [`LagrangianFlux`]: mass-conserving moving interface with a per-edge
//!   Eulerian fallback, recording interface kinematics
//!
//! ## Riemann Solvers
//! - [`Hllc`]: HLLC for moving interfaces
//! - [`LagrangianHllc`]: HLLC that also reports the contact speed

mod actions;
mod conditions;
mod frame;
mod hllc;
mod kinematics;
mod lagrangian;
mod lagrangian_hllc;
mod reconstruction;
mod riemann;
mod sequence;
pub mod traits;

pub use actions::{FreeFlowFlux, Ratchet, RatchetDirection, RegularFlux, RigidWallFlux};
pub use conditions::{Always, IsBoundaryEdge, IsBulkEdge, RegularSpecialEdge, SpecialEdge};
pub use frame::EdgeFrame;
pub use hllc::Hllc;
pub use kinematics::{EdgeKinematics, EdgeMotion};
pub use lagrangian::{LagrangianCriterion, LagrangianFlux, WallsMassFlux};
pub use lagrangian_hllc::LagrangianHllc;
pub use reconstruction::{PiecewiseConstant, SpatialReconstruction};
pub use riemann::{
    Conserved, LagrangianRiemannSolver, LagrangianSolution, Primitive, RiemannSolver,
};
pub use sequence::{ConditionActionSequence, FluxRule};

// Re-export trait-based flux types
pub use traits::{
    BoxedFluxAction, BoxedFluxCondition, CellSide, FluxAction, FluxCalculator, FluxCondition,
    FluxContext, FluxInput,
};
