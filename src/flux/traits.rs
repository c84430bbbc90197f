//! Trait-based flux abstraction.
//!
//! A flux calculation is split into two roles:
//!
//! - [`FluxCondition`]: a predicate over an edge that decides whether a rule
//!   applies and which side holds the cell the action should look at
//! - [`FluxAction`]: the strategy that turns the two states adjacent to the
//!   edge into a flux vector
//!
//! [`super::ConditionActionSequence`] pairs them into an ordered rule list
//! and implements [`FluxCalculator`].
//!
//! # Example
//! ```
//! use ale_rs::flux::{
//!     CellSide, EdgeKinematics, FluxAction, FluxContext, FluxCondition, Hllc, IsBulkEdge,
//!     RegularFlux,
//! };
//! use ale_rs::boundary::BoundaryKind;
//! use ale_rs::equations::IdealGas;
//! use ale_rs::mesh::{PolygonMesh2D, Tessellation};
//! use ale_rs::solver::{ComputationalCell, TracerStickerNames};
//! use ale_rs::types::{Bounds2D, EdgeIndex};
//! use glam::DVec2;
//!
//! let mesh = PolygonMesh2D::uniform_rectangle(
//!     Bounds2D::new(0.0, 2.0, 0.0, 1.0), 2, 1, BoundaryKind::Rigid,
//! );
//! let real = vec![ComputationalCell::new(1.0, 1.0, DVec2::ZERO); 2];
//! let cells = mesh.with_ghost_states(&real).unwrap();
//! let eos = IdealGas::default();
//! let names = TracerStickerNames::default();
//!
//! // The interior x-face is the second edge pushed by the builder
//! let index = EdgeIndex::new(1);
//! let edge = &mesh.edges()[1];
//! let ctx = FluxContext::new(index, edge, &mesh, &cells, &eos, DVec2::ZERO, 0.0, &names);
//!
//! assert_eq!(IsBulkEdge.evaluate(&ctx), Some(CellSide::First));
//!
//! // Using a trait object
//! let action: &dyn FluxAction = &RegularFlux::new(Hllc);
//! let mut kinematics = EdgeKinematics::with_edges(mesh.edges().len());
//! let flux = action.compute(&ctx, CellSide::First, &mut kinematics).unwrap();
//! assert!(flux.mass.abs() < 1e-12);
//! ```

use glam::DVec2;

use crate::equations::EquationOfState;
use crate::error::AleError;
use crate::mesh::{Edge, GeometryCache, Tessellation};
use crate::solver::{ComputationalCell, Extensive, TracerStickerNames};
use crate::types::EdgeIndex;

use super::frame::EdgeFrame;
use super::kinematics::EdgeKinematics;

// =============================================================================
// Flux Context
// =============================================================================

/// Which neighbor of an edge a rule singled out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellSide {
    /// The first neighbor (the normal points away from it)
    First,
    /// The second neighbor (the normal points toward it)
    Second,
}

impl CellSide {
    /// The other side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            CellSide::First => CellSide::Second,
            CellSide::Second => CellSide::First,
        }
    }
}

/// Everything a condition or action may inspect about one edge.
///
/// `cells` are the raw states of all real and ghost cells. `edge_values`
/// are the states the action should feed to its Riemann solver: the raw
/// neighbor states for first-order rules, the reconstructed interface
/// values for second-order rules. Conditions always look at `cells`.
#[derive(Clone, Copy)]
pub struct FluxContext<'a> {
    /// Position of the edge in the tessellation
    pub index: EdgeIndex,
    /// The edge itself
    pub edge: &'a Edge,
    /// The tessellation
    pub tess: &'a dyn Tessellation,
    /// Raw cell states, real and ghost
    pub cells: &'a [ComputationalCell],
    /// Equation of state
    pub eos: &'a dyn EquationOfState,
    /// Lab-frame velocity of the edge
    pub edge_velocity: DVec2,
    /// States on the (first, second) side of the interface
    pub edge_values: (&'a ComputationalCell, &'a ComputationalCell),
    /// Simulation time
    pub time: f64,
    /// Tracer and sticker registry
    pub names: &'a TracerStickerNames,
}

impl<'a> FluxContext<'a> {
    /// Context whose edge values are the raw neighbor states.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: EdgeIndex,
        edge: &'a Edge,
        tess: &'a dyn Tessellation,
        cells: &'a [ComputationalCell],
        eos: &'a dyn EquationOfState,
        edge_velocity: DVec2,
        time: f64,
        names: &'a TracerStickerNames,
    ) -> Self {
        Self {
            index,
            edge,
            tess,
            cells,
            eos,
            edge_velocity,
            edge_values: (&cells[edge.neighbors.0], &cells[edge.neighbors.1]),
            time,
            names,
        }
    }

    /// Raw neighbor index on `side`.
    #[inline]
    pub fn neighbor(&self, side: CellSide) -> usize {
        match side {
            CellSide::First => self.edge.neighbors.0,
            CellSide::Second => self.edge.neighbors.1,
        }
    }

    /// Raw state of the neighbor on `side`.
    #[inline]
    pub fn cell(&self, side: CellSide) -> &'a ComputationalCell {
        &self.cells[self.neighbor(side)]
    }

    /// Interface value on `side`.
    #[inline]
    pub fn value(&self, side: CellSide) -> &'a ComputationalCell {
        match side {
            CellSide::First => self.edge_values.0,
            CellSide::Second => self.edge_values.1,
        }
    }

    /// Orthonormal frame of the edge.
    #[inline]
    pub fn frame(&self) -> EdgeFrame {
        EdgeFrame::new(self.tess, self.edge)
    }

    /// Side holding a real cell, preferring the first.
    #[inline]
    pub fn real_side(&self) -> Option<CellSide> {
        if self.tess.is_real(self.edge.neighbors.0) {
            Some(CellSide::First)
        } else if self.tess.is_real(self.edge.neighbors.1) {
            Some(CellSide::Second)
        } else {
            None
        }
    }
}

// =============================================================================
// Condition and Action Traits
// =============================================================================

/// Predicate deciding whether a rule applies to an edge.
///
/// Returns `None` when the rule does not apply, otherwise the side whose
/// cell the paired action should treat as the relevant one.
pub trait FluxCondition: Send + Sync {
    /// Evaluate the condition.
    fn evaluate(&self, ctx: &FluxContext<'_>) -> Option<CellSide>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Strategy computing the flux across one edge.
///
/// The returned vector is the conserved quantity per unit area per unit
/// time flowing from the first neighbor to the second, with one tracer
/// entry per registered tracer.
///
/// # Implementation Notes
///
/// - Actions may keep per-step caches behind interior mutability; `reset`
///   clears them and is called once at the start of every flux calculation
/// - Only Lagrangian-aware actions write to the kinematic record
pub trait FluxAction: Send + Sync {
    /// Compute the flux across `ctx.edge`.
    fn compute(
        &self,
        ctx: &FluxContext<'_>,
        side: CellSide,
        kinematics: &mut EdgeKinematics,
    ) -> Result<Extensive, AleError>;

    /// Human-readable name for debugging and logging.
    fn name(&self) -> &'static str;

    /// Clear per-step state.
    fn reset(&self) {}
}

/// Type alias for a boxed action.
pub type BoxedFluxAction = Box<dyn FluxAction>;

/// Type alias for a boxed condition.
pub type BoxedFluxCondition = Box<dyn FluxCondition>;

// =============================================================================
// Flux Calculator
// =============================================================================

/// Inputs of one flux calculation.
#[derive(Clone, Copy)]
pub struct FluxInput<'a> {
    /// The tessellation
    pub tess: &'a dyn Tessellation,
    /// Lab-frame velocity of every edge, by edge index
    pub edge_velocities: &'a [DVec2],
    /// Cell states, real and ghost
    pub cells: &'a [ComputationalCell],
    /// Extensive records of the real cells
    pub extensives: &'a [Extensive],
    /// Interface areas and cell volumes; checked against `tess` before
    /// dispatch
    pub cache: &'a GeometryCache,
    /// Equation of state
    pub eos: &'a dyn EquationOfState,
    /// Simulation time
    pub time: f64,
    /// Timestep. The rule sequence does not read it; calculators that
    /// limit fluxes by the step size do.
    pub dt: f64,
    /// Tracer and sticker registry
    pub names: &'a TracerStickerNames,
}

/// Produces one flux vector per edge.
pub trait FluxCalculator: Send + Sync {
    /// Compute fluxes for every edge, in edge order.
    ///
    /// `kinematics` is reset to the edge count and filled by the actions
    /// that track interface motion.
    fn fluxes(
        &self,
        input: &FluxInput<'_>,
        kinematics: &mut EdgeKinematics,
    ) -> Result<Vec<Extensive>, AleError>;
}
