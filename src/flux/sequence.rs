//! Condition-action flux dispatcher.
//!
//! Holds two ordered rule lists. For every edge the first-order rules are
//! tried in order, then the second-order rules; the first condition that
//! accepts the edge selects the action. First-order actions see the raw
//! neighbor states, second-order actions see the interface values produced
//! by the reconstruction (when one is configured).
//!
//! # Example
//!
//! ```
//! use ale_rs::boundary::BoundaryKind;
//! use ale_rs::equations::IdealGas;
//! use ale_rs::flux::{
//!     ConditionActionSequence, EdgeKinematics, FluxCalculator, FluxInput, Hllc, IsBoundaryEdge,
//!     IsBulkEdge, RegularFlux, RigidWallFlux,
//! };
//! use ale_rs::mesh::{GeometryCache, PolygonMesh2D, Tessellation};
//! use ale_rs::solver::{ComputationalCell, Extensive, TracerStickerNames};
//! use ale_rs::types::Bounds2D;
//! use glam::DVec2;
//!
//! let mesh = PolygonMesh2D::uniform_rectangle(
//!     Bounds2D::new(0.0, 1.0, 0.0, 1.0), 2, 2, BoundaryKind::Rigid,
//! );
//! let eos = IdealGas::default();
//! let names = TracerStickerNames::default();
//! let cache = GeometryCache::from_tessellation(&mesh);
//! let real = vec![ComputationalCell::new(1.0, 1.0, DVec2::ZERO); 4];
//! let cells = mesh.with_ghost_states(&real).unwrap();
//! let extensives: Vec<_> = real
//!     .iter()
//!     .map(|c| Extensive::from_cell(c, &eos, 0.25, &names))
//!     .collect();
//! let edge_velocities = vec![DVec2::ZERO; mesh.edges().len()];
//!
//! let sequence = ConditionActionSequence::new()
//!     .with_rule(IsBulkEdge, RegularFlux::new(Hllc))
//!     .with_rule(IsBoundaryEdge, RigidWallFlux::new(Hllc));
//!
//! let input = FluxInput {
//!     tess: &mesh,
//!     edge_velocities: &edge_velocities,
//!     cells: &cells,
//!     extensives: &extensives,
//!     cache: &cache,
//!     eos: &eos,
//!     time: 0.0,
//!     dt: 0.01,
//!     names: &names,
//! };
//! let mut kinematics = EdgeKinematics::new();
//! let fluxes = sequence.fluxes(&input, &mut kinematics).unwrap();
//! assert_eq!(fluxes.len(), mesh.edges().len());
//! ```

use crate::error::AleError;
use crate::solver::{ComputationalCell, Extensive};
use crate::types::EdgeIndex;

use super::kinematics::EdgeKinematics;
use super::reconstruction::SpatialReconstruction;
use super::traits::{
    BoxedFluxAction, BoxedFluxCondition, CellSide, FluxAction, FluxCalculator, FluxCondition,
    FluxContext, FluxInput,
};

/// A condition paired with the action it selects.
pub struct FluxRule {
    condition: BoxedFluxCondition,
    action: BoxedFluxAction,
}

impl FluxRule {
    /// Pair a condition with an action.
    pub fn new(
        condition: impl FluxCondition + 'static,
        action: impl FluxAction + 'static,
    ) -> Self {
        Self {
            condition: Box::new(condition),
            action: Box::new(action),
        }
    }

    /// The action of this rule.
    pub fn action(&self) -> &dyn FluxAction {
        self.action.as_ref()
    }

    /// The condition of this rule.
    pub fn condition(&self) -> &dyn FluxCondition {
        self.condition.as_ref()
    }
}

fn first_match<'r>(
    rules: &'r [FluxRule],
    ctx: &FluxContext<'_>,
) -> Option<(&'r FluxRule, CellSide)> {
    rules
        .iter()
        .find_map(|rule| rule.condition.evaluate(ctx).map(|side| (rule, side)))
}

/// Ordered condition-action rule lists.
#[derive(Default)]
pub struct ConditionActionSequence {
    first_order: Vec<FluxRule>,
    second_order: Vec<FluxRule>,
    reconstruction: Option<Box<dyn SpatialReconstruction>>,
}

impl ConditionActionSequence {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a first-order rule.
    pub fn with_rule(
        mut self,
        condition: impl FluxCondition + 'static,
        action: impl FluxAction + 'static,
    ) -> Self {
        self.first_order.push(FluxRule::new(condition, action));
        self
    }

    /// Append a second-order rule.
    pub fn with_second_order_rule(
        mut self,
        condition: impl FluxCondition + 'static,
        action: impl FluxAction + 'static,
    ) -> Self {
        self.second_order.push(FluxRule::new(condition, action));
        self
    }

    /// Interface reconstruction used by the second-order rules.
    pub fn with_reconstruction(mut self, reconstruction: impl SpatialReconstruction + 'static) -> Self {
        self.reconstruction = Some(Box::new(reconstruction));
        self
    }

    /// First-order rules, in evaluation order.
    pub fn first_order_rules(&self) -> &[FluxRule] {
        &self.first_order
    }

    /// Second-order rules, in evaluation order.
    pub fn second_order_rules(&self) -> &[FluxRule] {
        &self.second_order
    }

    fn rules(&self) -> impl Iterator<Item = &FluxRule> {
        self.first_order.iter().chain(&self.second_order)
    }

    fn check_input(&self, input: &FluxInput<'_>) -> Result<(), AleError> {
        let tess = input.tess;
        let n_edges = tess.edges().len();
        if input.edge_velocities.len() != n_edges {
            return Err(AleError::length_mismatch(
                "edge velocities",
                n_edges,
                input.edge_velocities.len(),
            ));
        }
        if input.cells.len() < tess.total_point_count() {
            return Err(AleError::length_mismatch(
                "cell states",
                tess.total_point_count(),
                input.cells.len(),
            ));
        }
        input.cache.check(tess)?;
        let expected = input.names.tracer_count();
        for (i, cell) in input.cells.iter().enumerate() {
            if cell.tracers.len() != expected {
                return Err(AleError::tracer_mismatch(
                    "cell",
                    i,
                    expected,
                    cell.tracers.len(),
                ));
            }
        }
        for (i, ext) in input.extensives.iter().enumerate() {
            ext.check_tracers(input.names, "extensive", i)?;
        }
        Ok(())
    }

    fn interface_values(
        &self,
        input: &FluxInput<'_>,
    ) -> Result<Option<Vec<(ComputationalCell, ComputationalCell)>>, AleError> {
        let Some(reconstruction) = self.reconstruction.as_ref() else {
            return Ok(None);
        };
        if self.second_order.is_empty() {
            return Ok(None);
        }
        let values = reconstruction.reconstruct(input.tess, input.cells, input.time, input.names)?;
        let n_edges = input.tess.edges().len();
        if values.len() != n_edges {
            return Err(AleError::length_mismatch(
                "interface values",
                n_edges,
                values.len(),
            ));
        }
        Ok(Some(values))
    }
}

impl FluxCalculator for ConditionActionSequence {
    fn fluxes(
        &self,
        input: &FluxInput<'_>,
        kinematics: &mut EdgeKinematics,
    ) -> Result<Vec<Extensive>, AleError> {
        self.check_input(input)?;

        let edges = input.tess.edges();
        kinematics.reset(edges.len());
        for rule in self.rules() {
            rule.action.reset();
        }

        let interface = self.interface_values(input)?;
        let mut fluxes = Vec::with_capacity(edges.len());
        let mut second_order_edges = 0usize;

        for (i, edge) in edges.iter().enumerate() {
            let index = EdgeIndex::new(i);
            let mut ctx = FluxContext::new(
                index,
                edge,
                input.tess,
                input.cells,
                input.eos,
                input.edge_velocities[i],
                input.time,
                input.names,
            );

            let flux = if let Some((rule, side)) = first_match(&self.first_order, &ctx) {
                rule.action.compute(&ctx, side, kinematics)?
            } else {
                if let Some(values) = interface.as_ref() {
                    ctx.edge_values = (&values[i].0, &values[i].1);
                }
                let (rule, side) = first_match(&self.second_order, &ctx).ok_or(
                    AleError::NoMatchingCondition {
                        edge: index,
                        first: edge.neighbors.0,
                        second: edge.neighbors.1,
                    },
                )?;
                second_order_edges += 1;
                rule.action.compute(&ctx, side, kinematics)?
            };

            flux.check_tracers(input.names, "flux", i)?;
            fluxes.push(flux);
        }

        log::debug!(
            "Computed {} edge fluxes ({} second order, {} Lagrangian) at t = {}",
            fluxes.len(),
            second_order_edges,
            kinematics.lagrangian_count(),
            input.time
        );

        Ok(fluxes)
    }
}
