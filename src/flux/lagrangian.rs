//! Lagrangian flux: per-edge choice between a mass-conserving moving
//! interface and an ordinary Eulerian one.

use crate::error::AleError;
use crate::solver::Extensive;

use super::kinematics::{EdgeKinematics, EdgeMotion};
use super::riemann::LagrangianRiemannSolver;
use super::traits::{CellSide, FluxAction, FluxContext};

/// Decides per edge whether mass may cross.
///
/// Functions and closures with the matching signature are criteria too.
pub trait LagrangianCriterion: Send + Sync {
    /// `true` when the edge should carry mass (Eulerian treatment).
    fn mass_flux(&self, ctx: &FluxContext<'_>, side: CellSide) -> bool;
}

impl<F> LagrangianCriterion for F
where
    F: Fn(&FluxContext<'_>, CellSide) -> bool + Send + Sync,
{
    fn mass_flux(&self, ctx: &FluxContext<'_>, side: CellSide) -> bool {
        self(ctx, side)
    }
}

/// Mass flux is permitted on edges touching a ghost cell, suppressed on
/// edges between two real cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct WallsMassFlux;

impl LagrangianCriterion for WallsMassFlux {
    fn mass_flux(&self, ctx: &FluxContext<'_>, _side: CellSide) -> bool {
        let (first, second) = ctx.edge.neighbors;
        !ctx.tess.is_real(first) || !ctx.tess.is_real(second)
    }
}

/// Flux action that tracks interface motion.
///
/// On Lagrangian edges (criterion says no mass flux) the interface moves with
/// the resolved contact: the kinematic record gets the contact speed as both
/// wave speed and edge speed, flagged Lagrangian. On Eulerian edges the
/// interface moves with the prescribed edge velocity: the record gets a zero
/// wave speed and the normal edge speed. Both entries feed the swept-volume
/// correction of [`crate::solver::LagrangianExtensiveUpdater`].
#[derive(Clone, Copy, Debug)]
pub struct LagrangianFlux<L, C> {
    lagrangian: L,
    eulerian: L,
    criterion: C,
}

impl<L: LagrangianRiemannSolver, C: LagrangianCriterion> LagrangianFlux<L, C> {
    /// Create a Lagrangian flux.
    ///
    /// `lagrangian` should suppress the mass flux and `eulerian` permit it.
    pub fn new(lagrangian: L, eulerian: L, criterion: C) -> Self {
        if lagrangian.allows_mass_flux() || !eulerian.allows_mass_flux() {
            log::warn!(
                "Lagrangian flux built with solvers {} / {}: mass flux flags look swapped",
                lagrangian.name(),
                eulerian.name()
            );
        }
        Self {
            lagrangian,
            eulerian,
            criterion,
        }
    }

    /// Criterion in use.
    pub fn criterion(&self) -> &C {
        &self.criterion
    }
}

impl<L: LagrangianRiemannSolver, C: LagrangianCriterion> FluxAction for LagrangianFlux<L, C> {
    fn compute(
        &self,
        ctx: &FluxContext<'_>,
        side: CellSide,
        kinematics: &mut EdgeKinematics,
    ) -> Result<Extensive, AleError> {
        let frame = ctx.frame();
        let (first, second) = ctx.edge_values;
        let left = frame.primitive(first, ctx.eos, ctx.names);
        let right = frame.primitive(second, ctx.eos, ctx.names);
        let edge_speed = frame.normal_speed(ctx.edge_velocity);

        let (solution, motion) = if self.criterion.mass_flux(ctx, side) {
            let solution = self.eulerian.solve(&left, &right, edge_speed)?;
            let motion = EdgeMotion {
                wave_speed: 0.0,
                edge_speed,
                lagrangian: false,
            };
            (solution, motion)
        } else {
            let solution = self.lagrangian.solve(&left, &right, edge_speed)?;
            let motion = EdgeMotion {
                wave_speed: solution.wave_speed,
                edge_speed: solution.wave_speed,
                lagrangian: true,
            };
            (solution, motion)
        };

        kinematics.record(ctx.index, motion);
        Ok(frame.to_extensive(&solution.flux, first, second))
    }

    fn name(&self) -> &'static str {
        "lagrangian"
    }
}
