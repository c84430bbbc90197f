//! Per-edge flux strategies.
//!
//! Each action evaluates a Riemann problem (or a closed-form flux) in the
//! edge frame and returns the lab-frame flux vector:
//!
//! - [`RegularFlux`]: both interface values, interface moving with the edge
//! - [`RigidWallFlux`]: the relevant side against its own mirror image
//! - [`FreeFlowFlux`]: physical flux of the relevant side's state across the
//!   moving interface
//! - [`Ratchet`]: one-way valve choosing between wall and free flow

use crate::error::AleError;
use crate::solver::Extensive;

use super::kinematics::EdgeKinematics;
use super::riemann::{Conserved, RiemannSolver};
use super::traits::{CellSide, FluxAction, FluxContext};

/// Riemann flux between the two interface values.
///
/// The interface moves with the normal component of the edge velocity.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegularFlux<R> {
    solver: R,
}

impl<R: RiemannSolver> RegularFlux<R> {
    /// Create a regular flux with the given Riemann solver.
    pub fn new(solver: R) -> Self {
        Self { solver }
    }
}

impl<R: RiemannSolver> FluxAction for RegularFlux<R> {
    fn compute(
        &self,
        ctx: &FluxContext<'_>,
        _side: CellSide,
        _kinematics: &mut EdgeKinematics,
    ) -> Result<Extensive, AleError> {
        let frame = ctx.frame();
        let (first, second) = ctx.edge_values;
        let left = frame.primitive(first, ctx.eos, ctx.names);
        let right = frame.primitive(second, ctx.eos, ctx.names);
        let flux = self
            .solver
            .solve(&left, &right, frame.normal_speed(ctx.edge_velocity))?;
        Ok(frame.to_extensive(&flux, first, second))
    }

    fn name(&self) -> &'static str {
        "regular"
    }
}

/// Reflecting wall.
///
/// The state on the relevant side is paired with its mirror image (normal
/// velocity reversed) and solved on a stationary interface, so the mass
/// flux vanishes and the momentum flux is the wall pressure.
#[derive(Clone, Copy, Debug, Default)]
pub struct RigidWallFlux<R> {
    solver: R,
}

impl<R: RiemannSolver> RigidWallFlux<R> {
    /// Create a wall flux with the given Riemann solver.
    pub fn new(solver: R) -> Self {
        Self { solver }
    }
}

impl<R: RiemannSolver> FluxAction for RigidWallFlux<R> {
    fn compute(
        &self,
        ctx: &FluxContext<'_>,
        side: CellSide,
        _kinematics: &mut EdgeKinematics,
    ) -> Result<Extensive, AleError> {
        let frame = ctx.frame();
        let state = frame.primitive(ctx.value(side), ctx.eos, ctx.names);
        let (left, right) = match side {
            CellSide::First => (state, state.reflected()),
            CellSide::Second => (state.reflected(), state),
        };
        let flux = self.solver.solve(&left, &right, 0.0)?;
        let (first, second) = ctx.edge_values;
        Ok(frame.to_extensive(&flux, first, second))
    }

    fn name(&self) -> &'static str {
        "rigid_wall"
    }
}

/// Unimpeded flow: the physical flux of the relevant side's state.
///
/// Measured across the interface moving with the edge velocity, so a
/// uniform state gets the same flux as [`RegularFlux`] without a Riemann
/// solve.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreeFlowFlux;

impl FluxAction for FreeFlowFlux {
    fn compute(
        &self,
        ctx: &FluxContext<'_>,
        side: CellSide,
        _kinematics: &mut EdgeKinematics,
    ) -> Result<Extensive, AleError> {
        let frame = ctx.frame();
        let cell = ctx.value(side);
        let w = frame.normal_speed(ctx.edge_velocity);
        let flux: Conserved = frame
            .primitive(cell, ctx.eos, ctx.names)
            .shifted(w)
            .normal_flux()
            .to_lab_frame(w);
        Ok(frame.to_extensive(&flux, cell, cell))
    }

    fn name(&self) -> &'static str {
        "free_flow"
    }
}

/// Direction a [`Ratchet`] lets through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RatchetDirection {
    /// Only flow into the domain passes
    #[default]
    Inflow,
    /// Only flow out of the domain passes
    Outflow,
}

/// One-way valve.
///
/// Looks at the velocity of the relevant side's cell along the normal
/// pointing out of that cell. Flow in the permitted direction gets the free
/// flow flux, anything else is treated as a rigid wall.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ratchet<R> {
    direction: RatchetDirection,
    wall: RigidWallFlux<R>,
    free: FreeFlowFlux,
}

impl<R: RiemannSolver> Ratchet<R> {
    /// Create a ratchet; `solver` is used for the wall branch.
    pub fn new(direction: RatchetDirection, solver: R) -> Self {
        Self {
            direction,
            wall: RigidWallFlux::new(solver),
            free: FreeFlowFlux,
        }
    }

    /// Permitted direction.
    pub fn direction(&self) -> RatchetDirection {
        self.direction
    }
}

impl<R: RiemannSolver> FluxAction for Ratchet<R> {
    fn compute(
        &self,
        ctx: &FluxContext<'_>,
        side: CellSide,
        kinematics: &mut EdgeKinematics,
    ) -> Result<Extensive, AleError> {
        let normal_speed = ctx.frame().normal_speed(ctx.cell(side).velocity);
        let outward = match side {
            CellSide::First => normal_speed,
            CellSide::Second => -normal_speed,
        };
        let inflow = outward < 0.0;
        let open = match self.direction {
            RatchetDirection::Inflow => inflow,
            RatchetDirection::Outflow => !inflow,
        };
        if open {
            self.free.compute(ctx, side, kinematics)
        } else {
            self.wall.compute(ctx, side, kinematics)
        }
    }

    fn name(&self) -> &'static str {
        "ratchet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryKind;
    use crate::equations::IdealGas;
    use crate::flux::Hllc;
    use crate::mesh::{PolygonMesh2D, Tessellation};
    use crate::solver::{ComputationalCell, TracerStickerNames};
    use crate::types::{Bounds2D, EdgeIndex};
    use approx::assert_relative_eq;
    use glam::DVec2;

    // 2x1 rigid box: edge 0 is the west wall (ghost, 0), edge 1 the interior
    // face (0, 1), edge 2 the east wall (1, ghost).
    fn setup(velocity: DVec2) -> (PolygonMesh2D, Vec<ComputationalCell>) {
        let mesh = PolygonMesh2D::uniform_rectangle(
            Bounds2D::new(0.0, 2.0, 0.0, 1.0),
            2,
            1,
            BoundaryKind::Rigid,
        );
        let real = vec![
            ComputationalCell::new(1.0, 0.6, velocity).with_tracers(vec![0.3]),
            ComputationalCell::new(1.0, 0.6, velocity).with_tracers(vec![0.3]),
        ];
        let cells = mesh.with_ghost_states(&real).unwrap();
        (mesh, cells)
    }

    fn run(
        action: &dyn FluxAction,
        mesh: &PolygonMesh2D,
        cells: &[ComputationalCell],
        edge: usize,
        side: CellSide,
    ) -> Extensive {
        run_moving(action, mesh, cells, edge, side, DVec2::ZERO)
    }

    fn run_moving(
        action: &dyn FluxAction,
        mesh: &PolygonMesh2D,
        cells: &[ComputationalCell],
        edge: usize,
        side: CellSide,
        edge_velocity: DVec2,
    ) -> Extensive {
        let eos = IdealGas::default();
        let names = TracerStickerNames::new(["dye"], Vec::<String>::new());
        let ctx = FluxContext::new(
            EdgeIndex::new(edge),
            &mesh.edges()[edge],
            mesh,
            cells,
            &eos,
            edge_velocity,
            0.0,
            &names,
        );
        let mut kinematics = EdgeKinematics::with_edges(mesh.edges().len());
        action.compute(&ctx, side, &mut kinematics).unwrap()
    }

    #[test]
    fn test_regular_flux_uniform_state() {
        let (mesh, cells) = setup(DVec2::new(0.5, 0.0));
        let flux = run(&RegularFlux::new(Hllc), &mesh, &cells, 1, CellSide::First);
        assert_relative_eq!(flux.mass, 0.5, epsilon = 1e-12);
        assert_relative_eq!(flux.momentum.x, 0.25 + 0.6, epsilon = 1e-12);
        assert_relative_eq!(flux.tracers[0], 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_rigid_wall_blocks_mass() {
        let (mesh, cells) = setup(DVec2::new(0.5, 0.2));
        // East wall, real cell on the first side, moving into the wall
        let flux = run(&RigidWallFlux::new(Hllc), &mesh, &cells, 2, CellSide::First);
        assert_relative_eq!(flux.mass, 0.0, epsilon = 1e-12);
        assert_relative_eq!(flux.energy, 0.0, epsilon = 1e-12);
        assert_relative_eq!(flux.momentum.y, 0.0, epsilon = 1e-12);
        // Compression raises the wall pressure above the cell pressure
        assert!(flux.momentum.x > 0.6);
        assert_relative_eq!(flux.tracers[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rigid_wall_at_rest_is_pressure() {
        let (mesh, cells) = setup(DVec2::ZERO);
        let flux = run(&RigidWallFlux::new(Hllc), &mesh, &cells, 0, CellSide::Second);
        assert_relative_eq!(flux.mass, 0.0, epsilon = 1e-12);
        assert_relative_eq!(flux.momentum.x, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_free_flow_is_physical_flux() {
        let (mesh, cells) = setup(DVec2::new(-0.5, 0.0));
        let flux = run(&FreeFlowFlux, &mesh, &cells, 0, CellSide::Second);
        assert_relative_eq!(flux.mass, -0.5, epsilon = 1e-12);
        assert_relative_eq!(flux.momentum.x, 0.25 + 0.6, epsilon = 1e-12);
        assert_relative_eq!(flux.tracers[0], -0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_free_flow_on_moving_edge_matches_regular() {
        let (mesh, cells) = setup(DVec2::new(0.5, 0.0));
        let moving = DVec2::new(0.3, 0.0);

        let free = run_moving(&FreeFlowFlux, &mesh, &cells, 2, CellSide::First, moving);
        let regular = run_moving(
            &RegularFlux::new(Hllc),
            &mesh,
            &cells,
            1,
            CellSide::First,
            moving,
        );

        // Relative speed 0.2: m = 0.2, p_x = 0.04 + 0.6 + 0.3 * 0.2
        assert_relative_eq!(free.mass, 0.2, epsilon = 1e-12);
        assert_relative_eq!(free.momentum.x, 0.7, epsilon = 1e-12);
        assert_relative_eq!(free.energy, 0.505, epsilon = 1e-12);
        assert_relative_eq!(free.mass, regular.mass, epsilon = 1e-12);
        assert_relative_eq!(free.momentum.x, regular.momentum.x, epsilon = 1e-12);
        assert_relative_eq!(free.energy, regular.energy, epsilon = 1e-12);
        assert_relative_eq!(free.tracers[0], regular.tracers[0], epsilon = 1e-12);

        // The open ratchet branch follows the moving interface too
        let ratchet = Ratchet::new(RatchetDirection::Outflow, Hllc);
        let open = run_moving(&ratchet, &mesh, &cells, 2, CellSide::First, moving);
        assert_relative_eq!(open.mass, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_ratchet_inflow() {
        let ratchet = Ratchet::new(RatchetDirection::Inflow, Hllc);

        // West wall, real cell on the second side. Moving west means leaving
        // the domain: the ratchet closes.
        let (mesh, cells) = setup(DVec2::new(-0.5, 0.0));
        let closed = run(&ratchet, &mesh, &cells, 0, CellSide::Second);
        assert_relative_eq!(closed.mass, 0.0, epsilon = 1e-12);

        // Moving east means flow coming in: free flow
        let (mesh, cells) = setup(DVec2::new(0.5, 0.0));
        let open = run(&ratchet, &mesh, &cells, 0, CellSide::Second);
        assert_relative_eq!(open.mass, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_ratchet_outflow() {
        let ratchet = Ratchet::new(RatchetDirection::Outflow, Hllc);

        // East wall, real cell first, moving east: leaving, allowed
        let (mesh, cells) = setup(DVec2::new(0.5, 0.0));
        let open = run(&ratchet, &mesh, &cells, 2, CellSide::First);
        assert_relative_eq!(open.mass, 0.5, epsilon = 1e-12);

        let (mesh, cells) = setup(DVec2::new(-0.5, 0.0));
        let closed = run(&ratchet, &mesh, &cells, 2, CellSide::First);
        assert_relative_eq!(closed.mass, 0.0, epsilon = 1e-12);
        assert_eq!(ratchet.direction(), RatchetDirection::Outflow);
    }
}
