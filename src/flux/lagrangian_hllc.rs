//! HLLC variant that reports the contact speed.

use glam::DVec2;

use crate::error::AleError;

use super::hllc::{WaveSpeeds, hllc_flux};
use super::riemann::{
    Conserved, LagrangianRiemannSolver, LagrangianSolution, Primitive, check_state,
};

/// HLLC solver for Lagrangian interfaces.
///
/// With `mass_flux` disabled the interface is taken to move with the
/// resolved contact: no mass crosses it, the momentum flux is the contact
/// pressure p* and the energy flux is the work p*·s*. With `mass_flux`
/// enabled it behaves like [`super::Hllc`] on an interface moving with the
/// prescribed speed and additionally reports the contact speed in the lab
/// frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LagrangianHllc {
    /// Whether mass may cross the interface
    pub mass_flux: bool,
}

impl LagrangianHllc {
    /// Solver whose interface follows the contact.
    pub fn lagrangian() -> Self {
        Self { mass_flux: false }
    }

    /// Solver whose interface moves with the prescribed speed.
    pub fn eulerian() -> Self {
        Self { mass_flux: true }
    }
}

impl Default for LagrangianHllc {
    fn default() -> Self {
        Self::lagrangian()
    }
}

impl LagrangianRiemannSolver for LagrangianHllc {
    fn solve(
        &self,
        left: &Primitive,
        right: &Primitive,
        velocity: f64,
    ) -> Result<LagrangianSolution, AleError> {
        check_state(left, "left")?;
        check_state(right, "right")?;

        if self.mass_flux {
            let l = left.shifted(velocity);
            let r = right.shifted(velocity);
            let speeds = WaveSpeeds::estimate(&l, &r);
            return Ok(LagrangianSolution {
                flux: hllc_flux(&l, &r, &speeds).to_lab_frame(velocity),
                wave_speed: speeds.contact + velocity,
            });
        }

        let speeds = WaveSpeeds::estimate(left, right);
        let p_star = speeds.star_pressure(left);
        Ok(LagrangianSolution {
            flux: Conserved {
                mass: 0.0,
                momentum: DVec2::new(p_star, 0.0),
                energy: p_star * speeds.contact,
            },
            wave_speed: speeds.contact,
        })
    }

    fn allows_mass_flux(&self) -> bool {
        self.mass_flux
    }

    fn name(&self) -> &'static str {
        if self.mass_flux {
            "lagrangian_hllc_eulerian"
        } else {
            "lagrangian_hllc"
        }
    }
}
