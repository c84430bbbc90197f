//! HLLC (Harten-Lax-van Leer-Contact) Riemann solver for the Euler equations.
//!
//! Three-wave approximation: two acoustic waves bounded by Davis speed
//! estimates and a contact wave in between. The contact is resolved exactly,
//! which is what the Lagrangian variant relies on.
//!
//! F*_K = F_K + s_K (U*_K - U_K), with
//! U*_K = ρ_K (s_K - u_K)/(s_K - s*) [1, s*, v_K, E_K/ρ_K + (s* - u_K)(s* + p_K/(ρ_K (s_K - u_K)))]
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid Dynamics", ch. 10

use glam::DVec2;

use crate::error::AleError;

use super::riemann::{Conserved, Primitive, RiemannSolver, check_state};

/// Wave speed estimates of one Riemann problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WaveSpeeds {
    pub left: f64,
    pub right: f64,
    pub contact: f64,
}

impl WaveSpeeds {
    /// Davis estimates for the acoustic waves, contact from the HLL middle state.
    pub(crate) fn estimate(l: &Primitive, r: &Primitive) -> Self {
        let left = (l.velocity.x - l.sound_speed).min(r.velocity.x - r.sound_speed);
        let right = (l.velocity.x + l.sound_speed).max(r.velocity.x + r.sound_speed);

        let ml = l.density * (left - l.velocity.x);
        let mr = r.density * (right - r.velocity.x);
        let contact =
            (r.pressure - l.pressure + ml * l.velocity.x - mr * r.velocity.x) / (ml - mr);

        Self {
            left,
            right,
            contact,
        }
    }

    /// Pressure on the contact, evaluated from the left state.
    pub(crate) fn star_pressure(&self, l: &Primitive) -> f64 {
        l.pressure + l.density * (self.left - l.velocity.x) * (self.contact - l.velocity.x)
    }
}

fn star_state(s: &Primitive, wave: f64, contact: f64) -> Conserved {
    let un = s.velocity.x;
    let factor = s.density * (wave - un) / (wave - contact);
    let specific_energy = s.total_energy() / s.density
        + (contact - un) * (contact + s.pressure / (s.density * (wave - un)));
    Conserved {
        mass: factor,
        momentum: DVec2::new(factor * contact, factor * s.velocity.y),
        energy: factor * specific_energy,
    }
}

/// HLLC flux for a stationary interface.
pub(crate) fn hllc_flux(l: &Primitive, r: &Primitive, speeds: &WaveSpeeds) -> Conserved {
    if speeds.left >= 0.0 {
        l.normal_flux()
    } else if speeds.right <= 0.0 {
        r.normal_flux()
    } else if speeds.contact >= 0.0 {
        let star = star_state(l, speeds.left, speeds.contact);
        l.normal_flux() + speeds.left * (star - l.conserved())
    } else {
        let star = star_state(r, speeds.right, speeds.contact);
        r.normal_flux() + speeds.right * (star - r.conserved())
    }
}

/// HLLC solver.
///
/// The interface velocity is handled by solving in the frame moving with
/// the interface and transforming the flux back.
///
/// # Example
///
/// ```
/// use ale_rs::flux::{Hllc, Primitive, RiemannSolver};
/// use glam::DVec2;
///
/// let state = Primitive {
///     density: 1.0,
///     pressure: 1.0,
///     velocity: DVec2::ZERO,
///     energy: 1.5,
///     sound_speed: (5.0_f64 / 3.0).sqrt(),
/// };
/// let flux = Hllc.solve(&state, &state, 0.0).unwrap();
/// assert_eq!(flux.mass, 0.0);
/// assert!((flux.momentum.x - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Hllc;

impl RiemannSolver for Hllc {
    fn solve(
        &self,
        left: &Primitive,
        right: &Primitive,
        velocity: f64,
    ) -> Result<Conserved, AleError> {
        check_state(left, "left")?;
        check_state(right, "right")?;

        let l = left.shifted(velocity);
        let r = right.shifted(velocity);
        let speeds = WaveSpeeds::estimate(&l, &r);
        Ok(hllc_flux(&l, &r, &speeds).to_lab_frame(velocity))
    }

    fn name(&self) -> &'static str {
        "hllc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const GAMMA: f64 = 5.0 / 3.0;

    fn prim(density: f64, pressure: f64, u: f64, v: f64) -> Primitive {
        Primitive {
            density,
            pressure,
            velocity: DVec2::new(u, v),
            energy: pressure / ((GAMMA - 1.0) * density),
            sound_speed: (GAMMA * pressure / density).sqrt(),
        }
    }

    #[test]
    fn test_consistency() {
        // F*(q, q) = F(q)
        let s = prim(1.2, 0.7, 0.3, -0.4);
        let flux = Hllc.solve(&s, &s, 0.0).unwrap();
        let exact = s.normal_flux();
        assert_relative_eq!(flux.mass, exact.mass, epsilon = 1e-12);
        assert_relative_eq!(flux.momentum.x, exact.momentum.x, epsilon = 1e-12);
        assert_relative_eq!(flux.momentum.y, exact.momentum.y, epsilon = 1e-12);
        assert_relative_eq!(flux.energy, exact.energy, epsilon = 1e-12);
    }

    #[test]
    fn test_supersonic_upwinding() {
        let l = prim(1.0, 1.0, 5.0, 0.0);
        let r = prim(0.5, 0.2, 5.0, 0.0);
        let flux = Hllc.solve(&l, &r, 0.0).unwrap();
        assert_relative_eq!(flux.mass, l.normal_flux().mass, epsilon = 1e-12);
    }

    #[test]
    fn test_stationary_contact_is_exact() {
        // Pressure equilibrium, density jump, no motion: only pressure flux
        let l = prim(1.0, 1.0, 0.0, 0.0);
        let r = prim(0.125, 1.0, 0.0, 0.0);
        let flux = Hllc.solve(&l, &r, 0.0).unwrap();
        assert_relative_eq!(flux.mass, 0.0, epsilon = 1e-12);
        assert_relative_eq!(flux.momentum.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(flux.energy, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moving_interface_matches_galilean_shift() {
        let l = prim(1.0, 1.0, 0.2, 0.1);
        let r = prim(0.6, 0.8, -0.1, 0.3);
        let w = 0.35;
        let moving = Hllc.solve(&l, &r, w).unwrap();
        let direct = hllc_flux(
            &l.shifted(w),
            &r.shifted(w),
            &WaveSpeeds::estimate(&l.shifted(w), &r.shifted(w)),
        )
        .to_lab_frame(w);
        assert_eq!(moving, direct);
    }

    #[test]
    fn test_rejects_vacuum() {
        let l = prim(1.0, 1.0, 0.0, 0.0);
        let r = Primitive {
            density: 0.0,
            ..l
        };
        assert!(Hllc.solve(&l, &r, 0.0).is_err());
    }
}
