//! Equations of state.
//!
//! The hydrodynamic core is generic over [`EquationOfState`]; [`IdealGas`]
//! is the reference implementation.

mod equation_of_state;

pub use equation_of_state::{EquationOfState, IdealGas};
