//! Second-order dynamics: a critically-dampable spring that smooths a 3D
//! point toward a moving target.
//!
//! The filter integrates
//!
//! ```text
//! y + k1 * y' + k2 * y'' = x + k3 * x'
//! ```
//!
//! where `x` is the raw target and `y` the filtered output. Two stability
//! strategies are available through [`Stabilisation`]: fixed Euler
//! substeps bounded by the critical time step, or a single step with
//! coefficients adapted to the step length.

mod filter;
mod tuning;

pub use filter::SecondOrderFilter;
pub use tuning::{Coefficients, FilterTuning, Stabilisation};
