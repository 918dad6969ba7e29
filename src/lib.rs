//! Second-order dynamics for procedural locomotion.
//!
//! The core is [`SecondOrderFilter`], a spring-damper integrator that
//! smooths a 3D point toward a moving target with a configurable frequency,
//! damping ratio and initial response. Around it sit the consumers it was
//! built for: multi-leg stepping ([`GaitController`]), a camera follow rig
//! ([`CameraFollow`]) and step-response sampling for tuning previews
//! ([`sample_step_response`]).
pub mod camera;
pub mod config;
pub mod constants;
pub mod dynamics;
pub mod error;
pub mod gait;
pub mod logging;
pub mod numeric;
pub mod response;
pub use constants::*;

// Re-export commonly used items
pub use camera::{CameraConfig, CameraFollow};
pub use config::RigConfig;
pub use dynamics::{Coefficients, FilterTuning, SecondOrderFilter, Stabilisation};
pub use error::{ConfigError, DynamicsError, GaitError, Parameter};
pub use gait::{GaitConfig, GaitController, Limb, LimbInput, StepCurve, StepPhase};
pub use logging::init as init_logging;
pub use response::{sample_step_response, ResponseSample, StepResponse};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use strider::prelude::*;
    //!
    //! let filter = SecondOrderFilter::new(FilterTuning::default(), Stabilisation::Substep, Vec3::ZERO);
    //! assert!(filter.is_ok());
    //! ```

    pub use crate::{
        CameraFollow, FilterTuning, GaitController, LimbInput, SecondOrderFilter, Stabilisation,
    };
    pub use glam::Vec3;
}
