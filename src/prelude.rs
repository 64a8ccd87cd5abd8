//! Convenience re-exports for evaluating permittivity models.

pub use crate::constants::*;
pub use crate::errors::{ConstructionError, DomainError, PermittivityError};
pub use crate::materials::{DispersiveMaterial, MaterialProperties};
pub use crate::math::{principal_powf, CScalar, Scalar, J};
pub use crate::models::{
    BoundaryPolicy, ColeColeModel, ColeDavidsonModel, DebyeModel, DebyePole, DielectricConstant,
    DielectricModel, DrudeModel, DrudePole, FreeElectronPlasmaModel, HavriliakNegamiModel,
    LorentzModel, LorentzPole, MultiLorentzPoleModel, MultiPoleDebyeModel, Permittivity,
    PermittivityModel, PermittivityTable,
};
#[cfg(feature = "rayon")]
pub use crate::sweep::par_permittivity_sweep;
pub use crate::sweep::{
    angular_freq_linspace, angular_freq_logspace, imag_parts, linspace, logspace_hz, mag,
    permittivity_sweep, phase_deg, real_parts, SweepPoint,
};
