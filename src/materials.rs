//! Material quantities derived from a relative permittivity.

use crate::constants::{VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::errors::DomainError;
use crate::math::{real, CScalar, Scalar};
use crate::models::Permittivity;

/// Linear isotropic non-magnetic material parameters at one angular frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    /// Angular frequency ω in rad/s at which the properties apply.
    pub omega: Scalar,
    /// Complex relative permittivity ε_r = ε′ − jε″.
    pub relative_permittivity: CScalar,
    /// Electric permittivity ε = ε₀ ε′ in F/m.
    pub permittivity: Scalar,
    /// Magnetic permeability μ in H/m.
    pub permeability: Scalar,
    /// Equivalent electrical conductivity σ = ω ε₀ ε″ in S/m.
    pub conductivity: Scalar,
}

impl MaterialProperties {
    /// Creates material properties for free space.
    #[must_use]
    pub const fn vacuum() -> Self {
        Self {
            omega: 0.0,
            relative_permittivity: real(1.0),
            permittivity: VACUUM_PERMITTIVITY,
            permeability: VACUUM_PERMEABILITY,
            conductivity: 0.0,
        }
    }

    /// Derives properties from the relative permittivity `eps_r` at `omega`.
    #[must_use]
    pub fn from_relative_permittivity(eps_r: CScalar, omega: Scalar) -> Self {
        Self {
            omega,
            relative_permittivity: eps_r,
            permittivity: eps_r.re * VACUUM_PERMITTIVITY,
            permeability: VACUUM_PERMEABILITY,
            conductivity: -omega * eps_r.im * VACUUM_PERMITTIVITY,
        }
    }

    /// Electric susceptibility χ = ε_r − 1.
    #[must_use]
    pub fn susceptibility(&self) -> CScalar {
        self.relative_permittivity - 1.0
    }

    /// Complex refractive index √ε_r (principal root, n − jκ convention).
    #[must_use]
    pub fn refractive_index(&self) -> CScalar {
        self.relative_permittivity.sqrt()
    }

    /// Loss tangent tan δ = ε″ / ε′.
    #[must_use]
    pub fn loss_tangent(&self) -> Scalar {
        -self.relative_permittivity.im / self.relative_permittivity.re
    }

    /// Computes the complex intrinsic impedance √(μ / (ε₀ ε_r)) in ohms.
    #[must_use]
    pub fn intrinsic_impedance(&self) -> CScalar {
        (real(self.permeability) / (self.relative_permittivity * VACUUM_PERMITTIVITY)).sqrt()
    }
}

/// Frequency-dependent material described by a permittivity model.
pub trait DispersiveMaterial {
    /// Returns effective properties at the angular frequency `omega` (rad/s).
    fn properties(&self, omega: Scalar) -> Result<MaterialProperties, DomainError>;
}

impl<M: Permittivity + ?Sized> DispersiveMaterial for M {
    fn properties(&self, omega: Scalar) -> Result<MaterialProperties, DomainError> {
        let eps_r = self.permittivity(omega)?;
        Ok(MaterialProperties::from_relative_permittivity(eps_r, omega))
    }
}
