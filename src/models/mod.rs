//! Permittivity models and the evaluation interface they share.
//!
//! Every model family implements [`Permittivity`]. Heterogeneous collections
//! of models are stored as the closed sum type [`PermittivityModel`], which
//! dispatches to the concrete family with an exhaustive `match`.

/// Frequency-independent dielectrics and lossy conductors.
pub mod dielectric;
/// Debye, Cole-Cole, Cole-Davidson and Havriliak-Negami relaxations.
pub mod relaxation;
/// Free-carrier and bound-oscillator models.
pub mod plasma;
/// Homogeneous pole records shared by scalar and composite models.
pub mod poles;
/// Sums of Debye or Lorentz poles.
pub mod composite;
/// Linear interpolation of tabulated data.
pub mod tabulated;

use crate::errors::DomainError;
use crate::math::{is_zero, real, CScalar, Scalar};

pub use composite::{MultiLorentzPoleModel, MultiPoleDebyeModel};
pub use dielectric::{DielectricConstant, DielectricModel};
pub use plasma::{DrudeModel, FreeElectronPlasmaModel, LorentzModel};
pub use poles::{DebyePole, DrudePole, LorentzPole};
pub use relaxation::{ColeColeModel, ColeDavidsonModel, DebyeModel, HavriliakNegamiModel};
pub use tabulated::{BoundaryPolicy, PermittivityTable};

/// Trait implemented by every frequency-dependent permittivity model.
pub trait Permittivity {
    /// Returns the complex relative permittivity at angular frequency `omega` (rad/s).
    ///
    /// Fails with [`DomainError`] when the model is undefined at `omega`.
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError>;

    /// Name of the model family, used in error reports.
    fn name(&self) -> &'static str;

    /// Electric susceptibility χ(ω) = ε(ω) − 1.
    fn susceptibility(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        Ok(self.permittivity(omega)? - 1.0)
    }

    /// Evaluates the model at every frequency in `omegas`, preserving order.
    ///
    /// Stops at the first frequency that fails.
    fn sweep(&self, omegas: &[Scalar]) -> Result<Vec<CScalar>, DomainError> {
        omegas.iter().map(|&omega| self.permittivity(omega)).collect()
    }
}

impl<M: Permittivity + ?Sized> Permittivity for &M {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        (**self).permittivity(omega)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<M: Permittivity + ?Sized> Permittivity for Box<M> {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        (**self).permittivity(omega)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Any of the supported model families.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model"))]
#[derive(Debug, Clone, PartialEq)]
pub enum PermittivityModel {
    /// Frequency-independent value.
    DielectricConstant(DielectricConstant),
    /// High-frequency limit plus static conductivity.
    DielectricModel(DielectricModel),
    /// Single relaxation pole.
    DebyeModel(DebyeModel),
    /// Symmetrically stretched relaxation.
    ColeColeModel(ColeColeModel),
    /// Asymmetric relaxation.
    ColeDavidsonModel(ColeDavidsonModel),
    /// General two-exponent relaxation.
    HavriliakNegamiModel(HavriliakNegamiModel),
    /// Damped free-carrier response.
    DrudeModel(DrudeModel),
    /// Lossless free-electron plasma.
    FreeElectronPlasmaModel(FreeElectronPlasmaModel),
    /// Single bound-electron oscillator.
    LorentzModel(LorentzModel),
    /// Sum of Debye poles with static conductivity.
    MultiPoleDebyeModel(MultiPoleDebyeModel),
    /// Sum of Lorentz poles.
    MultiLorentzPoleModel(MultiLorentzPoleModel),
    /// Interpolated experimental data.
    PermittivityTable(PermittivityTable),
}

impl Permittivity for PermittivityModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        match self {
            Self::DielectricConstant(m) => m.permittivity(omega),
            Self::DielectricModel(m) => m.permittivity(omega),
            Self::DebyeModel(m) => m.permittivity(omega),
            Self::ColeColeModel(m) => m.permittivity(omega),
            Self::ColeDavidsonModel(m) => m.permittivity(omega),
            Self::HavriliakNegamiModel(m) => m.permittivity(omega),
            Self::DrudeModel(m) => m.permittivity(omega),
            Self::FreeElectronPlasmaModel(m) => m.permittivity(omega),
            Self::LorentzModel(m) => m.permittivity(omega),
            Self::MultiPoleDebyeModel(m) => m.permittivity(omega),
            Self::MultiLorentzPoleModel(m) => m.permittivity(omega),
            Self::PermittivityTable(m) => m.permittivity(omega),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::DielectricConstant(m) => m.name(),
            Self::DielectricModel(m) => m.name(),
            Self::DebyeModel(m) => m.name(),
            Self::ColeColeModel(m) => m.name(),
            Self::ColeDavidsonModel(m) => m.name(),
            Self::HavriliakNegamiModel(m) => m.name(),
            Self::DrudeModel(m) => m.name(),
            Self::FreeElectronPlasmaModel(m) => m.name(),
            Self::LorentzModel(m) => m.name(),
            Self::MultiPoleDebyeModel(m) => m.name(),
            Self::MultiLorentzPoleModel(m) => m.name(),
            Self::PermittivityTable(m) => m.name(),
        }
    }
}

macro_rules! impl_from_model {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for PermittivityModel {
                fn from(model: $variant) -> Self {
                    Self::$variant(model)
                }
            }
        )*
    };
}

impl_from_model!(
    DielectricConstant,
    DielectricModel,
    DebyeModel,
    ColeColeModel,
    ColeDavidsonModel,
    HavriliakNegamiModel,
    DrudeModel,
    FreeElectronPlasmaModel,
    LorentzModel,
    MultiPoleDebyeModel,
    MultiLorentzPoleModel,
    PermittivityTable,
);

/// Evaluates `numerator / denominator` for a term that may have a pole.
///
/// A term with an exactly zero numerator is absent and contributes zero even
/// where its denominator vanishes.
pub(crate) fn pole_term(
    model: &'static str,
    omega: Scalar,
    numerator: CScalar,
    denominator: CScalar,
) -> Result<CScalar, DomainError> {
    if is_zero(numerator) {
        return Ok(real(0.0));
    }
    if is_zero(denominator) {
        tracing::trace!(model, omega, "evaluation hit a pole");
        return Err(DomainError::Pole { model, omega });
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_complex::Complex;

    use super::*;

    fn zoo() -> Vec<PermittivityModel> {
        vec![
            DielectricConstant::new(Complex::new(2.0, -0.1)).into(),
            DielectricModel::new(4.0, 0.01).unwrap().into(),
            DebyeModel::new(80.0, 5.0, 1.0e-11).unwrap().into(),
            ColeColeModel::new(80.0, 5.0, 1.0e-11, 0.2).unwrap().into(),
            ColeDavidsonModel::new(80.0, 5.0, 1.0e-11, 0.6).unwrap().into(),
            HavriliakNegamiModel::new(80.0, 5.0, 1.0e-11, 0.7, 0.5).unwrap().into(),
            DrudeModel::new(1.37e16, 1.0e14).unwrap().into(),
            FreeElectronPlasmaModel::new(1.0e10).unwrap().into(),
            LorentzModel::new(1.0, 2.0, 1.0e15, 1.0e13).unwrap().into(),
            MultiPoleDebyeModel::new(4.0, 0.0, [DebyePole::new(10.0, 1.0e-9).unwrap()])
                .unwrap()
                .into(),
            MultiLorentzPoleModel::new(1.0, [LorentzPole::new(1.5, 3.0e15, 1.0e14).unwrap()])
                .unwrap()
                .into(),
            PermittivityTable::new(vec![1.0e9, 1.0e12], vec![Complex::new(3.0, 0.0), Complex::new(2.0, -1.0)])
                .unwrap()
                .into(),
        ]
    }

    #[test]
    fn enum_dispatch_matches_concrete_model() {
        let concrete = ColeColeModel::new(80.0, 5.0, 1.0e-11, 0.2).unwrap();
        let wrapped = PermittivityModel::from(concrete.clone());
        for omega in [1.0e9, 1.0e11, 1.0e13] {
            assert_eq!(wrapped.permittivity(omega), concrete.permittivity(omega));
        }
        assert_eq!(wrapped.name(), "ColeColeModel");
    }

    #[test]
    fn every_family_evaluates_away_from_poles() {
        for model in zoo() {
            let eps = model.permittivity(1.0e10).unwrap();
            assert!(eps.re.is_finite() && eps.im.is_finite(), "{} produced {eps}", model.name());
        }
    }

    #[test]
    fn non_finite_frequency_is_a_domain_error() {
        for model in zoo() {
            let err = model.permittivity(Scalar::NAN).unwrap_err();
            assert!(matches!(err, DomainError::NonFiniteFrequency { .. }), "{}", model.name());
        }
    }

    #[test]
    fn susceptibility_is_permittivity_minus_one() {
        let model = DebyeModel::new(6.0, 2.0, 1.0).unwrap();
        let chi = model.susceptibility(0.5).unwrap();
        let eps = model.permittivity(0.5).unwrap();
        assert_relative_eq!(chi.re, eps.re - 1.0);
        assert_relative_eq!(chi.im, eps.im);
    }

    #[test]
    fn sweep_preserves_order_and_stops_on_first_failure() {
        let model = FreeElectronPlasmaModel::new(3.0).unwrap();
        let ok = model.sweep(&[1.0, 3.0, 6.0]).unwrap();
        assert_eq!(ok.len(), 3);
        assert_relative_eq!(ok[0].re, -8.0);
        assert_relative_eq!(ok[1].re, 0.0);
        assert_relative_eq!(ok[2].re, 0.75);

        let err = model.sweep(&[1.0, 0.0, Scalar::NAN]).unwrap_err();
        assert_eq!(err, DomainError::Pole { model: "FreeElectronPlasmaModel", omega: 0.0 });
    }

    #[test]
    fn trait_objects_and_references_dispatch() {
        let boxed: Vec<Box<dyn Permittivity>> = vec![
            Box::new(DielectricConstant::vacuum()),
            Box::new(DrudeModel::new(3.0, 1.0).unwrap()),
        ];
        for model in &boxed {
            assert!(model.permittivity(2.0).is_ok());
        }
        fn static_value(model: impl Permittivity) -> CScalar {
            model.permittivity(0.0).unwrap()
        }
        let debye = DebyeModel::new(6.0, 0.0, 1.0).unwrap();
        assert_eq!(static_value(&debye), real(6.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn model_parameters_are_tagged_by_family() {
        let json = r#"{"model":"DebyeModel","eps_s":6.0,"eps_inf":2.0,"tau":1.0}"#;
        let model: PermittivityModel = serde_json::from_str(json).unwrap();
        assert_eq!(model, PermittivityModel::from(DebyeModel::new(6.0, 2.0, 1.0).unwrap()));

        let written = serde_json::to_string(&model).unwrap();
        assert!(written.contains(r#""model":"DebyeModel""#));
    }

    #[test]
    fn models_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PermittivityModel>();
    }
}
