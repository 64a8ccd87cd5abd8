//! Dielectric relaxation models.
//!
//! All four families share the form ε(ω) = ε∞ + (εₛ − ε∞) / D(ω) and differ
//! only in the relaxation denominator D(ω). Fractional powers are taken on the
//! principal branch through [`principal_powf`].

use crate::errors::{check_frequency, require_finite, require_non_negative, ConstructionError, DomainError};
use crate::math::{principal_powf, real, CScalar, Scalar, J};

use super::poles::DebyePole;
use super::Permittivity;

fn check_exponent(
    parameter: &'static str,
    value: Scalar,
    accepted: impl Fn(Scalar) -> bool,
    expected: &'static str,
) -> Result<Scalar, ConstructionError> {
    require_finite(parameter, value)?;
    if accepted(value) {
        Ok(value)
    } else {
        Err(ConstructionError::OutOfRange {
            parameter,
            value,
            expected,
        })
    }
}

/// Static and optical permittivities plus relaxation time, validated once.
fn check_relaxation(eps_s: Scalar, eps_inf: Scalar, tau: Scalar) -> Result<(), ConstructionError> {
    require_finite("eps_s", eps_s)?;
    require_finite("eps_inf", eps_inf)?;
    require_non_negative("tau", tau)?;
    Ok(())
}

/// Debye relaxation of an ideal, non-interacting population of dipoles:
///
/// ε(ω) = ε∞ + (εₛ − ε∞) / (1 + jωτ)
///
/// where εₛ is the static (low frequency) permittivity, ε∞ the optical
/// permittivity and τ = 1/ωᵣ the relaxation time.
///
/// # Example
/// ~~~
/// use permittivity::models::{DebyeModel, Permittivity};
/// let m = DebyeModel::new(6.0, 0.0, 1.0).unwrap();
/// let eps = m.permittivity(1.0).unwrap();
/// assert!((eps.re - 3.0).abs() < 1e-12);
/// assert!((eps.im + 3.0).abs() < 1e-12);
/// ~~~
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebyeModel {
    eps_s: Scalar,
    eps_inf: Scalar,
    tau: Scalar,
}

impl DebyeModel {
    /// Creates a Debye relaxation.
    pub fn new(eps_s: Scalar, eps_inf: Scalar, tau: Scalar) -> Result<Self, ConstructionError> {
        check_relaxation(eps_s, eps_inf, tau)?;
        Ok(Self { eps_s, eps_inf, tau })
    }

    /// Static permittivity εₛ.
    #[must_use]
    pub fn eps_s(&self) -> Scalar {
        self.eps_s
    }

    /// High-frequency permittivity ε∞.
    #[must_use]
    pub fn eps_inf(&self) -> Scalar {
        self.eps_inf
    }

    /// Relaxation time τ in seconds.
    #[must_use]
    pub fn tau(&self) -> Scalar {
        self.tau
    }

    /// Relaxation angular frequency ωᵣ = 1/τ, or `None` when τ = 0.
    #[must_use]
    pub fn relaxation_frequency(&self) -> Option<Scalar> {
        if self.tau > 0.0 {
            Some(1.0 / self.tau)
        } else {
            None
        }
    }

    /// Real part ε′ = ε∞ + (εₛ − ε∞) / (1 + ω²τ²).
    #[must_use]
    pub fn real_part(&self, omega: Scalar) -> Scalar {
        let wt = omega * self.tau;
        self.eps_inf + (self.eps_s - self.eps_inf) / (1.0 + wt * wt)
    }

    /// Loss ε″ = (εₛ − ε∞) ωτ / (1 + ω²τ²), so that ε = ε′ − jε″.
    #[must_use]
    pub fn loss(&self, omega: Scalar) -> Scalar {
        let wt = omega * self.tau;
        (self.eps_s - self.eps_inf) * wt / (1.0 + wt * wt)
    }

    fn pole(&self) -> DebyePole {
        DebyePole {
            eps: self.eps_s - self.eps_inf,
            tau: self.tau,
        }
    }
}

impl Permittivity for DebyeModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        Ok(self.eps_inf + self.pole().contribution(omega))
    }

    fn name(&self) -> &'static str {
        "DebyeModel"
    }
}

/// Cole–Cole relaxation, a symmetrically stretched Debye response often
/// used for polymers:
///
/// ε(ω) = ε∞ + (εₛ − ε∞) / (1 + (jωτ)^(1−α))
///
/// With α = 0 the model is exactly Debye; α > 0 spreads the relaxation over a
/// wider range of log ω. Accepted range: 0 ≤ α < 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColeColeModel {
    eps_s: Scalar,
    eps_inf: Scalar,
    tau: Scalar,
    alpha: Scalar,
}

impl ColeColeModel {
    /// Creates a Cole–Cole relaxation.
    pub fn new(eps_s: Scalar, eps_inf: Scalar, tau: Scalar, alpha: Scalar) -> Result<Self, ConstructionError> {
        check_relaxation(eps_s, eps_inf, tau)?;
        let alpha = check_exponent("alpha", alpha, |a| (0.0..1.0).contains(&a), "[0, 1)")?;
        Ok(Self {
            eps_s,
            eps_inf,
            tau,
            alpha,
        })
    }

    /// Static permittivity εₛ.
    #[must_use]
    pub fn eps_s(&self) -> Scalar {
        self.eps_s
    }

    /// High-frequency permittivity ε∞.
    #[must_use]
    pub fn eps_inf(&self) -> Scalar {
        self.eps_inf
    }

    /// Relaxation time τ in seconds.
    #[must_use]
    pub fn tau(&self) -> Scalar {
        self.tau
    }

    /// Broadening exponent α.
    #[must_use]
    pub fn alpha(&self) -> Scalar {
        self.alpha
    }
}

impl Permittivity for ColeColeModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        let denominator = 1.0 + principal_powf(J * (omega * self.tau), 1.0 - self.alpha);
        Ok(self.eps_inf + real(self.eps_s - self.eps_inf) / denominator)
    }

    fn name(&self) -> &'static str {
        "ColeColeModel"
    }
}

/// Cole–Davidson relaxation, an asymmetric modification of Debye:
///
/// ε(ω) = ε∞ + (εₛ − ε∞) / (1 + jωτ)^β
///
/// Accepted range: 0 < β ≤ 1; β = 1 is Debye.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColeDavidsonModel {
    eps_s: Scalar,
    eps_inf: Scalar,
    tau: Scalar,
    beta: Scalar,
}

impl ColeDavidsonModel {
    /// Creates a Cole–Davidson relaxation.
    pub fn new(eps_s: Scalar, eps_inf: Scalar, tau: Scalar, beta: Scalar) -> Result<Self, ConstructionError> {
        check_relaxation(eps_s, eps_inf, tau)?;
        let beta = check_exponent("beta", beta, |b| b > 0.0 && b <= 1.0, "(0, 1]")?;
        Ok(Self {
            eps_s,
            eps_inf,
            tau,
            beta,
        })
    }

    /// Static permittivity εₛ.
    #[must_use]
    pub fn eps_s(&self) -> Scalar {
        self.eps_s
    }

    /// High-frequency permittivity ε∞.
    #[must_use]
    pub fn eps_inf(&self) -> Scalar {
        self.eps_inf
    }

    /// Relaxation time τ in seconds.
    #[must_use]
    pub fn tau(&self) -> Scalar {
        self.tau
    }

    /// Asymmetry exponent β.
    #[must_use]
    pub fn beta(&self) -> Scalar {
        self.beta
    }
}

impl Permittivity for ColeDavidsonModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        let denominator = principal_powf(1.0 + J * (omega * self.tau), self.beta);
        Ok(self.eps_inf + real(self.eps_s - self.eps_inf) / denominator)
    }

    fn name(&self) -> &'static str {
        "ColeDavidsonModel"
    }
}

/// Havriliak–Negami relaxation, accounting for both broadness (α) and
/// asymmetry (β) of the dispersion curve:
///
/// ε(ω) = ε∞ + (εₛ − ε∞) / (1 + (jωτ)^α)^β
///
/// Here α is the exponent of jωτ itself, so β = 1 gives Cole–Cole with
/// exponent α (that is, Cole–Cole's `1 − alpha`), α = 1 gives Cole–Davidson
/// and α = β = 1 gives Debye. Accepted ranges: 0 < α ≤ 1, 0 < β ≤ 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HavriliakNegamiModel {
    eps_s: Scalar,
    eps_inf: Scalar,
    tau: Scalar,
    alpha: Scalar,
    beta: Scalar,
}

impl HavriliakNegamiModel {
    /// Creates a Havriliak–Negami relaxation.
    pub fn new(
        eps_s: Scalar,
        eps_inf: Scalar,
        tau: Scalar,
        alpha: Scalar,
        beta: Scalar,
    ) -> Result<Self, ConstructionError> {
        check_relaxation(eps_s, eps_inf, tau)?;
        let alpha = check_exponent("alpha", alpha, |a| a > 0.0 && a <= 1.0, "(0, 1]")?;
        let beta = check_exponent("beta", beta, |b| b > 0.0 && b <= 1.0, "(0, 1]")?;
        Ok(Self {
            eps_s,
            eps_inf,
            tau,
            alpha,
            beta,
        })
    }

    /// Static permittivity εₛ.
    #[must_use]
    pub fn eps_s(&self) -> Scalar {
        self.eps_s
    }

    /// High-frequency permittivity ε∞.
    #[must_use]
    pub fn eps_inf(&self) -> Scalar {
        self.eps_inf
    }

    /// Relaxation time τ in seconds.
    #[must_use]
    pub fn tau(&self) -> Scalar {
        self.tau
    }

    /// Broadness exponent α.
    #[must_use]
    pub fn alpha(&self) -> Scalar {
        self.alpha
    }

    /// Asymmetry exponent β.
    #[must_use]
    pub fn beta(&self) -> Scalar {
        self.beta
    }
}

impl Permittivity for HavriliakNegamiModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        let inner = 1.0 + principal_powf(J * (omega * self.tau), self.alpha);
        let denominator = principal_powf(inner, self.beta);
        Ok(self.eps_inf + real(self.eps_s - self.eps_inf) / denominator)
    }

    fn name(&self) -> &'static str {
        "HavriliakNegamiModel"
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const OMEGAS: [Scalar; 6] = [0.01, 0.3, 1.0, 3.7, 42.0, 1.0e3];

    #[test]
    fn debye_matches_real_imaginary_split() {
        let m = DebyeModel::new(6.0, 2.0, 0.8).unwrap();
        for omega in OMEGAS {
            let eps = m.permittivity(omega).unwrap();
            assert_relative_eq!(eps.re, m.real_part(omega), max_relative = 1.0e-12);
            assert_relative_eq!(eps.im, -m.loss(omega), max_relative = 1.0e-12);
        }
    }

    #[test]
    fn loss_peaks_at_relaxation_frequency() {
        let m = DebyeModel::new(80.0, 5.0, 1.0e-11).unwrap();
        let wr = m.relaxation_frequency().unwrap();
        assert_relative_eq!(wr, 1.0e11, max_relative = 1.0e-12);
        assert_relative_eq!(m.loss(wr), 37.5, max_relative = 1.0e-12);
        assert!(m.loss(0.5 * wr) < m.loss(wr));
        assert!(m.loss(2.0 * wr) < m.loss(wr));
    }

    #[test]
    fn static_limit_is_exact() {
        let models: Vec<Box<dyn Permittivity>> = vec![
            Box::new(DebyeModel::new(7.5, 2.0, 1.0e-3).unwrap()),
            Box::new(ColeColeModel::new(7.5, 2.0, 1.0e-3, 0.4).unwrap()),
            Box::new(ColeDavidsonModel::new(7.5, 2.0, 1.0e-3, 0.3).unwrap()),
            Box::new(HavriliakNegamiModel::new(7.5, 2.0, 1.0e-3, 0.6, 0.3).unwrap()),
        ];
        for m in models {
            assert_eq!(m.permittivity(0.0).unwrap(), real(7.5), "{}", m.name());
        }
    }

    #[test]
    fn high_frequency_limit_approaches_eps_inf() {
        let models: Vec<Box<dyn Permittivity>> = vec![
            Box::new(DebyeModel::new(7.5, 2.0, 1.0).unwrap()),
            Box::new(ColeColeModel::new(7.5, 2.0, 1.0, 0.2).unwrap()),
            Box::new(ColeDavidsonModel::new(7.5, 2.0, 1.0, 0.5).unwrap()),
            Box::new(HavriliakNegamiModel::new(7.5, 2.0, 1.0, 0.8, 0.5).unwrap()),
        ];
        for m in models {
            let eps = m.permittivity(1.0e12).unwrap();
            assert_relative_eq!(eps.re, 2.0, epsilon = 1.0e-3);
            assert_relative_eq!(eps.im, 0.0, epsilon = 1.0e-3);
        }
    }

    #[test]
    fn zero_tau_follows_the_field_at_every_frequency() {
        let m = ColeColeModel::new(7.5, 2.0, 0.0, 0.3).unwrap();
        assert_eq!(m.permittivity(1.0e9).unwrap(), real(7.5));
        let d = DebyeModel::new(7.5, 2.0, 0.0).unwrap();
        assert_eq!(d.permittivity(1.0e9).unwrap(), real(7.5));
        assert_eq!(d.relaxation_frequency(), None);
    }

    #[test]
    fn cole_cole_loss_peak_is_symmetric_in_log_frequency() {
        let m = ColeColeModel::new(10.0, 1.0, 1.0, 0.3).unwrap();
        let below = m.permittivity(0.1).unwrap();
        let above = m.permittivity(10.0).unwrap();
        assert_relative_eq!(below.im, above.im, max_relative = 1.0e-10);
    }

    #[test]
    fn cole_davidson_uses_principal_branch() {
        // (1 + j)^0.5 = 2^(1/4) e^(jπ/8)
        let m = ColeDavidsonModel::new(1.0, 0.0, 1.0, 0.5).unwrap();
        let eps = m.permittivity(1.0).unwrap();
        let expected = 1.0 / principal_powf(1.0 + J, 0.5);
        let angle = -std::f64::consts::FRAC_PI_8;
        assert_relative_eq!(eps.re, expected.re, max_relative = 1.0e-14);
        assert_relative_eq!(eps.arg(), angle, max_relative = 1.0e-12);
        assert_relative_eq!(eps.norm(), 2f64.powf(-0.25), max_relative = 1.0e-12);
    }

    #[test]
    fn negative_frequency_gives_conjugate() {
        let m = HavriliakNegamiModel::new(9.0, 3.0, 0.2, 0.7, 0.4).unwrap();
        for omega in OMEGAS {
            let pos = m.permittivity(omega).unwrap();
            let neg = m.permittivity(-omega).unwrap();
            assert_relative_eq!(neg.re, pos.re, max_relative = 1.0e-12);
            assert_relative_eq!(neg.im, -pos.im, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn exponents_outside_range_are_rejected() {
        assert!(matches!(
            ColeColeModel::new(2.0, 1.0, 1.0, 1.0),
            Err(ConstructionError::OutOfRange { parameter: "alpha", .. })
        ));
        assert!(ColeColeModel::new(2.0, 1.0, 1.0, -0.1).is_err());
        assert!(ColeDavidsonModel::new(2.0, 1.0, 1.0, 0.0).is_err());
        assert!(ColeDavidsonModel::new(2.0, 1.0, 1.0, 1.5).is_err());
        assert!(HavriliakNegamiModel::new(2.0, 1.0, 1.0, 0.0, 0.5).is_err());
        assert!(matches!(
            HavriliakNegamiModel::new(2.0, 1.0, 1.0, 0.5, Scalar::NAN),
            Err(ConstructionError::NonFinite { parameter: "beta", .. })
        ));
        assert!(DebyeModel::new(2.0, 1.0, -1.0).is_err());
    }
}
