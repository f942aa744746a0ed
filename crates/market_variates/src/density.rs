//! Analytic Beta density for overlay comparison.
//!
//! The engine never samples from these functions; they exist so a consumer
//! can draw the theoretical curve over an empirical histogram, and so tests
//! can compare the sampler against the analytic distribution.
//!
//! All functions are generic over `T: Float` so they work with `f64` and
//! `f32` alike.

use num_traits::Float;

/// Lanczos approximation coefficients (g = 7, 9 terms).
const LANCZOS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Natural logarithm of the gamma function.
///
/// Uses the fixed 9-coefficient Lanczos approximation, with the reflection
/// formula `ln Γ(z) = ln π − ln sin(πz) − ln Γ(1 − z)` for inputs below 0.5.
///
/// # Examples
///
/// ```rust
/// use market_variates::log_gamma;
///
/// // Γ(4) = 3! = 6
/// assert!((log_gamma(4.0_f64) - 6.0_f64.ln()).abs() < 1e-10);
/// ```
pub fn log_gamma<T: Float>(z: T) -> T {
    let half = T::from(0.5).unwrap();
    let one = T::one();
    let pi = T::from(std::f64::consts::PI).unwrap();

    if z < half {
        // Reflection formula; the recursive argument 1 - z is >= 0.5.
        return pi.ln() - (pi * z).sin().ln() - log_gamma(one - z);
    }

    let z = z - one;
    let mut x = T::from(LANCZOS[0]).unwrap();
    for (i, &p) in LANCZOS.iter().enumerate().skip(1) {
        x = x + T::from(p).unwrap() / (z + T::from(i).unwrap());
    }
    let t = z + T::from(7.5).unwrap();
    let two_pi = T::from(2.0 * std::f64::consts::PI).unwrap();

    half * two_pi.ln() + (z + half) * t.ln() - t + x.ln()
}

/// Natural logarithm of the Beta function, `ln B(a, b)`.
#[inline]
pub fn log_beta<T: Float>(a: T, b: T) -> T {
    log_gamma(a) + log_gamma(b) - log_gamma(a + b)
}

/// Beta(α, β) probability density at `x`.
///
/// Computed in log-space as
/// `exp((α−1) ln x + (β−1) ln(1−x) − ln B(α, β))`.
///
/// Returns 0 for `x ≤ 0.001` or `x ≥ 0.999`: with α or β below 1 the
/// density diverges at the boundary, and the overlay curve has no use for
/// infinities. This is a deliberate clamp, not a numerically exact boundary
/// value.
///
/// # Examples
///
/// ```rust
/// use market_variates::beta_pdf;
///
/// // Beta(2, 5) density is 30·x·(1−x)⁴
/// let x = 0.2_f64;
/// let expected = 30.0 * x * (1.0 - x).powi(4);
/// assert!((beta_pdf(x, 2.0, 5.0) - expected).abs() < 1e-10);
/// ```
pub fn beta_pdf<T: Float>(x: T, alpha: T, beta: T) -> T {
    let lo = T::from(0.001).unwrap();
    let hi = T::from(0.999).unwrap();
    if x <= lo || x >= hi {
        return T::zero();
    }
    let one = T::one();
    let log_density =
        (alpha - one) * x.ln() + (beta - one) * (one - x).ln() - log_beta(alpha, beta);
    log_density.exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // log_gamma tests
    // ==========================================================

    #[test]
    fn test_log_gamma_integer_factorials() {
        // Γ(n) = (n-1)!
        assert_relative_eq!(log_gamma(1.0_f64), 0.0, epsilon = 1e-12);
        assert_relative_eq!(log_gamma(2.0_f64), 0.0, epsilon = 1e-12);
        assert_relative_eq!(log_gamma(3.0_f64), 2.0_f64.ln(), epsilon = 1e-10);
        assert_relative_eq!(log_gamma(4.0_f64), 6.0_f64.ln(), epsilon = 1e-10);
        assert_relative_eq!(log_gamma(7.0_f64), 720.0_f64.ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_log_gamma_half_integers() {
        // Γ(1/2) = sqrt(π)
        let sqrt_pi_ln = 0.5 * std::f64::consts::PI.ln();
        assert_relative_eq!(log_gamma(0.5_f64), sqrt_pi_ln, epsilon = 1e-10);

        // Γ(5.5) = 52.34277778455352
        assert_relative_eq!(
            log_gamma(5.5_f64),
            52.34277778455352_f64.ln(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_log_gamma_reflection_branch() {
        // Γ(0.25) = 3.6256099082219083
        assert_relative_eq!(
            log_gamma(0.25_f64),
            3.6256099082219083_f64.ln(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_log_gamma_recurrence() {
        // ln Γ(z + 1) = ln Γ(z) + ln z
        for &z in &[0.7, 1.3, 2.8, 6.1] {
            assert_relative_eq!(
                log_gamma(z + 1.0_f64),
                log_gamma(z) + z.ln(),
                epsilon = 1e-9
            );
        }
    }

    // ==========================================================
    // beta_pdf tests
    // ==========================================================

    #[test]
    fn test_beta_pdf_reference_values() {
        // Beta(2, 5): 1/B = 30, density 30·x·(1−x)⁴
        assert_relative_eq!(beta_pdf(0.2_f64, 2.0, 5.0), 2.4576, epsilon = 1e-10);
        assert_relative_eq!(beta_pdf(0.5_f64, 2.0, 5.0), 0.9375, epsilon = 1e-10);

        // Beta(1, 1) is uniform on the interior
        assert_relative_eq!(beta_pdf(0.3_f64, 1.0, 1.0), 1.0, epsilon = 1e-10);
        assert_relative_eq!(beta_pdf(0.7_f64, 1.0, 1.0), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_beta_pdf_edge_clamp() {
        // The clamp keeps shapes below 1 from producing infinities.
        assert_eq!(beta_pdf(0.0_f64, 0.5, 0.5), 0.0);
        assert_eq!(beta_pdf(0.001_f64, 0.5, 0.5), 0.0);
        assert_eq!(beta_pdf(0.999_f64, 0.5, 0.5), 0.0);
        assert_eq!(beta_pdf(1.0_f64, 0.5, 0.5), 0.0);
        assert_eq!(beta_pdf(-0.5_f64, 2.0, 5.0), 0.0);
        assert_eq!(beta_pdf(1.5_f64, 2.0, 5.0), 0.0);
    }

    #[test]
    fn test_beta_pdf_symmetry() {
        // f(x; a, b) = f(1−x; b, a)
        for &x in &[0.1, 0.25, 0.4, 0.6, 0.9] {
            assert_relative_eq!(
                beta_pdf(x, 2.0_f64, 5.0),
                beta_pdf(1.0 - x, 5.0, 2.0),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn test_beta_pdf_integrates_to_one() {
        // Trapezoidal rule over the interior; the clamped edges carry
        // negligible mass for these shapes.
        let steps = 100_000;
        let h = 1.0 / steps as f64;
        let mut integral = 0.0;
        for i in 0..steps {
            let a = beta_pdf(i as f64 * h, 2.0_f64, 5.0);
            let b = beta_pdf((i + 1) as f64 * h, 2.0, 5.0);
            integral += 0.5 * (a + b) * h;
        }
        assert_relative_eq!(integral, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_beta_pdf_f32_compatibility() {
        let result = beta_pdf(0.5_f32, 2.0, 5.0);
        assert!((result - 0.9375).abs() < 1e-4);
    }
}
