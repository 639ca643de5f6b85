use crate::DecompositionError;

/// Quinn–Fernandes single-tone frequency estimator.
///
/// Refines the coefficient `b = 2·cos(ω)` of the recursive comb filter
/// `z[i] = x[i] + b·z[i-1] - z[i-2]` by fixed-point iteration until two
/// consecutive estimates agree within `tolerance`, then maps it back to an
/// angular frequency in `[0, π]`.
///
/// The search is local and deterministic; it tracks whichever tone dominates
/// the signal it is given and makes no global-optimality claim.
#[derive(Debug, Clone)]
pub struct FrequencyEstimator {
	tolerance: f64,
	max_iterations: usize,
	filtered: Vec<f64>,
}

impl FrequencyEstimator {
	/// # Panics
	/// - if `signal_len` is less than 3 (the recursion looks two samples back).
	#[must_use]
	pub fn new(signal_len: usize, tolerance: f64, max_iterations: usize) -> Self {
		assert!(signal_len >= 3, "estimator needs at least 3 samples");
		Self {
			tolerance,
			max_iterations,
			filtered: vec![0.0; signal_len],
		}
	}

	/// Find the dominant angular frequency of `signal`, in `[0, π]`.
	///
	/// # Errors
	/// - [`DecompositionError::IterationLimit`] if consecutive estimates
	///   still disagree after `max_iterations` refinements.
	/// - [`DecompositionError::SingularFit`] if the filtered signal carries
	///   no energy (the update's denominator is zero).
	///
	/// # Panics
	/// - if the passed `signal` is not compatible with the configured length.
	pub fn estimate(&mut self, signal: &[f64]) -> Result<f64, DecompositionError> {
		assert_eq!(
			signal.len(),
			self.filtered.len(),
			"signal with incompatible length received"
		);

		let z = &mut self.filtered;
		z[0] = signal[0];

		let mut b = 2.0;
		for _ in 0..self.max_iterations {
			let a = b;
			z[1] = signal[1] + a * z[0];
			let mut num = z[0] * z[1];
			let mut den = z[0] * z[0];
			for i in 2..signal.len() {
				z[i] = signal[i] + a * z[i - 1] - z[i - 2];
				num += z[i - 1] * (z[i] + z[i - 2]);
				den += z[i - 1] * z[i - 1];
			}
			if den == 0.0 {
				return Err(DecompositionError::SingularFit);
			}
			b = num / den;
			if (a - b).abs() <= self.tolerance {
				return Ok((b / 2.0).clamp(-1.0, 1.0).acos());
			}
		}

		Err(DecompositionError::IterationLimit {
			limit: self.max_iterations,
		})
	}
}
