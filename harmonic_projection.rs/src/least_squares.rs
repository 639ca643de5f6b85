use crate::{DecompositionError, Harmonic};

/// Closed-form least-squares fit of `m + c·cos(ωi) + s·sin(ωi)` to `signal`
/// over its own indices, for a known angular frequency.
///
/// `ω == 0` degenerates to a pure level fit (`m` = signal mean, `c = s = 0`).
///
/// # Errors
/// - [`DecompositionError::SingularFit`] if the moment matrix is singular
///   (collinear cosine/sine columns over this window).
pub fn fit_single_tone(
	signal: &[f64],
	angular_frequency: f64,
) -> Result<Harmonic, DecompositionError> {
	let n = signal.len() as f64;

	let mut sc = 0.0;
	let mut ss = 0.0;
	let mut scc = 0.0;
	let mut sss = 0.0;
	let mut scs = 0.0;
	let mut sx = 0.0;
	let mut sxc = 0.0;
	let mut sxs = 0.0;
	for (i, &x) in signal.iter().enumerate() {
		let (sin, cos) = (angular_frequency * i as f64).sin_cos();
		sc += cos;
		ss += sin;
		scc += cos * cos;
		sss += sin * sin;
		scs += cos * sin;
		sx += x;
		sxc += x * cos;
		sxs += x * sin;
	}
	sc /= n;
	ss /= n;
	scc /= n;
	sss /= n;
	scs /= n;
	sx /= n;
	sxc /= n;
	sxs /= n;

	if angular_frequency == 0.0 {
		return Ok(Harmonic::new(0.0, sx, 0.0, 0.0));
	}

	let cov_cs = scs - sc * ss;
	let var_c = scc - sc * sc;
	let var_s = sss - ss * ss;
	let den = cov_cs * cov_cs - var_c * var_s;
	if den == 0.0 {
		return Err(DecompositionError::SingularFit);
	}

	let cosine = ((sxs - sx * ss) * cov_cs - (sxc - sx * sc) * var_s) / den;
	let sine = ((sxc - sx * sc) * cov_cs - (sxs - sx * ss) * var_c) / den;
	let level = sx - cosine * sc - sine * ss;

	Ok(Harmonic::new(angular_frequency, level, cosine, sine))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_recovers_known_coefficients() {
		let signal: Vec<f64> = (0..32)
			.map(|i| {
				let t = 0.7 * i as f64;
				1.2 + 2.5 * t.cos() + 0.3 * t.sin()
			})
			.collect();
		let harmonic = fit_single_tone(&signal, 0.7).unwrap();
		assert!((harmonic.level() - 1.2).abs() < 1e-9);
		assert!((harmonic.cosine() - 2.5).abs() < 1e-9);
		assert!((harmonic.sine() - 0.3).abs() < 1e-9);
	}

	#[test]
	fn test_zero_frequency_fits_the_mean() {
		let signal = [4.0, 6.0, 5.0, 5.0];
		let harmonic = fit_single_tone(&signal, 0.0).unwrap();
		assert!((harmonic.level() - 5.0).abs() < f64::EPSILON);
		assert!(harmonic.cosine().abs() < f64::EPSILON);
		assert!(harmonic.sine().abs() < f64::EPSILON);
		assert!(harmonic.angular_frequency().abs() < f64::EPSILON);
	}

	#[test]
	fn test_collinear_moments_are_singular() {
		// At a frequency this small every cos(ωi) over the window rounds to
		// exactly 1.0, so the cosine column is collinear with the level
		// column and the moment determinant is exactly zero.
		let signal = [4.0, 6.0, 5.0, 5.0, 4.5, 5.5, 5.0, 5.0];
		assert_eq!(
			fit_single_tone(&signal, 1e-10),
			Err(DecompositionError::SingularFit)
		);
	}

	#[test]
	fn test_fit_is_exact_given_the_frequency() {
		// Given the true ω, the closed form reconstructs the signal itself.
		let signal: Vec<f64> = (0..48)
			.map(|i| {
				let t = 1.1 * i as f64;
				-0.4 + 1.7 * t.cos() - 0.9 * t.sin()
			})
			.collect();
		let harmonic = fit_single_tone(&signal, 1.1).unwrap();
		for (i, &x) in signal.iter().enumerate() {
			assert!((harmonic.value_behind(i) - x).abs() < 1e-9);
		}
	}
}
