/// One fitted sinusoidal component of a window decomposition.
///
/// The component models `level + cosine·cos(ωi) + sine·sin(ωi)` over the
/// window's own indices, where index 0 is the newest sample and increasing
/// indices go further into the past.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Harmonic {
	angular_frequency: f64,
	level: f64,
	cosine: f64,
	sine: f64,
}

impl Harmonic {
	#[must_use]
	pub const fn new(angular_frequency: f64, level: f64, cosine: f64, sine: f64) -> Self {
		Self {
			angular_frequency,
			level,
			cosine,
			sine,
		}
	}

	/// In radians per step, within `[0, π]`.
	#[must_use]
	pub const fn angular_frequency(&self) -> f64 {
		self.angular_frequency
	}

	#[must_use]
	pub const fn level(&self) -> f64 {
		self.level
	}

	#[must_use]
	pub const fn cosine(&self) -> f64 {
		self.cosine
	}

	#[must_use]
	pub const fn sine(&self) -> f64 {
		self.sine
	}

	#[must_use]
	pub fn amplitude(&self) -> f64 {
		self.cosine.hypot(self.sine)
	}

	/// The phase offset of the equivalent `level + A·cos(ωi − φ)` form.
	#[must_use]
	pub fn phase(&self) -> f64 {
		self.sine.atan2(self.cosine)
	}

	/// The component's contribution at window index `index`
	/// (0 = newest sample, increasing = further into the past).
	#[must_use]
	pub fn value_behind(&self, index: usize) -> f64 {
		let t = self.angular_frequency * index as f64;
		self.level + self.cosine * t.cos() + self.sine * t.sin()
	}

	/// The component's contribution `steps` steps ahead of the newest sample
	/// (0 = next step, increasing = further into the future).
	///
	/// Forward time runs opposite to the window's most-recent-first axis, so
	/// evaluating the same phase model at index `-steps` flips the sign of
	/// the sine term. This keeps the curve phase-continuous at the boundary
	/// between window and projection.
	#[must_use]
	pub fn value_ahead(&self, steps: usize) -> f64 {
		let t = self.angular_frequency * steps as f64;
		self.level + self.cosine * t.cos() - self.sine * t.sin()
	}
}
