use ringbuffer::{AllocRingBuffer, RingBuffer};

/// A rolling window over the most recent samples of a series.
///
/// The window holds at most `capacity` samples; pushing a new one once the
/// window is full evicts the oldest. [`SampleWindow::snapshot`] exposes the
/// contents **most-recent-first**: index 0 is the latest sample, increasing
/// indices go further into the past. Consumers that extrapolate forward from
/// the window rely on this ordering.
#[derive(Debug, Clone)]
pub struct SampleWindow<T> {
	series: AllocRingBuffer<T>,
}

impl<T: Copy> SampleWindow<T> {
	/// # Panics
	/// - if `capacity` is zero.
	#[must_use]
	pub fn new(capacity: usize) -> Self {
		assert!(capacity > 0, "window capacity must be positive");
		Self {
			series: AllocRingBuffer::new(capacity),
		}
	}

	pub fn push(&mut self, value: T) {
		self.series.push(value);
	}

	/// Whether `capacity` samples have been observed.
	#[must_use]
	pub fn is_ready(&self) -> bool {
		self.series.is_full()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.series.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.series.is_empty()
	}

	#[must_use]
	pub fn capacity(&self) -> usize {
		self.series.capacity()
	}

	/// The window contents, most-recent-first, or `None` while fewer than
	/// `capacity` samples have been observed.
	#[must_use]
	pub fn snapshot(&self) -> Option<Vec<T>> {
		if self.series.is_full() {
			let mut samples: Vec<T> = self.series.iter().copied().collect();
			samples.reverse();
			Some(samples)
		} else {
			None
		}
	}

	pub fn reset(&mut self) {
		self.series.clear();
	}
}
