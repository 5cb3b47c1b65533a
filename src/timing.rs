/*!
# Memofib: Timing
*/

use dactyl::NiceU32;
use num_traits::cast::FromPrimitive;
use std::time::Duration;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Timing.
///
/// The totals collected over every replication of a single benchmark.
pub struct Timing {
	/// # Replications.
	replications: u32,

	/// # Total Wall Time.
	elapsed: Duration,

	/// # Total User CPU Time.
	user: Option<Duration>,
}

impl Timing {
	/// # New.
	pub(crate) const fn new(replications: u32, elapsed: Duration, user: Option<Duration>) -> Self {
		Self { replications, elapsed, user }
	}

	#[must_use]
	/// # Replications.
	pub const fn replications(&self) -> u32 { self.replications }

	#[must_use]
	/// # Elapsed (Wall) Time.
	pub const fn elapsed(&self) -> Duration { self.elapsed }

	#[must_use]
	/// # User CPU Time.
	///
	/// This is `None` if the platform doesn't expose per-process CPU times.
	pub const fn user(&self) -> Option<Duration> { self.user }

	/// # Nice Elapsed.
	pub(crate) fn nice_elapsed(&self) -> String { nice_duration(self.elapsed) }

	/// # Nice User.
	pub(crate) fn nice_user(&self) -> String {
		self.user.map_or_else(|| "\x1b[2mn/a\x1b[0m".to_owned(), nice_duration)
	}
}



/// # Nice Duration.
///
/// Return the duration rescaled to the most appropriate unit.
fn nice_duration(time: Duration) -> String {
	let nanos = time.as_nanos();
	let (div, unit) =
		if nanos < 1_000 { (1.0, "ns") }
		else if nanos < 1_000_000 { (1_000.0, "\u{3bc}s") }
		else if nanos < 1_000_000_000 { (1_000_000.0, "ms") }
		else { (1_000_000_000.0, "s ") };

	format_time(f64::from_u128(nanos).unwrap_or_default() / div, unit)
}

/// # Format w/ Unit.
///
/// Give us a nice comma-separated integer with two decimal places and the
/// unit.
fn format_time(time: f64, unit: &str) -> String {
	format!(
		"\x1b[1m{}.{:02} {}\x1b[0m",
		NiceU32::from(u32::from_f64(time.trunc()).unwrap_or_default()),
		u32::from_f64(f64::floor(time.fract() * 100.0)).unwrap_or_default(),
		unit
	)
}
