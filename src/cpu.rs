/*!
# Memofib: CPU Time
*/

use std::time::Duration;



#[cfg(unix)]
#[allow(unsafe_code)]
#[must_use]
/// # User CPU Time.
///
/// Return the total user CPU time consumed by the process so far.
pub(crate) fn user_time() -> Option<Duration> {
	use num_traits::ToPrimitive;

	// Safety: `rusage` is plain old data; zeroes are a valid starting point.
	let mut usage: libc::rusage = unsafe { std::mem::zeroed() };

	// Safety: the pointer is valid for the duration of the call.
	if 0 == unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) } {
		let secs = usage.ru_utime.tv_sec.to_u64()?;
		let micros = usage.ru_utime.tv_usec.to_u64()?;
		Some(Duration::from_secs(secs) + Duration::from_micros(micros))
	}
	else { None }
}

#[cfg(not(unix))]
#[must_use]
/// # User CPU Time.
///
/// Not available on this platform.
pub(crate) const fn user_time() -> Option<Duration> { None }
