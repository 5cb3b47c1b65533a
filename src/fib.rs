/*!
# Memofib: Fibonacci

Five takes on the same function: `fib(0) = 0`, `fib(1) = 1`, and
`fib(n) = fib(n - 1) + fib(n - 2)` thereafter.

Results are exact through `fib(93)`; anything larger overflows `u64`.
*/

use crate::{
	Memo,
	Memoise,
	MemoError,
	MemoFn,
	Recurse,
};



/// # Native Function Signature.
pub type NativeFn = extern "C" fn(u32) -> u64;

/// # Single-Argument Memoised Fibonacci.
pub type FibMemoise = Memoise<u32, u64, fn(u32) -> u64>;

/// # Multi-Argument Memoised Fibonacci.
pub type FibMemoFn = MemoFn<(u32,), u64, fn(&mut dyn Recurse<(u32,), u64>, (u32,)) -> Result<u64, MemoError>>;

/// # The Native Entry Point.
const NATIVE: NativeFn = memofib_native;



#[must_use]
/// # Naive Recursion.
///
/// No caching whatsoever, so the call tree grows exponentially.
///
/// ## Examples
///
/// ```
/// assert_eq!(memofib::fib::naive(10), 55);
/// ```
pub fn naive(n: u32) -> u64 {
	if n < 2 { u64::from(n) }
	else { naive(n - 1) + naive(n - 2) }
}

#[must_use]
/// # Native Recursion.
///
/// The same recursion as [`naive`], reached through a C ABI function pointer.
///
/// ## Examples
///
/// ```
/// assert_eq!(memofib::fib::native(10), 55);
/// ```
pub fn native(n: u32) -> u64 { NATIVE(n) }

#[no_mangle]
#[inline(never)]
/// # Native Recursion (C ABI).
pub extern "C" fn memofib_native(n: u32) -> u64 {
	if n < 2 { u64::from(n) }
	else { memofib_native(n - 1) + memofib_native(n - 2) }
}



#[derive(Debug, Clone, Default)]
/// # Memoised Fibonacci.
///
/// A single-purpose memoiser: recursion goes back through [`FibMemo::get`], so
/// every intermediate value is computed once and cached.
///
/// ## Examples
///
/// ```
/// let mut fib = memofib::fib::FibMemo::default();
/// assert_eq!(fib.get(50), 12_586_269_025);
/// ```
pub struct FibMemo {
	cache: Memo<u64>,
}

impl FibMemo {
	/// # Get.
	pub fn get(&mut self, n: u32) -> u64 {
		let key = n.to_string();
		if let Some(v) = self.cache.get(&key) { return v; }
		if n < 2 { return u64::from(n); }

		let out = self.get(n - 1) + self.get(n - 2);
		self.cache.insert(key, out);
		out
	}

	#[must_use]
	/// # Cache.
	pub const fn cache(&self) -> &Memo<u64> { &self.cache }
}



#[must_use]
/// # Generic Memoiser, Single Argument.
///
/// Wrap [`naive`] with a [`Memoise`]. Since `naive` calls itself directly,
/// only the outermost result is ever cached.
pub fn memoise() -> FibMemoise {
	let cb: fn(u32) -> u64 = naive;
	Memoise::new(cb)
}

#[must_use]
/// # Generic Memoiser, Checksum-Keyed.
///
/// Build a [`MemoFn`] whose recursion comes back through the cache.
///
/// The argument list is passed as a one-element tuple, so keys are the
/// checksum of e.g. `[50]`.
///
/// ## Examples
///
/// ```
/// let mut fib = memofib::fib::memoise2();
/// assert_eq!(fib.call((50,)), Ok(12_586_269_025));
/// ```
pub fn memoise2() -> FibMemoFn {
	let cb: fn(&mut dyn Recurse<(u32,), u64>, (u32,)) -> Result<u64, MemoError> = body;
	MemoFn::new(cb)
}

/// # Checksum-Keyed Body.
fn body(fib: &mut dyn Recurse<(u32,), u64>, (n,): (u32,)) -> Result<u64, MemoError> {
	if n < 2 { Ok(u64::from(n)) }
	else { Ok(fib.call((n - 1,))? + fib.call((n - 2,))?) }
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Reference Sequence.
	fn fibonacci_loop(len: usize) -> Vec<u64> {
		let mut out = vec![0, 1];
		for n in 2..len { out.push(out[n - 1] + out[n - 2]); }
		out.truncate(len);
		out
	}

	#[test]
	fn t_base_cases() {
		for n in 0..2_u32 {
			let expected = u64::from(n);
			assert_eq!(naive(n), expected, "naive({n})");
			assert_eq!(native(n), expected, "native({n})");
			assert_eq!(FibMemo::default().get(n), expected, "FibMemo({n})");
			assert_eq!(memoise().call(n), expected, "Memoise({n})");
			assert_eq!(memoise2().call((n,)), Ok(expected), "MemoFn({n})");
		}
	}

	#[test]
	fn t_sequence() {
		let mut memo = FibMemo::default();
		let mut memo1 = memoise();
		let mut memo2 = memoise2();

		for (n, expected) in fibonacci_loop(26).into_iter().enumerate() {
			let n = n as u32;
			assert_eq!(naive(n), expected, "naive({n})");
			assert_eq!(native(n), expected, "native({n})");
			assert_eq!(memo.get(n), expected, "FibMemo({n})");
			assert_eq!(memo1.call(n), expected, "Memoise({n})");
			assert_eq!(memo2.call((n,)), Ok(expected), "MemoFn({n})");
		}

		assert_eq!(naive(20), 6765, "fib(20)");
		assert_eq!(memo.get(93), 12_200_160_415_121_876_738, "fib(93)");
		assert_eq!(memo2.call((93,)), Ok(12_200_160_415_121_876_738), "fib(93)");
	}

	#[test]
	fn t_fib_memo_cached() {
		let mut memo = FibMemo::default();
		assert_eq!(memo.get(20), 6765);

		// Base cases are never stored.
		assert_eq!(memo.cache().len(), 19, "Cached 2..=20.");
		assert!(! memo.cache().contains("1"), "Base cases aren't cached.");

		let (hits, misses) = (memo.cache().hits(), memo.cache().misses());
		assert_eq!(memo.get(20), 6765);
		assert_eq!(memo.cache().hits(), hits + 1, "Repeat call should hit.");
		assert_eq!(memo.cache().misses(), misses, "Repeat call shouldn't miss.");
		assert_eq!(memo.cache().len(), 19, "Nothing new cached.");
	}

	#[test]
	fn t_memoise2_keys() {
		let mut memo = memoise2();
		assert_eq!(memo.call((10,)), Ok(55));

		for n in 0..=10_u32 {
			let key = crate::checksum(&(n,)).expect("Checksum failed.");
			assert!(memo.cache().contains(&key), "Missing key for {n}.");
		}

		// MD5 of `[10]`, not `10`.
		assert!(memo.cache().contains("2a30f5f3b7d1a97cb6132480b992d984"), "Tuple key.");
		assert!(! memo.cache().contains("d3d9446802a44259755d38e6d163e820"), "Bare key.");
	}
}
