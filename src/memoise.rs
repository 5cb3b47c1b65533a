/*!
# Memofib: Memoisers

This module holds two generic wrappers that add a [`Memo`] cache to an
arbitrary function.

[`Memoise`] keys on the argument's string form and handles exactly one
argument. It knows nothing about the wrapped function's internals, so a
recursive function calling _itself_ goes around the cache; only the
outermost call benefits.

[`MemoFn`] keys on the [`checksum`] of its (serializable) arguments, and
hands its body a [`Recurse`] handle so recursive calls come back through the
same cache.
*/

use crate::{
	checksum,
	Memo,
	MemoError,
};
use serde::Serialize;
use std::{
	fmt,
	marker::PhantomData,
};



/// # Single-Argument Memoiser.
///
/// Wrap a one-argument function with a private cache keyed by
/// `arg.to_string()`.
///
/// ## Examples
///
/// ```
/// use memofib::Memoise;
///
/// let mut square = Memoise::new(|n: u32| n * n);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.cache().hits(), 1);
/// ```
pub struct Memoise<A, O, F> {
	inner: F,
	cache: Memo<O>,
	_arg: PhantomData<fn(A)>,
}

impl<A, O: fmt::Debug, F> fmt::Debug for Memoise<A, O, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Memoise")
			.field("cache", &self.cache)
			.finish_non_exhaustive()
	}
}

impl<A, O, F> Memoise<A, O, F>
where A: ToString, O: Clone, F: FnMut(A) -> O {
	/// # New.
	pub fn new(inner: F) -> Self {
		Self {
			inner,
			cache: Memo::new(),
			_arg: PhantomData,
		}
	}

	/// # Call.
	///
	/// Return the cached result for `arg`, or run the wrapped function and
	/// cache what it returns.
	pub fn call(&mut self, arg: A) -> O {
		let key = arg.to_string();
		if let Some(v) = self.cache.get(&key) { return v; }

		let out = (self.inner)(arg);
		self.cache.insert(key, out.clone());
		out
	}

	#[must_use]
	/// # Cache.
	pub const fn cache(&self) -> &Memo<O> { &self.cache }
}



/// # Recursion Handle.
///
/// [`MemoFn`] bodies receive one of these in place of a direct reference to
/// themselves. Calling through it consults (and fills) the cache.
pub trait Recurse<A, O> {
	/// # Call.
	///
	/// ## Errors
	///
	/// This will return an error if the arguments cannot be serialized into a
	/// checksum key.
	fn call(&mut self, args: A) -> Result<O, MemoError>;
}



/// # Multi-Argument Memoiser.
///
/// Wrap a function body with a private cache keyed by the [`checksum`] of its
/// arguments. Pass multiple arguments as a tuple.
///
/// The body takes a [`Recurse`] handle as its first parameter. Any recursion
/// must go through that handle, which routes back through the cache.
///
/// ## Examples
///
/// ```
/// use memofib::{MemoError, MemoFn, Recurse};
///
/// // Binomial coefficients, two arguments.
/// fn choose(f: &mut dyn Recurse<(u64, u64), u64>, (n, k): (u64, u64))
/// -> Result<u64, MemoError> {
///     if k == 0 || k == n { Ok(1) }
///     else { Ok(f.call((n - 1, k - 1))? + f.call((n - 1, k))?) }
/// }
///
/// let mut memo = MemoFn::new(choose);
/// assert_eq!(memo.call((30, 15)), Ok(155_117_520));
/// ```
pub struct MemoFn<A, O, F> {
	body: F,
	cache: Memo<O>,
	_arg: PhantomData<fn(A)>,
}

impl<A, O: fmt::Debug, F> fmt::Debug for MemoFn<A, O, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoFn")
			.field("cache", &self.cache)
			.finish_non_exhaustive()
	}
}

impl<A, O, F> MemoFn<A, O, F>
where
	A: Serialize,
	O: Clone,
	F: Fn(&mut dyn Recurse<A, O>, A) -> Result<O, MemoError>,
{
	/// # New.
	pub fn new(body: F) -> Self {
		Self {
			body,
			cache: Memo::new(),
			_arg: PhantomData,
		}
	}

	/// # Call.
	///
	/// Return the cached result for `args`, or evaluate the body and cache
	/// what it returns.
	///
	/// ## Errors
	///
	/// This will return an error if any of the (possibly recursive) argument
	/// sets cannot be serialized.
	pub fn call(&mut self, args: A) -> Result<O, MemoError> {
		Bound { body: &self.body, cache: &mut self.cache }.call(args)
	}

	#[must_use]
	/// # Cache.
	pub const fn cache(&self) -> &Memo<O> { &self.cache }
}

impl<A, O, F> Recurse<A, O> for MemoFn<A, O, F>
where
	A: Serialize,
	O: Clone,
	F: Fn(&mut dyn Recurse<A, O>, A) -> Result<O, MemoError>,
{
	#[inline]
	fn call(&mut self, args: A) -> Result<O, MemoError> { Self::call(self, args) }
}



/// # Bound Body.
///
/// The body and cache of a [`MemoFn`], borrowed separately so the body can
/// be handed a mutable handle to the cache while it runs.
struct Bound<'a, O, F> {
	body: &'a F,
	cache: &'a mut Memo<O>,
}

impl<A, O, F> Recurse<A, O> for Bound<'_, O, F>
where
	A: Serialize,
	O: Clone,
	F: Fn(&mut dyn Recurse<A, O>, A) -> Result<O, MemoError>,
{
	fn call(&mut self, args: A) -> Result<O, MemoError> {
		let key = checksum(&args)?;
		if let Some(v) = self.cache.get(&key) { return Ok(v); }

		let body = self.body;
		let out = body(self, args)?;
		self.cache.insert(key, out.clone());
		Ok(out)
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;

	/// # Recursive Fibonacci, Counting Calls.
	fn counted(n: u64, calls: &Cell<u64>) -> u64 {
		calls.set(calls.get() + 1);
		if n < 2 { n }
		else { counted(n - 1, calls) + counted(n - 2, calls) }
	}

	#[test]
	fn t_memoise_outer_only() {
		let calls = Cell::new(0_u64);
		let mut memo = Memoise::new(|n: u64| counted(n, &calls));

		// A full recursive call tree: 2 * fib(21) - 1.
		assert_eq!(memo.call(20), 6765);
		assert_eq!(calls.get(), 21_891, "The first call should recurse fully.");

		// The outermost result is cached.
		assert_eq!(memo.call(20), 6765);
		assert_eq!(calls.get(), 21_891, "The repeat call should be cached.");
		assert_eq!(memo.cache().hits(), 1, "Hits.");

		// But the inner calls never were: 2 * fib(20) - 1 more.
		assert_eq!(memo.call(19), 4181);
		assert_eq!(calls.get(), 21_891 + 13_529, "Inner calls bypass the cache.");
		assert_eq!(memo.cache().len(), 2, "Only outermost results are cached.");
	}

	#[test]
	fn t_memofn_recursive() {
		let calls = Cell::new(0_u64);
		let mut memo = MemoFn::new(|f: &mut dyn Recurse<u64, u64>, n: u64| {
			calls.set(calls.get() + 1);
			if n < 2 { Ok(n) }
			else { Ok(f.call(n - 1)? + f.call(n - 2)?) }
		});

		assert_eq!(memo.call(20), Ok(6765));
		assert_eq!(calls.get(), 21, "Each argument should be evaluated once.");
		assert_eq!(memo.cache().len(), 21, "Every argument should be cached.");
		assert_eq!(memo.cache().misses(), 21, "Misses.");

		let hits = memo.cache().hits();
		assert_eq!(memo.call(20), Ok(6765));
		assert_eq!(calls.get(), 21, "The repeat call should be cached.");
		assert_eq!(memo.cache().hits(), hits + 1, "One more hit.");
		assert_eq!(memo.cache().misses(), 21, "No new misses.");
	}

	#[test]
	fn t_memofn_tuple_args() {
		// Binomial coefficients, keyed on (n, k).
		let calls = Cell::new(0_u64);
		let mut memo = MemoFn::new(|f: &mut dyn Recurse<(u64, u64), u64>, (n, k): (u64, u64)| {
			calls.set(calls.get() + 1);
			if k == 0 || k == n { Ok(1) }
			else { Ok(f.call((n - 1, k - 1))? + f.call((n - 1, k))?) }
		});

		assert_eq!(memo.call((10, 5)), Ok(252));
		assert_eq!(memo.cache().len(), 35, "Distinct (n, k) pairs.");
		assert_eq!(calls.get(), 35, "Each pair should be evaluated once.");

		assert_eq!(memo.call((10, 5)), Ok(252));
		assert_eq!(calls.get(), 35, "The repeat call should be cached.");

		// Argument order matters.
		assert!(
			memo.cache().contains(&checksum(&(10_u64, 5_u64)).expect("Checksum failed.")),
			"Tuple key."
		);
		assert!(
			! memo.cache().contains(&checksum(&(5_u64, 10_u64)).expect("Checksum failed.")),
			"Swapped tuple key."
		);
	}

	#[test]
	fn t_memofn_struct_args() {
		#[derive(Serialize)]
		struct Grid { w: u32, h: u32 }

		// Lattice paths through a grid.
		let mut memo = MemoFn::new(|f: &mut dyn Recurse<Grid, u64>, g: Grid| {
			if g.w == 0 || g.h == 0 { Ok(1) }
			else {
				Ok(
					f.call(Grid { w: g.w - 1, h: g.h })? +
					f.call(Grid { w: g.w, h: g.h - 1 })?
				)
			}
		});

		assert_eq!(memo.call(Grid { w: 16, h: 16 }), Ok(601_080_390));
		assert_eq!(memo.cache().len(), 17 * 17 - 1, "Distinct argument sets.");
	}

	#[test]
	fn t_memofn_error() {
		use std::collections::BTreeMap;

		let mut memo = MemoFn::new(|_: &mut dyn Recurse<BTreeMap<(u8, u8), u8>, u8>, m: BTreeMap<(u8, u8), u8>| {
			Ok(m.len() as u8)
		});

		let mut map = BTreeMap::new();
		map.insert((1, 2), 3);
		assert!(
			matches!(memo.call(map), Err(MemoError::Serialize(_))),
			"Unserializable arguments should fail."
		);
		assert!(memo.cache().is_empty(), "Nothing should be cached.");
	}
}
