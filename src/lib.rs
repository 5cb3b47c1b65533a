/*!
# Memofib

`Memofib` pits five Fibonacci implementations against one another to show
what memoisation (and, to a lesser extent, the calling convention) does to
a doubly-recursive function:

| Variant | Where | Notes |
| ------- | ----- | ----- |
| Naive | [`fib::naive`] | Plain double recursion. |
| Native | [`fib::native`] | The same recursion behind a C ABI function pointer. |
| Memo | [`fib::FibMemo`] | A purpose-built memoiser; recursion goes through the cache. |
| Memoise | [`fib::memoise`] | [`Memoise`] around `naive`; only the outermost call is cached. |
| Memoise2 | [`fib::memoise2`] | [`MemoFn`], keyed by the MD5 [`checksum`] of the arguments. |

The generic pieces work for any function. [`Memoise`] takes anything with a
single `ToString` argument; [`MemoFn`] takes anything with `Serialize`
arguments (use a tuple for several), and passes its body a [`Recurse`]
handle so recursive calls come back through the cache:

```
use memofib::{MemoError, MemoFn, Recurse};

fn fib(f: &mut dyn Recurse<u32, u64>, n: u32) -> Result<u64, MemoError> {
    if n < 2 { Ok(u64::from(n)) }
    else { Ok(f.call(n - 1)? + f.call(n - 2)?) }
}

let mut memo = MemoFn::new(fib);
assert_eq!(memo.call(90), Ok(2_880_067_194_370_816_120));
assert_eq!(memo.cache().len(), 91);
```

Caches are plain in-memory maps owned by their wrapper. Nothing is evicted
and nothing is shared across threads.



## Benchmarks

The `memofib` binary times one invocation of each variant and prints a table
sorted by elapsed time. The same runner is available for your own code via
the [`benches`] macro:

```no_run
use memofib::{Bench, benches, fib};

benches!(
    Bench::new("fib::naive(25)")
        .run(|| fib::naive(25)),

    Bench::new("fib::native(25)")
        .with_replications(3)
        .run(|| fib::native(25)),
);
```

There are two styles of callback:

| Method | Signature | Description |
| ------ | --------- | ----------- |
| `run` | `FnMut() -> O` | Execute a self-contained callback. |
| `try_run` | `FnMut() -> Result<O, MemoError>` | Execute a fallible callback. |
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::map_err_ignore)]
#![allow(clippy::module_name_repetitions)]



mod bench;
mod cpu;
mod error;
pub mod fib;
#[macro_use]
mod macros;
mod memo;
mod memoise;
mod timing;
mod util;

pub use bench::{
	Bench,
	Benches,
};
pub use error::{
	BenchError,
	MemoError,
};
pub use memo::{
	checksum,
	Memo,
};
pub use memoise::{
	Memoise,
	MemoFn,
	Recurse,
};
pub use timing::Timing;



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_fib_10() {
		let mut memo = fib::FibMemo::default();
		let mut memo1 = fib::memoise();
		let mut memo2 = fib::memoise2();

		assert_eq!(fib::naive(10), 55, "Naive.");
		assert_eq!(fib::native(10), 55, "Native.");
		assert_eq!(memo.get(10), 55, "FibMemo.");
		assert_eq!(memo1.call(10), 55, "Memoise.");
		assert_eq!(memo2.call((10,)), Ok(55), "MemoFn.");
	}

	#[test]
	fn t_bench_variants() {
		let mut memo = fib::FibMemo::default();
		let mut memo1 = fib::memoise();
		let mut memo2 = fib::memoise2();

		let benches = [
			Bench::new("fib::naive(10)").run(|| fib::naive(10)),
			Bench::new("fib::native(10)").run(|| fib::native(10)),
			Bench::new("FibMemo::get(10)").run(|| memo.get(10)),
			Bench::new("Memoise::call(10)").run(|| memo1.call(10)),
			Bench::new("MemoFn::call(10)").try_run(|| memo2.call((10,))),
		];

		assert!(
			benches.iter().all(|b| b.timing().is_some()),
			"Every variant should have run."
		);
		assert_eq!(memo.cache().len(), 9, "FibMemo cache.");
		assert_eq!(memo1.cache().len(), 1, "Memoise cache.");
		assert_eq!(memo2.cache().len(), 11, "MemoFn cache.");
	}
}
