/*!
# Memofib: Macros
*/

#[macro_export(local_inner_macros)]
/// # Helper: Benchmarks
///
/// This will generate a `main()` function, bootstrap, and run all supplied
/// benches. Results are printed afterward, fastest first.
///
/// See the main crate documentation for more information.
///
/// ## Examples
///
/// ```no_run
/// use memofib::{Bench, benches, fib};
///
/// benches!(
///     Bench::new("fib::naive(20)")
///         .run(|| fib::naive(20)),
///     Bench::new("fib::native(20)")
///         .run(|| fib::native(20))
/// );
/// ```
macro_rules! benches {
	($($benches:expr),+ $(,)?) => {
		/// # Benchmarks!
		fn main() {
			// This can take a while; give 'em a message of hope.
			::std::eprint!("\x1b[1;38;5;199mStarting:\x1b[0m Running benchmark(s). Stand by!\n\n");

			// Run the benches.
			let mut benches = $crate::Benches::default();
			$(
				::std::eprint!("\x1b[1;38;5;4m•\x1b[0m");
				benches.push($benches);
			)+
			::std::eprintln!("\n");
			benches.finish();
		}
	};
}
