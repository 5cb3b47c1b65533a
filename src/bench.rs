/*!
# Memofib: Bench
*/

use crate::{
	BenchError,
	cpu,
	MemoError,
	Timing,
	util,
};
use dactyl::NiceU64;
use std::{
	collections::HashSet,
	fmt,
	hint::black_box,
	num::NonZeroU32,
	time::{
		Duration,
		Instant,
	},
};



#[allow(unsafe_code)]
/// # Safety: This is non-zero.
const DEFAULT_REPLICATIONS: NonZeroU32 = unsafe { NonZeroU32::new_unchecked(1) };



#[derive(Debug, Default)]
/// # Benchmarks.
///
/// This holds a collection of benchmarks. You don't need to interact with this
/// directly when using the [`benches`](crate::benches) macro, but _do_ need to
/// use it if manually constructing the `main()` method.
pub struct Benches(Vec<Bench>);

impl Extend<Bench> for Benches {
	/// # Extend.
	///
	/// Insert [`Bench`]es en-masse.
	fn extend<T: IntoIterator<Item=Bench>>(&mut self, iter: T) {
		for b in iter { self.push(b); }
	}
}

impl Benches {
	/// # Add Benchmark.
	///
	/// Use this method to push a benchmark to your `Benches` collection. Each
	/// benchmark should be pushed before running [`Benches::finish`].
	///
	/// ## Examples
	///
	/// ```no_run
	/// use memofib::{Benches, Bench};
	///
	/// let mut benches = Benches::default();
	/// benches.push(Bench::new("fib::naive(20)").run(|| memofib::fib::naive(20)));
	/// benches.finish();
	/// ```
	pub fn push(&mut self, b: Bench) { self.0.push(b); }

	/// # Finish.
	///
	/// Crunch and print the data!
	///
	/// This method should only be called after all benchmarks have been pushed
	/// to the set.
	pub fn finish(&self) {
		match self.summarize() {
			Ok(summary) => println!("{summary}"),
			Err(e) => eprintln!("\x1b[1;91mError:\x1b[0m {e}"),
		}
	}

	/// # Summarize.
	///
	/// Build the results table, fastest first.
	fn summarize(&self) -> Result<Table, BenchError> {
		if self.0.is_empty() { return Err(BenchError::NoBench); }

		let mut names = HashSet::with_capacity(self.0.len());
		if ! self.0.iter().all(|b| names.insert(b.name.as_str())) {
			return Err(BenchError::DupeName);
		}

		// Stable sort; failures sink to the bottom in insertion order.
		let mut sorted: Vec<&Bench> = self.0.iter().collect();
		sorted.sort_by_key(|b| match b.timing {
			Some(Ok(t)) => (false, t.elapsed()),
			_ => (true, Duration::ZERO),
		});

		let mut summary = Table::default();
		for b in sorted { summary.push(b); }
		Ok(summary)
	}
}



#[derive(Debug)]
/// # Benchmark.
///
/// This struct holds a single "bench" you wish to run. See the main crate
/// documentation for more information.
pub struct Bench {
	name: String,
	replications: NonZeroU32,
	timing: Option<Result<Timing, BenchError>>,
}

impl Bench {
	#[must_use]
	/// # New.
	///
	/// Instantiate a new benchmark with a name. The name can be anything, but
	/// is intended to represent the method call itself, like `fib::naive(10)`.
	///
	/// Names must be unique across all benchmarks in a set.
	///
	/// ## Panics
	///
	/// This method will panic if the name is empty.
	pub fn new<S>(name: S) -> Self
	where S: AsRef<str> {
		let name = name.as_ref().trim();
		assert!(! name.is_empty(), "Name is required.");

		Self {
			name: name.to_owned(),
			replications: DEFAULT_REPLICATIONS,
			timing: None,
		}
	}

	#[must_use]
	/// # With Replications.
	///
	/// By default, the callback is run exactly once. This method can be used
	/// to run it more times; the reported timings are totals.
	///
	/// Zero is bumped up to one.
	///
	/// ## Examples
	///
	/// ```no_run
	/// use memofib::Bench;
	///
	/// memofib::benches!(
	///     Bench::new("fib::naive(20)")
	///         .with_replications(10)
	///         .run(|| memofib::fib::naive(20))
	/// );
	/// ```
	pub const fn with_replications(mut self, replications: u32) -> Self {
		self.replications = match NonZeroU32::new(replications) {
			Some(r) => r,
			None => DEFAULT_REPLICATIONS,
		};
		self
	}

	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Timing.
	///
	/// Return the collected timing, if the bench was run successfully.
	pub const fn timing(&self) -> Option<Timing> {
		match self.timing {
			Some(Ok(t)) => Some(t),
			_ => None,
		}
	}
}

impl Bench {
	#[must_use]
	/// # Run Benchmark!
	///
	/// Use this method to execute a benchmark for a callback that does not
	/// require any external arguments.
	///
	/// ## Examples
	///
	/// ```no_run
	/// use memofib::Bench;
	///
	/// memofib::benches!(
	///     Bench::new("fib::native(20)")
	///         .run(|| memofib::fib::native(20))
	/// );
	/// ```
	pub fn run<F, O>(self, mut cb: F) -> Self
	where F: FnMut() -> O {
		self.try_run(|| Ok(cb()))
	}

	#[must_use]
	/// # Run Fallible Benchmark!
	///
	/// Same as [`Bench::run`], but for callbacks returning a `Result`. The
	/// first error stops the bench, and is reported in its place.
	///
	/// ## Examples
	///
	/// ```no_run
	/// use memofib::Bench;
	///
	/// memofib::benches!(
	///     {
	///         let mut fib = memofib::fib::memoise2();
	///         Bench::new("MemoFn::call(20)")
	///             .try_run(move || fib.call((20,)))
	///     }
	/// );
	/// ```
	pub fn try_run<F, O>(mut self, mut cb: F) -> Self
	where F: FnMut() -> Result<O, MemoError> {
		let reps = self.replications.get();
		let cpu = cpu::user_time();
		let now = Instant::now();

		for _ in 0..reps {
			if let Err(e) = cb().map(black_box) {
				self.timing.replace(Err(BenchError::from(e)));
				return self;
			}
		}

		let elapsed = now.elapsed();
		let user = cpu.zip(cpu::user_time())
			.map(|(start, end)| end.saturating_sub(start));

		self.timing.replace(Ok(Timing::new(reps, elapsed, user)));
		self
	}
}



#[derive(Debug, Clone)]
/// # Benchmarking Results.
///
/// This table holds the results of all the benchmarks so they can be printed
/// consistently.
struct Table(Vec<TableRow>);

impl Default for Table {
	fn default() -> Self {
		Self(vec![
			TableRow::Normal(
				"\x1b[1;38;5;13mMethod".to_owned(),
				"Replications".to_owned(),
				"Elapsed".to_owned(),
				"User CPU\x1b[0m".to_owned()
			),
			TableRow::Spacer,
		])
	}
}

impl fmt::Display for Table {
	#[allow(clippy::many_single_char_names)]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		// Maximum column widths.
		let (w1, w2, w3, w4) = self.lens();

		// Pre-generate the full-width spacer content.
		let spacer = format!(
			"\x1b[38;5;5m{}\x1b[0m\n",
			"-".repeat(w1 + w2 + w3 + w4 + 12)
		);

		// Pre-generate padding too. We'll slice this to size each time padding
		// is needed.
		let pad = " ".repeat(w1.max(w2).max(w3).max(w4));

		for v in &self.0 {
			let (c1, c2, c3, c4) = v.lens();
			match v {
				TableRow::Normal(a, b, c, d) => writeln!(
					f, "{}{}    {}{}    {}{}    {}{}",
					a, &pad[..w1 - c1],
					&pad[..w2 - c2], b,
					&pad[..w3 - c3], c,
					&pad[..w4 - c4], d,
				)?,
				TableRow::Error(a, b) => writeln!(
					f, "{}{}    \x1b[1;38;5;208m{}\x1b[0m",
					a, &pad[..w1 - c1], b,
				)?,
				TableRow::Spacer => f.write_str(&spacer)?,
			}
		}

		Ok(())
	}
}

impl Table {
	/// # Add Row.
	fn push(&mut self, src: &Bench) {
		let name = format_name(&src.name);
		match src.timing.clone().unwrap_or(Err(BenchError::NoRun)) {
			Ok(t) => {
				let reps = format!("\x1b[2m{}\x1b[0m", NiceU64::from(u64::from(t.replications())));
				self.0.push(TableRow::Normal(name, reps, t.nice_elapsed(), t.nice_user()));
			},
			Err(e) => {
				self.0.push(TableRow::Error(name, e));
			}
		}
	}

	/// # Widths.
	fn lens(&self) -> (usize, usize, usize, usize) {
		self.0.iter()
			.fold((0, 0, 0, 0), |acc, v| {
				let v = v.lens();
				(
					acc.0.max(v.0),
					acc.1.max(v.1),
					acc.2.max(v.2),
					acc.3.max(v.3),
				)
			})
	}
}



#[derive(Debug, Clone)]
/// # Table Row.
enum TableRow {
	Normal(String, String, String, String),
	Error(String, BenchError),
	Spacer,
}

impl TableRow {
	/// # Lengths (Widths).
	///
	/// Return the printable widths for each column.
	fn lens(&self) -> (usize, usize, usize, usize) {
		match self {
			Self::Normal(a, b, c, d) => (
				util::width(a),
				util::width(b),
				util::width(c),
				util::width(d),
			),
			Self::Error(a, _) => (util::width(a), 0, 0, 0),
			Self::Spacer => (0, 0, 0, 0),
		}
	}
}



#[allow(clippy::option_if_let_else)]
/// # Format Name.
///
/// Dim everything up to the method itself, e.g. the `fib::` of
/// `fib::naive(32)`.
fn format_name(name: &str) -> String {
	let end = name.find('(').unwrap_or(name.len());
	if let Some(pos) = name[..end].rfind("::") {
		format!("\x1b[2m{}::\x1b[0m{}", &name[..pos], &name[pos + 2..])
	}
	else { name.to_owned() }
}
