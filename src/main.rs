/*!
# Memofib

Time one invocation of each Fibonacci variant and print the results,
fastest first.
*/

use memofib::{
	Bench,
	benches,
	fib,
};



/// # Input.
const N: u32 = 32;

benches!(
	Bench::new("fib::naive(32)")
		.run(|| fib::naive(N)),

	Bench::new("fib::native(32)")
		.run(|| fib::native(N)),

	{
		let mut memo = fib::FibMemo::default();
		Bench::new("FibMemo::get(32)")
			.run(move || memo.get(N))
	},

	{
		let mut memo = fib::memoise();
		Bench::new("Memoise::call(32)")
			.run(move || memo.call(N))
	},

	{
		let mut memo = fib::memoise2();
		Bench::new("MemoFn::call(32)")
			.try_run(move || memo.call((N,)))
	},
);
