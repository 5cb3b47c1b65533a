/*!
# Memofib: Errors
*/

use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Memoisation Error.
///
/// This is returned by [`MemoFn`](crate::MemoFn) and anything else that needs
/// to derive a checksum key from its arguments.
pub enum MemoError {
	/// # The arguments could not be serialized.
	Serialize(String),
}

impl std::error::Error for MemoError {}

impl fmt::Display for MemoError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Serialize(e) => write!(f, "Unable to serialize the arguments: {e}"),
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Benchmark Error.
///
/// This enum serves as the custom error type for the benchmark runner.
pub enum BenchError {
	/// # Duplicate name.
	DupeName,

	/// # A memoised callback failed.
	Memo(MemoError),

	/// # No benches were specified.
	NoBench,

	/// # A bench was missing a [`Bench::run`](crate::Bench::run)-type call.
	NoRun,
}

impl std::error::Error for BenchError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Memo(e) => Some(e),
			_ => None,
		}
	}
}

impl From<MemoError> for BenchError {
	#[inline]
	fn from(src: MemoError) -> Self { Self::Memo(src) }
}

impl fmt::Display for BenchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DupeName => f.write_str("Benchmark names must be unique."),
			Self::Memo(e) => fmt::Display::fmt(e, f),
			Self::NoBench => f.write_str("At least one benchmark is required."),
			Self::NoRun => f.write_str("Missing \x1b[1;96mBench::run\x1b[0m."),
		}
	}
}
