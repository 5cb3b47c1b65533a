/*!
# Memofib: Memo Cache
*/

use crate::MemoError;
use serde::Serialize;
use std::collections::HashMap;



#[derive(Debug, Clone)]
/// # Memo Cache.
///
/// A flat map from a string key to a previously computed result. There is no
/// eviction and no size limit; entries live as long as the cache does.
///
/// Lookups are counted so callers can see whether a value was fetched or had
/// to be (re)computed.
pub struct Memo<V> {
	map: HashMap<String, V>,
	hits: u64,
	misses: u64,
}

impl<V> Default for Memo<V> {
	fn default() -> Self {
		Self {
			map: HashMap::new(),
			hits: 0,
			misses: 0,
		}
	}
}

impl<V: Clone> Memo<V> {
	/// # Get.
	///
	/// Return a copy of the cached value for `key`, if any, bumping the hit or
	/// miss counter accordingly.
	pub fn get(&mut self, key: &str) -> Option<V> {
		if let Some(v) = self.map.get(key) {
			self.hits += 1;
			Some(v.clone())
		}
		else {
			self.misses += 1;
			None
		}
	}
}

impl<V> Memo<V> {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	/// # Insert.
	///
	/// Store a value, replacing (and returning) whatever was there before.
	pub fn insert(&mut self, key: String, value: V) -> Option<V> {
		self.map.insert(key, value)
	}

	#[must_use]
	/// # Contains Key?
	pub fn contains(&self, key: &str) -> bool { self.map.contains_key(key) }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.map.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.map.is_empty() }

	#[must_use]
	/// # Hits.
	pub const fn hits(&self) -> u64 { self.hits }

	#[must_use]
	/// # Misses.
	pub const fn misses(&self) -> u64 { self.misses }

	/// # Clear.
	///
	/// Drop all entries and reset the counters.
	pub fn clear(&mut self) {
		self.map.clear();
		self.hits = 0;
		self.misses = 0;
	}
}



/// # Checksum.
///
/// Derive a cache key from an argument value: the lowercase hex MD5 digest of
/// its JSON serialization. Multiple arguments should be passed as a tuple,
/// which serializes as a JSON array.
///
/// ## Examples
///
/// ```
/// let a = memofib::checksum(&(1_u32, "a")).unwrap();
/// let b = memofib::checksum(&(1_u32, "a")).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 32);
/// ```
///
/// ## Errors
///
/// This will return an error if the value cannot be serialized.
pub fn checksum<A>(args: &A) -> Result<String, MemoError>
where A: Serialize + ?Sized {
	let raw = serde_json::to_vec(args)
		.map_err(|e| MemoError::Serialize(e.to_string()))?;
	Ok(format!("{:x}", md5::compute(raw)))
}
