/*!
# Memofib: Utility Functions
*/

use unicode_width::UnicodeWidthChar;



/// # Width.
///
/// Return the printable width of a string, skipping over any ANSI color
/// sequences along the way.
pub(crate) fn width(src: &str) -> usize {
	let mut chars = src.chars();
	let mut total = 0_usize;
	while let Some(c) = chars.next() {
		if c == '\x1b' {
			// Run through to the end of the sequence.
			if ! chars.any(|c2| matches!(c2, 'm' | 'A' | 'K')) { break; }
		}
		else if let Some(w) = UnicodeWidthChar::width(c) { total += w; }
	}
	total
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_width() {
		assert_eq!(width(""), 0, "Empty.");
		assert_eq!(width("Method"), 6, "Plain.");
		assert_eq!(width("\x1b[1;38;5;13mMethod\x1b[0m"), 6, "Colored.");
		assert_eq!(width("\x1b[1m2.00 \u{3bc}s\x1b[0m"), 7, "Colored w/ mu.");
		assert_eq!(width("abc\x1b[1"), 3, "Unterminated sequence.");
	}
}
