//! Text comparison strategies shared by the matcher and completion.

/// How query text is compared against item text.
///
/// Chosen once from configuration. The insensitive variant folds ASCII
/// letters only, so byte lengths and code-point boundaries never change
/// between the two sides of a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
	#[default]
	Sensitive,
	Insensitive,
}

impl CaseSensitivity {
	#[must_use]
	pub fn from_insensitive(insensitive: bool) -> Self {
		if insensitive {
			Self::Insensitive
		} else {
			Self::Sensitive
		}
	}

	#[must_use]
	pub fn is_insensitive(self) -> bool {
		matches!(self, Self::Insensitive)
	}

	/// Whether `needle` occurs anywhere inside `haystack`.
	#[must_use]
	pub fn contains(self, haystack: &str, needle: &str) -> bool {
		match self {
			Self::Sensitive => haystack.contains(needle),
			Self::Insensitive => {
				let needle = needle.as_bytes();
				if needle.is_empty() {
					return true;
				}
				haystack
					.as_bytes()
					.windows(needle.len())
					.any(|window| window.eq_ignore_ascii_case(needle))
			}
		}
	}

	/// Whether `text` begins with `prefix`.
	#[must_use]
	pub fn starts_with(self, text: &str, prefix: &str) -> bool {
		let (text, prefix) = (text.as_bytes(), prefix.as_bytes());
		text.len() >= prefix.len() && self.bytes_equal(&text[..prefix.len()], prefix)
	}

	/// Whether `a` and `b` are the same text.
	#[must_use]
	pub fn equals(self, a: &str, b: &str) -> bool {
		a.len() == b.len() && self.bytes_equal(a.as_bytes(), b.as_bytes())
	}

	fn bytes_equal(self, a: &[u8], b: &[u8]) -> bool {
		match self {
			Self::Sensitive => a == b,
			Self::Insensitive => a.eq_ignore_ascii_case(b),
		}
	}
}
