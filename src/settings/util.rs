/// Treat an empty string the same as an absent value.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|text| !text.is_empty())
}

pub(super) fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_strings_are_dropped() {
		assert_eq!(non_empty(Some(String::new())), None);
		assert_eq!(non_empty(Some(" ".into())), Some(" ".into()));
		assert_eq!(non_empty(None), None);
	}

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}
}
