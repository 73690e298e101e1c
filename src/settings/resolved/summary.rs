use linepick_tui::Placement;

use super::ResolvedConfig;
use crate::settings::util::bool_to_word;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let session = &config.session;
	let mut lines = vec!["Effective configuration:".to_string()];

	lines.push(format!(
		"  Input: {}",
		config
			.input
			.as_ref()
			.map_or_else(|| "(stdin)".to_string(), |path| path.display().to_string())
	));
	lines.push(format!(
		"  Case-insensitive: {}",
		bool_to_word(session.matching.case.is_insensitive())
	));
	lines.push(format!("  Unitary query: {}", bool_to_word(session.matching.unitary)));
	lines.push(format!("  Tab completion: {}", bool_to_word(session.tab_complete)));
	lines.push(format!("  Delete cancels: {}", bool_to_word(config.delete_cancels)));
	match session.lines {
		0 => lines.push("  Lines: 0 (single line)".to_string()),
		rows => lines.push(format!("  Lines: {rows}")),
	}
	lines.push(format!("  Query capacity: {} bytes", session.query_capacity));
	let placement = match config.placement {
		Placement::Top => "top",
		Placement::Bottom => "bottom",
	};
	lines.push(format!("  Placement: {placement}"));
	if let Some(prompt) = &config.prompt {
		lines.push(format!("  Prompt: {prompt}"));
	}
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!("  Theme: {}", config.theme_name));
	if !config.colors.is_empty() {
		lines.push("  Colour overrides: yes".to_string());
	}

	lines
}
