use linepick_core::{ItemStore, Outcome, SessionOptions};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Position;
use ratatui::style::Color;

use crate::{App, Picker, Placement};

fn picker(items: &[&str], lines: usize) -> Picker {
	Picker::new(ItemStore::from_lines(items.iter().copied())).with_options(SessionOptions {
		lines,
		..SessionOptions::default()
	})
}

fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw snapshot frame");
	terminal
}

fn render(app: &mut App, width: u16, height: u16) -> String {
	let terminal = draw(app, width, height);
	buffer_to_string(terminal.backend().buffer())
}

fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
	app.handle_key(KeyEvent::new(code, modifiers));
}

/// One line per row, prefixed with the row number and without trailing blanks.
fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(format!("{y}|{}", line.trim_end()));
	}
	lines.join("\n")
}

#[test]
fn vertical_list_sits_under_the_prompt() {
	let mut app = picker(&["apple", "banana", "cherry", "date"], 3)
		.with_prompt("pick")
		.build();

	insta::assert_snapshot!(render(&mut app, 20, 6), @r"
	0| pick
	1|       apple
	2|       banana
	3|       cherry
	4|
	5|
	");
}

#[test]
fn selected_row_uses_the_selected_colours() {
	let mut app = picker(&["apple", "banana"], 2).build();
	press(&mut app, KeyCode::Down, KeyModifiers::NONE);

	let terminal = draw(&mut app, 20, 3);
	let buf = terminal.backend().buffer();
	let selected = Color::Rgb(0x00, 0x55, 0x77);
	assert_eq!(buf[(1, 2)].bg, selected);
	assert_eq!(buf[(19, 2)].bg, selected);
	assert_eq!(buf[(1, 1)].bg, Color::Rgb(0x22, 0x22, 0x22));
}

#[test]
fn flow_mode_lays_matches_after_the_input() {
	let mut app = picker(&["one", "two", "three", "four", "five"], 0).build();

	insta::assert_snapshot!(render(&mut app, 40, 1), @"0|           one  two  three  four      >");
}

#[test]
fn flow_mode_shows_the_previous_marker_after_paging() {
	let mut app = picker(&["one", "two", "three", "four", "five"], 0).build();
	render(&mut app, 40, 1);
	for _ in 0..4 {
		press(&mut app, KeyCode::Down, KeyModifiers::NONE);
	}

	insta::assert_snapshot!(render(&mut app, 40, 1), @"0|        <  five");
}

#[test]
fn cursor_follows_the_query_cursor() {
	let mut app = picker(&["alpha", "beta"], 2).with_prompt("run").build();
	press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
	press(&mut app, KeyCode::Char('l'), KeyModifiers::NONE);
	press(&mut app, KeyCode::Left, KeyModifiers::NONE);

	let mut terminal = draw(&mut app, 30, 3);
	insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
	0| run  al
	1|      alpha
	2|
	");
	assert_eq!(terminal.get_cursor_position().expect("cursor"), Position::new(7, 0));
}

#[test]
fn bottom_placement_anchors_to_the_last_rows() {
	let mut app = picker(&["a", "b"], 2)
		.with_placement(Placement::Bottom)
		.build();

	let mut terminal = draw(&mut app, 20, 5);
	insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
	0|
	1|
	2|
	3| a
	4| b
	");
	assert_eq!(terminal.get_cursor_position().expect("cursor"), Position::new(1, 2));
}

#[test]
fn emitted_items_keep_the_output_colours() {
	let mut app = picker(&["a", "b"], 2).build();
	press(&mut app, KeyCode::Enter, KeyModifiers::CONTROL);
	press(&mut app, KeyCode::Down, KeyModifiers::NONE);

	let terminal = draw(&mut app, 20, 3);
	let buf = terminal.backend().buffer();
	assert_eq!(buf[(0, 1)].bg, Color::Rgb(0x00, 0xff, 0xff));
	assert_eq!(buf[(0, 2)].bg, Color::Rgb(0x00, 0x55, 0x77));
}

#[test]
fn alt_enter_emits_without_closing() {
	let mut app = picker(&["a", "b"], 2).build();
	let outcome = app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
	assert_eq!(outcome, Outcome::Emitted("a".into()));
	assert!(app.session().store().get(0).is_some_and(|item| item.is_output()));
}

#[test]
fn rows_shrink_to_fit_a_short_terminal() {
	let mut app = picker(&["a", "b", "c", "d", "e"], 5).build();
	render(&mut app, 20, 3);
	press(&mut app, KeyCode::Down, KeyModifiers::NONE);
	press(&mut app, KeyCode::Down, KeyModifiers::NONE);
	assert_eq!(app.session().selected_item().map(|item| item.text()), Some("c"));

	let terminal = draw(&mut app, 20, 3);
	insta::assert_snapshot!(buffer_to_string(terminal.backend().buffer()), @r"
	0|
	1| c
	2| d
	");
	assert_eq!(terminal.backend().buffer()[(1, 1)].bg, Color::Rgb(0x00, 0x55, 0x77));
}

#[test]
fn input_takes_the_whole_line_without_matches() {
	let mut app = picker(&["one", "two"], 0).with_initial_query("zzz").build();

	insta::assert_snapshot!(render(&mut app, 30, 1), @"0| zzz");
	assert!(app.session().matches().is_empty());
}
