//! Editor state tests: view ordering and latest-items exclusions

use medley_home::latest_items::LatestItemsToggles;
use medley_home::sections::{SectionSelects, default_section};
use medley_home::view_order::ViewOrderList;
use medley_types::user::{HomeSection, UserConfiguration, UserView};

fn view(id: &str, name: &str) -> UserView {
	UserView { id: id.into(), name: name.into(), collection_type: None, typ: "CollectionFolder".into() }
}

fn view_of_kind(id: &str, collection_type: &str) -> UserView {
	UserView {
		id: id.into(),
		name: id.into(),
		collection_type: Some(collection_type.into()),
		typ: "CollectionFolder".into(),
	}
}

fn ids(list: &ViewOrderList) -> Vec<String> {
	list.ordered_ids().iter().map(|id| id.to_string()).collect()
}

#[test]
fn test_move_up_swaps_with_predecessor() {
	let mut list = ViewOrderList::new(&[view("a", "A"), view("b", "B"), view("c", "C")]);

	assert!(list.move_up("b"));
	assert_eq!(ids(&list), ["b", "a", "c"]);
}

#[test]
fn test_move_up_at_head_is_noop() {
	let mut list = ViewOrderList::new(&[view("a", "A"), view("b", "B")]);

	assert!(!list.move_up("a"));
	assert_eq!(ids(&list), ["a", "b"]);
}

#[test]
fn test_move_down_at_tail_is_noop() {
	let mut list = ViewOrderList::new(&[view("a", "A"), view("b", "B")]);

	assert!(!list.move_down("b"));
	assert_eq!(ids(&list), ["a", "b"]);
}

#[test]
fn test_move_unknown_id_is_noop() {
	let mut list = ViewOrderList::new(&[view("a", "A"), view("b", "B")]);

	assert!(!list.move_up("nope"));
	assert!(!list.move_down("nope"));
	assert_eq!(ids(&list), ["a", "b"]);
}

#[test]
fn test_moving_last_view_up_twice() {
	// [A, B, C], C up twice -> [C, A, B]
	let mut list = ViewOrderList::new(&[view("a", "A"), view("b", "B"), view("c", "C")]);

	assert!(list.move_up("c"));
	assert!(list.move_up("c"));
	assert_eq!(ids(&list), ["c", "a", "b"]);
}

#[test]
fn test_moves_only_permute() {
	let mut list = ViewOrderList::new(&[view("a", "A"), view("b", "B"), view("c", "C"), view("d", "D")]);

	// An arbitrary walk, including no-op moves at the edges
	list.move_down("a");
	list.move_down("a");
	list.move_up("d");
	list.move_down("d");
	list.move_up("b");
	list.move_up("b");
	list.move_down("c");
	list.move_down("c");

	let mut sorted = ids(&list);
	sorted.sort();
	assert_eq!(sorted, ["a", "b", "c", "d"]);
	assert_eq!(list.ordered_ids().len(), 4);
}

#[test]
fn test_latest_items_initial_state_from_excludes() {
	let views = [view("a", "Movies"), view("b", "Shows"), view("c", "Music")];
	let excludes: Vec<Box<str>> = vec!["a".into(), "b".into()];
	let toggles = LatestItemsToggles::new(&views, &excludes);

	let included: Vec<bool> = toggles.entries().iter().map(|e| e.included).collect();
	assert_eq!(included, [false, false, true]);
}

#[test]
fn test_latest_items_toggle_produces_submitted_set() {
	// Universe {a, b, c}, initial excludes {a, b}; re-including a leaves {b}
	let views = [view("a", "Movies"), view("b", "Shows"), view("c", "Music")];
	let excludes: Vec<Box<str>> = vec!["a".into(), "b".into()];
	let mut toggles = LatestItemsToggles::new(&views, &excludes);

	assert!(toggles.set_included("a", true));

	let submitted: Vec<String> = toggles.excludes().iter().map(|id| id.to_string()).collect();
	assert_eq!(submitted, ["b"]);
}

#[test]
fn test_latest_items_universe_filters_library_kinds() {
	let views = [
		view("movies", "Movies"),
		view_of_kind("playlists", "playlists"),
		view_of_kind("livetv", "livetv"),
		view_of_kind("boxsets", "boxsets"),
		view_of_kind("channels", "channels"),
		UserView {
			id: "chan".into(),
			name: "Some Channel".into(),
			collection_type: None,
			typ: "Channel".into(),
		},
	];
	let toggles = LatestItemsToggles::new(&views, &[]);

	assert_eq!(toggles.entries().len(), 1);
	assert_eq!(&*toggles.entries()[0].folder_id, "movies");

	// Folders outside the universe cannot be toggled and never submit
	let mut toggles = toggles;
	assert!(!toggles.set_included("chan", false));
	assert!(toggles.excludes().is_empty());
}

#[test]
fn test_section_defaults_per_slot() {
	assert_eq!(default_section(0), Some(HomeSection::SmallLibraryTiles));
	assert_eq!(default_section(5), Some(HomeSection::LatestMedia));
	assert_eq!(default_section(6), None);
}

#[test]
fn test_empty_selection_submits_as_unset() {
	let mut sections = SectionSelects::default();

	assert!(sections.select(1, Some(HomeSection::NextUp)));
	assert!(sections.select(1, None));

	// Cleared slot stays unset, it does not fall back to the default
	assert_eq!(sections.selections()[1], None);
	assert_eq!(sections.effective(1), Some(HomeSection::Resume));
}

#[test]
fn test_stored_default_value_is_not_collapsed_to_unset() {
	// Slot 1 default is Resume; an explicit stored Resume stays visible
	let configuration = UserConfiguration {
		home_sections: [None, Some(HomeSection::Resume), None, None, None, None, None],
		..Default::default()
	};
	let sections = SectionSelects::from_configuration(&configuration);

	assert_eq!(sections.selection(1), Some(HomeSection::Resume));
	assert_eq!(sections.selection(0), None);
}

#[test]
fn test_out_of_range_slot_is_rejected() {
	let mut sections = SectionSelects::default();
	assert!(!sections.select(7, Some(HomeSection::Resume)));
}

// vim: ts=4
