//! Exclusion-set editor for the "latest items" feed.
//!
//! One toggle per eligible folder. Some library kinds never appear in the
//! feed and are filtered out of the editable universe entirely; they are
//! neither offered as excludable nor present in the submitted set.

use medley_types::user::UserView;

/// Library kinds that never feed the latest-items row
const EXCLUDED_COLLECTION_TYPES: [&str; 4] = ["playlists", "livetv", "boxsets", "channels"];
const EXCLUDED_ITEM_TYPES: [&str; 1] = ["Channel"];

#[derive(Clone, Debug)]
pub struct LatestItemsEntry {
	pub folder_id: Box<str>,
	pub name: Box<str>,
	pub included: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LatestItemsToggles {
	entries: Vec<LatestItemsEntry>,
}

fn in_universe(view: &UserView) -> bool {
	if let Some(collection_type) = &view.collection_type {
		if EXCLUDED_COLLECTION_TYPES.contains(&&**collection_type) {
			return false;
		}
	}

	!EXCLUDED_ITEM_TYPES.contains(&&*view.typ)
}

impl LatestItemsToggles {
	/// Builds the toggle universe; `excludes` is the user's current
	/// exclusion set, so a toggle starts unchecked iff its folder is in it.
	pub fn new(views: &[UserView], excludes: &[Box<str>]) -> Self {
		Self {
			entries: views
				.iter()
				.filter(|view| in_universe(view))
				.map(|view| LatestItemsEntry {
					folder_id: view.id.clone(),
					name: view.name.clone(),
					included: !excludes.contains(&view.id),
				})
				.collect(),
		}
	}

	/// Sets one toggle; returns false for folders outside the universe.
	pub fn set_included(&mut self, folder_id: &str, included: bool) -> bool {
		match self.entries.iter_mut().find(|entry| &*entry.folder_id == folder_id) {
			Some(entry) => {
				entry.included = included;
				true
			}
			None => false,
		}
	}

	pub fn entries(&self) -> &[LatestItemsEntry] {
		&self.entries
	}

	/// The exclusion set at submit time: every folder currently unchecked.
	pub fn excludes(&self) -> Vec<Box<str>> {
		self.entries
			.iter()
			.filter(|entry| !entry.included)
			.map(|entry| entry.folder_id.clone())
			.collect()
	}
}

// vim: ts=4
