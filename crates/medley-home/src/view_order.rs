//! Ordered-list editor for library views.
//!
//! Mutation happens only through single-step adjacent swaps, so any
//! sequence of moves is a permutation of the initial set of ids.

use medley_types::user::UserView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewItem {
	pub id: Box<str>,
	pub name: Box<str>,
}

#[derive(Clone, Debug, Default)]
pub struct ViewOrderList {
	items: Vec<ViewItem>,
}

impl ViewOrderList {
	/// Seeds the list with the user's views in their current order.
	pub fn new(views: &[UserView]) -> Self {
		Self {
			items: views
				.iter()
				.map(|view| ViewItem { id: view.id.clone(), name: view.name.clone() })
				.collect(),
		}
	}

	/// Swaps the item with its immediate predecessor.
	/// No-op at the head and for unknown ids; returns whether a swap happened.
	pub fn move_up(&mut self, id: &str) -> bool {
		match self.items.iter().position(|item| &*item.id == id) {
			Some(pos) if pos > 0 => {
				self.items.swap(pos - 1, pos);
				true
			}
			_ => false,
		}
	}

	/// Swaps the item with its immediate successor.
	/// No-op at the tail and for unknown ids; returns whether a swap happened.
	pub fn move_down(&mut self, id: &str) -> bool {
		match self.items.iter().position(|item| &*item.id == id) {
			Some(pos) if pos + 1 < self.items.len() => {
				self.items.swap(pos, pos + 1);
				true
			}
			_ => false,
		}
	}

	pub fn items(&self) -> &[ViewItem] {
		&self.items
	}

	/// Projection of the current order, taken at submit time.
	pub fn ordered_ids(&self) -> Vec<Box<str>> {
		self.items.iter().map(|item| item.id.clone()).collect()
	}
}

// vim: ts=4
