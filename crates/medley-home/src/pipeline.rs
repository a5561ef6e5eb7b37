//! Merge & submit pipeline for the home-screen settings form.
//!
//! `Idle → Loading → Merging → Submitted`, with `Failed` reachable from
//! `Loading` and `Merging`. The submit path always re-fetches the user
//! record before merging, so concurrent out-of-band edits to unrelated
//! fields are never clobbered by a stale local copy. No retries and no
//! partial commits: either the whole merged record is submitted or nothing.

use std::sync::Arc;

use medley_types::prelude::*;

use crate::api_client::ApiClient;
use crate::latest_items::LatestItemsToggles;
use crate::refresh::{SettingsBus, SettingsEvent};
use crate::sections::SectionSelects;
use crate::view_order::ViewOrderList;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
	Idle,
	Loading,
	Merging,
	Submitted,
	Failed,
}

/// The editable state of the form, read at submit time.
#[derive(Clone, Debug)]
pub struct HomeScreenForm {
	pub hide_played_in_latest: bool,
	pub view_order: ViewOrderList,
	pub latest_items: LatestItemsToggles,
	pub sections: SectionSelects,
}

pub struct HomeScreenSettings<C: ApiClient> {
	client: Arc<C>,
	user_id: Box<str>,
	bus: SettingsBus,
	state: PipelineState,
}

impl<C: ApiClient> HomeScreenSettings<C> {
	pub fn new(client: Arc<C>, user_id: &str, bus: SettingsBus) -> Self {
		Self { client, user_id: user_id.into(), bus, state: PipelineState::Idle }
	}

	pub fn state(&self) -> PipelineState {
		self.state
	}

	/// Fetches the user and their views fresh and builds the form.
	pub async fn load(&mut self) -> MdResult<HomeScreenForm> {
		self.state = PipelineState::Loading;

		let user = match self.client.read_user(&self.user_id).await {
			Ok(user) => user,
			Err(err) => {
				self.state = PipelineState::Failed;
				return Err(err);
			}
		};
		let views = match self.client.read_user_views(&self.user_id).await {
			Ok(views) => views,
			Err(err) => {
				self.state = PipelineState::Failed;
				return Err(err);
			}
		};

		self.state = PipelineState::Idle;

		Ok(HomeScreenForm {
			hide_played_in_latest: user.configuration.hide_played_in_latest,
			view_order: ViewOrderList::new(&views),
			latest_items: LatestItemsToggles::new(&views, &user.configuration.latest_items_excludes),
			sections: SectionSelects::from_configuration(&user.configuration),
		})
	}

	/// Merges the form into a freshly fetched user record and submits it
	/// as one update.
	pub async fn submit(&mut self, form: &HomeScreenForm) -> MdResult<()> {
		if matches!(self.state, PipelineState::Loading | PipelineState::Merging) {
			return Err(Error::Submit("a save is already in flight".to_string()));
		}

		self.state = PipelineState::Loading;
		let mut user = match self.client.read_user(&self.user_id).await {
			Ok(user) => user,
			Err(err) => {
				warn!("Fetching user before save failed: {}", err);
				self.state = PipelineState::Failed;
				return Err(err);
			}
		};

		self.state = PipelineState::Merging;
		user.configuration.hide_played_in_latest = form.hide_played_in_latest;
		user.configuration.latest_items_excludes = form.latest_items.excludes();
		user.configuration.ordered_views = form.view_order.ordered_ids();
		user.configuration.home_sections = form.sections.selections();

		if let Err(err) =
			self.client.update_user_configuration(&self.user_id, &user.configuration).await
		{
			warn!("Submitting user configuration failed: {}", err);
			self.state = PipelineState::Failed;
			return Err(err);
		}

		if self.user_id == self.client.current_user_id() {
			self.bus.publish(SettingsEvent::Refreshed { user_id: self.user_id.clone() });
		}
		self.bus.publish(SettingsEvent::Saved { user_id: self.user_id.clone() });

		info!("User configuration saved for {}", self.user_id);
		self.state = PipelineState::Submitted;
		Ok(())
	}
}

// vim: ts=4
