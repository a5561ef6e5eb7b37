//! Process-scoped settings event channel.
//!
//! In-memory consumers of user settings subscribe at initialization and
//! drop their receiver at teardown; the save pipeline publishes here after
//! a successful submit.

use tokio::sync::broadcast;

const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEvent {
	/// The authenticated user's settings changed; consumers should re-read
	Refreshed { user_id: Box<str> },
	/// A save completed (drives the "settings saved" notification)
	Saved { user_id: Box<str> },
}

#[derive(Clone, Debug)]
pub struct SettingsBus {
	sender: broadcast::Sender<SettingsEvent>,
}

impl SettingsBus {
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_BUFFER_SIZE)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		let (sender, _) = broadcast::channel(capacity);
		Self { sender }
	}

	pub fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
		self.sender.subscribe()
	}

	pub fn publish(&self, event: SettingsEvent) {
		// A send error only means there are no subscribers right now
		if self.sender.send(event).is_err() {
			tracing::debug!("Settings event dropped: no subscribers");
		}
	}
}

impl Default for SettingsBus {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
