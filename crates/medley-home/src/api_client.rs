//! Server collaborator seam for the settings component.

use async_trait::async_trait;

use medley_types::error::MdResult;
use medley_types::user::{User, UserConfiguration, UserView};

/// The subset of the Medley API the home-screen settings component uses.
#[async_trait]
pub trait ApiClient: Send + Sync {
	/// Fetches a user record fresh from the server
	async fn read_user(&self, user_id: &str) -> MdResult<User>;

	/// Fetches the user's library views, in their current display order
	async fn read_user_views(&self, user_id: &str) -> MdResult<Vec<UserView>>;

	/// Replaces the user's configuration as a whole
	async fn update_user_configuration(
		&self,
		user_id: &str,
		configuration: &UserConfiguration,
	) -> MdResult<()>;

	/// Id of the currently authenticated user
	fn current_user_id(&self) -> Box<str>;
}

// vim: ts=4
