//! User data model shared by the server and the client-side settings editors.
//!
//! Wire field names are PascalCase to match the Medley HTTP API.

use serde::{Deserialize, Serialize};

/// Number of configurable home-screen section slots.
pub const HOME_SECTION_COUNT: usize = 7;

/// A content-section type assignable to a home-screen slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeSection {
	#[serde(rename = "smalllibrarytiles")]
	SmallLibraryTiles,
	#[serde(rename = "librarybuttons")]
	LibraryButtons,
	#[serde(rename = "activerecordings")]
	ActiveRecordings,
	#[serde(rename = "resume")]
	Resume,
	#[serde(rename = "resumeaudio")]
	ResumeAudio,
	#[serde(rename = "latestmedia")]
	LatestMedia,
	#[serde(rename = "nextup")]
	NextUp,
	#[serde(rename = "livetv")]
	LiveTv,
}

/// Per-user configuration record.
///
/// Mutated only as a whole: the settings pipeline re-fetches the current
/// user, merges the editor state in, and submits the full record back.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserConfiguration {
	#[serde(default)]
	pub hide_played_in_latest: bool,
	/// Folder ids excluded from the "latest items" feed (set semantics)
	#[serde(default)]
	pub latest_items_excludes: Vec<Box<str>>,
	/// Total order over exactly the set of views the user currently has
	#[serde(default)]
	pub ordered_views: Vec<Box<str>>,
	/// Seven fixed home-screen slots; `None` means explicitly unset
	#[serde(default)]
	pub home_sections: [Option<HomeSection>; HOME_SECTION_COUNT],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
	pub id: Box<str>,
	pub name: Box<str>,
	#[serde(default)]
	pub configuration: UserConfiguration,
}

/// A library view as returned by the user-views query.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserView {
	pub id: Box<str>,
	pub name: Box<str>,
	#[serde(default)]
	pub collection_type: Option<Box<str>>,
	#[serde(rename = "Type")]
	pub typ: Box<str>,
}

// vim: ts=4
