//! Inlay - Embedded Playback Coordination
//!
//! Coordinates the embedded media player of a file-browsing web UI.
//!
//! This crate provides:
//! - Context resolution (private folder, public folder share, single-file
//!   share) per play trigger
//! - Resource locators: the URL plus authorization the player loads in
//!   each context
//! - Current-track state and the Idle/Loading/Ready lifecycle
//! - Playlist navigation glue (next/previous, exhaustion closes the
//!   player, stale readiness notifications discarded)
//! - Capability probing with a synchronous baseline and cancellable
//!   engine completion
//! - Idempotent play-action registration with the host file listing
//!
//! # Architecture
//!
//! `inlay-playback` is host-agnostic: the audio engine, the folder
//! listing, and the action table stay behind the `inlay-core` traits, and
//! everything runs synchronously on the host's event turn. Asynchronous
//! completions in the environment (the engine's capability detection, the
//! navigator's listing fetch) surface as host calls back into the
//! coordinator.
//!
//! # Example: Context resolution and locators
//!
//! ```rust
//! use inlay_core::types::{FileId, FolderPath, RequestToken, TrackRef};
//! use inlay_playback::{resolve_context, PageSignals, PlayTrigger, ResourceLocatorBuilder};
//!
//! let signals = PageSignals::new("https://cloud.example.com", RequestToken::new("T1")).unwrap();
//!
//! let track = TrackRef::new(FileId::new("42"), "song.mp3", "audio/mpeg");
//! let trigger = PlayTrigger::FileRow {
//!     track: track.clone(),
//!     folder: FolderPath::new("/Music"),
//! };
//!
//! // No share token on the page, so the trigger resolves to the private context
//! let context = resolve_context(&signals, &trigger).unwrap();
//!
//! let locators = ResourceLocatorBuilder::new(&signals);
//! let locator = locators.track_locator(&context, &track).unwrap();
//! assert_eq!(
//!     locator.url.as_str(),
//!     "https://cloud.example.com/remote.php/webdav/Music/song.mp3?requesttoken=T1"
//! );
//! assert!(locator.auth.is_none());
//! ```
//!
//! # Example: Driving the coordinator
//!
//! ```rust
//! use inlay_core::traits::{PlayerFacade, PlaylistNavigator};
//! use inlay_core::types::{FileId, FolderPath, RequestToken, ShareToken, TrackRef};
//! use inlay_playback::{EmbedCoordinator, PageSignals, PlayTrigger, TrackPhase};
//! use std::collections::BTreeSet;
//! use url::Url;
//!
//! // Host-side collaborators; real ones wrap the player widget and the
//! // folder listing.
//! struct Player;
//! impl PlayerFacade for Player {
//!     fn init(&mut self, _url: &Url, _mime: &str, _id: &FileId, _name: &str) {}
//!     fn init_share(
//!         &mut self,
//!         _url: &Url,
//!         _mime: &str,
//!         _id: &FileId,
//!         _name: &str,
//!         _share_token: &ShareToken,
//!     ) {
//!     }
//!     fn toggle_playback(&mut self) {}
//!     fn close(&mut self) {}
//!     fn show(&mut self) {}
//!     fn set_next_and_prev_enabled(&mut self, _enabled: bool) {}
//!     fn can_play_mime(&self, mime: &str) -> bool {
//!         mime == "audio/ogg"
//!     }
//! }
//!
//! struct Navigator;
//! impl PlaylistNavigator for Navigator {
//!     fn init(
//!         &mut self,
//!         _folder_url: &Url,
//!         _supported_mimes: &BTreeSet<String>,
//!         _current: &FileId,
//!         _share_token: Option<&ShareToken>,
//!     ) {
//!     }
//!     fn next(&mut self) -> Option<TrackRef> {
//!         None
//!     }
//!     fn previous(&mut self) -> Option<TrackRef> {
//!         None
//!     }
//!     fn reset(&mut self) {}
//!     fn length(&self) -> usize {
//!         0
//!     }
//! }
//!
//! let signals = PageSignals::new("https://cloud.example.com", RequestToken::new("T1")).unwrap();
//! let mut coordinator = EmbedCoordinator::new(Player, Navigator, signals);
//!
//! let trigger = PlayTrigger::FileRow {
//!     track: TrackRef::new(FileId::new("42"), "song.mp3", "audio/mpeg"),
//!     folder: FolderPath::new("/Music"),
//! };
//! coordinator.play(&trigger).unwrap();
//! assert_eq!(coordinator.phase(), TrackPhase::Loading);
//!
//! // The host reports the listing fetch done for the id it captured
//! coordinator.playlist_ready(&FileId::new("42"));
//! assert_eq!(coordinator.phase(), TrackPhase::Ready);
//! ```

mod capability;
mod context;
mod coordinator;
mod error;
mod locator;
mod registry;
mod signals;

// Public exports
pub use capability::CapabilityProbe;
pub use context::{resolve_context, PlayTrigger, PlaybackContext};
pub use coordinator::{EmbedCoordinator, RegistrationOutcome, TrackPhase};
pub use error::{PlaybackError, Result};
pub use locator::{ResourceLocator, ResourceLocatorBuilder};
pub use registry::PlayActionRegistrar;
pub use signals::{PageSignals, SharedFilePage};
