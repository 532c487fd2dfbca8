//! Embedded-player coordination
//!
//! `EmbedCoordinator` owns the collaborators and every piece of mutable
//! playback state. The host event glue calls in (play trigger, playlist
//! ready, next/previous, close, capability detection done) and the
//! coordinator drives the player facade and navigator accordingly. All
//! calls run synchronously on the host's event turn; nothing here blocks
//! or spawns.

use crate::capability::CapabilityProbe;
use crate::context::{resolve_context, PlayTrigger, PlaybackContext};
use crate::error::{PlaybackError, Result};
use crate::locator::{ResourceLocator, ResourceLocatorBuilder};
use crate::registry::PlayActionRegistrar;
use crate::signals::PageSignals;
use inlay_core::traits::{FileActionRegistry, PlayerFacade, PlaylistNavigator};
use inlay_core::types::{FileId, PlayAction, TrackRef};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Lifecycle phase of the active track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackPhase {
    /// No track is loaded
    Idle,
    /// Player told to load; the navigator listing is still outstanding
    Loading,
    /// Navigator reported ready, or the context has no listing at all
    Ready,
}

/// Navigator binding for the active track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavBinding {
    /// Listing fetch outstanding; next/previous stay disabled
    Pending,
    /// Listing fetched; next/previous reflect its length
    Ready,
    /// The context has no folder listing (single-file share)
    Unavailable,
}

/// The active track together with everything scoped to it
///
/// Id, context, and navigator binding live in one value: closing or
/// switching tracks replaces the whole thing, so the pieces cannot drift
/// apart.
#[derive(Debug, Clone)]
struct ActiveTrack {
    id: FileId,
    context: PlaybackContext,
    nav: NavBinding,
}

/// Direction of a playlist jump
#[derive(Debug, Clone, Copy)]
enum Jump {
    Forward,
    Backward,
}

/// What a registration pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationOutcome {
    /// How many MIME types were newly registered
    pub folder_mimes: usize,
    /// The share-preview click should be bound by the host now
    pub share_preview_bound: bool,
}

/// Playback-context coordination for the embedded player
///
/// Decides per play trigger which context applies (private folder,
/// public folder share, single-file share), builds the matching resource
/// locator, keeps the current-track state, and drives playlist
/// navigation. The player facade and navigator are host collaborators
/// handed over at construction.
pub struct EmbedCoordinator<P, N> {
    player: P,
    navigator: N,
    signals: PageSignals,
    locators: ResourceLocatorBuilder,
    probe: CapabilityProbe,
    registrar: PlayActionRegistrar,
    action: PlayAction,
    active: Option<ActiveTrack>,
}

impl<P: PlayerFacade, N: PlaylistNavigator> EmbedCoordinator<P, N> {
    /// Create the coordinator and run the baseline capability pass
    ///
    /// The baseline pass is synchronous, so the statically safe formats
    /// are supported before any engine detection can report.
    pub fn new(player: P, navigator: N, signals: PageSignals) -> Self {
        let probe = CapabilityProbe::baseline(&player);
        let locators = ResourceLocatorBuilder::new(&signals);
        Self {
            player,
            navigator,
            signals,
            locators,
            probe,
            registrar: PlayActionRegistrar::new(),
            action: PlayAction::default(),
            active: None,
        }
    }

    /// Register play actions with the host for the supported MIME types
    ///
    /// Skipped entirely when the page ships its own player. Folder
    /// actions register only when the file-listing app is present; the
    /// share-preview binding is decided only on single-file share pages.
    /// Idempotent across passes.
    pub fn register_actions<R: FileActionRegistry>(
        &mut self,
        registry: &mut R,
    ) -> RegistrationOutcome {
        if self.signals.native_player_present {
            debug!("Page has its own player, skipping registration");
            return RegistrationOutcome::default();
        }

        let mut outcome = RegistrationOutcome::default();
        if self.signals.file_list_present {
            outcome.folder_mimes = self.registrar.register_folder_actions(
                registry,
                self.probe.supported(),
                &self.action,
            );
        }
        if let Some(shared) = &self.signals.shared_file {
            outcome.share_preview_bound = self
                .registrar
                .bind_share_preview(&shared.mime, self.probe.supported());
        }
        outcome
    }

    /// Apply the engine's asynchronous capability detection and re-register
    ///
    /// The second registration pass only touches MIME types the baseline
    /// pass did not cover. A no-op after `cancel_capability_detection`.
    pub fn engine_capabilities_ready<R: FileActionRegistry>(
        &mut self,
        registry: &mut R,
    ) -> RegistrationOutcome {
        if !self.probe.complete_with(&self.player) {
            return RegistrationOutcome::default();
        }
        info!(
            count = self.probe.supported().len(),
            "Engine capability detection applied"
        );
        self.register_actions(registry)
    }

    /// Ignore engine capability results that may still arrive
    pub fn cancel_capability_detection(&mut self) {
        self.probe.cancel();
    }

    /// Handle a play trigger
    ///
    /// Shows the player, then either just toggles playback (same track as
    /// before) or loads the new track: resolve the context, disable
    /// next/previous, build the locator, drive the facade, rebind the
    /// navigator, and toggle. One synchronous step.
    pub fn play(&mut self, trigger: &PlayTrigger) -> Result<()> {
        self.player.show();

        let track = self.trigger_track(trigger)?;
        if self.active.as_ref().is_some_and(|active| active.id == track.id) {
            debug!(id = %track.id, "Track already current, toggling playback");
            self.player.toggle_playback();
            return Ok(());
        }

        let context = resolve_context(&self.signals, trigger)?;
        info!(id = %track.id, context = context_name(&context), "Loading track");

        self.player.set_next_and_prev_enabled(false);
        let locator = self.locators.track_locator(&context, &track)?;
        self.load(&locator, &track);

        let folder_url = self.locators.folder_url(&context)?;
        self.navigator.reset();
        let nav = match folder_url {
            Some(url) => {
                self.navigator
                    .init(&url, self.probe.supported(), &track.id, context.share_token());
                NavBinding::Pending
            }
            None => NavBinding::Unavailable,
        };
        self.active = Some(ActiveTrack {
            id: track.id,
            context,
            nav,
        });

        self.player.toggle_playback();
        Ok(())
    }

    /// Handle the navigator listing becoming ready
    ///
    /// `loaded_for` is the file id the host captured when it started the
    /// fetch. A notification for anything but the current track is stale
    /// and discarded, so switching tracks mid-fetch can never corrupt the
    /// now-current state.
    pub fn playlist_ready(&mut self, loaded_for: &FileId) {
        let Some(active) = self.active.as_mut() else {
            debug!(id = %loaded_for, "Playlist ready while idle, discarding");
            return;
        };
        if active.id != *loaded_for {
            debug!(stale = %loaded_for, current = %active.id, "Stale playlist ready, discarding");
            return;
        }
        if active.nav == NavBinding::Unavailable {
            return;
        }
        active.nav = NavBinding::Ready;

        let enabled = self.navigator.length() > 1;
        self.player.set_next_and_prev_enabled(enabled);
        debug!(enabled, "Playlist ready");
    }

    /// Jump to the following playable file
    ///
    /// Closes the player when the navigator is exhausted.
    ///
    /// # Errors
    /// Returns `NoActiveTrack` while idle
    pub fn next(&mut self) -> Result<()> {
        self.jump(Jump::Forward)
    }

    /// Jump to the preceding playable file
    ///
    /// Closes the player when the navigator is exhausted.
    ///
    /// # Errors
    /// Returns `NoActiveTrack` while idle
    pub fn previous(&mut self) -> Result<()> {
        self.jump(Jump::Backward)
    }

    /// Close the player and clear all track-scoped state atomically
    pub fn close(&mut self) {
        debug!("Closing embedded player");
        self.player.close();
        self.navigator.reset();
        self.active = None;
    }

    /// Lifecycle phase of the active track
    pub fn phase(&self) -> TrackPhase {
        match &self.active {
            None => TrackPhase::Idle,
            Some(active) => match active.nav {
                NavBinding::Pending => TrackPhase::Loading,
                NavBinding::Ready | NavBinding::Unavailable => TrackPhase::Ready,
            },
        }
    }

    /// Id of the track the player currently has loaded, if any
    pub fn current_track(&self) -> Option<&FileId> {
        self.active.as_ref().map(|active| &active.id)
    }

    /// Context the current track was resolved in, if any
    pub fn context(&self) -> Option<&PlaybackContext> {
        self.active.as_ref().map(|active| &active.context)
    }

    /// Whether a navigator binding exists for the current track
    ///
    /// False while idle and in the single-file share context, which never
    /// creates one.
    pub fn has_playlist(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.nav != NavBinding::Unavailable)
    }

    /// The currently known supported MIME types
    pub fn supported_mimes(&self) -> &BTreeSet<String> {
        self.probe.supported()
    }

    /// The page signals this coordinator was built from
    pub fn signals(&self) -> &PageSignals {
        &self.signals
    }

    /// The track a trigger refers to
    ///
    /// File rows carry their own metadata; the single-file share page
    /// carries it in the page signals, with a synthesized id.
    fn trigger_track(&self, trigger: &PlayTrigger) -> Result<TrackRef> {
        match trigger {
            PlayTrigger::FileRow { track, .. } => Ok(track.clone()),
            PlayTrigger::SharePreview => {
                let shared = self
                    .signals
                    .shared_file
                    .as_ref()
                    .ok_or(PlaybackError::MissingSharedFile)?;
                Ok(TrackRef::new(
                    FileId::single_share(),
                    shared.name.clone(),
                    shared.mime.clone(),
                ))
            }
        }
    }

    /// Drive the facade entry point the locator's auth selects
    fn load(&mut self, locator: &ResourceLocator, track: &TrackRef) {
        match &locator.auth {
            Some(token) => {
                self.player
                    .init_share(&locator.url, &track.mime, &track.id, &track.name, token);
            }
            None => {
                self.player
                    .init(&locator.url, &track.mime, &track.id, &track.name);
            }
        }
    }

    /// Step the navigator and load whatever it yields
    fn jump(&mut self, direction: Jump) -> Result<()> {
        let context = match &self.active {
            Some(active) => active.context.clone(),
            None => return Err(PlaybackError::NoActiveTrack),
        };

        let step = match direction {
            Jump::Forward => self.navigator.next(),
            Jump::Backward => self.navigator.previous(),
        };
        let Some(track) = step else {
            info!("Playlist exhausted, closing player");
            self.close();
            return Ok(());
        };

        debug!(id = %track.id, "Jumping to playlist neighbor");
        let locator = self.locators.track_locator(&context, &track)?;
        self.load(&locator, &track);
        if let Some(active) = self.active.as_mut() {
            active.id = track.id;
        }
        self.player.toggle_playback();
        Ok(())
    }
}

/// Short context name for log fields
fn context_name(context: &PlaybackContext) -> &'static str {
    match context {
        PlaybackContext::Private { .. } => "private",
        PlaybackContext::PublicFolder { .. } => "public-folder",
        PlaybackContext::PublicSingleFile { .. } => "public-single-file",
    }
}
