//! Player capability probing

use inlay_core::traits::PlayerFacade;
use inlay_core::types::{AUDIO_MIME_CANDIDATES, STATIC_SAFE_MIMES};
use std::collections::BTreeSet;
use tracing::debug;

/// Supported-format probe over the player engine
///
/// Some engines only learn their codec support asynchronously, and on
/// hosts without native decoders that detection never reports at all. The
/// baseline pass therefore runs synchronously and always includes the
/// statically safe formats, so registration never waits on the engine.
/// `complete_with` applies the engine's detection results once they
/// arrive; the supported set only grows, and a cancelled probe ignores
/// late results.
#[derive(Debug, Clone)]
pub struct CapabilityProbe {
    supported: BTreeSet<String>,
    engine_confirmed: bool,
    cancelled: bool,
}

impl CapabilityProbe {
    /// Synchronous baseline pass
    ///
    /// Filters the candidate table through the engine and unions in the
    /// statically safe formats.
    pub fn baseline<P: PlayerFacade>(player: &P) -> Self {
        let mut supported: BTreeSet<String> = AUDIO_MIME_CANDIDATES
            .iter()
            .copied()
            .filter(|mime| player.can_play_mime(mime))
            .map(str::to_string)
            .collect();
        for mime in STATIC_SAFE_MIMES {
            supported.insert(mime.to_string());
        }
        debug!(count = supported.len(), "Baseline capability pass done");
        Self {
            supported,
            engine_confirmed: false,
            cancelled: false,
        }
    }

    /// Apply the engine's asynchronous detection results
    ///
    /// Re-probes the candidate table and inserts newly supported types.
    /// Safe to call more than once. Returns `false` without touching the
    /// set when the probe has been cancelled.
    pub fn complete_with<P: PlayerFacade>(&mut self, player: &P) -> bool {
        if self.cancelled {
            debug!("Capability detection cancelled, keeping baseline set");
            return false;
        }
        for mime in AUDIO_MIME_CANDIDATES {
            if player.can_play_mime(mime) {
                self.supported.insert(mime.to_string());
            }
        }
        self.engine_confirmed = true;
        debug!(count = self.supported.len(), "Engine capability pass done");
        true
    }

    /// Ignore any detection results that may still arrive
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// The currently known supported MIME types, in registration order
    pub fn supported(&self) -> &BTreeSet<String> {
        &self.supported
    }

    /// Whether the engine's own detection has been applied
    pub fn engine_confirmed(&self) -> bool {
        self.engine_confirmed
    }
}
