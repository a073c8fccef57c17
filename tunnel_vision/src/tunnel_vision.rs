//! The tunnel-vision coordinator.

use crate::{provider::PanelProvider, state::SerializedTunnelVision};
use rustc_hash::FxHashMap;

/// Coordinates hiding and restoring panels as a group.
///
/// Two logical states, made exhaustive by `pending_restore`:
///
/// - **Normal** (`None`): the next [`toggle`](Self::toggle) hides every
///   currently-visible panel and records the hidden set.
/// - **Focused** (`Some`): a restore is owed; the next toggle flips every
///   recorded panel that is still registered and clears the set.
///
/// Restoration is a blind flip through [`PanelProvider::toggle`]. If the user
/// shows or hides a recorded panel between the two toggles, the restore still
/// fires and flips it, so manual interference changes the outcome. That is
/// deliberate hysteresis, not a defect: it lets a half-restored layout be
/// re-entered rather than snapping panels to remembered values.
pub struct TunnelVision {
    /// Registered panels by name, looked up at toggle time. Append-only;
    /// providers may arrive at any point after construction.
    providers: FxHashMap<String, Box<dyn PanelProvider>>,
    /// Names hidden by the last hide-toggle, owed a restoring toggle.
    pending_restore: Option<Vec<String>>,
}

impl Default for TunnelVision {
    fn default() -> Self {
        Self::new()
    }
}

impl TunnelVision {
    /// Create a coordinator in Normal state with no registered providers.
    pub fn new() -> Self {
        Self {
            providers: FxHashMap::default(),
            pending_restore: None,
        }
    }

    /// Create a coordinator from persisted state.
    ///
    /// A non-`None` pending set puts the coordinator in Focused state
    /// immediately, before any providers have registered; the owed restore
    /// fires on the next [`toggle`](Self::toggle) against whichever of the
    /// named providers have registered by then.
    pub fn from_serialized(state: SerializedTunnelVision) -> Self {
        Self {
            providers: FxHashMap::default(),
            pending_restore: state.pending_names,
        }
    }

    /// Register a panel under its own name.
    ///
    /// Never changes the panel's visibility, regardless of the current state:
    /// a panel arriving while Focused is not retroactively hidden.
    pub fn register_provider(&mut self, provider: Box<dyn PanelProvider>) {
        let name = provider.name().to_string();
        tracing::trace!(%name, "registering panel provider");
        self.providers.insert(name, provider);
    }

    /// Hide all visible panels, or restore the previously hidden set.
    ///
    /// In Normal state every visible panel is toggled off and recorded;
    /// already-hidden panels are left alone and not recorded. The recorded
    /// set may be empty. In Focused state every recorded name that still has
    /// a registered provider is toggled; names without one are dropped
    /// silently, then the set is cleared.
    pub fn toggle(&mut self) {
        match self.pending_restore.take() {
            None => {
                let mut hidden = Vec::new();
                for (name, provider) in &mut self.providers {
                    if provider.is_visible() {
                        tracing::trace!(%name, "hiding panel");
                        provider.toggle();
                        hidden.push(name.clone());
                    }
                }
                tracing::debug!(count = hidden.len(), "entered tunnel vision");
                self.pending_restore = Some(hidden);
            },
            Some(names) => {
                for name in &names {
                    match self.providers.get_mut(name) {
                        Some(provider) => {
                            tracing::trace!(%name, "restoring panel");
                            provider.toggle();
                        },
                        None => {
                            tracing::trace!(%name, "pending panel no longer registered");
                        },
                    }
                }
                tracing::debug!(count = names.len(), "left tunnel vision");
            },
        }
    }

    /// Snapshot the pending-restore state for persistence.
    ///
    /// Returns the pending names as recorded, whether or not those providers
    /// are still registered; `None` in Normal state.
    pub fn serialize(&self) -> SerializedTunnelVision {
        SerializedTunnelVision {
            pending_names: self.pending_restore.clone(),
        }
    }

    /// Whether a restore is currently owed.
    pub fn is_focused(&self) -> bool {
        self.pending_restore.is_some()
    }

    /// Names owed a restoring toggle, if any.
    pub fn pending_restore(&self) -> Option<&[String]> {
        self.pending_restore.as_deref()
    }

    pub fn has_provider(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}
