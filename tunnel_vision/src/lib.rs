//! Panel visibility coordination for distraction-free editing.
//!
//! The host editor registers panels (tool windows, sidebars, consoles) as
//! [`PanelProvider`]s. A single [`TunnelVision::toggle`] command hides every
//! panel that is currently visible and remembers which ones it hid; the next
//! toggle restores exactly that set. The pending set survives restarts via
//! [`SerializedTunnelVision`].
//!
//! Providers may register at any time after construction, including after a
//! pending set was restored from disk. Registration never changes a panel's
//! visibility.

pub mod error;
pub mod provider;
pub mod state;
pub mod testing;
mod tunnel_vision;

pub use error::{Error, Result};
pub use provider::PanelProvider;
pub use state::SerializedTunnelVision;
pub use tunnel_vision::TunnelVision;
