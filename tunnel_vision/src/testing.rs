//! Testing utilities for tunnel-vision behavior.
//!
//! [`FakePanel`] stands in for a host panel. Its visibility lives in a shared
//! cell so tests can flip and inspect it from outside the coordinator,
//! mimicking a user showing or hiding the panel out-of-band.

use crate::provider::PanelProvider;
use std::{cell::Cell, rc::Rc};

/// In-memory panel provider for tests.
///
/// # Example
///
/// ```rust
/// use tunnel_vision::{testing::FakePanel, TunnelVision};
///
/// let mut tunnel = TunnelVision::new();
/// let (panel, handle) = FakePanel::new("console", true);
/// tunnel.register_provider(Box::new(panel));
///
/// tunnel.toggle();
/// assert!(!handle.is_visible());
/// tunnel.toggle();
/// assert!(handle.is_visible());
/// ```
pub struct FakePanel {
    name: String,
    visible: Rc<Cell<bool>>,
}

impl FakePanel {
    /// Create a panel and a handle to its visibility cell.
    ///
    /// The panel goes to the coordinator; the handle stays with the test for
    /// out-of-band toggles and assertions.
    pub fn new(name: impl Into<String>, visible: bool) -> (Self, VisibilityHandle) {
        let cell = Rc::new(Cell::new(visible));
        let panel = Self {
            name: name.into(),
            visible: Rc::clone(&cell),
        };
        (panel, VisibilityHandle(cell))
    }
}

impl PanelProvider for FakePanel {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn toggle(&mut self) {
        self.visible.set(!self.visible.get());
    }
}

/// External view of a [`FakePanel`]'s visibility.
#[derive(Clone)]
pub struct VisibilityHandle(Rc<Cell<bool>>);

impl VisibilityHandle {
    pub fn is_visible(&self) -> bool {
        self.0.get()
    }

    /// Flip the panel directly, as a user would through the host UI.
    pub fn toggle(&self) {
        self.0.set(!self.0.get());
    }
}
