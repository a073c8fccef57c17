//! The panel capability seam between the coordinator and the host.

/// A panel whose visibility can be flipped.
///
/// Implemented by the host for each toggleable panel. The coordinator treats
/// the panel's visibility model as opaque: it only ever observes
/// [`is_visible`](PanelProvider::is_visible) and flips via
/// [`toggle`](PanelProvider::toggle), never forcing a particular value.
pub trait PanelProvider {
    /// Stable identifier, unique across the provider's lifetime.
    fn name(&self) -> &str;

    /// Whether the panel is currently shown.
    fn is_visible(&self) -> bool;

    /// Flip the panel's visibility.
    fn toggle(&mut self);
}
