//! Hide/restore behavior across toggles, including out-of-band interference.

use tunnel_vision::{testing::FakePanel, TunnelVision};

#[test]
fn basic_hide_and_show() {
    tunnel_log::test();

    let mut tunnel = TunnelVision::new();
    let (p1, h1) = FakePanel::new("file-tree", true);
    let (p2, h2) = FakePanel::new("console", true);
    tunnel.register_provider(Box::new(p1));
    tunnel.register_provider(Box::new(p2));

    tunnel.toggle();
    assert!(!h1.is_visible());
    assert!(!h2.is_visible());

    tunnel.toggle();
    assert!(h1.is_visible());
    assert!(h2.is_visible());
}

#[test]
fn even_toggle_count_restores_original_visibility() {
    tunnel_log::test();

    let mut tunnel = TunnelVision::new();
    let (p1, h1) = FakePanel::new("file-tree", true);
    let (p2, h2) = FakePanel::new("console", false);
    let (p3, h3) = FakePanel::new("outline", true);
    tunnel.register_provider(Box::new(p1));
    tunnel.register_provider(Box::new(p2));
    tunnel.register_provider(Box::new(p3));

    for _ in 0..4 {
        tunnel.toggle();
    }

    assert!(h1.is_visible());
    assert!(!h2.is_visible());
    assert!(h3.is_visible());
}

#[test]
fn already_hidden_panel_is_not_recorded_or_restored() {
    tunnel_log::test();

    let mut tunnel = TunnelVision::new();
    let (p1, h1) = FakePanel::new("file-tree", true);
    let (p2, h2) = FakePanel::new("console", true);
    tunnel.register_provider(Box::new(p1));
    tunnel.register_provider(Box::new(p2));

    // User hides the file tree before entering tunnel vision.
    h1.toggle();
    assert!(!h1.is_visible());

    tunnel.toggle();
    assert!(!h1.is_visible());
    assert!(!h2.is_visible());
    assert_eq!(tunnel.pending_restore(), Some(&["console".to_string()][..]));

    tunnel.toggle();
    // Only the console was recorded, so only the console comes back.
    assert!(!h1.is_visible());
    assert!(h2.is_visible());
}

#[test]
fn manual_toggle_between_hide_and_restore_is_preserved() {
    tunnel_log::test();

    let mut tunnel = TunnelVision::new();
    let (p1, h1) = FakePanel::new("file-tree", true);
    let (p2, h2) = FakePanel::new("console", true);
    tunnel.register_provider(Box::new(p1));
    tunnel.register_provider(Box::new(p2));

    h1.toggle();
    tunnel.toggle();
    assert_eq!(tunnel.pending_restore(), Some(&["console".to_string()][..]));

    // User brings the file tree back while focused. The restore only flips
    // the recorded console, leaving the user's change alone.
    h1.toggle();
    assert!(h1.is_visible());

    tunnel.toggle();
    assert!(h1.is_visible());
    assert!(h2.is_visible());
}

#[test]
fn panel_registered_after_hide_is_left_alone() {
    tunnel_log::test();

    let mut tunnel = TunnelVision::new();
    let (p1, h1) = FakePanel::new("file-tree", true);
    tunnel.register_provider(Box::new(p1));

    tunnel.toggle();
    assert!(!h1.is_visible());

    let (late, late_handle) = FakePanel::new("console", true);
    tunnel.register_provider(Box::new(late));
    assert!(late_handle.is_visible());

    tunnel.toggle();
    assert!(h1.is_visible());
    assert!(late_handle.is_visible());
}

#[test]
fn toggle_with_no_registered_panels() {
    tunnel_log::test();

    let mut tunnel = TunnelVision::new();
    tunnel.toggle();
    assert!(tunnel.is_focused());
    assert_eq!(tunnel.pending_restore(), Some(&[][..]));

    tunnel.toggle();
    assert!(!tunnel.is_focused());
    assert_eq!(tunnel.pending_restore(), None);
}
