use std::time::{Duration, Instant};

use super::*;
use crate::config::BannerConfig;
use crate::push::NotificationEvent;

fn event(id: &str, message: &str) -> NotificationEvent {
    NotificationEvent {
        id: id.to_string(),
        message: message.to_string(),
    }
}

// ==================== Unit Tests ====================

#[test]
fn test_starts_hidden() {
    let banner = BannerState::new();
    assert!(banner.current().is_none());
    assert!(banner.last_shown_id().is_none());
}

#[test]
fn test_novel_event_is_displayed() {
    let mut banner = BannerState::new();
    banner.on_notification(&event("a", "M1"), Instant::now());

    assert_eq!(banner.current_message(), Some("M1"));
    assert_eq!(banner.last_shown_id(), Some("a"));
}

#[test]
fn test_duplicate_delivery_is_dropped() {
    let mut banner = BannerState::new();
    let now = Instant::now();

    banner.on_notification(&event("a", "M1"), now);
    banner.on_notification(&event("a", "M2"), now + Duration::from_millis(100));

    // The second delivery is a no-op: displayed text changed at most once
    assert_eq!(banner.current_message(), Some("M1"));
    assert_eq!(banner.last_shown_id(), Some("a"));
}

#[test]
fn test_duplicate_does_not_rearm_window() {
    let mut banner = BannerState::new();
    let t0 = Instant::now();

    banner.on_notification(&event("a", "M1"), t0);
    banner.on_notification(&event("a", "M1"), t0 + Duration::from_millis(4000));

    // Window still runs from the first display
    assert!(banner.clear_expired(t0 + Duration::from_millis(4500)));
}

#[test]
fn test_novel_event_supersedes_current() {
    let mut banner = BannerState::new();
    let now = Instant::now();

    banner.on_notification(&event("a", "M1"), now);
    banner.on_notification(&event("b", "M2"), now + Duration::from_millis(100));

    assert_eq!(banner.current_message(), Some("M2"));
    assert_eq!(banner.last_shown_id(), Some("b"));
}

#[test]
fn test_superseding_event_rearms_full_window() {
    let mut banner = BannerState::new();
    let t0 = Instant::now();

    banner.on_notification(&event("a", "M1"), t0);
    banner.on_notification(&event("b", "M2"), t0 + Duration::from_millis(4000));

    // The first event's deadline (t0 + 4500) must not hide the second toast
    assert!(!banner.clear_expired(t0 + Duration::from_millis(4500)));
    assert_eq!(banner.current_message(), Some("M2"));

    // The second event's own full window applies
    assert!(!banner.clear_expired(t0 + Duration::from_millis(8499)));
    assert!(banner.clear_expired(t0 + Duration::from_millis(8500)));
}

#[test]
fn test_dismissal_at_exactly_4500_ms() {
    let mut banner = BannerState::new();
    let t0 = Instant::now();
    banner.on_notification(&event("a", "M1"), t0);

    assert!(!banner.clear_expired(t0 + Duration::from_millis(4499)));
    assert!(banner.has_active());

    assert!(banner.clear_expired(t0 + Duration::from_millis(4500)));
    assert!(!banner.has_active());
}

#[test]
fn test_dismissal_keeps_last_shown_id() {
    let mut banner = BannerState::new();
    let t0 = Instant::now();
    banner.on_notification(&event("a", "M1"), t0);
    banner.clear_expired(t0 + Duration::from_millis(4500));

    // Hidden again, but the id is still remembered for de-duplication
    assert!(banner.current().is_none());
    assert_eq!(banner.last_shown_id(), Some("a"));

    banner.on_notification(&event("a", "M1 again"), t0 + Duration::from_secs(10));
    assert!(banner.current().is_none());
}

#[test]
fn test_clear_expired_on_hidden_banner_is_noop() {
    let mut banner = BannerState::new();
    assert!(!banner.clear_expired(Instant::now()));
}

#[test]
fn test_detached_banner_ignores_events_and_keeps_state() {
    let config = BannerConfig {
        enabled: false,
        dedup: true,
        duration_ms: 4500,
    };
    let mut banner = BannerState::from_config(&config);

    banner.on_notification(&event("a", "M1"), Instant::now());

    // No display happened, so nothing advanced
    assert!(banner.current().is_none());
    assert!(banner.last_shown_id().is_none());
}

#[test]
fn test_dedup_disabled_redisplays_same_id() {
    let config = BannerConfig {
        enabled: true,
        dedup: false,
        duration_ms: 4500,
    };
    let mut banner = BannerState::from_config(&config);
    let t0 = Instant::now();

    banner.on_notification(&event("a", "M1"), t0);
    banner.on_notification(&event("a", "M2"), t0 + Duration::from_millis(100));

    // Without de-duplication the second delivery re-displays and re-arms
    assert_eq!(banner.current_message(), Some("M2"));
    assert!(!banner.clear_expired(t0 + Duration::from_millis(4500)));
    assert!(banner.clear_expired(t0 + Duration::from_millis(4600)));
}

#[test]
fn test_configured_duration_is_used() {
    let config = BannerConfig {
        enabled: true,
        dedup: true,
        duration_ms: 1000,
    };
    let mut banner = BannerState::from_config(&config);
    let t0 = Instant::now();

    banner.on_notification(&event("a", "M1"), t0);
    assert!(!banner.clear_expired(t0 + Duration::from_millis(999)));
    assert!(banner.clear_expired(t0 + Duration::from_millis(1000)));
}

// ==================== Property-Based Tests ====================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any delivery sequence, consecutive duplicates are suppressed and
    // the displayed message is the one from the latest novel event.
    #[test]
    fn prop_latest_novel_event_wins(
        deliveries in prop::collection::vec(("[a-d]", "[a-zA-Z0-9 ]{1,20}"), 1..20)
    ) {
        let mut banner = BannerState::new();
        let t0 = Instant::now();

        let mut expected: Option<(String, String)> = None;
        for (i, (id, message)) in deliveries.iter().enumerate() {
            banner.on_notification(
                &NotificationEvent { id: id.clone(), message: message.clone() },
                t0 + Duration::from_millis(i as u64),
            );
            if expected.as_ref().map(|(last_id, _)| last_id) != Some(id) {
                expected = Some((id.clone(), message.clone()));
            }
        }

        let (expected_id, expected_message) = expected.unwrap();
        prop_assert_eq!(banner.last_shown_id(), Some(expected_id.as_str()));
        prop_assert_eq!(banner.current_message(), Some(expected_message.as_str()));
    }

    // A lone displayed event is visible strictly inside its window and
    // cleared at or after the deadline, for any configured duration.
    #[test]
    fn prop_window_boundary_is_exact(duration_ms in 1u64..60_000) {
        let config = BannerConfig { enabled: true, dedup: true, duration_ms };
        let mut banner = BannerState::from_config(&config);
        let t0 = Instant::now();

        banner.on_notification(
            &NotificationEvent { id: "a".to_string(), message: "M".to_string() },
            t0,
        );

        prop_assert!(!banner.clear_expired(t0 + Duration::from_millis(duration_ms - 1)));
        prop_assert!(banner.clear_expired(t0 + Duration::from_millis(duration_ms)));
    }
}
