// Manager Tests - Testing ChatManager operations and invariants

use crate::chat::{ChatManager, Contact, Roster, Sender, Settings, WindowState, MAX_OPEN_WINDOWS};
use std::collections::HashSet;

fn demo_manager() -> ChatManager {
    ChatManager::new(Roster::demo())
}

fn contact(manager: &ChatManager, id: &str) -> Contact {
    manager.roster().get(id).cloned().expect("Contact in demo roster")
}

fn open(manager: &mut ChatManager, id: &str) {
    let c = contact(manager, id);
    manager.open_chat(&c);
}

fn assert_invariants(manager: &ChatManager) {
    let ids = manager.open_contact_ids();
    assert!(ids.len() <= manager.settings().max_open_windows);
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate window in {:?}", ids);
}

#[test]
fn test_new_manager_is_empty() {
    let manager = demo_manager();

    assert!(manager.open_windows().is_empty());
    assert!(!manager.is_contact_panel_open());
    assert_eq!(manager.filter_text(), "");
    assert_eq!(manager.settings().max_open_windows, MAX_OPEN_WINDOWS);
}

#[test]
fn test_open_new_chat_adds_window_at_front() {
    let mut manager = demo_manager();

    open(&mut manager, "user1");
    open(&mut manager, "user2");

    assert_eq!(manager.open_contact_ids(), vec!["user2", "user1"]);

    let window = &manager.open_windows()[0];
    assert_eq!(window.messages.len(), 1);
    assert_eq!(window.messages[0].sender, Sender::Them);
    assert_eq!(window.messages[0].text, "Started chat with Bob The Builder");
    assert_eq!(window.state(), WindowState::Expanded);
}

#[test]
fn test_open_seed_timestamp_is_hours_minutes() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");

    let stamp = &manager.open_windows()[0].messages[0].timestamp;
    assert_eq!(stamp.len(), 5);
    assert_eq!(stamp.as_bytes()[2], b':');
    assert!(stamp.chars().filter(|c| *c != ':').all(|c| c.is_ascii_digit()));
}

#[test]
fn test_reopen_moves_to_front_without_duplicating() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    open(&mut manager, "user2");
    open(&mut manager, "user3");
    manager.toggle_minimize("user1");

    open(&mut manager, "user1");

    assert_eq!(manager.open_contact_ids(), vec!["user1", "user3", "user2"]);
    let window = manager.window("user1").expect("Window open");
    assert!(!window.minimized);
    // History survives refocusing
    assert_eq!(window.messages.len(), 1);
    assert_invariants(&manager);
}

#[test]
fn test_open_at_capacity_evicts_tail() {
    let mut manager = demo_manager();
    open(&mut manager, "user1"); // A
    open(&mut manager, "user2"); // B
    open(&mut manager, "user3"); // C
    assert_eq!(manager.open_contact_ids(), vec!["user3", "user2", "user1"]);

    open(&mut manager, "user4"); // D

    assert_eq!(manager.open_contact_ids(), vec!["user4", "user3", "user2"]);
    assert!(manager.window("user1").is_none());
}

#[test]
fn test_eviction_ignores_minimized_state() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    open(&mut manager, "user2");
    open(&mut manager, "user3");
    manager.toggle_minimize("user2");

    open(&mut manager, "user4");
    assert!(manager.window("user1").is_none());

    open(&mut manager, "user5");
    // user2 is the tail now, minimized or not
    assert!(manager.window("user2").is_none());
    assert_eq!(manager.open_contact_ids(), vec!["user5", "user4", "user3"]);
}

#[test]
fn test_evicted_history_is_discarded() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    manager.send_message("user1", "remember me");
    open(&mut manager, "user2");
    open(&mut manager, "user3");
    open(&mut manager, "user4"); // evicts user1

    open(&mut manager, "user1");
    let window = manager.window("user1").expect("Window reopened");
    assert_eq!(window.messages.len(), 1);
    assert_eq!(window.messages[0].sender, Sender::Them);
}

#[test]
fn test_invariants_hold_over_mixed_operations() {
    let mut manager = demo_manager();
    let ids = ["user1", "user2", "user3", "user4", "user5"];

    for step in 0..40 {
        let id = ids[(step * 7) % ids.len()];
        match step % 5 {
            0 | 1 => open(&mut manager, id),
            2 => manager.toggle_minimize(id),
            3 => manager.close_chat(id),
            _ => {
                manager.send_message(id, "ping");
            }
        }
        assert_invariants(&manager);
    }
}

#[test]
fn test_open_closes_contact_panel() {
    let mut manager = demo_manager();
    manager.toggle_contact_panel();
    assert!(manager.is_contact_panel_open());

    open(&mut manager, "user2");
    assert!(!manager.is_contact_panel_open());

    // Refocusing closes it too
    manager.toggle_contact_panel();
    open(&mut manager, "user2");
    assert!(!manager.is_contact_panel_open());
}

#[test]
fn test_open_clears_unread_count() {
    let mut manager = demo_manager();
    assert!(manager.roster().get("user1").is_some_and(|c| c.has_unread()));

    open(&mut manager, "user1");

    assert!(!manager.roster().get("user1").is_some_and(|c| c.has_unread()));
}

#[test]
fn test_open_contact_outside_roster() {
    let mut manager = demo_manager();
    let stranger = Contact::new("stranger", "Zed", "");

    manager.open_chat(&stranger);

    let window = manager.window("stranger").expect("Window open");
    assert_eq!(window.messages[0].text, "Started chat with Zed");
    assert!(manager.contact_for(window).is_none());
    assert_eq!(manager.roster().len(), 5);
}

#[test]
fn test_open_chat_by_id() {
    let mut manager = demo_manager();

    assert!(manager.open_chat_by_id("user4"));
    assert!(!manager.open_chat_by_id("ghost"));
    assert_eq!(manager.open_contact_ids(), vec!["user4"]);
}

#[test]
fn test_toggle_minimize_twice_restores_state() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    open(&mut manager, "user2");
    let before = manager.open_contact_ids().join(",");

    manager.toggle_minimize("user1");
    assert_eq!(manager.window("user1").map(|w| w.state()), Some(WindowState::Minimized));
    assert_eq!(manager.open_contact_ids().join(","), before);

    manager.toggle_minimize("user1");
    assert_eq!(manager.window("user1").map(|w| w.state()), Some(WindowState::Expanded));
    assert_eq!(manager.open_contact_ids().join(","), before);
}

#[test]
fn test_toggle_minimize_unknown_is_noop() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    let before = manager.open_windows().clone();

    manager.toggle_minimize("ghost");

    assert_eq!(manager.open_windows(), &before);
}

#[test]
fn test_close_chat() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    open(&mut manager, "user2");

    manager.close_chat("user1");

    assert_eq!(manager.open_contact_ids(), vec!["user2"]);
    assert!(manager.window("user1").is_none());
}

#[test]
fn test_close_unknown_chat_is_noop() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    open(&mut manager, "user2");
    let before = manager.open_windows().clone();

    manager.close_chat("user5");

    assert_eq!(manager.open_windows(), &before);
}

#[test]
fn test_send_message_appends_trimmed_self_message() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");

    assert!(manager.send_message("user1", "hi"));
    assert!(manager.send_message("user1", "  there  "));

    let window = manager.window("user1").expect("Window open");
    assert_eq!(window.messages.len(), 3);
    assert_eq!(window.messages[1].text, "hi");
    assert_eq!(window.messages[1].sender, Sender::Me);
    assert_eq!(window.messages[2].text, "there");
}

#[test]
fn test_send_blank_message_is_ignored() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");

    assert!(!manager.send_message("user1", "  "));
    assert!(!manager.send_message("user1", ""));
    assert!(!manager.send_message("user1", "\t\n"));

    assert_eq!(manager.window("user1").map(|w| w.messages.len()), Some(1));
}

#[test]
fn test_send_to_closed_window_is_ignored() {
    let mut manager = demo_manager();

    assert!(!manager.send_message("user1", "hello?"));
    assert!(manager.open_windows().is_empty());
}

#[test]
fn test_send_does_not_reorder_or_restore() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    open(&mut manager, "user2");
    manager.toggle_minimize("user1");

    manager.send_message("user1", "still here");

    assert_eq!(manager.open_contact_ids(), vec!["user2", "user1"]);
    assert!(manager.window("user1").is_some_and(|w| w.minimized));
}

#[test]
fn test_message_ids_strictly_increase() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    for i in 0..20 {
        manager.send_message("user1", &format!("msg {}", i));
    }
    open(&mut manager, "user2");

    let mut ids: Vec<u64> = manager
        .window("user1")
        .expect("Window open")
        .messages
        .iter()
        .map(|m| m.id)
        .collect();
    ids.extend(manager.window("user2").expect("Window open").messages.iter().map(|m| m.id));

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "ids not increasing: {:?}", ids);
}

#[test]
fn test_filtered_contacts() {
    let mut manager = demo_manager();

    let all: Vec<&str> = manager.filtered_contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(all.len(), 5);
    assert_eq!(all[0], "Alice Wonderland");

    manager.set_filter_text("ali");
    let hits: Vec<&str> = manager.filtered_contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(hits, vec!["Alice Wonderland"]);

    manager.set_filter_text("nobody at all");
    assert!(manager.filtered_contacts().is_empty());
    assert_eq!(manager.roster().len(), 5);

    manager.set_filter_text("");
    assert_eq!(manager.filtered_contacts().len(), 5);
}

#[test]
fn test_toggle_contact_panel() {
    let mut manager = demo_manager();

    manager.toggle_contact_panel();
    assert!(manager.is_contact_panel_open());
    manager.toggle_contact_panel();
    assert!(!manager.is_contact_panel_open());

    manager.toggle_contact_panel();
    manager.close_contact_panel();
    assert!(!manager.is_contact_panel_open());
}

#[test]
fn test_minimized_bubbles() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    open(&mut manager, "user2");
    open(&mut manager, "user3");
    manager.toggle_minimize("user1");
    manager.toggle_minimize("user3");

    let bubbles: Vec<&str> = manager
        .minimized_bubbles()
        .iter()
        .map(|w| w.contact_id.as_str())
        .collect();
    assert_eq!(bubbles, vec!["user3", "user1"]);
}

#[test]
fn test_online_count_follows_roster_updates() {
    let mut manager = demo_manager();
    open(&mut manager, "user2");
    assert_eq!(manager.online_count(), 3);

    if let Some(bob) = manager.roster_mut().get_mut("user2") {
        bob.is_online = true;
    }

    assert_eq!(manager.online_count(), 4);
    // The window sees the update through the roster
    let window = manager.window("user2").expect("Window open");
    assert!(manager.contact_for(window).is_some_and(|c| c.is_online));
}

#[test]
fn test_custom_settings() {
    let settings = Settings {
        max_open_windows: 1,
        time_format: "%H:%M:%S".to_string(),
        chat_started_template: "Say hi to {name}".to_string(),
    };
    let mut manager = ChatManager::with_settings(Roster::demo(), settings).expect("Valid settings");

    open(&mut manager, "user1");
    open(&mut manager, "user2");

    assert_eq!(manager.open_contact_ids(), vec!["user2"]);
    let first = &manager.open_windows()[0].messages[0];
    assert_eq!(first.text, "Say hi to Bob The Builder");
    assert_eq!(first.timestamp.len(), 8);
}

#[test]
fn test_invalid_settings_rejected() {
    let settings = Settings {
        max_open_windows: 0,
        ..Settings::default()
    };

    assert!(ChatManager::with_settings(Roster::demo(), settings).is_err());
}

#[test]
fn test_oversized_cap_rejected_without_allocating() {
    for cap in [MAX_OPEN_WINDOWS + 1, usize::MAX] {
        let settings = Settings {
            max_open_windows: cap,
            ..Settings::default()
        };
        assert!(ChatManager::with_settings(Roster::demo(), settings).is_err());
    }
}

#[test]
fn test_window_count_never_exceeds_three() {
    let mut manager = demo_manager();
    for id in ["user1", "user2", "user3", "user4", "user5"] {
        open(&mut manager, id);
        assert!(manager.open_windows().len() <= 3);
    }
    assert_eq!(manager.open_windows().len(), 3);
}

#[test]
fn test_send_to_unknown_window_leaves_others_untouched() {
    let mut manager = demo_manager();
    open(&mut manager, "user1");
    let before = manager.open_windows().clone();

    assert!(!manager.send_message("user2", "wrong window"));
    assert_eq!(manager.open_windows(), &before);

    // The next accepted message still gets a fresh id
    assert!(manager.send_message("user1", "right window"));
    let window = manager.window("user1").expect("Window open");
    assert!(window.messages[1].id > window.messages[0].id);
}
