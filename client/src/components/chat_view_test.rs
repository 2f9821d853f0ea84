use super::*;

#[test]
fn wrapper_class_carries_sender_modifier() {
    assert_eq!(wrapper_class(Sender::User), "message-wrapper user");
    assert_eq!(wrapper_class(Sender::Bot), "message-wrapper bot");
}

#[test]
fn bubble_class_carries_sender_modifier() {
    assert_eq!(bubble_class(Sender::Bot), "message bot");
}

// =============================================================
// Input controls
// =============================================================

#[test]
fn enter_key_sends() {
    assert!(is_send_key("Enter"));
}

#[test]
fn other_keys_do_not_send() {
    assert!(!is_send_key("a"));
    assert!(!is_send_key("Tab"));
    assert!(!is_send_key("enter"));
}

#[test]
fn controls_disabled_only_while_pending() {
    let mut state = ChatState { input: "oi".to_owned(), ..ChatState::default() };
    assert!(!controls_disabled(&state));
    state.begin_send(1000);
    assert!(controls_disabled(&state));
    state.finish_send(Ok("Olá!".to_owned()), 2000);
    assert!(!controls_disabled(&state));
}

// =============================================================
// Scroll trigger
// =============================================================

/// Count how often a dependent of the scroll trigger recomputes.
fn trigger_runs(trigger: Memo<(usize, bool)>) -> Memo<usize> {
    Memo::new(move |prev: Option<&usize>| {
        trigger.track();
        prev.map_or(1, |n| n + 1)
    })
}

#[test]
fn typing_does_not_retrigger_scroll() {
    let owner = Owner::new();
    owner.with(|| {
        let chat = RwSignal::new(ChatState::default());
        let runs = trigger_runs(scroll_trigger(chat));
        assert_eq!(runs.get_untracked(), 1);

        chat.update(|c| c.input = "o".to_owned());
        chat.update(|c| c.input = "oi".to_owned());
        assert_eq!(runs.get_untracked(), 1);
    });
}

#[test]
fn transcript_and_pending_changes_retrigger_scroll() {
    let owner = Owner::new();
    owner.with(|| {
        let chat = RwSignal::new(ChatState { input: "oi".to_owned(), ..ChatState::default() });
        let trigger = scroll_trigger(chat);
        let runs = trigger_runs(trigger);
        assert_eq!(runs.get_untracked(), 1);

        chat.update(|c| {
            c.begin_send(1000);
        });
        assert_eq!(trigger.get_untracked(), (2, true));
        assert_eq!(runs.get_untracked(), 2);

        chat.update(|c| c.finish_send(Ok("Olá!".to_owned()), 2000));
        assert_eq!(trigger.get_untracked(), (3, false));
        assert_eq!(runs.get_untracked(), 3);
    });
}
