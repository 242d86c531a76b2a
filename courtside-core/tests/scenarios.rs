//! End-to-end scenarios for the roster and role screens, driven through the
//! view session the way a front end would.

use courtside_core::seed::{StaticRoleDirectory, StaticRoster};
use courtside_core::{
    ConfirmationPrompt, PlayerRecord, RoleRecord, ViewCommand, ViewEvent, ViewSession,
};

struct Answer(bool);

impl ConfirmationPrompt for Answer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("courtside_core=debug")),
        )
        .with_test_writer()
        .try_init();
}

fn roster_session() -> ViewSession<PlayerRecord> {
    init_tracing();
    ViewSession::open(&StaticRoster).expect("seed roster opens")
}

fn roles_session() -> ViewSession<RoleRecord> {
    init_tracing();
    ViewSession::open(&StaticRoleDirectory).expect("seed roles open")
}

#[test]
fn confirmed_delete_removes_exactly_one_player() {
    let mut session = roster_session();
    assert_eq!(session.store().len(), 5);

    let event = session.handle(ViewCommand::RequestDelete {
        id: "SC-003".to_string(),
    });
    assert!(matches!(event, ViewEvent::ConfirmationRequested { .. }));

    let event = session.handle(ViewCommand::ConfirmDelete);
    assert_eq!(
        event,
        ViewEvent::RecordRemoved {
            id: "SC-003".to_string(),
        }
    );

    assert_eq!(session.store().len(), 4);
    assert!(!session.store().contains(&"SC-003".to_string()));

    let remaining: Vec<&str> = session.store().records().iter().map(|p| p.id()).collect();
    assert_eq!(remaining, vec!["SC-001", "SC-002", "SC-004", "SC-005"]);
}

#[test]
fn declined_delete_leaves_roster_unchanged() {
    let mut session = roster_session();

    session.handle(ViewCommand::RequestDelete {
        id: "SC-003".to_string(),
    });
    let event = session.handle(ViewCommand::CancelDelete);

    assert_eq!(
        event,
        ViewEvent::DeleteCancelled {
            id: "SC-003".to_string(),
        }
    );
    assert_eq!(session.store().len(), 5);
    assert!(session.store().contains(&"SC-003".to_string()));
}

#[test]
fn search_budi_finds_exactly_budi_santoso() {
    let mut session = roster_session();
    session.set_search("Budi");

    let view = session.visible();

    assert_eq!(view.records().len(), 1);
    assert_eq!(view.records()[0].name(), "Budi Santoso");
    assert_eq!(view.display_range(), "1-1 of 1");
}

#[test]
fn deleting_role_two_leaves_one_and_three_untouched() {
    let mut session = roles_session();

    let before: Vec<RoleRecord> = session.store().records().to_vec();
    let event = session.delete_with_prompt(2, &mut Answer(true));

    assert_eq!(event, ViewEvent::RecordRemoved { id: 2 });

    let ids: Vec<u32> = session.store().records().iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![1, 3]);

    for survivor in session.store().records() {
        let original = before
            .iter()
            .find(|r| r.id() == survivor.id())
            .expect("survivor was in the seed");
        assert_eq!(survivor.user_count(), original.user_count());
        assert_eq!(survivor.description(), original.description());
    }
}

#[test]
fn declined_role_delete_is_a_noop() {
    let mut session = roles_session();

    let event = session.delete_with_prompt(2, &mut Answer(false));

    assert_eq!(event, ViewEvent::DeleteCancelled { id: 2 });
    assert_eq!(session.store().len(), 3);
}

#[test]
fn edit_intent_requests_navigation_without_touching_the_store() {
    let mut session = roster_session();

    let event = session.handle(ViewCommand::Edit {
        id: "SC-004".to_string(),
    });

    match event {
        ViewEvent::NavigationRequested { target } => {
            assert_eq!(target.to_string(), "edit record SC-004");
        }
        _ => panic!("Expected NavigationRequested"),
    }
    assert_eq!(session.store().len(), 5);
}

#[test]
fn visible_slice_is_deterministic() {
    let mut session = roster_session();
    session.set_search("a");

    let first = format!("{:?}", session.visible());
    let second = format!("{:?}", session.visible());

    assert_eq!(first, second);
}

#[test]
fn repeated_delete_of_same_id_is_idempotent() {
    let mut session = roster_session();

    session.delete_with_prompt("SC-003".to_string(), &mut Answer(true));
    let event = session.delete_with_prompt("SC-003".to_string(), &mut Answer(true));

    assert!(matches!(event, ViewEvent::CommandIgnored { .. }));
    assert_eq!(session.store().len(), 4);
}
