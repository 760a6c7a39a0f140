use super::*;

use std::{cell::RefCell, rc::Rc};

use crossbeam_channel::bounded;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
enum Route {
    Home,
    Detail(String),
}

impl CoordinatorScreen for Route {
    type View = String;

    fn build(&self) -> String {
        match self {
            Route::Home => "home".to_string(),
            Route::Detail(slug) => format!("detail:{slug}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
enum Sheet {
    Profile(String),
    Compose,
}

impl CoordinatorSheet for Sheet {
    type View = String;

    fn id(&self) -> String {
        match self {
            Sheet::Profile(handle) => format!("profile-{handle}"),
            Sheet::Compose => "compose".to_string(),
        }
    }

    fn build(&self) -> String {
        self.id()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
enum Cover {
    Onboarding,
}

impl CoordinatorFullScreenCover for Cover {
    type View = String;

    fn id(&self) -> String {
        "onboarding".to_string()
    }

    fn build(&self) -> String {
        self.id()
    }
}

type Coordinator = NavigationCoordinator<Route, Sheet, Cover>;

fn detail(slug: &str) -> Route {
    Route::Detail(slug.to_string())
}

fn recorder(coordinator: &mut Coordinator) -> (Rc<RefCell<Vec<&'static str>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = coordinator.subscribe(move |event| sink.borrow_mut().push(event.kind()));
    (seen, subscription)
}

#[test]
fn starts_empty_at_root() {
    let coordinator = Coordinator::new();
    assert!(coordinator.path().is_empty());
    assert!(coordinator.is_at_root());
    assert_eq!(coordinator.current(), None);
    assert_eq!(coordinator.active_sheet(), None);
    assert_eq!(coordinator.active_full_screen_cover(), None);
    assert_eq!(coordinator.version(), 0);
}

#[test]
fn push_pop_and_pop_to_root_walk_the_path() {
    let mut coordinator = Coordinator::new();

    coordinator.push(Route::Home);
    coordinator.push(detail("x"));
    assert_eq!(coordinator.path(), &[Route::Home, detail("x")]);
    assert_eq!(coordinator.current(), Some(&detail("x")));
    assert_eq!(coordinator.current().map(Route::build).as_deref(), Some("detail:x"));

    coordinator.pop();
    assert_eq!(coordinator.path(), &[Route::Home]);

    coordinator.pop_to_root();
    assert!(coordinator.path().is_empty());
    assert_eq!(coordinator.depth(), 0);
}

#[test]
fn pop_on_empty_path_is_a_silent_no_op() {
    let mut coordinator = Coordinator::new();
    let (seen, _subscription) = recorder(&mut coordinator);

    coordinator.pop();
    coordinator.pop();
    coordinator.pop_to_root();

    assert!(coordinator.path().is_empty());
    assert_eq!(coordinator.version(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn presenting_a_sheet_overwrites_instead_of_stacking() {
    let mut coordinator = Coordinator::new();

    coordinator.present_sheet(Sheet::Profile("felipe".to_string()));
    assert_eq!(
        coordinator.active_sheet(),
        Some(&Sheet::Profile("felipe".to_string()))
    );

    coordinator.present_sheet(Sheet::Compose);
    assert_eq!(coordinator.active_sheet(), Some(&Sheet::Compose));

    coordinator.dismiss_sheet();
    assert_eq!(coordinator.active_sheet(), None);
}

#[test]
fn sheet_and_cover_slots_are_independent() {
    let mut coordinator = Coordinator::new();
    coordinator.push(Route::Home);

    coordinator.present_sheet(Sheet::Compose);
    coordinator.present_full_screen_cover(Cover::Onboarding);
    assert_eq!(coordinator.active_sheet(), Some(&Sheet::Compose));
    assert_eq!(
        coordinator.active_full_screen_cover(),
        Some(&Cover::Onboarding)
    );

    coordinator.dismiss_full_screen_cover();
    assert_eq!(coordinator.active_sheet(), Some(&Sheet::Compose));

    coordinator.present_full_screen_cover(Cover::Onboarding);
    coordinator.dismiss_sheet();
    assert_eq!(
        coordinator.active_full_screen_cover(),
        Some(&Cover::Onboarding)
    );
    assert_eq!(coordinator.path(), &[Route::Home]);
}

#[test]
fn render_layer_write_back_clears_modal_slots() {
    let mut coordinator = Coordinator::new();
    coordinator.present_sheet(Sheet::Compose);
    coordinator.present_full_screen_cover(Cover::Onboarding);

    coordinator.set_active_sheet(None);
    coordinator.set_active_full_screen_cover(None);

    assert_eq!(coordinator.active_sheet(), None);
    assert_eq!(coordinator.active_full_screen_cover(), None);
}

#[test]
fn subscribers_see_new_state_before_the_call_returns() {
    let mut coordinator = Coordinator::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let _subscription = coordinator.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    coordinator.push(detail("x"));
    assert_eq!(
        events.borrow().as_slice(),
        &[NavigationEvent::Pushed {
            route: detail("x"),
            depth: 1,
        }]
    );

    coordinator.present_sheet(Sheet::Compose);
    assert_eq!(
        events.borrow().last(),
        Some(&NavigationEvent::SheetChanged {
            previous: None,
            current: Some(Sheet::Compose),
        })
    );

    coordinator.push(Route::Home);
    coordinator.pop_to_root();
    assert_eq!(
        events.borrow().last(),
        Some(&NavigationEvent::PoppedToRoot {
            removed: vec![detail("x"), Route::Home],
        })
    );
}

#[test]
fn subscribers_run_in_registration_order() {
    let mut coordinator = Coordinator::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let first_sink = Rc::clone(&order);
    let _first = coordinator.subscribe(move |_| first_sink.borrow_mut().push("first"));
    let second_sink = Rc::clone(&order);
    let _second = coordinator.subscribe(move |_| second_sink.borrow_mut().push("second"));

    coordinator.push(Route::Home);

    assert_eq!(order.borrow().as_slice(), &["first", "second"]);
}

#[test]
fn dropped_subscription_stops_receiving_events() {
    let mut coordinator = Coordinator::new();
    let (seen, subscription) = recorder(&mut coordinator);
    assert_eq!(coordinator.subscriber_count(), 1);

    coordinator.push(Route::Home);
    drop(subscription);
    coordinator.push(detail("y"));

    assert_eq!(seen.borrow().as_slice(), &["pushed"]);
    assert_eq!(coordinator.subscriber_count(), 0);
}

#[test]
fn unchanged_modal_state_does_not_notify_or_bump_version() {
    let mut coordinator = Coordinator::new();
    let (seen, _subscription) = recorder(&mut coordinator);

    coordinator.dismiss_sheet();
    coordinator.dismiss_full_screen_cover();
    coordinator.present_sheet(Sheet::Compose);
    coordinator.present_sheet(Sheet::Compose);

    assert_eq!(coordinator.version(), 1);
    assert_eq!(seen.borrow().as_slice(), &["sheet_changed"]);
}

#[test]
fn version_counts_each_state_change_once() {
    let mut coordinator = Coordinator::new();
    coordinator.push(Route::Home);
    coordinator.push(detail("a"));
    coordinator.pop();
    coordinator.present_full_screen_cover(Cover::Onboarding);
    coordinator.pop_to_root();

    assert_eq!(coordinator.version(), 5);
}

#[test]
fn channel_subscription_forwards_events() {
    let mut coordinator = Coordinator::new();
    let (tx, rx) = bounded(8);
    let _subscription = coordinator.subscribe_channel(tx);

    coordinator.push(Route::Home);
    coordinator.pop();

    assert_eq!(
        rx.try_recv().expect("pushed event"),
        NavigationEvent::Pushed {
            route: Route::Home,
            depth: 1,
        }
    );
    assert_eq!(
        rx.try_recv().expect("popped event"),
        NavigationEvent::Popped {
            route: Route::Home,
            depth: 0,
        }
    );
}

#[test]
fn full_or_closed_channel_never_blocks_mutation() {
    let mut coordinator = Coordinator::new();
    let (tx, rx) = bounded(1);
    let _subscription = coordinator.subscribe_channel(tx);

    coordinator.push(Route::Home);
    coordinator.push(detail("dropped"));
    assert_eq!(rx.len(), 1);

    drop(rx);
    coordinator.pop();
    assert_eq!(coordinator.path(), &[Route::Home]);
}

#[test]
fn apply_dispatches_commands() {
    let mut coordinator = Coordinator::new();
    for command in [
        NavigationCommand::Push(Route::Home),
        NavigationCommand::Push(detail("x")),
        NavigationCommand::PresentSheet(Sheet::Profile("felipe".to_string())),
        NavigationCommand::PresentFullScreenCover(Cover::Onboarding),
        NavigationCommand::Pop,
        NavigationCommand::DismissSheet,
    ] {
        coordinator.apply(command);
    }

    assert_eq!(coordinator.path(), &[Route::Home]);
    assert_eq!(coordinator.active_sheet(), None);
    assert_eq!(
        coordinator.active_full_screen_cover(),
        Some(&Cover::Onboarding)
    );

    coordinator.apply(NavigationCommand::DismissFullScreenCover);
    coordinator.apply(NavigationCommand::PopToRoot);
    assert!(coordinator.is_at_root());
    assert_eq!(coordinator.active_full_screen_cover(), None);
}

#[test]
fn snapshot_serializes_current_state() {
    let mut coordinator = Coordinator::new();
    coordinator.push(detail("x"));
    coordinator.present_sheet(Sheet::Compose);

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.version, 2);

    let json = serde_json::to_value(&snapshot).expect("snapshot json");
    assert_eq!(
        json,
        serde_json::json!({
            "path": [{ "Detail": "x" }],
            "sheet": "Compose",
            "full_screen_cover": null,
            "version": 2,
        })
    );
}
