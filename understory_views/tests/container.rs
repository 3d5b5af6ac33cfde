// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_views` crate.
//!
//! These drive whole containers through the public API: initialization, nested
//! navigation and sibling exclusivity, deferred prepare steps, failure and re-entrancy
//! policies, lookups, and state persistence.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::json;
use understory_deferred::{Resolver, Settlement};
use understory_nav_tree::{BranchConfig, NavigationTree};
use understory_views::{
    ContainerConfig, ContainerDelegate, ContainerRef, Deferred, Failure, OpenWith, Phase,
    ReentrancyPolicy, RollbackPolicy, StateDocument, Transition, View, ViewError, ViewEvent,
    ViewHandle, ViewId, ViewState, ViewsContainer,
};

type Log = Rc<RefCell<Vec<String>>>;

#[derive(Default)]
struct Counter {
    visits: u64,
}

impl ViewState for Counter {
    fn serialize(&self) -> Option<StateDocument> {
        let mut doc = StateDocument::new();
        doc.insert("visits".into(), json!(self.visits));
        Some(doc)
    }

    fn load(&mut self, doc: &StateDocument) {
        if let Some(visits) = doc.get("visits").and_then(|v| v.as_u64()) {
            self.visits = visits;
        }
    }
}

struct Page {
    key: &'static str,
    log: Log,
    open_gate: Option<Deferred<Failure>>,
    close_gate: Option<Deferred<Failure>>,
    counter: Option<Counter>,
    received: Option<(u32, String)>,
    container: Option<ContainerRef<Page>>,
    then_open: Option<ViewId>,
}

impl Page {
    fn new(key: &'static str, log: &Log) -> Self {
        Self {
            key,
            log: log.clone(),
            open_gate: None,
            close_gate: None,
            counter: None,
            received: None,
            container: None,
            then_open: None,
        }
    }

    fn stateful(mut self) -> Self {
        self.counter = Some(Counter::default());
        self
    }

    fn note(&self, what: &str) {
        self.log.borrow_mut().push(format!("{}:{what}", self.key));
    }
}

impl View for Page {
    fn id(&self) -> ViewId {
        ViewId::from_static("test", self.key)
    }

    fn on_initialize(&mut self, container: &ContainerRef<Self>) {
        self.container = Some(container.clone());
        self.note("initialize");
    }

    fn on_activation_changed(&mut self, active: bool) {
        self.note(if active { "show" } else { "hide" });
    }

    fn on_before_open(&mut self) {
        self.note("before_open");
        if let Some(counter) = &mut self.counter {
            counter.visits += 1;
        }
    }

    fn prepare_open(&mut self) -> Option<Deferred<Failure>> {
        self.open_gate.take()
    }

    fn on_open(&mut self) {
        self.note("open");
        let Some(next) = self.then_open.take() else {
            return;
        };
        if let Some(container) = self.container.as_ref().and_then(ContainerRef::upgrade) {
            let _ = container.open(&next);
        }
    }

    fn on_before_close(&mut self) {
        self.note("before_close");
    }

    fn prepare_close(&mut self) -> Option<Deferred<Failure>> {
        self.close_gate.take()
    }

    fn on_close(&mut self) {
        self.note("close");
    }

    fn on_destroyed(&mut self) {
        self.note("destroyed");
    }

    fn state(&self) -> Option<&dyn ViewState> {
        self.counter.as_ref().map(|c| c as &dyn ViewState)
    }

    fn state_mut(&mut self) -> Option<&mut dyn ViewState> {
        self.counter.as_mut().map(|c| c as &mut dyn ViewState)
    }
}

impl OpenWith<(u32, String)> for Page {
    fn receive(&mut self, args: (u32, String)) {
        self.note("receive");
        self.received = Some(args);
    }
}

struct Menu {
    tree: Option<NavigationTree<Page>>,
    log: Log,
}

impl ContainerDelegate<Page> for Menu {
    fn build_navigation_tree(&mut self) -> NavigationTree<Page> {
        self.log.borrow_mut().push("menu:build".into());
        self.tree.take().unwrap_or_default()
    }

    fn on_before_initialize(&mut self) {
        self.log.borrow_mut().push("menu:before_initialize".into());
    }

    fn on_initialize(&mut self) {
        self.log.borrow_mut().push("menu:initialize".into());
    }

    fn on_enabled(&mut self) {
        self.log.borrow_mut().push("menu:enabled".into());
    }

    fn on_disabled(&mut self) {
        self.log.borrow_mut().push("menu:disabled".into());
    }

    fn on_destroyed(&mut self) {
        self.log.borrow_mut().push("menu:destroyed".into());
    }
}

struct Fixture {
    container: ViewsContainer<Page>,
    log: Log,
}

impl Fixture {
    /// A container over the tree `build` makes, not yet initialized.
    fn with_tree(
        config: ContainerConfig,
        build: impl FnOnce(&Log) -> NavigationTree<Page>,
    ) -> Self {
        let log = Log::default();
        let tree = build(&log);
        let container = ViewsContainer::new(
            Menu {
                tree: Some(tree),
                log: log.clone(),
            },
            config,
        );
        Self { container, log }
    }

    /// `{ Home (shown on awake), Settings → { SettingsAudio } }`, not yet initialized.
    fn menu(config: ContainerConfig) -> Self {
        Self::with_tree(config, |log| {
            let mut tree = NavigationTree::new();
            tree.insert_root(Page::new("home", log), BranchConfig::SHOW_ON_AWAKE);
            let settings = tree.insert_root(Page::new("settings", log), BranchConfig::default());
            tree.insert_child(
                settings,
                Page::new("settings-audio", log).stateful(),
                BranchConfig::default(),
            )
            .unwrap();
            tree
        })
    }

    fn initialized(config: ContainerConfig) -> Self {
        let fixture = Self::menu(config);
        fixture.container.initialize().unwrap();
        fixture.log.borrow_mut().clear();
        fixture
    }

    fn view(&self, key: &'static str) -> ViewHandle<Page> {
        self.container
            .view(&ViewId::from_static("test", key))
            .unwrap()
    }

    /// Make the next open of `key` wait on the returned resolver.
    fn gate_open(&self, key: &'static str) -> Resolver<Failure> {
        let (gate, resolver) = Deferred::new();
        self.view(key).with_mut(|v| v.open_gate = Some(gate));
        resolver
    }

    fn gate_close(&self, key: &'static str) -> Resolver<Failure> {
        let (gate, resolver) = Deferred::new();
        self.view(key).with_mut(|v| v.close_gate = Some(gate));
        resolver
    }

    fn take_log(&self) -> Vec<String> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}

#[test]
fn initialize_runs_hooks_and_shows_only_awake_branches() {
    let fx = Fixture::menu(ContainerConfig::default());
    fx.container.initialize().unwrap();

    assert_eq!(
        fx.take_log(),
        vec![
            "menu:before_initialize",
            "menu:build",
            "home:show",
            "home:initialize",
            "home:hide",
            "settings:show",
            "settings:initialize",
            "settings:hide",
            "settings-audio:show",
            "settings-audio:initialize",
            "settings-audio:hide",
            "home:show",
            "menu:initialize",
        ]
    );
    assert!(fx.view("home").is_active());
    assert!(!fx.view("settings").is_active());
    assert!(!fx.view("settings-audio").is_active());
    // Showing on awake does not open.
    assert!(fx.container.views().iter().all(|v| !v.is_open()));
    assert!(fx.view("home").with(|v| v.container.is_some()));
}

#[test]
fn second_initialize_is_rejected_without_side_effects() {
    let fx = Fixture::initialized(ContainerConfig::default());
    assert!(matches!(
        fx.container.initialize(),
        Err(ViewError::AlreadyInitialized)
    ));
    assert!(fx.take_log().is_empty());
    assert_eq!(fx.container.len(), 3);
}

#[test]
fn disabled_container_cycles_activation_once() {
    let fx = Fixture::menu(ContainerConfig {
        start_enabled: false,
        ..ContainerConfig::default()
    });
    fx.container.initialize().unwrap();
    let log = fx.take_log();
    let tail: Vec<_> = log.iter().rev().take(3).rev().cloned().collect();
    assert_eq!(tail, vec!["menu:enabled", "menu:disabled", "menu:initialize"]);
    assert!(!fx.container.is_enabled());

    fx.container.set_enabled(true);
    fx.container.set_enabled(true);
    assert_eq!(fx.take_log(), vec!["menu:enabled"]);
}

#[test]
fn nested_navigation_keeps_ancestors_open() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let (home, settings, audio) = (fx.view("home"), fx.view("settings"), fx.view("settings-audio"));

    assert!(home.open().is_resolved());
    assert!(settings.open().is_resolved());
    assert!(!home.is_open());
    assert!(!home.is_active());
    assert!(settings.is_open());
    assert_eq!(settings.phase(), Phase::Open);

    assert!(audio.open().is_resolved());
    assert!(settings.is_open());
    assert!(!home.is_open());
    assert!(audio.is_open());
    assert!(settings.is_suspended());
    assert!(!audio.is_suspended());
}

#[test]
fn opening_a_sibling_closes_the_other_branch_and_its_children() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let (home, settings, audio) = (fx.view("home"), fx.view("settings"), fx.view("settings-audio"));
    let _ = settings.open();
    let _ = audio.open();
    fx.take_log();

    let _ = home.open();
    assert!(home.is_open());
    assert!(!settings.is_open());
    assert!(!audio.is_open());
    let log = fx.take_log();
    assert!(log.contains(&"settings:close".to_string()));
    assert!(log.contains(&"settings-audio:close".to_string()));
    // Unrelated views close before the opening view runs its own hooks.
    let closed = log.iter().position(|e| e == "settings:close").unwrap();
    let before_open = log.iter().position(|e| e == "home:before_open").unwrap();
    assert!(closed < before_open);
}

#[test]
fn open_sequence_orders_events_and_hooks() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    for (tag, event) in [
        ("opens", ViewEvent::Opens),
        ("opened", ViewEvent::Opened),
        ("closes", ViewEvent::Closes),
        ("closed", ViewEvent::Closed),
    ] {
        let log = fx.log.clone();
        settings.subscribe(event, move || log.borrow_mut().push(format!("event:{tag}")));
    }

    let _ = settings.open();
    let _ = settings.close();
    assert_eq!(
        fx.take_log(),
        vec![
            "event:opens",
            "settings:show",
            "settings:before_open",
            "event:opened",
            "settings:open",
            "event:closes",
            "settings:before_close",
            "settings:hide",
            "event:closed",
            "settings:close",
        ]
    );
}

#[test]
fn deferred_open_completes_when_prepare_resolves() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    let gate = fx.gate_open("settings");

    let opened = settings.open();
    assert_eq!(opened.settlement(), Settlement::Pending);
    assert_eq!(settings.phase(), Phase::Opening);
    assert!(settings.is_open());
    assert!(!fx.take_log().contains(&"settings:open".to_string()));

    gate.resolve();
    assert!(opened.is_resolved());
    assert_eq!(settings.phase(), Phase::Open);
    assert_eq!(fx.take_log(), vec!["settings:open"]);
}

#[test]
fn deferred_close_keeps_view_active_until_done() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    let _ = settings.open();
    let gate = fx.gate_close("settings");

    let closed = settings.close();
    assert!(closed.is_pending());
    assert!(!settings.is_open());
    assert!(settings.is_active());

    gate.resolve();
    assert!(closed.is_resolved());
    assert!(!settings.is_active());
    assert_eq!(settings.phase(), Phase::Closed);
}

#[test]
fn failed_open_propagates_cause_and_stays_open_by_default() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    let gate = fx.gate_open("settings");
    let opened = settings.open();

    let cause = Failure::msg("load failed");
    gate.reject(cause.clone());

    assert!(opened.is_rejected());
    let Some(ViewError::Prepare {
        view,
        transition,
        cause: got,
    }) = opened.error()
    else {
        panic!("expected a prepare failure");
    };
    assert_eq!(view, ViewId::from_static("test", "settings"));
    assert_eq!(transition, Transition::Open);
    assert!(got.ptr_eq(&cause));
    assert_eq!(got.to_string(), "load failed");

    assert!(settings.is_open());
    assert_eq!(settings.phase(), Phase::Opening);
    assert!(!fx.take_log().contains(&"settings:open".to_string()));

    // The view can still be closed afterwards.
    assert!(settings.close().is_resolved());
    assert!(!settings.is_open());
}

#[test]
fn strict_rollback_restores_prior_phase() {
    let fx = Fixture::initialized(ContainerConfig {
        rollback: RollbackPolicy::Strict,
        ..ContainerConfig::default()
    });
    let settings = fx.view("settings");
    let gate = fx.gate_open("settings");
    let opened = settings.open();
    gate.reject(Failure::msg("load failed"));

    assert!(opened.is_rejected());
    assert_eq!(settings.phase(), Phase::Closed);
    assert!(!settings.is_open());
    assert!(!settings.is_active());

    let _ = settings.open();
    let gate = fx.gate_close("settings");
    let closed = settings.close();
    gate.reject(Failure::msg("animation interrupted"));
    assert!(closed.is_rejected());
    assert_eq!(settings.phase(), Phase::Open);
    assert!(settings.is_active());
}

#[test]
fn failed_close_stays_closing_by_default() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    let _ = settings.open();
    let gate = fx.gate_close("settings");
    let closed = settings.close();
    gate.reject(Failure::msg("animation interrupted"));

    assert!(closed.is_rejected());
    assert_eq!(settings.phase(), Phase::Closing);
    assert!(!settings.is_open());
    assert!(settings.is_active());
}

#[test]
fn reject_policy_refuses_overlapping_transitions() {
    let fx = Fixture::initialized(ContainerConfig {
        reentrancy: ReentrancyPolicy::Reject,
        ..ContainerConfig::default()
    });
    let settings = fx.view("settings");
    let gate = fx.gate_open("settings");
    let opened = settings.open();

    let overlapping = settings.close();
    assert!(matches!(
        overlapping.error(),
        Some(ViewError::TransitionInProgress {
            phase: Phase::Opening,
            ..
        })
    ));
    assert_eq!(settings.phase(), Phase::Opening);

    gate.resolve();
    assert!(opened.is_resolved());
    assert!(settings.close().is_resolved());
}

#[test]
fn permissive_policy_lets_the_newest_transition_win() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    let gate = fx.gate_open("settings");
    let opened = settings.open();

    let closed = settings.close();
    assert!(closed.is_resolved());
    assert_eq!(settings.phase(), Phase::Closed);
    fx.take_log();

    // The superseded open still reports completion and runs its hook, but leaves the
    // phase and the listeners alone.
    let opened_events = Rc::new(Cell::new(0));
    let hits = opened_events.clone();
    settings.on_opened(move || hits.set(hits.get() + 1));
    gate.resolve();
    assert!(opened.is_resolved());
    assert_eq!(settings.phase(), Phase::Closed);
    assert_eq!(opened_events.get(), 0);
    assert_eq!(fx.take_log(), vec!["settings:open"]);
}

#[test]
fn results_settle_exactly_once() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    let gate = fx.gate_open("settings");
    let opened = settings.open();

    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    opened.on_settle(move |_| c.set(c.get() + 1));
    gate.resolve();
    let c = calls.clone();
    opened.on_settle(move |_| c.set(c.get() + 1));

    assert_eq!(calls.get(), 2);
    assert!(opened.is_resolved());
    assert!(!opened.is_rejected());
}

#[test]
fn lookups_by_id_and_predicate() {
    let fx = Fixture::initialized(ContainerConfig::default());
    assert!(
        fx.container
            .view(&ViewId::from_static("test", "missing"))
            .is_none()
    );
    let audio = fx.view("settings-audio");
    assert_eq!(audio.id().to_string(), "test:settings-audio");

    let stateful = fx.container.find_view(|v| v.counter.is_some()).unwrap();
    assert!(stateful.ptr_eq(&audio));
    assert!(fx.container.find_view(|v| v.key == "nowhere").is_none());

    let home_id = ViewId::from_static("test", "home");
    assert!(
        fx.container
            .find_view_with_id(&home_id, |v| v.counter.is_some())
            .is_none()
    );
    assert!(fx.container.find_view_with_id(&home_id, |_| true).is_some());

    let settings = fx.container.parent(&audio).unwrap();
    assert_eq!(settings.id().key(), "settings");
    let children = fx.container.children(&settings);
    assert_eq!(children.len(), 1);
    assert!(children[0].ptr_eq(&audio));
    assert!(fx.container.parent(&settings).is_none());
}

#[test]
fn container_open_reports_lookup_errors() {
    let fx = Fixture::menu(ContainerConfig::default());
    let id = ViewId::from_static("test", "settings");
    assert!(matches!(
        fx.container.open(&id).error(),
        Some(ViewError::NotInitialized)
    ));

    fx.container.initialize().unwrap();
    assert!(fx.container.open(&id).is_resolved());
    let missing = ViewId::from_static("test", "missing");
    assert!(matches!(
        fx.container.open(&missing).error(),
        Some(ViewError::UnknownView(got)) if got == missing
    ));
}

#[test]
fn open_with_hands_arguments_over_before_opening() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let id = ViewId::from_static("test", "settings");
    let opened = fx.container.open_with(&id, (3_u32, "audio".to_string()));
    assert!(opened.is_resolved());

    let settings = fx.view("settings");
    assert_eq!(
        settings.with(|v| v.received.clone()),
        Some((3, "audio".to_string()))
    );
    assert_eq!(fx.take_log()[0], "settings:receive");
}

#[test]
fn close_views_closes_everything_and_waits() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let (settings, audio) = (fx.view("settings"), fx.view("settings-audio"));
    let _ = settings.open();
    let _ = audio.open();
    let gate = fx.gate_close("settings");

    let all = fx.container.close_views();
    assert!(all.is_pending());
    assert!(!audio.is_open());
    assert!(!settings.is_open());

    gate.resolve();
    assert!(all.is_resolved());
}

#[test]
fn close_views_except_keeps_the_chain() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let (home, settings, audio) = (fx.view("home"), fx.view("settings"), fx.view("settings-audio"));
    let _ = settings.open();
    let _ = audio.open();

    assert!(fx.container.close_views_except(&audio).is_resolved());
    assert!(settings.is_open() && audio.is_open());

    assert!(fx.container.close_views_except(&home).is_resolved());
    assert!(!settings.is_open() && !audio.is_open());
}

#[test]
fn handle_from_another_container_closes_everything() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let other = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    let _ = settings.open();

    let _ = fx.container.close_views_except(&other.view("settings"));
    assert!(!settings.is_open());
}

#[test]
fn state_round_trips_through_a_document() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let audio = fx.view("settings-audio");
    let _ = audio.open();
    let _ = audio.open();

    let doc = fx.container.save_state();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc["test:settings-audio"], json!({ "visits": 2 }));

    let restored = Fixture::initialized(ContainerConfig::default());
    assert_eq!(restored.container.load_state(&doc), 1);
    let visits = restored
        .view("settings-audio")
        .with(|v| v.counter.as_ref().map(|c| c.visits));
    assert_eq!(visits, Some(2));
}

#[test]
fn destroy_runs_once() {
    let fx = Fixture::initialized(ContainerConfig::default());
    fx.container.destroy();
    fx.container.destroy();
    assert_eq!(
        fx.take_log(),
        vec![
            "home:destroyed",
            "settings:destroyed",
            "settings-audio:destroyed",
            "menu:destroyed",
        ]
    );
    drop(fx.container);
    assert!(fx.log.borrow().is_empty());
}

#[test]
fn dropping_the_container_destroys_views() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let Fixture { container, log } = fx;
    drop(container);
    assert_eq!(log.borrow().last().map(String::as_str), Some("menu:destroyed"));
}

#[test]
fn unsubscribed_listeners_stop_firing() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let settings = fx.view("settings");
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    let sub = settings.on_opened(move || h.set(h.get() + 1));
    let _ = settings.open();
    assert!(settings.unsubscribe(sub));
    let _ = settings.close();
    let _ = settings.open();
    assert_eq!(hits.get(), 1);
}

#[test]
fn superseded_open_does_not_close_the_newer_one() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let (home, settings) = (fx.view("home"), fx.view("settings"));
    let home_gate = fx.gate_open("home");
    let settings_gate = fx.gate_open("settings");

    let home_opened = home.open();
    let settings_opened = settings.open();
    assert_eq!(home.phase(), Phase::Closed);
    assert_eq!(settings.phase(), Phase::Opening);

    home_gate.resolve();
    assert!(home_opened.is_resolved());
    assert!(!home.is_open());
    assert!(settings.is_open());

    settings_gate.resolve();
    assert!(settings_opened.is_resolved());
    assert_eq!(settings.phase(), Phase::Open);
    assert!(settings.is_active());
    assert_eq!(home.phase(), Phase::Closed);
    assert!(!home.is_active());
}

#[test]
fn navigating_from_on_open_closes_the_view_with_all_its_hooks() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let (home, settings) = (fx.view("home"), fx.view("settings"));
    home.with_mut(|v| v.then_open = Some(ViewId::from_static("test", "settings")));
    let closed = Rc::new(Cell::new(0));
    let c = closed.clone();
    home.on_closed(move || c.set(c.get() + 1));

    let opened = home.open();

    assert!(opened.is_resolved());
    assert_eq!(
        fx.take_log(),
        vec![
            "home:before_open",
            "home:open",
            "settings:show",
            "settings:before_open",
            "settings:open",
            "home:before_close",
            "home:hide",
            "home:close",
        ]
    );
    assert_eq!(closed.get(), 1);
    assert_eq!(home.phase(), Phase::Closed);
    assert!(!home.is_active());
    assert_eq!(settings.phase(), Phase::Open);
    assert!(settings.is_active());
}

#[test]
fn transitions_requested_while_a_view_is_borrowed_run_afterwards() {
    let fx = Fixture::initialized(ContainerConfig::default());
    let home = fx.view("home");
    let _ = home.open();
    fx.take_log();

    let closed = home.with(|_| {
        let closed = fx.container.close_views();
        assert!(closed.is_pending());
        closed
    });

    assert!(closed.is_resolved());
    assert_eq!(home.phase(), Phase::Closed);
    assert_eq!(
        fx.take_log(),
        vec!["home:before_close", "home:hide", "home:close"]
    );
}

#[test]
fn duplicate_ids_resolve_to_the_first_view() {
    let fx = Fixture::with_tree(ContainerConfig::default(), |log| {
        let mut tree = NavigationTree::new();
        tree.insert_root(Page::new("twin", log), BranchConfig::default());
        tree.insert_root(Page::new("twin", log).stateful(), BranchConfig::default());
        tree
    });
    fx.container.initialize().unwrap();
    assert_eq!(fx.container.len(), 2);
    let initialized = fx
        .take_log()
        .iter()
        .filter(|e| *e == "twin:initialize")
        .count();
    assert_eq!(initialized, 2);

    let id = ViewId::from_static("test", "twin");
    let first = fx.container.view(&id).unwrap();
    assert!(first.with(|v| v.counter.is_none()));
    assert!(first.ptr_eq(&fx.container.views()[0]));

    let second = fx
        .container
        .find_view_with_id(&id, |v| v.counter.is_some())
        .unwrap();
    assert!(!second.ptr_eq(&first));
    assert!(second.ptr_eq(&fx.container.views()[1]));

    assert!(fx.container.open(&id).is_resolved());
    assert!(first.is_open());
    assert!(!second.is_open());
}
