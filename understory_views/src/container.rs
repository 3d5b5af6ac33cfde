// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ViewsContainer`]: owns a navigation tree of views and enforces sibling exclusivity.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use hashbrown::HashMap;
use log::{debug, trace, warn};
use serde_json::Value;
use understory_deferred::Deferred;
use understory_nav_tree::{BranchId, NavigationTree};

use crate::config::ContainerConfig;
use crate::error::ViewError;
use crate::events::ViewEvent;
use crate::handle::ViewHandle;
use crate::id::ViewId;
use crate::lifecycle::ViewSlot;
use crate::state::StateDocument;
use crate::view::{OpenArgs, OpenWith, View};

/// Supplies a container's navigation tree and observes the container's own lifecycle.
///
/// Only [`build_navigation_tree`](ContainerDelegate::build_navigation_tree) is required.
pub trait ContainerDelegate<V: View>: 'static {
    /// Build the tree of views this container owns. Called once, from
    /// [`ViewsContainer::initialize`].
    fn build_navigation_tree(&mut self) -> NavigationTree<V>;

    /// Before the tree is built.
    fn on_before_initialize(&mut self) {}

    /// After every view has been initialized and wired.
    fn on_initialize(&mut self) {}

    /// The container became enabled.
    fn on_enabled(&mut self) {}

    /// The container became disabled.
    fn on_disabled(&mut self) {}

    /// The container is being torn down.
    fn on_destroyed(&mut self) {}
}

pub(crate) struct Shared<V: View> {
    config: ContainerConfig,
    delegate: RefCell<Box<dyn ContainerDelegate<V>>>,
    pub(crate) tree: RefCell<NavigationTree<Rc<ViewSlot<V>>>>,
    by_id: RefCell<HashMap<ViewId, BranchId>>,
    initialized: Cell<bool>,
    enabled: Cell<bool>,
    destroyed: Cell<bool>,
}

impl<V: View> Shared<V> {
    fn teardown(&self) {
        if self.destroyed.replace(true) {
            return;
        }
        debug!("destroying views container");
        let slots: Vec<_> = self.tree.borrow().views().cloned().collect();
        for slot in slots {
            slot.destroy();
        }
        if let Ok(mut delegate) = self.delegate.try_borrow_mut() {
            delegate.on_destroyed();
        }
    }
}

impl<V: View> Drop for Shared<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Orchestrates a set of views: builds their tree, initializes them once, and keeps at
/// most one sibling branch open at a time.
///
/// The container is a cheap, cloneable handle. Views receive a weak [`ContainerRef`] so
/// that they can reach their siblings without keeping the container alive.
///
/// ## Exclusivity
///
/// When a view opens (both when the open is requested and when it completes), every
/// other open view is closed unless it is an ancestor of the opening view. Opening a
/// nested view therefore keeps its parents open and closes unrelated branches. An open
/// that was superseded by a later transition of the same view completes silently and
/// closes nothing.
///
/// ```rust
/// use understory_nav_tree::{BranchConfig, NavigationTree};
/// use understory_views::{ContainerConfig, ContainerDelegate, View, ViewId, ViewsContainer};
///
/// struct Screen(&'static str);
///
/// impl View for Screen {
///     fn id(&self) -> ViewId {
///         ViewId::from_static("menu", self.0)
///     }
/// }
///
/// struct Menu;
///
/// impl ContainerDelegate<Screen> for Menu {
///     fn build_navigation_tree(&mut self) -> NavigationTree<Screen> {
///         let mut tree = NavigationTree::new();
///         tree.insert_root(Screen("home"), BranchConfig::SHOW_ON_AWAKE);
///         let settings = tree.insert_root(Screen("settings"), BranchConfig::default());
///         tree.insert_child(settings, Screen("audio"), BranchConfig::default())
///             .unwrap();
///         tree
///     }
/// }
///
/// let container = ViewsContainer::new(Menu, ContainerConfig::default());
/// container.initialize().unwrap();
///
/// let id = |key| ViewId::from_static("menu", key);
/// let home = container.view(&id("home")).unwrap();
/// let settings = container.view(&id("settings")).unwrap();
/// let audio = container.view(&id("audio")).unwrap();
///
/// let _ = home.open();
/// let _ = settings.open();
/// assert!(!home.is_open());
///
/// let _ = audio.open();
/// assert!(settings.is_open() && audio.is_open());
/// assert!(settings.is_suspended());
/// ```
pub struct ViewsContainer<V: View> {
    pub(crate) shared: Rc<Shared<V>>,
}

impl<V: View> Clone for ViewsContainer<V> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

/// Weak reference to a [`ViewsContainer`], handed to views at initialization.
pub struct ContainerRef<V: View> {
    shared: Weak<Shared<V>>,
}

impl<V: View> Clone for ContainerRef<V> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<V: View> ContainerRef<V> {
    /// The container, if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<ViewsContainer<V>> {
        self.shared.upgrade().map(|shared| ViewsContainer { shared })
    }
}

impl<V: View> ViewsContainer<V> {
    /// Create an uninitialized container.
    pub fn new(delegate: impl ContainerDelegate<V>, config: ContainerConfig) -> Self {
        Self {
            shared: Rc::new(Shared {
                config,
                delegate: RefCell::new(Box::new(delegate)),
                tree: RefCell::new(NavigationTree::new()),
                by_id: RefCell::new(HashMap::new()),
                initialized: Cell::new(false),
                enabled: Cell::new(config.start_enabled),
                destroyed: Cell::new(false),
            }),
        }
    }

    /// A weak reference to this container.
    #[must_use]
    pub fn downgrade(&self) -> ContainerRef<V> {
        ContainerRef {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// The configuration the container was created with.
    #[must_use]
    pub fn config(&self) -> ContainerConfig {
        self.shared.config
    }

    /// Build the tree, initialize every view once, and wire exclusivity.
    ///
    /// Each view is activated for its [`View::on_initialize`] call and deactivated again;
    /// afterwards only branches configured with
    /// [`show_on_awake`](understory_nav_tree::BranchConfig::show_on_awake) stay active.
    /// Showing on awake does not open a view.
    ///
    /// A disabled container goes through one enable/disable cycle so that delegates see
    /// their activation hooks at least once.
    ///
    /// Initialization happens exactly once; later calls return
    /// [`ViewError::AlreadyInitialized`] and change nothing.
    pub fn initialize(&self) -> Result<(), ViewError> {
        let shared = &self.shared;
        if shared.initialized.replace(true) {
            warn!("views container initialized twice; ignoring");
            return Err(ViewError::AlreadyInitialized);
        }

        shared.delegate.borrow_mut().on_before_initialize();
        let built = shared.delegate.borrow_mut().build_navigation_tree();

        let policy = shared.config.transitions();
        let tree = built.map(|branch, view| Rc::new(ViewSlot::new(branch, view, policy)));

        let mut by_id = HashMap::with_capacity(tree.len());
        for (branch, slot) in tree.iter() {
            if by_id.contains_key(&slot.id) {
                if !slot.id.is_empty() {
                    warn!("duplicate view id {}; lookups return the first", slot.id);
                }
                continue;
            }
            by_id.insert(slot.id.clone(), branch);
        }
        let awake: Vec<(Rc<ViewSlot<V>>, bool)> = tree
            .iter()
            .map(|(branch, slot)| {
                let show = tree.branch(branch).is_some_and(|b| b.config().show_on_awake);
                (slot.clone(), show)
            })
            .collect();
        *shared.tree.borrow_mut() = tree;
        *shared.by_id.borrow_mut() = by_id;

        let container = self.downgrade();
        for (slot, _) in &awake {
            slot.initialize(&container);
            let weak = Rc::downgrade(shared);
            let branch = slot.branch;
            let close_others: Rc<dyn Fn()> = Rc::new(move || {
                if let Some(shared) = weak.upgrade() {
                    let _ = ViewsContainer { shared }.close_views_except_branch(branch);
                }
            });
            slot.events.subscribe(ViewEvent::Opens, close_others.clone());
            slot.events.subscribe(ViewEvent::Opened, close_others);
        }

        for (slot, show) in &awake {
            slot.activate(*show);
        }

        if !shared.enabled.get() {
            let mut delegate = shared.delegate.borrow_mut();
            delegate.on_enabled();
            delegate.on_disabled();
        }

        shared.delegate.borrow_mut().on_initialize();
        debug!("views container initialized with {} views", awake.len());
        Ok(())
    }

    /// Returns `true` once [`initialize`](Self::initialize) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.shared.initialized.get()
    }

    /// Enable or disable the container, notifying the delegate on changes.
    pub fn set_enabled(&self, enabled: bool) {
        if self.shared.enabled.replace(enabled) == enabled {
            return;
        }
        let mut delegate = self.shared.delegate.borrow_mut();
        if enabled {
            delegate.on_enabled();
        } else {
            delegate.on_disabled();
        }
    }

    /// Whether the container is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.shared.enabled.get()
    }

    fn handle(&self, slot: Rc<ViewSlot<V>>) -> ViewHandle<V> {
        ViewHandle {
            slot,
            container: Rc::downgrade(&self.shared),
        }
    }

    fn slots(&self) -> Vec<Rc<ViewSlot<V>>> {
        self.shared.tree.borrow().views().cloned().collect()
    }

    /// Every view in depth-first preorder.
    #[must_use]
    pub fn views(&self) -> Vec<ViewHandle<V>> {
        self.slots().into_iter().map(|s| self.handle(s)).collect()
    }

    /// Number of views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.tree.borrow().len()
    }

    /// Returns `true` if the container holds no views (for example before initialization).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The view with this id.
    #[must_use]
    pub fn view(&self, id: &ViewId) -> Option<ViewHandle<V>> {
        let branch = *self.shared.by_id.borrow().get(id)?;
        let slot = self.shared.tree.borrow().get(branch).cloned()?;
        Some(self.handle(slot))
    }

    /// First view, in preorder, accepted by `pred`.
    ///
    /// With an enum of screens as `V`, `pred` is usually a `matches!` on the variant.
    /// Views that are busy in one of their own hooks are skipped.
    pub fn find_view(&self, mut pred: impl FnMut(&V) -> bool) -> Option<ViewHandle<V>> {
        self.slots()
            .into_iter()
            .find(|slot| slot.view.try_borrow().is_ok_and(|v| pred(&v)))
            .map(|slot| self.handle(slot))
    }

    /// First view with this id that is also accepted by `pred`.
    pub fn find_view_with_id(
        &self,
        id: &ViewId,
        mut pred: impl FnMut(&V) -> bool,
    ) -> Option<ViewHandle<V>> {
        self.find_view(|v| v.id() == *id && pred(v))
    }

    /// Parent view of `view` in the navigation tree.
    #[must_use]
    pub fn parent(&self, view: &ViewHandle<V>) -> Option<ViewHandle<V>> {
        let tree = self.shared.tree.borrow();
        let parent = tree.parent(view.branch())?;
        let slot = tree.get(parent).cloned()?;
        drop(tree);
        Some(self.handle(slot))
    }

    /// Direct children of `view` in the navigation tree.
    #[must_use]
    pub fn children(&self, view: &ViewHandle<V>) -> Vec<ViewHandle<V>> {
        let slots: Vec<_> = {
            let tree = self.shared.tree.borrow();
            tree.children(view.branch())
                .iter()
                .filter_map(|&c| tree.get(c).cloned())
                .collect()
        };
        slots.into_iter().map(|s| self.handle(s)).collect()
    }

    /// Open the view with this id.
    pub fn open(&self, id: &ViewId) -> Deferred<ViewError> {
        match self.lookup(id) {
            Ok(view) => view.open(),
            Err(e) => Deferred::rejected(e),
        }
    }

    /// Open the view with this id, forwarding `args` to it.
    pub fn open_with<A: OpenArgs>(&self, id: &ViewId, args: A) -> Deferred<ViewError>
    where
        V: OpenWith<A>,
    {
        match self.lookup(id) {
            Ok(view) => view.open_with(args),
            Err(e) => Deferred::rejected(e),
        }
    }

    fn lookup(&self, id: &ViewId) -> Result<ViewHandle<V>, ViewError> {
        if !self.is_initialized() {
            return Err(ViewError::NotInitialized);
        }
        self.view(id).ok_or_else(|| ViewError::UnknownView(id.clone()))
    }

    /// Close every open view.
    ///
    /// The returned result settles once every close has settled.
    pub fn close_views(&self) -> Deferred<ViewError> {
        let open: Vec<_> = self.slots().into_iter().filter(|s| s.is_open()).collect();
        Deferred::all(open.iter().map(ViewSlot::close).collect::<Vec<_>>())
    }

    /// Close every open view except `except` and its ancestors.
    ///
    /// A handle from another container has no relatives here, so every open view closes.
    pub fn close_views_except(&self, except: &ViewHandle<V>) -> Deferred<ViewError> {
        if !Weak::ptr_eq(&except.container, &Rc::downgrade(&self.shared)) {
            warn!("view {} does not belong to this container", except.id());
            return self.close_views();
        }
        self.close_views_except_branch(except.branch())
    }

    fn close_views_except_branch(&self, except: BranchId) -> Deferred<ViewError> {
        let to_close: Vec<Rc<ViewSlot<V>>> = {
            let tree = self.shared.tree.borrow();
            tree.iter()
                .filter(|(branch, slot)| *branch != except && slot.is_open())
                .filter(|(branch, slot)| {
                    let keep = tree.is_ancestor_or_self(*branch, except);
                    if keep {
                        trace!("keeping ancestor {} open", slot.id);
                    }
                    !keep
                })
                .map(|(_, slot)| slot.clone())
                .collect()
        };
        Deferred::all(to_close.iter().map(ViewSlot::close).collect::<Vec<_>>())
    }

    /// Collect the serialized state of every view that has some, keyed by view id.
    #[must_use]
    pub fn save_state(&self) -> StateDocument {
        let mut doc = StateDocument::new();
        for slot in self.slots() {
            let Ok(view) = slot.view.try_borrow() else {
                warn!("view {} is busy; its state was not saved", slot.id);
                continue;
            };
            if let Some(state) = view.state().and_then(|s| s.serialize()) {
                doc.insert(slot.id.to_string(), Value::Object(state));
            }
        }
        doc
    }

    /// Feed previously saved documents back to their views; returns how many views loaded.
    ///
    /// Entries for unknown ids and non-object values are ignored.
    pub fn load_state(&self, doc: &StateDocument) -> usize {
        let mut loaded = 0;
        for slot in self.slots() {
            let Some(Value::Object(state)) = doc.get(&slot.id.to_string()) else {
                continue;
            };
            let done = slot.hook("load_state", |v| match v.state_mut() {
                Some(target) => {
                    target.load(state);
                    true
                }
                None => false,
            });
            if done == Some(true) {
                loaded += 1;
            }
        }
        loaded
    }

    /// Tear down: every view and the delegate receive their `on_destroyed` hook once.
    ///
    /// Dropping the last container handle does the same.
    pub fn destroy(&self) {
        self.shared.teardown();
    }
}

impl<V: View> core::fmt::Debug for ViewsContainer<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewsContainer")
            .field("config", &self.shared.config)
            .field("views", &self.len())
            .field("initialized", &self.shared.initialized.get())
            .field("enabled", &self.shared.enabled.get())
            .finish_non_exhaustive()
    }
}

impl<V: View> core::fmt::Debug for ContainerRef<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContainerRef")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}
