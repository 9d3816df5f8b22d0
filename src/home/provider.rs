//! Provider that owns the home state and exposes it to a component subtree.
//!
//! Descendants receive either a `&HomeProvider` or a [`Dispatch`] handle by
//! explicit parameter passing. The free functions [`home_state`] and
//! [`home_dispatch`] accept `None` for components rendered outside any
//! provider and return a default state and a no-op dispatcher respectively.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::HomeConfig;
use crate::data_provider::DataProviderContext;
use crate::storage::{ClientStorage, PREVIEW_PAGE_KEY};
use crate::{hlog, hlog_debug, hlog_error, hlog_trace, hlog_warn};

use super::action::{HomeAction, RawAction};
use super::command::Command;
use super::model::HomeState;
use super::update::update;

type Listener = Box<dyn FnMut(&HomeState)>;

/// State plus the storage its commands write to. Borrowed mutably only for
/// the duration of a single transition.
struct Store {
    state: HomeState,
    storage: Box<dyn ClientStorage>,
}

impl Store {
    fn apply(&mut self, action: HomeAction) -> HomeState {
        let cmds = update(&mut self.state, action);
        for cmd in cmds {
            self.run(cmd);
        }
        self.state.clone()
    }

    fn run(&mut self, cmd: Command) {
        hlog_debug!("run command={:?}", cmd);
        match cmd {
            Command::PersistPreviewPage { path } => {
                // Best-effort: a failed write never rolls back the transition.
                if let Err(e) = self.storage.set_item(PREVIEW_PAGE_KEY, &path) {
                    hlog_warn!("Failed to persist preview page '{}': {}", path, e);
                }
            }
        }
    }
}

struct Shared {
    store: RefCell<Store>,
    listeners: RefCell<Vec<Listener>>,
    pending: RefCell<VecDeque<HomeAction>>,
    dispatching: Cell<bool>,
}

/// Ends a dispatch round, even one unwinding from a listener panic. Actions
/// queued during an aborted round are discarded.
struct DispatchGuard<'a>(&'a Shared);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.dispatching.set(false);
    }
}

/// Holds the listeners while they run and puts them back on drop, so a
/// panicking listener does not unsubscribe everyone.
struct ListenerRestore<'a> {
    slot: &'a RefCell<Vec<Listener>>,
    taken: Vec<Listener>,
}

impl Drop for ListenerRestore<'_> {
    fn drop(&mut self) {
        let mut slot = self.slot.borrow_mut();
        // Keep listeners that subscribed while we were notifying.
        self.taken.append(&mut slot);
        *slot = std::mem::take(&mut self.taken);
    }
}

impl Shared {
    /// Actions dispatched from inside a listener are queued and applied once
    /// the current transition has finished notifying.
    fn dispatch(&self, action: HomeAction) {
        self.pending.borrow_mut().push_back(action);
        if self.dispatching.replace(true) {
            return;
        }
        let _guard = DispatchGuard(self);

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(action) = next else { break };

            let snapshot = self.store.borrow_mut().apply(action);
            hlog_trace!("state after transition: {:?}", snapshot);
            self.notify(&snapshot);
        }
    }

    fn notify(&self, snapshot: &HomeState) {
        let mut restore = ListenerRestore {
            slot: &self.listeners,
            taken: std::mem::take(&mut *self.listeners.borrow_mut()),
        };
        for listener in restore.taken.iter_mut() {
            listener(snapshot);
        }
    }

    fn dispatch_raw(&self, raw: RawAction) {
        match HomeAction::try_from(raw) {
            Ok(action) => self.dispatch(action),
            Err(e) => {
                hlog_error!("Rejected home action: {}", e);
                unreachable!("{}", e);
            }
        }
    }
}

/// Owner of one `HomeState` instance. Dropping it unmounts the store and
/// disconnects every outstanding [`Dispatch`].
pub struct HomeProvider {
    shared: Rc<Shared>,
    data_provider: DataProviderContext,
}

impl HomeProvider {
    /// Resolve `config`, read the persisted preview page, and build the
    /// initial state. The resolved page is written back to storage once.
    pub fn mount(config: HomeConfig, storage: impl ClientStorage + 'static) -> Self {
        let resolved = config.resolve();

        let stored_page = match storage.get_item(PREVIEW_PAGE_KEY) {
            Ok(page) => page,
            Err(e) => {
                hlog_warn!("Failed to read preview page from storage: {}", e);
                None
            }
        };

        let state = HomeState::initial(&resolved, stored_page);
        hlog!(
            "HomeProvider mounted service_url={} database={} page={}",
            state.service_url,
            state.database_name,
            state.preview_page_path
        );

        let mut store = Store {
            state,
            storage: Box::new(storage),
        };
        let path = store.state.preview_page_path.clone();
        store.run(Command::PersistPreviewPage { path });

        Self {
            shared: Rc::new(Shared {
                store: RefCell::new(store),
                listeners: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
            data_provider: DataProviderContext::from(&resolved),
        }
    }

    pub fn state(&self) -> HomeState {
        self.shared.store.borrow().state.clone()
    }

    pub fn dispatcher(&self) -> Dispatch {
        Dispatch {
            target: Some(Rc::downgrade(&self.shared)),
        }
    }

    pub fn dispatch(&self, action: HomeAction) {
        self.shared.dispatch(action);
    }

    /// Dispatch an action in its raw form.
    ///
    /// # Panics
    /// Panics on an action outside the known set. The state is not modified.
    pub fn dispatch_raw(&self, raw: RawAction) {
        self.shared.dispatch_raw(raw);
    }

    /// The child context built from the resolved service URL and database.
    pub fn data_provider(&self) -> &DataProviderContext {
        &self.data_provider
    }

    /// Run `listener` with the new state after every transition.
    pub fn subscribe(&self, listener: impl FnMut(&HomeState) + 'static) {
        self.shared.listeners.borrow_mut().push(Box::new(listener));
    }
}

impl Drop for HomeProvider {
    fn drop(&mut self) {
        hlog!("HomeProvider unmounted");
    }
}

impl fmt::Debug for HomeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HomeProvider")
            .field("state", &self.state())
            .field("data_provider", &self.data_provider)
            .finish()
    }
}

/// Handle for submitting actions to a provider.
///
/// A handle obtained outside any provider, or one that outlived its
/// provider, silently ignores everything dispatched to it.
#[derive(Clone, Default)]
pub struct Dispatch {
    target: Option<Weak<Shared>>,
}

impl Dispatch {
    pub fn noop() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| target.strong_count() > 0)
    }

    pub fn dispatch(&self, action: HomeAction) {
        match self.target.as_ref().and_then(Weak::upgrade) {
            Some(shared) => shared.dispatch(action),
            None => hlog_debug!("Dropped {} (no provider)", action.kind()),
        }
    }

    /// See [`HomeProvider::dispatch_raw`]. A disconnected handle ignores the
    /// action without inspecting it.
    pub fn dispatch_raw(&self, raw: RawAction) {
        match self.target.as_ref().and_then(Weak::upgrade) {
            Some(shared) => shared.dispatch_raw(raw),
            None => hlog_debug!("Dropped raw action {} (no provider)", raw.kind),
        }
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Current state of the nearest provider, or the default state outside one.
///
/// The default state does not consult storage: outside a provider the
/// preview page is always [`DEFAULT_PREVIEW_PAGE`](super::model::DEFAULT_PREVIEW_PAGE),
/// even when a page has been persisted. Only a mounted provider reads
/// `dev-home-iframePage`.
pub fn home_state(provider: Option<&HomeProvider>) -> HomeState {
    provider.map(HomeProvider::state).unwrap_or_default()
}

/// Dispatch handle of the nearest provider, or a no-op outside one.
pub fn home_dispatch(provider: Option<&HomeProvider>) -> Dispatch {
    provider.map(HomeProvider::dispatcher).unwrap_or_default()
}
