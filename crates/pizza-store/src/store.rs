//! # Order Store
//!
//! Single source of truth for the current order.
//!
//! ## Thread Safety
//! The store is an `Arc<Mutex<_>>` handle, like the cart state in a POS
//! terminal:
//! 1. Any number of clones may read or mutate it
//! 2. Only one mutation runs at a time (read, derive, publish under one lock)
//! 3. Snapshots are `Arc<OrderState>` and never change once published
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Store Operations                               │
//! │                                                                         │
//! │  UI Intent                Store Call                 Published          │
//! │  ─────────                ──────────                 ─────────          │
//! │                                                                         │
//! │  Tap size chip ─────────► set_size(b, size) ───────► new snapshot      │
//! │                                                                         │
//! │  Tap topping ───────────► toggle_topping(b, t) ────► new snapshot      │
//! │                                                                         │
//! │  Screen renders ────────► current_state() ─────────► (read only)       │
//! │                                                                         │
//! │  Bad index ─────────────► Err(OutOfRange) ─────────► nothing           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Observers
//! Observers run synchronously, in publish order, while the store lock is
//! held. An observer must not call a mutating method, `subscribe`, or drop a
//! [`Subscription`] of the same store; doing so deadlocks. Async consumers
//! that need to react with further mutations should use [`OrderStore::watch`]
//! instead.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use pizza_core::{BreadTemplate, CoreResult, OrderState, SizeOption};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::command::OrderCommand;

type Observer = Box<dyn FnMut(Arc<OrderState>) + Send + 'static>;

struct Inner {
    current: Arc<OrderState>,
    revision: u64,
    observers: Vec<(u64, Observer)>,
    next_observer_id: u64,
    watch_tx: watch::Sender<Arc<OrderState>>,
}

impl Inner {
    fn publish(&mut self, next: OrderState) {
        let snapshot = Arc::new(next);
        self.current = Arc::clone(&snapshot);
        self.revision += 1;

        self.watch_tx.send_replace(Arc::clone(&snapshot));
        for (_, observer) in self.observers.iter_mut() {
            observer(Arc::clone(&snapshot));
        }

        debug!(
            revision = self.revision,
            observers = self.observers.len(),
            "Order snapshot published"
        );
    }
}

/// Observable order state.
///
/// Cloning is cheap and every clone addresses the same order.
#[derive(Clone)]
pub struct OrderStore {
    inner: Arc<Mutex<Inner>>,
}

impl OrderStore {
    /// Creates a store whose initial order is built from `catalog`.
    ///
    /// Every bread starts Small with no toppings selected. The catalog is
    /// trusted; use [`OrderConfig::catalog`](crate::OrderConfig::catalog) for
    /// catalogs from outside the program.
    pub fn new(catalog: &[BreadTemplate]) -> Self {
        let initial = Arc::new(OrderState::from_catalog(catalog));
        let (watch_tx, _) = watch::channel(Arc::clone(&initial));

        info!(breads = initial.len(), "Order store initialized");

        OrderStore {
            inner: Arc::new(Mutex::new(Inner {
                current: initial,
                revision: 0,
                observers: Vec::new(),
                next_observer_id: 0,
                watch_tx,
            })),
        }
    }

    // A panicking observer poisons the lock after the new snapshot is
    // already in place, so the guarded data is still consistent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Latest published snapshot.
    pub fn current_state(&self) -> Arc<OrderState> {
        Arc::clone(&self.lock().current)
    }

    /// Number of snapshots published since creation (initial state is 0).
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    /// Registers an observer.
    ///
    /// The observer is called right away with the current snapshot, then
    /// with every snapshot published afterwards, in publish order. It stops
    /// being called once the returned [`Subscription`] is dropped or
    /// [`unsubscribed`](Subscription::unsubscribe).
    pub fn subscribe<F>(&self, mut observer: F) -> Subscription
    where
        F: FnMut(Arc<OrderState>) + Send + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_observer_id;
        inner.next_observer_id += 1;

        observer(Arc::clone(&inner.current));
        inner.observers.push((id, Box::new(observer)));

        debug!(observer_id = id, "Observer subscribed");

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Returns a receiver that always holds the latest snapshot.
    ///
    /// Intermediate snapshots may be skipped if the receiver falls behind;
    /// use [`subscribe`](Self::subscribe) when every snapshot matters.
    pub fn watch(&self) -> watch::Receiver<Arc<OrderState>> {
        self.lock().watch_tx.subscribe()
    }

    /// Changes the size of the bread at `bread_index` and publishes.
    ///
    /// Publishes even when `size` is unchanged; the derived total is the same.
    ///
    /// ## Errors
    /// `OutOfRange` if `bread_index` does not address a bread. Nothing is
    /// published and the order is unchanged.
    pub fn set_size(&self, bread_index: usize, size: SizeOption) -> CoreResult<()> {
        debug!(bread_index, %size, "set_size");
        self.mutate("set_size", |state| state.with_size(bread_index, size))
    }

    /// Flips one topping on one bread and publishes.
    ///
    /// ## Errors
    /// `OutOfRange` if either index is invalid. Nothing is published and the
    /// order is unchanged.
    pub fn toggle_topping(&self, bread_index: usize, topping_index: usize) -> CoreResult<()> {
        debug!(bread_index, topping_index, "toggle_topping");
        self.mutate("toggle_topping", |state| {
            state.with_topping_toggled(bread_index, topping_index)
        })
    }

    /// Runs a command forwarded from the presentation layer.
    pub fn apply(&self, command: OrderCommand) -> CoreResult<()> {
        match command {
            OrderCommand::SetSize { bread_index, size } => self.set_size(bread_index, size),
            OrderCommand::ToggleTopping {
                bread_index,
                topping_index,
            } => self.toggle_topping(bread_index, topping_index),
        }
    }

    fn mutate<F>(&self, operation: &'static str, derive: F) -> CoreResult<()>
    where
        F: FnOnce(&OrderState) -> CoreResult<OrderState>,
    {
        let mut inner = self.lock();
        match derive(&inner.current) {
            Ok(next) => {
                inner.publish(next);
                Ok(())
            }
            Err(err) => {
                warn!(operation, error = %err, "Order mutation rejected");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("OrderStore")
            .field("revision", &inner.revision)
            .field("breads", &inner.current.len())
            .field("observers", &inner.observers.len())
            .finish()
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Handle for a registered observer. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the observer"]
pub struct Subscription {
    id: u64,
    store: Weak<Mutex<Inner>>,
}

impl Subscription {
    /// Identifier of the observer within its store.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stops future notifications.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(store) = self.store.upgrade() else {
            return;
        };
        let mut inner = store.lock().unwrap_or_else(PoisonError::into_inner);
        inner.observers.retain(|(id, _)| *id != self.id);
        debug!(observer_id = self.id, "Observer unsubscribed");
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
