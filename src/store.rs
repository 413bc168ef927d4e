//! Observable container for the shared view state.
//!
//! Components hold an `Rc<UiStore>`, read the current [`UiState`], subscribe
//! to the fields they render, and call mutators from their event handlers.
//! Subscribers are notified synchronously after a mutation that changed at
//! least one of their fields. Mutations made by a callback are queued and
//! delivered after the current round, so every subscriber sees changes in
//! order and ends on the latest state. The store is single-threaded
//! (`Rc`/`RefCell`) and lives on the UI thread.

use std::cell::{Cell, Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::app::{UiField, UiState};
use crate::state::{AxisZoom, MapType, ZoomTransform};

/// Callback invoked with the post-mutation state and the fields that changed.
pub type UiSubscriber = Box<dyn Fn(&UiState, &[UiField])>;

struct Listener {
    fields: Vec<UiField>,
    callback: UiSubscriber,
    /// Cleared when the subscription is dropped, even mid-notification
    active: Cell<bool>,
}

type ListenerList = Rc<RefCell<Vec<Rc<Listener>>>>;

/// Shared view-state container with change notification.
pub struct UiStore {
    state: RefCell<UiState>,
    listeners: ListenerList,
    /// Notifications waiting for delivery: (post-mutation state, changed fields)
    pending: RefCell<VecDeque<(UiState, Vec<UiField>)>>,
    /// Whether a notification round is running
    notifying: Cell<bool>,
}

impl std::fmt::Debug for UiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiStore")
            .field("state", &self.state.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::from_state(UiState::new())
    }
}

impl UiStore {
    /// Creates a store holding the default view state.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a store around an existing state (mainly for tests).
    pub fn from_state(state: UiState) -> Self {
        Self {
            state: RefCell::new(state),
            listeners: Rc::new(RefCell::new(Vec::new())),
            pending: RefCell::new(VecDeque::new()),
            notifying: Cell::new(false),
        }
    }

    // ===== Reading =====

    /// Borrows the current state.
    ///
    /// The guard must be dropped before calling a mutator; prefer
    /// [`UiStore::with_state`] outside of short expressions.
    pub fn state(&self) -> Ref<'_, UiState> {
        self.state.borrow()
    }

    /// Runs `f` on the current state and returns its result.
    ///
    /// The borrow ends when `f` returns, so the result can be used to drive
    /// a mutator.
    pub fn with_state<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    // ===== Subscriptions =====

    /// Registers `callback` for changes to any of `fields`.
    ///
    /// The returned [`Subscription`] unsubscribes when dropped.
    pub fn subscribe<F>(&self, fields: &[UiField], callback: F) -> Subscription
    where
        F: Fn(&UiState, &[UiField]) + 'static,
    {
        let listener = Rc::new(Listener {
            fields: fields.to_vec(),
            callback: Box::new(callback),
            active: Cell::new(true),
        });
        self.listeners.borrow_mut().push(Rc::clone(&listener));
        Subscription {
            listener,
            listeners: Rc::clone(&self.listeners),
        }
    }

    /// Registers `callback` for changes to any field.
    pub fn subscribe_all<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&UiState, &[UiField]) + 'static,
    {
        self.subscribe(&UiField::ALL, callback)
    }

    /// Returns the number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    // ===== Mutation =====

    /// Applies `f` to the state as a single mutation and notifies subscribers.
    ///
    /// Called from inside a subscriber, the notification is queued behind the
    /// running round instead of delivered immediately.
    ///
    /// Returns the fields that changed.
    pub fn update<F>(&self, f: F) -> Vec<UiField>
    where
        F: FnOnce(&mut UiState),
    {
        let (changed, snapshot) = {
            let mut state = self.state.borrow_mut();
            let before = state.clone();
            f(&mut *state);
            let changed = before.changed_fields(&state);
            if changed.is_empty() {
                log::trace!("UI state mutation changed nothing");
                return changed;
            }
            (changed, state.clone())
        };

        log::debug!(
            "UI state changed: {}",
            changed.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
        );
        self.pending.borrow_mut().push_back((snapshot, changed.clone()));
        if !self.notifying.get() {
            self.drain_pending();
        } else {
            log::trace!("Queued notification behind running round");
        }
        changed
    }

    fn drain_pending(&self) {
        self.notifying.set(true);
        // Reset the flag even if a callback panics
        let _guard = NotifyingGuard(&self.notifying);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some((state, changed)) => self.notify(&state, &changed),
                None => break,
            }
        }
    }

    fn notify(&self, state: &UiState, changed: &[UiField]) {
        // Clone the list so callbacks may subscribe, unsubscribe or mutate.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            if listener.active.get() && listener.fields.iter().any(|f| changed.contains(f)) {
                (listener.callback)(state, changed);
            }
        }
    }

    pub fn set_map_type(&self, map_type: MapType) {
        self.update(|s| s.set_map_type(map_type));
    }

    pub fn set_map_color_mode(&self, mode: impl Into<String>) {
        let mode = mode.into();
        self.update(move |s| s.set_map_color_mode(mode));
    }

    pub fn set_votes_per_dot(&self, value: f64) {
        self.update(|s| s.set_votes_per_dot(value));
    }

    pub fn toggle_sidebar(&self) {
        self.update(UiState::toggle_sidebar);
    }

    pub fn set_is_mobile(&self, is_mobile: bool) {
        self.update(|s| s.set_is_mobile(is_mobile));
    }

    pub fn set_ternary_zoom(&self, transform: ZoomTransform) {
        self.update(|s| s.set_ternary_zoom(transform));
    }

    pub fn reset_ternary_zoom(&self) {
        self.update(UiState::reset_ternary_zoom);
    }

    pub fn set_map_zoom(&self, transform: ZoomTransform) {
        self.update(|s| s.set_map_zoom(transform));
    }

    pub fn reset_map_zoom(&self) {
        self.update(UiState::reset_map_zoom);
    }

    pub fn set_chart_x_zoom(&self, zoom: AxisZoom) {
        self.update(|s| s.set_chart_x_zoom(zoom));
    }

    pub fn reset_chart_x_zoom(&self) {
        self.update(UiState::reset_chart_x_zoom);
    }

    pub fn set_hovered_chart_year(&self, year: Option<i32>) {
        self.update(|s| s.set_hovered_chart_year(year));
    }
}

struct NotifyingGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Handle returned by [`UiStore::subscribe`]; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    listener: Rc<Listener>,
    listeners: ListenerList,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.listener.active.set(false);
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|item| !Rc::ptr_eq(item, &self.listener));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifies_only_subscribed_fields() {
        let store = UiStore::new();
        let map_hits = Rc::new(Cell::new(0));
        let zoom_hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&map_hits);
        let _map_sub = store.subscribe(&[UiField::MapType], move |_, _| counter.set(counter.get() + 1));
        let counter = Rc::clone(&zoom_hits);
        let _zoom_sub = store.subscribe(&[UiField::MapZoom], move |_, _| counter.set(counter.get() + 1));

        store.set_map_type(MapType::Hex);
        assert_eq!(map_hits.get(), 1);
        assert_eq!(zoom_hits.get(), 0);

        store.set_map_zoom(ZoomTransform::new(2.0, 1.0, 1.0));
        assert_eq!(map_hits.get(), 1);
        assert_eq!(zoom_hits.get(), 1);
    }

    #[test]
    fn test_noop_mutation_does_not_notify() {
        let store = UiStore::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = store.subscribe_all(move |_, _| counter.set(counter.get() + 1));

        store.reset_map_zoom();
        store.set_map_type(MapType::Choropleth);
        store.set_hovered_chart_year(None);
        assert_eq!(hits.get(), 0);

        store.toggle_sidebar();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_callback_sees_new_state_and_changed_fields() {
        let store = UiStore::new();
        store.set_map_color_mode("margin");

        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let _sub = store.subscribe(&[UiField::MapColorMode], move |state, changed| {
            *sink.borrow_mut() = Some((state.map_color_mode().to_string(), changed.to_vec()));
        });

        store.set_map_type(MapType::Dots);
        let (mode, changed) = seen.borrow_mut().take().unwrap();
        assert_eq!(mode, "winner");
        assert_eq!(changed, vec![UiField::MapType, UiField::MapColorMode]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let store = UiStore::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = store.subscribe_all(move |_, _| counter.set(counter.get() + 1));
        assert_eq!(store.subscriber_count(), 1);

        store.set_votes_per_dot(250.0);
        drop(sub);
        assert_eq!(store.subscriber_count(), 0);
        store.set_votes_per_dot(500.0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_callback_may_mutate_store() {
        let store = UiStore::new();
        let weak = Rc::downgrade(&store);
        let _sub = store.subscribe(&[UiField::MapType], move |state, _| {
            if state.map_type() == MapType::Hex {
                if let Some(store) = weak.upgrade() {
                    store.reset_map_zoom();
                }
            }
        });

        store.set_map_zoom(ZoomTransform::new(4.0, 10.0, 10.0));
        store.set_map_type(MapType::Hex);
        assert_eq!(store.state().map_zoom(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn test_later_subscriber_ends_on_latest_state() {
        let store = UiStore::new();
        let weak = Rc::downgrade(&store);
        let _zoom_on_hex = store.subscribe(&[UiField::MapType], move |state, _| {
            if state.map_type() == MapType::Hex {
                if let Some(store) = weak.upgrade() {
                    store.set_map_zoom(ZoomTransform::new(2.0, 0.0, 0.0));
                }
            }
        });

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _recorder = store.subscribe_all(move |state, changed| {
            sink.borrow_mut().push((state.map_zoom(), changed.to_vec()));
        });

        store.set_map_type(MapType::Hex);

        let seen = seen.borrow();
        assert_eq!(
            *seen,
            vec![
                (ZoomTransform::IDENTITY, vec![UiField::MapType]),
                (ZoomTransform::new(2.0, 0.0, 0.0), vec![UiField::MapZoom]),
            ]
        );
        assert_eq!(seen.last().map(|(zoom, _)| *zoom), Some(store.state().map_zoom()));
    }

    #[test]
    fn test_nested_mutations_delivered_in_order() {
        let store = UiStore::new();
        let weak = Rc::downgrade(&store);
        let _chain = store.subscribe(&[UiField::MapType, UiField::SidebarOpen], move |state, changed| {
            let Some(store) = weak.upgrade() else { return };
            if changed.contains(&UiField::MapType) && state.map_type() == MapType::Dots {
                store.toggle_sidebar();
                store.set_hovered_chart_year(Some(2000));
            } else if changed.contains(&UiField::SidebarOpen) {
                store.set_votes_per_dot(10.0);
            }
        });

        let order = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&order);
        let _recorder = store.subscribe_all(move |_, changed| sink.borrow_mut().push(changed.to_vec()));

        store.set_map_type(MapType::Dots);
        assert_eq!(
            *order.borrow(),
            vec![
                vec![UiField::MapType],
                vec![UiField::SidebarOpen],
                vec![UiField::HoveredChartYear],
                vec![UiField::VotesPerDot],
            ]
        );
        assert_eq!(store.with_state(|s| s.votes_per_dot()), 10.0);
    }

    #[test]
    fn test_subscription_dropped_mid_round_is_skipped() {
        let store = UiStore::new();
        let calls = Rc::new(Cell::new(0));

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&victim);
        let _dropper = store.subscribe_all(move |_, _| {
            slot.borrow_mut().take();
        });

        let counter = Rc::clone(&calls);
        *victim.borrow_mut() = Some(store.subscribe_all(move |_, _| counter.set(counter.get() + 1)));
        assert_eq!(store.subscriber_count(), 2);

        store.toggle_sidebar();
        assert_eq!(calls.get(), 0);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_with_state_allows_following_mutation() {
        let store = UiStore::new();
        let open = store.with_state(UiState::sidebar_open);
        store.set_is_mobile(open);
        assert_eq!(store.with_state(|s| (s.is_mobile(), s.sidebar_open())), (true, false));
    }

    #[test]
    fn test_update_batches_into_one_notification() {
        let store = UiStore::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let _sub = store.subscribe_all(move |_, changed| sink.borrow_mut().push(changed.to_vec()));

        let changed = store.update(|s| {
            s.reset_chart_x_zoom();
            s.set_chart_x_zoom(AxisZoom::new(2.0, -50.0));
            s.set_hovered_chart_year(Some(2016));
        });
        assert_eq!(changed, vec![UiField::ChartXZoom, UiField::HoveredChartYear]);
        assert_eq!(calls.borrow().len(), 1);
    }
}
