//! Outbound ports the engine pushes into.
//!
//! Both collaborators are injected at engine construction. The engine never
//! reads anything back through them, and their failures stay on their side
//! of the boundary: implementations swallow their own errors.

use super::Snapshot;

/// Receives a full state snapshot after every state-affecting operation,
/// including each tick.
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Signaled exactly once per completed session, before the mode switch.
///
/// Must not block; the engine calls it synchronously from inside a tick.
pub trait NotificationPort {
    fn notify(&mut self);
}

/// Presenter that drops every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

/// Notifier that ignores session ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl NotificationPort for NullNotifier {
    fn notify(&mut self) {}
}
