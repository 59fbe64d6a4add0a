//! Synchronous in-process pub/sub for portal state changes.
//!
//! Mutating store operations publish here so decoupled consumers (dashboards,
//! the CLI, tests) can observe updates without polling. Delivery is
//! best-effort and synchronous: a callback is invoked iff it is still
//! subscribed at emit time, in registration order.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, Weak},
};

use serde_json::Value;
use uuid::Uuid;

/// Portal state-change topics.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Topic {
    LeaveStatusUpdated,
    ExpenseStatusUpdated,
    EmployeeUpdated,
    TaskUpdated,
    SalaryUpdated,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::LeaveStatusUpdated => "leave_status_updated",
            Topic::ExpenseStatusUpdated => "expense_status_updated",
            Topic::EmployeeUpdated => "employee_updated",
            Topic::TaskUpdated => "task_updated",
            Topic::SalaryUpdated => "salary_updated",
        }
    }
}

type Callback = Arc<dyn Fn(&Value) + Send + Sync>;
type Registry = Mutex<HashMap<Topic, Vec<(Uuid, Callback)>>>;

#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Registry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for `topic`. Dropping the returned handle keeps
    /// the callback alive; call [`Subscription::unsubscribe`] to remove it.
    pub fn subscribe<F>(&self, topic: Topic, callback: F) -> Subscription
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        let mut registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        registry
            .entry(topic)
            .or_default()
            .push((id, Arc::new(callback)));
        Subscription {
            registry: Arc::downgrade(&self.registry),
            topic,
            id,
        }
    }

    /// Invoke every callback currently registered for `topic`, in
    /// registration order. Callbacks run outside the registry lock, so they
    /// may subscribe or emit reentrantly.
    pub fn emit(&self, topic: Topic, payload: Value) {
        let callbacks: Vec<Callback> = {
            let registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
            registry
                .get(&topic)
                .map(|subs| subs.iter().map(|(_, cb)| Arc::clone(cb)).collect())
                .unwrap_or_default()
        };
        for callback in callbacks {
            callback(&payload);
        }
    }

    /// Number of live subscriptions for `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        let registry = self.registry.lock().unwrap_or_else(|e| e.into_inner());
        registry.get(&topic).map(Vec::len).unwrap_or(0)
    }
}

/// Handle identifying one registered callback.
pub struct Subscription {
    registry: Weak<Registry>,
    topic: Topic,
    id: Uuid,
}

impl Subscription {
    /// Remove the callback; subsequent emits will not invoke it.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(subs) = registry.get_mut(&self.topic) {
                subs.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
