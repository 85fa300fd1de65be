// Observer: a subject pushes every state change to the observers registered
// with it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam::channel::{self, Receiver, Sender};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{PatternError, Result};

pub trait Observer<E>: Send + Sync {
    fn update(&self, event: &E);
}

/// Handle returned by [`Subject::register`], used to unregister later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(Uuid);

type Registration<E> = (ObserverId, Arc<dyn Observer<E>>);

/// Observer registry, notified in registration order.
///
/// `notify` snapshots the registry before calling anyone. An observer removed
/// while a notification is in flight still receives that event, and none
/// after it. Observers may call back into the subject from `update`.
pub struct Subject<E> {
    observers: Mutex<Vec<Registration<E>>>,
}

impl<E> Subject<E> {
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(Vec::new()),
        }
    }

    fn registry(&self) -> MutexGuard<'_, Vec<Registration<E>>> {
        // an observer panicking mid-update leaves the list itself intact
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, observer: Arc<dyn Observer<E>>) -> ObserverId {
        let id = ObserverId(Uuid::new_v4());
        self.registry().push((id, observer));
        id
    }

    /// Returns whether `id` was registered.
    pub fn remove(&self, id: ObserverId) -> bool {
        let mut observers = self.registry();
        let before = observers.len();
        observers.retain(|(registered, _)| *registered != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.registry().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }

    /// Delivers `event` to every registered observer and returns how many
    /// were notified.
    pub fn notify(&self, event: &E) -> Result<usize> {
        let snapshot: Vec<Arc<dyn Observer<E>>> = self
            .registry()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        if snapshot.is_empty() {
            return Err(PatternError::not_configured("subject without observers"));
        }

        for observer in &snapshot {
            observer.update(event);
        }
        trace!(observers = snapshot.len(), "notified observers");
        Ok(snapshot.len())
    }
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Weather station
// ============================================================================

pub struct WeatherStation {
    temperature: Mutex<f32>,
    subject: Subject<f32>,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self {
            temperature: Mutex::new(0.0),
            subject: Subject::new(),
        }
    }

    pub fn register(&self, observer: Arc<dyn Observer<f32>>) -> ObserverId {
        self.subject.register(observer)
    }

    pub fn remove(&self, id: ObserverId) -> bool {
        self.subject.remove(id)
    }

    fn reading(&self) -> MutexGuard<'_, f32> {
        self.temperature
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn temperature(&self) -> f32 {
        *self.reading()
    }

    /// Records the new reading, then notifies observers with it.
    ///
    /// With nobody registered the reading is not recorded and the call fails
    /// with [`PatternError::NotConfigured`].
    pub fn set_temperature(&self, temperature: f32) -> Result<usize> {
        if self.subject.is_empty() {
            return Err(PatternError::not_configured("weather station"));
        }
        *self.reading() = temperature;
        debug!(temperature, "temperature changed");
        self.subject.notify(&temperature)
    }
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer that remembers every reading it was sent.
pub struct TemperatureDisplay {
    name: String,
    readings: Mutex<Vec<f32>>,
}

impl TemperatureDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            readings: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn readings(&self) -> Vec<f32> {
        self.readings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Observer<f32> for TemperatureDisplay {
    fn update(&self, temperature: &f32) {
        self.readings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*temperature);
    }
}

// ============================================================================
// Channel-based publisher
// ============================================================================

/// Message-passing variant: each subscriber gets its own receiving end.
pub struct ChannelPublisher<E> {
    subscribers: Vec<Sender<E>>,
}

impl<E: Clone> ChannelPublisher<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<E> {
        let (tx, rx) = channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `event` to every live subscriber, dropping those whose receiver
    /// has gone away. Returns the number of deliveries.
    pub fn publish(&mut self, event: E) -> usize {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E: Clone> Default for ChannelPublisher<E> {
    fn default() -> Self {
        Self::new()
    }
}
