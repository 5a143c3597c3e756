use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

type Handler<T> = Box<dyn Fn(&T) -> Result<()> + Send + Sync>;

/// Opaque handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

/// A list of event handlers with token-based removal.
pub struct SubscriberRegistry<T> {
    subscribers: Mutex<Subscribers<T>>,
}

struct Subscribers<T> {
    next_token: u64,
    handlers: Vec<(SubscriptionToken, Handler<T>)>,
}

impl<T> Default for SubscriberRegistry<T> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Subscribers {
                next_token: 0,
                handlers: Vec::new(),
            }),
        }
    }
}

impl<T> SubscriberRegistry<T> {
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionToken
    where
        F: Fn(&T) -> Result<()> + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.lock();
        let token = SubscriptionToken(subscribers.next_token);
        subscribers.next_token += 1;
        subscribers.handlers.push((token, Box::new(handler)));
        token
    }

    /// Returns `false` when the token was already gone.
    pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        let mut subscribers = self.subscribers.lock();
        let len_before = subscribers.handlers.len();
        subscribers.handlers.retain(|(t, _)| *t != token);
        subscribers.handlers.len() < len_before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().handlers.len()
    }

    /// Invoke all handlers. Handler errors are logged and swallowed.
    pub fn publish(&self, event: &T) {
        for (token, handler) in &self.subscribers.lock().handlers {
            if let Err(err) = handler(event) {
                log::warn!("Notification handler {token:?} failed: {err}");
            }
        }
    }
}

/// Guard that unsubscribes when dropped.
#[must_use = "dropping the disposer removes the subscription"]
pub struct Disposer<T> {
    registry: Arc<SubscriberRegistry<T>>,
    token: SubscriptionToken,
}

impl<T> Disposer<T> {
    pub fn new(registry: Arc<SubscriberRegistry<T>>, token: SubscriptionToken) -> Self {
        Self { registry, token }
    }
}

impl<T> Drop for Disposer<T> {
    fn drop(&mut self) {
        self.registry.unsubscribe(self.token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn subscribe_publish_unsubscribe() {
        let registry = SubscriberRegistry::<u32>::default();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_by_handler = Arc::clone(&seen);
        let token = registry.subscribe(move |event| {
            seen_by_handler.fetch_add(*event as usize, Ordering::SeqCst);
            Ok(())
        });

        registry.publish(&2);
        assert_eq!(2, seen.load(Ordering::SeqCst));

        assert!(registry.unsubscribe(token));
        registry.publish(&3);
        assert_eq!(2, seen.load(Ordering::SeqCst));
        assert!(!registry.unsubscribe(token));
    }

    #[test]
    fn failing_handlers_do_not_stop_the_fan_out() {
        let registry = SubscriberRegistry::<()>::default();
        let seen = Arc::new(AtomicUsize::new(0));

        registry.subscribe(|_| anyhow::bail!("broken pipe"));
        let seen_by_handler = Arc::clone(&seen);
        registry.subscribe(move |_| {
            seen_by_handler.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        registry.publish(&());
        assert_eq!(1, seen.load(Ordering::SeqCst));
    }

    #[test]
    fn disposer_unsubscribes_on_drop() {
        let registry = Arc::new(SubscriberRegistry::<()>::default());
        let token = registry.subscribe(|_| Ok(()));
        assert_eq!(1, registry.subscriber_count());
        {
            let _disposer = Disposer::new(Arc::clone(&registry), token);
        }
        assert_eq!(0, registry.subscriber_count());
    }
}
