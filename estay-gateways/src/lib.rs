//! In-process notification fan-out.
//!
//! Realtime delivery is best-effort: the durable message store is the
//! source of truth and a handler failure never propagates back into the
//! flow that triggered the notification.

mod notify;
mod registry;

pub use self::{
    notify::ChannelNotifier,
    registry::{Disposer, SubscriberRegistry, SubscriptionToken},
};
