use std::sync::Arc;

use anyhow::Result;

use estay_core::{
    entities::{Hotel, Message},
    gateways::notify::NotificationGateway,
};

use crate::registry::{Disposer, SubscriberRegistry};

/// Fans notifications out to in-process subscribers, e.g. the realtime
/// push channels of connected clients.
#[derive(Clone, Default)]
pub struct ChannelNotifier {
    messages: Arc<SubscriberRegistry<Message>>,
    reviews: Arc<SubscriberRegistry<Hotel>>,
}

impl ChannelNotifier {
    pub fn subscribe_messages<F>(&self, handler: F) -> Disposer<Message>
    where
        F: Fn(&Message) -> Result<()> + Send + Sync + 'static,
    {
        let token = self.messages.subscribe(handler);
        Disposer::new(Arc::clone(&self.messages), token)
    }

    pub fn subscribe_reviews<F>(&self, handler: F) -> Disposer<Hotel>
    where
        F: Fn(&Hotel) -> Result<()> + Send + Sync + 'static,
    {
        let token = self.reviews.subscribe(handler);
        Disposer::new(Arc::clone(&self.reviews), token)
    }
}

impl NotificationGateway for ChannelNotifier {
    fn message_created(&self, message: &Message) {
        log::debug!(
            "Notifying {} subscribers about message {}",
            self.messages.subscriber_count(),
            message.id
        );
        self.messages.publish(message);
    }

    fn hotel_reviewed(&self, hotel: &Hotel) {
        log::debug!(
            "Notifying {} subscribers about the review of hotel {}",
            self.reviews.subscriber_count(),
            hotel.id
        );
        self.reviews.publish(hotel);
    }
}
