use crate::entities::{Hotel, Message};

/// Best-effort realtime notifications.
///
/// Implementations must not block and must not fail the calling flow:
/// messages are durably stored before any notification is attempted, so a
/// missed push only delays delivery until the next poll.
pub trait NotificationGateway {
    fn message_created(&self, message: &Message);
    fn hotel_reviewed(&self, hotel: &Hotel);
}
