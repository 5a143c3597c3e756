use super::*;

/// Store a chat message durably, then push it to subscribers.
///
/// The stored message is authoritative. A failed push is not an error;
/// the receiver picks the message up on the next poll.
pub fn send_message(
    connections: &mem::Connections,
    notify: &dyn NotificationGateway,
    sender: &User,
    new_message: usecases::NewMessage,
) -> Result<Message> {
    let message = {
        let db = connections.exclusive();
        usecases::send_message(&db, sender, new_message)?
    };
    notify.message_created(&message);
    Ok(message)
}
