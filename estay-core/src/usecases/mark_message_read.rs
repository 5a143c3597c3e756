use super::prelude::*;

/// Mark a message as read. Only the receiver may do that.
pub fn mark_message_read<R>(repo: &R, user: &User, id: &Id) -> Result<Message>
where
    R: MessageRepo,
{
    let mut message = repo.get_message(id.as_str())?;
    if message.receiver_id != user.id {
        return Err(Error::Forbidden);
    }
    if !message.is_read {
        message.is_read = true;
        repo.update_message(&message)?;
    }
    Ok(message)
}

/// Mark every unread message from one sender as read, e.g. when the
/// receiver opens the conversation. Returns the number of messages
/// affected.
pub fn mark_conversation_read<R>(repo: &R, user: &User, sender_id: &Id) -> Result<usize>
where
    R: MessageRepo,
{
    let mut count = 0;
    for mut message in repo.messages_of_user(user.id.as_str())? {
        if message.receiver_id == user.id && &message.sender_id == sender_id && !message.is_read {
            message.is_read = true;
            repo.update_message(&message)?;
            count += 1;
        }
    }
    Ok(count)
}
