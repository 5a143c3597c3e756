use super::{authorize_role, prelude::*};

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub receiver_id: Id,
    pub content: String,
}

/// Send a chat message to another user.
pub fn send_message<D: Db>(db: &D, sender: &User, new_message: NewMessage) -> Result<Message> {
    authorize_role(sender, Role::Customer)?;
    let NewMessage {
        receiver_id,
        content,
    } = new_message;
    if content.trim().is_empty() {
        return Err(Error::EmptyContent);
    }
    // The receiver must exist; sending to oneself is pointless.
    if receiver_id == sender.id || db.try_get_user(receiver_id.as_str())?.is_none() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    let message = Message {
        id: Id::new(),
        sender_id: sender.id.clone(),
        receiver_id,
        content,
        is_read: false,
        created_at: Timestamp::now(),
    };
    db.create_message(message.clone())?;
    Ok(message)
}
