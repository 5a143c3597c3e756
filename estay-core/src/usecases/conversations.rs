use std::collections::HashMap;

use super::prelude::*;

/// One chat thread between the user and a counterpart, summarized for the
/// conversation list.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub counterpart_id: Id,
    pub last_message: Message,
    pub unread_count: u64,
}

/// Group the user's messages by counterpart, newest conversation first.
pub fn conversations_of_user<R>(repo: &R, user: &User) -> Result<Vec<Conversation>>
where
    R: MessageRepo,
{
    let mut by_counterpart: HashMap<Id, Conversation> = HashMap::new();
    for message in repo.messages_of_user(user.id.as_str())? {
        let Some(counterpart_id) = message.counterpart_of(&user.id).cloned() else {
            continue;
        };
        let unread = u64::from(message.receiver_id == user.id && !message.is_read);
        by_counterpart
            .entry(counterpart_id.clone())
            .and_modify(|conversation| {
                conversation.unread_count += unread;
                if message.created_at > conversation.last_message.created_at {
                    conversation.last_message = message.clone();
                }
            })
            .or_insert_with(|| Conversation {
                counterpart_id,
                last_message: message,
                unread_count: unread,
            });
    }
    let mut conversations: Vec<_> = by_counterpart.into_values().collect();
    conversations.sort_by(|a, b| b.last_message.created_at.cmp(&a.last_message.created_at));
    Ok(conversations)
}
