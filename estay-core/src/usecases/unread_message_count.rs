use super::prelude::*;

/// Number of unread messages in the user's inbox, e.g. for a badge.
pub fn unread_message_count<R>(repo: &R, user: &User) -> Result<u64>
where
    R: MessageRepo,
{
    repo.count_unread_messages(user.id.as_str())
        .map_err(Into::into)
}
