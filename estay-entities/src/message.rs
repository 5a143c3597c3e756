use crate::{id::*, time::*};

/// A chat message between a merchant and a customer.
///
/// Sender and receiver are always stable user ids. Denormalized display
/// names are a concern of the boundary layer, never of the domain.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id          : Id,
    pub sender_id   : Id,
    pub receiver_id : Id,
    pub content     : String,
    pub is_read     : bool,
    pub created_at  : Timestamp,
}

impl Message {
    /// The other participant from the point of view of `user_id`.
    pub fn counterpart_of(&self, user_id: &Id) -> Option<&Id> {
        if &self.sender_id == user_id {
            Some(&self.receiver_id)
        } else if &self.receiver_id == user_id {
            Some(&self.sender_id)
        } else {
            None
        }
    }

    pub fn involves(&self, user_id: &Id) -> bool {
        self.counterpart_of(user_id).is_some()
    }
}
