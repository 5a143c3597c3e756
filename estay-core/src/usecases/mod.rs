mod aggregate_rating;
mod authorize;
mod cancel_booking;
mod change_publication;
mod conversations;
mod create_booking;
mod create_new_hotel;
mod delete_rating;
mod error;
mod filter_hotel;
mod load_hotels;
mod mark_message_read;
mod query_bookings;
mod rate_hotel;
mod review_hotels;
mod search_hotels;
mod send_message;
mod unread_message_count;
mod update_hotel;
mod update_rating;

#[cfg(test)]
pub mod tests;

pub use self::{
    aggregate_rating::*, authorize::*, cancel_booking::*, change_publication::*,
    conversations::*, create_booking::*, create_new_hotel::*, delete_rating::*, error::Error,
    filter_hotel::*, load_hotels::*, mark_message_read::*, query_bookings::*, rate_hotel::*,
    review_hotels::*, search_hotels::*, send_message::*, unread_message_count::*,
    update_hotel::*, update_rating::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*, RepoError};
}
