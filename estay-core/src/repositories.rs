// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait HotelRepo {
    fn create_hotel(&self, hotel: Hotel) -> Result<()>;
    fn update_hotel(&self, hotel: &Hotel) -> Result<()>;

    fn get_hotel(&self, id: &str) -> Result<Hotel>;
    fn all_hotels(&self) -> Result<Vec<Hotel>>;
    fn count_hotels(&self) -> Result<usize>;

    fn hotels_created_by(&self, user_id: &str) -> Result<Vec<Hotel>>;

    // Only hotels whose publication status is publicly visible
    fn visible_hotels(&self) -> Result<Vec<Hotel>>;

    fn change_publication_status(
        &self,
        id: &str,
        status: PublicationStatus,
        reject_reason: Option<&str>,
    ) -> Result<()>;

    // The stored aggregate is derived data and updated separately
    // from the rest of the hotel record.
    fn update_rating_aggregate(&self, id: &str, aggregate: RatingAggregate) -> Result<()>;
}

pub trait RatingRepo {
    fn create_rating(&self, rating: Rating) -> Result<()>;
    fn update_rating(&self, rating: &Rating) -> Result<()>;
    fn delete_rating(&self, id: &str) -> Result<()>;

    fn get_rating(&self, id: &str) -> Result<Rating>;
    fn ratings_of_hotel(&self, hotel_id: &str) -> Result<Vec<Rating>>;
    fn rating_of_user_for_hotel(&self, user_id: &str, hotel_id: &str)
        -> Result<Option<Rating>>;
}

pub trait BookingRepo {
    fn create_booking(&self, booking: Booking) -> Result<()>;
    fn update_booking(&self, booking: &Booking) -> Result<()>;

    fn get_booking(&self, id: &str) -> Result<Booking>;
    fn bookings_of_customer(&self, customer_id: &str) -> Result<Vec<Booking>>;
    fn bookings_of_hotel(&self, hotel_id: &str) -> Result<Vec<Booking>>;
}

pub trait MessageRepo {
    fn create_message(&self, message: Message) -> Result<()>;
    fn update_message(&self, message: &Message) -> Result<()>;

    fn get_message(&self, id: &str) -> Result<Message>;

    // All messages the user sent or received
    fn messages_of_user(&self, user_id: &str) -> Result<Vec<Message>>;
    fn count_unread_messages(&self, receiver_id: &str) -> Result<u64>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}
