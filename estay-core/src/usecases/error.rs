use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Invalid star rating")]
    StarRating,
    #[error("Invalid price")]
    Price,
    #[error("The check-out date is not after the check-in date")]
    StayPeriod,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("The hotel has already been rated by this user")]
    AlreadyRated,
    #[error("The hotel is not open for booking")]
    NotBookable,
    #[error("The requested room type does not exist")]
    RoomTypeNotFound,
    #[error("The room is occupied for the requested dates")]
    RoomOccupied,
    #[error("Invalid room count")]
    RoomCount,
    #[error("The booking is not active")]
    BookingNotActive,
    #[error("Empty message content")]
    EmptyContent,
    #[error("Illegal publication status transition")]
    StatusTransition,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Missing id list")]
    EmptyIdList,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<estay_entities::stay::InvalidStayPeriod> for Error {
    fn from(_: estay_entities::stay::InvalidStayPeriod) -> Self {
        Self::StayPeriod
    }
}

impl From<estay_entities::hotel::InvalidStarRating> for Error {
    fn from(_: estay_entities::hotel::InvalidStarRating) -> Self {
        Self::StarRating
    }
}
