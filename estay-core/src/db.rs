use crate::repositories::*;

pub trait Db: HotelRepo + RatingRepo + BookingRepo + MessageRepo + UserRepo {}

impl<T> Db for T where T: HotelRepo + RatingRepo + BookingRepo + MessageRepo + UserRepo {}
