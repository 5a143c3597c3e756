use estay_entities as e;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

use super::*;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid date: {0}")]
    Date(String),
    #[error("Invalid star rating")]
    StarRating,
    #[error("Invalid rating value")]
    RatingValue,
    #[error("The check-out date is not after the check-in date")]
    StayPeriod,
    #[error("Exactly one of the two occupancy dates is present")]
    IncompleteOccupancy,
}

impl From<e::stay::InvalidStayPeriod> for ConversionError {
    fn from(_: e::stay::InvalidStayPeriod) -> Self {
        Self::StayPeriod
    }
}

impl From<e::hotel::InvalidStarRating> for ConversionError {
    fn from(_: e::hotel::InvalidStarRating) -> Self {
        Self::StarRating
    }
}

fn parse_date(from: &str) -> Result<Date, ConversionError> {
    Date::parse(from, DATE_FORMAT).map_err(|_| ConversionError::Date(from.to_owned()))
}

fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).expect("formatted date")
}

impl From<e::address::Address> for Address {
    fn from(from: e::address::Address) -> Self {
        let e::address::Address {
            street,
            zip,
            city,
            country,
        } = from;
        Self {
            street,
            zip,
            city,
            country,
        }
    }
}

impl From<Address> for e::address::Address {
    fn from(from: Address) -> Self {
        let Address {
            street,
            zip,
            city,
            country,
        } = from;
        Self {
            street,
            zip,
            city,
            country,
        }
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<Coordinate> for e::geo::MapPoint {
    fn from(from: Coordinate) -> Self {
        e::geo::MapPoint::from_lat_lng_deg(from.lat, from.lng)
    }
}

impl From<e::publication::PublicationStatus> for PublicationStatus {
    fn from(from: e::publication::PublicationStatus) -> Self {
        use e::publication::PublicationStatus::*;
        match from {
            Rejected => PublicationStatus::Rejected,
            Pending => PublicationStatus::Pending,
            Approved => PublicationStatus::Approved,
            Published => PublicationStatus::Published,
            Offline => PublicationStatus::Offline,
        }
    }
}

impl From<PublicationStatus> for e::publication::PublicationStatus {
    fn from(from: PublicationStatus) -> Self {
        use e::publication::PublicationStatus::*;
        match from {
            PublicationStatus::Rejected => Rejected,
            PublicationStatus::Pending => Pending,
            PublicationStatus::Approved => Approved,
            PublicationStatus::Published => Published,
            PublicationStatus::Offline => Offline,
        }
    }
}

impl From<e::booking::BookingStatus> for BookingStatus {
    fn from(from: e::booking::BookingStatus) -> Self {
        use e::booking::BookingStatus::*;
        match from {
            Cancelled => BookingStatus::Cancelled,
            Pending => BookingStatus::Pending,
            Confirmed => BookingStatus::Confirmed,
            Completed => BookingStatus::Completed,
        }
    }
}

impl From<BookingStatus> for e::booking::BookingStatus {
    fn from(from: BookingStatus) -> Self {
        use e::booking::BookingStatus::*;
        match from {
            BookingStatus::Cancelled => Cancelled,
            BookingStatus::Pending => Pending,
            BookingStatus::Confirmed => Confirmed,
            BookingStatus::Completed => Completed,
        }
    }
}

impl From<e::hotel::Occupancy> for Occupancy {
    fn from(from: e::hotel::Occupancy) -> Self {
        let e::hotel::Occupancy {
            period,
            booking_id,
            customer_id,
        } = from;
        Self {
            check_in: Some(format_date(period.check_in())),
            check_out: Some(format_date(period.check_out())),
            booking_id: Some(booking_id.into()),
            customer_id: Some(customer_id.into()),
        }
    }
}

// An occupancy record with only one date must never be interpreted as
// available or unavailable, it is rejected instead.
impl TryFrom<Occupancy> for Option<e::hotel::Occupancy> {
    type Error = ConversionError;
    fn try_from(from: Occupancy) -> Result<Self, Self::Error> {
        let Occupancy {
            check_in,
            check_out,
            booking_id,
            customer_id,
        } = from;
        match (check_in, check_out) {
            (None, None) => Ok(None),
            (Some(check_in), Some(check_out)) => {
                let period =
                    e::stay::StayPeriod::new(parse_date(&check_in)?, parse_date(&check_out)?)?;
                Ok(Some(e::hotel::Occupancy {
                    period,
                    booking_id: booking_id.unwrap_or_default().into(),
                    customer_id: customer_id.unwrap_or_default().into(),
                }))
            }
            _ => Err(ConversionError::IncompleteOccupancy),
        }
    }
}

impl From<e::hotel::RoomType> for RoomType {
    fn from(from: e::hotel::RoomType) -> Self {
        let e::hotel::RoomType {
            name,
            nightly_price,
            description,
            occupied,
        } = from;
        Self {
            name,
            nightly_price,
            description,
            occupied: occupied.map(Into::into),
        }
    }
}

impl TryFrom<RoomType> for e::hotel::RoomType {
    type Error = ConversionError;
    fn try_from(from: RoomType) -> Result<Self, Self::Error> {
        let RoomType {
            name,
            nightly_price,
            description,
            occupied,
        } = from;
        let occupied = match occupied {
            None => None,
            Some(occupancy) => occupancy.try_into()?,
        };
        Ok(Self {
            name,
            nightly_price,
            description,
            occupied,
        })
    }
}

impl From<e::hotel::Hotel> for Hotel {
    fn from(from: e::hotel::Hotel) -> Self {
        let e::hotel::Hotel {
            id,
            name,
            name_en,
            address,
            pos,
            star_rating,
            base_price,
            opening_date,
            description,
            status,
            room_types,
            amenities,
            images,
            main_image,
            reject_reason,
            created_by,
            created_at,
            rating,
        } = from;
        Self {
            id: id.into(),
            name,
            name_en,
            address: address.into(),
            lat: pos.lat(),
            lng: pos.lng(),
            star_rating: star_rating.into(),
            base_price,
            opening_date: format_date(opening_date),
            description,
            status: status.into(),
            room_types: room_types.into_iter().map(Into::into).collect(),
            amenities,
            images,
            main_image,
            reject_reason,
            created_by: created_by.into(),
            created_at: created_at.into_milliseconds(),
            avg_rating: rating.average.map(Into::into),
            rating_count: rating.count,
        }
    }
}

impl TryFrom<Hotel> for e::hotel::Hotel {
    type Error = ConversionError;
    fn try_from(from: Hotel) -> Result<Self, Self::Error> {
        let Hotel {
            id,
            name,
            name_en,
            address,
            lat,
            lng,
            star_rating,
            base_price,
            opening_date,
            description,
            status,
            room_types,
            amenities,
            images,
            main_image,
            reject_reason,
            created_by,
            created_at,
            avg_rating,
            rating_count,
        } = from;
        let room_types = room_types
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: id.into(),
            name,
            name_en,
            address: address.into(),
            pos: e::geo::MapPoint::from_lat_lng_deg(lat, lng),
            star_rating: star_rating.try_into()?,
            base_price,
            opening_date: parse_date(&opening_date)?,
            description,
            status: status.into(),
            room_types,
            amenities,
            images,
            main_image,
            reject_reason,
            created_by: created_by.into(),
            created_at: e::time::Timestamp::from_milliseconds(created_at),
            rating: e::rating::RatingAggregate {
                average: avg_rating.map(Into::into),
                count: rating_count,
            },
        })
    }
}

impl From<e::rating::Rating> for Rating {
    fn from(from: e::rating::Rating) -> Self {
        let e::rating::Rating {
            id,
            hotel_id,
            user_id,
            created_at,
            value,
            comment,
        } = from;
        Self {
            id: id.into(),
            hotel_id: hotel_id.into(),
            user_id: user_id.into(),
            value: value.into(),
            comment,
            created_at: created_at.into_milliseconds(),
        }
    }
}

impl TryFrom<Rating> for e::rating::Rating {
    type Error = ConversionError;
    fn try_from(from: Rating) -> Result<Self, Self::Error> {
        let Rating {
            id,
            hotel_id,
            user_id,
            value,
            comment,
            created_at,
        } = from;
        let value = e::rating::RatingValue::from(value);
        if !value.is_valid() {
            return Err(ConversionError::RatingValue);
        }
        Ok(Self {
            id: id.into(),
            hotel_id: hotel_id.into(),
            user_id: user_id.into(),
            created_at: e::time::Timestamp::from_milliseconds(created_at),
            value,
            comment,
        })
    }
}

impl From<e::booking::Booking> for Booking {
    fn from(from: e::booking::Booking) -> Self {
        let e::booking::Booking {
            id,
            customer_id,
            hotel_id,
            stay,
            room_type,
            room_count,
            total_price,
            status,
            created_at,
        } = from;
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            hotel_id: hotel_id.into(),
            check_in: format_date(stay.check_in()),
            check_out: format_date(stay.check_out()),
            room_type,
            room_count,
            total_price,
            status: status.into(),
            created_at: created_at.into_milliseconds(),
        }
    }
}

impl TryFrom<Booking> for e::booking::Booking {
    type Error = ConversionError;
    fn try_from(from: Booking) -> Result<Self, Self::Error> {
        let Booking {
            id,
            customer_id,
            hotel_id,
            check_in,
            check_out,
            room_type,
            room_count,
            total_price,
            status,
            created_at,
        } = from;
        let stay = e::stay::StayPeriod::new(parse_date(&check_in)?, parse_date(&check_out)?)?;
        Ok(Self {
            id: id.into(),
            customer_id: customer_id.into(),
            hotel_id: hotel_id.into(),
            stay,
            room_type,
            room_count,
            total_price,
            status: status.into(),
            created_at: e::time::Timestamp::from_milliseconds(created_at),
        })
    }
}

impl From<e::message::Message> for Message {
    fn from(from: e::message::Message) -> Self {
        let e::message::Message {
            id,
            sender_id,
            receiver_id,
            content,
            is_read,
            created_at,
        } = from;
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            sender_name: None,
            receiver_name: None,
            content,
            is_read,
            created_at: created_at.into_milliseconds(),
        }
    }
}

impl From<Message> for e::message::Message {
    fn from(from: Message) -> Self {
        let Message {
            id,
            sender_id,
            receiver_id,
            sender_name: _,
            receiver_name: _,
            content,
            is_read,
            created_at,
        } = from;
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            content,
            is_read,
            created_at: e::time::Timestamp::from_milliseconds(created_at),
        }
    }
}
