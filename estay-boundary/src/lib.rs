//! # estay-boundary
//!
//! Serializable data structures for the external API surface.
//!
//! Conventions: dates are `YYYY-MM-DD` strings, timestamps are epoch
//! milliseconds, enums are snake_case strings. Display names of chat
//! participants are denormalized here and only here; the domain layer
//! works with stable ids.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use self::conv::ConversionError;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default, PartialEq))]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Rejected,
    Pending,
    Approved,
    Published,
    Offline,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Cancelled,
    Pending,
    Confirmed,
    Completed,
}

/// The single booked date range of a room type.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Occupancy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RoomType {
    pub name: String,
    pub nightly_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupied: Option<Occupancy>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Hotel {
    pub id            : String,
    pub name          : String,
    pub name_en       : String,
    pub address       : Address,
    pub lat           : f64,
    pub lng           : f64,
    pub star_rating   : u8,
    pub base_price    : f64,
    pub opening_date  : String,
    pub description   : String,
    pub status        : PublicationStatus,
    pub room_types    : Vec<RoomType>,
    pub amenities     : Vec<String>,
    pub images        : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_reason : Option<String>,
    pub created_by    : String,
    pub created_at    : i64,
    pub avg_rating    : Option<f64>,
    pub rating_count  : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Rating {
    pub id: String,
    pub hotel_id: String,
    pub user_id: String,
    pub value: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewRating {
    pub hotel_id: String,
    pub value: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Booking {
    pub id          : String,
    pub customer_id : String,
    pub hotel_id    : String,
    pub check_in    : String,
    pub check_out   : String,
    pub room_type   : String,
    pub room_count  : u32,
    pub total_price : f64,
    pub status      : BookingStatus,
    pub created_at  : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewBooking {
    pub hotel_id: String,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    pub room_count: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
    pub content: String,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Conversation {
    pub counterpart_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterpart_name: Option<String>,
    pub last_message: Message,
    pub unread_count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
    Distance,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchResponse {
    pub hotels: Vec<Hotel>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publication_status_uses_snake_case_strings() {
        assert_eq!(
            "\"published\"",
            serde_json::to_string(&PublicationStatus::Published).unwrap()
        );
        let status: PublicationStatus = serde_json::from_str("\"pending\"").unwrap();
        assert!(matches!(status, PublicationStatus::Pending));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let query = SearchQuery {
            city: Some("Shanghai".into()),
            ..Default::default()
        };
        assert_eq!("{\"city\":\"Shanghai\"}", serde_json::to_string(&query).unwrap());
    }
}
