use std::cmp::Ordering;

use crate::util::sort::{SortByDistanceTo, SortByRecommendation};

use super::{filter_hotel, prelude::*};

/// Explicit sort orders the caller may request. Absent an explicit order,
/// the recommendation sort applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
    Distance,
}

#[derive(Debug, Clone, Default)]
pub struct HotelQuery {
    pub city: Option<String>,
    pub keyword: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub star_rating: Option<u8>,
    pub amenities: Vec<String>,
    pub stay: Option<StayPeriod>,
    pub near: Option<MapPoint>,
    pub sort: Option<SortField>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone)]
pub struct HotelSearchResults {
    pub hotels: Vec<Hotel>,
    /// Number of matching hotels before pagination.
    pub total: usize,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn address_matches(address: &Address, text: &str) -> bool {
    [
        address.street.as_deref(),
        address.zip.as_deref(),
        address.city.as_deref(),
        address.country.as_deref(),
    ]
    .iter()
    .flatten()
    .any(|component| contains_ignore_case(component, text))
}

fn keyword_matches(hotel: &Hotel, keyword: &str) -> bool {
    contains_ignore_case(&hotel.name, keyword)
        || contains_ignore_case(&hotel.name_en, keyword)
        || contains_ignore_case(&hotel.description, keyword)
        || address_matches(&hotel.address, keyword)
}

/// Public hotel search.
///
/// Only publicly visible hotels are considered. When a stay period is
/// given, conflicting room types are stripped and fully-booked hotels are
/// dropped before pagination, so `total` counts bookable hotels only.
pub fn search_hotels<R>(repo: &R, query: HotelQuery) -> Result<HotelSearchResults>
where
    R: HotelRepo,
{
    let HotelQuery {
        city,
        keyword,
        min_price,
        max_price,
        star_rating,
        amenities,
        stay,
        near,
        sort,
        pagination,
    } = query;

    let mut hotels: Vec<_> = repo
        .visible_hotels()?
        .into_iter()
        .filter(|h| {
            city.as_deref()
                .map_or(true, |c| address_matches(&h.address, c))
        })
        .filter(|h| keyword.as_deref().map_or(true, |k| keyword_matches(h, k)))
        .filter(|h| min_price.map_or(true, |p| h.base_price >= p))
        .filter(|h| max_price.map_or(true, |p| h.base_price <= p))
        .filter(|h| star_rating.map_or(true, |s| u8::from(h.star_rating) == s))
        .filter(|h| h.has_all_amenities(amenities.iter().map(String::as_str)))
        .filter_map(|h| filter_hotel(h, stay.as_ref()))
        .collect();

    match sort {
        None => hotels.sort_by_recommendation(),
        Some(SortField::PriceAsc) => hotels.sort_by(|a, b| {
            a.base_price
                .partial_cmp(&b.base_price)
                .unwrap_or(Ordering::Equal)
        }),
        Some(SortField::PriceDesc) => hotels.sort_by(|a, b| {
            b.base_price
                .partial_cmp(&a.base_price)
                .unwrap_or(Ordering::Equal)
        }),
        Some(SortField::Rating) => hotels.sort_by(|a, b| {
            b.rating
                .average
                .partial_cmp(&a.rating.average)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
        Some(SortField::Newest) => hotels.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        Some(SortField::Distance) => match near {
            Some(origin) => hotels.sort_by_distance_to(origin),
            // Without an origin there is no distance to sort by.
            None => hotels.sort_by_recommendation(),
        },
    }

    let total = hotels.len();
    let offset = pagination.offset.unwrap_or(0) as usize;
    let hotels: Vec<_> = match pagination.limit {
        Some(limit) => hotels.into_iter().skip(offset).take(limit as usize).collect(),
        None => hotels.into_iter().skip(offset).collect(),
    };

    Ok(HotelSearchResults { hotels, total })
}
