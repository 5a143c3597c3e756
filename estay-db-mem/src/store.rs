use estay_core::entities::*;

/// The complete dataset. Cheap to clone for transaction snapshots as long
/// as the dataset stays small.
#[derive(Debug, Default, Clone)]
pub struct Store {
    pub(crate) hotels: Vec<Hotel>,
    pub(crate) ratings: Vec<Rating>,
    pub(crate) bookings: Vec<Booking>,
    pub(crate) messages: Vec<Message>,
    pub(crate) users: Vec<User>,
}

impl Store {
    pub fn record_counts(&self) -> StoreStats {
        StoreStats {
            hotels: self.hotels.len(),
            ratings: self.ratings.len(),
            bookings: self.bookings.len(),
            messages: self.messages.len(),
            users: self.users.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub hotels: usize,
    pub ratings: usize,
    pub bookings: usize,
    pub messages: usize,
    pub users: usize,
}
