//! Transactional flows on top of the use cases.
//!
//! Every flow opens an exclusive connection and wraps its writes into a
//! single transaction, so derived data (rating aggregates, room
//! occupancies) never diverges from the records it is derived from.

#[macro_use]
extern crate log;

mod cancel_booking;
mod change_publication;
mod create_booking;
mod create_hotel;
mod create_rating;
mod delete_rating;
mod review_hotels;
mod send_message;
mod update_hotel;
mod update_rating;

pub mod prelude {
    pub use super::{
        cancel_booking::*, change_publication::*, create_booking::*, create_hotel::*,
        create_rating::*, delete_rating::*, review_hotels::*, send_message::*, update_hotel::*,
        update_rating::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use estay_core::{
    db::*, entities::*, gateways::notify::NotificationGateway, repositories::*, usecases,
};
pub(crate) use estay_db_mem::TransactionError;

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod mem {
    pub use estay_db_mem::Connections;
}

pub(crate) const MAX_CONFLICT_RETRIES: usize = 3;

/// Re-run a transaction that lost a conflict instead of surfacing a
/// partial update to the caller.
pub(crate) fn run_with_retry<T>(
    mut attempt: impl FnMut() -> std::result::Result<T, TransactionError>,
) -> std::result::Result<T, TransactionError> {
    let mut attempts = 0;
    loop {
        match attempt() {
            Err(TransactionError::Conflict) if attempts < MAX_CONFLICT_RETRIES => {
                attempts += 1;
                warn!("Transaction lost a conflict, retrying ({attempts}/{MAX_CONFLICT_RETRIES})");
            }
            result => return result,
        }
    }
}
