//! # estay-core
//!
//! Business logic of eStay: repository traits, use cases, the room
//! availability filter and the recommendation ranking.

pub mod availability;
pub mod db;
pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use estay_entities::{
        address::*, booking::*, geo::*, hotel::*, id::*, message::*, publication::*, rating::*,
        stay::*, time::*, user::*,
    };
}

pub use self::repositories::Error as RepoError;
