#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # estay-entities
//!
//! Reusable, agnostic domain entities for eStay.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod booking;
pub mod geo;
pub mod hotel;
pub mod id;
pub mod message;
pub mod publication;
pub mod rating;
pub mod stay;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
