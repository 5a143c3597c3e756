use num_derive::{FromPrimitive, ToPrimitive};

use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id       : Id,
    pub email    : String,
    pub username : String,
    pub role     : Role,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    #[default]
    Guest    = 0,
    Customer = 1,
    Merchant = 2,
    Admin    = 3,
}
