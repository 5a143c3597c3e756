use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub type PublicationStatusPrimitive = i16;

/// Lifecycle of a hotel listing.
///
/// Transitions are one-directional and admin-controlled, except for the
/// publish/offline toggle after approval. Editing a listing resubmits it,
/// which resets the status to `Pending`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PublicationStatus {
    Rejected  = -1,
    Pending   =  0,
    Approved  =  1,
    Published =  2,
    Offline   =  3,
}

impl PublicationStatus {
    /// Whether the listing shows up on the public search surface.
    pub fn is_publicly_visible(self) -> bool {
        matches!(self, Self::Approved | Self::Published)
    }

    /// Whether the transition `self -> next` is legal.
    pub fn allows_transition_to(self, next: Self) -> bool {
        use PublicationStatus::*;
        match (self, next) {
            // Admin review of a submitted listing.
            (Pending, Approved) | (Pending, Rejected) => true,
            // Merchant publish/offline toggle after approval.
            (Approved, Published) | (Published, Offline) | (Offline, Published) => true,
            // Resubmission after an edit.
            (Rejected, Pending) | (Approved, Pending) | (Published, Pending)
            | (Offline, Pending) => true,
            _ => false,
        }
    }

    pub const fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Error)]
#[error("Invalid publication status primitive: {0}")]
pub struct InvalidPublicationStatusPrimitive(PublicationStatusPrimitive);

impl TryFrom<i16> for PublicationStatus {
    type Error = InvalidPublicationStatusPrimitive;
    fn try_from(from: PublicationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidPublicationStatusPrimitive(from))
    }
}

impl From<PublicationStatus> for PublicationStatusPrimitive {
    fn from(from: PublicationStatus) -> Self {
        from.to_i16().expect("Publication status primitive")
    }
}
