use super::{authorize_role, prelude::*};

/// An admin review decision for one or more pending listings.
#[derive(Debug, Clone)]
pub struct HotelReview {
    pub reviewer: User,
    pub status: PublicationStatus,
    pub reject_reason: Option<String>,
}

pub fn review_hotels<R>(repo: &R, ids: &[&str], review: HotelReview) -> Result<usize>
where
    R: HotelRepo,
{
    let HotelReview {
        reviewer,
        status,
        reject_reason,
    } = review;
    authorize_role(&reviewer, Role::Admin)?;
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    if !matches!(
        status,
        PublicationStatus::Approved | PublicationStatus::Rejected
    ) {
        return Err(Error::StatusTransition);
    }
    log::info!(
        "Changing publication status of {} hotels to {}",
        ids.len(),
        PublicationStatusPrimitive::from(status),
    );
    let mut count = 0;
    for id in ids {
        let hotel = repo.get_hotel(id)?;
        if !hotel.status.allows_transition_to(status) {
            return Err(Error::StatusTransition);
        }
        let reason = match status {
            // Approval wipes an earlier reject reason.
            PublicationStatus::Approved => None,
            _ => reject_reason.as_deref(),
        };
        repo.change_publication_status(id, status, reason)?;
        count += 1;
    }
    log::info!(
        "Changed publication status of {} hotels to {}",
        count,
        PublicationStatusPrimitive::from(status)
    );
    Ok(count)
}
