use super::{filter_hotel, prelude::*};

/// Load a single hotel for the public detail view.
///
/// Non-visible hotels are indistinguishable from missing ones. A stay
/// period strips conflicting room types just like in search results.
pub fn load_public_hotel<R>(repo: &R, id: &Id, stay: Option<&StayPeriod>) -> Result<Hotel>
where
    R: HotelRepo,
{
    let hotel = repo.get_hotel(id.as_str())?;
    if !hotel.is_publicly_visible() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    filter_hotel(hotel, stay).ok_or(Error::Repo(RepoError::NotFound))
}

/// Load the listings of a merchant, regardless of publication status.
pub fn load_hotels_of_merchant<R>(repo: &R, user: &User) -> Result<Vec<Hotel>>
where
    R: HotelRepo,
{
    super::authorize_role(user, Role::Merchant)?;
    repo.hotels_created_by(user.id.as_str()).map_err(Into::into)
}

/// Load all listings awaiting an admin review decision.
pub fn load_pending_hotels<R>(repo: &R, user: &User) -> Result<Vec<Hotel>>
where
    R: HotelRepo,
{
    super::authorize_role(user, Role::Admin)?;
    let mut hotels = repo.all_hotels()?;
    hotels.retain(|h| h.status == PublicationStatus::Pending);
    Ok(hotels)
}
