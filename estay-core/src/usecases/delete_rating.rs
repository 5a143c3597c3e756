use super::prelude::*;

/// Remove a rating. Allowed for the author and for admins.
///
/// Returns the id of the affected hotel so the caller can recompute its
/// rating aggregate in the same transaction.
pub fn delete_rating<D: Db>(db: &D, user: &User, id: &Id) -> Result<Id> {
    let rating = db.get_rating(id.as_str())?;
    if rating.user_id != user.id && user.role != Role::Admin {
        return Err(Error::Forbidden);
    }
    db.delete_rating(id.as_str())?;
    Ok(rating.hotel_id)
}
