use super::prelude::*;

#[derive(Debug, Clone)]
pub struct UpdateRating {
    pub value: RatingValue,
    pub comment: Option<String>,
}

/// Replace the score and comment of an existing rating.
///
/// Only the author may edit a rating. The creation timestamp is kept.
pub fn update_rating<D: Db>(db: &D, user: &User, id: &Id, update: UpdateRating) -> Result<Rating> {
    let UpdateRating { value, comment } = update;
    if !value.is_valid() {
        return Err(Error::RatingValue);
    }
    let mut rating = db.get_rating(id.as_str())?;
    if rating.user_id != user.id {
        return Err(Error::Forbidden);
    }
    rating.value = value;
    rating.comment = comment;
    db.update_rating(&rating)?;
    Ok(rating)
}
