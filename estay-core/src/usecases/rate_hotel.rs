use super::prelude::*;

#[derive(Debug, Clone)]
pub struct RateHotel {
    pub hotel_id: Id,
    pub user_id: Id,
    pub value: RatingValue,
    pub comment: Option<String>,
}

/// A new rating that has been validated but not stored yet.
///
/// Splitting preparation from storage lets the caller wrap the write and
/// the aggregate recomputation into a single transaction.
pub struct Storable(Rating);

impl Storable {
    pub fn hotel_id(&self) -> &Id {
        &self.0.hotel_id
    }
}

pub fn prepare_new_rating<D: Db>(db: &D, rate_hotel: RateHotel) -> Result<Storable> {
    let RateHotel {
        hotel_id,
        user_id,
        value,
        comment,
    } = rate_hotel;
    if !value.is_valid() {
        return Err(Error::RatingValue);
    }
    let hotel = db.get_hotel(hotel_id.as_str())?;
    if !hotel.is_publicly_visible() {
        return Err(Error::Repo(RepoError::NotFound));
    }
    // One rating per (hotel, user) pair.
    if db
        .rating_of_user_for_hotel(user_id.as_str(), hotel_id.as_str())?
        .is_some()
    {
        return Err(Error::AlreadyRated);
    }
    Ok(Storable(Rating {
        id: Id::new(),
        hotel_id,
        user_id,
        created_at: Timestamp::now(),
        value,
        comment,
    }))
}

pub fn store_new_rating<D: Db>(db: &D, storable: Storable) -> Result<Rating> {
    let Storable(rating) = storable;
    debug_assert!(rating.value.is_valid());
    db.create_rating(rating.clone())?;
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use estay_entities::builders::*;

    fn published_hotel(id: &str) -> Hotel {
        Hotel::build()
            .id(id)
            .status(PublicationStatus::Published)
            .finish()
    }

    fn rate(hotel_id: &str, user_id: &str, value: i8) -> RateHotel {
        RateHotel {
            hotel_id: hotel_id.into(),
            user_id: user_id.into(),
            value: value.into(),
            comment: None,
        }
    }

    #[test]
    fn rate_a_published_hotel() {
        let db = MockDb::default();
        db.hotels.borrow_mut().push(published_hotel("h"));

        let storable = prepare_new_rating(&db, rate("h", "c", 4)).unwrap();
        let rating = store_new_rating(&db, storable).unwrap();
        assert_eq!(Id::from("h"), rating.hotel_id);
        assert_eq!(RatingValue::from(4), rating.value);
        assert_eq!(1, db.ratings.borrow().len());
    }

    #[test]
    fn rating_twice_is_rejected() {
        let db = MockDb::default();
        db.hotels.borrow_mut().push(published_hotel("h"));

        let storable = prepare_new_rating(&db, rate("h", "c", 4)).unwrap();
        store_new_rating(&db, storable).unwrap();

        assert!(matches!(
            prepare_new_rating(&db, rate("h", "c", 5)),
            Err(Error::AlreadyRated)
        ));
        // A different user may still rate the same hotel
        assert!(prepare_new_rating(&db, rate("h", "other", 5)).is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let db = MockDb::default();
        db.hotels.borrow_mut().push(published_hotel("h"));
        assert!(matches!(
            prepare_new_rating(&db, rate("h", "c", 6)),
            Err(Error::RatingValue)
        ));
        assert!(matches!(
            prepare_new_rating(&db, rate("h", "c", -1)),
            Err(Error::RatingValue)
        ));
    }

    #[test]
    fn hidden_hotels_cannot_be_rated() {
        let db = MockDb::default();
        db.hotels.borrow_mut().push(
            Hotel::build()
                .id("h")
                .status(PublicationStatus::Pending)
                .finish(),
        );
        assert!(matches!(
            prepare_new_rating(&db, rate("h", "c", 4)),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
