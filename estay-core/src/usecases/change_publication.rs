use super::{authorize_hotel_owner, prelude::*};

/// Merchant publish/offline toggle after approval.
pub fn change_publication<R>(
    repo: &R,
    user: &User,
    id: &Id,
    status: PublicationStatus,
) -> Result<Hotel>
where
    R: HotelRepo,
{
    let hotel = repo.get_hotel(id.as_str())?;
    authorize_hotel_owner(user, &hotel)?;

    if !matches!(
        status,
        PublicationStatus::Published | PublicationStatus::Offline
    ) {
        return Err(Error::StatusTransition);
    }
    if !hotel.status.allows_transition_to(status) {
        return Err(Error::StatusTransition);
    }
    log::info!(
        "Changing publication status of hotel {} from {:?} to {:?}",
        id,
        hotel.status,
        status
    );
    repo.change_publication_status(id.as_str(), status, None)?;
    repo.get_hotel(id.as_str()).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{new_user, MockDb};
    use super::*;
    use estay_entities::builders::*;

    fn hotel_with_status(status: PublicationStatus) -> Hotel {
        Hotel::build().id("h").created_by("m").status(status).finish()
    }

    #[test]
    fn approved_listing_can_be_published() {
        let db = MockDb::default();
        let merchant = new_user("m", Role::Merchant);
        db.hotels
            .borrow_mut()
            .push(hotel_with_status(PublicationStatus::Approved));

        let hotel =
            change_publication(&db, &merchant, &"h".into(), PublicationStatus::Published)
                .unwrap();
        assert_eq!(PublicationStatus::Published, hotel.status);
    }

    #[test]
    fn published_listing_toggles_offline_and_back() {
        let db = MockDb::default();
        let merchant = new_user("m", Role::Merchant);
        db.hotels
            .borrow_mut()
            .push(hotel_with_status(PublicationStatus::Published));

        let hotel =
            change_publication(&db, &merchant, &"h".into(), PublicationStatus::Offline).unwrap();
        assert_eq!(PublicationStatus::Offline, hotel.status);
        let hotel =
            change_publication(&db, &merchant, &"h".into(), PublicationStatus::Published)
                .unwrap();
        assert_eq!(PublicationStatus::Published, hotel.status);
    }

    #[test]
    fn pending_listing_cannot_be_published() {
        let db = MockDb::default();
        let merchant = new_user("m", Role::Merchant);
        db.hotels
            .borrow_mut()
            .push(hotel_with_status(PublicationStatus::Pending));

        assert!(matches!(
            change_publication(&db, &merchant, &"h".into(), PublicationStatus::Published),
            Err(Error::StatusTransition)
        ));
    }

    #[test]
    fn toggle_cannot_be_used_for_review_decisions() {
        let db = MockDb::default();
        let merchant = new_user("m", Role::Merchant);
        db.hotels
            .borrow_mut()
            .push(hotel_with_status(PublicationStatus::Pending));

        assert!(matches!(
            change_publication(&db, &merchant, &"h".into(), PublicationStatus::Approved),
            Err(Error::StatusTransition)
        ));
    }
}
