use std::cell::RefCell;

use time::macros::date;

use estay_entities::builders::*;

use super::{
    error::{AppError, BError},
    prelude::*,
    *,
};

fn new_user(id: &str, role: Role) -> User {
    User {
        id: id.into(),
        email: format!("{id}@example.com"),
        username: id.into(),
        role,
    }
}

#[derive(Default)]
struct DummyNotifyGW {
    reviewed_hotels: RefCell<Vec<Id>>,
    sent_messages: RefCell<Vec<Id>>,
}

impl NotificationGateway for DummyNotifyGW {
    fn message_created(&self, message: &Message) {
        self.sent_messages.borrow_mut().push(message.id.clone());
    }

    fn hotel_reviewed(&self, hotel: &Hotel) {
        self.reviewed_hotels.borrow_mut().push(hotel.id.clone());
    }
}

fn connections_with_hotel(status: PublicationStatus) -> mem::Connections {
    let connections = mem::Connections::init();
    connections
        .exclusive()
        .create_hotel(
            Hotel::build()
                .id("h")
                .name("Sunrise Palace")
                .created_by("m")
                .status(status)
                .room_type("standard", 280.0)
                .finish(),
        )
        .unwrap();
    connections
}

fn rate(user_id: &str, value: i8) -> usecases::RateHotel {
    usecases::RateHotel {
        hotel_id: "h".into(),
        user_id: user_id.into(),
        value: value.into(),
        comment: None,
    }
}

#[test]
fn rating_and_aggregate_are_written_together() {
    let connections = connections_with_hotel(PublicationStatus::Published);

    create_rating(&connections, rate("u1", 4)).unwrap();
    create_rating(&connections, rate("u2", 5)).unwrap();

    let hotel = connections.exclusive().get_hotel("h").unwrap();
    assert_eq!(Some(AvgRatingValue::from(4.5)), hotel.rating.average);
    assert_eq!(2, hotel.rating.count);
}

#[test]
fn duplicate_rating_leaves_no_trace() {
    let connections = connections_with_hotel(PublicationStatus::Published);
    create_rating(&connections, rate("u1", 4)).unwrap();

    assert!(matches!(
        create_rating(&connections, rate("u1", 5)),
        Err(AppError::Business(BError::Parameter(
            usecases::Error::AlreadyRated
        )))
    ));

    let db = connections.exclusive();
    assert_eq!(1, db.ratings_of_hotel("h").unwrap().len());
    let hotel = db.get_hotel("h").unwrap();
    assert_eq!(Some(AvgRatingValue::from(4.0)), hotel.rating.average);
    assert_eq!(1, hotel.rating.count);
}

#[test]
fn updating_a_rating_moves_the_aggregate() {
    let connections = connections_with_hotel(PublicationStatus::Published);
    let rating = create_rating(&connections, rate("u1", 2)).unwrap();

    let author = new_user("u1", Role::Customer);
    update_rating(
        &connections,
        &author,
        &rating.id,
        usecases::UpdateRating {
            value: 5.into(),
            comment: None,
        },
    )
    .unwrap();

    let hotel = connections.exclusive().get_hotel("h").unwrap();
    assert_eq!(Some(AvgRatingValue::from(5.0)), hotel.rating.average);
}

#[test]
fn deleting_the_last_rating_empties_the_aggregate() {
    let connections = connections_with_hotel(PublicationStatus::Published);
    let rating = create_rating(&connections, rate("u1", 4)).unwrap();

    let author = new_user("u1", Role::Customer);
    delete_rating(&connections, &author, &rating.id).unwrap();

    let hotel = connections.exclusive().get_hotel("h").unwrap();
    assert_eq!(None, hotel.rating.average);
    assert_eq!(0, hotel.rating.count);
}

#[test]
fn booking_occupies_and_cancelling_frees_the_room() {
    let connections = connections_with_hotel(PublicationStatus::Published);
    let customer = new_user("c", Role::Customer);

    let stay = StayPeriod::new(date!(2026 - 02 - 24), date!(2026 - 02 - 26)).unwrap();
    let booking = create_booking(
        &connections,
        &customer,
        usecases::NewBooking {
            hotel_id: "h".into(),
            room_type: "standard".into(),
            stay,
            room_count: 1,
        },
    )
    .unwrap();
    {
        let hotel = connections.exclusive().get_hotel("h").unwrap();
        assert!(hotel.room_type("standard").unwrap().occupied.is_some());
    }

    cancel_booking(&connections, &customer, &booking.id).unwrap();
    let hotel = connections.exclusive().get_hotel("h").unwrap();
    assert!(hotel.room_type("standard").unwrap().occupied.is_none());
}

#[test]
fn review_flow_notifies_after_commit() {
    let connections = connections_with_hotel(PublicationStatus::Pending);
    let notify = DummyNotifyGW::default();

    let review = usecases::HotelReview {
        reviewer: new_user("admin", Role::Admin),
        status: PublicationStatus::Approved,
        reject_reason: None,
    };
    let count = review_hotels(&connections, &notify, &["h"], review).unwrap();
    assert_eq!(1, count);
    assert_eq!(vec![Id::from("h")], *notify.reviewed_hotels.borrow());
    assert_eq!(
        PublicationStatus::Approved,
        connections.exclusive().get_hotel("h").unwrap().status
    );
}

#[test]
fn failed_review_does_not_notify() {
    let connections = connections_with_hotel(PublicationStatus::Published);
    let notify = DummyNotifyGW::default();

    let review = usecases::HotelReview {
        reviewer: new_user("admin", Role::Admin),
        status: PublicationStatus::Approved,
        reject_reason: None,
    };
    assert!(review_hotels(&connections, &notify, &["h"], review).is_err());
    assert!(notify.reviewed_hotels.borrow().is_empty());
}

#[test]
fn message_is_stored_before_it_is_pushed() {
    let connections = mem::Connections::init();
    {
        let db = connections.exclusive();
        db.create_user(&new_user("m", Role::Merchant)).unwrap();
        db.create_user(&new_user("c", Role::Customer)).unwrap();
    }
    let notify = DummyNotifyGW::default();

    let sender = new_user("c", Role::Customer);
    let message = send_message(
        &connections,
        &notify,
        &sender,
        usecases::NewMessage {
            receiver_id: "m".into(),
            content: "Is breakfast included?".into(),
        },
    )
    .unwrap();

    assert_eq!(vec![message.id.clone()], *notify.sent_messages.borrow());
    let db = connections.exclusive();
    assert_eq!(1, db.messages_of_user("m").unwrap().len());
    assert_eq!(1, db.count_unread_messages("m").unwrap());
}
