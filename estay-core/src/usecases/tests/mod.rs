use std::cell::RefCell;

use super::prelude::*;

pub use crate::rating::tests::new_rating;

type Result<T> = std::result::Result<T, RepoError>;

pub fn new_user(id: &str, role: Role) -> User {
    User {
        id: id.into(),
        email: format!("{id}@example.com"),
        username: id.into(),
        role,
    }
}

pub fn new_message(id: &str, sender_id: &str, receiver_id: &str) -> Message {
    Message {
        id: id.into(),
        sender_id: sender_id.into(),
        receiver_id: receiver_id.into(),
        content: "Hello".into(),
        is_read: false,
        created_at: Timestamp::now(),
    }
}

#[derive(Default)]
pub struct MockDb {
    pub hotels: RefCell<Vec<Hotel>>,
    pub ratings: RefCell<Vec<Rating>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub messages: RefCell<Vec<Message>>,
    pub users: RefCell<Vec<User>>,
}

trait MockRecord {
    fn record_id(&self) -> &str;
}

impl MockRecord for Hotel {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

impl MockRecord for Rating {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

impl MockRecord for Booking {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

impl MockRecord for Message {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

impl MockRecord for User {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + MockRecord>(objects: &RefCell<Vec<T>>, id: &str) -> Result<T> {
    objects
        .borrow()
        .iter()
        .find(|x| x.record_id() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create<T: MockRecord>(objects: &RefCell<Vec<T>>, object: T) -> Result<()> {
    let mut objects = objects.borrow_mut();
    if objects.iter().any(|x| x.record_id() == object.record_id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(object);
    Ok(())
}

fn update<T: Clone + MockRecord>(objects: &RefCell<Vec<T>>, object: &T) -> Result<()> {
    let mut objects = objects.borrow_mut();
    match objects.iter_mut().find(|x| x.record_id() == object.record_id()) {
        Some(x) => {
            *x = object.clone();
            Ok(())
        }
        None => Err(RepoError::NotFound),
    }
}

fn delete<T: MockRecord>(objects: &RefCell<Vec<T>>, id: &str) -> Result<()> {
    let mut objects = objects.borrow_mut();
    let len_before = objects.len();
    objects.retain(|x| x.record_id() != id);
    if objects.len() == len_before {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl HotelRepo for MockDb {
    fn create_hotel(&self, hotel: Hotel) -> Result<()> {
        create(&self.hotels, hotel)
    }

    fn update_hotel(&self, hotel: &Hotel) -> Result<()> {
        update(&self.hotels, hotel)
    }

    fn get_hotel(&self, id: &str) -> Result<Hotel> {
        get(&self.hotels, id)
    }

    fn all_hotels(&self) -> Result<Vec<Hotel>> {
        Ok(self.hotels.borrow().clone())
    }

    fn count_hotels(&self) -> Result<usize> {
        Ok(self.hotels.borrow().len())
    }

    fn hotels_created_by(&self, user_id: &str) -> Result<Vec<Hotel>> {
        Ok(self
            .hotels
            .borrow()
            .iter()
            .filter(|h| h.created_by.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn visible_hotels(&self) -> Result<Vec<Hotel>> {
        Ok(self
            .hotels
            .borrow()
            .iter()
            .filter(|h| h.is_publicly_visible())
            .cloned()
            .collect())
    }

    fn change_publication_status(
        &self,
        id: &str,
        status: PublicationStatus,
        reject_reason: Option<&str>,
    ) -> Result<()> {
        let mut hotels = self.hotels.borrow_mut();
        let hotel = hotels
            .iter_mut()
            .find(|h| h.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        hotel.status = status;
        hotel.reject_reason = reject_reason.map(Into::into);
        Ok(())
    }

    fn update_rating_aggregate(&self, id: &str, aggregate: RatingAggregate) -> Result<()> {
        let mut hotels = self.hotels.borrow_mut();
        let hotel = hotels
            .iter_mut()
            .find(|h| h.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        hotel.rating = aggregate;
        Ok(())
    }
}

impl RatingRepo for MockDb {
    fn create_rating(&self, rating: Rating) -> Result<()> {
        create(&self.ratings, rating)
    }

    fn update_rating(&self, rating: &Rating) -> Result<()> {
        update(&self.ratings, rating)
    }

    fn delete_rating(&self, id: &str) -> Result<()> {
        delete(&self.ratings, id)
    }

    fn get_rating(&self, id: &str) -> Result<Rating> {
        get(&self.ratings, id)
    }

    fn ratings_of_hotel(&self, hotel_id: &str) -> Result<Vec<Rating>> {
        Ok(self
            .ratings
            .borrow()
            .iter()
            .filter(|r| r.hotel_id.as_str() == hotel_id)
            .cloned()
            .collect())
    }

    fn rating_of_user_for_hotel(
        &self,
        user_id: &str,
        hotel_id: &str,
    ) -> Result<Option<Rating>> {
        Ok(self
            .ratings
            .borrow()
            .iter()
            .find(|r| r.user_id.as_str() == user_id && r.hotel_id.as_str() == hotel_id)
            .cloned())
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, booking: Booking) -> Result<()> {
        create(&self.bookings, booking)
    }

    fn update_booking(&self, booking: &Booking) -> Result<()> {
        update(&self.bookings, booking)
    }

    fn get_booking(&self, id: &str) -> Result<Booking> {
        get(&self.bookings, id)
    }

    fn bookings_of_customer(&self, customer_id: &str) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.customer_id.as_str() == customer_id)
            .cloned()
            .collect())
    }

    fn bookings_of_hotel(&self, hotel_id: &str) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .borrow()
            .iter()
            .filter(|b| b.hotel_id.as_str() == hotel_id)
            .cloned()
            .collect())
    }
}

impl MessageRepo for MockDb {
    fn create_message(&self, message: Message) -> Result<()> {
        create(&self.messages, message)
    }

    fn update_message(&self, message: &Message) -> Result<()> {
        update(&self.messages, message)
    }

    fn get_message(&self, id: &str) -> Result<Message> {
        get(&self.messages, id)
    }

    fn messages_of_user(&self, user_id: &str) -> Result<Vec<Message>> {
        Ok(self
            .messages
            .borrow()
            .iter()
            .filter(|m| m.involves(&user_id.into()))
            .cloned()
            .collect())
    }

    fn count_unread_messages(&self, receiver_id: &str) -> Result<u64> {
        Ok(self
            .messages
            .borrow()
            .iter()
            .filter(|m| m.receiver_id.as_str() == receiver_id && !m.is_read)
            .count() as u64)
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> Result<()> {
        create(&self.users, user.clone())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get(&self.users, id)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.users.borrow().len())
    }
}
