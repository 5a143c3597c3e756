use estay_core::{entities::*, repositories::*};

use crate::DbReadWrite;

type Result<T> = std::result::Result<T, Error>;

impl HotelRepo for DbReadWrite<'_> {
    fn create_hotel(&self, hotel: Hotel) -> Result<()> {
        let mut store = self.store.borrow_mut();
        if store.hotels.iter().any(|h| h.id == hotel.id) {
            return Err(Error::AlreadyExists);
        }
        store.hotels.push(hotel);
        Ok(())
    }

    fn update_hotel(&self, hotel: &Hotel) -> Result<()> {
        let mut store = self.store.borrow_mut();
        let stored = store
            .hotels
            .iter_mut()
            .find(|h| h.id == hotel.id)
            .ok_or(Error::NotFound)?;
        *stored = hotel.clone();
        Ok(())
    }

    fn get_hotel(&self, id: &str) -> Result<Hotel> {
        self.store
            .borrow()
            .hotels
            .iter()
            .find(|h| h.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_hotels(&self) -> Result<Vec<Hotel>> {
        Ok(self.store.borrow().hotels.clone())
    }

    fn count_hotels(&self) -> Result<usize> {
        Ok(self.store.borrow().hotels.len())
    }

    fn hotels_created_by(&self, user_id: &str) -> Result<Vec<Hotel>> {
        Ok(self
            .store
            .borrow()
            .hotels
            .iter()
            .filter(|h| h.created_by.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn visible_hotels(&self) -> Result<Vec<Hotel>> {
        Ok(self
            .store
            .borrow()
            .hotels
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
        let mut store = self.store.borrow_mut();
        let hotel = store
            .hotels
            .iter_mut()
            .find(|h| h.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        hotel.status = status;
        hotel.reject_reason = reject_reason.map(Into::into);
        Ok(())
    }

    fn update_rating_aggregate(&self, id: &str, aggregate: RatingAggregate) -> Result<()> {
        let mut store = self.store.borrow_mut();
        let hotel = store
            .hotels
            .iter_mut()
            .find(|h| h.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        hotel.rating = aggregate;
        Ok(())
    }
}

impl RatingRepo for DbReadWrite<'_> {
    fn create_rating(&self, rating: Rating) -> Result<()> {
        let mut store = self.store.borrow_mut();
        // Unique (hotel, user) index
        if store.ratings.iter().any(|r| {
            r.id == rating.id || (r.hotel_id == rating.hotel_id && r.user_id == rating.user_id)
        }) {
            return Err(Error::AlreadyExists);
        }
        store.ratings.push(rating);
        Ok(())
    }

    fn update_rating(&self, rating: &Rating) -> Result<()> {
        let mut store = self.store.borrow_mut();
        let stored = store
            .ratings
            .iter_mut()
            .find(|r| r.id == rating.id)
            .ok_or(Error::NotFound)?;
        *stored = rating.clone();
        Ok(())
    }

    fn delete_rating(&self, id: &str) -> Result<()> {
        let mut store = self.store.borrow_mut();
        let len_before = store.ratings.len();
        store.ratings.retain(|r| r.id.as_str() != id);
        if store.ratings.len() == len_before {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn get_rating(&self, id: &str) -> Result<Rating> {
        self.store
            .borrow()
            .ratings
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn ratings_of_hotel(&self, hotel_id: &str) -> Result<Vec<Rating>> {
        Ok(self
            .store
            .borrow()
            .ratings
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
            .store
            .borrow()
            .ratings
            .iter()
            .find(|r| r.user_id.as_str() == user_id && r.hotel_id.as_str() == hotel_id)
            .cloned())
    }
}

impl BookingRepo for DbReadWrite<'_> {
    fn create_booking(&self, booking: Booking) -> Result<()> {
        let mut store = self.store.borrow_mut();
        if store.bookings.iter().any(|b| b.id == booking.id) {
            return Err(Error::AlreadyExists);
        }
        store.bookings.push(booking);
        Ok(())
    }

    fn update_booking(&self, booking: &Booking) -> Result<()> {
        let mut store = self.store.borrow_mut();
        let stored = store
            .bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or(Error::NotFound)?;
        *stored = booking.clone();
        Ok(())
    }

    fn get_booking(&self, id: &str) -> Result<Booking> {
        self.store
            .borrow()
            .bookings
            .iter()
            .find(|b| b.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn bookings_of_customer(&self, customer_id: &str) -> Result<Vec<Booking>> {
        Ok(self
            .store
            .borrow()
            .bookings
            .iter()
            .filter(|b| b.customer_id.as_str() == customer_id)
            .cloned()
            .collect())
    }

    fn bookings_of_hotel(&self, hotel_id: &str) -> Result<Vec<Booking>> {
        Ok(self
            .store
            .borrow()
            .bookings
            .iter()
            .filter(|b| b.hotel_id.as_str() == hotel_id)
            .cloned()
            .collect())
    }
}

impl MessageRepo for DbReadWrite<'_> {
    fn create_message(&self, message: Message) -> Result<()> {
        let mut store = self.store.borrow_mut();
        if store.messages.iter().any(|m| m.id == message.id) {
            return Err(Error::AlreadyExists);
        }
        store.messages.push(message);
        Ok(())
    }

    fn update_message(&self, message: &Message) -> Result<()> {
        let mut store = self.store.borrow_mut();
        let stored = store
            .messages
            .iter_mut()
            .find(|m| m.id == message.id)
            .ok_or(Error::NotFound)?;
        *stored = message.clone();
        Ok(())
    }

    fn get_message(&self, id: &str) -> Result<Message> {
        self.store
            .borrow()
            .messages
            .iter()
            .find(|m| m.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn messages_of_user(&self, user_id: &str) -> Result<Vec<Message>> {
        let user_id = Id::from(user_id);
        Ok(self
            .store
            .borrow()
            .messages
            .iter()
            .filter(|m| m.involves(&user_id))
            .cloned()
            .collect())
    }

    fn count_unread_messages(&self, receiver_id: &str) -> Result<u64> {
        Ok(self
            .store
            .borrow()
            .messages
            .iter()
            .filter(|m| m.receiver_id.as_str() == receiver_id && !m.is_read)
            .count() as u64)
    }
}

impl UserRepo for DbReadWrite<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        let mut store = self.store.borrow_mut();
        if store.users.iter().any(|u| u.id == user.id) {
            return Err(Error::AlreadyExists);
        }
        store.users.push(user.clone());
        Ok(())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        self.try_get_user(id)?.ok_or(Error::NotFound)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self
            .store
            .borrow()
            .users
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.store.borrow().users.clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.store.borrow().users.len())
    }
}
