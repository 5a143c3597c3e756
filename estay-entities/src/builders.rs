pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, hotel_builder::*};

pub mod hotel_builder {

    use super::*;
    use crate::{
        address::*, geo::*, hotel::*, id::*, publication::*, rating::*, stay::*, time::*,
    };
    use time::macros::date;

    #[derive(Debug)]
    pub struct HotelBuild {
        hotel: Hotel,
    }

    impl HotelBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.hotel.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.hotel.name = name.into();
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.hotel.address = address;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.hotel.pos = pos;
            self
        }
        pub fn star_rating(mut self, stars: u8) -> Self {
            self.hotel.star_rating = stars.try_into().unwrap();
            self
        }
        pub fn base_price(mut self, price: f64) -> Self {
            self.hotel.base_price = price;
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.hotel.description = desc.into();
            self
        }
        pub fn status(mut self, status: PublicationStatus) -> Self {
            self.hotel.status = status;
            self
        }
        pub fn amenities(mut self, amenities: Vec<impl Into<String>>) -> Self {
            self.hotel.amenities = amenities.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn room_type(mut self, name: &str, nightly_price: f64) -> Self {
            self.hotel.room_types.push(RoomType {
                name: name.into(),
                nightly_price,
                description: None,
                occupied: None,
            });
            self
        }
        pub fn occupied_room_type(
            mut self,
            name: &str,
            nightly_price: f64,
            period: StayPeriod,
        ) -> Self {
            self.hotel.room_types.push(RoomType {
                name: name.into(),
                nightly_price,
                description: None,
                occupied: Some(Occupancy {
                    period,
                    booking_id: Id::new(),
                    customer_id: Id::new(),
                }),
            });
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.hotel.created_by = user_id.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.hotel.created_at = at;
            self
        }
        pub fn rating(mut self, rating: RatingAggregate) -> Self {
            self.hotel.rating = rating;
            self
        }
        pub fn finish(self) -> Hotel {
            self.hotel
        }
    }

    impl Builder for Hotel {
        type Build = HotelBuild;
        fn build() -> HotelBuild {
            HotelBuild {
                hotel: Hotel {
                    id: Id::new(),
                    name: "".into(),
                    name_en: "".into(),
                    address: Address::default(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    star_rating: StarRating::try_from(3).unwrap(),
                    base_price: 0.0,
                    opening_date: date!(2020 - 01 - 01),
                    description: "".into(),
                    status: PublicationStatus::default(),
                    room_types: vec![],
                    amenities: vec![],
                    images: vec![],
                    main_image: None,
                    reject_reason: None,
                    created_by: Id::new(),
                    created_at: Timestamp::now(),
                    rating: RatingAggregate::default(),
                },
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.addr.street = Some(x.into());
            self
        }
        pub fn zip(mut self, x: &str) -> Self {
            self.addr.zip = Some(x.into());
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = Some(x.into());
            self
        }
        pub fn country(mut self, x: &str) -> Self {
            self.addr.country = Some(x.into());
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        assert_eq!(Address::build().street("x").finish().is_empty(), false);
        assert_eq!(Address::build().city("x").finish().is_empty(), false);
    }
}
