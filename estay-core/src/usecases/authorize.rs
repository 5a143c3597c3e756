use super::prelude::*;

pub fn authorize_role(user: &User, min_role: Role) -> Result<()> {
    if user.role == Role::Guest {
        return Err(Error::Unauthorized);
    }
    if user.role < min_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}

/// Merchants may only touch their own listings; admins may touch any.
pub fn authorize_hotel_owner(user: &User, hotel: &Hotel) -> Result<()> {
    if user.role == Role::Admin {
        return Ok(());
    }
    if hotel.created_by != user.id {
        return Err(Error::Forbidden);
    }
    authorize_role(user, Role::Merchant)
}
