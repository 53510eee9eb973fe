//! # Profile Commands
//!
//! Personal details, saved addresses and saved cards.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use foodfleet_core::profile::{Address, AddressKind, CardBrand, PaymentMethod, ProfileBook};

use crate::error::ApiError;
use crate::Session;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileArgs {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAddressArgs {
    pub kind: AddressKind,
    pub street: String,
    pub city: String,
    pub zip: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPaymentMethodArgs {
    pub brand: CardBrand,
    pub last4: String,
    pub expiry: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdArgs {
    pub id: String,
}

/// Gets the whole profile page: details, addresses, cards and orders.
pub fn get_profile(session: &Session) -> ProfileBook {
    debug!("get_profile command");
    session.profile.book().clone()
}

/// Replaces name, email and phone. Nothing changes if any field is invalid.
pub fn update_profile(session: &mut Session, args: UpdateProfileArgs) -> Result<ProfileBook, ApiError> {
    debug!(email = %args.email, "update_profile command");

    let phone = args.phone.as_deref().unwrap_or("");
    if let Err(e) = session
        .profile
        .book_mut()
        .profile
        .update(&args.name, &args.email, phone)
    {
        warn!(error = %e, "Profile update rejected");
        return Err(e.into());
    }

    Ok(get_profile(session))
}

pub fn add_address(session: &mut Session, args: AddAddressArgs) -> Result<ProfileBook, ApiError> {
    debug!(kind = ?args.kind, "add_address command");

    session.profile.book_mut().add_address(Address {
        id: Uuid::new_v4().to_string(),
        kind: args.kind,
        street: args.street,
        city: args.city,
        zip: args.zip,
        is_default: args.is_default,
    })?;

    Ok(get_profile(session))
}

pub fn remove_address(session: &mut Session, args: IdArgs) -> Result<ProfileBook, ApiError> {
    debug!(id = %args.id, "remove_address command");
    session.profile.book_mut().remove_address(&args.id)?;
    Ok(get_profile(session))
}

pub fn set_default_address(session: &mut Session, args: IdArgs) -> Result<ProfileBook, ApiError> {
    debug!(id = %args.id, "set_default_address command");
    session.profile.book_mut().set_default_address(&args.id)?;
    Ok(get_profile(session))
}

/// Saves a card. Only the brand, last four digits and expiry are kept.
pub fn add_payment_method(
    session: &mut Session,
    args: AddPaymentMethodArgs,
) -> Result<ProfileBook, ApiError> {
    debug!(brand = ?args.brand, "add_payment_method command");

    session.profile.book_mut().add_payment_method(PaymentMethod {
        id: Uuid::new_v4().to_string(),
        brand: args.brand,
        last4: args.last4,
        expiry: args.expiry,
        is_default: args.is_default,
    })?;

    Ok(get_profile(session))
}

pub fn remove_payment_method(session: &mut Session, args: IdArgs) -> Result<ProfileBook, ApiError> {
    debug!(id = %args.id, "remove_payment_method command");
    session.profile.book_mut().remove_payment_method(&args.id)?;
    Ok(get_profile(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_session;

    fn id(value: &str) -> IdArgs {
        IdArgs {
            id: value.to_string(),
        }
    }

    #[test]
    fn test_update_profile() {
        let mut session = test_session();
        let book = update_profile(
            &mut session,
            UpdateProfileArgs {
                name: "Janet Doe".to_string(),
                email: "janet@example.com".to_string(),
                phone: None,
            },
        )
        .unwrap();

        assert_eq!(book.profile.name, "Janet Doe");
        assert_eq!(book.profile.phone, None);
    }

    #[test]
    fn test_invalid_update_changes_nothing() {
        let mut session = test_session();
        let err = update_profile(
            &mut session,
            UpdateProfileArgs {
                name: "Janet Doe".to_string(),
                email: "not-an-email".to_string(),
                phone: None,
            },
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_profile(&session).profile.name, "Jane Doe");
    }

    #[test]
    fn test_address_default_handling() {
        let mut session = test_session();

        let book = remove_address(&mut session, id("1")).unwrap();
        assert_eq!(book.addresses.len(), 1);
        assert!(book.addresses[0].is_default);

        let book = add_address(
            &mut session,
            AddAddressArgs {
                kind: AddressKind::Other,
                street: "9 Side St".to_string(),
                city: "Anytown".to_string(),
                zip: "12345".to_string(),
                is_default: true,
            },
        )
        .unwrap();
        assert_eq!(book.addresses.iter().filter(|a| a.is_default).count(), 1);
        assert_eq!(book.addresses[1].street, "9 Side St");

        let book = set_default_address(&mut session, id("2")).unwrap();
        assert!(book.addresses[0].is_default);

        let err = remove_address(&mut session, id("1")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_payment_methods() {
        let mut session = test_session();

        let err = add_payment_method(
            &mut session,
            AddPaymentMethodArgs {
                brand: CardBrand::Amex,
                last4: "12a4".to_string(),
                expiry: "01/30".to_string(),
                is_default: false,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let book = remove_payment_method(&mut session, id("1")).unwrap();
        assert_eq!(book.payment_methods.len(), 1);
        assert_eq!(book.payment_methods[0].last4, "5678");
        assert!(book.payment_methods[0].is_default);
    }
}
