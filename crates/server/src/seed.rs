//! Demonstration seed data.
//!
//! Populates the in-memory stores at process start with the standard menu
//! and two accounts. All of it is volatile: a restart reseeds from
//! scratch.

use newa_bhojan_core::{Email, EmailError, Price, Role};

use crate::services::auth::{AuthError, hash_password};
use crate::state::AppState;
use crate::store::{NewProduct, NewUser, StoreError};

/// Errors from seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("invalid seed email: {0}")]
    Email(#[from] EmailError),
    #[error("seed password hashing failed")]
    Hash,
    #[error("seed store error: {0}")]
    Store(#[from] StoreError),
}

impl From<AuthError> for SeedError {
    fn from(_: AuthError) -> Self {
        Self::Hash
    }
}

/// The standard menu: (name, description, price, image, category, stock, featured).
#[allow(clippy::type_complexity)]
const MENU: &[(&str, &str, i64, &str, &str, u32, bool)] = &[
    (
        "Yomari",
        "Traditional steamed dumpling filled with sweet sesame seeds and jaggery",
        250,
        "/pic/yomari.jpeg",
        "Traditional Sweets",
        50,
        true,
    ),
    (
        "Newari Khaja Set",
        "Complete traditional meal with beaten rice, curry, pickles, and meat",
        850,
        "/pic/newari-khaja-set.jpg",
        "Main Course",
        30,
        true,
    ),
    (
        "Chatamari",
        "Newari rice crepe topped with vegetables, eggs, and meat",
        180,
        "/pic/chatamari.jpg",
        "Snacks",
        40,
        true,
    ),
    (
        "Wo (Bara)",
        "Traditional black lentil pancake, crispy and flavorful",
        120,
        "/pic/bara.jpg",
        "Snacks",
        60,
        false,
    ),
    (
        "Newari Aila",
        "Traditional rice wine, locally brewed and authentic",
        450,
        "/pic/aila.jpg",
        "Beverages",
        25,
        true,
    ),
    (
        "Buffalo Choila",
        "Spicy grilled buffalo meat with traditional spices",
        650,
        "/pic/choila.jpg",
        "Main Course",
        20,
        false,
    ),
    (
        "Juju Dhau",
        "King of yogurt, creamy and sweet Bhaktapur specialty",
        150,
        "/pic/jujudhau.jpg",
        "Desserts",
        45,
        false,
    ),
    (
        "Lakhamari",
        "Traditional sweet bread, crispy and decorated",
        200,
        "/pic/lakmari.jpg",
        "Traditional Sweets",
        35,
        false,
    ),
    (
        "Aloo-tama",
        "Tangy bamboo shoot and potato curry, a Newari comfort food classic",
        180,
        "/pic/aloo-tama.jpg",
        "Snacks",
        50,
        false,
    ),
    (
        "Kachila",
        "Spiced raw minced meat delicacy, seasoned with traditional herbs",
        320,
        "/pic/kachila.jpg",
        "Snacks",
        30,
        false,
    ),
    (
        "Kwati",
        "Hearty mixed bean soup, rich in protein and flavor",
        220,
        "/pic/kwati.jpg",
        "Main Course",
        40,
        false,
    ),
    (
        "Samaybaji",
        "Traditional Newari platter with beaten rice, beans, eggs, and more",
        500,
        "/pic/samaybaji.jpg",
        "Main Course",
        25,
        false,
    ),
    (
        "Thwon",
        "Mildly alcoholic traditional Newari rice beer, refreshing and unique",
        200,
        "/pic/thwon.jpg",
        "Beverages",
        30,
        false,
    ),
    (
        "Sanyakhuna",
        "Jellied fish aspic, a savory and spicy Newari specialty",
        350,
        "/pic/sanyakhuna.jpg",
        "Snacks",
        20,
        false,
    ),
];

/// Seed the stores with the standard menu and demo accounts.
///
/// # Errors
///
/// Returns `SeedError` if a seed email fails to parse or hashing fails.
/// A duplicate-email conflict can only happen if called twice on the same
/// state and is surfaced rather than ignored.
pub fn seed(state: &AppState) -> Result<(), SeedError> {
    for &(name, description, price, image, category, stock, featured) in MENU {
        state.products().create(NewProduct {
            name: name.to_owned(),
            description: description.to_owned(),
            price: Price::from_rupees(price),
            image: image.to_owned(),
            category: category.to_owned(),
            stock,
            featured,
        });
    }

    let accounts = [
        ("admin", "admin@newabhojan.com", "admin123", Role::Admin),
        ("muskan", "customer@example.com", "customer123", Role::Customer),
    ];

    for (name, email, password, role) in accounts {
        state.users().create(NewUser {
            name: name.to_owned(),
            email: Email::parse(email)?,
            password_hash: hash_password(password)?,
            role,
            phone: None,
            address: None,
        })?;
    }

    tracing::info!(
        products = state.products().list().len(),
        users = state.users().list().len(),
        "In-memory data initialized"
    );

    Ok(())
}
