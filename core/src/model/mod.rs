// core/src/model/mod.rs

//! Plain data records shared by the store, the session and the controllers.

pub mod donation;
pub mod user;

pub use donation::{DonationItem, DonationStatus, NewDonation, CATEGORIES, DEFAULT_CATEGORY};
pub use user::{Role, User};
