//! Maud page templates.

pub mod listing;
pub mod sign_in;

pub use listing::{render_listing_page, ListingPage};
pub use sign_in::render_sign_in_page;
