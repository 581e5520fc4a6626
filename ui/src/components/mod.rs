pub mod app;
pub mod business_dashboard;
pub mod chat_view;
pub mod consumer_dashboard;
pub mod impact_view;
pub mod listing_card;
pub mod login_view;
pub mod marketplace_view;
pub mod my_listings;
pub mod session_state;
pub mod shared_state;
pub mod toast;
pub mod upload_form;
pub mod wishlist_view;
