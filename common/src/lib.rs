pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod exchange;
pub mod filter;
pub mod fixtures;
pub mod identity;
pub mod ids;
pub mod impact;
pub mod listing;
pub mod route;
pub mod session;
pub mod store;
pub mod upload;
pub mod wishlist;
