pub mod components;
pub mod data;
pub mod listing;
pub mod logging;
pub mod notify;
pub mod page;
pub mod route;
pub mod session;
pub mod storage;
pub mod store;
pub mod util;
pub mod wishlist;
