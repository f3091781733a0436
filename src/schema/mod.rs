pub mod menu;
pub mod request;
