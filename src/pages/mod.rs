//! Page components, one per route.

pub mod edit_financial;
pub mod home;
pub mod login;
pub mod member_detail;
pub mod members;
pub mod product_detail;
pub mod profile;
pub mod register;
pub mod shop;
