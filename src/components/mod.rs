//! Reusable view components shared across pages.

pub mod change_password;
pub mod confirm_dialog;
pub mod layout;
pub mod member_form;
pub mod product_card;
pub mod product_form;
pub mod protected_route;
pub mod toaster;
pub mod transactions;
