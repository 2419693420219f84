pub mod confirmation_modal;
pub mod error_banner;
