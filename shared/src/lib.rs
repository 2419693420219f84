pub mod form;
pub mod registration;
pub mod validation;
