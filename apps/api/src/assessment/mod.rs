pub mod form;
pub mod handlers;
pub mod upload;
pub mod validation;
