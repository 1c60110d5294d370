pub mod contributor;
pub mod error;
pub mod events;
pub mod handlers;
pub mod interfaces;
pub mod outcome;
