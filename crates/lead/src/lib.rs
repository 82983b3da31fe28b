mod catalog;
mod config;
mod controller;
mod error;
mod form;
mod modal;
mod payload;
mod submission;
mod transport;

pub use catalog::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use form::*;
pub use modal::*;
pub use payload::*;
pub use submission::*;
pub use transport::*;
