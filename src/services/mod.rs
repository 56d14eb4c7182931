pub mod form;
pub mod webhook;

pub use form::*;
pub use webhook::*;
