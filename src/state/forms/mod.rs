//! Contact form state module

mod contact_form;
mod field;
mod validate;

pub use contact_form::*;
pub use field::*;
pub use validate::*;
