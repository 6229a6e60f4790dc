//! Commands of the `ninja` demonstration program

pub mod kick;
pub mod punch;
