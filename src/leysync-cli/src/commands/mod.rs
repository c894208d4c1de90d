//! Command handlers for leysync CLI

pub mod configure;
pub mod convert;
pub mod inspect;
