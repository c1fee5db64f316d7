//! Data models for the contact directory.

pub mod contact;

pub use contact::{Contact, Record};
