//! Contact Book - a small personal contact directory.
//!
//! Contacts (name, phone, birthday) live in an in-memory store that is
//! persisted as JSON and searched by name or phone substring. A text menu
//! drives it from the terminal.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (phone digits, birthday dates)
//! - **models**: The `Contact` record and the `Record` display trait
//! - **store**: `AddressBook` with search and JSON persistence
//! - **ui**: The `UserInterface` trait, console front end and menu loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;
pub mod ui;

pub use config::Config;
pub use domain::{Birthday, Field, FieldValue, PhoneNumber, ValidationError};
pub use error::{ConfigError, SessionError, StoreError};
pub use models::{Contact, Record};
pub use store::AddressBook;
pub use ui::{run_session, ConsoleInterface, UserInterface};
