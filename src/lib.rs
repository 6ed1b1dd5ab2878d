//! FormPass: a single-screen password generator form.
//!
//! The library exposes the generator core, the form view-model and settings
//! for use by the binary and integration tests.

pub mod app;
pub mod charset;
pub mod errors;
pub mod form;
pub mod password;
pub mod settings;
pub mod validation;
