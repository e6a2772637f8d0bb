//! Authentication primitives for the server: password hashing and bearer tokens.

mod password;
mod token;

pub use password::{hash_password, validate_password, verify_password};
pub use token::TokenRegistry;
