//! # API crate: wire types, HTTP client and profile server for Crewdesk
//!
//! This crate is shared by every frontend and by the server. It defines the
//! JSON shapes that cross the wire, the [`ApiClient`] the frontends call, and
//! (behind the `server` feature) the axum routes that answer those calls.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`client`] | none | [`ApiClient`]: `register`, `login`, `me`, `logout`, `update_profile` over `reqwest` |
//! | [`config`] | none | [`ApiConfig`]: API base URL from `API_URL` |
//! | [`error`] | none | [`ApiError`]: the single client-side failure type |
//! | [`models`] | none | Response envelope, request bodies, [`ProfilePatch`] |
//! | [`auth`] | `server` | Argon2 password hashing and the bearer [`auth::TokenRegistry`] |
//! | [`db`] | `server` | [`db::UserRepository`] trait and its in-memory implementation |
//! | [`server`] | `server` | axum router, `AuthUser` extractor, handlers |
//!
//! ## Endpoints
//!
//! All paths are relative to the API base (default `http://localhost:5000/api`).
//!
//! - `POST /auth/register`, `POST /auth/login` → `{ success, data: { token, user } }`
//! - `GET /auth/me` → `{ success, data: User }`
//! - `POST /auth/logout` → `{ success, data: true }`
//! - `PUT /auth/profile` → `{ success, data: User }`
//!
//! Failures carry a non-2xx status and `{ success: false, error }`.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod server;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{ApiResponse, AuthSession, LoginRequest, Patch, ProfilePatch, RegisterRequest};

pub use store::{Availability, User, WorkingHours};
