//! # Portiere
//!
//! `portiere` is an HTTP service for user registration and login. A plaintext
//! password is stored as a salted Argon2id hash; a successful login is
//! answered with an HS256-signed, time-bound session token that can later be
//! verified offline by any holder of the signing secret.
//!
//! Identity records (id, email, password hash) live in `PostgreSQL`, one row
//! per registered user, keyed by a unique case-normalized email.

pub mod auth;
pub mod cli;
pub mod portiere;
