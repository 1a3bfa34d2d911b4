//! HTTP request handlers.
//!
//! This module contains all the endpoint handlers for the cafe API.

pub mod cafes;
pub mod health;
pub mod home;
