//! Canonical record shapes, named after the backend's English columns.

pub mod auth;
pub mod certification;
pub mod customers;
pub mod materials;
pub mod orders;
pub mod processes;
pub mod production;
pub mod storage;
