// Listing catalog: search filter, creation validation, storage, HTTP handlers.

pub mod filter;
pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod repository;
pub mod validation;
