//! Client for the waste-management backend

mod client;

pub use client::WasteApiClient;
