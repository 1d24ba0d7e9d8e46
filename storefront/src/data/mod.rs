//! Seed data for the storefront.

mod menu;

pub use menu::seed_catalog;
