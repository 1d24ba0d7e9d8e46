//! Session state for the Warung Sedap storefront.
//!
//! A [`Session`] owns everything that changes while a customer browses:
//! the cart, the active page, the transient overlays, and the latest
//! scroll observation. It is the single writer for all of that state;
//! presentational code reads snapshots and calls the operations here.
//!
//! The whole crate is synchronous and UI-framework-free: state mutations
//! happen one at a time through `&mut self`, in the order their triggering
//! events arrive, so derived values always observe the mutation that
//! preceded them.

mod nav;
mod session;

pub use nav::{navbar_scrolled, Overlays, Page, NAVBAR_SCROLL_THRESHOLD};
pub use session::Session;
