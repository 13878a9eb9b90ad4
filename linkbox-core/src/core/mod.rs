//! Internal domain modules for the LinkBox core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod bookmark;
pub mod category;
pub mod confirm;
pub mod error;
pub mod export;
pub mod settings;
pub mod stats;
pub mod storage;
pub mod store;
