//! mindcare-store
//!
//! Flat JSON collection store on the local filesystem. One object per
//! entity, laid out by `mindcare_core::keys`.

pub mod backup;
pub mod collections;
pub mod dashboard;
pub mod documents;
pub mod error;
pub mod objects;
pub mod record;
