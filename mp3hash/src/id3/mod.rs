//! ID3 specific items
//!
//! Only the location and size of each tag is of interest here, tag contents are never parsed.

pub mod v1;
pub mod v2;
