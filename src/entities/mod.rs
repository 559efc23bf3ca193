//! sea-orm entities, one per table. Nothing outside the store layer
//! should hand these to callers; see `models` for the wire shapes.

pub mod post;
pub mod project;
pub mod skill;
pub mod snippet;
