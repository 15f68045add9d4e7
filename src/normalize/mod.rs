//! Declarative plan normalization for a whole resource.
//!
//! Resource adapters bind modifier chains to attribute names once, at
//! schema construction time; every plan computation then runs the bound
//! chains over the resource's (state, config, plan) snapshots.

mod binding;
mod pass;

pub use binding::ModifierChain;
pub use pass::{NormalizePass, ResourceData};
