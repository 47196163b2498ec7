//! Typed form layer.
//!
//! Each form is an explicit struct validated at the boundary before being
//! handed to a registry's create/update, replacing loosely-shaped
//! intermediate objects with typed payload builders.

pub mod leave;
pub mod purchase_order;
