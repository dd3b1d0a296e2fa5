//! Pure helper modules with no browser dependencies.

pub mod cards;
