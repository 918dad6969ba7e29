//! Utility helpers for tests.
pub mod drive;
pub mod rig;
