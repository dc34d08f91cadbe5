//! Pieces shared by CLI front ends: command names and terminal helpers

pub mod constants;
pub mod helpers;
