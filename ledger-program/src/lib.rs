#![no_std]

//! Behaviour shared by every ternary ledger program: who the admin is,
//! whether the program is live, and the error codes every endpoint signals.
//!
//! Contracts inherit `access_control::AccessControlModule` and
//! `lifecycle::LifecycleModule` as supertraits.

pub mod access_control;
pub mod errors;
pub mod lifecycle;
