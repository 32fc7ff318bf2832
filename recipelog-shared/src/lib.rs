#![cfg_attr(not(test), forbid(unsafe_code))]

//! Wire models shared by the Recipe Log clients.
//!
//! Everything in this crate is target independent: the types mirror the JSON
//! bodies of the Recipe Log REST API and compile for both `wasm32` and native
//! targets.

pub mod models;
