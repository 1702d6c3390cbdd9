//! Session layer for Sortle: drop routing, action dispatch and persistence.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod console;
pub mod drop_router;
pub mod dto;
pub mod state;

#[cfg(test)]
mod testing;
