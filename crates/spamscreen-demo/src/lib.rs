//! SpamScreen demo binary internals
//!
//! Hosts the terminal surface for the session controller: a three-mode
//! interaction loop (classify, history, about), the CLI, and the spoken
//! announcement backend.

pub mod app;
pub mod cli;
pub mod speech;
