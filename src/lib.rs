//! ClipStack - clipboard history daemon
//!
//! This crate provides a background daemon that keeps a short, bounded history
//! of clipboard text and can re-inject a previously copied item into the
//! application that last held keyboard focus.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects (history entries, the bounded store) and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, enigo, osascript, JSON snapshot)
//! - **CLI**: Command-line interface, daemon runner, socket control, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
