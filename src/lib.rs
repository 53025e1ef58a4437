//! MicCheck - bounded microphone capture CLI
//!
//! This crate records a fixed-length mono clip from the default input
//! device into a pre-allocated buffer, then plays it back and/or writes
//! it to disk as raw PCM, WAV, or FLAC.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core capture model: the bounded buffer filler, the playback
//!   cursor, clip parameters, value objects, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (cpal devices, encoders, config)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
