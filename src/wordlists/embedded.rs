//! Embedded word list
//!
//! Seed words compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/initial_words.rs"));
