// Copyright 2026 wotd Contributors
// SPDX-License-Identifier: Apache-2.0

//! wotd: fetch a daily word of the day from heterogeneous sources,
//! normalize it into one record shape, and post it to chat webhooks.
//!
//! This library crate exposes the core modules for integration testing.

pub mod acquisition;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod markup;
pub mod model;
pub mod parsers;
pub mod renderer;

pub use error::{Result, WotdError};
pub use model::{Example, Language, LanguageFamily, ScriptAnnotations, WordOfDay};
