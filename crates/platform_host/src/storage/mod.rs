//! Durable client-side storage contracts.

pub mod prefs;
