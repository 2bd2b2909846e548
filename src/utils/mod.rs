//! Utilities - browser console logging

pub mod logging;
