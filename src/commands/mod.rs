//! Command implementations for the Sleeper Fantasy Football CLI

pub mod cache;
pub mod common;
pub mod full;
pub mod gameplan;
pub mod injuries;
pub mod leagues;
pub mod performance;
pub mod quick;
pub mod trade;
