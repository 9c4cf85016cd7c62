//! Shared types for the Bittrex REST API
//!
//! This crate provides the core type definitions used across the bittrex
//! workspace. It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`ApiVersion`] - API version selector (`v1.1` or `v2.0`)
//! - [`ProtectionLevel`] - Whether an endpoint needs authentication
//! - [`EndpointSpec`] - Per-version path table for one operation
//! - [`RequestParams`] - Query parameters for a request
//! - [`ApiResponse`] - The `success` / `message` / `result` envelope
//! - [`OrderbookType`], [`OrderType`], [`TimeInEffect`], [`ConditionType`],
//!   [`TickInterval`] - Exchange enums with their wire strings
//! - [`CallInterval`] - Minimum-interval throttle state

pub mod endpoint;
pub mod enums;
pub mod params;
pub mod rate_limit;
pub mod response;

// Re-export commonly used types
pub use endpoint::*;
pub use enums::*;
pub use params::*;
pub use rate_limit::*;
pub use response::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
