//! Request payloads (DTOs) and the resource types they belong to.

pub mod application;

pub use application::*;
