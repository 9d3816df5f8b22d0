//! Integration test suite for dev-home.
//!
//! These tests mount real providers against in-memory and file-backed
//! storage and drive them through the public API only.
//!
//! # Test Categories
//!
//! - `provider_flow`: Mount, dispatch, and accessor behavior
//! - `persistence`: Preview page surviving a remount
//! - `properties`: Invariants over long generated action sequences


mod persistence;
mod provider_flow;
