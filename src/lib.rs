//! Kiosk - tenant provisioning and chat widget delivery
//!
//! This library provides the core functionality for the Kiosk service:
//! webhook ingestion from the commerce platform, the tenant store, and the
//! HTTP surface that delivers the embeddable chat widget.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod id;
pub mod models;
