//! Inspection desk: property inspection task tracking.
//!
//! This crate records inspection visits against a fixed register of property
//! addresses, moves them through a short workflow, and emails tenants a
//! notice about upcoming visits.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, SMTP, memory)
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`property`]: Address registry of properties eligible for inspection
//! - [`inspection`]: Inspection tasks and their status workflow
//! - [`notification`]: Tenant notice composition and delivery
//! - [`api`]: HTTP/JSON interface and response envelope
//! - [`config`]: Environment-driven process configuration
//! - [`database`]: Lazily initialised shared `PostgreSQL` pool

pub mod api;
pub mod config;
pub mod database;
pub mod inspection;
pub mod notification;
pub mod property;
