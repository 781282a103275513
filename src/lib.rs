//! HOS-compliant trip scheduler for property-carrying commercial
//! truck drivers operating under U.S. FMCSA hours-of-service rules.

/// TOML scenario configuration and preset definitions for the CLI.
pub mod config;
/// Scheduling domain: route estimator, scheduler, daily-log projector,
/// and the top-level trip assembler.
pub mod hos;
/// I/O utilities for data export.
pub mod io;
/// Request validation: untrusted JSON payload to a validated `PlanRequest`.
pub mod request;
/// Route geometry: distance estimation and location interpolation.
pub mod route;

/// REST API for planning trips over HTTP (feature-gated behind `api`).
#[cfg(feature = "api")]
pub mod api;
