//! # orchestrator-server
//!
//! Local HTTP backend for the Content Portal desktop app.
//!
//! The service keeps a list of job records in memory and exposes them over a
//! small REST API. It is designed to be spawned as a subprocess: the parent
//! application reads a single JSON line from stdout to learn the bound port,
//! while all human-readable diagnostics go to stderr.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 orchestrator-server              │
//! │  ┌─────────┐   ┌───────────┐   ┌─────────────┐   │
//! │  │  HTTP   │──▶│ Job Store │   │ Announcement│   │
//! │  │  REST   │   │ (in-mem)  │   │  (stdout)   │   │
//! │  └─────────┘   └───────────┘   └─────────────┘   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! The store is the sole authority over the job collection; handlers reach it
//! through shared [`AppState`] and never hold jobs across requests. The
//! listener binds to the loopback interface only.

pub mod announce;
pub mod error;
pub mod http;
pub mod job;
pub mod server;
pub mod state;

// Re-export core types
pub use announce::{announce_port, ServerInfo};
pub use error::ServiceError;
pub use http::routes::create_router;
pub use job::{CreateJobRequest, Job, JobStore};
pub use server::{Server, ServerConfig, DEFAULT_PORT};
pub use state::AppState;
