//! Client core for a server-synchronized todo list.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and drives a view-controller
//! that renders the server's collection into an in-memory document.
//!
//! # Design
//! - `TodoClient` is stateless and holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `TodoController` turns user events into `Dispatch`es and applies their
//!   outcomes. Every successful mutation is followed by a full re-fetch; the
//!   document is never patched from local state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod dom;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use controller::{Action, Dispatch, SyncFailure, Ticket, TodoController};
pub use dom::{Control, Document, Focus, Row, RowMode};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
