//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 request-framing core: incremental
//! parsing of raw byte buffers into complete messages, and serialization of
//! responses back onto the wire.
//!
//! # Architecture
//!
//! - **`connection`**: The per-socket handler implementing the
//!   read/process/write state machine
//! - **`parser`**: Assembles complete HTTP requests from accumulated byte
//!   buffers, signalling `Incomplete` until enough bytes have arrived
//! - **`request`**: HTTP request representation and path helpers
//! - **`response`**: HTTP response representation
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until a full request is framed
//!        └──────┬──────┘
//!               │ Request complete
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and run the handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, retrying partial writes
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─→ Reading (same connection, until the peer closes)
//! ```
//!
//! A zero-length read or a malformed message ends the connection instead.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
