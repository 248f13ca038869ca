//! Request routing.
//!
//! One table per HTTP method, keyed on the first path segment. No wildcard
//! or prefix matching: you register a (method, segment) pair, you get a
//! handler, anything else is the not-found handler. The table is built once
//! at startup.

use std::collections::HashMap;

use crate::handlers;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::store::FileStore;

/// A route handler: a pure function of the request and the file store.
pub type Handler = fn(&Request, &dyn FileStore) -> Response;

/// The application router.
///
/// Each [`Router::on`] call returns `self` so registrations chain naturally:
///
/// ```
/// # use courier::http::request::Method;
/// # use courier::router::Router;
/// # use courier::handlers;
/// let router = Router::new()
///     .on(Method::GET, "", handlers::index)
///     .on(Method::GET, "echo", handlers::echo);
/// ```
pub struct Router {
    routes: HashMap<Method, HashMap<&'static str, Handler>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a handler for a method + first-segment pair. The empty
    /// segment is the bare root `/`.
    pub fn on(mut self, method: Method, segment: &'static str, handler: Handler) -> Self {
        self.routes.entry(method).or_default().insert(segment, handler);
        self
    }

    /// Exact-match lookup; misses resolve to the not-found handler.
    pub fn lookup(&self, method: &Method, segment: &str) -> Handler {
        self.routes
            .get(method)
            .and_then(|by_segment| by_segment.get(segment))
            .copied()
            .unwrap_or(handlers::not_found)
    }

    /// Routes the request and runs its handler.
    pub fn dispatch(&self, req: &Request, store: &dyn FileStore) -> Response {
        let handler = self.lookup(&req.method, req.route_segment());
        handler(req, store)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
