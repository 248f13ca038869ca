//! Route handlers.
//!
//! All handlers are pure functions of (request, file store); none hold any
//! state between calls. Store failures surface to the client as a uniform
//! 404 with no detail about what went wrong.

use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::router::Router;
use crate::store::{FileStore, StoreError};

/// The fixed route table the server dispatches against.
pub fn routes() -> Router {
    Router::new()
        .on(Method::GET, "", index)
        .on(Method::GET, "echo", echo)
        .on(Method::GET, "user-agent", user_agent)
        .on(Method::GET, "files", get_file)
        .on(Method::POST, "files", post_file)
}

/// `GET /` → 200 with an empty body, whatever headers came along.
pub fn index(_req: &Request, _store: &dyn FileStore) -> Response {
    Response::empty(StatusCode::Ok)
}

/// `GET /echo/<rest>` → the remaining path, slashes and all, echoed back.
pub fn echo(req: &Request, _store: &dyn FileStore) -> Response {
    Response::text(req.trailing_segments())
}

/// `GET /user-agent` → the User-Agent header value verbatim; an absent
/// header is just an empty body.
pub fn user_agent(req: &Request, _store: &dyn FileStore) -> Response {
    Response::text(req.header("User-Agent").unwrap_or(""))
}

/// `GET /files/<name>` → the file bytes as an octet stream, or 404.
pub fn get_file(req: &Request, store: &dyn FileStore) -> Response {
    let name = file_name(req);
    match store.read(&name) {
        Ok(contents) => Response::octet_stream(contents),
        Err(StoreError::NotFound) => Response::not_found(),
        Err(StoreError::Io(err)) => {
            tracing::warn!(file = %name, error = %err, "file read failed");
            Response::not_found()
        }
    }
}

/// `POST /files/<name>` → writes the body verbatim, creating or
/// overwriting; 201 on success, 404 on any write failure.
pub fn post_file(req: &Request, store: &dyn FileStore) -> Response {
    let name = file_name(req);
    match store.write(&name, &req.body) {
        Ok(()) => Response::empty(StatusCode::Created),
        Err(StoreError::NotFound) => Response::not_found(),
        Err(StoreError::Io(err)) => {
            tracing::warn!(file = %name, error = %err, "file write failed");
            Response::not_found()
        }
    }
}

/// Fallback for every unregistered (method, segment) pair.
pub fn not_found(_req: &Request, _store: &dyn FileStore) -> Response {
    Response::not_found()
}

// The store key concatenates the path segments past `/files` with no
// separator, so `/files/a.txt` names `a.txt`.
fn file_name(req: &Request) -> String {
    req.trailing_segments().split('/').collect()
}
