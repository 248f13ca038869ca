//! Connection registry.
//!
//! The accept loop owns one [`Registry`] and shares it with every connection
//! task through `Rc<RefCell<_>>`. The whole server runs on one thread, so
//! interior mutability is all the synchronization the set ever needs.

use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;

/// Identifier for a live connection, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of open connections.
///
/// Entries are added on accept and removed when the connection task ends,
/// whether by peer close, protocol error, or I/O error.
#[derive(Debug, Default)]
pub struct Registry {
    next_id: u64,
    connections: HashMap<ConnectionId, SocketAddr>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly accepted connection and hands out its id.
    pub fn register(&mut self, peer: SocketAddr) -> ConnectionId {
        let id = ConnectionId(self.next_id);
        self.next_id += 1;
        self.connections.insert(id, peer);
        id
    }

    /// Drops a connection from the set, returning its peer address if it
    /// was still registered.
    pub fn deregister(&mut self, id: ConnectionId) -> Option<SocketAddr> {
        self.connections.remove(&id)
    }

    /// Peer address of a registered connection.
    pub fn peer(&self, id: ConnectionId) -> Option<SocketAddr> {
        self.connections.get(&id).copied()
    }

    /// How many connections are currently open.
    pub fn active_count(&self) -> usize {
        self.connections.len()
    }
}
