use std::cell::RefCell;
use std::net::SocketAddr;
use std::rc::Rc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{debug, info};

use crate::config::Config;
use crate::handlers;
use crate::http::connection::Connection;
use crate::router::Router;
use crate::server::registry::Registry;
use crate::store::DirStore;

/// A bound listening socket plus the state every connection shares: the
/// route table, the file store, and the connection registry.
pub struct Server {
    listener: TcpListener,
    router: Rc<Router>,
    store: Rc<DirStore>,
    registry: Rc<RefCell<Registry>>,
}

impl Server {
    /// Binds the listening socket with address reuse enabled, so a restart
    /// can grab the port immediately.
    pub fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr: SocketAddr = cfg
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;
        let listener = socket.listen(1024)?;

        Ok(Self {
            listener,
            router: Rc::new(handlers::routes()),
            store: Rc::new(DirStore::new(cfg.content_dir.clone())),
            registry: Rc::new(RefCell::new(Registry::new())),
        })
    }

    /// The address actually bound, which matters when the configured port
    /// was 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept loop. Every accepted socket is registered, then serviced by
    /// its own task on the server thread; the task deregisters on the way
    /// out no matter how the connection ended.
    ///
    /// Must run inside a `tokio::task::LocalSet`.
    pub async fn serve(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.listener.local_addr()?);

        loop {
            let (stream, peer) = self.listener.accept().await?;

            let id = self.registry.borrow_mut().register(peer);
            debug!(
                %id,
                %peer,
                active = self.registry.borrow().active_count(),
                "accepted connection"
            );

            let router = Rc::clone(&self.router);
            let store = Rc::clone(&self.store);
            let registry = Rc::clone(&self.registry);

            tokio::task::spawn_local(async move {
                let mut conn = Connection::new(stream, router, store);
                if let Err(e) = conn.run().await {
                    tracing::warn!(%id, %peer, error = %e, "connection error");
                }

                registry.borrow_mut().deregister(id);
                debug!(
                    %id,
                    active = registry.borrow().active_count(),
                    "connection closed"
                );
            });
        }
    }
}

/// Binds and serves in one go; the shape `main` wants.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Server::bind(cfg)?.serve().await
}
