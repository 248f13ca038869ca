use std::rc::Rc;

use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{self, ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;
use crate::store::DirStore;

/// One bounded read per readiness event.
const READ_CHUNK: usize = 4096;

/// Prevent unbounded header growth: a block with no terminator inside
/// this many bytes ends the connection.
const MAX_HEADER_BYTES: usize = 64 * 1024;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    router: Rc<Router>,
    store: Rc<DirStore>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Rc<Router>, store: Rc<DirStore>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
            router,
            store,
        }
    }

    /// Drives the connection until the peer closes or a protocol error ends
    /// it. After each response the connection returns to Reading, so one
    /// peer can issue any number of sequential requests.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.dispatch(req, self.store.as_ref());

                    tracing::debug!(
                        method = ?req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "request handled"
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // back for the next request
                    self.state = ConnectionState::Reading;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the buffer frames one complete request.
    ///
    /// Consumed bytes are advanced past; leftovers stay queued so a
    /// pipelined follow-up request is picked up on the next cycle without
    /// another read. Returns `None` when the peer closed the socket.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try assembling from whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    // Malformed request: the stream position can no longer
                    // be trusted, so the connection must die.
                    return Err(anyhow::anyhow!("HTTP parse error: {:?}", e));
                }
            }

            if self.buffer.len() > MAX_HEADER_BYTES
                && parser::find_headers_end(&self.buffer).is_none()
            {
                return Err(anyhow::anyhow!("request header block too large"));
            }

            let mut chunk = [0u8; READ_CHUNK];
            let n = self.stream.read(&mut chunk).await?;

            if n == 0 {
                // Peer closed; anything still buffered was never a full
                // message and is dropped with the connection.
                return Ok(None);
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }
}
