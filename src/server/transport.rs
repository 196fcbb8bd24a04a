use crate::error::TransportError;
use async_trait::async_trait;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

/// One request/response exchange with a server.
///
/// Implementations own the socket for the duration of a single call and
/// release it on every exit path, including the returned future being dropped.
/// `timeout` bounds the whole round trip, send and receive together.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn exchange(
        &self,
        addr: SocketAddr,
        request: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, TransportError>;
}

/// Sends each query from a fresh ephemeral UDP socket connected to the
/// server, so datagrams from any other address never reach the decoder.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    recv_buffer_size: usize,
}

impl UdpTransport {
    pub const fn new(recv_buffer_size: usize) -> Self {
        Self { recv_buffer_size }
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn exchange(
        &self,
        addr: SocketAddr,
        request: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, TransportError> {
        let bind_addr: SocketAddr = if addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let sock = UdpSocket::bind(bind_addr)
            .await
            .map_err(TransportError::Bind)?;
        sock.connect(addr)
            .await
            .map_err(|source| TransportError::Send { addr, source })?;

        let round_trip = async {
            let sent = sock
                .send(request)
                .await
                .map_err(|source| TransportError::Send { addr, source })?;

            debug!("[{}] Sent {} byte query", addr, sent);

            let mut buf = vec![0u8; self.recv_buffer_size];
            let len = sock
                .recv(&mut buf)
                .await
                .map_err(|source| TransportError::Receive { addr, source })?;

            buf.truncate(len);

            debug!("[{}] Received {} byte response", addr, len);

            Ok::<_, TransportError>(buf)
        };

        tokio::time::timeout(timeout, round_trip)
            .await
            .map_err(|_| TransportError::Timeout {
                addr,
                after: timeout,
            })?
    }
}
