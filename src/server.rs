use std::net::SocketAddr;

use crate::codec::{self, Challenge, PacketType, Player, Request, ResPacket, Rule, ServerInfo};
use crate::config::QueryConfig;
use crate::dns::DNS;
use crate::error::{QueryError, TransportError};

mod transport;

pub use transport::*;

/// Queries Source engine game servers.
///
/// Every call is an independent exchange over its own socket, so one
/// `ServerQuery` can serve any number of concurrent queries.
pub struct ServerQuery<T = UdpTransport> {
    transport: T,
    dns: DNS,
    config: QueryConfig,
}

impl ServerQuery<UdpTransport> {
    pub fn new(config: QueryConfig) -> Self {
        let transport = UdpTransport::new(config.recv_buffer_size);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> ServerQuery<T> {
    pub fn with_transport(config: QueryConfig, transport: T) -> Self {
        Self {
            transport,
            dns: DNS::new(),
            config,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    async fn resolve(&self, server: &str, port: u16) -> Result<SocketAddr, TransportError> {
        let ip = self.dns.lookup_ip(server).await?;
        Ok(SocketAddr::new(ip, port))
    }

    /// Runs one query, answering any challenges the server issues in place of
    /// a reply by re-sending the request with the new token.
    ///
    /// Returns the payload of the final reply once its header matches the
    /// type the request expects.
    async fn send_packet(&self, server: &str, port: u16, mut packet: Request) -> Result<Vec<u8>, QueryError> {
        let addr = self.resolve(server, port).await?;
        let timeout = self.config.timeout();

        let mut challenge_counter = 0;
        let mut res = self.transport.exchange(addr, &packet.to_raw(), timeout).await?;

        while packet.accepts_challenge() && ResPacket::parse(&res, PacketType::Challenge).is_ok() {
            let challenge = codec::decode_challenge(&res).map_err(|err| {
                error!("[{}] Received packet with a challenge header, but invalid payload!", addr);
                err
            })?;

            challenge_counter += 1;
            debug!(
                "[{}] Received challenge packet [{}] ({}/{})",
                addr, challenge, challenge_counter, self.config.max_challenge_retries
            );

            if challenge_counter > self.config.max_challenge_retries {
                return Err(QueryError::ChallengeLoop {
                    attempts: challenge_counter,
                });
            }

            if let Some(next) = packet.with_challenge(challenge) {
                packet = next;
            }

            res = self.transport.exchange(addr, &packet.to_raw(), timeout).await?;
        }

        let reply = ResPacket::parse(&res, packet.expected_response())?;
        Ok(reply.payload.to_vec())
    }

    /// `A2A_PING`. Resolves once the server acknowledges.
    pub async fn a2a_ping(&self, server: &str, port: u16) -> Result<(), QueryError> {
        let payload = self.send_packet(server, port, Request::Ping).await?;
        Ok(codec::decode_ack_payload(&payload)?)
    }

    pub async fn a2s_info(&self, server: &str, port: u16) -> Result<ServerInfo, QueryError> {
        let payload = self.send_packet(server, port, Request::Info(None)).await?;
        Ok(ServerInfo::decode(&payload)?)
    }

    /// `A2S_SERVERQUERY_GETCHALLENGE`.
    pub async fn a2s_challenge(&self, server: &str, port: u16) -> Result<Challenge, QueryError> {
        let payload = self.send_packet(server, port, Request::GetChallenge).await?;
        Ok(Challenge::decode(&payload)?)
    }

    pub async fn a2s_player(&self, server: &str, port: u16, challenge: Challenge) -> Result<Vec<Player>, QueryError> {
        let payload = self.send_packet(server, port, Request::Players(challenge)).await?;
        Ok(Player::decode_list(&payload)?)
    }

    pub async fn a2s_rules(&self, server: &str, port: u16, challenge: Challenge) -> Result<Vec<Rule>, QueryError> {
        let payload = self.send_packet(server, port, Request::Rules(challenge)).await?;
        Ok(Rule::decode_list(&payload)?)
    }

    /// Player query that lets the server hand out the challenge.
    pub async fn a2s_player_auto(&self, server: &str, port: u16) -> Result<Vec<Player>, QueryError> {
        self.a2s_player(server, port, Challenge::PLACEHOLDER).await
    }

    /// Rules query that lets the server hand out the challenge.
    pub async fn a2s_rules_auto(&self, server: &str, port: u16) -> Result<Vec<Rule>, QueryError> {
        self.a2s_rules(server, port, Challenge::PLACEHOLDER).await
    }
}
