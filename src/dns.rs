use crate::error::TransportError;
use std::net::IpAddr;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

pub(crate) struct DNS {
    resolver: TokioAsyncResolver,
}

impl DNS {
    pub fn new() -> DNS {
        let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

        DNS { resolver }
    }

    /// Literal addresses are returned as-is without a lookup.
    pub async fn lookup_ip(&self, host: &str) -> Result<IpAddr, TransportError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(ip);
        }

        let response = self
            .resolver
            .lookup_ip(host)
            .await
            .map_err(|err| TransportError::Resolve {
                host: host.to_owned(),
                message: err.to_string(),
            })?;

        response.iter().next().ok_or_else(|| TransportError::Resolve {
            host: host.to_owned(),
            message: "no addresses returned".to_owned(),
        })
    }
}
