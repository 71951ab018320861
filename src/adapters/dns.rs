//! Host resolution adapters
//!
//! Without an alternate name server the host is handed to the session as-is
//! and the system resolver does the work. With one, its A record is looked
//! up first.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use hickory_resolver::Resolver;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};

use crate::core::ports::{HostResolver, TransportError};

/// Leaves the host untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl HostResolver for PassthroughResolver {
    fn resolve(&self, host: &str) -> Result<String, TransportError> {
        Ok(host.to_string())
    }
}

/// Resolves through one explicitly configured name server
pub struct DnsResolver {
    server: SocketAddr,
    resolver: Resolver,
}

impl std::fmt::Debug for DnsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsResolver").field("server", &self.server).finish_non_exhaustive()
    }
}

impl DnsResolver {
    /// Build a resolver that only asks `server`, once, waiting at most `timeout`
    ///
    /// The hosts file is not consulted.
    pub fn new(server: SocketAddr, timeout: Duration) -> Result<Self, TransportError> {
        let name_servers = NameServerConfigGroup::from_ips_clear(&[server.ip()], server.port(), true);
        let config = ResolverConfig::from_parts(None, vec![], name_servers);
        let mut opts = ResolverOpts::default();
        opts.use_hosts_file = false;
        opts.timeout = timeout;
        opts.attempts = 1;
        let resolver = Resolver::new(config, opts)?;
        Ok(Self { server, resolver })
    }

    fn failure(&self, host: &str, reason: impl Into<String>) -> TransportError {
        TransportError::Resolve {
            host: host.to_string(),
            server: self.server.to_string(),
            reason: reason.into(),
        }
    }
}

impl HostResolver for DnsResolver {
    fn resolve(&self, host: &str) -> Result<String, TransportError> {
        if host.parse::<IpAddr>().is_ok() {
            return Ok(host.to_string());
        }

        log::debug!("resolving {host} via {}", self.server);
        let fqdn = format!("{host}.");
        let answers = self
            .resolver
            .lookup_ip(fqdn.as_str())
            .map_err(|err| self.failure(host, err.to_string()))?;

        answers
            .iter()
            .find(IpAddr::is_ipv4)
            .map(|ip| ip.to_string())
            .ok_or_else(|| self.failure(host, "No results"))
    }
}

/// Parse `ip` or `ip:port` into a name server address, defaulting to port 53
pub fn parse_server(value: &str) -> Option<SocketAddr> {
    value
        .parse::<SocketAddr>()
        .ok()
        .or_else(|| value.parse::<IpAddr>().ok().map(|ip| SocketAddr::new(ip, 53)))
}
