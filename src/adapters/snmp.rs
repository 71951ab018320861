//! SNMPv2c adapter
//!
//! Implements [`AttributeSource`] over a synchronous UDP session from the
//! `snmp` crate. Scalars are read with GET, families with a GETNEXT walk.
//!
//! The `snmp` crate does not decode the v2c exception values (noSuchObject,
//! noSuchInstance, endOfMibView): a varbind carrying one is dropped from the
//! response. A GET answered without its varbind is therefore recorded as
//! [`Value::NoSuchObject`], and a GETNEXT answered without one ends the walk.

use snmp::SyncSession;

use crate::core::models::{Attribute, Value};
use crate::core::ports::{AttributeSource, Connector, Endpoint, TransportError};

/// Opens SNMPv2c sessions
#[derive(Debug, Clone, Copy, Default)]
pub struct SnmpConnector;

impl Connector for SnmpConnector {
    type Source = SnmpSource;

    fn connect(&self, address: &str, endpoint: &Endpoint) -> Result<SnmpSource, TransportError> {
        let session = SyncSession::new(
            (address, endpoint.port),
            endpoint.community.as_bytes(),
            Some(endpoint.timeout),
            0,
        )?;
        log::debug!("opened SNMP session to {address}:{}", endpoint.port);
        Ok(SnmpSource {
            session,
            peer: format!("{address}:{}", endpoint.port),
        })
    }
}

/// An open SNMPv2c session; closed on drop
pub struct SnmpSource {
    session: SyncSession,
    peer: String,
}

impl std::fmt::Debug for SnmpSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnmpSource").field("peer", &self.peer).finish_non_exhaustive()
    }
}

impl Drop for SnmpSource {
    fn drop(&mut self) {
        log::debug!("closing SNMP session to {}", self.peer);
    }
}

impl AttributeSource for SnmpSource {
    fn get(&mut self, ids: &[&str]) -> Result<Vec<Attribute>, TransportError> {
        let mut attributes = Vec::with_capacity(ids.len());

        for id in ids {
            let oid = parse_oid(id)?;
            let pdu = self.session.get(&oid).map_err(protocol_error)?;
            if pdu.error_status != 0 {
                return Err(TransportError::Protocol(format!(
                    "agent returned error status {} for {id}",
                    pdu.error_status
                )));
            }
            let received = attributes.len();
            for (name, value) in pdu.varbinds {
                let mut buf = [0u32; 128];
                let name = name.read_name(&mut buf).map_err(protocol_error)?;
                attributes.push(Attribute::new(format_oid(name), convert(&value)));
            }
            if attributes.len() == received {
                log::debug!("{id}: agent returned an exception value");
                attributes.push(Attribute::new(format_oid(&oid), Value::NoSuchObject));
            }
        }

        Ok(attributes)
    }

    fn walk(&mut self, prefix: &str) -> Result<Vec<Attribute>, TransportError> {
        let root = parse_oid(prefix)?;
        let mut cursor = root.clone();
        let mut attributes = Vec::new();

        loop {
            let pdu = self.session.getnext(&cursor).map_err(protocol_error)?;
            if pdu.error_status != 0 {
                return Err(TransportError::Protocol(format!(
                    "agent returned error status {} while walking {prefix}",
                    pdu.error_status
                )));
            }

            let mut varbinds = pdu.varbinds;
            let Some((name, value)) = varbinds.next() else {
                log::debug!("walk of {prefix} reached the end of the agent's view");
                break;
            };
            let mut buf = [0u32; 128];
            let next = name.read_name(&mut buf).map_err(protocol_error)?.to_vec();

            if !next.starts_with(&root) {
                break;
            }
            if next <= cursor {
                return Err(TransportError::Protocol(format!(
                    "agent returned non-increasing identifier {} after {}",
                    format_oid(&next),
                    format_oid(&cursor)
                )));
            }

            attributes.push(Attribute::new(format_oid(&next), convert(&value)));
            cursor = next;
        }

        Ok(attributes)
    }
}

/// Parse `.1.3.6.1` (leading dot optional) into components
fn parse_oid(id: &str) -> Result<Vec<u32>, TransportError> {
    id.trim_start_matches('.')
        .split('.')
        .map(str::parse)
        .collect::<Result<Vec<u32>, _>>()
        .map_err(|_| TransportError::InvalidIdentifier(id.to_string()))
}

/// Render components as `.1.3.6.1`
fn format_oid(components: &[u32]) -> String {
    components.iter().map(|c| format!(".{c}")).collect()
}

fn convert(value: &snmp::Value<'_>) -> Value {
    match value {
        snmp::Value::Integer(v) => Value::Integer(*v),
        snmp::Value::OctetString(bytes) => Value::OctetString(bytes.to_vec()),
        snmp::Value::Null => Value::Other("Null".to_string()),
        snmp::Value::ObjectIdentifier(_) => Value::Other("ObjectIdentifier".to_string()),
        snmp::Value::IpAddress(_) => Value::Other("IPAddress".to_string()),
        snmp::Value::Counter32(_) => Value::Other("Counter32".to_string()),
        snmp::Value::Unsigned32(_) => Value::Other("Gauge32".to_string()),
        snmp::Value::Timeticks(_) => Value::Other("TimeTicks".to_string()),
        snmp::Value::Counter64(_) => Value::Other("Counter64".to_string()),
        snmp::Value::Opaque(_) => Value::Other("Opaque".to_string()),
        _ => Value::Other("Unknown".to_string()),
    }
}

fn protocol_error(err: snmp::SnmpError) -> TransportError {
    TransportError::Protocol(format!("{err:?}"))
}
