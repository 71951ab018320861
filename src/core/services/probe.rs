//! Probe pipeline
//!
//! Resolve the host, open one session, read the three batches into an
//! [`AttributeStore`], then evaluate. Any transport failure ends the run
//! before evaluation; the session is dropped on every path.

use crate::core::models::{AttributeStore, CheckReport, DeviceInfo};
use crate::core::ports::{
    AttributeSource, Batch, Connector, Endpoint, HostResolver, TransportError, TransportFailure,
};

use super::policy;

/// Outcome of a run that reached the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Aggregated checks
    pub report: CheckReport,
    /// Model and firmware strings
    pub device: DeviceInfo,
}

/// Read all policy attributes through an open session
pub fn collect<S>(source: &mut S, host: &str) -> Result<AttributeStore, TransportFailure>
where
    S: AttributeSource + ?Sized,
{
    let read_failed = |batch: Batch| {
        let host = host.to_string();
        move |source: TransportError| TransportFailure::Read {
            batch,
            host,
            source,
        }
    };

    let mut store = AttributeStore::new();

    let system = source.get(&policy::SYSTEM_IDS).map_err(read_failed(Batch::System))?;
    log::debug!("read {} system attributes", system.len());
    store.extend(system);

    let disks = source.walk(policy::DISK_STATUSES).map_err(read_failed(Batch::Disk))?;
    log::debug!("walked {} disk attributes", disks.len());
    store.extend(disks);

    let raids = source.walk(policy::RAID_STATUSES).map_err(read_failed(Batch::Raid))?;
    log::debug!("walked {} raid attributes", raids.len());
    store.extend(raids);

    Ok(store)
}

/// Run one probe against `endpoint`
pub fn run<R, C>(
    endpoint: &Endpoint,
    resolver: &R,
    connector: &C,
) -> Result<Evaluation, TransportFailure>
where
    R: HostResolver + ?Sized,
    C: Connector + ?Sized,
{
    let connect_failed = |source: TransportError| TransportFailure::Connect {
        host: endpoint.host.clone(),
        source,
    };

    let address = resolver.resolve(&endpoint.host).map_err(connect_failed)?;
    log::debug!("polling {} at {address}:{}", endpoint.host, endpoint.port);

    let store = {
        let mut session = connector.connect(&address, endpoint).map_err(connect_failed)?;
        collect(&mut session, &endpoint.host)?
    };

    Ok(Evaluation {
        report: policy::evaluate(&store),
        device: policy::device_info(&store),
    })
}
