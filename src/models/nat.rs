use super::serde::null_to_default;
use crate::Status;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Source NAT of an interface: a shared public address and the slice of
/// ports reserved for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nat {
    pub interface_id: String,
    pub nat_ip: Option<IpAddr>,
    pub min_port: u16,
    pub max_port: u16,

    /// Set for entries describing a neighbor's NAT.
    pub vni: u32,

    pub underlay_route: Option<IpAddr>,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NatList {
    #[serde(deserialize_with = "null_to_default")]
    pub items: Vec<Nat>,
    pub status: Status,
}

/// A port range of a NAT address served by another hypervisor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighborNat {
    pub nat_ip: Option<IpAddr>,
    pub vni: u32,
    pub min_port: u16,
    pub max_port: u16,
    pub underlay_route: Option<IpAddr>,
    pub status: Status,
}

/// Which NAT entries to list for an address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NatListType {
    Any,
    Local,
    Neighbor,
}
