use super::serde::null_to_default;
use crate::Status;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interface {
    pub id: String,
    pub vni: u32,
    pub device: String,
    pub primary_ipv4: Option<Ipv4Addr>,
    pub primary_ipv6: Option<Ipv6Addr>,
    pub underlay_route: Option<IpAddr>,
    pub virtual_function: Option<VirtualFunction>,
    pub status: Status,
}

/// PCI function backing an interface; assigned by dpservice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualFunction {
    pub name: String,
    pub domain: u32,
    pub bus: u32,
    pub slot: u32,
    pub function: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceList {
    #[serde(deserialize_with = "null_to_default")]
    pub items: Vec<Interface>,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualIp {
    pub interface_id: String,
    pub ip: Option<IpAddr>,
    pub underlay_route: Option<IpAddr>,
    pub status: Status,
}
