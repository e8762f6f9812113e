use super::serde::null_to_default;
use crate::Status;
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// An alias prefix routed to an interface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefix {
    pub interface_id: String,
    pub prefix: Option<IpNet>,
    pub underlay_route: Option<IpAddr>,
    pub status: Status,
}

/// Returned both for interface prefixes and for load balancer prefixes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixList {
    #[serde(deserialize_with = "null_to_default")]
    pub items: Vec<Prefix>,
    pub status: Status,
}
