use super::serde::null_to_default;
use crate::{Protocol, Status};
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancer {
    pub id: String,
    pub vni: u32,
    pub vip: Option<IpAddr>,
    pub ports: Vec<LoadBalancerPort>,

    /// Assigned by dpservice on creation.
    pub underlay_route: Option<IpAddr>,

    pub status: Status,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerPort {
    pub protocol: Protocol,
    pub port: u16,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerList {
    #[serde(deserialize_with = "null_to_default")]
    pub items: Vec<LoadBalancer>,
    pub status: Status,
}

/// A prefix routed to a load balancer through given interface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerPrefix {
    pub interface_id: String,
    pub prefix: Option<IpNet>,
    pub underlay_route: Option<IpAddr>,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerTarget {
    pub load_balancer_id: String,
    pub target_ip: Option<IpAddr>,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerTargetList {
    #[serde(deserialize_with = "null_to_default")]
    pub items: Vec<LoadBalancerTarget>,
    pub status: Status,
}
