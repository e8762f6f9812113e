use super::serde::null_to_default;
use crate::{Protocol, Status};
use ipnet::IpNet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallRule {
    pub interface_id: String,
    pub rule_id: String,
    pub direction: TrafficDirection,
    pub action: FirewallAction,
    pub priority: u32,
    pub source_prefix: Option<IpNet>,
    pub destination_prefix: Option<IpNet>,

    /// `None` matches every protocol.
    pub protocol: Option<Protocol>,

    pub status: Status,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficDirection {
    #[default]
    Ingress,
    Egress,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirewallAction {
    #[default]
    Accept,
    Drop,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallRuleList {
    #[serde(deserialize_with = "null_to_default")]
    pub items: Vec<FirewallRule>,
    pub status: Status,
}
