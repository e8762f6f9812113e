use super::serde::null_to_default;
use crate::Status;
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub vni: u32,
    pub prefix: Option<IpNet>,
    pub next_hop: NextHop,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextHop {
    pub vni: u32,
    pub ip: Option<IpAddr>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteList {
    #[serde(deserialize_with = "null_to_default")]
    pub items: Vec<Route>,
    pub status: Status,
}
