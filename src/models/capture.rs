use crate::Status;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Where captured packets go and which interfaces they come from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub sink_node_ip: Option<IpAddr>,
    pub udp_src_port: u16,
    pub udp_dst_port: u16,
    pub interfaces: Vec<CaptureInterface>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureInterface {
    pub interface_type: CaptureInterfaceType,

    /// Interface id for virtual functions, port index for physical ones.
    pub value: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureInterfaceType {
    #[default]
    Vf,
    Pf,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureStart {
    pub config: CaptureConfig,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureStop {
    pub stopped_interface_count: u32,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureStatus {
    pub active: bool,
    pub config: Option<CaptureConfig>,
    pub status: Status,
}
