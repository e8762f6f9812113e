use crate::Status;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Initialized {
    /// Changes whenever dpservice restarts.
    pub uuid: String,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vni {
    pub vni: u32,
    pub vni_type: u8,
    pub in_use: bool,
    pub status: Status,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Version {
    pub client_protocol: String,
    pub client_name: String,
    pub client_version: String,
    pub service_protocol: String,
    pub service_version: String,
    pub status: Status,
}
