mod capture;
mod firewall_rule;
mod interface;
mod load_balancer;
mod nat;
mod prefix;
mod protocol;
mod route;
mod serde;
mod status;
mod system;

pub use self::{
    capture::*, firewall_rule::*, interface::*, load_balancer::*, nat::*, prefix::*, protocol::*,
    route::*, status::*, system::*,
};
