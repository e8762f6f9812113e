mod clients;

pub use self::clients::*;

use crate::prelude::*;
use ipnet::IpNet;
use std::net::IpAddr;

/// Flat dpservice client: one method per remote operation.
///
/// Each method takes trailing groups of ignored error codes: when the remote
/// status code is contained in the first group, the call succeeds and the
/// status is left on the returned object. An empty slice means the argument
/// was omitted and the implementation's defaults apply.
///
/// Prefer [`Client`] in new code; it forwards to these methods.
pub trait LegacyClient: Send + Sync {
    // Load balancers

    fn get_load_balancer(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer>;

    fn list_load_balancers(&self, ctx: &Context, ignored: &[Vec<u32>])
        -> DpResult<LoadBalancerList>;

    fn create_load_balancer(
        &self,
        ctx: &Context,
        lb: &LoadBalancer,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer>;

    fn delete_load_balancer(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer>;

    fn list_load_balancer_prefixes(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<PrefixList>;

    fn create_load_balancer_prefix(
        &self,
        ctx: &Context,
        prefix: &LoadBalancerPrefix,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerPrefix>;

    fn delete_load_balancer_prefix(
        &self,
        ctx: &Context,
        interface_id: &str,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerPrefix>;

    fn list_load_balancer_targets(
        &self,
        ctx: &Context,
        lb_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTargetList>;

    fn create_load_balancer_target(
        &self,
        ctx: &Context,
        target: &LoadBalancerTarget,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTarget>;

    fn delete_load_balancer_target(
        &self,
        ctx: &Context,
        lb_id: &str,
        target_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTarget>;

    // Interfaces

    fn get_interface(&self, ctx: &Context, id: &str, ignored: &[Vec<u32>]) -> DpResult<Interface>;

    fn list_interfaces(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<InterfaceList>;

    fn create_interface(
        &self,
        ctx: &Context,
        iface: &Interface,
        ignored: &[Vec<u32>],
    ) -> DpResult<Interface>;

    fn delete_interface(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<Interface>;

    fn get_virtual_ip(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp>;

    fn create_virtual_ip(
        &self,
        ctx: &Context,
        vip: &VirtualIp,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp>;

    fn delete_virtual_ip(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp>;

    fn list_prefixes(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<PrefixList>;

    fn create_prefix(&self, ctx: &Context, prefix: &Prefix, ignored: &[Vec<u32>])
        -> DpResult<Prefix>;

    fn delete_prefix(
        &self,
        ctx: &Context,
        interface_id: &str,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<Prefix>;

    // Routes

    fn list_routes(&self, ctx: &Context, vni: u32, ignored: &[Vec<u32>]) -> DpResult<RouteList>;

    fn create_route(&self, ctx: &Context, route: &Route, ignored: &[Vec<u32>]) -> DpResult<Route>;

    fn delete_route(
        &self,
        ctx: &Context,
        vni: u32,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<Route>;

    // NATs

    fn get_nat(&self, ctx: &Context, interface_id: &str, ignored: &[Vec<u32>]) -> DpResult<Nat>;

    fn create_nat(&self, ctx: &Context, nat: &Nat, ignored: &[Vec<u32>]) -> DpResult<Nat>;

    fn delete_nat(&self, ctx: &Context, interface_id: &str, ignored: &[Vec<u32>])
        -> DpResult<Nat>;

    /// Lists NAT entries of given address; [`NatListType::Any`] combines the
    /// local and the neighbor ones.
    fn list_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        nat_type: NatListType,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList>;

    fn list_local_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList>;

    fn list_neighbor_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList>;

    fn create_neighbor_nat(
        &self,
        ctx: &Context,
        nat: &NeighborNat,
        ignored: &[Vec<u32>],
    ) -> DpResult<NeighborNat>;

    fn delete_neighbor_nat(
        &self,
        ctx: &Context,
        nat: &NeighborNat,
        ignored: &[Vec<u32>],
    ) -> DpResult<NeighborNat>;

    // Firewall

    fn list_firewall_rules(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRuleList>;

    fn get_firewall_rule(
        &self,
        ctx: &Context,
        interface_id: &str,
        rule_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule>;

    fn create_firewall_rule(
        &self,
        ctx: &Context,
        rule: &FirewallRule,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule>;

    fn delete_firewall_rule(
        &self,
        ctx: &Context,
        interface_id: &str,
        rule_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule>;

    // System

    fn check_initialized(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<Initialized>;

    fn initialize(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<Initialized>;

    fn get_vni(&self, ctx: &Context, vni: u32, vni_type: u8, ignored: &[Vec<u32>]) -> DpResult<Vni>;

    fn reset_vni(
        &self,
        ctx: &Context,
        vni: u32,
        vni_type: u8,
        ignored: &[Vec<u32>],
    ) -> DpResult<Vni>;

    fn get_version(
        &self,
        ctx: &Context,
        version: &Version,
        ignored: &[Vec<u32>],
    ) -> DpResult<Version>;

    // Capture

    fn capture_start(
        &self,
        ctx: &Context,
        capture: &CaptureStart,
        ignored: &[Vec<u32>],
    ) -> DpResult<CaptureStart>;

    fn capture_stop(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<CaptureStop>;

    fn capture_status(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<CaptureStatus>;
}
