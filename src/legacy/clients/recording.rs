use crate::prelude::*;
use ipnet::IpNet;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::Instant;

/// [`LegacyClient`] double: records every call (method, positional arguments,
/// ignored-code groups and the state of its context) and answers with
/// scripted replies.
#[derive(Debug, Default)]
pub struct RecordingClient {
    replies: HashMap<&'static str, Value>,
    errors: HashSet<&'static str>,
    calls: Mutex<Vec<LegacyCall>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegacyCall {
    pub method: &'static str,
    pub args: Value,
    pub ignored: Vec<Vec<u32>>,
    pub deadline: Option<Instant>,
    pub cancelled: bool,
}

impl LegacyCall {
    pub fn new(method: &'static str, args: Value, ignored: Vec<Vec<u32>>) -> Self {
        Self {
            method,
            args,
            ignored,
            deadline: None,
            cancelled: false,
        }
    }

    /// Expects the call to have been made with given context.
    pub fn with_context(mut self, ctx: &Context) -> Self {
        self.deadline = ctx.deadline();
        self.cancelled = ctx.is_cancelled();
        self
    }
}

impl RecordingClient {
    pub fn reply(&mut self, method: &'static str, reply: Value) {
        self.replies.insert(method, reply);
    }

    pub fn inject_error(&mut self, method: &'static str) {
        self.errors.insert(method);
    }

    pub fn calls(&self) -> Vec<LegacyCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T>(
        &self,
        ctx: &Context,
        method: &'static str,
        args: Value,
        ignored: &[Vec<u32>],
    ) -> DpResult<T>
    where
        T: DeserializeOwned,
    {
        let call = LegacyCall::new(method, args, ignored.to_vec())
            .with_context(ctx);

        self.calls.lock().unwrap().push(call);

        if self.errors.contains(method) {
            return Err(DpError::InjectedError);
        }

        let reply = self.replies.get(method).cloned().unwrap_or_else(|| json!({}));

        Ok(serde_json::from_value(reply).unwrap())
    }
}

impl LegacyClient for RecordingClient {
    fn get_load_balancer(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer> {
        self.record(ctx, "get_load_balancer", json!([id]), ignored)
    }

    fn list_load_balancers(
        &self,
        ctx: &Context,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerList> {
        self.record(ctx, "list_load_balancers", json!([]), ignored)
    }

    fn create_load_balancer(
        &self,
        ctx: &Context,
        lb: &LoadBalancer,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer> {
        self.record(ctx, "create_load_balancer", json!([lb]), ignored)
    }

    fn delete_load_balancer(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer> {
        self.record(ctx, "delete_load_balancer", json!([id]), ignored)
    }

    fn list_load_balancer_prefixes(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<PrefixList> {
        self.record(
            ctx,
            "list_load_balancer_prefixes",
            json!([interface_id]),
            ignored,
        )
    }

    fn create_load_balancer_prefix(
        &self,
        ctx: &Context,
        prefix: &LoadBalancerPrefix,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerPrefix> {
        self.record(ctx, "create_load_balancer_prefix", json!([prefix]), ignored)
    }

    fn delete_load_balancer_prefix(
        &self,
        ctx: &Context,
        interface_id: &str,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerPrefix> {
        self.record(
            ctx,
            "delete_load_balancer_prefix",
            json!([interface_id, prefix]),
            ignored,
        )
    }

    fn list_load_balancer_targets(
        &self,
        ctx: &Context,
        lb_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTargetList> {
        self.record(ctx, "list_load_balancer_targets", json!([lb_id]), ignored)
    }

    fn create_load_balancer_target(
        &self,
        ctx: &Context,
        target: &LoadBalancerTarget,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTarget> {
        self.record(ctx, "create_load_balancer_target", json!([target]), ignored)
    }

    fn delete_load_balancer_target(
        &self,
        ctx: &Context,
        lb_id: &str,
        target_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTarget> {
        self.record(
            ctx,
            "delete_load_balancer_target",
            json!([lb_id, target_ip]),
            ignored,
        )
    }

    fn get_interface(&self, ctx: &Context, id: &str, ignored: &[Vec<u32>]) -> DpResult<Interface> {
        self.record(ctx, "get_interface", json!([id]), ignored)
    }

    fn list_interfaces(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<InterfaceList> {
        self.record(ctx, "list_interfaces", json!([]), ignored)
    }

    fn create_interface(
        &self,
        ctx: &Context,
        iface: &Interface,
        ignored: &[Vec<u32>],
    ) -> DpResult<Interface> {
        self.record(ctx, "create_interface", json!([iface]), ignored)
    }

    fn delete_interface(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<Interface> {
        self.record(ctx, "delete_interface", json!([id]), ignored)
    }

    fn get_virtual_ip(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp> {
        self.record(ctx, "get_virtual_ip", json!([interface_id]), ignored)
    }

    fn create_virtual_ip(
        &self,
        ctx: &Context,
        vip: &VirtualIp,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp> {
        self.record(ctx, "create_virtual_ip", json!([vip]), ignored)
    }

    fn delete_virtual_ip(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp> {
        self.record(ctx, "delete_virtual_ip", json!([interface_id]), ignored)
    }

    fn list_prefixes(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<PrefixList> {
        self.record(ctx, "list_prefixes", json!([interface_id]), ignored)
    }

    fn create_prefix(
        &self,
        ctx: &Context,
        prefix: &Prefix,
        ignored: &[Vec<u32>],
    ) -> DpResult<Prefix> {
        self.record(ctx, "create_prefix", json!([prefix]), ignored)
    }

    fn delete_prefix(
        &self,
        ctx: &Context,
        interface_id: &str,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<Prefix> {
        self.record(ctx, "delete_prefix", json!([interface_id, prefix]), ignored)
    }

    fn list_routes(&self, ctx: &Context, vni: u32, ignored: &[Vec<u32>]) -> DpResult<RouteList> {
        self.record(ctx, "list_routes", json!([vni]), ignored)
    }

    fn create_route(&self, ctx: &Context, route: &Route, ignored: &[Vec<u32>]) -> DpResult<Route> {
        self.record(ctx, "create_route", json!([route]), ignored)
    }

    fn delete_route(
        &self,
        ctx: &Context,
        vni: u32,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<Route> {
        self.record(ctx, "delete_route", json!([vni, prefix]), ignored)
    }

    fn get_nat(&self, ctx: &Context, interface_id: &str, ignored: &[Vec<u32>]) -> DpResult<Nat> {
        self.record(ctx, "get_nat", json!([interface_id]), ignored)
    }

    fn create_nat(&self, ctx: &Context, nat: &Nat, ignored: &[Vec<u32>]) -> DpResult<Nat> {
        self.record(ctx, "create_nat", json!([nat]), ignored)
    }

    fn delete_nat(&self, ctx: &Context, interface_id: &str, ignored: &[Vec<u32>]) -> DpResult<Nat> {
        self.record(ctx, "delete_nat", json!([interface_id]), ignored)
    }

    fn list_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        nat_type: NatListType,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList> {
        self.record(ctx, "list_nats", json!([nat_ip, nat_type]), ignored)
    }

    fn list_local_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList> {
        self.record(ctx, "list_local_nats", json!([nat_ip]), ignored)
    }

    fn list_neighbor_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList> {
        self.record(ctx, "list_neighbor_nats", json!([nat_ip]), ignored)
    }

    fn create_neighbor_nat(
        &self,
        ctx: &Context,
        nat: &NeighborNat,
        ignored: &[Vec<u32>],
    ) -> DpResult<NeighborNat> {
        self.record(ctx, "create_neighbor_nat", json!([nat]), ignored)
    }

    fn delete_neighbor_nat(
        &self,
        ctx: &Context,
        nat: &NeighborNat,
        ignored: &[Vec<u32>],
    ) -> DpResult<NeighborNat> {
        self.record(ctx, "delete_neighbor_nat", json!([nat]), ignored)
    }

    fn list_firewall_rules(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRuleList> {
        self.record(ctx, "list_firewall_rules", json!([interface_id]), ignored)
    }

    fn get_firewall_rule(
        &self,
        ctx: &Context,
        interface_id: &str,
        rule_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule> {
        self.record(
            ctx,
            "get_firewall_rule",
            json!([interface_id, rule_id]),
            ignored,
        )
    }

    fn create_firewall_rule(
        &self,
        ctx: &Context,
        rule: &FirewallRule,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule> {
        self.record(ctx, "create_firewall_rule", json!([rule]), ignored)
    }

    fn delete_firewall_rule(
        &self,
        ctx: &Context,
        interface_id: &str,
        rule_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule> {
        self.record(
            ctx,
            "delete_firewall_rule",
            json!([interface_id, rule_id]),
            ignored,
        )
    }

    fn check_initialized(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<Initialized> {
        self.record(ctx, "check_initialized", json!([]), ignored)
    }

    fn initialize(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<Initialized> {
        self.record(ctx, "initialize", json!([]), ignored)
    }

    fn get_vni(
        &self,
        ctx: &Context,
        vni: u32,
        vni_type: u8,
        ignored: &[Vec<u32>],
    ) -> DpResult<Vni> {
        self.record(ctx, "get_vni", json!([vni, vni_type]), ignored)
    }

    fn reset_vni(
        &self,
        ctx: &Context,
        vni: u32,
        vni_type: u8,
        ignored: &[Vec<u32>],
    ) -> DpResult<Vni> {
        self.record(ctx, "reset_vni", json!([vni, vni_type]), ignored)
    }

    fn get_version(
        &self,
        ctx: &Context,
        version: &Version,
        ignored: &[Vec<u32>],
    ) -> DpResult<Version> {
        self.record(ctx, "get_version", json!([version]), ignored)
    }

    fn capture_start(
        &self,
        ctx: &Context,
        capture: &CaptureStart,
        ignored: &[Vec<u32>],
    ) -> DpResult<CaptureStart> {
        self.record(ctx, "capture_start", json!([capture]), ignored)
    }

    fn capture_stop(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<CaptureStop> {
        self.record(ctx, "capture_stop", json!([]), ignored)
    }

    fn capture_status(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<CaptureStatus> {
        self.record(ctx, "capture_status", json!([]), ignored)
    }
}
