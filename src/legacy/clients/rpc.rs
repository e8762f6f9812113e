use crate::prelude::*;
use ipnet::IpNet;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::net::IpAddr;

/// [`LegacyClient`] talking to dpservice through a [`DpdkRpc`].
pub struct RpcClient<R> {
    rpc: R,
    config: Config,
}

impl<R> RpcClient<R>
where
    R: DpdkRpc,
{
    pub fn new(rpc: R) -> Self {
        Self::with_config(rpc, Config::default())
    }

    pub fn with_config(rpc: R, config: Config) -> Self {
        Self { rpc, config }
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn invoke<T>(
        &self,
        ctx: &Context,
        method: RpcMethod,
        request: impl Serialize,
        ignored: &[Vec<u32>],
    ) -> DpResult<T>
    where
        T: DeserializeOwned,
    {
        let ctx = self.context(ctx);

        if ctx.is_cancelled() {
            return Err(DpError::Cancelled { method });
        }

        if ctx.is_expired() {
            return Err(DpError::DeadlineExceeded { method });
        }

        let request = serde_json::to_value(request)
            .with_context(|| format!("Couldn't encode request for `{}`", method))?;

        tracing::debug!(%method, "calling dpservice");

        let reply = match self.rpc.call(&ctx, method, request.clone()) {
            Ok(reply) => reply,

            Err(err) => {
                tracing::warn!(%method, "dpservice call failed: {:#}", err);

                return Err(DpError::Other(
                    err.context(format!("Couldn't call `{}`", method)),
                ));
            }
        };

        let status: Status = match reply.get("status") {
            Some(status) => serde_json::from_value(status.clone())
                .with_context(|| format!("Couldn't parse status returned by `{}`", method))?,

            None => Status::default(),
        };

        if !status.is_ok() {
            if !self.is_ignored(ignored, status.code) {
                return Err(DpError::Status {
                    method,
                    code: status.code,
                    message: status.message,
                });
            }

            tracing::debug!(%method, %status, "ignoring dpservice status");
        }

        let reply = overlay(request, reply, &status);

        serde_json::from_value(reply)
            .with_context(|| format!("Couldn't parse reply returned by `{}`", method))
            .map_err(DpError::Other)
    }

    fn context(&self, ctx: &Context) -> Context {
        match (ctx.deadline(), self.config.call_timeout) {
            (None, Some(timeout)) => ctx.with_timeout(timeout),
            _ => ctx.clone(),
        }
    }

    /// Only the first group counts; omitting it altogether falls back to
    /// the configured defaults.
    fn is_ignored(&self, ignored: &[Vec<u32>], code: u32) -> bool {
        match ignored.first() {
            Some(codes) => codes.contains(&code),
            None => self.config.default_ignored_codes.contains(&code),
        }
    }
}

/// Lays reply's fields over the request's, so that e.g. identifiers sent in
/// the request survive a failure whose reply carries nothing but a status.
fn overlay(request: Value, reply: Value, status: &Status) -> Value {
    let mut merged = match (request, reply) {
        (Value::Object(mut request), Value::Object(reply)) => {
            request.extend(reply);
            Value::Object(request)
        }

        (_, reply) => reply,
    };

    if let Value::Object(fields) = &mut merged {
        fields.insert("status".into(), json!(status));
    }

    merged
}

impl<R> LegacyClient for RpcClient<R>
where
    R: DpdkRpc,
{
    fn get_load_balancer(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer> {
        self.invoke(ctx, RpcMethod::GetLoadBalancer, json!({ "id": id }), ignored)
    }

    fn list_load_balancers(
        &self,
        ctx: &Context,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerList> {
        self.invoke(ctx, RpcMethod::ListLoadBalancers, json!({}), ignored)
    }

    fn create_load_balancer(
        &self,
        ctx: &Context,
        lb: &LoadBalancer,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer> {
        self.invoke(ctx, RpcMethod::CreateLoadBalancer, lb, ignored)
    }

    fn delete_load_balancer(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancer> {
        self.invoke(ctx, RpcMethod::DeleteLoadBalancer, json!({ "id": id }), ignored)
    }

    fn list_load_balancer_prefixes(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<PrefixList> {
        self.invoke(
            ctx,
            RpcMethod::ListLoadBalancerPrefixes,
            json!({ "interface_id": interface_id }),
            ignored,
        )
    }

    fn create_load_balancer_prefix(
        &self,
        ctx: &Context,
        prefix: &LoadBalancerPrefix,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerPrefix> {
        self.invoke(ctx, RpcMethod::CreateLoadBalancerPrefix, prefix, ignored)
    }

    fn delete_load_balancer_prefix(
        &self,
        ctx: &Context,
        interface_id: &str,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerPrefix> {
        self.invoke(
            ctx,
            RpcMethod::DeleteLoadBalancerPrefix,
            json!({ "interface_id": interface_id, "prefix": prefix }),
            ignored,
        )
    }

    fn list_load_balancer_targets(
        &self,
        ctx: &Context,
        lb_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTargetList> {
        self.invoke(
            ctx,
            RpcMethod::ListLoadBalancerTargets,
            json!({ "load_balancer_id": lb_id }),
            ignored,
        )
    }

    fn create_load_balancer_target(
        &self,
        ctx: &Context,
        target: &LoadBalancerTarget,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTarget> {
        self.invoke(ctx, RpcMethod::CreateLoadBalancerTarget, target, ignored)
    }

    fn delete_load_balancer_target(
        &self,
        ctx: &Context,
        lb_id: &str,
        target_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<LoadBalancerTarget> {
        self.invoke(
            ctx,
            RpcMethod::DeleteLoadBalancerTarget,
            json!({ "load_balancer_id": lb_id, "target_ip": target_ip }),
            ignored,
        )
    }

    fn get_interface(&self, ctx: &Context, id: &str, ignored: &[Vec<u32>]) -> DpResult<Interface> {
        self.invoke(ctx, RpcMethod::GetInterface, json!({ "id": id }), ignored)
    }

    fn list_interfaces(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<InterfaceList> {
        self.invoke(ctx, RpcMethod::ListInterfaces, json!({}), ignored)
    }

    fn create_interface(
        &self,
        ctx: &Context,
        iface: &Interface,
        ignored: &[Vec<u32>],
    ) -> DpResult<Interface> {
        self.invoke(ctx, RpcMethod::CreateInterface, iface, ignored)
    }

    fn delete_interface(
        &self,
        ctx: &Context,
        id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<Interface> {
        self.invoke(ctx, RpcMethod::DeleteInterface, json!({ "id": id }), ignored)
    }

    fn get_virtual_ip(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp> {
        self.invoke(
            ctx,
            RpcMethod::GetVirtualIp,
            json!({ "interface_id": interface_id }),
            ignored,
        )
    }

    fn create_virtual_ip(
        &self,
        ctx: &Context,
        vip: &VirtualIp,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp> {
        self.invoke(ctx, RpcMethod::CreateVirtualIp, vip, ignored)
    }

    fn delete_virtual_ip(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<VirtualIp> {
        self.invoke(
            ctx,
            RpcMethod::DeleteVirtualIp,
            json!({ "interface_id": interface_id }),
            ignored,
        )
    }

    fn list_prefixes(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<PrefixList> {
        self.invoke(
            ctx,
            RpcMethod::ListPrefixes,
            json!({ "interface_id": interface_id }),
            ignored,
        )
    }

    fn create_prefix(
        &self,
        ctx: &Context,
        prefix: &Prefix,
        ignored: &[Vec<u32>],
    ) -> DpResult<Prefix> {
        self.invoke(ctx, RpcMethod::CreatePrefix, prefix, ignored)
    }

    fn delete_prefix(
        &self,
        ctx: &Context,
        interface_id: &str,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<Prefix> {
        self.invoke(
            ctx,
            RpcMethod::DeletePrefix,
            json!({ "interface_id": interface_id, "prefix": prefix }),
            ignored,
        )
    }

    fn list_routes(&self, ctx: &Context, vni: u32, ignored: &[Vec<u32>]) -> DpResult<RouteList> {
        self.invoke(ctx, RpcMethod::ListRoutes, json!({ "vni": vni }), ignored)
    }

    fn create_route(&self, ctx: &Context, route: &Route, ignored: &[Vec<u32>]) -> DpResult<Route> {
        self.invoke(ctx, RpcMethod::CreateRoute, route, ignored)
    }

    fn delete_route(
        &self,
        ctx: &Context,
        vni: u32,
        prefix: &IpNet,
        ignored: &[Vec<u32>],
    ) -> DpResult<Route> {
        self.invoke(
            ctx,
            RpcMethod::DeleteRoute,
            json!({ "vni": vni, "prefix": prefix }),
            ignored,
        )
    }

    fn get_nat(&self, ctx: &Context, interface_id: &str, ignored: &[Vec<u32>]) -> DpResult<Nat> {
        self.invoke(
            ctx,
            RpcMethod::GetNat,
            json!({ "interface_id": interface_id }),
            ignored,
        )
    }

    fn create_nat(&self, ctx: &Context, nat: &Nat, ignored: &[Vec<u32>]) -> DpResult<Nat> {
        self.invoke(ctx, RpcMethod::CreateNat, nat, ignored)
    }

    fn delete_nat(&self, ctx: &Context, interface_id: &str, ignored: &[Vec<u32>]) -> DpResult<Nat> {
        self.invoke(
            ctx,
            RpcMethod::DeleteNat,
            json!({ "interface_id": interface_id }),
            ignored,
        )
    }

    fn list_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        nat_type: NatListType,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList> {
        match nat_type {
            NatListType::Local => self.list_local_nats(ctx, nat_ip, ignored),
            NatListType::Neighbor => self.list_neighbor_nats(ctx, nat_ip, ignored),

            NatListType::Any => {
                let local = self.list_local_nats(ctx, nat_ip, ignored)?;
                let neighbors = self.list_neighbor_nats(ctx, nat_ip, ignored)?;

                let status = if local.status.is_ok() {
                    neighbors.status
                } else {
                    local.status
                };

                Ok(NatList {
                    items: local.items.into_iter().chain(neighbors.items).collect(),
                    status,
                })
            }
        }
    }

    fn list_local_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList> {
        self.invoke(
            ctx,
            RpcMethod::ListLocalNats,
            json!({ "nat_ip": nat_ip }),
            ignored,
        )
    }

    fn list_neighbor_nats(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        ignored: &[Vec<u32>],
    ) -> DpResult<NatList> {
        self.invoke(
            ctx,
            RpcMethod::ListNeighborNats,
            json!({ "nat_ip": nat_ip }),
            ignored,
        )
    }

    fn create_neighbor_nat(
        &self,
        ctx: &Context,
        nat: &NeighborNat,
        ignored: &[Vec<u32>],
    ) -> DpResult<NeighborNat> {
        self.invoke(ctx, RpcMethod::CreateNeighborNat, nat, ignored)
    }

    fn delete_neighbor_nat(
        &self,
        ctx: &Context,
        nat: &NeighborNat,
        ignored: &[Vec<u32>],
    ) -> DpResult<NeighborNat> {
        self.invoke(ctx, RpcMethod::DeleteNeighborNat, nat, ignored)
    }

    fn list_firewall_rules(
        &self,
        ctx: &Context,
        interface_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRuleList> {
        self.invoke(
            ctx,
            RpcMethod::ListFirewallRules,
            json!({ "interface_id": interface_id }),
            ignored,
        )
    }

    fn get_firewall_rule(
        &self,
        ctx: &Context,
        interface_id: &str,
        rule_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule> {
        self.invoke(
            ctx,
            RpcMethod::GetFirewallRule,
            json!({ "interface_id": interface_id, "rule_id": rule_id }),
            ignored,
        )
    }

    fn create_firewall_rule(
        &self,
        ctx: &Context,
        rule: &FirewallRule,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule> {
        self.invoke(ctx, RpcMethod::CreateFirewallRule, rule, ignored)
    }

    fn delete_firewall_rule(
        &self,
        ctx: &Context,
        interface_id: &str,
        rule_id: &str,
        ignored: &[Vec<u32>],
    ) -> DpResult<FirewallRule> {
        self.invoke(
            ctx,
            RpcMethod::DeleteFirewallRule,
            json!({ "interface_id": interface_id, "rule_id": rule_id }),
            ignored,
        )
    }

    fn check_initialized(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<Initialized> {
        self.invoke(ctx, RpcMethod::CheckInitialized, json!({}), ignored)
    }

    fn initialize(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<Initialized> {
        self.invoke(ctx, RpcMethod::Initialize, json!({}), ignored)
    }

    fn get_vni(
        &self,
        ctx: &Context,
        vni: u32,
        vni_type: u8,
        ignored: &[Vec<u32>],
    ) -> DpResult<Vni> {
        self.invoke(
            ctx,
            RpcMethod::GetVni,
            json!({ "vni": vni, "vni_type": vni_type }),
            ignored,
        )
    }

    fn reset_vni(
        &self,
        ctx: &Context,
        vni: u32,
        vni_type: u8,
        ignored: &[Vec<u32>],
    ) -> DpResult<Vni> {
        self.invoke(
            ctx,
            RpcMethod::ResetVni,
            json!({ "vni": vni, "vni_type": vni_type }),
            ignored,
        )
    }

    fn get_version(
        &self,
        ctx: &Context,
        version: &Version,
        ignored: &[Vec<u32>],
    ) -> DpResult<Version> {
        self.invoke(ctx, RpcMethod::GetVersion, version, ignored)
    }

    fn capture_start(
        &self,
        ctx: &Context,
        capture: &CaptureStart,
        ignored: &[Vec<u32>],
    ) -> DpResult<CaptureStart> {
        self.invoke(ctx, RpcMethod::CaptureStart, capture, ignored)
    }

    fn capture_stop(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<CaptureStop> {
        self.invoke(ctx, RpcMethod::CaptureStop, json!({}), ignored)
    }

    fn capture_status(&self, ctx: &Context, ignored: &[Vec<u32>]) -> DpResult<CaptureStatus> {
        self.invoke(ctx, RpcMethod::CaptureStatus, json!({}), ignored)
    }
}
