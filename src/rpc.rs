#[cfg(test)]
mod fake;

#[cfg(test)]
pub use self::fake::*;

use crate::Context;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Raw transport towards dpservice.
///
/// This is the seam for whatever actually carries the calls (usually
/// generated gRPC stubs). Requests and replies travel as JSON objects shaped
/// after the corresponding models; every reply is expected to carry a
/// `status` object with `code` and `message`.
pub trait DpdkRpc: Send + Sync {
    fn call(&self, ctx: &Context, method: RpcMethod, request: Value) -> anyhow::Result<Value>;
}

impl<R> DpdkRpc for Arc<R>
where
    R: DpdkRpc + ?Sized,
{
    fn call(&self, ctx: &Context, method: RpcMethod, request: Value) -> anyhow::Result<Value> {
        (**self).call(ctx, method, request)
    }
}

/// Remote procedures exposed by dpservice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RpcMethod {
    GetLoadBalancer,
    ListLoadBalancers,
    CreateLoadBalancer,
    DeleteLoadBalancer,

    ListLoadBalancerPrefixes,
    CreateLoadBalancerPrefix,
    DeleteLoadBalancerPrefix,

    ListLoadBalancerTargets,
    CreateLoadBalancerTarget,
    DeleteLoadBalancerTarget,

    GetInterface,
    ListInterfaces,
    CreateInterface,
    DeleteInterface,

    GetVirtualIp,
    CreateVirtualIp,
    DeleteVirtualIp,

    ListPrefixes,
    CreatePrefix,
    DeletePrefix,

    ListRoutes,
    CreateRoute,
    DeleteRoute,

    GetNat,
    CreateNat,
    DeleteNat,
    ListLocalNats,
    ListNeighborNats,
    CreateNeighborNat,
    DeleteNeighborNat,

    ListFirewallRules,
    GetFirewallRule,
    CreateFirewallRule,
    DeleteFirewallRule,

    CheckInitialized,
    Initialize,
    GetVni,
    ResetVni,
    GetVersion,

    CaptureStart,
    CaptureStop,
    CaptureStatus,
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
