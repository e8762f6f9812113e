use crate::prelude::*;
use ipnet::IpNet;
use std::net::IpAddr;

#[derive(Clone, Copy)]
pub struct LoadBalancers<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> LoadBalancers<'a> {
    pub(crate) fn new(legacy: &'a dyn LegacyClient) -> Self {
        Self { legacy }
    }

    pub fn get(&self, ctx: &Context, id: &str, opts: &[CallOption]) -> DpResult<LoadBalancer> {
        self.legacy
            .get_load_balancer(ctx, id, &to_legacy_ignored(opts))
    }

    pub fn list(&self, ctx: &Context, opts: &[CallOption]) -> DpResult<LoadBalancerList> {
        self.legacy
            .list_load_balancers(ctx, &to_legacy_ignored(opts))
    }

    pub fn create(
        &self,
        ctx: &Context,
        lb: &LoadBalancer,
        opts: &[CallOption],
    ) -> DpResult<LoadBalancer> {
        self.legacy
            .create_load_balancer(ctx, lb, &to_legacy_ignored(opts))
    }

    pub fn delete(&self, ctx: &Context, id: &str, opts: &[CallOption]) -> DpResult<LoadBalancer> {
        self.legacy
            .delete_load_balancer(ctx, id, &to_legacy_ignored(opts))
    }

    pub fn prefixes(&self) -> LoadBalancerPrefixes<'a> {
        LoadBalancerPrefixes {
            legacy: self.legacy,
        }
    }

    pub fn targets(&self) -> LoadBalancerTargets<'a> {
        LoadBalancerTargets {
            legacy: self.legacy,
        }
    }
}

/// Prefixes routed to load balancers, scoped by the interface they're
/// announced through.
#[derive(Clone, Copy)]
pub struct LoadBalancerPrefixes<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> LoadBalancerPrefixes<'a> {
    pub fn list(
        &self,
        ctx: &Context,
        interface_id: &str,
        opts: &[CallOption],
    ) -> DpResult<PrefixList> {
        self.legacy
            .list_load_balancer_prefixes(ctx, interface_id, &to_legacy_ignored(opts))
    }

    pub fn create(
        &self,
        ctx: &Context,
        prefix: &LoadBalancerPrefix,
        opts: &[CallOption],
    ) -> DpResult<LoadBalancerPrefix> {
        self.legacy
            .create_load_balancer_prefix(ctx, prefix, &to_legacy_ignored(opts))
    }

    pub fn delete(
        &self,
        ctx: &Context,
        interface_id: &str,
        prefix: &IpNet,
        opts: &[CallOption],
    ) -> DpResult<LoadBalancerPrefix> {
        self.legacy
            .delete_load_balancer_prefix(ctx, interface_id, prefix, &to_legacy_ignored(opts))
    }
}

#[derive(Clone, Copy)]
pub struct LoadBalancerTargets<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> LoadBalancerTargets<'a> {
    pub fn list(
        &self,
        ctx: &Context,
        lb_id: &str,
        opts: &[CallOption],
    ) -> DpResult<LoadBalancerTargetList> {
        self.legacy
            .list_load_balancer_targets(ctx, lb_id, &to_legacy_ignored(opts))
    }

    pub fn create(
        &self,
        ctx: &Context,
        target: &LoadBalancerTarget,
        opts: &[CallOption],
    ) -> DpResult<LoadBalancerTarget> {
        self.legacy
            .create_load_balancer_target(ctx, target, &to_legacy_ignored(opts))
    }

    pub fn delete(
        &self,
        ctx: &Context,
        lb_id: &str,
        target_ip: &IpAddr,
        opts: &[CallOption],
    ) -> DpResult<LoadBalancerTarget> {
        self.legacy
            .delete_load_balancer_target(ctx, lb_id, target_ip, &to_legacy_ignored(opts))
    }
}
