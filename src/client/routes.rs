use crate::prelude::*;
use ipnet::IpNet;

/// Routes of a virtual network, keyed by its VNI.
#[derive(Clone, Copy)]
pub struct Routes<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> Routes<'a> {
    pub(crate) fn new(legacy: &'a dyn LegacyClient) -> Self {
        Self { legacy }
    }

    pub fn list(&self, ctx: &Context, vni: u32, opts: &[CallOption]) -> DpResult<RouteList> {
        self.legacy.list_routes(ctx, vni, &to_legacy_ignored(opts))
    }

    pub fn create(&self, ctx: &Context, route: &Route, opts: &[CallOption]) -> DpResult<Route> {
        self.legacy
            .create_route(ctx, route, &to_legacy_ignored(opts))
    }

    pub fn delete(
        &self,
        ctx: &Context,
        vni: u32,
        prefix: &IpNet,
        opts: &[CallOption],
    ) -> DpResult<Route> {
        self.legacy
            .delete_route(ctx, vni, prefix, &to_legacy_ignored(opts))
    }
}
