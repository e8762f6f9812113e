use crate::prelude::*;
use std::net::IpAddr;

#[derive(Clone, Copy)]
pub struct Nats<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> Nats<'a> {
    pub(crate) fn new(legacy: &'a dyn LegacyClient) -> Self {
        Self { legacy }
    }

    pub fn get(&self, ctx: &Context, interface_id: &str, opts: &[CallOption]) -> DpResult<Nat> {
        self.legacy
            .get_nat(ctx, interface_id, &to_legacy_ignored(opts))
    }

    pub fn create(&self, ctx: &Context, nat: &Nat, opts: &[CallOption]) -> DpResult<Nat> {
        self.legacy.create_nat(ctx, nat, &to_legacy_ignored(opts))
    }

    pub fn delete(&self, ctx: &Context, interface_id: &str, opts: &[CallOption]) -> DpResult<Nat> {
        self.legacy
            .delete_nat(ctx, interface_id, &to_legacy_ignored(opts))
    }

    /// Lists both local and neighbor entries of given NAT address.
    pub fn list_any(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        opts: &[CallOption],
    ) -> DpResult<NatList> {
        self.legacy
            .list_nats(ctx, nat_ip, NatListType::Any, &to_legacy_ignored(opts))
    }

    pub fn list_local(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        opts: &[CallOption],
    ) -> DpResult<NatList> {
        self.legacy
            .list_local_nats(ctx, nat_ip, &to_legacy_ignored(opts))
    }

    pub fn list_neighbors(
        &self,
        ctx: &Context,
        nat_ip: &IpAddr,
        opts: &[CallOption],
    ) -> DpResult<NatList> {
        self.legacy
            .list_neighbor_nats(ctx, nat_ip, &to_legacy_ignored(opts))
    }

    pub fn create_neighbor(
        &self,
        ctx: &Context,
        nat: &NeighborNat,
        opts: &[CallOption],
    ) -> DpResult<NeighborNat> {
        self.legacy
            .create_neighbor_nat(ctx, nat, &to_legacy_ignored(opts))
    }

    pub fn delete_neighbor(
        &self,
        ctx: &Context,
        nat: &NeighborNat,
        opts: &[CallOption],
    ) -> DpResult<NeighborNat> {
        self.legacy
            .delete_neighbor_nat(ctx, nat, &to_legacy_ignored(opts))
    }
}
