use crate::prelude::*;
use ipnet::IpNet;

#[derive(Clone, Copy)]
pub struct Interfaces<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> Interfaces<'a> {
    pub(crate) fn new(legacy: &'a dyn LegacyClient) -> Self {
        Self { legacy }
    }

    pub fn get(&self, ctx: &Context, id: &str, opts: &[CallOption]) -> DpResult<Interface> {
        self.legacy.get_interface(ctx, id, &to_legacy_ignored(opts))
    }

    pub fn list(&self, ctx: &Context, opts: &[CallOption]) -> DpResult<InterfaceList> {
        self.legacy.list_interfaces(ctx, &to_legacy_ignored(opts))
    }

    pub fn create(
        &self,
        ctx: &Context,
        iface: &Interface,
        opts: &[CallOption],
    ) -> DpResult<Interface> {
        self.legacy
            .create_interface(ctx, iface, &to_legacy_ignored(opts))
    }

    pub fn delete(&self, ctx: &Context, id: &str, opts: &[CallOption]) -> DpResult<Interface> {
        self.legacy
            .delete_interface(ctx, id, &to_legacy_ignored(opts))
    }

    pub fn vip(&self) -> VirtualIps<'a> {
        VirtualIps {
            legacy: self.legacy,
        }
    }

    pub fn prefixes(&self) -> InterfacePrefixes<'a> {
        InterfacePrefixes {
            legacy: self.legacy,
        }
    }

    /// Same as [`Client::firewall()`]; rules are per interface anyway.
    pub fn firewall(&self) -> Firewall<'a> {
        Firewall::new(self.legacy)
    }
}

/// The single virtual IP an interface can have.
#[derive(Clone, Copy)]
pub struct VirtualIps<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> VirtualIps<'a> {
    pub fn get(
        &self,
        ctx: &Context,
        interface_id: &str,
        opts: &[CallOption],
    ) -> DpResult<VirtualIp> {
        self.legacy
            .get_virtual_ip(ctx, interface_id, &to_legacy_ignored(opts))
    }

    pub fn create(
        &self,
        ctx: &Context,
        vip: &VirtualIp,
        opts: &[CallOption],
    ) -> DpResult<VirtualIp> {
        self.legacy
            .create_virtual_ip(ctx, vip, &to_legacy_ignored(opts))
    }

    pub fn delete(
        &self,
        ctx: &Context,
        interface_id: &str,
        opts: &[CallOption],
    ) -> DpResult<VirtualIp> {
        self.legacy
            .delete_virtual_ip(ctx, interface_id, &to_legacy_ignored(opts))
    }
}

#[derive(Clone, Copy)]
pub struct InterfacePrefixes<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> InterfacePrefixes<'a> {
    pub fn list(
        &self,
        ctx: &Context,
        interface_id: &str,
        opts: &[CallOption],
    ) -> DpResult<PrefixList> {
        self.legacy
            .list_prefixes(ctx, interface_id, &to_legacy_ignored(opts))
    }

    pub fn create(&self, ctx: &Context, prefix: &Prefix, opts: &[CallOption]) -> DpResult<Prefix> {
        self.legacy
            .create_prefix(ctx, prefix, &to_legacy_ignored(opts))
    }

    pub fn delete(
        &self,
        ctx: &Context,
        interface_id: &str,
        prefix: &IpNet,
        opts: &[CallOption],
    ) -> DpResult<Prefix> {
        self.legacy
            .delete_prefix(ctx, interface_id, prefix, &to_legacy_ignored(opts))
    }
}
