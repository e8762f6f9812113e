use crate::prelude::*;

#[derive(Clone, Copy)]
pub struct System<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> System<'a> {
    pub(crate) fn new(legacy: &'a dyn LegacyClient) -> Self {
        Self { legacy }
    }

    pub fn check_initialized(&self, ctx: &Context, opts: &[CallOption]) -> DpResult<Initialized> {
        self.legacy.check_initialized(ctx, &to_legacy_ignored(opts))
    }

    pub fn initialize(&self, ctx: &Context, opts: &[CallOption]) -> DpResult<Initialized> {
        self.legacy.initialize(ctx, &to_legacy_ignored(opts))
    }

    pub fn get_vni(
        &self,
        ctx: &Context,
        vni: u32,
        vni_type: u8,
        opts: &[CallOption],
    ) -> DpResult<Vni> {
        self.legacy
            .get_vni(ctx, vni, vni_type, &to_legacy_ignored(opts))
    }

    pub fn reset_vni(
        &self,
        ctx: &Context,
        vni: u32,
        vni_type: u8,
        opts: &[CallOption],
    ) -> DpResult<Vni> {
        self.legacy
            .reset_vni(ctx, vni, vni_type, &to_legacy_ignored(opts))
    }

    /// Exchanges versions: `version` describes this client, the reply adds
    /// the service's side.
    pub fn get_version(
        &self,
        ctx: &Context,
        version: &Version,
        opts: &[CallOption],
    ) -> DpResult<Version> {
        self.legacy
            .get_version(ctx, version, &to_legacy_ignored(opts))
    }
}
