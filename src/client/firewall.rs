use crate::prelude::*;

/// Firewall rules, scoped by the interface they guard.
#[derive(Clone, Copy)]
pub struct Firewall<'a> {
    legacy: &'a dyn LegacyClient,
}

impl<'a> Firewall<'a> {
    pub(crate) fn new(legacy: &'a dyn LegacyClient) -> Self {
        Self { legacy }
    }

    pub fn list(
        &self,
        ctx: &Context,
        interface_id: &str,
        opts: &[CallOption],
    ) -> DpResult<FirewallRuleList> {
        self.legacy
            .list_firewall_rules(ctx, interface_id, &to_legacy_ignored(opts))
    }

    pub fn get(
        &self,
        ctx: &Context,
        interface_id: &str,
        rule_id: &str,
        opts: &[CallOption],
    ) -> DpResult<FirewallRule> {
        self.legacy
            .get_firewall_rule(ctx, interface_id, rule_id, &to_legacy_ignored(opts))
    }

    pub fn create(
        &self,
        ctx: &Context,
        rule: &FirewallRule,
        opts: &[CallOption],
    ) -> DpResult<FirewallRule> {
        self.legacy
            .create_firewall_rule(ctx, rule, &to_legacy_ignored(opts))
    }

    pub fn delete(
        &self,
        ctx: &Context,
        interface_id: &str,
        rule_id: &str,
        opts: &[CallOption],
    ) -> DpResult<FirewallRule> {
        self.legacy
            .delete_firewall_rule(ctx, interface_id, rule_id, &to_legacy_ignored(opts))
    }
}
