mod capture;
mod firewall;
mod interfaces;
mod load_balancers;
mod nats;
mod routes;
mod system;

pub use self::{
    capture::*, firewall::*, interfaces::*, load_balancers::*, nats::*, routes::*, system::*,
};

use crate::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Entry point of the resource-scoped API.
///
/// Owns a reference to the shared flat client and hands out lightweight
/// handles per resource. Handles borrow that client and carry no other
/// state, so they can be created on every call and thrown away right after.
#[derive(Clone)]
pub struct Client {
    legacy: Arc<dyn LegacyClient>,
}

impl Client {
    /// Creates a client talking through given transport.
    pub fn from_rpc<R>(rpc: R) -> Self
    where
        R: DpdkRpc + 'static,
    {
        Self::from_rpc_with_config(rpc, Config::default())
    }

    pub fn from_rpc_with_config<R>(rpc: R, config: Config) -> Self
    where
        R: DpdkRpc + 'static,
    {
        Self::from_legacy(Arc::new(RpcClient::with_config(rpc, config)))
    }

    /// Adapts an already existing flat client, sharing it instead of opening
    /// a new transport; useful when migrating call sites one by one.
    pub fn from_legacy(legacy: Arc<dyn LegacyClient>) -> Self {
        Self { legacy }
    }

    pub fn legacy(&self) -> &Arc<dyn LegacyClient> {
        &self.legacy
    }

    pub fn load_balancers(&self) -> LoadBalancers<'_> {
        LoadBalancers::new(&*self.legacy)
    }

    pub fn interfaces(&self) -> Interfaces<'_> {
        Interfaces::new(&*self.legacy)
    }

    pub fn routes(&self) -> Routes<'_> {
        Routes::new(&*self.legacy)
    }

    pub fn nats(&self) -> Nats<'_> {
        Nats::new(&*self.legacy)
    }

    pub fn firewall(&self) -> Firewall<'_> {
        Firewall::new(&*self.legacy)
    }

    pub fn system(&self) -> System<'_> {
        System::new(&*self.legacy)
    }

    pub fn capture(&self) -> Capture<'_> {
        Capture::new(&*self.legacy)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
