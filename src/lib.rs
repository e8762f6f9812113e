//! A resource-scoped client for dpservice.
//!
//! The flat [`LegacyClient`] exposes one method per remote operation; [`Client`]
//! regroups those operations into handles per resource (load balancers,
//! interfaces, routes, NATs, firewall rules, system, capture) and their
//! sub-resources, with per-call [`CallOption`]s instead of positional
//! ignored-code groups.
//!
//! ```
//! use dpservice_client::{with_ignored_codes, Client, Context, DpdkRpc, RpcMethod};
//! use serde_json::Value;
//!
//! struct Loopback;
//!
//! impl DpdkRpc for Loopback {
//!     fn call(&self, _: &Context, _: RpcMethod, request: Value) -> anyhow::Result<Value> {
//!         Ok(request)
//!     }
//! }
//!
//! let client = Client::from_rpc(Loopback);
//! let ctx = Context::background();
//!
//! let routes = client.routes().list(&ctx, 42, &[])?;
//! assert!(routes.items.is_empty());
//!
//! let prefixes = client
//!     .load_balancers()
//!     .prefixes()
//!     .list(&ctx, "iface-1", &[with_ignored_codes([1001])])?;
//! assert!(prefixes.items.is_empty());
//! # Ok::<_, dpservice_client::DpError>(())
//! ```
//!
//! Call sites that still hold a flat client can migrate one at a time through
//! [`Client::from_legacy`], which shares the existing client instead of opening
//! a new transport.

pub use self::{
    client::*, config::*, context::*, error::*, legacy::*, models::*, options::*, rpc::*,
};

mod client;
mod config;
mod context;
mod error;
mod legacy;
mod models;
mod options;
mod rpc;

mod prelude {
    pub use crate::*;
    pub use anyhow::Context as _;

    #[cfg(test)]
    pub use pretty_assertions as pa;
}
