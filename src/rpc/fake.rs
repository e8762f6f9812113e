use crate::{Context, DpdkRpc, RpcMethod};
use anyhow::anyhow;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Transport double: records every call and answers with scripted replies
/// (`{}` by default).
#[derive(Debug, Default)]
pub struct FakeRpc {
    replies: HashMap<RpcMethod, Value>,
    errors: HashSet<RpcMethod>,
    calls: Mutex<Vec<FakeRpcCall>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FakeRpcCall {
    pub method: RpcMethod,
    pub request: Value,
}

impl FakeRpc {
    pub fn reply(&mut self, method: RpcMethod, reply: Value) {
        self.replies.insert(method, reply);
    }

    pub fn inject_error(&mut self, method: RpcMethod) {
        self.errors.insert(method);
    }

    pub fn calls(&self) -> Vec<FakeRpcCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl DpdkRpc for FakeRpc {
    fn call(&self, _: &Context, method: RpcMethod, request: Value) -> anyhow::Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push(FakeRpcCall { method, request });

        if self.errors.contains(&method) {
            return Err(anyhow!("connection reset"));
        }

        Ok(self.replies.get(&method).cloned().unwrap_or_else(|| json!({})))
    }
}
