mod rpc;

#[cfg(test)]
mod recording;

pub use self::rpc::*;

#[cfg(test)]
pub use self::recording::*;
