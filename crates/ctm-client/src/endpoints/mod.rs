//! Endpoint groups of the CoinMarketCap API

pub mod listings;
pub mod map;

use crate::transport::Transport;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $crate::endpoints::EndpointBase for $struct_name {
      fn transport(&self) -> &std::sync::Arc<$crate::transport::Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;
