//! Oxford Core - request shaping and dispatch for the Project Oxford APIs.
//!
//! Commands are described by static [`Operation`] descriptors. A command
//! supplies a [`Call`] (path parameters, query overrides, body), and the
//! [`Oxford`] client builds the HTTP request, sends it once, and hands back
//! either decoded JSON or a file on disk.
//!
//! # Architecture
//!
//! ```text
//! argument → ImageSource → Call → RequestBuilder → Dispatcher → output
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use oxford_core::{catalog, Call, Config, ImageSource, Oxford};
//!
//! #[tokio::main]
//! async fn main() -> oxford_core::Result<()> {
//!     let config = Config::load_from(&Config::default_path())?;
//!     let oxford = Oxford::new(config)?;
//!
//!     let image = ImageSource::resolve("./portrait.jpg")?;
//!     let faces = oxford.call(&catalog::DETECT, Call::new().image(image)).await?;
//!     println!("{}", oxford_core::output::render_json(&faces));
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

// Re-exports for convenient access
pub use api::{catalog, payload, Call, Dispatcher, Operation, Payload, RequestBuilder, Service};
pub use config::Config;
pub use error::{ConfigError, OxfordError, Result};
pub use input::ImageSource;

use serde_json::Value;
use std::path::Path;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Oxford client - configuration plus a dispatcher.
pub struct Oxford {
    config: Config,
    dispatcher: Dispatcher,
}

impl Oxford {
    /// Create a client with a fresh HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_dispatcher(config, Dispatcher::new()?))
    }

    pub fn with_dispatcher(config: Config, dispatcher: Dispatcher) -> Self {
        tracing::debug!("Initializing Oxford client v{} for {}", VERSION, config.oxford_url);
        Self { config, dispatcher }
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a JSON operation.
    pub async fn call(&self, op: &Operation, call: Call) -> Result<Value> {
        let request = RequestBuilder::new(&self.config).build(op, call)?;
        self.dispatcher.call_json(request).await
    }

    /// Run a binary operation, writing the result to `dest`.
    pub async fn call_to_file(&self, op: &Operation, call: Call, dest: &Path) -> Result<u64> {
        let request = RequestBuilder::new(&self.config).build(op, call)?;
        self.dispatcher.call_to_file(request, dest).await
    }
}
