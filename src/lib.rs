//! Deploys Gnosis Safe multisig accounts as proxies through a
//! `GnosisSafeProxyFactory` and hands back a [`SafeClient`] for the new Safe.
//!
//! ```rust,ignore
//! let signer = Signer::connected(&web3, account);
//! let factory = SafeFactory::on_rsk_testnet(signer)?;
//! let safe = factory
//!   .create_safe(
//!     SafeAccountConfiguration::new(vec![a, b, c], 2),
//!     DeploymentOptions::with_nonce(123456u64),
//!   )
//!   .await?;
//! assert_eq!(safe.get_threshold().await?, 2);
//! ```

pub mod chain;
pub mod config;
pub mod constants;
pub mod create2;
pub mod deployment;
pub mod encoding;
pub mod error;
pub mod factory;
pub mod receipt;
pub mod safe;
pub mod signer;
pub mod types;
pub mod utils;

pub use constants::Network;
pub use deployment::ProxyCreation;
pub use error::Error;
pub use factory::SafeFactory;
pub use safe::SafeClient;
pub use signer::Signer;
pub use types::{
  ContractRole, DeploymentOptions, DeploymentTarget, SafeAccountConfiguration, SetupParameters,
};

pub type Result<T> = std::result::Result<T, error::Error>;
