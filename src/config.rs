// Copyright 2021-2022 Semantic Network Ltd.
// This file is part of safe-factory.

// safe-factory is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// safe-factory is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with safe-factory.  If not, see <http://www.gnu.org/licenses/>.

use crate::{
  constants::Network,
  error::Error,
  factory::SafeFactory,
  signer::Signer,
  types::{DeploymentOptions, DeploymentTarget, SafeAccountConfiguration},
  utils, Result,
};
use ethcontract::{transport::DynTransport, Account, Http, PrivateKey, Web3, U256};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
  pub network: String,
  pub chain_id: u64,
  pub private_key: String,
  pub eth_url: String,
  pub owners: Vec<String>,
  pub threshold: u64,
  pub to: Option<String>,
  pub data: Option<String>,
  pub fallback_handler: Option<String>,
  pub payment_token: Option<String>,
  pub payment: Option<String>,
  pub payment_receiver: Option<String>,
  pub salt_nonce: Option<String>,
  pub callback_address: Option<String>,
  pub proxy_factory_address: Option<String>,
  pub safe_singleton_address: Option<String>,
  pub confirmations: Option<usize>,
}

/// Reads `config/config.<network>.json`, overridden by `SAFE_*` environment
/// variables.
pub fn load_config(network: &str) -> Result<Config> {
  let fp = format!("config/config.{}.json", network);
  let mut settings = ::config::Config::default();
  settings.merge(::config::File::with_name(fp.as_str()).required(false))?;
  settings.merge(::config::Environment::with_prefix("SAFE"))?;
  let sets = settings.try_into::<Config>()?;
  Ok(sets)
}

fn parse_u256(value: &str) -> Result<U256> {
  let value = value.trim();
  let parsed = match value.strip_prefix("0x") {
    Some(hex) => U256::from_str_radix(hex, 16).ok(),
    None => U256::from_dec_str(value).ok(),
  };
  parsed.ok_or_else(|| Error::configuration(format!("invalid integer {}", value)))
}

impl Config {
  /// Offline account for `private_key`, connected to `eth_url`.
  pub fn signer(&self) -> Result<Signer> {
    let priv_key = PrivateKey::from_str(self.private_key.as_str())
      .map_err(|e| Error::configuration(format!("couldnt parse private key: {}", e)))?;
    let web3 = Web3::new(DynTransport::new(Http::new(self.eth_url.as_str())?));
    let account = Account::Offline(priv_key, Some(self.chain_id));
    Ok(Signer::connected(&web3, account))
  }

  pub fn safe_account_configuration(&self) -> Result<SafeAccountConfiguration> {
    let owners = self
      .owners
      .iter()
      .map(|a| utils::parse_address(a))
      .collect::<Result<Vec<_>>>()?;
    Ok(SafeAccountConfiguration {
      owners,
      threshold: self.threshold,
      to: utils::parse_optional_address(self.to.as_deref())?,
      data: self.data.as_deref().map(utils::parse_hex_data).transpose()?,
      fallback_handler: utils::parse_optional_address(self.fallback_handler.as_deref())?,
      payment_token: utils::parse_optional_address(self.payment_token.as_deref())?,
      payment: self.payment.as_deref().map(parse_u256).transpose()?,
      payment_receiver: utils::parse_optional_address(self.payment_receiver.as_deref())?,
    })
  }

  pub fn deployment_options(&self) -> Result<DeploymentOptions> {
    Ok(DeploymentOptions {
      nonce: self.salt_nonce.as_deref().map(parse_u256).transpose()?,
      callback_address: utils::parse_optional_address(self.callback_address.as_deref())?,
    })
  }

  /// An explicit factory/singleton pair wins over the `network` preset.
  pub fn deployment_target(&self) -> Result<DeploymentTarget> {
    match (&self.proxy_factory_address, &self.safe_singleton_address) {
      (Some(factory), Some(singleton)) => Ok(DeploymentTarget::new(
        utils::parse_address(factory)?,
        utils::parse_address(singleton)?,
      )),
      (None, None) => Ok(Network::from_str(&self.network)?.deployment()),
      _ => Err(Error::configuration(
        "proxy_factory_address and safe_singleton_address must be set together",
      )),
    }
  }

  pub fn safe_factory(&self) -> Result<SafeFactory> {
    let factory = SafeFactory::new(self.signer()?, self.deployment_target()?)?;
    Ok(factory.with_confirmations(self.confirmations.unwrap_or(0)))
  }
}
