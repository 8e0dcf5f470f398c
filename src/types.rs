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

use crate::{constants::SENTINEL_OWNER, error::Error, Result};
use ethcontract::{Address, U256};
use std::{collections::HashSet, fmt};

/// Desired initial state of a new Safe.
///
/// Every optional field falls back to a no-op value when the configuration
/// is normalized: zero address for addresses, empty payload for `data` and
/// zero for `payment`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SafeAccountConfiguration {
  pub owners: Vec<Address>,
  pub threshold: u64,
  pub to: Option<Address>,
  pub data: Option<Vec<u8>>,
  pub fallback_handler: Option<Address>,
  pub payment_token: Option<Address>,
  pub payment: Option<U256>,
  pub payment_receiver: Option<Address>,
}

impl SafeAccountConfiguration {
  pub fn new(owners: Vec<Address>, threshold: u64) -> Self {
    Self {
      owners,
      threshold,
      ..Default::default()
    }
  }

  pub fn fallback_handler(mut self, handler: Address) -> Self {
    self.fallback_handler = Some(handler);
    self
  }

  /// Delegate call executed once by the Safe during setup.
  pub fn delegate_call(mut self, to: Address, data: Vec<u8>) -> Self {
    self.to = Some(to);
    self.data = Some(data);
    self
  }

  /// Refund of the deployment cost, paid by the new Safe to `receiver`.
  pub fn payment(mut self, token: Address, amount: U256, receiver: Address) -> Self {
    self.payment_token = Some(token);
    self.payment = Some(amount);
    self.payment_receiver = Some(receiver);
    self
  }

  /// Checks owners and threshold without touching the network.
  pub fn validate(&self) -> Result<()> {
    if self.owners.is_empty() {
      return Err(Error::configuration(
        "Invalid owners: it must have at least one",
      ));
    }
    if self.threshold == 0 {
      return Err(Error::configuration(
        "Invalid threshold: it must be greater than or equal to 1",
      ));
    }
    if self.threshold > self.owners.len() as u64 {
      return Err(Error::configuration(
        "Invalid threshold: it must be lower than or equal to owners length",
      ));
    }
    let mut seen = HashSet::with_capacity(self.owners.len());
    for owner in &self.owners {
      if owner.is_zero() || *owner == SENTINEL_OWNER {
        return Err(Error::configuration(format!(
          "Invalid owners: {:?} is a reserved address",
          owner
        )));
      }
      if !seen.insert(*owner) {
        return Err(Error::configuration(format!(
          "Invalid owners: {:?} is listed more than once",
          owner
        )));
      }
    }
    Ok(())
  }

  /// Validates the configuration and fills in every default, producing the
  /// exact argument set of the `setup` call.
  pub fn normalize(self) -> Result<SetupParameters> {
    self.validate()?;
    Ok(SetupParameters {
      owners: self.owners,
      threshold: U256::from(self.threshold),
      to: self.to.unwrap_or_else(Address::zero),
      data: self.data.unwrap_or_default(),
      fallback_handler: self.fallback_handler.unwrap_or_else(Address::zero),
      payment_token: self.payment_token.unwrap_or_else(Address::zero),
      payment: self.payment.unwrap_or_else(U256::zero),
      payment_receiver: self.payment_receiver.unwrap_or_else(Address::zero),
    })
  }
}

/// A validated, fully defaulted Safe configuration. Only obtainable through
/// [`SafeAccountConfiguration::normalize`].
#[derive(Clone, Debug, PartialEq)]
pub struct SetupParameters {
  owners: Vec<Address>,
  threshold: U256,
  to: Address,
  data: Vec<u8>,
  fallback_handler: Address,
  payment_token: Address,
  payment: U256,
  payment_receiver: Address,
}

impl SetupParameters {
  pub fn owners(&self) -> &[Address] {
    &self.owners
  }

  pub fn threshold(&self) -> U256 {
    self.threshold
  }

  pub fn to(&self) -> Address {
    self.to
  }

  pub fn data(&self) -> &[u8] {
    &self.data
  }

  pub fn fallback_handler(&self) -> Address {
    self.fallback_handler
  }

  pub fn payment_token(&self) -> Address {
    self.payment_token
  }

  pub fn payment(&self) -> U256 {
    self.payment
  }

  pub fn payment_receiver(&self) -> Address {
    self.payment_receiver
  }
}

/// Selects the proxy factory entry point.
///
/// A `callback_address` is only honoured together with a `nonce`. On its
/// own it is ignored and the plain creation path is used.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeploymentOptions {
  pub nonce: Option<U256>,
  pub callback_address: Option<Address>,
}

impl DeploymentOptions {
  pub fn with_nonce(nonce: impl Into<U256>) -> Self {
    Self {
      nonce: Some(nonce.into()),
      callback_address: None,
    }
  }

  pub fn callback(mut self, address: Address) -> Self {
    self.callback_address = Some(address);
    self
  }
}

/// The factory and singleton pair a [`crate::factory::SafeFactory`] deploys against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploymentTarget {
  proxy_factory_address: Address,
  safe_singleton_address: Address,
}

impl DeploymentTarget {
  pub const fn new(proxy_factory_address: Address, safe_singleton_address: Address) -> Self {
    Self {
      proxy_factory_address,
      safe_singleton_address,
    }
  }

  pub fn proxy_factory_address(&self) -> Address {
    self.proxy_factory_address
  }

  pub fn safe_singleton_address(&self) -> Address {
    self.safe_singleton_address
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractRole {
  ProxyFactory,
  SafeSingleton,
}

impl fmt::Display for ContractRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ContractRole::ProxyFactory => f.write_str("ProxyFactory"),
      ContractRole::SafeSingleton => f.write_str("SafeSingleton"),
    }
  }
}
