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
  error::Error,
  types::{DeploymentOptions, DeploymentTarget},
  Result,
};
use ethcontract::{
  prelude::*,
  transaction::TransactionResult,
  transport::DynTransport,
  web3::types::{TransactionReceipt, U64},
  Bytes,
};

ethcontract::contract!("abi/GnosisSafeProxyFactory.json");

/// The proxy factory entry point used for a deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProxyCreation {
  /// `createProxy`: address follows the factory's own nonce.
  Plain,
  /// `createProxyWithNonce`: CREATE2 address salted with `nonce`.
  WithNonce { nonce: U256 },
  /// `createProxyWithCallback`: as `WithNonce`, then the factory calls
  /// `callback` before the transaction returns.
  WithCallback { nonce: U256, callback: Address },
}

impl ProxyCreation {
  /// Callback and nonce pick the callback path, a nonce alone the salted
  /// path, anything else the plain path. A callback without a nonce is
  /// dropped.
  pub fn select(options: &DeploymentOptions) -> Self {
    match (options.nonce, options.callback_address) {
      (Some(nonce), Some(callback)) => ProxyCreation::WithCallback { nonce, callback },
      (Some(nonce), None) => ProxyCreation::WithNonce { nonce },
      (None, callback) => {
        if let Some(callback) = callback {
          log::warn!(
            "callback {:?} ignored: a callback is only used together with a nonce",
            callback
          );
        }
        ProxyCreation::Plain
      }
    }
  }

  pub fn nonce(&self) -> Option<U256> {
    match self {
      ProxyCreation::Plain => None,
      ProxyCreation::WithNonce { nonce } | ProxyCreation::WithCallback { nonce, .. } => Some(*nonce),
    }
  }
}

/// Submits proxy creations to the factory and waits for their receipts.
#[derive(Clone)]
pub struct ProxyDeployer {
  web3: Web3<DynTransport>,
  account: Account<DynTransport>,
  target: DeploymentTarget,
  confirmations: usize,
}

impl ProxyDeployer {
  pub fn new(
    web3: &Web3<DynTransport>,
    account: Account<DynTransport>,
    target: DeploymentTarget,
  ) -> Self {
    Self {
      web3: web3.clone(),
      account,
      target,
      confirmations: 0,
    }
  }

  /// Extra blocks to wait for on top of inclusion.
  pub fn confirmations(mut self, confirmations: usize) -> Self {
    self.confirmations = confirmations;
    self
  }

  pub fn factory(&self) -> GnosisSafeProxyFactory {
    GnosisSafeProxyFactory::at(&self.web3, self.target.proxy_factory_address())
  }

  pub async fn deploy(
    &self,
    creation: &ProxyCreation,
    initializer: Vec<u8>,
  ) -> Result<TransactionReceipt> {
    let factory = self.factory();
    let singleton = self.target.safe_singleton_address();
    let initializer = Bytes(initializer);
    let tx = match creation {
      ProxyCreation::Plain => factory.create_proxy(singleton, initializer),
      ProxyCreation::WithNonce { nonce } => {
        factory.create_proxy_with_nonce(singleton, initializer, *nonce)
      }
      ProxyCreation::WithCallback { nonce, callback } => {
        factory.create_proxy_with_callback(singleton, initializer, *nonce, *callback)
      }
    };
    log::info!(
      "submitting {:?} to proxy factory {:?}",
      creation,
      self.target.proxy_factory_address()
    );
    let result = tx
      .from(self.account.clone())
      .confirmations(self.confirmations)
      .send()
      .await?;
    let receipt = match result {
      TransactionResult::Receipt(r) => r,
      TransactionResult::Hash(h) => {
        return Err(Error::Transaction(format!(
          "transaction {:?} was submitted but never confirmed",
          h
        )))
      }
    };
    if receipt.status == Some(U64::zero()) {
      return Err(Error::Transaction(format!(
        "transaction {:?} reverted",
        receipt.transaction_hash
      )));
    }
    log::info!("proxy creation confirmed in {:?}", receipt.transaction_hash);
    Ok(receipt)
  }
}
