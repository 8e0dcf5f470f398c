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
  chain,
  constants::Network,
  create2,
  deployment::{ProxyCreation, ProxyDeployer},
  encoding, receipt,
  safe::SafeClient,
  signer::Signer,
  types::{ContractRole, DeploymentOptions, DeploymentTarget, SafeAccountConfiguration},
  Result,
};
use ethcontract::{transport::DynTransport, Address, Web3, U256};

/// Deploys Safe proxies against one fixed factory/singleton pair.
#[derive(Clone)]
pub struct SafeFactory {
  web3: Web3<DynTransport>,
  signer: Signer,
  target: DeploymentTarget,
  confirmations: usize,
}

impl SafeFactory {
  /// Fails if `signer` is not connected to a network.
  pub fn new(signer: Signer, target: DeploymentTarget) -> Result<Self> {
    let web3 = signer.require_web3()?.clone();
    Ok(Self {
      web3,
      signer,
      target,
      confirmations: 0,
    })
  }

  pub fn for_network(network: Network, signer: Signer) -> Result<Self> {
    Self::new(signer, network.deployment())
  }

  pub fn on_rsk_testnet(signer: Signer) -> Result<Self> {
    Self::for_network(Network::RskTestnet, signer)
  }

  pub fn on_rsk_mainnet(signer: Signer) -> Result<Self> {
    Self::for_network(Network::RskMainnet, signer)
  }

  pub fn with_confirmations(mut self, confirmations: usize) -> Self {
    self.confirmations = confirmations;
    self
  }

  pub fn target(&self) -> &DeploymentTarget {
    &self.target
  }

  pub fn signer(&self) -> &Signer {
    &self.signer
  }

  fn deployer(&self) -> ProxyDeployer {
    ProxyDeployer::new(&self.web3, self.signer.account().clone(), self.target)
      .confirmations(self.confirmations)
  }

  /// Deploys a new Safe proxy initialised with `config` and returns a handle
  /// to it.
  ///
  /// Steps, each failing the whole call:
  /// 1. validate and normalize `config` (no network access)
  /// 2. check that the factory and the singleton have code
  /// 3. encode the `setup` initializer
  /// 4. pick the factory entry point from `options`
  /// 5. submit and wait for the receipt
  /// 6. read the proxy address from the `ProxyCreation` event
  pub async fn create_safe(
    &self,
    config: SafeAccountConfiguration,
    options: DeploymentOptions,
  ) -> Result<SafeClient> {
    let params = config.normalize()?;
    log::debug!(
      "configuration validated: {} owners, threshold {}",
      params.owners().len(),
      params.threshold()
    );

    chain::validate_deployment(&self.web3, &self.target).await?;
    log::debug!("proxy factory and singleton are deployed");

    let initializer = encoding::encode_setup_call(&params)?;
    let creation = ProxyCreation::select(&options);

    let tx_receipt = self.deployer().deploy(&creation, initializer).await?;
    let address = receipt::resolve_from_receipt(&tx_receipt)?;
    log::info!(
      "Safe proxy {:?} created in {:?}",
      address,
      tx_receipt.transaction_hash
    );

    Ok(SafeClient::new(&self.web3, address, self.signer.clone()))
  }

  /// Address `create_safe` will produce for `config` with the salt `nonce`,
  /// with or without a callback. Reads the proxy creation code from the
  /// factory.
  pub async fn predict_safe_address(
    &self,
    config: SafeAccountConfiguration,
    nonce: U256,
  ) -> Result<Address> {
    let params = config.normalize()?;
    chain::ensure_deployed(
      &self.web3,
      self.target.proxy_factory_address(),
      ContractRole::ProxyFactory,
    )
    .await?;
    let initializer = encoding::encode_setup_call(&params)?;
    let creation_code = self.deployer().factory().proxy_creation_code().call().await?;
    Ok(create2::proxy_address_with_nonce(
      self.target.proxy_factory_address(),
      self.target.safe_singleton_address(),
      &initializer,
      nonce,
      &creation_code.0,
    ))
  }
}
