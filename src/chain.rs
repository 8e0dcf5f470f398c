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
  types::{ContractRole, DeploymentTarget},
  Result,
};
use async_trait::async_trait;
use ethcontract::{transport::DynTransport, Address, Web3};

/// Read access to deployed bytecode.
#[async_trait]
pub trait ChainReader: Send + Sync {
  async fn get_code(&self, address: Address) -> Result<Vec<u8>>;

  /// An account with empty code is not a contract.
  async fn is_contract_deployed(&self, address: Address) -> Result<bool> {
    Ok(!self.get_code(address).await?.is_empty())
  }
}

#[async_trait]
impl ChainReader for Web3<DynTransport> {
  async fn get_code(&self, address: Address) -> Result<Vec<u8>> {
    let code = self.eth().code(address, None).await?;
    Ok(code.0)
  }
}

pub async fn ensure_deployed<R>(reader: &R, address: Address, role: ContractRole) -> Result<()>
where
  R: ChainReader + ?Sized,
{
  if reader.is_contract_deployed(address).await? {
    log::debug!("{} found at {:?}", role, address);
    Ok(())
  } else {
    Err(Error::DeploymentValidation { role, address })
  }
}

/// Checks the proxy factory first, then the singleton. Stops at the first
/// missing contract.
pub async fn validate_deployment<R>(reader: &R, target: &DeploymentTarget) -> Result<()>
where
  R: ChainReader + ?Sized,
{
  ensure_deployed(
    reader,
    target.proxy_factory_address(),
    ContractRole::ProxyFactory,
  )
  .await?;
  ensure_deployed(
    reader,
    target.safe_singleton_address(),
    ContractRole::SafeSingleton,
  )
  .await
}
