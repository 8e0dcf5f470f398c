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

use crate::{signer::Signer, Result};
use ethcontract::{prelude::*, transport::DynTransport};

ethcontract::contract!("abi/GnosisSafe.json");

/// Handle to a deployed Safe proxy, bound to the signer that created it.
#[derive(Clone)]
pub struct SafeClient {
  web3: Web3<DynTransport>,
  address: Address,
  signer: Signer,
}

impl SafeClient {
  pub fn new(web3: &Web3<DynTransport>, address: Address, signer: Signer) -> Self {
    Self {
      web3: web3.clone(),
      address,
      signer,
    }
  }

  pub fn address(&self) -> H160 {
    self.address
  }

  pub fn signer(&self) -> &Signer {
    &self.signer
  }

  pub fn contract(&self) -> GnosisSafe {
    GnosisSafe::at(&self.web3, self.address)
  }

  pub async fn get_owners(&self) -> Result<Vec<H160>> {
    let os = self.contract().get_owners().call().await?;
    Ok(os)
  }

  pub async fn get_threshold(&self) -> Result<u64> {
    let t = self.contract().get_threshold().call().await?;
    Ok(t.as_u64())
  }

  pub async fn is_owner(&self, address: H160) -> Result<bool> {
    Ok(self.contract().is_owner(address).call().await?)
  }

  pub async fn nonce(&self) -> Result<u64> {
    let n = self.contract().nonce().call().await?;
    Ok(n.as_u64())
  }
}
