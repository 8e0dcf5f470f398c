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

use crate::{error::Error, Result};
use ethcontract::{transport::DynTransport, Account, Address, Web3};

/// The account that pays for and signs deployments, optionally bound to a
/// network connection.
#[derive(Clone)]
pub struct Signer {
  account: Account<DynTransport>,
  web3: Option<Web3<DynTransport>>,
}

impl Signer {
  /// A signer with no network connection. It can be connected later.
  pub fn new(account: Account<DynTransport>) -> Self {
    Self {
      account,
      web3: None,
    }
  }

  pub fn connected(web3: &Web3<DynTransport>, account: Account<DynTransport>) -> Self {
    Self {
      account,
      web3: Some(web3.clone()),
    }
  }

  pub fn connect(mut self, web3: &Web3<DynTransport>) -> Self {
    self.web3 = Some(web3.clone());
    self
  }

  pub fn address(&self) -> Address {
    self.account.address()
  }

  pub fn account(&self) -> &Account<DynTransport> {
    &self.account
  }

  pub fn web3(&self) -> Option<&Web3<DynTransport>> {
    self.web3.as_ref()
  }

  pub(crate) fn require_web3(&self) -> Result<&Web3<DynTransport>> {
    self
      .web3
      .as_ref()
      .ok_or_else(|| Error::configuration("signer must be bound to a network connection"))
  }
}
