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

use crate::{error::Error, types::DeploymentTarget};
use ethcontract::H160;
use std::{fmt, str::FromStr};

/// Head of the owner linked list inside the Safe; can never be an owner.
pub const SENTINEL_OWNER: H160 = H160([
  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
  0x00, 0x00, 0x00, 0x01,
]);

// 0xffd41b816f2821e579b4da85c7352bf4f17e4fa5
const RSK_SAFE_SINGLETON: H160 = H160([
  0xff, 0xd4, 0x1b, 0x81, 0x6f, 0x28, 0x21, 0xe5, 0x79, 0xb4, 0xda, 0x85, 0xc7, 0x35, 0x2b, 0xf4,
  0xf1, 0x7e, 0x4f, 0xa5,
]);

// 0x5b836117aed4ca4dee8e2e464f97f7f59b426c5a
const RSK_PROXY_FACTORY: H160 = H160([
  0x5b, 0x83, 0x61, 0x17, 0xae, 0xd4, 0xca, 0x4d, 0xee, 0x8e, 0x2e, 0x46, 0x4f, 0x97, 0xf7, 0xf5,
  0x9b, 0x42, 0x6c, 0x5a,
]);

pub const RSK_TESTNET_DEPLOYMENT: DeploymentTarget =
  DeploymentTarget::new(RSK_PROXY_FACTORY, RSK_SAFE_SINGLETON);

// TODO: replace with the mainnet singleton/factory pair once it is published
pub const RSK_MAINNET_DEPLOYMENT: DeploymentTarget =
  DeploymentTarget::new(RSK_PROXY_FACTORY, RSK_SAFE_SINGLETON);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
  RskTestnet,
  RskMainnet,
}

impl Network {
  pub fn deployment(&self) -> DeploymentTarget {
    match self {
      Network::RskTestnet => RSK_TESTNET_DEPLOYMENT,
      Network::RskMainnet => RSK_MAINNET_DEPLOYMENT,
    }
  }
}

impl FromStr for Network {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().replace('-', "_").as_str() {
      "rsk_testnet" | "testnet" => Ok(Network::RskTestnet),
      "rsk_mainnet" | "mainnet" => Ok(Network::RskMainnet),
      other => Err(Error::configuration(format!("unknown network {}", other))),
    }
  }
}

impl fmt::Display for Network {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Network::RskTestnet => f.write_str("rsk_testnet"),
      Network::RskMainnet => f.write_str("rsk_mainnet"),
    }
  }
}
