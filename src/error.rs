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

use crate::types::ContractRole;
use ethcontract::{
  errors::{ExecutionError, MethodError},
  transaction::TransactionResult,
  Address, H256,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("configuration error: {0}")]
  Configuration(String),
  #[error("{role} contract is not deployed at {address:?} in the current network")]
  DeploymentValidation { role: ContractRole, address: Address },
  #[error("transaction error: {0}")]
  Transaction(String),
  #[error(
    "proxy creation failed: no ProxyCreation event in transaction {0:?}, check if the proxy has been deployed correctly"
  )]
  ProxyCreationNotFound(H256),
  #[error("web3 error: {0}")]
  Web3Error(#[from] ethcontract::web3::Error),
  #[error("encoding error: {0}")]
  Encoding(String),
  #[error("hex error: {0}")]
  HexError(#[from] hex::FromHexError),
  #[error("settings error: {0}")]
  Settings(#[from] ::config::ConfigError),
}

impl Error {
  pub fn configuration(reason: impl Into<String>) -> Self {
    Error::Configuration(reason.into())
  }
}

impl From<MethodError> for Error {
  fn from(err: MethodError) -> Self {
    if let ExecutionError::ConfirmTimeout(result) = &err.inner {
      let tx_hash = match &**result {
        TransactionResult::Hash(h) => *h,
        TransactionResult::Receipt(r) => r.transaction_hash,
      };
      log::warn!("ExecutionError::ConfirmTimeout... {:?}", tx_hash);
    }
    Error::Transaction(err.to_string())
  }
}

impl From<ethcontract::web3::ethabi::Error> for Error {
  fn from(err: ethcontract::web3::ethabi::Error) -> Self {
    Error::Encoding(err.to_string())
  }
}
