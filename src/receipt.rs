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
use ethcontract::{
  web3::{
    ethabi::{param_type::ParamType, Event, EventParam, RawLog},
    types::{Log, TransactionReceipt},
  },
  Address, H256,
};

pub const PROXY_CREATION_EVENT: &str = "ProxyCreation";

/// `event ProxyCreation(GnosisSafeProxy proxy)` of the v1.1.1 factory.
pub fn proxy_creation_event() -> Event {
  Event {
    name: PROXY_CREATION_EVENT.to_owned(),
    inputs: vec![EventParam {
      name: "proxy".to_owned(),
      kind: ParamType::Address,
      indexed: false,
    }],
    anonymous: false,
  }
}

/// Returns the proxy address carried by the first `ProxyCreation` log.
/// Logs of other events, or logs that do not decode, are skipped.
pub fn find_proxy_creation(logs: &[Log]) -> Option<Address> {
  let event = proxy_creation_event();
  let topic = event.signature();
  logs
    .iter()
    .filter(|entry| entry.topics.first() == Some(&topic))
    .find_map(|entry| {
      let raw = RawLog {
        topics: entry.topics.clone(),
        data: entry.data.0.clone(),
      };
      match event.parse_log(raw) {
        Ok(parsed) => parsed
          .params
          .into_iter()
          .next()
          .and_then(|param| param.value.into_address()),
        Err(e) => {
          log::debug!("skipping undecodable {} log: {}", PROXY_CREATION_EVENT, e);
          None
        }
      }
    })
}

pub fn resolve_proxy_address(tx_hash: H256, logs: &[Log]) -> Result<Address> {
  find_proxy_creation(logs).ok_or(Error::ProxyCreationNotFound(tx_hash))
}

pub fn resolve_from_receipt(receipt: &TransactionReceipt) -> Result<Address> {
  resolve_proxy_address(receipt.transaction_hash, &receipt.logs)
}
