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
use ethcontract::prelude::{Address, H160};
use std::str::FromStr;
use tiny_keccak::{Hasher, Keccak};

pub fn keccak256(data: &[u8]) -> [u8; 32] {
  let mut hasher = Keccak::v256();
  let mut out = [0u8; 32];
  hasher.update(data);
  hasher.finalize(&mut out);
  out
}

pub fn parse_address(address: &str) -> Result<Address> {
  H160::from_str(address.trim())
    .map_err(|e| Error::configuration(format!("invalid address {}: {}", address, e)))
}

pub fn parse_optional_address(address: Option<&str>) -> Result<Option<Address>> {
  address.map(parse_address).transpose()
}

/// Decodes a `0x`-prefixed (or bare) hex payload.
pub fn parse_hex_data(data: &str) -> Result<Vec<u8>> {
  let data = data.trim();
  Ok(hex::decode(data.strip_prefix("0x").unwrap_or(data))?)
}
