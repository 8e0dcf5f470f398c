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

//! Address of a proxy created through `createProxyWithNonce` or
//! `createProxyWithCallback`:
//!
//! ```text
//! salt      = keccak256(keccak256(initializer) ++ saltNonce)
//! init_code = proxyCreationCode ++ uint256(singleton)
//! address   = keccak256(0xff ++ factory ++ salt ++ keccak256(init_code))[12..]
//! ```

use crate::utils::keccak256;
use ethcontract::{Address, H160, U256};

pub fn proxy_salt(initializer: &[u8], salt_nonce: U256) -> [u8; 32] {
  let mut input = [0u8; 64];
  input[..32].copy_from_slice(&keccak256(initializer));
  salt_nonce.to_big_endian(&mut input[32..]);
  keccak256(&input)
}

pub fn proxy_address_with_nonce(
  factory: Address,
  singleton: Address,
  initializer: &[u8],
  salt_nonce: U256,
  creation_code: &[u8],
) -> Address {
  let mut init_code = Vec::with_capacity(creation_code.len() + 32);
  init_code.extend_from_slice(creation_code);
  init_code.extend_from_slice(&[0u8; 12]);
  init_code.extend_from_slice(singleton.as_bytes());

  let mut input = Vec::with_capacity(1 + 20 + 32 + 32);
  input.push(0xff);
  input.extend_from_slice(factory.as_bytes());
  input.extend_from_slice(&proxy_salt(initializer, salt_nonce));
  input.extend_from_slice(&keccak256(&init_code));

  H160::from_slice(&keccak256(&input)[12..])
}
