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

use crate::{types::SetupParameters, Result};
use ethcontract::web3::ethabi::{param_type::ParamType, Function, Param, StateMutability, Token};

fn param(name: &str, kind: ParamType) -> Param {
  Param {
    name: name.to_owned(),
    kind,
    internal_type: None,
  }
}

/// `setup(address[],uint256,address,bytes,address,address,uint256,address)`
/// of the Safe singleton.
fn setup_function() -> Function {
  #[allow(deprecated)]
  let setup = Function {
    name: "setup".to_owned(),
    inputs: vec![
      param("_owners", ParamType::Array(Box::new(ParamType::Address))),
      param("_threshold", ParamType::Uint(256)),
      param("to", ParamType::Address),
      param("data", ParamType::Bytes),
      param("fallbackHandler", ParamType::Address),
      param("paymentToken", ParamType::Address),
      param("payment", ParamType::Uint(256)),
      param("paymentReceiver", ParamType::Address),
    ],
    outputs: vec![],
    constant: None,
    state_mutability: StateMutability::NonPayable,
  };
  setup
}

/// Encodes the initializer passed to the proxy factory. The arguments are
/// laid out in the order the singleton declares them.
pub fn encode_setup_call(params: &SetupParameters) -> Result<Vec<u8>> {
  let owners = params
    .owners()
    .iter()
    .map(|owner| Token::Address(*owner))
    .collect();
  let data = setup_function().encode_input(&[
    Token::Array(owners),
    Token::Uint(params.threshold()),
    Token::Address(params.to()),
    Token::Bytes(params.data().to_vec()),
    Token::Address(params.fallback_handler()),
    Token::Address(params.payment_token()),
    Token::Uint(params.payment()),
    Token::Address(params.payment_receiver()),
  ])?;
  Ok(data)
}
