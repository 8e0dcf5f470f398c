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

use ethcontract::{transport::DynTransport, Account, Http, Web3, H160};
use safe_factory::{
  constants::RSK_MAINNET_DEPLOYMENT, DeploymentOptions, Error, SafeAccountConfiguration,
  SafeFactory, Signer,
};

// nothing listens here; any network access fails with a web3 error
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

fn account() -> Account<DynTransport> {
  Account::Local(H160::repeat_byte(0x01), None)
}

fn unreachable_signer() -> Signer {
  let web3 = Web3::new(DynTransport::new(
    Http::new(UNREACHABLE_URL).expect("couldnt setup web3"),
  ));
  Signer::connected(&web3, account())
}

fn owners() -> Vec<H160> {
  vec![
    H160::repeat_byte(0x11),
    H160::repeat_byte(0x22),
    H160::repeat_byte(0x33),
  ]
}

fn assert_configuration_error<T>(result: Result<T, Error>, expected: &str) {
  match result {
    Err(Error::Configuration(reason)) => assert!(
      reason.starts_with(expected),
      "unexpected reason: {}",
      reason
    ),
    Err(other) => panic!("expected a configuration error, got {:?}", other),
    Ok(_) => panic!("expected a configuration error"),
  }
}

#[test]
fn factory_requires_connected_signer() {
  let detached = Signer::new(account());
  assert!(detached.web3().is_none());
  assert_configuration_error(
    SafeFactory::new(detached.clone(), RSK_MAINNET_DEPLOYMENT),
    "signer must be bound to a network connection",
  );
  assert_configuration_error(
    SafeFactory::on_rsk_testnet(detached.clone()),
    "signer must be bound to a network connection",
  );
  assert_configuration_error(
    SafeFactory::on_rsk_mainnet(detached),
    "signer must be bound to a network connection",
  );
}

#[test]
fn presets_bind_fixed_targets() {
  let testnet = SafeFactory::on_rsk_testnet(unreachable_signer()).expect("testnet factory");
  let mainnet = SafeFactory::on_rsk_mainnet(unreachable_signer()).expect("mainnet factory");
  assert_eq!(
    testnet.target().safe_singleton_address(),
    "0xffd41b816f2821e579b4da85c7352bf4f17e4fa5".parse::<H160>().unwrap()
  );
  assert_eq!(
    testnet.target().proxy_factory_address(),
    "0x5b836117aed4ca4dee8e2e464f97f7f59b426c5a".parse::<H160>().unwrap()
  );
  assert_eq!(*mainnet.target(), RSK_MAINNET_DEPLOYMENT);
}

#[test]
fn connecting_a_signer_later_is_enough() {
  let web3 = Web3::new(DynTransport::new(
    Http::new(UNREACHABLE_URL).expect("couldnt setup web3"),
  ));
  let signer = Signer::new(account()).connect(&web3);
  assert_eq!(signer.address(), H160::repeat_byte(0x01));
  assert!(SafeFactory::on_rsk_testnet(signer).is_ok());
}

#[tokio::test]
async fn empty_owners_fail_before_any_network_call() {
  let factory = SafeFactory::on_rsk_testnet(unreachable_signer()).expect("factory");
  let result = factory
    .create_safe(
      SafeAccountConfiguration::new(vec![], 0),
      DeploymentOptions::default(),
    )
    .await;
  assert_configuration_error(result, "Invalid owners: it must have at least one");
}

#[tokio::test]
async fn threshold_out_of_range_fails_before_any_network_call() {
  let factory = SafeFactory::on_rsk_testnet(unreachable_signer()).expect("factory");
  assert_configuration_error(
    factory
      .create_safe(
        SafeAccountConfiguration::new(owners(), 0),
        DeploymentOptions::default(),
      )
      .await,
    "Invalid threshold: it must be greater than",
  );
  assert_configuration_error(
    factory
      .create_safe(
        SafeAccountConfiguration::new(owners(), 4),
        DeploymentOptions::with_nonce(123456u64),
      )
      .await,
    "Invalid threshold: it must be lower than or equal to owners length",
  );
}

#[tokio::test]
async fn prediction_validates_configuration_first() {
  let factory = SafeFactory::on_rsk_testnet(unreachable_signer()).expect("factory");
  assert_configuration_error(
    factory
      .predict_safe_address(SafeAccountConfiguration::new(vec![], 1), 1u64.into())
      .await,
    "Invalid owners",
  );
}

#[tokio::test]
async fn unreachable_network_is_not_a_configuration_error() {
  let factory = SafeFactory::on_rsk_testnet(unreachable_signer()).expect("factory");
  let result = factory
    .create_safe(
      SafeAccountConfiguration::new(owners(), 2),
      DeploymentOptions::default(),
    )
    .await;
  assert!(matches!(result, Err(Error::Web3Error(_))));
}
