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

//! Runs against a local dev chain (ganache, hardhat node) that already has
//! the Safe v1.1.1 singleton and proxy factory deployed:
//!
//! ```text
//! ETH_URL=http://localhost:8545
//! PROXY_FACTORY_ADDRESS=0x...
//! SAFE_SINGLETON_ADDRESS=0x...
//! CALLBACK_ADDRESS=0x...   # optional, an IProxyCreationCallback
//! cargo test --test safe_creation_test -- --ignored
//! ```

use dotenv::dotenv;
use ethcontract::{transport::DynTransport, Account, Address, Http, Web3, H160, U256};
use safe_factory::{
  utils, ContractRole, DeploymentOptions, DeploymentTarget, Error, SafeAccountConfiguration,
  SafeClient, SafeFactory, Signer,
};

struct Harness {
  web3: Web3<DynTransport>,
  accounts: Vec<Address>,
  target: DeploymentTarget,
}

impl Harness {
  async fn new() -> Self {
    dotenv().ok();
    let eth_url = std::env::var("ETH_URL").unwrap_or("http://localhost:8545".to_string());
    let web3 = Web3::new(DynTransport::new(
      Http::new(eth_url.as_str()).expect("couldnt setup web3"),
    ));
    let accounts = web3.eth().accounts().await.expect("getAccounts failed");
    let target = DeploymentTarget::new(
      env_address("PROXY_FACTORY_ADDRESS"),
      env_address("SAFE_SINGLETON_ADDRESS"),
    );
    Self {
      web3,
      accounts,
      target,
    }
  }

  fn signer(&self) -> Signer {
    Signer::connected(&self.web3, Account::Local(self.accounts[0], None))
  }

  fn factory(&self) -> SafeFactory {
    SafeFactory::new(self.signer(), self.target).expect("couldnt setup factory")
  }

  fn factory_at(&self, target: DeploymentTarget) -> SafeFactory {
    SafeFactory::new(self.signer(), target).expect("couldnt setup factory")
  }

  fn owners(&self) -> Vec<Address> {
    self.accounts[0..3].to_vec()
  }
}

fn env_address(name: &str) -> Address {
  let value = std::env::var(name).unwrap_or_else(|_| panic!("{} REQUIRED", name));
  utils::parse_address(&value).expect("couldnt parse address")
}

fn random_nonce() -> U256 {
  U256::from(rand::random::<u64>())
}

async fn verify_owners_and_threshold(safe: &SafeClient, owners: &[Address], threshold: u64) {
  let retrieved_owners = safe.get_owners().await.expect("couldnt get owners");
  let retrieved_threshold = safe.get_threshold().await.expect("couldnt get threshold");
  assert_eq!(retrieved_owners, owners);
  assert_eq!(retrieved_threshold, threshold);
}

#[tokio::test]
#[ignore = "requires a local node with the Safe contracts deployed"]
async fn fails_if_the_proxy_factory_is_not_deployed() {
  let h = Harness::new().await;
  // an externally owned account has no code
  let missing = h.accounts[5];
  let factory = h.factory_at(DeploymentTarget::new(
    missing,
    h.target.safe_singleton_address(),
  ));
  match factory
    .create_safe(
      SafeAccountConfiguration::new(h.owners(), 1),
      DeploymentOptions::default(),
    )
    .await
  {
    Err(Error::DeploymentValidation { role, address }) => {
      assert_eq!(role, ContractRole::ProxyFactory);
      assert_eq!(address, missing);
    }
    Err(e) => panic!("unexpected error {}", e),
    Ok(_) => panic!("deployment should have failed"),
  }
}

#[tokio::test]
#[ignore = "requires a local node with the Safe contracts deployed"]
async fn fails_if_the_safe_singleton_is_not_deployed() {
  let h = Harness::new().await;
  let missing = H160::repeat_byte(0x0d);
  let factory = h.factory_at(DeploymentTarget::new(
    h.target.proxy_factory_address(),
    missing,
  ));
  let err = factory
    .create_safe(
      SafeAccountConfiguration::new(h.owners(), 1),
      DeploymentOptions::default(),
    )
    .await
    .err()
    .expect("deployment should have failed");
  assert!(matches!(
    err,
    Error::DeploymentValidation {
      role: ContractRole::SafeSingleton,
      ..
    }
  ));
  assert!(err
    .to_string()
    .starts_with("SafeSingleton contract is not deployed"));
}

#[tokio::test]
#[ignore = "requires a local node with the Safe contracts deployed"]
async fn creates_a_safe_with_the_requested_threshold() {
  let h = Harness::new().await;
  let owners = h.owners();
  let safe = h
    .factory()
    .create_safe(
      SafeAccountConfiguration::new(owners.clone(), 2),
      DeploymentOptions::default(),
    )
    .await
    .expect("couldnt create safe");
  verify_owners_and_threshold(&safe, &owners, 2).await;
  assert!(safe.is_owner(owners[1]).await.expect("isOwner failed"));
  assert_eq!(safe.nonce().await.expect("nonce failed"), 0);
  assert_eq!(safe.signer().address(), h.accounts[0]);
}

#[tokio::test]
#[ignore = "requires a local node with the Safe contracts deployed"]
async fn creates_a_safe_with_nonce_at_the_predicted_address() {
  let h = Harness::new().await;
  let owners = h.owners();
  let factory = h.factory();
  let nonce = random_nonce();

  let predicted = factory
    .predict_safe_address(SafeAccountConfiguration::new(owners.clone(), 1), nonce)
    .await
    .expect("couldnt predict address");
  let safe = factory
    .create_safe(
      SafeAccountConfiguration::new(owners.clone(), 1),
      DeploymentOptions::with_nonce(nonce),
    )
    .await
    .expect("couldnt create safe");
  assert_eq!(safe.address(), predicted);
  verify_owners_and_threshold(&safe, &owners, 1).await;

  // the same salt, configuration and pair always map to the same address,
  // which is now taken
  let again = factory
    .predict_safe_address(SafeAccountConfiguration::new(owners.clone(), 1), nonce)
    .await
    .expect("couldnt predict address");
  assert_eq!(again, safe.address());
  let repeat = factory
    .create_safe(
      SafeAccountConfiguration::new(owners, 1),
      DeploymentOptions::with_nonce(nonce),
    )
    .await;
  assert!(matches!(repeat, Err(Error::Transaction(_))));
}

#[tokio::test]
#[ignore = "requires a local node with the Safe contracts deployed"]
async fn creates_a_safe_with_callback_and_nonce() {
  let h = Harness::new().await;
  let callback = match std::env::var("CALLBACK_ADDRESS") {
    Ok(c) => utils::parse_address(&c).expect("couldnt parse callback"),
    Err(_) => return,
  };
  let owners = h.owners();
  let safe = h
    .factory()
    .create_safe(
      SafeAccountConfiguration::new(owners.clone(), 1),
      DeploymentOptions::with_nonce(random_nonce()).callback(callback),
    )
    .await
    .expect("couldnt create safe");
  verify_owners_and_threshold(&safe, &owners, 1).await;
}

#[tokio::test]
#[ignore = "requires a local node with the Safe contracts deployed"]
async fn callback_without_nonce_uses_plain_creation() {
  let h = Harness::new().await;
  let owners = h.owners();
  let options = DeploymentOptions {
    nonce: None,
    callback_address: Some(H160::repeat_byte(0xcb)),
  };
  let safe = h
    .factory()
    .create_safe(SafeAccountConfiguration::new(owners.clone(), 3), options)
    .await
    .expect("couldnt create safe");
  verify_owners_and_threshold(&safe, &owners, 3).await;
}
