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

use safe_factory::config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
  env_logger::init();
  let net = std::env::var("NETWORK").expect("NETWORK REQUIRED");
  let conf = config::load_config(net.as_str()).expect("could not load config");

  let options = conf
    .deployment_options()
    .expect("invalid deployment options");
  let nonce = options.nonce.expect("salt_nonce is required to predict an address");
  let factory = conf.safe_factory().expect("couldnt setup safe factory");
  let safe_config = conf
    .safe_account_configuration()
    .expect("invalid safe configuration");

  let address = factory
    .predict_safe_address(safe_config, nonce)
    .await
    .expect("couldnt predict safe address");
  println!("predicted SAFE address {:?}", address);
}
