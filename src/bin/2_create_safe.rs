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

  let factory = conf.safe_factory().expect("couldnt setup safe factory");
  let signer = factory.signer().address();
  println!("my address {:?}", signer);

  let safe = factory
    .create_safe(
      conf
        .safe_account_configuration()
        .expect("invalid safe configuration"),
      conf
        .deployment_options()
        .expect("invalid deployment options"),
    )
    .await
    .expect("couldnt create safe");

  let owners = safe.get_owners().await.expect("couldnt get owners");
  let threshold = safe.get_threshold().await.expect("couldnt get threshold");
  println!("SAFE ADDY {:?}", safe.address());
  println!("OWNERS {:?}", owners);
  println!("THRESHOLD {}", threshold);
}
