// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use usblsign::usabilla::Config;
use usblsign::{default_context, Client, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    // Create a default context with the OS environment and reqwest.
    let ctx = default_context();

    // Keys are read from USABILLA_ACCESS_KEY and USABILLA_SECRET_KEY.
    let client = Client::new(ctx, Config::new())?;

    // List all buttons, then fetch the latest feedback of every button.
    let buttons = client
        .get_resource("websites.button", None, [("limit", "10")])
        .await?;
    println!("buttons: {}", String::from_utf8_lossy(&buttons));

    let feedback = client
        .get_resource("websites.button.feedback", Some("*"), [("limit", "10")])
        .await?;
    println!("feedback: {}", String::from_utf8_lossy(&feedback));

    Ok(())
}
