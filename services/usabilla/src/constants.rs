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

// Protocol constants, must match the server byte for byte.
pub const ALGORITHM: &str = "USBL1-HMAC-SHA256";
pub const KEY_PREFIX: &str = "USBL1";
pub const SCOPE_TERMINATOR: &str = "usbl1_request";
pub const SIGNED_HEADERS: &str = "date;host";

/// Hex encoded SHA256 of an empty body.
///
/// Only bodiless GET requests are signed.
pub const EMPTY_PAYLOAD_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Path placeholder substituted by the resource id.
pub const ID_PLACEHOLDER: &str = ":id";

// Env values used in usabilla services.
pub const USABILLA_ACCESS_KEY: &str = "USABILLA_ACCESS_KEY";
pub const USABILLA_SECRET_KEY: &str = "USABILLA_SECRET_KEY";
pub const USABILLA_HOST: &str = "USABILLA_HOST";
pub const USABILLA_PROTOCOL: &str = "USABILLA_PROTOCOL";

pub const DEFAULT_HOST: &str = "data.usabilla.com";
pub const DEFAULT_PROTOCOL: &str = "https";
