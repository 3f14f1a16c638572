// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;

pub const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const REGION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_REGION";
pub const SPANNER_INSTANCE_VAR: &str = "GOOGLE_CLOUD_SPANNER_TEST_INSTANCE";
pub const VISION_LOCATION_VAR: &str = "GOOGLE_CLOUD_VISION_LOCATION";
const DEFAULT_REGION: &str = "us-central1";
const DEFAULT_SPANNER_INSTANCE: &str = "test-instance";
// Product search is only available in a handful of locations.
const DEFAULT_VISION_LOCATION: &str = "us-west1";

pub fn project_id() -> Result<String> {
    std::env::var(PROJECT_VAR).map_err(anyhow::Error::from)
}

pub fn region_id() -> String {
    std::env::var(REGION_VAR)
        .ok()
        .unwrap_or(DEFAULT_REGION.to_string())
}

/// The Spanner instance used by the integration tests.
///
/// Creating instances is slow and expensive, the tests reuse an existing
/// instance and create databases in it.
pub fn spanner_instance_id() -> String {
    std::env::var(SPANNER_INSTANCE_VAR)
        .ok()
        .unwrap_or(DEFAULT_SPANNER_INSTANCE.to_string())
}

pub fn vision_location() -> String {
    std::env::var(VISION_LOCATION_VAR)
        .ok()
        .unwrap_or(DEFAULT_VISION_LOCATION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[serial]
    #[test]
    fn project() {
        let _env = ScopedEnv::remove(PROJECT_VAR);
        let got = project_id();
        assert!(got.is_err(), "{got:?}");
        let _env = ScopedEnv::set(PROJECT_VAR, "abc");
        let got = project_id();
        assert!(got.as_ref().is_ok_and(|v| v == "abc"), "{got:?}");
    }

    #[serial]
    #[test]
    fn region() {
        let _env = ScopedEnv::remove(REGION_VAR);
        let got = region_id();
        assert_eq!(got, DEFAULT_REGION);
        let _env = ScopedEnv::set(REGION_VAR, "abc");
        let got = region_id();
        assert_eq!(got, "abc");
    }

    #[serial]
    #[test]
    fn spanner_instance() {
        let _env = ScopedEnv::remove(SPANNER_INSTANCE_VAR);
        let got = spanner_instance_id();
        assert_eq!(got, DEFAULT_SPANNER_INSTANCE);
        let _env = ScopedEnv::set(SPANNER_INSTANCE_VAR, "my-instance");
        let got = spanner_instance_id();
        assert_eq!(got, "my-instance");
    }

    #[serial]
    #[test]
    fn vision() {
        let _env = ScopedEnv::remove(VISION_LOCATION_VAR);
        let got = vision_location();
        assert_eq!(got, DEFAULT_VISION_LOCATION);
        let _env = ScopedEnv::set(VISION_LOCATION_VAR, "europe-west1");
        let got = vision_location();
        assert_eq!(got, "europe-west1");
    }
}
