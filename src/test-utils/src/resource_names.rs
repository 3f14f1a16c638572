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

use rand::{
    Rng,
    distr::{Alphanumeric, Distribution, Uniform},
};

pub const PREFIX: &str = "rust-sdk-testing-";

/// Spanner database ids are limited to 30 characters.
const DATABASE_ID_LENGTH: usize = 30;

const BACKUP_ID_LENGTH: usize = 60;

/// Spanner instance and instance partition ids are limited to 30 characters
/// in practice, even if the API documents longer limits for some resources.
const INSTANCE_ID_LENGTH: usize = 30;

const INSTANCE_CONFIG_ID_LENGTH: usize = 64;

/// User-managed instance configurations must use this prefix.
pub const INSTANCE_CONFIG_PREFIX: &str = "custom-";

const BACKUP_SCHEDULE_ID_LENGTH: usize = 30;

const EXTERNAL_ID_LENGTH: usize = 64;

const PRODUCT_ID_LENGTH: usize = 64;

pub fn random_database_id() -> String {
    let id = LowercaseAlphanumeric.random_string(DATABASE_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

pub fn random_backup_id() -> String {
    let id = LowercaseAlphanumeric.random_string(BACKUP_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

pub fn random_instance_id() -> String {
    let id = LowercaseAlphanumeric.random_string(INSTANCE_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

pub fn random_instance_partition_id() -> String {
    random_instance_id()
}

pub fn random_instance_config_id() -> String {
    let id = LowercaseAlphanumeric
        .random_string(INSTANCE_CONFIG_ID_LENGTH - INSTANCE_CONFIG_PREFIX.len() - PREFIX.len());
    format!("{INSTANCE_CONFIG_PREFIX}{PREFIX}{id}")
}

pub fn random_backup_schedule_id() -> String {
    let id = LowercaseAlphanumeric.random_string(BACKUP_SCHEDULE_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

/// Creates a random external id for talent tenants and companies.
///
/// The id embeds the creation time (in seconds since the epoch) so cleanup
/// code can find stale resources, the service does not record a creation
/// time for these resources.
pub fn random_external_id(create_time: i64) -> String {
    let prefix = format!("{PREFIX}{create_time}-");
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(EXTERNAL_ID_LENGTH - prefix.len())
        .map(char::from)
        .collect();
    format!("{prefix}{id}")
}

/// Extracts the creation time from an id created by [random_external_id].
pub fn external_id_create_time(external_id: &str) -> Option<i64> {
    let (seconds, _) = external_id.strip_prefix(PREFIX)?.split_once('-')?;
    seconds.parse::<i64>().ok()
}

pub fn random_product_id() -> String {
    let id = LowercaseAlphanumeric.random_string(PRODUCT_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

pub fn random_product_set_id() -> String {
    random_product_id()
}

pub fn random_reference_image_id() -> String {
    random_product_id()
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let u = Uniform::new(0, LOWERCASE_ALPHANUMERIC_CHARSET.len())
            .expect("hard-coded uniform distribution is initialized successfully")
            .sample(rng);
        LOWERCASE_ALPHANUMERIC_CHARSET[u]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(random_database_id, DATABASE_ID_LENGTH)]
    #[test_case(random_backup_id, BACKUP_ID_LENGTH)]
    #[test_case(random_instance_id, INSTANCE_ID_LENGTH)]
    #[test_case(random_instance_partition_id, INSTANCE_ID_LENGTH)]
    #[test_case(random_backup_schedule_id, BACKUP_SCHEDULE_ID_LENGTH)]
    #[test_case(random_product_id, PRODUCT_ID_LENGTH)]
    #[test_case(random_product_set_id, PRODUCT_ID_LENGTH)]
    #[test_case(random_reference_image_id, PRODUCT_ID_LENGTH)]
    fn lowercase_ids(generator: fn() -> String, max_length: usize) -> anyhow::Result<()> {
        assert!(
            PREFIX.len() < max_length,
            "{PREFIX} length ({}) should be smaller than {max_length}",
            PREFIX.len()
        );
        let got = generator();
        assert!(
            got.len() <= max_length,
            "{got} has more than {max_length} characters"
        );
        let Some(suffix) = got.strip_prefix(PREFIX) else {
            bail!("{got} should start with {PREFIX}");
        };
        is_ascii_lowercase_alphanumeric(suffix)
    }

    #[test]
    fn database_id_starts_with_letter() {
        let got = random_database_id();
        assert!(
            got.starts_with(|c: char| c.is_ascii_lowercase()),
            "{got} should start with a lowercase letter"
        );
        assert!(
            got.ends_with(|c: char| c.is_ascii_alphanumeric()),
            "{got} should end with a letter or digit"
        );
    }

    #[test]
    fn instance_config_id() -> anyhow::Result<()> {
        let got = random_instance_config_id();
        assert!(
            got.len() <= INSTANCE_CONFIG_ID_LENGTH,
            "{got} has more than {INSTANCE_CONFIG_ID_LENGTH} characters"
        );
        let Some(suffix) = got
            .strip_prefix(INSTANCE_CONFIG_PREFIX)
            .and_then(|s| s.strip_prefix(PREFIX))
        else {
            bail!("{got} should start with {INSTANCE_CONFIG_PREFIX}{PREFIX}");
        };
        is_ascii_lowercase_alphanumeric(suffix)
    }

    #[test]
    fn external_id() {
        let got = random_external_id(1_700_000_000);
        assert_eq!(got.len(), EXTERNAL_ID_LENGTH, "{got}");
        assert_eq!(external_id_create_time(&got), Some(1_700_000_000));
        let suffix = got
            .strip_prefix(PREFIX)
            .and_then(|s| s.split_once('-'))
            .map(|(_, s)| s)
            .expect("{got} should contain a timestamp");
        assert!(
            suffix.chars().all(|c| c.is_alphanumeric()),
            "the suffix should be alphanumeric: {suffix}"
        );
    }

    #[test_case("not-a-test-id")]
    #[test_case("rust-sdk-testing-abc-def")]
    #[test_case("rust-sdk-testing-123")]
    fn external_id_without_time(input: &str) {
        assert_eq!(external_id_create_time(input), None, "{input}");
    }

    #[test]
    fn lowercase() {
        let got: String = rand::rng()
            .sample_iter(&LowercaseAlphanumeric)
            .take(128)
            .map(char::from)
            .collect();
        let test = is_ascii_lowercase_alphanumeric(&got);
        assert!(test.is_ok(), "{test:?}");
    }

    #[test]
    fn lowercase_string() {
        let got = LowercaseAlphanumeric.random_string(32);
        assert_eq!(got.len(), 32, "{got:?}");
        let test = is_ascii_lowercase_alphanumeric(&got);
        assert!(test.is_ok(), "{test:?}");
    }

    fn is_ascii_lowercase_alphanumeric(got: &str) -> anyhow::Result<()> {
        for (idx, c) in got.chars().enumerate() {
            if !c.is_ascii() {
                bail!("character at {idx} ({c}) is not ASCII in {got}")
            }
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() {
                bail!("character at {idx} ({c}) is not in expected character class in {got}");
            }
        }
        Ok(())
    }
}
