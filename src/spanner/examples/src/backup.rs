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

pub mod copy_backup;
pub mod create_backup;
pub mod create_backup_with_encryption_key;
pub mod delete_backup;
pub mod get_backup;
pub mod list_backup_operations;
pub mod list_backups;
pub mod restore_backup;
pub mod update_backup;

/// Backups expire 14 days after they are created, unless otherwise noted.
pub const BACKUP_EXPIRATION_SECONDS: i64 = 14 * 24 * 60 * 60;

/// Returns the timestamp `seconds` from now.
pub fn seconds_from_now(seconds: i64) -> google_cloud_wkt::Timestamp {
    google_cloud_wkt::Timestamp::clamp(chrono::Utc::now().timestamp() + seconds, 0)
}
