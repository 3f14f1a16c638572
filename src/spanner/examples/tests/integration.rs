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

#[cfg(all(test, feature = "run-integration-tests"))]
mod tests {
    use spanner_samples::*;

    async fn cleanup_databases(databases: Vec<String>) {
        let pending = databases.into_iter().map(cleanup_test_database);
        // Ignore cleanup errors.
        let _ = futures::future::join_all(pending).await;
    }

    async fn cleanup_instance_resources(names: Vec<String>) {
        let pending = names.into_iter().map(cleanup_test_instance_resource);
        // Ignore cleanup errors.
        let _ = futures::future::join_all(pending).await;
    }

    #[tokio::test]
    async fn run_database_examples() -> anyhow::Result<()> {
        let project_id = google_cloud_test_utils::runtime_config::project_id()?;
        let instance_id = google_cloud_test_utils::runtime_config::spanner_instance_id();
        // Ignore cleanup errors.
        let _ = cleanup_stale_resources(&project_id, &instance_id).await;

        let mut databases = Vec::new();
        let result = spanner_samples::run_database_examples(&mut databases).await;
        cleanup_databases(databases).await;
        result
    }

    #[tokio::test]
    async fn run_backup_examples() -> anyhow::Result<()> {
        let mut databases = Vec::new();
        let mut backups = Vec::new();
        let result = spanner_samples::run_backup_examples(&mut databases, &mut backups).await;
        let pending = backups.into_iter().map(cleanup_test_backup);
        // Ignore cleanup errors.
        let _ = futures::future::join_all(pending).await;
        cleanup_databases(databases).await;
        result
    }

    #[tokio::test]
    async fn run_backup_schedule_examples() -> anyhow::Result<()> {
        let mut databases = Vec::new();
        let result = spanner_samples::run_backup_schedule_examples(&mut databases).await;
        cleanup_databases(databases).await;
        result
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn run_data_examples() -> anyhow::Result<()> {
        let mut databases = Vec::new();
        let result = spanner_samples::run_data_examples(&mut databases).await;
        cleanup_databases(databases).await;
        result
    }

    #[tokio::test]
    async fn run_postgresql_examples() -> anyhow::Result<()> {
        let mut databases = Vec::new();
        let result = spanner_samples::run_postgresql_examples(&mut databases).await;
        cleanup_databases(databases).await;
        result
    }

    #[tokio::test]
    async fn run_instance_examples() -> anyhow::Result<()> {
        let mut names = Vec::new();
        let result = async {
            spanner_samples::run_instance_examples(&mut names).await?;
            spanner_samples::run_instance_config_examples(&mut names).await?;
            spanner_samples::run_instance_partition_examples(&mut names).await
        }
        .await;
        cleanup_instance_resources(names).await;
        result
    }
}
