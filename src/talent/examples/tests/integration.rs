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
    use talent_samples::*;

    async fn cleanup(tenants: Vec<String>) {
        let pending = tenants.into_iter().map(cleanup_test_tenant);
        // Ignore cleanup errors.
        let _ = futures::future::join_all(pending).await;
    }

    #[tokio::test]
    async fn run_tenant_and_company_examples() -> anyhow::Result<()> {
        let project_id = google_cloud_test_utils::runtime_config::project_id()?;
        // Ignore cleanup errors.
        let _ = cleanup_stale_tenants(&project_id).await;

        let mut tenants = Vec::new();
        let result = async {
            run_tenant_examples(&mut tenants).await?;
            run_company_examples(&mut tenants).await
        }
        .await;
        cleanup(tenants).await;
        result
    }

    #[tokio::test]
    async fn run_job_examples() -> anyhow::Result<()> {
        let mut tenants = Vec::new();
        let result = talent_samples::run_job_examples(&mut tenants).await;
        cleanup(tenants).await;
        result
    }

    #[tokio::test]
    async fn run_search_examples() -> anyhow::Result<()> {
        let mut tenants = Vec::new();
        let result = talent_samples::run_search_examples(&mut tenants).await;
        cleanup(tenants).await;
        result
    }
}
