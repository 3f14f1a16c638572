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
    use vision_samples::*;

    async fn cleanup(resources: Vec<String>) {
        // Products go first so their product sets and images are empty.
        let (products, others): (Vec<_>, Vec<_>) = resources
            .into_iter()
            .partition(|name| name.contains("/products/"));
        let pending = products.into_iter().map(cleanup_test_resource);
        // Ignore cleanup errors.
        let _ = futures::future::join_all(pending).await;
        let pending = others.into_iter().map(cleanup_test_resource);
        let _ = futures::future::join_all(pending).await;
    }

    #[tokio::test]
    async fn run_product_examples() -> anyhow::Result<()> {
        let project_id = google_cloud_test_utils::runtime_config::project_id()?;
        let location_id = google_cloud_test_utils::runtime_config::vision_location();
        // Ignore cleanup errors.
        let _ = cleanup_stale_resources(&project_id, &location_id).await;

        let mut resources = Vec::new();
        let result = vision_samples::run_product_examples(&mut resources).await;
        cleanup(resources).await;
        result
    }

    #[tokio::test]
    async fn run_product_set_examples() -> anyhow::Result<()> {
        let mut resources = Vec::new();
        let result = vision_samples::run_product_set_examples(&mut resources).await;
        cleanup(resources).await;
        result
    }

    #[tokio::test]
    async fn run_search_examples() -> anyhow::Result<()> {
        let mut resources = Vec::new();
        let result = vision_samples::run_search_examples(&mut resources).await;
        cleanup(resources).await;
        result
    }
}
