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

// [START job_search_custom_ranking_search]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{RequestMetadata, search_jobs_request};

/// Ranks the results using a custom expression over the job custom attributes.
pub async fn sample(client: &JobService, project_id: &str, tenant_id: &str) -> anyhow::Result<()> {
    use search_jobs_request::custom_ranking_info::ImportanceLevel;
    let custom_ranking_info = search_jobs_request::CustomRankingInfo::new()
        .set_importance_level(ImportanceLevel::Extreme)
        .set_ranking_expression("(someFieldLong + 25) * 0.25");

    let request = client
        .search_jobs()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_request_metadata(
            RequestMetadata::new()
                .set_domain("www.example.com")
                .set_session_id("Hashed session identifier")
                .set_user_id("Hashed user identifier"),
        )
        .set_custom_ranking_info(custom_ranking_info)
        .set_order_by("custom_ranking desc");

    super::print_all_pages(|token| request.clone().set_page_token(token).send()).await?;
    Ok(())
}
// [END job_search_custom_ranking_search]
