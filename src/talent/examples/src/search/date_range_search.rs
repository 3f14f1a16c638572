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

// [START job_search_date_range_search]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{JobQuery, RequestMetadata, TimestampRange};
use google_cloud_wkt::Timestamp;

/// Searches jobs published in the last `days` days.
pub async fn sample(
    client: &JobService,
    project_id: &str,
    tenant_id: &str,
    company_name: &str,
    days: i64,
) -> anyhow::Result<()> {
    let now = chrono::Utc::now().timestamp();
    let range = TimestampRange::new()
        .set_start_time(Timestamp::clamp(now - days * 24 * 60 * 60, 0))
        .set_end_time(Timestamp::clamp(now, 0));

    let request = client
        .search_jobs()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_request_metadata(
            RequestMetadata::new()
                .set_domain("www.example.com")
                .set_session_id("Hashed session identifier")
                .set_user_id("Hashed user identifier"),
        )
        .set_job_query(
            JobQuery::new()
                .set_publish_time_range(range)
                .set_companies([company_name]),
        );

    super::print_all_pages(|token| request.clone().set_page_token(token).send()).await?;
    Ok(())
}
// [END job_search_date_range_search]
