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

// [START job_search_city_location_search]
use google_cloud_talent_v4::client::JobService;
use google_cloud_talent_v4::model::{JobQuery, LocationFilter, RequestMetadata};

/// Searches jobs in a city, without a distance the service uses the city limits.
pub async fn sample(
    client: &JobService,
    project_id: &str,
    tenant_id: &str,
    company_name: &str,
    city: &str,
) -> anyhow::Result<()> {
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
                .set_location_filters([LocationFilter::new().set_address(city)])
                .set_companies([company_name]),
        );

    super::print_all_pages(|token| request.clone().set_page_token(token).send()).await?;
    Ok(())
}
// [END job_search_city_location_search]
