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

// [START job_search_autocomplete_job_title]
use google_cloud_talent_v4::client::Completion;
use google_cloud_talent_v4::model::complete_query_request::CompletionType;

/// Suggests job titles that start with `query`.
pub async fn sample(
    client: &Completion,
    project_id: &str,
    tenant_id: &str,
    query: &str,
) -> anyhow::Result<()> {
    let response = client
        .complete_query()
        .set_tenant(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_query(query)
        .set_page_size(5)
        .set_language_codes(["en-US"])
        .set_type(CompletionType::JobTitle)
        .send()
        .await?;

    super::print_completions(&response);
    Ok(())
}
// [END job_search_autocomplete_job_title]
