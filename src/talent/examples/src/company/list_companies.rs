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

// [START job_search_list_companies]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_talent_v4::client::CompanyService;

pub async fn sample(client: &CompanyService, project_id: &str, tenant_id: &str) -> anyhow::Result<()> {
    let mut companies = client
        .list_companies()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .by_item();

    while let Some(company) = companies.next().await.transpose()? {
        println!("Company Name: {}", company.name);
        println!("Display Name: {}", company.display_name);
        println!("External ID: {}", company.external_id);
    }
    Ok(())
}
// [END job_search_list_companies]
