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

// [START job_search_create_company]
use google_cloud_talent_v4::client::CompanyService;
use google_cloud_talent_v4::model::Company;

pub async fn sample(
    client: &CompanyService,
    project_id: &str,
    tenant_id: &str,
    display_name: &str,
    external_id: &str,
) -> anyhow::Result<Company> {
    let company = client
        .create_company()
        .set_parent(format!("projects/{project_id}/tenants/{tenant_id}"))
        .set_company(
            Company::new()
                .set_display_name(display_name)
                .set_external_id(external_id),
        )
        .send()
        .await?;

    println!("Created Company");
    println!("Name: {}", company.name);
    println!("Display Name: {}", company.display_name);
    println!("External ID: {}", company.external_id);
    Ok(company)
}
// [END job_search_create_company]
