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

pub mod autocomplete;
pub mod company;
pub mod job;
pub mod names;
pub mod quickstart;
pub mod search;
pub mod tenant;

use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_talent_v4::client::{CompanyService, Completion, JobService, TenantService};
use google_cloud_talent_v4::model::{Company, Tenant};
use google_cloud_test_utils::resource_names::{external_id_create_time, random_external_id};
use names::{CompanyName, JobName, TenantName};

/// Tenants older than this are removed by [cleanup_stale_tenants].
pub const STALE_TENANT_SECONDS: i64 = 48 * 60 * 60;

const APPLICATION_URL: &str = "https://www.example.org/job-posting/123";

pub async fn run_tenant_examples(tenants: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = google_cloud_test_utils::runtime_config::project_id()?;
    let client = TenantService::builder().build().await?;

    let external_id = random_external_id(chrono::Utc::now().timestamp());
    tracing::info!("running tenant::create_tenant example");
    let tenant = tenant::create_tenant::sample(&client, &project_id, &external_id).await?;
    tenants.push(tenant.name.clone());
    let name = tenant.name.parse::<TenantName>()?;

    tracing::info!("running tenant::get_tenant example");
    tenant::get_tenant::sample(&client, &project_id, &name.tenant).await?;
    tracing::info!("running tenant::list_tenants example");
    tenant::list_tenants::sample(&client, &project_id).await?;
    tracing::info!("running tenant::delete_tenant example");
    tenant::delete_tenant::sample(&client, &project_id, &name.tenant).await?;
    Ok(())
}

pub async fn run_company_examples(tenants: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = google_cloud_test_utils::runtime_config::project_id()?;
    let tenant = create_test_tenant(&project_id).await?;
    tenants.push(tenant.name.clone());
    let tenant_name = tenant.name.parse::<TenantName>()?;

    let client = CompanyService::builder().build().await?;
    let external_id = random_external_id(chrono::Utc::now().timestamp());
    tracing::info!("running company::create_company example");
    let company = company::create_company::sample(
        &client,
        &project_id,
        &tenant_name.tenant,
        "My Company Name",
        &external_id,
    )
    .await?;
    let company_name = company.name.parse::<CompanyName>()?;

    tracing::info!("running company::get_company example");
    company::get_company::sample(&client, &company.name).await?;
    tracing::info!("running company::get_company example with an invalid name");
    company::get_company::sample(&client, "projects/invalid-name").await?;
    tracing::info!("running company::list_companies example");
    company::list_companies::sample(&client, &project_id, &tenant_name.tenant).await?;
    tracing::info!("running company::update_company example");
    company::update_company::sample(&client, &company.name).await?;
    tracing::info!("running company::update_company_with_field_mask example");
    company::update_company_with_field_mask::sample(&client, &company.name).await?;
    tracing::info!("running company::delete_company example");
    company::delete_company::sample(
        &client,
        &project_id,
        &tenant_name.tenant,
        &company_name.company,
    )
    .await?;
    tracing::info!("running company::get_company example after delete");
    company::get_company::sample(&client, &company.name).await?;
    Ok(())
}

pub async fn run_job_examples(tenants: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = google_cloud_test_utils::runtime_config::project_id()?;
    let tenant = create_test_tenant(&project_id).await?;
    tenants.push(tenant.name.clone());
    let tenant_id = tenant.name.parse::<TenantName>()?.tenant;
    let company = create_test_company(&tenant.name).await?;

    let client = JobService::builder().build().await?;
    tracing::info!("running job::create_job example");
    let basic = job::create_job::sample(
        &client,
        &project_id,
        &tenant_id,
        &company.name,
        &random_requisition_id(),
        APPLICATION_URL,
    )
    .await?;
    tracing::info!("running job::create_job_with_custom_attributes example");
    let custom = job::create_job_with_custom_attributes::sample(
        &client,
        &project_id,
        &tenant_id,
        &company.name,
        &random_requisition_id(),
    )
    .await?;
    tracing::info!("running job::create_featured_job example");
    let featured = job::create_featured_job::sample(
        &client,
        &project_id,
        &tenant_id,
        &company.name,
        &random_requisition_id(),
    )
    .await?;

    tracing::info!("running job::get_job example");
    job::get_job::sample(&client, &basic.name).await?;
    tracing::info!("running job::list_jobs example");
    job::list_jobs::sample(&client, &project_id, &tenant_id, &company.name).await?;
    tracing::info!("running job::update_job example");
    job::update_job::sample(&client, &basic.name).await?;
    tracing::info!("running job::update_job_with_field_mask example");
    job::update_job_with_field_mask::sample(&client, &custom.name).await?;

    for name in [&basic.name, &custom.name, &featured.name] {
        let name = name.parse::<JobName>()?;
        tracing::info!("running job::delete_job example");
        job::delete_job::sample(&client, &project_id, &tenant_id, &name.job).await?;
    }

    tracing::info!("running job::batch_create_jobs example");
    let requisition_ids = [random_requisition_id(), random_requisition_id()];
    let names = job::batch_create_jobs::sample(
        &client,
        &project_id,
        &tenant_id,
        &company.name,
        [requisition_ids[0].as_str(), requisition_ids[1].as_str()],
    )
    .await?;
    tracing::info!("running job::batch_update_jobs example");
    job::batch_update_jobs::sample(&client, &project_id, &tenant_id, &names).await?;
    tracing::info!("running job::batch_delete_jobs example");
    job::batch_delete_jobs::sample(&client, &project_id, &tenant_id, &names).await?;

    let requisition_ids = [random_requisition_id(), random_requisition_id()];
    let _ = job::batch_create_jobs::sample(
        &client,
        &project_id,
        &tenant_id,
        &company.name,
        [requisition_ids[0].as_str(), requisition_ids[1].as_str()],
    )
    .await?;
    tracing::info!("running job::batch_delete_jobs_by_filter example");
    let filter = format!(r#"companyName = "{}""#, company.name);
    job::batch_delete_jobs_by_filter::sample(&client, &project_id, &tenant_id, &filter).await?;
    Ok(())
}

pub async fn run_search_examples(tenants: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = google_cloud_test_utils::runtime_config::project_id()?;
    let tenant = create_test_tenant(&project_id).await?;
    tenants.push(tenant.name.clone());
    let tenant_id = tenant.name.parse::<TenantName>()?.tenant;
    let company = create_test_company(&tenant.name).await?;

    let client = JobService::builder().build().await?;
    job::create_job::sample(
        &client,
        &project_id,
        &tenant_id,
        &company.name,
        &random_requisition_id(),
        APPLICATION_URL,
    )
    .await?;
    job::create_job_with_custom_attributes::sample(
        &client,
        &project_id,
        &tenant_id,
        &company.name,
        &random_requisition_id(),
    )
    .await?;
    job::create_featured_job::sample(
        &client,
        &project_id,
        &tenant_id,
        &company.name,
        &random_requisition_id(),
    )
    .await?;

    let project = project_id.as_str();
    let tenant = tenant_id.as_str();
    let company = company.name.as_str();
    tracing::info!("running search::keyword_search example");
    search::keyword_search::sample(&client, project, tenant, company, "software").await?;
    tracing::info!("running search::category_search example");
    search::category_search::sample(&client, project, tenant, company).await?;
    tracing::info!("running search::employment_type_search example");
    search::employment_type_search::sample(&client, project, tenant, company).await?;
    tracing::info!("running search::date_range_search example");
    search::date_range_search::sample(&client, project, tenant, company, 30).await?;
    tracing::info!("running search::language_code_search example");
    search::language_code_search::sample(&client, project, tenant, company).await?;
    tracing::info!("running search::company_display_name_search example");
    search::company_display_name_search::sample(&client, project, tenant, "My Company Name")
        .await?;
    tracing::info!("running search::basic_location_search example");
    search::basic_location_search::sample(
        &client,
        project,
        tenant,
        company,
        "Mountain View, CA",
        0.5,
    )
    .await?;
    tracing::info!("running search::keyword_location_search example");
    search::keyword_location_search::sample(
        &client,
        project,
        tenant,
        company,
        "Mountain View, CA",
        0.5,
        "software",
    )
    .await?;
    tracing::info!("running search::city_location_search example");
    search::city_location_search::sample(&client, project, tenant, company, "Mountain View, CA")
        .await?;
    tracing::info!("running search::multi_location_search example");
    search::multi_location_search::sample(
        &client,
        project,
        tenant,
        company,
        ["Mountain View, CA", "New York, NY"],
        0.5,
    )
    .await?;
    tracing::info!("running search::commute_search example");
    search::commute_search::sample(&client, project, tenant).await?;
    tracing::info!("running search::commute_search_driving example");
    search::commute_search_driving::sample(&client, project, tenant).await?;
    tracing::info!("running search::custom_ranking_search example");
    search::custom_ranking_search::sample(&client, project, tenant).await?;
    tracing::info!("running search::histogram_search example");
    search::histogram_search::sample(
        &client,
        project,
        tenant,
        "count(base_compensation, [bucket(12, 20)])",
    )
    .await?;
    tracing::info!("running search::custom_attribute_filter_search example");
    search::custom_attribute_filter_search::sample(&client, project, tenant).await?;
    tracing::info!("running search::custom_attribute_not_empty_search example");
    search::custom_attribute_not_empty_search::sample(&client, project, tenant).await?;
    tracing::info!("running search::featured_job_search example");
    search::featured_job_search::sample(&client, project, tenant, "Software Engineer").await?;
    tracing::info!("running search::email_alert_search example");
    search::email_alert_search::sample(&client, project, tenant, company).await?;
    tracing::info!("running search::request_options example");
    search::request_options::sample(&client, project, tenant, "software").await?;

    let completion = Completion::builder().build().await?;
    tracing::info!("running autocomplete::autocomplete_job_title example");
    autocomplete::autocomplete_job_title::sample(&completion, project, tenant, "Software").await?;
    tracing::info!("running autocomplete::autocomplete_default example");
    autocomplete::autocomplete_default::sample(&completion, project, tenant, company, "Soft")
        .await?;

    tracing::info!("running quickstart example");
    quickstart::sample(project, tenant).await?;
    Ok(())
}

/// Creates a tenant whose external id records the creation time.
pub async fn create_test_tenant(project_id: &str) -> anyhow::Result<Tenant> {
    let client = TenantService::builder().build().await?;
    let external_id = random_external_id(chrono::Utc::now().timestamp());
    let tenant = client
        .create_tenant()
        .set_parent(format!("projects/{project_id}"))
        .set_tenant(Tenant::new().set_external_id(external_id))
        .send()
        .await?;
    Ok(tenant)
}

pub async fn create_test_company(tenant_name: &str) -> anyhow::Result<Company> {
    let client = CompanyService::builder().build().await?;
    let external_id = random_external_id(chrono::Utc::now().timestamp());
    let company = client
        .create_company()
        .set_parent(tenant_name)
        .set_company(
            Company::new()
                .set_display_name("My Company Name")
                .set_external_id(external_id),
        )
        .send()
        .await?;
    Ok(company)
}

/// Deletes a tenant and any companies and jobs it contains.
///
/// Jobs must be deleted before their company, and companies before the
/// tenant.
pub async fn cleanup_test_tenant(tenant_name: String) -> anyhow::Result<()> {
    let companies = CompanyService::builder().build().await?;
    let jobs = JobService::builder().build().await?;

    let mut list = companies.list_companies().set_parent(&tenant_name).by_item();
    let mut company_names = Vec::new();
    while let Some(item) = list.next().await {
        let Ok(company) = item else {
            continue;
        };
        company_names.push(company.name);
    }

    for company_name in &company_names {
        let mut list = jobs
            .list_jobs()
            .set_parent(&tenant_name)
            .set_filter(format!(r#"companyName = "{company_name}""#))
            .by_item();
        let mut pending = Vec::new();
        while let Some(item) = list.next().await {
            let Ok(job) = item else {
                continue;
            };
            pending.push(jobs.delete_job().set_name(job.name).send());
        }
        let _ = futures::future::join_all(pending).await;
    }

    let pending = company_names
        .into_iter()
        .map(|name| companies.delete_company().set_name(name).send());
    let _ = futures::future::join_all(pending).await;

    let client = TenantService::builder().build().await?;
    client.delete_tenant().set_name(&tenant_name).send().await?;
    Ok(())
}

/// Removes tenants created by previous test runs more than
/// [STALE_TENANT_SECONDS] ago.
pub async fn cleanup_stale_tenants(project_id: &str) -> anyhow::Result<()> {
    let client = TenantService::builder().build().await?;
    let stale_deadline = chrono::Utc::now().timestamp() - STALE_TENANT_SECONDS;

    let mut tenants = client
        .list_tenants()
        .set_parent(format!("projects/{project_id}"))
        .by_item();
    let mut pending = Vec::new();
    while let Some(tenant) = tenants.next().await.transpose()? {
        if external_id_create_time(&tenant.external_id).is_some_and(|t| t < stale_deadline) {
            tracing::info!("deleting stale tenant {}", tenant.name);
            pending.push(tokio::spawn(cleanup_test_tenant(tenant.name)));
        }
    }

    let results = futures::future::join_all(pending)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    for (i, result) in results.into_iter().enumerate() {
        if let Err(e) = result {
            tracing::error!("error deleting stale tenant #{i}: {e:?}");
        }
    }
    Ok(())
}

fn random_requisition_id() -> String {
    use google_cloud_test_utils::resource_names::LowercaseAlphanumeric;
    format!("req-{}", LowercaseAlphanumeric.random_string(16))
}
