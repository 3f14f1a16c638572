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

//! Runs a single job search sample from the command line.

use clap::{Parser, Subcommand};
use google_cloud_talent_v4::client::{CompanyService, Completion, JobService, TenantService};
use talent_samples::{autocomplete, company, job, quickstart, search, tenant};

const DESCRIPTION: &str = concat!(
    "Runs the Cloud Talent Solution samples.",
    " Each subcommand calls one sample with the values given on the command line."
);

#[derive(Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
struct Args {
    /// The project that owns the tenants.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    CreateTenant {
        #[arg(long)]
        external_id: String,
    },
    GetTenant {
        #[arg(long)]
        tenant_id: String,
    },
    ListTenants,
    DeleteTenant {
        #[arg(long)]
        tenant_id: String,
    },
    CreateCompany {
        #[arg(long)]
        tenant_id: String,
        #[arg(long, default_value = "My Company Name")]
        display_name: String,
        #[arg(long)]
        external_id: String,
    },
    GetCompany {
        /// The full company name, `projects/*/tenants/*/companies/*`.
        #[arg(long)]
        company_name: String,
    },
    ListCompanies {
        #[arg(long)]
        tenant_id: String,
    },
    UpdateCompany {
        #[arg(long)]
        company_name: String,
    },
    UpdateCompanyWithFieldMask {
        #[arg(long)]
        company_name: String,
    },
    DeleteCompany {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_id: String,
    },
    CreateJob {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        requisition_id: String,
        #[arg(long, default_value = "https://www.example.org/job-posting/123")]
        job_application_url: String,
    },
    CreateJobWithCustomAttributes {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        requisition_id: String,
    },
    CreateFeaturedJob {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        requisition_id: String,
    },
    GetJob {
        /// The full job name, `projects/*/tenants/*/jobs/*`.
        #[arg(long)]
        job_name: String,
    },
    ListJobs {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
    },
    UpdateJob {
        #[arg(long)]
        job_name: String,
    },
    UpdateJobWithFieldMask {
        #[arg(long)]
        job_name: String,
    },
    DeleteJob {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        job_id: String,
    },
    BatchCreateJobs {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long, num_args = 2, required = true)]
        requisition_ids: Vec<String>,
    },
    BatchUpdateJobs {
        #[arg(long)]
        tenant_id: String,
        #[arg(long, required = true)]
        job_names: Vec<String>,
    },
    BatchDeleteJobs {
        #[arg(long)]
        tenant_id: String,
        #[arg(long, required = true)]
        job_names: Vec<String>,
    },
    BatchDeleteJobsByFilter {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        filter: String,
    },
    #[command(flatten)]
    Search(SearchCommand),
    AutocompleteJobTitle {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        query: String,
    },
    AutocompleteDefault {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        query: String,
    },
    Quickstart {
        #[arg(long)]
        tenant_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum SearchCommand {
    KeywordSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        query: String,
    },
    CategorySearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
    },
    EmploymentTypeSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
    },
    DateRangeSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long, default_value_t = 30)]
        days: i64,
    },
    LanguageCodeSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
    },
    CompanyDisplayNameSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long, default_value = "My Company Name")]
        display_name: String,
    },
    BasicLocationSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long, default_value = "Mountain View, CA")]
        location: String,
        #[arg(long, default_value_t = 0.5)]
        distance_in_miles: f64,
    },
    KeywordLocationSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long, default_value = "Mountain View, CA")]
        location: String,
        #[arg(long, default_value_t = 0.5)]
        distance_in_miles: f64,
        #[arg(long)]
        keyword: String,
    },
    CityLocationSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long, default_value = "Mountain View, CA")]
        city: String,
    },
    MultiLocationSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
        #[arg(long, default_value = "Mountain View, CA")]
        location: String,
        #[arg(long, default_value = "Sunnyvale, CA")]
        other_location: String,
        #[arg(long, default_value_t = 0.5)]
        distance_in_miles: f64,
    },
    CommuteSearch {
        #[arg(long)]
        tenant_id: String,
    },
    CommuteSearchDriving {
        #[arg(long)]
        tenant_id: String,
    },
    CustomRankingSearch {
        #[arg(long)]
        tenant_id: String,
    },
    HistogramSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long, default_value = "count(base_compensation, [bucket(12, 20)])")]
        query: String,
    },
    CustomAttributeFilterSearch {
        #[arg(long)]
        tenant_id: String,
    },
    CustomAttributeNotEmptySearch {
        #[arg(long)]
        tenant_id: String,
    },
    FeaturedJobSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        query: String,
    },
    EmailAlertSearch {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        company_name: String,
    },
    RequestOptions {
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    google_cloud_test_utils::tracing::init_global()?;
    let args = Args::parse();
    tracing::info!("Configuration: {args:?}");
    run(&args.project_id, args.command).await
}

async fn run(project_id: &str, command: Command) -> anyhow::Result<()> {
    match command {
        Command::CreateTenant { external_id } => {
            let client = TenantService::builder().build().await?;
            tenant::create_tenant::sample(&client, project_id, &external_id).await?;
        }
        Command::GetTenant { tenant_id } => {
            let client = TenantService::builder().build().await?;
            tenant::get_tenant::sample(&client, project_id, &tenant_id).await?;
        }
        Command::ListTenants => {
            let client = TenantService::builder().build().await?;
            tenant::list_tenants::sample(&client, project_id).await?;
        }
        Command::DeleteTenant { tenant_id } => {
            let client = TenantService::builder().build().await?;
            tenant::delete_tenant::sample(&client, project_id, &tenant_id).await?;
        }
        Command::CreateCompany {
            tenant_id,
            display_name,
            external_id,
        } => {
            let client = CompanyService::builder().build().await?;
            company::create_company::sample(
                &client,
                project_id,
                &tenant_id,
                &display_name,
                &external_id,
            )
            .await?;
        }
        Command::GetCompany { company_name } => {
            let client = CompanyService::builder().build().await?;
            company::get_company::sample(&client, &company_name).await?;
        }
        Command::ListCompanies { tenant_id } => {
            let client = CompanyService::builder().build().await?;
            company::list_companies::sample(&client, project_id, &tenant_id).await?;
        }
        Command::UpdateCompany { company_name } => {
            let client = CompanyService::builder().build().await?;
            company::update_company::sample(&client, &company_name).await?;
        }
        Command::UpdateCompanyWithFieldMask { company_name } => {
            let client = CompanyService::builder().build().await?;
            company::update_company_with_field_mask::sample(&client, &company_name).await?;
        }
        Command::DeleteCompany {
            tenant_id,
            company_id,
        } => {
            let client = CompanyService::builder().build().await?;
            company::delete_company::sample(&client, project_id, &tenant_id, &company_id).await?;
        }
        Command::CreateJob {
            tenant_id,
            company_name,
            requisition_id,
            job_application_url,
        } => {
            let client = JobService::builder().build().await?;
            job::create_job::sample(
                &client,
                project_id,
                &tenant_id,
                &company_name,
                &requisition_id,
                &job_application_url,
            )
            .await?;
        }
        Command::CreateJobWithCustomAttributes {
            tenant_id,
            company_name,
            requisition_id,
        } => {
            let client = JobService::builder().build().await?;
            job::create_job_with_custom_attributes::sample(
                &client,
                project_id,
                &tenant_id,
                &company_name,
                &requisition_id,
            )
            .await?;
        }
        Command::CreateFeaturedJob {
            tenant_id,
            company_name,
            requisition_id,
        } => {
            let client = JobService::builder().build().await?;
            job::create_featured_job::sample(
                &client,
                project_id,
                &tenant_id,
                &company_name,
                &requisition_id,
            )
            .await?;
        }
        Command::GetJob { job_name } => {
            let client = JobService::builder().build().await?;
            job::get_job::sample(&client, &job_name).await?;
        }
        Command::ListJobs {
            tenant_id,
            company_name,
        } => {
            let client = JobService::builder().build().await?;
            job::list_jobs::sample(&client, project_id, &tenant_id, &company_name).await?;
        }
        Command::UpdateJob { job_name } => {
            let client = JobService::builder().build().await?;
            job::update_job::sample(&client, &job_name).await?;
        }
        Command::UpdateJobWithFieldMask { job_name } => {
            let client = JobService::builder().build().await?;
            job::update_job_with_field_mask::sample(&client, &job_name).await?;
        }
        Command::DeleteJob { tenant_id, job_id } => {
            let client = JobService::builder().build().await?;
            job::delete_job::sample(&client, project_id, &tenant_id, &job_id).await?;
        }
        Command::BatchCreateJobs {
            tenant_id,
            company_name,
            requisition_ids,
        } => {
            let [first, second] = requisition_ids.as_slice() else {
                anyhow::bail!("expected exactly two requisition ids, got {requisition_ids:?}");
            };
            let client = JobService::builder().build().await?;
            job::batch_create_jobs::sample(
                &client,
                project_id,
                &tenant_id,
                &company_name,
                [first.as_str(), second.as_str()],
            )
            .await?;
        }
        Command::BatchUpdateJobs {
            tenant_id,
            job_names,
        } => {
            let client = JobService::builder().build().await?;
            job::batch_update_jobs::sample(&client, project_id, &tenant_id, &job_names).await?;
        }
        Command::BatchDeleteJobs {
            tenant_id,
            job_names,
        } => {
            let client = JobService::builder().build().await?;
            job::batch_delete_jobs::sample(&client, project_id, &tenant_id, &job_names).await?;
        }
        Command::BatchDeleteJobsByFilter { tenant_id, filter } => {
            let client = JobService::builder().build().await?;
            job::batch_delete_jobs_by_filter::sample(&client, project_id, &tenant_id, &filter)
                .await?;
        }
        Command::Search(command) => {
            let client = JobService::builder().build().await?;
            run_search(&client, project_id, command).await?;
        }
        Command::AutocompleteJobTitle { tenant_id, query } => {
            let client = Completion::builder().build().await?;
            autocomplete::autocomplete_job_title::sample(&client, project_id, &tenant_id, &query)
                .await?;
        }
        Command::AutocompleteDefault {
            tenant_id,
            company_name,
            query,
        } => {
            let client = Completion::builder().build().await?;
            autocomplete::autocomplete_default::sample(
                &client,
                project_id,
                &tenant_id,
                &company_name,
                &query,
            )
            .await?;
        }
        Command::Quickstart { tenant_id } => {
            quickstart::sample(project_id, &tenant_id).await?;
        }
    }
    Ok(())
}

async fn run_search(
    client: &JobService,
    project_id: &str,
    command: SearchCommand,
) -> anyhow::Result<()> {
    match command {
        SearchCommand::KeywordSearch {
            tenant_id,
            company_name,
            query,
        } => {
            search::keyword_search::sample(client, project_id, &tenant_id, &company_name, &query)
                .await
        }
        SearchCommand::CategorySearch {
            tenant_id,
            company_name,
        } => search::category_search::sample(client, project_id, &tenant_id, &company_name).await,
        SearchCommand::EmploymentTypeSearch {
            tenant_id,
            company_name,
        } => {
            search::employment_type_search::sample(client, project_id, &tenant_id, &company_name)
                .await
        }
        SearchCommand::DateRangeSearch {
            tenant_id,
            company_name,
            days,
        } => {
            search::date_range_search::sample(client, project_id, &tenant_id, &company_name, days)
                .await
        }
        SearchCommand::LanguageCodeSearch {
            tenant_id,
            company_name,
        } => {
            search::language_code_search::sample(client, project_id, &tenant_id, &company_name)
                .await
        }
        SearchCommand::CompanyDisplayNameSearch {
            tenant_id,
            display_name,
        } => {
            search::company_display_name_search::sample(
                client,
                project_id,
                &tenant_id,
                &display_name,
            )
            .await
        }
        SearchCommand::BasicLocationSearch {
            tenant_id,
            company_name,
            location,
            distance_in_miles,
        } => {
            search::basic_location_search::sample(
                client,
                project_id,
                &tenant_id,
                &company_name,
                &location,
                distance_in_miles,
            )
            .await
        }
        SearchCommand::KeywordLocationSearch {
            tenant_id,
            company_name,
            location,
            distance_in_miles,
            keyword,
        } => {
            search::keyword_location_search::sample(
                client,
                project_id,
                &tenant_id,
                &company_name,
                &location,
                distance_in_miles,
                &keyword,
            )
            .await
        }
        SearchCommand::CityLocationSearch {
            tenant_id,
            company_name,
            city,
        } => {
            search::city_location_search::sample(
                client,
                project_id,
                &tenant_id,
                &company_name,
                &city,
            )
            .await
        }
        SearchCommand::MultiLocationSearch {
            tenant_id,
            company_name,
            location,
            other_location,
            distance_in_miles,
        } => {
            search::multi_location_search::sample(
                client,
                project_id,
                &tenant_id,
                &company_name,
                [location.as_str(), other_location.as_str()],
                distance_in_miles,
            )
            .await
        }
        SearchCommand::CommuteSearch { tenant_id } => {
            search::commute_search::sample(client, project_id, &tenant_id).await
        }
        SearchCommand::CommuteSearchDriving { tenant_id } => {
            search::commute_search_driving::sample(client, project_id, &tenant_id).await
        }
        SearchCommand::CustomRankingSearch { tenant_id } => {
            search::custom_ranking_search::sample(client, project_id, &tenant_id).await
        }
        SearchCommand::HistogramSearch { tenant_id, query } => {
            search::histogram_search::sample(client, project_id, &tenant_id, &query).await
        }
        SearchCommand::CustomAttributeFilterSearch { tenant_id } => {
            search::custom_attribute_filter_search::sample(client, project_id, &tenant_id).await
        }
        SearchCommand::CustomAttributeNotEmptySearch { tenant_id } => {
            search::custom_attribute_not_empty_search::sample(client, project_id, &tenant_id).await
        }
        SearchCommand::FeaturedJobSearch { tenant_id, query } => {
            search::featured_job_search::sample(client, project_id, &tenant_id, &query).await
        }
        SearchCommand::EmailAlertSearch {
            tenant_id,
            company_name,
        } => search::email_alert_search::sample(client, project_id, &tenant_id, &company_name).await,
        SearchCommand::RequestOptions { tenant_id, query } => {
            search::request_options::sample(client, project_id, &tenant_id, &query).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parse_with_project() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["program", "--project-id=p", "list-tenants"])?;
        assert_eq!(args.project_id, "p");
        assert!(matches!(args.command, Command::ListTenants), "{args:?}");
        Ok(())
    }

    #[test]
    fn parse_search() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=p",
            "basic-location-search",
            "--tenant-id=t",
            "--company-name=projects/p/tenants/t/companies/c",
        ])?;
        match args.command {
            Command::Search(SearchCommand::BasicLocationSearch {
                tenant_id,
                location,
                distance_in_miles,
                ..
            }) => {
                assert_eq!(tenant_id, "t");
                assert_eq!(location, "Mountain View, CA");
                assert_eq!(distance_in_miles, 0.5);
            }
            command => panic!("unexpected command {command:?}"),
        }
        Ok(())
    }

    #[test_case(&["program", "--project-id=p", "get-job"]; "missing job name")]
    #[test_case(&["program", "--project-id=p", "batch-create-jobs", "--tenant-id=t", "--company-name=c", "--requisition-ids", "a"]; "one requisition id")]
    #[test_case(&["program", "--project-id=p", "no-such-sample"]; "unknown sample")]
    fn parse_errors(input: &[&str]) {
        let got = Args::try_parse_from(input);
        assert!(got.is_err(), "{got:?}");
    }
}
