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

//! Offline tests for the job search samples.
//!
//! Each test replaces the transport with a mock and verifies the sample sends
//! the expected request.

#[cfg(test)]
mod tests {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::response::Response;
    use google_cloud_gax as gax;
    use google_cloud_longrunning::model::Operation;
    use google_cloud_longrunning::model::operation::Result as OperationResult;
    use google_cloud_talent_v4 as talent;
    use google_cloud_wkt as wkt;
    use talent::model::*;
    use talent_samples::{company, job, search};

    const PARENT: &str = "projects/my-project/tenants/my-tenant";
    const COMPANY: &str = "projects/my-project/tenants/my-tenant/companies/my-company";

    mockall::mock! {
        #[derive(Debug)]
        CompanyService {}
        impl talent::stub::CompanyService for CompanyService {
            async fn get_company(&self, req: GetCompanyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Company>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        JobService {}
        impl talent::stub::JobService for JobService {
            async fn create_job(&self, req: CreateJobRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Job>>;
            async fn get_job(&self, req: GetJobRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Job>>;
            async fn list_jobs(&self, req: ListJobsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<ListJobsResponse>>;
            async fn batch_create_jobs(&self, req: BatchCreateJobsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
            async fn batch_delete_jobs(&self, req: BatchDeleteJobsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
            async fn search_jobs(&self, req: SearchJobsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<SearchJobsResponse>>;
            async fn search_jobs_for_alert(&self, req: SearchJobsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<SearchJobsResponse>>;
        }
    }

    fn not_found() -> Error {
        Error::service(
            Status::default()
                .set_code(Code::NotFound)
                .set_message("company not found"),
        )
    }

    fn finished_operation(any: wkt::Any) -> gax::Result<Response<Operation>> {
        let operation = Operation::new()
            .set_name("operations/123")
            .set_done(true)
            .set_result(OperationResult::Response(any.into()));
        Ok(Response::from(operation))
    }

    #[tokio::test]
    async fn get_company_not_found() -> anyhow::Result<()> {
        let mut mock = MockCompanyService::new();
        mock.expect_get_company()
            .withf(|r, _| r.name == COMPANY)
            .return_once(|_, _| Err(not_found()));
        let client = talent::client::CompanyService::from_stub(mock);

        company::get_company::sample(&client, COMPANY).await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_company_invalid_name() -> anyhow::Result<()> {
        let mut mock = MockCompanyService::new();
        mock.expect_get_company().never();
        let client = talent::client::CompanyService::from_stub(mock);

        company::get_company::sample(&client, "projects/my-project/companies/my-company").await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_company_other_errors() -> anyhow::Result<()> {
        let mut mock = MockCompanyService::new();
        mock.expect_get_company().return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::PermissionDenied)
                    .set_message("uh-oh"),
            ))
        });
        let client = talent::client::CompanyService::from_stub(mock);

        let got = company::get_company::sample(&client, COMPANY).await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_job() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_create_job()
            .withf(|r, _| {
                let Some(job) = r.job.as_ref() else {
                    return false;
                };
                r.parent == PARENT
                    && job.company == COMPANY
                    && job.requisition_id == "req-1"
                    && job.title == "Software Engineer"
                    && job.language_code == "en-US"
                    && job.addresses.len() == 2
                    && job
                        .application_info
                        .as_ref()
                        .is_some_and(|a| a.uris == ["https://www.example.org/job-posting/123"])
            })
            .return_once(|r, _| {
                let job = r.job.unwrap_or_default().set_name(format!("{PARENT}/jobs/123"));
                Ok(Response::from(job))
            });
        let client = talent::client::JobService::from_stub(mock);

        let got = job::create_job::sample(
            &client,
            "my-project",
            "my-tenant",
            COMPANY,
            "req-1",
            "https://www.example.org/job-posting/123",
        )
        .await?;
        assert_eq!(got.name, format!("{PARENT}/jobs/123"));
        Ok(())
    }

    #[tokio::test]
    async fn create_job_with_custom_attributes() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_create_job()
            .withf(|r, _| {
                let Some(job) = r.job.as_ref() else {
                    return false;
                };
                let string_attribute = job.custom_attributes.get("someFieldName1");
                let long_attribute = job.custom_attributes.get("someFieldName2");
                string_attribute.is_some_and(|a| a.string_values == ["value1"] && a.filterable)
                    && long_attribute.is_some_and(|a| a.long_values == [256] && a.filterable)
            })
            .return_once(|r, _| Ok(Response::from(r.job.unwrap_or_default())));
        let client = talent::client::JobService::from_stub(mock);

        job::create_job_with_custom_attributes::sample(
            &client,
            "my-project",
            "my-tenant",
            COMPANY,
            "req-1",
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_job_invalid_name() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_get_job().never();
        let client = talent::client::JobService::from_stub(mock);

        job::get_job::sample(&client, "projects/my-project/tenants/my-tenant/jobs/").await?;
        Ok(())
    }

    #[tokio::test]
    async fn batch_create_jobs() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_batch_create_jobs()
            .withf(|r, _| {
                let titles = r.jobs.iter().map(|j| j.title.as_str()).collect::<Vec<_>>();
                r.parent == PARENT && titles == ["Software Engineer", "Quality Assurance"]
            })
            .return_once(|_, _| {
                let response = BatchCreateJobsResponse::new().set_job_results([
                    JobResult::new().set_job(Job::new().set_name(format!("{PARENT}/jobs/1"))),
                    JobResult::new().set_job(Job::new().set_name(format!("{PARENT}/jobs/2"))),
                    JobResult::new().set_status(
                        google_cloud_rpc::model::Status::new()
                            .set_code(3)
                            .set_message("bad job"),
                    ),
                ]);
                let any = wkt::Any::from_msg(&response).expect("test message should succeed");
                finished_operation(any)
            });
        let client = talent::client::JobService::from_stub(mock);

        let got = job::batch_create_jobs::sample(
            &client,
            "my-project",
            "my-tenant",
            COMPANY,
            ["req-1", "req-2"],
        )
        .await?;
        assert_eq!(got, vec![format!("{PARENT}/jobs/1"), format!("{PARENT}/jobs/2")]);
        Ok(())
    }

    #[tokio::test]
    async fn batch_delete_jobs_by_filter_no_matches() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_list_jobs()
            .withf(|r, _| r.parent == PARENT && r.filter == "requisitionId = \"none\"")
            .return_once(|_, _| Ok(Response::from(ListJobsResponse::new())));
        mock.expect_batch_delete_jobs().never();
        let client = talent::client::JobService::from_stub(mock);

        job::batch_delete_jobs_by_filter::sample(
            &client,
            "my-project",
            "my-tenant",
            "requisitionId = \"none\"",
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn batch_delete_jobs_by_filter() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_list_jobs().return_once(|_, _| {
            Ok(Response::from(ListJobsResponse::new().set_jobs([
                Job::new().set_name(format!("{PARENT}/jobs/1")),
                Job::new().set_name(format!("{PARENT}/jobs/2")),
            ])))
        });
        mock.expect_batch_delete_jobs()
            .withf(|r, _| {
                r.parent == PARENT
                    && r.names == [format!("{PARENT}/jobs/1"), format!("{PARENT}/jobs/2")]
            })
            .return_once(|_, _| {
                let any = wkt::Any::from_msg(&BatchDeleteJobsResponse::new())
                    .expect("test message should succeed");
                finished_operation(any)
            });
        let client = talent::client::JobService::from_stub(mock);

        let filter = format!(r#"companyName = "{COMPANY}""#);
        job::batch_delete_jobs_by_filter::sample(&client, "my-project", "my-tenant", &filter)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn custom_ranking_search() -> anyhow::Result<()> {
        use search_jobs_request::custom_ranking_info::ImportanceLevel;
        let mut mock = MockJobService::new();
        mock.expect_search_jobs()
            .withf(|r, _| {
                let metadata = r.request_metadata.as_ref();
                let ranking = r.custom_ranking_info.as_ref();
                r.parent == PARENT
                    && r.order_by == "custom_ranking desc"
                    && metadata.is_some_and(|m| m.domain == "www.example.com")
                    && ranking.is_some_and(|c| {
                        c.importance_level == ImportanceLevel::Extreme
                            && c.ranking_expression == "(someFieldLong + 25) * 0.25"
                    })
            })
            .return_once(|_, _| Ok(Response::from(SearchJobsResponse::new())));
        let client = talent::client::JobService::from_stub(mock);

        search::custom_ranking_search::sample(&client, "my-project", "my-tenant").await?;
        Ok(())
    }

    #[tokio::test]
    async fn commute_search() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_search_jobs()
            .withf(|r, _| {
                let commute = r.job_query.as_ref().and_then(|q| q.commute_filter.as_ref());
                commute.is_some_and(|c| {
                    c.commute_method == CommuteMethod::Transit
                        && c.travel_duration == Some(wkt::Duration::clamp(1800, 0))
                        && c.start_coordinates.as_ref().is_some_and(|l| {
                            l.latitude == 37.422408 && l.longitude == -122.084068
                        })
                })
            })
            .return_once(|_, _| {
                let matching = search_jobs_response::MatchingJob::new()
                    .set_job_summary("summary")
                    .set_job(Job::new().set_name(format!("{PARENT}/jobs/1")));
                Ok(Response::from(
                    SearchJobsResponse::new().set_matching_jobs([matching]),
                ))
            });
        let client = talent::client::JobService::from_stub(mock);

        search::commute_search::sample(&client, "my-project", "my-tenant").await?;
        Ok(())
    }

    #[tokio::test]
    async fn commute_search_all_pages() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockJobService::new();
        mock.expect_search_jobs()
            .withf(|r, _| r.parent == PARENT && r.page_token.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Ok(Response::from(
                    SearchJobsResponse::new().set_next_page_token("page-2"),
                ))
            });
        mock.expect_search_jobs()
            .withf(|r, _| {
                r.page_token == "page-2"
                    && r.job_query
                        .as_ref()
                        .is_some_and(|q| q.commute_filter.is_some())
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(SearchJobsResponse::new())));
        let client = talent::client::JobService::from_stub(mock);

        search::commute_search::sample(&client, "my-project", "my-tenant").await?;
        Ok(())
    }

    #[tokio::test]
    async fn histogram_search_all_pages() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockJobService::new();
        mock.expect_search_jobs()
            .withf(|r, _| r.page_token.is_empty() && r.histogram_queries.len() == 1)
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| {
                Ok(Response::from(
                    SearchJobsResponse::new()
                        .set_histogram_query_results([HistogramQueryResult::new()
                            .set_histogram_query("count(base_compensation, [bucket(12, 20)])")
                            .set_histogram([("[12, 20)", 1_i64)])])
                        .set_next_page_token("page-2"),
                ))
            });
        mock.expect_search_jobs()
            .withf(|r, _| r.page_token == "page-2" && r.histogram_queries.len() == 1)
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(SearchJobsResponse::new())));
        let client = talent::client::JobService::from_stub(mock);

        search::histogram_search::sample(
            &client,
            "my-project",
            "my-tenant",
            "count(base_compensation, [bucket(12, 20)])",
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn email_alert_search() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_search_jobs().never();
        mock.expect_search_jobs_for_alert()
            .withf(|r, _| {
                r.job_query
                    .as_ref()
                    .is_some_and(|q| q.companies == [COMPANY])
            })
            .return_once(|_, _| Ok(Response::from(SearchJobsResponse::new())));
        let client = talent::client::JobService::from_stub(mock);

        search::email_alert_search::sample(&client, "my-project", "my-tenant", COMPANY).await?;
        Ok(())
    }

    #[tokio::test]
    async fn multi_location_search() -> anyhow::Result<()> {
        let mut mock = MockJobService::new();
        mock.expect_search_jobs()
            .withf(|r, _| {
                let Some(query) = r.job_query.as_ref() else {
                    return false;
                };
                let addresses = query
                    .location_filters
                    .iter()
                    .map(|f| f.address.as_str())
                    .collect::<Vec<_>>();
                addresses == ["Mountain View, CA", "Sunnyvale, CA"]
                    && query.location_filters[0].distance_in_miles == 0.5
            })
            .return_once(|_, _| Ok(Response::from(SearchJobsResponse::new())));
        let client = talent::client::JobService::from_stub(mock);

        search::multi_location_search::sample(
            &client,
            "my-project",
            "my-tenant",
            COMPANY,
            ["Mountain View, CA", "Sunnyvale, CA"],
            0.5,
        )
        .await?;
        Ok(())
    }
}
