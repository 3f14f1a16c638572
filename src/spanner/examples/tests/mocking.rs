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

//! Offline tests for the Spanner admin samples.
//!
//! Each test replaces the transport with a mock and verifies the sample sends
//! the expected request.

#[cfg(test)]
mod tests {
    use database_admin::model::*;
    use gax::response::Response;
    use google_cloud_gax as gax;
    use google_cloud_iam_v1::model::{GetIamPolicyRequest, Policy, SetIamPolicyRequest};
    use google_cloud_longrunning::model::Operation;
    use google_cloud_longrunning::model::operation::Result as OperationResult;
    use google_cloud_spanner_admin_database_v1 as database_admin;
    use google_cloud_spanner_admin_instance_v1 as instance_admin;
    use google_cloud_wkt as wkt;
    use pretty_assertions::assert_eq;
    use spanner_samples::{backup_schedule, database, instance_config, instance_partition, postgresql};

    const INSTANCE: &str = "projects/my-project/instances/my-instance";
    const DATABASE: &str = "projects/my-project/instances/my-instance/databases/my-db";

    mockall::mock! {
        #[derive(Debug)]
        DatabaseAdmin {}
        impl database_admin::stub::DatabaseAdmin for DatabaseAdmin {
            async fn create_database(&self, req: CreateDatabaseRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
            async fn update_database_ddl(&self, req: UpdateDatabaseDdlRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
            async fn get_database_ddl(&self, req: GetDatabaseDdlRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<GetDatabaseDdlResponse>>;
            async fn list_database_roles(&self, req: ListDatabaseRolesRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<ListDatabaseRolesResponse>>;
            async fn get_iam_policy(&self, req: GetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Policy>>;
            async fn set_iam_policy(&self, req: SetIamPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Policy>>;
            async fn update_backup_schedule(&self, req: UpdateBackupScheduleRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<BackupSchedule>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        InstanceAdmin {}
        impl instance_admin::stub::InstanceAdmin for InstanceAdmin {
            async fn get_instance_config(&self, req: instance_admin::model::GetInstanceConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<instance_admin::model::InstanceConfig>>;
            async fn create_instance_config(&self, req: instance_admin::model::CreateInstanceConfigRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
            async fn create_instance_partition(&self, req: instance_admin::model::CreateInstancePartitionRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
        }
    }

    fn finished_operation(any: wkt::Any) -> gax::Result<Response<Operation>> {
        let operation = Operation::new()
            .set_name("operations/123")
            .set_done(true)
            .set_result(OperationResult::Response(any.into()));
        Ok(Response::from(operation))
    }

    fn finished_ddl_operation() -> gax::Result<Response<Operation>> {
        let any = wkt::Any::from_msg(&wkt::Empty::default()).expect("test message should succeed");
        finished_operation(any)
    }

    #[tokio::test]
    async fn create_database() -> anyhow::Result<()> {
        let mut mock = MockDatabaseAdmin::new();
        mock.expect_create_database()
            .withf(|r, _| {
                r.parent == INSTANCE
                    && r.create_statement == "CREATE DATABASE `my-db`"
                    && r.extra_statements.len() == 2
                    && r.extra_statements[0].starts_with("CREATE TABLE Singers")
                    && r.extra_statements[1].starts_with("CREATE TABLE Albums")
            })
            .return_once(|_, _| {
                let any = wkt::Any::from_msg(&Database::new().set_name(DATABASE))
                    .expect("test message should succeed");
                finished_operation(any)
            });
        let client = database_admin::client::DatabaseAdmin::from_stub(mock);

        let got = database::create_database::sample(&client, "my-project", "my-instance", "my-db")
            .await?;
        assert_eq!(got.name, DATABASE);
        Ok(())
    }

    #[tokio::test]
    async fn postgresql_create_database() -> anyhow::Result<()> {
        let mut mock = MockDatabaseAdmin::new();
        mock.expect_create_database()
            .withf(|r, _| {
                r.create_statement == "CREATE DATABASE \"my-db\""
                    && r.database_dialect == DatabaseDialect::Postgresql
                    && r.extra_statements.is_empty()
            })
            .return_once(|_, _| {
                let database = Database::new()
                    .set_name(DATABASE)
                    .set_database_dialect(DatabaseDialect::Postgresql);
                let any = wkt::Any::from_msg(&database).expect("test message should succeed");
                finished_operation(any)
            });
        let client = database_admin::client::DatabaseAdmin::from_stub(mock);

        let got =
            postgresql::create_database::sample(&client, "my-project", "my-instance", "my-db")
                .await?;
        assert_eq!(got.database_dialect, DatabaseDialect::Postgresql);
        Ok(())
    }

    #[tokio::test]
    async fn update_database_with_default_leader() -> anyhow::Result<()> {
        let mut mock = MockDatabaseAdmin::new();
        mock.expect_update_database_ddl()
            .withf(|r, _| {
                r.database == DATABASE
                    && r.statements
                        == ["ALTER DATABASE `my-db` SET OPTIONS (default_leader = 'us-east1')"]
            })
            .return_once(|_, _| finished_ddl_operation());
        let client = database_admin::client::DatabaseAdmin::from_stub(mock);

        database::update_database_with_default_leader::sample(
            &client,
            "my-project",
            "my-instance",
            "my-db",
            "us-east1",
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn add_and_drop_database_role() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockDatabaseAdmin::new();
        mock.expect_update_database_ddl()
            .withf(|r, _| r.statements.first().is_some_and(|s| s == "CREATE ROLE new_parent"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| finished_ddl_operation());
        mock.expect_update_database_ddl()
            .withf(|r, _| r.statements.last().is_some_and(|s| s == "DROP ROLE new_child"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| finished_ddl_operation());
        let client = database_admin::client::DatabaseAdmin::from_stub(mock);

        database::add_and_drop_database_role::sample(&client, "my-project", "my-instance", "my-db")
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_database_ddl() -> anyhow::Result<()> {
        let mut mock = MockDatabaseAdmin::new();
        mock.expect_get_database_ddl()
            .withf(|r, _| r.database == DATABASE)
            .return_once(|_, _| {
                Ok(Response::from(
                    GetDatabaseDdlResponse::new().set_statements(["CREATE TABLE T (K INT64) PRIMARY KEY (K)"]),
                ))
            });
        let client = database_admin::client::DatabaseAdmin::from_stub(mock);

        let got =
            database::get_database_ddl::sample(&client, "my-project", "my-instance", "my-db").await?;
        assert_eq!(got, vec!["CREATE TABLE T (K INT64) PRIMARY KEY (K)".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn list_database_roles() -> anyhow::Result<()> {
        let mut mock = MockDatabaseAdmin::new();
        mock.expect_list_database_roles()
            .withf(|r, _| r.parent == DATABASE)
            .return_once(|_, _| {
                Ok(Response::from(ListDatabaseRolesResponse::new().set_database_roles([
                    DatabaseRole::new().set_name(format!("{DATABASE}/databaseRoles/public")),
                    DatabaseRole::new().set_name(format!("{DATABASE}/databaseRoles/new_parent")),
                ])))
            });
        let client = database_admin::client::DatabaseAdmin::from_stub(mock);

        let got =
            database::list_database_roles::sample(&client, "my-project", "my-instance", "my-db")
                .await?;
        assert_eq!(
            got,
            vec![
                format!("{DATABASE}/databaseRoles/public"),
                format!("{DATABASE}/databaseRoles/new_parent"),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn enable_fine_grained_access() -> anyhow::Result<()> {
        let mut mock = MockDatabaseAdmin::new();
        mock.expect_get_iam_policy()
            .withf(|r, _| {
                r.resource == DATABASE
                    && r.options
                        .as_ref()
                        .is_some_and(|o| o.requested_policy_version == 3)
            })
            .return_once(|_, _| Ok(Response::from(Policy::new().set_version(1).set_etag("abc"))));
        mock.expect_set_iam_policy()
            .withf(|r, _| {
                let Some(policy) = r.policy.as_ref() else {
                    return false;
                };
                let Some(binding) = policy.bindings.first() else {
                    return false;
                };
                r.resource == DATABASE
                    && policy.version == 3
                    && binding.role == "roles/spanner.fineGrainedAccessUser"
                    && binding.members == ["user:alice@example.com"]
                    && binding.condition.as_ref().is_some_and(|c| {
                        c.title == "my title"
                            && c.expression
                                == "resource.name.endsWith('/databaseRoles/new_parent')"
                    })
            })
            .return_once(|r, _| Ok(Response::from(r.policy.unwrap_or_default())));
        let client = database_admin::client::DatabaseAdmin::from_stub(mock);

        database::enable_fine_grained_access::sample(
            &client,
            "my-project",
            "my-instance",
            "my-db",
            "user:alice@example.com",
            "new_parent",
            "my title",
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_backup_schedule() -> anyhow::Result<()> {
        let mut mock = MockDatabaseAdmin::new();
        mock.expect_update_backup_schedule()
            .withf(|r, _| {
                let Some(schedule) = r.backup_schedule.as_ref() else {
                    return false;
                };
                let cron = schedule
                    .spec
                    .as_ref()
                    .and_then(|s| s.cron_spec())
                    .map(|c| c.text.as_str());
                let paths = r
                    .update_mask
                    .as_ref()
                    .map(|m| m.paths.clone())
                    .unwrap_or_default();
                schedule.name == format!("{DATABASE}/backupSchedules/my-schedule")
                    && cron == Some("45 10 * * *")
                    && schedule.retention_duration == Some(wkt::Duration::clamp(172800, 0))
                    && paths == ["retention_duration", "spec.cron_spec.text", "encryption_config"]
            })
            .return_once(|r, _| Ok(Response::from(r.backup_schedule.unwrap_or_default())));
        let client = database_admin::client::DatabaseAdmin::from_stub(mock);

        let got = backup_schedule::update_backup_schedule::sample(
            &client,
            "my-project",
            "my-instance",
            "my-db",
            "my-schedule",
        )
        .await?;
        assert_eq!(got.name, format!("{DATABASE}/backupSchedules/my-schedule"));
        Ok(())
    }

    #[tokio::test]
    async fn create_instance_config() -> anyhow::Result<()> {
        use instance_admin::model::{InstanceConfig, ReplicaInfo};
        let mut mock = MockInstanceAdmin::new();
        mock.expect_get_instance_config()
            .withf(|r, _| r.name == "projects/my-project/instanceConfigs/nam11")
            .return_once(|_, _| {
                Ok(Response::from(
                    InstanceConfig::new()
                        .set_name("projects/my-project/instanceConfigs/nam11")
                        .set_replicas([
                            ReplicaInfo::new().set_location("us-central1"),
                            ReplicaInfo::new().set_location("us-east1"),
                        ])
                        .set_optional_replicas([
                            ReplicaInfo::new().set_location("us-west1"),
                            ReplicaInfo::new().set_location("us-west2"),
                        ]),
                ))
            });
        mock.expect_create_instance_config()
            .withf(|r, _| {
                let Some(config) = r.instance_config.as_ref() else {
                    return false;
                };
                let locations = config
                    .replicas
                    .iter()
                    .map(|r| r.location.as_str())
                    .collect::<Vec<_>>();
                r.parent == "projects/my-project"
                    && r.instance_config_id == "custom-my-config"
                    && config.config_type == instance_admin::model::instance_config::Type::UserManaged
                    && config.base_config == "projects/my-project/instanceConfigs/nam11"
                    && locations == ["us-central1", "us-east1", "us-west1"]
            })
            .return_once(|r, _| {
                let any = wkt::Any::from_msg(&r.instance_config.unwrap_or_default())
                    .expect("test message should succeed");
                finished_operation(any)
            });
        let client = instance_admin::client::InstanceAdmin::from_stub(mock);

        instance_config::create_instance_config::sample(
            &client,
            "my-project",
            "custom-my-config",
            "nam11",
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn create_instance_partition() -> anyhow::Result<()> {
        use instance_admin::model::InstancePartition;
        let mut mock = MockInstanceAdmin::new();
        mock.expect_create_instance_partition()
            .withf(|r, _| {
                let Some(partition) = r.instance_partition.as_ref() else {
                    return false;
                };
                r.parent == INSTANCE
                    && r.instance_partition_id == "my-partition"
                    && partition.display_name == "Test Instance Partition"
                    && partition.config == "projects/my-project/instanceConfigs/nam3"
                    && partition.node_count() == Some(&1)
            })
            .return_once(|_, _| {
                let partition = InstancePartition::new()
                    .set_name(format!("{INSTANCE}/instancePartitions/my-partition"));
                let any = wkt::Any::from_msg(&partition).expect("test message should succeed");
                finished_operation(any)
            });
        let client = instance_admin::client::InstanceAdmin::from_stub(mock);

        let got = instance_partition::create_instance_partition::sample(
            &client,
            "my-project",
            "my-instance",
            "my-partition",
        )
        .await?;
        assert_eq!(got.name, format!("{INSTANCE}/instancePartitions/my-partition"));
        Ok(())
    }
}
