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

//! Cloud Spanner samples.
//!
//! The control plane samples use the generated instance and database admin
//! clients. The data plane samples use the [data] module.

pub mod backup;
pub mod backup_schedule;
pub mod data;
pub mod database;
pub mod dml;
pub mod getting_started;
pub mod instance;
pub mod instance_config;
pub mod instance_partition;
pub mod json;
pub mod postgresql;
pub mod reads;
pub mod tagging;

use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_lro::Poller;
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_database_v1::model::Database;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;
use google_cloud_test_utils::resource_names::{
    PREFIX, random_backup_id, random_backup_schedule_id, random_database_id,
    random_instance_config_id, random_instance_id, random_instance_partition_id,
};
use google_cloud_test_utils::runtime_config::{project_id, region_id, spanner_instance_id};
use google_cloud_wkt::FieldMask;

/// Databases and backups older than this are removed by the cleanup helpers.
pub const STALE_RESOURCE_SECONDS: i64 = 48 * 60 * 60;

/// The base configuration for user-managed instance configurations.
const BASE_INSTANCE_CONFIG: &str = "nam11";

pub async fn run_instance_examples(instances: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let client = InstanceAdmin::builder().build().await?;

    let instance_id = random_instance_id();
    tracing::info!("running instance::create_instance example");
    let instance =
        instance::create_instance::sample(&client, &project_id, &instance_id, &region_id()).await?;
    instances.push(instance.name.clone());
    tracing::info!("running instance::get_instance example");
    instance::get_instance::sample(&client, &project_id, &instance_id).await?;
    tracing::info!("running instance::list_instances example");
    instance::list_instances::sample(&client, &project_id).await?;
    tracing::info!("running instance::delete_instance example");
    instance::delete_instance::sample(&client, &project_id, &instance_id).await?;
    Ok(())
}

pub async fn run_instance_config_examples(configs: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let client = InstanceAdmin::builder().build().await?;

    tracing::info!("running instance_config::get_instance_config example");
    instance_config::get_instance_config::sample(&client, &project_id, BASE_INSTANCE_CONFIG)
        .await?;
    tracing::info!("running instance_config::list_instance_configs example");
    instance_config::list_instance_configs::sample(&client, &project_id).await?;

    let config_id = random_instance_config_id();
    tracing::info!("running instance_config::create_instance_config example");
    let config = instance_config::create_instance_config::sample(
        &client,
        &project_id,
        &config_id,
        BASE_INSTANCE_CONFIG,
    )
    .await?;
    configs.push(config.name.clone());
    tracing::info!("running instance_config::list_instance_config_operations example");
    instance_config::list_instance_config_operations::sample(&client, &project_id).await?;
    tracing::info!("running instance_config::update_instance_config example");
    instance_config::update_instance_config::sample(&client, &project_id, &config_id).await?;
    tracing::info!("running instance_config::delete_instance_config example");
    instance_config::delete_instance_config::sample(&client, &project_id, &config_id).await?;
    Ok(())
}

pub async fn run_instance_partition_examples(partitions: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let instance_id = spanner_instance_id();
    let client = InstanceAdmin::builder().build().await?;

    let partition_id = random_instance_partition_id();
    tracing::info!("running instance_partition::create_instance_partition example");
    let partition = instance_partition::create_instance_partition::sample(
        &client,
        &project_id,
        &instance_id,
        &partition_id,
    )
    .await?;
    partitions.push(partition.name.clone());
    tracing::info!("running instance_partition::delete_instance_partition example");
    instance_partition::delete_instance_partition::sample(
        &client,
        &project_id,
        &instance_id,
        &partition_id,
    )
    .await?;
    Ok(())
}

pub async fn run_database_examples(databases: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let instance_id = spanner_instance_id();
    let client = DatabaseAdmin::builder().build().await?;
    let (project, instance) = (project_id.as_str(), instance_id.as_str());

    let database_id = random_database_id();
    tracing::info!("running database::create_database example");
    let created = database::create_database::sample(&client, project, instance, &database_id).await?;
    databases.push(created.name.clone());
    let db = database_id.as_str();

    tracing::info!("running database::list_databases example");
    database::list_databases::sample(&client, project, instance).await?;
    tracing::info!("running database::add_column example");
    database::add_column::sample(&client, project, instance, db).await?;
    tracing::info!("running database::create_venues_table example");
    database::create_venues_table::sample(&client, project, instance, db).await?;
    tracing::info!("running database::add_json_column example");
    database::add_json_column::sample(&client, project, instance, db).await?;
    tracing::info!("running database::create_table_with_foreign_key_delete_cascade example");
    database::create_table_with_foreign_key_delete_cascade::sample(&client, project, instance, db)
        .await?;
    tracing::info!("running database::drop_foreign_key_constraint_delete_cascade example");
    database::drop_foreign_key_constraint_delete_cascade::sample(&client, project, instance, db)
        .await?;
    tracing::info!("running database::alter_table_with_foreign_key_delete_cascade example");
    database::alter_table_with_foreign_key_delete_cascade::sample(&client, project, instance, db)
        .await?;
    tracing::info!("running database::add_and_drop_database_role example");
    database::add_and_drop_database_role::sample(&client, project, instance, db).await?;
    tracing::info!("running database::list_database_roles example");
    database::list_database_roles::sample(&client, project, instance, db).await?;
    tracing::info!("running database::get_database_ddl example");
    database::get_database_ddl::sample(&client, project, instance, db).await?;
    tracing::info!("running database::list_database_operations example");
    database::list_database_operations::sample(&client, project, instance).await?;

    let leader = default_leader_option(project, instance).await?;
    if let Some(leader) = &leader {
        let leader_database_id = random_database_id();
        tracing::info!("running database::create_database_with_default_leader example");
        let created = database::create_database_with_default_leader::sample(
            &client,
            project,
            instance,
            &leader_database_id,
            leader,
        )
        .await?;
        databases.push(created.name.clone());
        tracing::info!("running database::update_database_with_default_leader example");
        database::update_database_with_default_leader::sample(
            &client,
            project,
            instance,
            &leader_database_id,
            leader,
        )
        .await?;
    }

    tracing::info!("running database::update_database example");
    database::update_database::sample(&client, project, instance, db).await?;
    disable_drop_protection(&client, &created.name).await?;
    tracing::info!("running database::drop_database example");
    database::drop_database::sample(&client, project, instance, db).await?;
    Ok(())
}

pub async fn run_backup_examples(
    databases: &mut Vec<String>,
    backups: &mut Vec<String>,
) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let instance_id = spanner_instance_id();
    let client = DatabaseAdmin::builder().build().await?;
    let (project, instance) = (project_id.as_str(), instance_id.as_str());

    let database = create_test_database(&client, project, instance).await?;
    databases.push(database.name.clone());
    let database_id = database_id(&database.name).to_string();
    let version_time = database
        .earliest_version_time
        .unwrap_or_else(|| backup::seconds_from_now(0));

    let backup_id = random_backup_id();
    tracing::info!("running backup::create_backup example");
    let created =
        backup::create_backup::sample(&client, project, instance, &database_id, &backup_id, version_time)
            .await?;
    backups.push(created.name.clone());
    tracing::info!("running backup::get_backup example");
    backup::get_backup::sample(&client, project, instance, &backup_id).await?;
    tracing::info!("running backup::list_backups example");
    backup::list_backups::sample(&client, project, instance, Some(&database_id)).await?;
    tracing::info!("running backup::list_backup_operations example");
    backup::list_backup_operations::sample(&client, project, instance, &database_id, &backup_id)
        .await?;
    tracing::info!("running backup::update_backup example");
    backup::update_backup::sample(&client, project, instance, &backup_id).await?;

    let copy_id = random_backup_id();
    tracing::info!("running backup::copy_backup example");
    let copy = backup::copy_backup::sample(&client, project, instance, &copy_id, &backup_id).await?;
    backups.push(copy.name.clone());

    let encrypted_id = random_backup_id();
    tracing::info!("running backup::create_backup_with_encryption_key example");
    let encrypted = backup::create_backup_with_encryption_key::sample(
        &client,
        project,
        instance,
        &database_id,
        &encrypted_id,
        None,
    )
    .await?;
    backups.push(encrypted.name.clone());

    let restored_id = random_database_id();
    tracing::info!("running backup::restore_backup example");
    let restored =
        backup::restore_backup::sample(&client, project, instance, &restored_id, &backup_id).await?;
    databases.push(restored.name.clone());

    for id in [&copy_id, &encrypted_id, &backup_id] {
        tracing::info!("running backup::delete_backup example");
        backup::delete_backup::sample(&client, project, instance, id).await?;
    }
    Ok(())
}

pub async fn run_backup_schedule_examples(databases: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let instance_id = spanner_instance_id();
    let client = DatabaseAdmin::builder().build().await?;
    let (project, instance) = (project_id.as_str(), instance_id.as_str());

    let database = create_test_database(&client, project, instance).await?;
    databases.push(database.name.clone());
    let db = database_id(&database.name);

    let schedule_id = random_backup_schedule_id();
    tracing::info!("running backup_schedule::create_backup_schedule example");
    backup_schedule::create_backup_schedule::sample(&client, project, instance, db, &schedule_id)
        .await?;
    let full_id = random_backup_schedule_id();
    tracing::info!("running backup_schedule::create_full_backup_schedule example");
    backup_schedule::create_full_backup_schedule::sample(&client, project, instance, db, &full_id)
        .await?;
    tracing::info!("running backup_schedule::get_backup_schedule example");
    backup_schedule::get_backup_schedule::sample(&client, project, instance, db, &schedule_id)
        .await?;
    tracing::info!("running backup_schedule::list_backup_schedules example");
    backup_schedule::list_backup_schedules::sample(&client, project, instance, db).await?;
    tracing::info!("running backup_schedule::update_backup_schedule example");
    backup_schedule::update_backup_schedule::sample(&client, project, instance, db, &schedule_id)
        .await?;
    for id in [&schedule_id, &full_id] {
        tracing::info!("running backup_schedule::delete_backup_schedule example");
        backup_schedule::delete_backup_schedule::sample(&client, project, instance, db, id).await?;
    }
    Ok(())
}

pub async fn run_data_examples(databases: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let instance_id = spanner_instance_id();
    let admin = DatabaseAdmin::builder().build().await?;
    let (project, instance) = (project_id.as_str(), instance_id.as_str());

    let database = create_test_database(&admin, project, instance).await?;
    databases.push(database.name.clone());
    let db = database_id(&database.name);
    database::create_venues_table::sample(&admin, project, instance, db).await?;
    database::add_json_column::sample(&admin, project, instance, db).await?;
    let client = data::Client::builder(&database.name).build().await?;

    tracing::info!("running getting_started::quickstart example");
    getting_started::quickstart::sample(project, instance, db).await?;
    tracing::info!("running getting_started::insert_data example");
    getting_started::insert_data::sample(&client).await?;
    tracing::info!("running getting_started::query_data example");
    getting_started::query_data::sample(&client).await?;
    tracing::info!("running getting_started::read_data example");
    getting_started::read_data::sample(&client).await?;
    tracing::info!("running database::add_column example");
    database::add_column::sample(&admin, project, instance, db).await?;
    tracing::info!("running getting_started::update_data example");
    getting_started::update_data::sample(&client).await?;
    tracing::info!("running getting_started::query_data_with_new_column example");
    getting_started::query_data_with_new_column::sample(&client).await?;
    tracing::info!("running getting_started::read_write_transaction example");
    getting_started::read_write_transaction::sample(&client).await?;
    tracing::info!("running getting_started::read_only_transaction example");
    getting_started::read_only_transaction::sample(&client).await?;
    tracing::info!("running getting_started::query_with_parameter example");
    getting_started::query_with_parameter::sample(&client).await?;
    tracing::info!("running getting_started::set_max_commit_delay example");
    getting_started::set_max_commit_delay::sample(&client).await?;

    tracing::info!("running dml::write_using_dml example");
    dml::write_using_dml::sample(&client).await?;
    tracing::info!("running dml::update_using_dml example");
    dml::update_using_dml::sample(&client).await?;
    tracing::info!("running dml::delete_using_dml example");
    dml::delete_using_dml::sample(&client).await?;
    tracing::info!("running dml::dml_with_parameters example");
    dml::dml_with_parameters::sample(&client).await?;
    tracing::info!("running dml::batch_dml example");
    dml::batch_dml::sample(&client).await?;
    tracing::info!("running dml::insert_dml_returning example");
    dml::insert_dml_returning::sample(&client).await?;
    tracing::info!("running dml::update_dml_returning example");
    dml::update_dml_returning::sample(&client).await?;
    tracing::info!("running dml::delete_dml_returning example");
    dml::delete_dml_returning::sample(&client).await?;

    tracing::info!("running json::update_json_data example");
    json::update_json_data::sample(&client).await?;
    tracing::info!("running json::query_with_json_parameter example");
    json::query_with_json_parameter::sample(&client).await?;
    tracing::info!("running tagging::set_request_tag example");
    tagging::set_request_tag::sample(&client).await?;
    tracing::info!("running tagging::set_transaction_tag example");
    tagging::set_transaction_tag::sample(&client).await?;

    tracing::info!("running reads::get_default_leader example");
    reads::get_default_leader::sample(&client).await?;
    tracing::info!("running reads::directed_read example");
    reads::directed_read::sample(project, instance, db).await?;
    tracing::info!("running reads::batch_client example");
    reads::batch_client::sample(&client, 4).await?;
    tracing::info!("running database::add_and_drop_database_role example");
    database::add_and_drop_database_role::sample(&admin, project, instance, db).await?;
    tracing::info!("running reads::read_data_with_database_role example");
    reads::read_data_with_database_role::sample(project, instance, db, "new_parent").await?;

    tracing::info!("running dml::partitioned_dml example");
    dml::partitioned_dml::sample(&client).await?;
    Ok(())
}

pub async fn run_postgresql_examples(databases: &mut Vec<String>) -> anyhow::Result<()> {
    let _guard = google_cloud_test_utils::tracing::enable_tracing();
    let project_id = project_id()?;
    let instance_id = spanner_instance_id();
    let admin = DatabaseAdmin::builder().build().await?;
    let (project, instance) = (project_id.as_str(), instance_id.as_str());

    let database_id = random_database_id();
    tracing::info!("running postgresql::create_database example");
    let database =
        postgresql::create_database::sample(&admin, project, instance, &database_id).await?;
    databases.push(database.name.clone());
    let db = database_id.as_str();

    tracing::info!("running postgresql::create_table example");
    postgresql::create_table::sample(&admin, project, instance, db).await?;
    tracing::info!("running postgresql::add_column example");
    postgresql::add_column::sample(&admin, project, instance, db).await?;
    tracing::info!("running postgresql::create_storing_index example");
    postgresql::create_storing_index::sample(&admin, project, instance, db).await?;
    tracing::info!("running postgresql::interleaved_table example");
    postgresql::interleaved_table::sample(&admin, project, instance, db).await?;
    tracing::info!("running postgresql::create_sequence example");
    postgresql::create_sequence::sample(&admin, project, instance, db).await?;
    admin
        .update_database_ddl()
        .set_database(&database.name)
        .set_statements([
            "CREATE TABLE Venues (VenueId bigint NOT NULL PRIMARY KEY, VenueName varchar(1024))",
        ])
        .poller()
        .until_done()
        .await?;
    tracing::info!("running postgresql::jsonb_add_column example");
    postgresql::jsonb_add_column::sample(&admin, project, instance, db).await?;

    let client = data::Client::builder(&database.name).build().await?;
    tracing::info!("running postgresql::identifier_case_sensitivity example");
    postgresql::identifier_case_sensitivity::sample(&admin, &client, project, instance, db)
        .await?;
    tracing::info!("running postgresql::connect example");
    postgresql::connect::sample(project, instance, db).await?;
    tracing::info!("running postgresql::dml_with_parameters example");
    postgresql::dml_with_parameters::sample(&client).await?;
    tracing::info!("running postgresql::batch_dml example");
    postgresql::batch_dml::sample(&client).await?;
    tracing::info!("running postgresql::dml_getting_started_update example");
    postgresql::dml_getting_started_update::sample(&client).await?;
    tracing::info!("running postgresql::query_parameter example");
    postgresql::query_parameter::sample(&client).await?;
    tracing::info!("running postgresql::numeric_data_type example");
    postgresql::numeric_data_type::sample(&client).await?;
    tracing::info!("running postgresql::jsonb_update_data example");
    postgresql::jsonb_update_data::sample(&client).await?;
    tracing::info!("running postgresql::jsonb_query_parameter example");
    postgresql::jsonb_query_parameter::sample(&client).await?;
    tracing::info!("running postgresql::order_nulls example");
    postgresql::order_nulls::sample(&client).await?;
    tracing::info!("running postgresql::functions example");
    postgresql::functions::sample(&client).await?;
    tracing::info!("running postgresql::cast_data_type example");
    postgresql::cast_data_type::sample(&client).await?;
    tracing::info!("running postgresql::information_schema example");
    postgresql::information_schema::sample(&client).await?;
    tracing::info!("running postgresql::insert_dml_returning example");
    postgresql::insert_dml_returning::sample(&client).await?;
    tracing::info!("running postgresql::update_dml_returning example");
    postgresql::update_dml_returning::sample(&client).await?;
    tracing::info!("running postgresql::delete_dml_returning example");
    postgresql::delete_dml_returning::sample(&client).await?;
    tracing::info!("running postgresql::partitioned_dml example");
    postgresql::partitioned_dml::sample(&client).await?;
    Ok(())
}

/// Creates a database with the Singers and Albums tables.
pub async fn create_test_database(
    client: &DatabaseAdmin,
    project_id: &str,
    instance_id: &str,
) -> anyhow::Result<Database> {
    let database_id = random_database_id();
    let database = client
        .create_database()
        .set_parent(format!("projects/{project_id}/instances/{instance_id}"))
        .set_create_statement(format!("CREATE DATABASE `{database_id}`"))
        .set_extra_statements(database::SINGERS_AND_ALBUMS)
        .poller()
        .until_done()
        .await?;
    tracing::info!("created test database {}", database.name);
    Ok(database)
}

/// Returns the last component of `projects/*/instances/*/databases/*`.
fn database_id(name: &str) -> &str {
    name.rsplit_once('/').map(|(_, id)| id).unwrap_or(name)
}

/// Returns the first leader option of the test instance configuration.
async fn default_leader_option(project_id: &str, instance_id: &str) -> anyhow::Result<Option<String>> {
    let client = InstanceAdmin::builder().build().await?;
    let instance = client
        .get_instance()
        .set_name(format!("projects/{project_id}/instances/{instance_id}"))
        .send()
        .await?;
    let config = client
        .get_instance_config()
        .set_name(&instance.config)
        .send()
        .await?;
    Ok(config.leader_options.into_iter().next())
}

async fn disable_drop_protection(client: &DatabaseAdmin, name: &str) -> anyhow::Result<()> {
    client
        .update_database()
        .set_database(
            Database::new()
                .set_name(name)
                .set_enable_drop_protection(false),
        )
        .set_update_mask(FieldMask::default().set_paths(["enable_drop_protection"]))
        .poller()
        .until_done()
        .await?;
    Ok(())
}

/// Drops a database created by the drivers.
pub async fn cleanup_test_database(name: String) -> anyhow::Result<()> {
    let client = DatabaseAdmin::builder().build().await?;
    let database = client.get_database().set_name(&name).send().await?;
    if database.enable_drop_protection {
        disable_drop_protection(&client, &name).await?;
    }
    client.drop_database().set_database(&name).send().await?;
    Ok(())
}

pub async fn cleanup_test_backup(name: String) -> anyhow::Result<()> {
    let client = DatabaseAdmin::builder().build().await?;
    client.delete_backup().set_name(&name).send().await?;
    Ok(())
}

/// Deletes an instance, instance configuration or instance partition
/// created by the drivers.
pub async fn cleanup_test_instance_resource(name: String) -> anyhow::Result<()> {
    let client = InstanceAdmin::builder().build().await?;
    if name.contains("/instancePartitions/") {
        client.delete_instance_partition().set_name(&name).send().await?;
    } else if name.contains("/instanceConfigs/") {
        client.delete_instance_config().set_name(&name).send().await?;
    } else {
        client.delete_instance().set_name(&name).send().await?;
    }
    Ok(())
}

/// Removes the databases and backups created by previous test runs more
/// than [STALE_RESOURCE_SECONDS] ago.
pub async fn cleanup_stale_resources(project_id: &str, instance_id: &str) -> anyhow::Result<()> {
    let client = DatabaseAdmin::builder().build().await?;
    let parent = format!("projects/{project_id}/instances/{instance_id}");
    let stale_deadline = chrono::Utc::now().timestamp() - STALE_RESOURCE_SECONDS;
    let is_stale = |name: &str, create_time: Option<&google_cloud_wkt::Timestamp>| {
        database_id(name).starts_with(PREFIX)
            && create_time.is_some_and(|t| t.seconds() < stale_deadline)
    };

    // Backups must be deleted before their source databases.
    let mut backups = client.list_backups().set_parent(&parent).by_item();
    let mut pending = Vec::new();
    while let Some(backup) = backups.next().await.transpose()? {
        if is_stale(&backup.name, backup.create_time.as_ref()) {
            tracing::info!("deleting stale backup {}", backup.name);
            pending.push(tokio::spawn(cleanup_test_backup(backup.name)));
        }
    }
    log_failures("backup", futures::future::join_all(pending).await)?;

    let mut databases = client.list_databases().set_parent(&parent).by_item();
    let mut pending = Vec::new();
    while let Some(database) = databases.next().await.transpose()? {
        if is_stale(&database.name, database.create_time.as_ref()) {
            tracing::info!("deleting stale database {}", database.name);
            pending.push(tokio::spawn(cleanup_test_database(database.name)));
        }
    }
    log_failures("database", futures::future::join_all(pending).await)?;
    Ok(())
}

fn log_failures(
    kind: &str,
    results: Vec<Result<anyhow::Result<()>, tokio::task::JoinError>>,
) -> anyhow::Result<()> {
    let results = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    for (i, result) in results.into_iter().enumerate() {
        if let Err(e) = result {
            tracing::error!("error deleting stale {kind} #{i}: {e:?}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_id_from_name() {
        assert_eq!(
            database_id("projects/p/instances/i/databases/rust-sdk-testing-abc"),
            "rust-sdk-testing-abc"
        );
        assert_eq!(database_id("db"), "db");
    }
}
