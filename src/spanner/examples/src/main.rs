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

//! Runs a single Spanner sample from the command line.

use clap::{Parser, Subcommand};
use google_cloud_spanner_admin_database_v1::client::DatabaseAdmin;
use google_cloud_spanner_admin_instance_v1::client::InstanceAdmin;
use spanner_samples::{
    backup, backup_schedule, data, database, dml, getting_started, instance, instance_config,
    instance_partition, json, postgresql, reads, tagging,
};

const DESCRIPTION: &str = concat!(
    "Runs the Cloud Spanner samples.",
    " Each subcommand calls one sample with the values given on the command line."
);

#[derive(Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
struct Args {
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,

    #[arg(long, env = "GOOGLE_CLOUD_SPANNER_TEST_INSTANCE", default_value = "test-instance")]
    instance_id: String,

    /// The database used by the database, backup and data samples.
    #[arg(long, global = true)]
    database_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn database_id(&self) -> anyhow::Result<&str> {
        self.database_id
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("the --database-id flag is required for this sample"))
    }

    fn database_name(&self) -> anyhow::Result<String> {
        Ok(format!(
            "projects/{}/instances/{}/databases/{}",
            self.project_id,
            self.instance_id,
            self.database_id()?
        ))
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Instance(InstanceCommand),
    #[command(flatten)]
    Database(DatabaseCommand),
    #[command(flatten)]
    Backup(BackupCommand),
    #[command(flatten)]
    Data(DataCommand),
    #[command(flatten)]
    Postgresql(PostgresqlCommand),
}

#[derive(Debug, Subcommand)]
enum InstanceCommand {
    CreateInstance {
        #[arg(long, env = "GOOGLE_CLOUD_RUST_TEST_REGION", default_value = "us-central1")]
        region_id: String,
    },
    GetInstance,
    ListInstances,
    DeleteInstance,
    GetInstanceConfig {
        #[arg(long)]
        config_id: String,
    },
    ListInstanceConfigs,
    CreateInstanceConfig {
        /// Must start with `custom-`.
        #[arg(long)]
        config_id: String,
        #[arg(long, default_value = "nam11")]
        base_config_id: String,
    },
    UpdateInstanceConfig {
        #[arg(long)]
        config_id: String,
    },
    DeleteInstanceConfig {
        #[arg(long)]
        config_id: String,
    },
    ListInstanceConfigOperations,
    CreateInstancePartition {
        #[arg(long)]
        partition_id: String,
    },
    DeleteInstancePartition {
        #[arg(long)]
        partition_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum DatabaseCommand {
    CreateDatabase,
    CreateDatabaseWithDefaultLeader {
        #[arg(long)]
        default_leader: String,
    },
    UpdateDatabase,
    UpdateDatabaseWithDefaultLeader {
        #[arg(long)]
        default_leader: String,
    },
    AddColumn,
    AddJsonColumn,
    CreateVenuesTable,
    CreateTableWithForeignKeyDeleteCascade,
    AlterTableWithForeignKeyDeleteCascade,
    DropForeignKeyConstraintDeleteCascade,
    GetDatabaseDdl,
    ListDatabases,
    ListDatabaseOperations,
    DropDatabase,
    AddAndDropDatabaseRole,
    ListDatabaseRoles,
    EnableFineGrainedAccess {
        /// For example, `user:alice@example.com`.
        #[arg(long)]
        iam_member: String,
        #[arg(long, default_value = "new_parent")]
        database_role: String,
        #[arg(long, default_value = "Condition title")]
        title: String,
    },
}

#[derive(Debug, Subcommand)]
enum BackupCommand {
    CreateBackup {
        #[arg(long)]
        backup_id: String,
    },
    CreateBackupWithEncryptionKey {
        #[arg(long)]
        backup_id: String,
        /// Uses the Google default encryption when not set.
        #[arg(long)]
        kms_key_name: Option<String>,
    },
    CopyBackup {
        #[arg(long)]
        backup_id: String,
        #[arg(long)]
        source_backup_id: String,
    },
    GetBackup {
        #[arg(long)]
        backup_id: String,
    },
    ListBackups,
    ListBackupOperations {
        #[arg(long)]
        backup_id: String,
    },
    UpdateBackup {
        #[arg(long)]
        backup_id: String,
    },
    DeleteBackup {
        #[arg(long)]
        backup_id: String,
    },
    RestoreBackup {
        #[arg(long)]
        backup_id: String,
    },
    CreateBackupSchedule {
        #[arg(long)]
        schedule_id: String,
    },
    CreateFullBackupSchedule {
        #[arg(long)]
        schedule_id: String,
    },
    GetBackupSchedule {
        #[arg(long)]
        schedule_id: String,
    },
    ListBackupSchedules,
    UpdateBackupSchedule {
        #[arg(long)]
        schedule_id: String,
    },
    DeleteBackupSchedule {
        #[arg(long)]
        schedule_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum DataCommand {
    Quickstart,
    InsertData,
    QueryData,
    ReadData,
    UpdateData,
    QueryDataWithNewColumn,
    ReadWriteTransaction,
    ReadOnlyTransaction,
    QueryWithParameter,
    SetMaxCommitDelay,
    WriteUsingDml,
    UpdateUsingDml,
    DeleteUsingDml,
    DmlWithParameters,
    BatchDml,
    PartitionedDml,
    InsertDmlReturning,
    UpdateDmlReturning,
    DeleteDmlReturning,
    UpdateJsonData,
    QueryWithJsonParameter,
    SetRequestTag,
    SetTransactionTag,
    GetDefaultLeader,
    DirectedRead,
    ReadDataWithDatabaseRole {
        #[arg(long, default_value = "new_parent")]
        database_role: String,
    },
    BatchClient {
        #[arg(long, default_value_t = 4)]
        workers: usize,
    },
}

#[derive(Debug, Subcommand)]
enum PostgresqlCommand {
    PgCreateDatabase,
    PgCreateTable,
    PgAddColumn,
    PgCreateStoringIndex,
    PgInterleavedTable,
    PgCreateSequence,
    PgJsonbAddColumn,
    PgIdentifierCaseSensitivity,
    PgConnect,
    PgDmlWithParameters,
    PgBatchDml,
    PgPartitionedDml,
    PgQueryParameter,
    PgNumericDataType,
    PgJsonbUpdateData,
    PgJsonbQueryParameter,
    PgOrderNulls,
    PgFunctions,
    PgCastDataType,
    PgInformationSchema,
    PgDmlGettingStartedUpdate,
    PgInsertDmlReturning,
    PgUpdateDmlReturning,
    PgDeleteDmlReturning,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    google_cloud_test_utils::tracing::init_global()?;
    let args = Args::parse();
    tracing::info!("Configuration: {args:?}");
    match &args.command {
        Command::Instance(command) => run_instance(&args, command).await,
        Command::Database(command) => run_database(&args, command).await,
        Command::Backup(command) => run_backup(&args, command).await,
        Command::Data(command) => run_data(&args, command).await,
        Command::Postgresql(command) => run_postgresql(&args, command).await,
    }
}

async fn run_instance(args: &Args, command: &InstanceCommand) -> anyhow::Result<()> {
    let client = InstanceAdmin::builder().build().await?;
    let (project, instance) = (args.project_id.as_str(), args.instance_id.as_str());
    match command {
        InstanceCommand::CreateInstance { region_id } => {
            instance::create_instance::sample(&client, project, instance, region_id).await?;
        }
        InstanceCommand::GetInstance => {
            instance::get_instance::sample(&client, project, instance).await?
        }
        InstanceCommand::ListInstances => instance::list_instances::sample(&client, project).await?,
        InstanceCommand::DeleteInstance => {
            instance::delete_instance::sample(&client, project, instance).await?
        }
        InstanceCommand::GetInstanceConfig { config_id } => {
            instance_config::get_instance_config::sample(&client, project, config_id).await?
        }
        InstanceCommand::ListInstanceConfigs => {
            instance_config::list_instance_configs::sample(&client, project).await?
        }
        InstanceCommand::CreateInstanceConfig {
            config_id,
            base_config_id,
        } => {
            instance_config::create_instance_config::sample(
                &client,
                project,
                config_id,
                base_config_id,
            )
            .await?;
        }
        InstanceCommand::UpdateInstanceConfig { config_id } => {
            instance_config::update_instance_config::sample(&client, project, config_id).await?
        }
        InstanceCommand::DeleteInstanceConfig { config_id } => {
            instance_config::delete_instance_config::sample(&client, project, config_id).await?
        }
        InstanceCommand::ListInstanceConfigOperations => {
            instance_config::list_instance_config_operations::sample(&client, project).await?
        }
        InstanceCommand::CreateInstancePartition { partition_id } => {
            instance_partition::create_instance_partition::sample(
                &client,
                project,
                instance,
                partition_id,
            )
            .await?;
        }
        InstanceCommand::DeleteInstancePartition { partition_id } => {
            instance_partition::delete_instance_partition::sample(
                &client,
                project,
                instance,
                partition_id,
            )
            .await?
        }
    }
    Ok(())
}

async fn run_database(args: &Args, command: &DatabaseCommand) -> anyhow::Result<()> {
    let client = DatabaseAdmin::builder().build().await?;
    let (project, instance) = (args.project_id.as_str(), args.instance_id.as_str());
    match command {
        DatabaseCommand::ListDatabases => {
            return database::list_databases::sample(&client, project, instance).await;
        }
        DatabaseCommand::ListDatabaseOperations => {
            return database::list_database_operations::sample(&client, project, instance).await;
        }
        _ => {}
    }
    let db = args.database_id()?;
    match command {
        DatabaseCommand::CreateDatabase => {
            database::create_database::sample(&client, project, instance, db).await?;
        }
        DatabaseCommand::CreateDatabaseWithDefaultLeader { default_leader } => {
            database::create_database_with_default_leader::sample(
                &client,
                project,
                instance,
                db,
                default_leader,
            )
            .await?;
        }
        DatabaseCommand::UpdateDatabase => {
            database::update_database::sample(&client, project, instance, db).await?;
        }
        DatabaseCommand::UpdateDatabaseWithDefaultLeader { default_leader } => {
            database::update_database_with_default_leader::sample(
                &client,
                project,
                instance,
                db,
                default_leader,
            )
            .await?
        }
        DatabaseCommand::AddColumn => {
            database::add_column::sample(&client, project, instance, db).await?
        }
        DatabaseCommand::AddJsonColumn => {
            database::add_json_column::sample(&client, project, instance, db).await?
        }
        DatabaseCommand::CreateVenuesTable => {
            database::create_venues_table::sample(&client, project, instance, db).await?
        }
        DatabaseCommand::CreateTableWithForeignKeyDeleteCascade => {
            database::create_table_with_foreign_key_delete_cascade::sample(
                &client, project, instance, db,
            )
            .await?
        }
        DatabaseCommand::AlterTableWithForeignKeyDeleteCascade => {
            database::alter_table_with_foreign_key_delete_cascade::sample(
                &client, project, instance, db,
            )
            .await?
        }
        DatabaseCommand::DropForeignKeyConstraintDeleteCascade => {
            database::drop_foreign_key_constraint_delete_cascade::sample(
                &client, project, instance, db,
            )
            .await?
        }
        DatabaseCommand::GetDatabaseDdl => {
            database::get_database_ddl::sample(&client, project, instance, db).await?;
        }
        DatabaseCommand::DropDatabase => {
            database::drop_database::sample(&client, project, instance, db).await?
        }
        DatabaseCommand::AddAndDropDatabaseRole => {
            database::add_and_drop_database_role::sample(&client, project, instance, db).await?
        }
        DatabaseCommand::ListDatabaseRoles => {
            database::list_database_roles::sample(&client, project, instance, db).await?;
        }
        DatabaseCommand::EnableFineGrainedAccess {
            iam_member,
            database_role,
            title,
        } => {
            database::enable_fine_grained_access::sample(
                &client,
                project,
                instance,
                db,
                iam_member,
                database_role,
                title,
            )
            .await?
        }
        DatabaseCommand::ListDatabases | DatabaseCommand::ListDatabaseOperations => {}
    }
    Ok(())
}

async fn run_backup(args: &Args, command: &BackupCommand) -> anyhow::Result<()> {
    let client = DatabaseAdmin::builder().build().await?;
    let (project, instance) = (args.project_id.as_str(), args.instance_id.as_str());
    let db = args.database_id.as_deref();
    match command {
        BackupCommand::CreateBackup { backup_id } => {
            backup::create_backup::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                backup_id,
                backup::seconds_from_now(0),
            )
            .await?;
        }
        BackupCommand::CreateBackupWithEncryptionKey {
            backup_id,
            kms_key_name,
        } => {
            backup::create_backup_with_encryption_key::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                backup_id,
                kms_key_name.as_deref(),
            )
            .await?;
        }
        BackupCommand::CopyBackup {
            backup_id,
            source_backup_id,
        } => {
            backup::copy_backup::sample(&client, project, instance, backup_id, source_backup_id)
                .await?;
        }
        BackupCommand::GetBackup { backup_id } => {
            backup::get_backup::sample(&client, project, instance, backup_id).await?;
        }
        BackupCommand::ListBackups => {
            backup::list_backups::sample(&client, project, instance, db).await?;
        }
        BackupCommand::ListBackupOperations { backup_id } => {
            backup::list_backup_operations::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                backup_id,
            )
            .await?
        }
        BackupCommand::UpdateBackup { backup_id } => {
            backup::update_backup::sample(&client, project, instance, backup_id).await?;
        }
        BackupCommand::DeleteBackup { backup_id } => {
            backup::delete_backup::sample(&client, project, instance, backup_id).await?
        }
        BackupCommand::RestoreBackup { backup_id } => {
            backup::restore_backup::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                backup_id,
            )
            .await?;
        }
        BackupCommand::CreateBackupSchedule { schedule_id } => {
            backup_schedule::create_backup_schedule::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                schedule_id,
            )
            .await?;
        }
        BackupCommand::CreateFullBackupSchedule { schedule_id } => {
            backup_schedule::create_full_backup_schedule::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                schedule_id,
            )
            .await?;
        }
        BackupCommand::GetBackupSchedule { schedule_id } => {
            backup_schedule::get_backup_schedule::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                schedule_id,
            )
            .await?;
        }
        BackupCommand::ListBackupSchedules => {
            backup_schedule::list_backup_schedules::sample(
                &client,
                project,
                instance,
                args.database_id()?,
            )
            .await?;
        }
        BackupCommand::UpdateBackupSchedule { schedule_id } => {
            backup_schedule::update_backup_schedule::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                schedule_id,
            )
            .await?;
        }
        BackupCommand::DeleteBackupSchedule { schedule_id } => {
            backup_schedule::delete_backup_schedule::sample(
                &client,
                project,
                instance,
                args.database_id()?,
                schedule_id,
            )
            .await?
        }
    }
    Ok(())
}

async fn run_data(args: &Args, command: &DataCommand) -> anyhow::Result<()> {
    let (project, instance) = (args.project_id.as_str(), args.instance_id.as_str());
    let db = args.database_id()?;
    // These samples create their own client.
    match command {
        DataCommand::Quickstart => {
            return getting_started::quickstart::sample(project, instance, db).await;
        }
        DataCommand::DirectedRead => {
            return reads::directed_read::sample(project, instance, db).await;
        }
        DataCommand::ReadDataWithDatabaseRole { database_role } => {
            return reads::read_data_with_database_role::sample(
                project,
                instance,
                db,
                database_role,
            )
            .await;
        }
        _ => {}
    }

    let client = data::Client::builder(args.database_name()?).build().await?;
    match command {
        DataCommand::InsertData => getting_started::insert_data::sample(&client).await?,
        DataCommand::QueryData => getting_started::query_data::sample(&client).await?,
        DataCommand::ReadData => getting_started::read_data::sample(&client).await?,
        DataCommand::UpdateData => getting_started::update_data::sample(&client).await?,
        DataCommand::QueryDataWithNewColumn => {
            getting_started::query_data_with_new_column::sample(&client).await?
        }
        DataCommand::ReadWriteTransaction => {
            getting_started::read_write_transaction::sample(&client).await?
        }
        DataCommand::ReadOnlyTransaction => {
            getting_started::read_only_transaction::sample(&client).await?
        }
        DataCommand::QueryWithParameter => {
            getting_started::query_with_parameter::sample(&client).await?
        }
        DataCommand::SetMaxCommitDelay => {
            getting_started::set_max_commit_delay::sample(&client).await?;
        }
        DataCommand::WriteUsingDml => {
            dml::write_using_dml::sample(&client).await?;
        }
        DataCommand::UpdateUsingDml => {
            dml::update_using_dml::sample(&client).await?;
        }
        DataCommand::DeleteUsingDml => {
            dml::delete_using_dml::sample(&client).await?;
        }
        DataCommand::DmlWithParameters => {
            dml::dml_with_parameters::sample(&client).await?;
        }
        DataCommand::BatchDml => {
            dml::batch_dml::sample(&client).await?;
        }
        DataCommand::PartitionedDml => {
            dml::partitioned_dml::sample(&client).await?;
        }
        DataCommand::InsertDmlReturning => dml::insert_dml_returning::sample(&client).await?,
        DataCommand::UpdateDmlReturning => dml::update_dml_returning::sample(&client).await?,
        DataCommand::DeleteDmlReturning => dml::delete_dml_returning::sample(&client).await?,
        DataCommand::UpdateJsonData => json::update_json_data::sample(&client).await?,
        DataCommand::QueryWithJsonParameter => {
            json::query_with_json_parameter::sample(&client).await?;
        }
        DataCommand::SetRequestTag => tagging::set_request_tag::sample(&client).await?,
        DataCommand::SetTransactionTag => tagging::set_transaction_tag::sample(&client).await?,
        DataCommand::GetDefaultLeader => {
            reads::get_default_leader::sample(&client).await?;
        }
        DataCommand::BatchClient { workers } => {
            reads::batch_client::sample(&client, *workers).await?;
        }
        DataCommand::Quickstart
        | DataCommand::DirectedRead
        | DataCommand::ReadDataWithDatabaseRole { .. } => {}
    }
    Ok(())
}

async fn run_postgresql(args: &Args, command: &PostgresqlCommand) -> anyhow::Result<()> {
    let (project, instance) = (args.project_id.as_str(), args.instance_id.as_str());
    let db = args.database_id()?;
    let admin = DatabaseAdmin::builder().build().await?;
    match command {
        PostgresqlCommand::PgCreateDatabase => {
            postgresql::create_database::sample(&admin, project, instance, db).await?;
            return Ok(());
        }
        PostgresqlCommand::PgCreateTable => {
            return postgresql::create_table::sample(&admin, project, instance, db).await;
        }
        PostgresqlCommand::PgAddColumn => {
            return postgresql::add_column::sample(&admin, project, instance, db).await;
        }
        PostgresqlCommand::PgCreateStoringIndex => {
            return postgresql::create_storing_index::sample(&admin, project, instance, db).await;
        }
        PostgresqlCommand::PgInterleavedTable => {
            return postgresql::interleaved_table::sample(&admin, project, instance, db).await;
        }
        PostgresqlCommand::PgCreateSequence => {
            return postgresql::create_sequence::sample(&admin, project, instance, db).await;
        }
        PostgresqlCommand::PgJsonbAddColumn => {
            return postgresql::jsonb_add_column::sample(&admin, project, instance, db).await;
        }
        PostgresqlCommand::PgConnect => {
            postgresql::connect::sample(project, instance, db).await?;
            return Ok(());
        }
        _ => {}
    }

    let client = data::Client::builder(args.database_name()?).build().await?;
    match command {
        PostgresqlCommand::PgIdentifierCaseSensitivity => {
            postgresql::identifier_case_sensitivity::sample(&admin, &client, project, instance, db)
                .await?
        }
        PostgresqlCommand::PgDmlWithParameters => {
            postgresql::dml_with_parameters::sample(&client).await?;
        }
        PostgresqlCommand::PgBatchDml => {
            postgresql::batch_dml::sample(&client).await?;
        }
        PostgresqlCommand::PgPartitionedDml => {
            postgresql::partitioned_dml::sample(&client).await?;
        }
        PostgresqlCommand::PgQueryParameter => postgresql::query_parameter::sample(&client).await?,
        PostgresqlCommand::PgNumericDataType => {
            postgresql::numeric_data_type::sample(&client).await?;
        }
        PostgresqlCommand::PgJsonbUpdateData => {
            postgresql::jsonb_update_data::sample(&client).await?
        }
        PostgresqlCommand::PgJsonbQueryParameter => {
            postgresql::jsonb_query_parameter::sample(&client).await?;
        }
        PostgresqlCommand::PgOrderNulls => {
            postgresql::order_nulls::sample(&client).await?;
        }
        PostgresqlCommand::PgFunctions => {
            postgresql::functions::sample(&client).await?;
        }
        PostgresqlCommand::PgCastDataType => postgresql::cast_data_type::sample(&client).await?,
        PostgresqlCommand::PgInformationSchema => {
            postgresql::information_schema::sample(&client).await?;
        }
        PostgresqlCommand::PgDmlGettingStartedUpdate => {
            postgresql::dml_getting_started_update::sample(&client).await?
        }
        PostgresqlCommand::PgInsertDmlReturning => {
            postgresql::insert_dml_returning::sample(&client).await?;
        }
        PostgresqlCommand::PgUpdateDmlReturning => {
            postgresql::update_dml_returning::sample(&client).await?;
        }
        PostgresqlCommand::PgDeleteDmlReturning => {
            postgresql::delete_dml_returning::sample(&client).await?;
        }
        PostgresqlCommand::PgCreateDatabase
        | PostgresqlCommand::PgCreateTable
        | PostgresqlCommand::PgAddColumn
        | PostgresqlCommand::PgCreateStoringIndex
        | PostgresqlCommand::PgInterleavedTable
        | PostgresqlCommand::PgCreateSequence
        | PostgresqlCommand::PgJsonbAddColumn
        | PostgresqlCommand::PgConnect => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parse_with_database() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "program",
            "--project-id=p",
            "--instance-id=i",
            "query-data",
            "--database-id=d",
        ])?;
        assert_eq!(args.database_name()?, "projects/p/instances/i/databases/d");
        assert!(
            matches!(args.command, Command::Data(DataCommand::QueryData)),
            "{args:?}"
        );
        Ok(())
    }

    #[test]
    fn parse_batch_client() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["program", "--project-id=p", "batch-client"])?;
        match args.command {
            Command::Data(DataCommand::BatchClient { workers }) => assert_eq!(workers, 4),
            command => panic!("unexpected command {command:?}"),
        }
        assert!(args.database_id().is_err(), "{args:?}");
        Ok(())
    }

    #[test_case(&["program", "--project-id=p", "get-backup"]; "missing backup id")]
    #[test_case(&["program", "--project-id=p", "enable-fine-grained-access"]; "missing iam member")]
    #[test_case(&["program", "--project-id=p", "no-such-sample"]; "unknown sample")]
    fn parse_errors(input: &[&str]) {
        let got = Args::try_parse_from(input);
        assert!(got.is_err(), "{got:?}");
    }
}
