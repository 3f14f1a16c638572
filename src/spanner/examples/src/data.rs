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

//! A thin client for the Cloud Spanner data API.
//!
//! The client speaks the Spanner [REST API] and only implements the
//! operations used by the samples in this crate: single-use queries and
//! reads, mutations, read-write and read-only transactions, partitioned DML,
//! and partitioned queries.
//!
//! Each operation creates a session and deletes it when the operation
//! completes. The client does not pool sessions, and it does not retry
//! aborted transactions, callers receive the `ABORTED` status as an error.
//!
//! # Example
//! ```no_run
//! # async fn sample() -> spanner_samples::data::Result<()> {
//! use spanner_samples::data::{Client, Statement};
//! let client = Client::builder("projects/p/instances/i/databases/d")
//!     .build()
//!     .await?;
//! let result = client
//!     .execute_query(Statement::new("SELECT @greeting AS greeting").bind("greeting", "Hello"))
//!     .await?;
//! for row in result.rows() {
//!     println!("{}", row.get::<String>("greeting")?);
//! }
//! # Ok(()) }
//! ```
//!
//! [REST API]: https://cloud.google.com/spanner/docs/reference/rest

mod batch;
pub(crate) mod client;
mod error;
mod mutation;
mod options;
mod result_set;
mod statement;
mod transaction;
mod value;
mod wire;

pub use batch::{BatchReadOnlyTransaction, Partition};
pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use mutation::{KeySet, Mutation};
pub use options::{
    CommitOptions, DirectedReadOptions, QueryOptions, ReplicaSelection, ReplicaType,
    TransactionOptions,
};
pub use result_set::{CommitResponse, CommitStats, Field, ResultSet, ResultSetStats, Row};
pub use statement::Statement;
pub use transaction::{ReadOnlyTransaction, ReadWriteTransaction};
pub use value::{FromValue, Type, TypeAnnotation, TypeCode, Value};

/// The default endpoint for the Spanner REST API.
pub const DEFAULT_ENDPOINT: &str = "https://spanner.googleapis.com";
