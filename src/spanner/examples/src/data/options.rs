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

use serde::Serialize;
use std::time::Duration;

/// The kind of replica used in a [ReplicaSelection].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplicaType {
    ReadWrite,
    ReadOnly,
}

/// Selects replicas by location, type, or both.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReplicaSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    replica_type: Option<ReplicaType>,
}

impl ReplicaSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    pub fn set_type(mut self, v: ReplicaType) -> Self {
        self.replica_type = Some(v);
        self
    }
}

/// Controls which replicas serve read-only queries.
///
/// Directed reads apply to single-use and read-only transactions, the
/// service rejects them in read-write transactions.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DirectedReadOptions {
    IncludeReplicas {
        replica_selections: Vec<ReplicaSelection>,
        auto_failover_disabled: bool,
    },
    ExcludeReplicas {
        replica_selections: Vec<ReplicaSelection>,
    },
}

impl DirectedReadOptions {
    /// Prefer the replicas that match any of `selections`.
    ///
    /// If none of these replicas is available the service falls back to
    /// other replicas, unless `auto_failover_disabled` is set.
    pub fn include_replicas<T>(selections: T, auto_failover_disabled: bool) -> Self
    where
        T: IntoIterator<Item = ReplicaSelection>,
    {
        Self::IncludeReplicas {
            replica_selections: selections.into_iter().collect(),
            auto_failover_disabled,
        }
    }

    /// Avoid the replicas that match any of `selections`.
    pub fn exclude_replicas<T>(selections: T) -> Self
    where
        T: IntoIterator<Item = ReplicaSelection>,
    {
        Self::ExcludeReplicas {
            replica_selections: selections.into_iter().collect(),
        }
    }
}

/// Per-request options for queries and DML statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryOptions {
    pub(crate) request_tag: Option<String>,
    pub(crate) directed_read_options: Option<DirectedReadOptions>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags the request, the tag appears in the query statistics tables.
    pub fn set_request_tag<T: Into<String>>(mut self, v: T) -> Self {
        self.request_tag = Some(v.into());
        self
    }

    /// Overrides the client-level directed read options for this request.
    pub fn set_directed_read_options(mut self, v: DirectedReadOptions) -> Self {
        self.directed_read_options = Some(v);
        self
    }
}

/// Options for read-write transactions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionOptions {
    pub(crate) transaction_tag: Option<String>,
}

impl TransactionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags all the requests in the transaction.
    pub fn set_transaction_tag<T: Into<String>>(mut self, v: T) -> Self {
        self.transaction_tag = Some(v.into());
        self
    }
}

/// Options for commit requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommitOptions {
    pub(crate) return_commit_stats: bool,
    pub(crate) max_commit_delay: Option<Duration>,
}

impl CommitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests commit statistics, such as the number of mutations.
    pub fn set_return_commit_stats(mut self, v: bool) -> Self {
        self.return_commit_stats = v;
        self
    }

    /// How long the service may delay the commit to batch it with other
    /// commits. The service accepts values between 0 and 500ms.
    pub fn set_max_commit_delay(mut self, v: Duration) -> Self {
        self.max_commit_delay = Some(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn directed_read_options() -> anyhow::Result<()> {
        let options = DirectedReadOptions::include_replicas(
            [ReplicaSelection::new().set_type(ReplicaType::ReadWrite)],
            true,
        );
        let got = serde_json::to_value(&options)?;
        let want = json!({"includeReplicas": {
            "replicaSelections": [{"type": "READ_WRITE"}],
            "autoFailoverDisabled": true,
        }});
        assert_eq!(got, want);

        let options = DirectedReadOptions::exclude_replicas([
            ReplicaSelection::new().set_location("us-east4")
        ]);
        let got = serde_json::to_value(&options)?;
        let want = json!({"excludeReplicas": {
            "replicaSelections": [{"location": "us-east4"}],
        }});
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn builders() {
        let options = QueryOptions::new().set_request_tag("app=concert");
        assert_eq!(options.request_tag.as_deref(), Some("app=concert"));
        assert!(options.directed_read_options.is_none(), "{options:?}");

        let options = CommitOptions::new()
            .set_return_commit_stats(true)
            .set_max_commit_delay(Duration::from_millis(100));
        assert!(options.return_commit_stats);
        assert_eq!(options.max_commit_delay, Some(Duration::from_millis(100)));

        let options = TransactionOptions::new().set_transaction_tag("app=cart");
        assert_eq!(options.transaction_tag.as_deref(), Some("app=cart"));
    }
}
