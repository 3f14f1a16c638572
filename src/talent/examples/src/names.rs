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

//! Parse and validate job search resource names.
//!
//! The service rejects malformed names with a generic error. The samples
//! validate names locally first, so they can tell a malformed name apart from
//! a resource that does not exist.

use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NameError {
    #[error("expected {expected} segments in {name:?}, found {found}")]
    SegmentCount {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected:?} at position {position} in {name:?}")]
    Collection {
        name: String,
        position: usize,
        expected: &'static str,
    },
    #[error("the segment at position {position} in {name:?} is empty")]
    EmptySegment { name: String, position: usize },
}

/// Splits `name` into `collection/id` pairs and returns the ids.
fn parse_ids<'a>(name: &'a str, collections: &[&'static str]) -> Result<Vec<&'a str>, NameError> {
    let segments: Vec<&str> = name.split('/').collect();
    if segments.len() != 2 * collections.len() {
        return Err(NameError::SegmentCount {
            name: name.to_string(),
            expected: 2 * collections.len(),
            found: segments.len(),
        });
    }
    let mut ids = Vec::with_capacity(collections.len());
    for (i, (pair, collection)) in segments
        .chunks(2)
        .zip(collections.iter().copied())
        .enumerate()
    {
        if pair[0] != collection {
            return Err(NameError::Collection {
                name: name.to_string(),
                position: 2 * i,
                expected: collection,
            });
        }
        if pair[1].is_empty() {
            return Err(NameError::EmptySegment {
                name: name.to_string(),
                position: 2 * i + 1,
            });
        }
        ids.push(pair[1]);
    }
    Ok(ids)
}

/// A tenant name, `projects/{project}/tenants/{tenant}`.
#[derive(Clone, Debug, PartialEq)]
pub struct TenantName {
    pub project: String,
    pub tenant: String,
}

impl TenantName {
    pub fn new(project: impl Into<String>, tenant: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            tenant: tenant.into(),
        }
    }

    /// The parent for tenants, `projects/{project}`.
    pub fn parent(&self) -> String {
        format!("projects/{}", self.project)
    }
}

impl fmt::Display for TenantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "projects/{}/tenants/{}", self.project, self.tenant)
    }
}

impl FromStr for TenantName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids = parse_ids(s, &["projects", "tenants"])?;
        Ok(Self::new(ids[0], ids[1]))
    }
}

/// A company name, `projects/{project}/tenants/{tenant}/companies/{company}`.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyName {
    pub project: String,
    pub tenant: String,
    pub company: String,
}

impl CompanyName {
    pub fn new(
        project: impl Into<String>,
        tenant: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            tenant: tenant.into(),
            company: company.into(),
        }
    }

    pub fn tenant(&self) -> TenantName {
        TenantName::new(&self.project, &self.tenant)
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/tenants/{}/companies/{}",
            self.project, self.tenant, self.company
        )
    }
}

impl FromStr for CompanyName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids = parse_ids(s, &["projects", "tenants", "companies"])?;
        Ok(Self::new(ids[0], ids[1], ids[2]))
    }
}

/// A job name, `projects/{project}/tenants/{tenant}/jobs/{job}`.
#[derive(Clone, Debug, PartialEq)]
pub struct JobName {
    pub project: String,
    pub tenant: String,
    pub job: String,
}

impl JobName {
    pub fn new(
        project: impl Into<String>,
        tenant: impl Into<String>,
        job: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            tenant: tenant.into(),
            job: job.into(),
        }
    }

    pub fn tenant(&self) -> TenantName {
        TenantName::new(&self.project, &self.tenant)
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "projects/{}/tenants/{}/jobs/{}",
            self.project, self.tenant, self.job
        )
    }
}

impl FromStr for JobName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids = parse_ids(s, &["projects", "tenants", "jobs"])?;
        Ok(Self::new(ids[0], ids[1], ids[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn tenant_round_trip() -> anyhow::Result<()> {
        let got = "projects/p/tenants/t".parse::<TenantName>()?;
        assert_eq!(got, TenantName::new("p", "t"));
        assert_eq!(got.to_string(), "projects/p/tenants/t");
        assert_eq!(got.parent(), "projects/p");
        Ok(())
    }

    #[test]
    fn company() -> anyhow::Result<()> {
        let got = "projects/p/tenants/t/companies/c".parse::<CompanyName>()?;
        assert_eq!(got, CompanyName::new("p", "t", "c"));
        assert_eq!(got.tenant(), TenantName::new("p", "t"));
        assert_eq!(got.to_string(), "projects/p/tenants/t/companies/c");
        Ok(())
    }

    #[test]
    fn job() -> anyhow::Result<()> {
        let got = "projects/p/tenants/t/jobs/123".parse::<JobName>()?;
        assert_eq!(got, JobName::new("p", "t", "123"));
        assert_eq!(got.tenant().to_string(), "projects/p/tenants/t");
        Ok(())
    }

    #[test_case("projects/p/tenants/t/companies", 5)]
    #[test_case("projects/p/tenants/t/companies/c/extra", 7)]
    #[test_case("c", 1)]
    fn company_segment_count(input: &str, found: usize) {
        let got = input.parse::<CompanyName>();
        assert_eq!(
            got,
            Err(NameError::SegmentCount {
                name: input.to_string(),
                expected: 6,
                found
            })
        );
    }

    #[test_case("project/p/tenants/t/companies/c", 0, "projects")]
    #[test_case("projects/p/tenant/t/companies/c", 2, "tenants")]
    #[test_case("projects/p/tenants/t/jobs/c", 4, "companies")]
    fn company_collection(input: &str, position: usize, expected: &'static str) {
        let got = input.parse::<CompanyName>();
        assert_eq!(
            got,
            Err(NameError::Collection {
                name: input.to_string(),
                position,
                expected
            })
        );
    }

    #[test_case("projects//tenants/t/jobs/j", 1)]
    #[test_case("projects/p/tenants//jobs/j", 3)]
    #[test_case("projects/p/tenants/t/jobs/", 5)]
    fn job_empty_segment(input: &str, position: usize) {
        let got = input.parse::<JobName>();
        assert_eq!(
            got,
            Err(NameError::EmptySegment {
                name: input.to_string(),
                position
            })
        );
    }

    #[test]
    fn error_messages() {
        let got = "projects/p".parse::<TenantName>().unwrap_err();
        assert_eq!(
            got.to_string(),
            r#"expected 4 segments in "projects/p", found 2"#
        );
    }
}
