//! Test-case record, the only domain entity
//!
//! Records serialize flat: the artifact fields of the active [`SchemaVariant`] sit
//! next to the common fields, so a batch renders as a plain JSON array of objects.

use super::schema::{ArtifactField, SchemaVariant};
use serde::{Deserialize, Serialize};

/// `type` carried by every placeholder record
pub const PLACEHOLDER_TYPE: &str = "Error";

/// Code/documentation fields of one record, shaped by its schema variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeArtifacts {
    PytestRobotManual {
        pytest_code: String,
        robot_code: String,
        manual_steps: String,
    },
    SeleniumPytest {
        selenium_code: String,
        pytest_code: String,
    },
}

impl CodeArtifacts {
    /// Build the artifacts of `variant`, asking `fill` for each required field
    pub fn build(variant: SchemaVariant, mut fill: impl FnMut(ArtifactField) -> String) -> Self {
        match variant {
            SchemaVariant::SeleniumPytest => Self::SeleniumPytest {
                selenium_code: fill(ArtifactField::SeleniumCode),
                pytest_code: fill(ArtifactField::PytestCode),
            },
            SchemaVariant::PytestRobotManual => Self::PytestRobotManual {
                pytest_code: fill(ArtifactField::PytestCode),
                robot_code: fill(ArtifactField::RobotCode),
                manual_steps: fill(ArtifactField::ManualSteps),
            },
        }
    }

    pub fn variant(&self) -> SchemaVariant {
        match self {
            Self::SeleniumPytest { .. } => SchemaVariant::SeleniumPytest,
            Self::PytestRobotManual { .. } => SchemaVariant::PytestRobotManual,
        }
    }

    /// Value of `field`, or `None` when the variant does not carry it
    pub fn get(&self, field: ArtifactField) -> Option<&str> {
        match (self, field) {
            (Self::SeleniumPytest { selenium_code, .. }, ArtifactField::SeleniumCode) => {
                Some(selenium_code.as_str())
            }
            (Self::SeleniumPytest { pytest_code, .. }, ArtifactField::PytestCode)
            | (Self::PytestRobotManual { pytest_code, .. }, ArtifactField::PytestCode) => {
                Some(pytest_code.as_str())
            }
            (Self::PytestRobotManual { robot_code, .. }, ArtifactField::RobotCode) => {
                Some(robot_code.as_str())
            }
            (Self::PytestRobotManual { manual_steps, .. }, ArtifactField::ManualSteps) => {
                Some(manual_steps.as_str())
            }
            _ => None,
        }
    }

    /// Fields in variant order, paired with their values
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactField, &str)> + '_ {
        self.variant()
            .fields()
            .iter()
            .filter_map(move |field| self.get(*field).map(|value| (*field, value)))
    }
}

/// One normalized test case
///
/// Every field is always populated; absent upstream values are replaced by
/// defaults during normalization, and failures produce placeholder records of
/// the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub input: String,
    pub expected_output: String,
    /// High / Medium / Low, not enforced
    pub priority: String,
    #[serde(rename = "type")]
    pub case_type: String,
    #[serde(flatten)]
    pub artifacts: CodeArtifacts,
}

impl TestCaseRecord {
    /// Synthetic record standing in for a whole batch after a failure
    pub fn placeholder(
        title: impl Into<String>,
        description: impl Into<String>,
        artifacts: CodeArtifacts,
    ) -> Self {
        Self {
            id: 1,
            title: title.into(),
            description: description.into(),
            input: "N/A".to_string(),
            expected_output: "N/A".to_string(),
            priority: "High".to_string(),
            case_type: PLACEHOLDER_TYPE.to_string(),
            artifacts,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.case_type == PLACEHOLDER_TYPE
    }

    pub fn artifact(&self, field: ArtifactField) -> Option<&str> {
        self.artifacts.get(field)
    }
}
