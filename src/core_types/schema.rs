//! Schema variants and the code/documentation fields they require
//!
//! A [`SchemaVariant`] is the closed set of artifact fields a batch carries on top
//! of the common test-case fields. Each field knows its JSON key, its display label
//! and the default text substituted when the model leaves it out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Code or documentation field attached to every test case of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactField {
    SeleniumCode,
    PytestCode,
    RobotCode,
    ManualSteps,
}

impl ArtifactField {
    /// JSON key used in the prompt, the model reply and serialized records
    pub fn key(self) -> &'static str {
        match self {
            Self::SeleniumCode => "selenium_code",
            Self::PytestCode => "pytest_code",
            Self::RobotCode => "robot_code",
            Self::ManualSteps => "manual_steps",
        }
    }

    /// Human-readable column / tool label
    pub fn label(self) -> &'static str {
        match self {
            Self::SeleniumCode => "Selenium",
            Self::PytestCode => "Pytest",
            Self::RobotCode => "Robot Framework",
            Self::ManualSteps => "Manual Steps",
        }
    }

    /// Whether the field holds source code (placeholders get a `#` comment prefix)
    pub fn is_code(self) -> bool {
        !matches!(self, Self::ManualSteps)
    }

    /// Default used when the model reply omits this field
    pub fn missing_default(self) -> String {
        match self {
            Self::ManualSteps => "No manual steps provided".to_string(),
            code => format!("# No {} code provided", code.label()),
        }
    }

    /// Text used when no content can exist for this field (placeholder records)
    pub fn unavailable(self, note: &str) -> String {
        if self.is_code() {
            format!("# {note}")
        } else {
            note.to_string()
        }
    }
}

impl fmt::Display for ArtifactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which artifact fields a batch carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    /// Selenium WebDriver script plus a Pytest test
    SeleniumPytest,
    /// Pytest test, Robot Framework suite and manual tester steps
    #[default]
    PytestRobotManual,
}

impl SchemaVariant {
    pub fn fields(self) -> &'static [ArtifactField] {
        match self {
            Self::SeleniumPytest => &[ArtifactField::SeleniumCode, ArtifactField::PytestCode],
            Self::PytestRobotManual => &[
                ArtifactField::PytestCode,
                ArtifactField::RobotCode,
                ArtifactField::ManualSteps,
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SeleniumPytest => "selenium_pytest",
            Self::PytestRobotManual => "pytest_robot_manual",
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "selenium_pytest" => Ok(Self::SeleniumPytest),
            "pytest_robot_manual" => Ok(Self::PytestRobotManual),
            other => Err(format!(
                "Unsupported schema variant: {other}. Supported variants: selenium_pytest, pytest_robot_manual"
            )),
        }
    }
}
