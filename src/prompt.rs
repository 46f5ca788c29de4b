//! Prompt and request construction
//!
//! The prompt is a single user message: the requirement verbatim, the number of
//! cases wanted, the exact field list of the schema variant and one worked example
//! object. The example is rendered with `serde_json`, so its escaping is always
//! valid JSON regardless of the code it contains.

use crate::config::AdapterConfig;
use crate::core_types::{ArtifactField, SchemaVariant};
use crate::transport::{ChatCompletionRequest, ChatMessage};
use serde_json::{json, Value};

const SELENIUM_EXAMPLE: &str = "# Selenium WebDriver test code
from selenium import webdriver
from selenium.webdriver.common.by import By
from selenium.webdriver.support.ui import WebDriverWait
from selenium.webdriver.support import expected_conditions as EC

def test_example():
    driver = webdriver.Chrome()
    try:
        driver.get('https://example.com')
        element = WebDriverWait(driver, 10).until(EC.presence_of_element_located((By.ID, 'example-id')))
        element.click()
        assert 'Expected' in driver.page_source
    finally:
        driver.quit()";

const PYTEST_EXAMPLE: &str = "# Pytest test code
import pytest

def test_example():
    result = perform_test_function()
    assert result is not None
    assert result == 'expected_value'";

const ROBOT_EXAMPLE: &str = "*** Test Cases ***
Valid Login
    Open Browser    https://example.com/login    chrome
    Input Text    id=username    demo
    Input Password    id=password    secret
    Click Button    id=login
    Page Should Contain    Dashboard
    [Teardown]    Close Browser";

const MANUAL_STEPS_EXAMPLE: &str = "1. Open the app
2. Enter valid credentials
3. Click Login
4. Verify dashboard is shown";

/// One-line instruction describing `field` in the prompt
fn prompt_hint(field: ArtifactField) -> &'static str {
    match field {
        ArtifactField::SeleniumCode => "Selenium WebDriver (Python) code for the test",
        ArtifactField::PytestCode => "Pytest code for the test",
        ArtifactField::RobotCode => "Robot Framework code for the test",
        ArtifactField::ManualSteps => {
            "a clear, step-by-step guide for a human tester to perform the test manually (as a string, use numbered steps)"
        }
    }
}

fn example_value(field: ArtifactField) -> &'static str {
    match field {
        ArtifactField::SeleniumCode => SELENIUM_EXAMPLE,
        ArtifactField::PytestCode => PYTEST_EXAMPLE,
        ArtifactField::RobotCode => ROBOT_EXAMPLE,
        ArtifactField::ManualSteps => MANUAL_STEPS_EXAMPLE,
    }
}

/// Fields every variant shares, in prompt order
const COMMON_FIELDS: [&str; 6] = [
    "title",
    "description",
    "input",
    "expected_output",
    "priority",
    "type",
];

/// Worked example entries for `variant`, in prompt order
pub fn example_case(variant: SchemaVariant) -> Vec<(&'static str, Value)> {
    let mut entries = vec![
        ("id", json!(1)),
        ("title", json!("Test case title")),
        ("description", json!("Test case description")),
        ("input", json!("Input data or conditions")),
        ("expected_output", json!("Expected result")),
        ("priority", json!("High/Medium/Low")),
        ("type", json!("Functional/UI/Integration")),
    ];
    for field in variant.fields() {
        entries.push((field.key(), json!(example_value(*field))));
    }
    entries
}

/// Render the example as a one-element JSON array, keeping field order
fn render_example(variant: SchemaVariant) -> String {
    let body = example_case(variant)
        .into_iter()
        .map(|(key, value)| format!("    \"{key}\": {value}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("[\n  {{\n{body}\n  }}\n]")
}

/// Build the instruction text for `requirement`
pub fn build_prompt(requirement: &str, variant: SchemaVariant, case_count: usize) -> String {
    let mut field_list = String::new();
    for name in COMMON_FIELDS {
        field_list.push_str(&format!("- {name}\n"));
    }
    for field in variant.fields() {
        field_list.push_str(&format!("- {}: {}\n", field.key(), prompt_hint(*field)));
    }

    let example = render_example(variant);

    format!(
        r#"You are a software test engineer. Generate exactly {case_count} test cases in valid JSON format (array of objects) for the following requirement:

"""{requirement}"""

For each test case, include:
{field_list}
Return ONLY a JSON array with this exact structure:
{example}

Make sure all code is properly escaped for JSON and covers realistic test scenarios.
Do not wrap the JSON in markdown code fences and do not add any explanation before or after it."#
    )
}

/// Wire request for one generation call
pub fn build_request(config: &AdapterConfig, requirement: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage::user(build_prompt(
            requirement,
            config.schema_variant,
            config.case_count,
        ))],
        temperature: config.temperature,
        max_tokens: config.max_output_tokens,
    }
}
