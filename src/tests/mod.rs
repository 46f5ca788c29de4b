// Test modules for testcase-gen crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.

// Shared fixtures and the recording transport
pub mod helpers;


// NOTE: Wire-level tests against a real HTTP server live in tests/ (wiremock)
