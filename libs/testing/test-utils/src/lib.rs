//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the catalog crates:
//! - `TestDataFile`: a JSON data file in a temporary directory, removed on drop
//! - `TestDataBuilder`: Deterministic item fixtures
//! - `assertions`: Custom assertion helpers
//!
//! Fixtures are plain `serde_json::Value`s so that any crate can use them
//! without depending on a particular item model.
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestDataFile};
//!
//! let file = TestDataFile::with_items(&TestDataBuilder::sample_items());
//! let path = file.path();
//! // point the store under test at `path`
//! ```

use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary items file. The directory and file are deleted on drop.
pub struct TestDataFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TestDataFile {
    /// A file holding an empty array
    pub fn new() -> Self {
        Self::with_items(&[])
    }

    /// A file holding `items` as a JSON array
    pub fn with_items(items: &[Value]) -> Self {
        let file = Self::missing();
        file.write_items(items);
        file
    }

    /// A file holding arbitrary raw text, e.g. malformed JSON
    pub fn with_contents(contents: &str) -> Self {
        let file = Self::missing();
        std::fs::write(&file.path, contents).expect("failed to write test data file");
        file
    }

    /// A path inside a fresh temporary directory where no file exists yet
    pub fn missing() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("items.json");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with `items`
    pub fn write_items(&self, items: &[Value]) {
        let data = serde_json::to_vec_pretty(items).expect("failed to serialize test items");
        std::fs::write(&self.path, data).expect("failed to write test data file");
    }

    /// Parse the current file contents as a JSON array
    pub fn read_items(&self) -> Vec<Value> {
        let raw = std::fs::read(&self.path).expect("failed to read test data file");
        serde_json::from_slice(&raw).expect("test data file is not a JSON array")
    }
}

impl Default for TestDataFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for test data with deterministic values
///
/// This ensures tests are reproducible: the same seed always yields the same
/// names and prices.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique item name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("lamp"), "test-lamp-7");
    /// ```
    pub fn name(&self, suffix: &str) -> String {
        format!("test-{}-{}", suffix, self.seed)
    }

    /// Price between 1 and 1000 derived from the seed and `id`
    pub fn price(&self, id: u64) -> u64 {
        self.seed.wrapping_add(id) % 1000 + 1
    }

    /// A full item with the given id, name derived from the seed and
    /// [`price`](Self::price)
    pub fn item(&self, id: u64) -> Value {
        json!({
            "id": id,
            "name": self.name(&id.to_string()),
            "category": "Generated",
            "price": self.price(id),
        })
    }

    /// Generated items with ids `1..=count`
    pub fn items(&self, count: u64) -> Vec<Value> {
        (1..=count).map(|id| self.item(id)).collect()
    }

    /// The three-item fixture used across the handler tests
    pub fn sample_items() -> Vec<Value> {
        vec![
            json!({"id": 1, "name": "Test Item 1", "category": "Test", "price": 100}),
            json!({"id": 2, "name": "Test Item 2", "category": "Test", "price": 200}),
            json!({"id": 3, "name": "Another Item", "category": "Other", "price": 300}),
        ]
    }

    /// Items with ids `1..=count` named "Item 1", "Item 2", ...
    pub fn numbered(count: u64) -> Vec<Value> {
        (1..=count)
            .map(|id| json!({"id": id, "name": format!("Item {}", id), "price": 10 * id}))
            .collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Collect the `id` field of every item in a JSON array
    pub fn ids(items: &Value) -> Vec<u64> {
        items
            .as_array()
            .unwrap_or_else(|| panic!("expected a JSON array, got {}", items))
            .iter()
            .map(|item| {
                item["id"]
                    .as_u64()
                    .unwrap_or_else(|| panic!("item without numeric id: {}", item))
            })
            .collect()
    }

    /// Assert that `body` is a standard error response with the given message
    pub fn assert_error_body(body: &Value, expected: &str) {
        assert_eq!(
            body["error"].as_str(),
            Some(expected),
            "unexpected error body: {}",
            body
        );
        assert!(body["code"].is_i64(), "error body has no code: {}", body);
    }
}
