//! Serde model of the known-answer JSON files

use serde::Deserialize;

/// One JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct VectorFile {
    /// Where the vectors come from
    pub source: String,
    pub groups: Vec<TestGroup>,
}

/// Vectors sharing a mode
#[derive(Debug, Clone, Deserialize)]
pub struct TestGroup {
    /// "ECB", "CBC" or "CTR"
    pub mode: String,
    pub tests: Vec<TestCase>,
}

/// A single vector; hex-encoded fields
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub key: String,
    pub pt: String,
    pub ct: String,
    /// CBC IV, or the 8-byte RFC 5528 IV for CTR
    #[serde(default)]
    pub iv: Option<String>,
    /// 4-byte RFC 5528 nonce
    #[serde(default)]
    pub nonce: Option<String>,
    /// Every counter block a CTR session requests, concatenated
    #[serde(default)]
    pub counter_blocks: Option<String>,
    /// NESSIE "iterated 100 times" result
    #[serde(default)]
    pub iterated_100: Option<String>,
    /// NESSIE "iterated 1000 times" result
    #[serde(default)]
    pub iterated_1000: Option<String>,
}
