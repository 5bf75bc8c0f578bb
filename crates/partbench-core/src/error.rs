// Dweve Partbench - Spatial Partitioning Benchmark Charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for loading benchmark results and extracting series.

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchErrorKind {
    /// Input is not valid JSON or does not have the benchmark shape.
    MalformedInput,
    /// A selector reached an absent required branch of a measurement tree.
    MissingPath,
    /// File could not be read.
    Io,
    /// A configured limit was exceeded.
    Limit,
}

impl fmt::Display for BenchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput => write!(f, "MalformedInput"),
            Self::MissingPath => write!(f, "MissingPath"),
            Self::Io => write!(f, "IOError"),
            Self::Limit => write!(f, "LimitError"),
        }
    }
}

/// An error raised while loading or reshaping benchmark data.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}{}", .context.as_ref().map(|c| format!(" ({})", c)).unwrap_or_default())]
pub struct BenchError {
    /// The kind of error.
    pub kind: BenchErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Where the error happened (e.g. "strategy 'naive', box count 5").
    pub context: Option<String>,
}

impl BenchError {
    /// Create a new error.
    pub fn new(kind: BenchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::MalformedInput, message)
    }

    pub fn missing_path(path: impl Into<String>) -> Self {
        Self::new(
            BenchErrorKind::MissingPath,
            format!("no measurement at '{}'", path.into()),
        )
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::new(
            BenchErrorKind::Io,
            format!("failed to read '{}': {}", path.display(), source),
        )
    }

    pub fn limit(message: impl Into<String>) -> Self {
        Self::new(BenchErrorKind::Limit, message)
    }

    /// Returns true for [`BenchErrorKind::MalformedInput`].
    pub fn is_malformed(&self) -> bool {
        self.kind == BenchErrorKind::MalformedInput
    }

    /// Returns true for [`BenchErrorKind::MissingPath`].
    pub fn is_missing_path(&self) -> bool {
        self.kind == BenchErrorKind::MissingPath
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(BenchErrorKind::MalformedInput.to_string(), "MalformedInput");
        assert_eq!(BenchErrorKind::MissingPath.to_string(), "MissingPath");
        assert_eq!(BenchErrorKind::Io.to_string(), "IOError");
        assert_eq!(BenchErrorKind::Limit.to_string(), "LimitError");
    }

    #[test]
    fn test_display_without_context() {
        let err = BenchError::malformed("expected an object");
        assert_eq!(err.to_string(), "MalformedInput: expected an object");
    }

    #[test]
    fn test_display_with_context() {
        let err = BenchError::missing_path("collision")
            .with_context("strategy 'naive', box count 5");
        assert_eq!(
            err.to_string(),
            "MissingPath: no measurement at 'collision' (strategy 'naive', box count 5)"
        );
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = BenchError::io(
            Path::new("bench.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(err.kind, BenchErrorKind::Io);
        assert!(err.message.contains("bench.json"));
        assert!(err.message.contains("file not found"));
    }

    #[test]
    fn test_serde_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BenchError = json_err.into();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(BenchError::missing_path("a.b").is_missing_path());
        assert!(!BenchError::missing_path("a.b").is_malformed());
        assert!(!BenchError::limit("too deep").is_missing_path());
    }
}
