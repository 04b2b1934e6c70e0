//! Shared test utilities for domain crates.
//!
//! - `TestDatabase`: migrated PostgreSQL container with automatic cleanup
//!   (feature: "postgres", on by default)
//! - [`TestDataBuilder`]: deterministic test data
//! - [`assertions`]: assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_postgres_test");
//!
//!     let email = builder.email("alice");
//!     let name = builder.name("account", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Deterministic test data keyed by a seed.
///
/// Tests that share a database stay independent by deriving their data from
/// their own name.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_account");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A unique display name, e.g. `test-account-12345-main`.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("account", "main"), "test-account-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A unique institutional email, e.g. `alice.12345@test.university.edu`.
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@test.university.edu", local, self.seed)
    }

    /// A password that satisfies the minimum length rule.
    pub fn password(&self) -> String {
        format!("pw-{:016x}", self.seed)
    }
}

/// Test assertion helpers.
pub mod assertions {
    /// Assert that an optional value is Some and return it.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `items` are ordered by `key`, greatest first.
    pub fn assert_sorted_desc<T, K, F>(items: &[T], key: F, context: &str)
    where
        K: PartialOrd + std::fmt::Debug,
        F: Fn(&T) -> K,
    {
        for pair in items.windows(2) {
            let (a, b) = (key(&pair[0]), key(&pair[1]));
            assert!(a >= b, "{}: expected descending order, got {:?} before {:?}", context, a, b);
        }
    }
}
