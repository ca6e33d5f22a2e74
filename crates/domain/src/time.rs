//! Audit timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp for the `created_at` / `updated_at` audit columns.
///
/// Records never carry timezone-local times; conversion is a client concern.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time, the single clock source for audit columns.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_go_backwards() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }
}
