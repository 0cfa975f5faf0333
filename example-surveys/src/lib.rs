pub mod clinic_intake;
pub mod household_census;
pub mod plain_form;
pub mod wildlife_sighting;

use chrono::{DateTime, TimeDelta, Utc};

/// 2011-03-09 12:00:00 UTC, in seconds since the epoch.
const CREATED_AT_SECS: i64 = 1_299_672_000;

/// Fixed creation time so derived id strings are reproducible.
pub fn fixed_created_at() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(CREATED_AT_SECS)
}

pub use clinic_intake::clinic_intake;
pub use household_census::household_census;
pub use plain_form::plain_form;
pub use wildlife_sighting::wildlife_sighting;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_time_is_fixed() {
        assert_eq!(
            fixed_created_at().format("%Y-%m-%d %H:%M:%S").to_string(),
            "2011-03-09 12:00:00"
        );
    }

    #[test]
    fn fixture_id_strings_do_not_depend_on_the_clock() {
        assert_eq!(household_census().id_string(), "household_census_2011_03_09");
        assert_eq!(plain_form().id_string(), "plain_2011_03_09");
        assert_eq!(household_census().created_at(), fixed_created_at());
    }
}
