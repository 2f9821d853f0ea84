//! Wall-clock milliseconds for transcript ids.

/// Milliseconds since the Unix epoch.
///
/// Uses `Date.now()` in the browser and the system clock elsewhere. A clock
/// before the epoch reads as `0`.
#[cfg_attr(feature = "hydrate", allow(clippy::cast_possible_truncation))]
pub fn now_millis() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_millis_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
