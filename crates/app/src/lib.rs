pub mod app_loop;
pub mod controls;
pub mod controls_file;
pub mod seed;

pub const APP_NAME: &str = "cavegen";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_seed_is_exact_decimal() {
        assert_eq!(format_seed(0), "0");
        assert_eq!(format_seed(12345), "12345");
        assert_eq!(format_seed(u64::MAX), "18446744073709551615");
    }
}
