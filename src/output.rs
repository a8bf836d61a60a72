use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `REFCAT_QUIET=1` (or `true`) drops banners and decorative lines from human output
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("REFCAT_QUIET")
            .map(|v| quiet_value(&v))
            .unwrap_or(false)
    })
}

fn quiet_value(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
