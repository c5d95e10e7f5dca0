/// Compile a regular expression once and hand back a `'static` reference to
/// it on every subsequent use. Patterns are literals, so a failure to compile
/// is a programming error and panics at first use.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
