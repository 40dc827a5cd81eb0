// src/macros.rs
//
// Owned-string shorthands used for catalog URLs, file names and error fields.

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr) => {
        ::std::string::String::from($text)
    };
}

/// Concatenate `&str` pieces into one `String`, sized up front.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let parts: &[&str] = &[$($part),+];
        parts.concat()
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn join_builds_source_urls() {
        let base = "https://plans.test/";
        let path = "5k/novice/";
        assert_eq!(join!(base, path), "https://plans.test/5k/novice/");
        assert_eq!(join!("plan", ".", "tsv"), "plan.tsv");
    }

    #[test]
    fn s_is_owned() {
        let empty: String = s!();
        assert!(empty.is_empty());
        assert_eq!(s!("Rest"), String::from("Rest"));
    }
}
