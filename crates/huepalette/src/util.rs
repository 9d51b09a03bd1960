/// A trait to abstract over environment variable access.
///
/// Options read their overrides through this trait, so that tests can supply
/// a fake environment instead of mutating the process environment.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Try reading the environment variable as a string with leading and
    /// trailing white space removed. Empty values count as absent.
    fn read_trimmed(&self, key: &str) -> Option<String> {
        self.read(key)
            .ok()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_read_trimmed() {
        let mut env = FakeEnv::new();
        env.set("PADDED", "  B\n").set("BLANK", "   ");
        assert_eq!(env.read_trimmed("PADDED"), Some("B".to_string()));
        assert_eq!(env.read_trimmed("BLANK"), None);
        assert_eq!(env.read_trimmed("MISSING"), None);
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
