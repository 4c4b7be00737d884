use std::env;

/// Deployment mode, controlled by the `ENVIRONMENT_MODE` variable.
/// Development echoes error detail to clients; Production suppresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

pub fn which() -> Environment {
    parse(env::var("ENVIRONMENT_MODE").ok().as_deref())
}

fn parse(value: Option<&str>) -> Environment {
    match value {
        Some(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
        Some(_) => Environment::Development,
        None => {
            if cfg!(debug_assertions) {
                Environment::Development
            } else {
                Environment::Production
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_case_insensitive() {
        assert_eq!(parse(Some("production")), Environment::Production);
        assert_eq!(parse(Some("PRODUCTION")), Environment::Production);
    }

    #[test]
    fn anything_else_is_development() {
        assert_eq!(parse(Some("development")), Environment::Development);
        assert_eq!(parse(Some("staging")), Environment::Development);
    }
}
