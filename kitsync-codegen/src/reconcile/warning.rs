//! Advisory findings from reconciling a user config.

use std::fmt;

/// Drift between the user config and the generated config.
///
/// Every variant carries what is needed to print the corrective fragment;
/// formatting and coloring are left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The user config does not extend the generated config.
    NotExtendingGeneratedConfig {
        /// User config filename, e.g. `tsconfig.json`
        file: String,
        /// Recommended `extends` value
        extends: String,
    },
    /// The user config overrides `paths` without the `$lib` entries.
    MissingLibPathOverride {
        /// User config filename, e.g. `tsconfig.json`
        file: String,
        /// Recommended `$lib` target
        lib: String,
        /// Recommended `$lib/*` target
        lib_glob: String,
    },
}

impl Warning {
    /// One-line summary of the problem.
    pub fn message(&self) -> String {
        match self {
            Warning::NotExtendingGeneratedConfig { file, .. } => {
                format!("Your {file} should extend the configuration generated by kitsync:")
            }
            Warning::MissingLibPathOverride { file, .. } => {
                format!("Your compilerOptions.paths in {file} should include the following:")
            }
        }
    }

    /// The JSON the user should add to their config.
    pub fn fragment(&self) -> String {
        match self {
            Warning::NotExtendingGeneratedConfig { extends, .. } => {
                format!("{{\n  \"extends\": {}\n}}", quote(extends))
            }
            Warning::MissingLibPathOverride { lib, lib_glob, .. } => format!(
                "{{\n  \"$lib\": [{}],\n  \"$lib/*\": [{}]\n}}",
                quote(lib),
                quote(lib_glob)
            ),
        }
    }
}

/// A JSON string literal for `value`.
fn quote(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.message(), self.fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_extending_fragment() {
        let warning = Warning::NotExtendingGeneratedConfig {
            file: "tsconfig.json".into(),
            extends: "./.svelte-kit/tsconfig.json".into(),
        };

        assert_eq!(
            warning.message(),
            "Your tsconfig.json should extend the configuration generated by kitsync:"
        );
        assert_eq!(
            warning.fragment(),
            "{\n  \"extends\": \"./.svelte-kit/tsconfig.json\"\n}"
        );
    }

    #[test]
    fn test_missing_lib_fragment() {
        let warning = Warning::MissingLibPathOverride {
            file: "jsconfig.json".into(),
            lib: "src/lib".into(),
            lib_glob: "src/lib/*".into(),
        };

        assert!(warning.message().contains("jsconfig.json"));
        assert_eq!(
            warning.fragment(),
            "{\n  \"$lib\": [\"src/lib\"],\n  \"$lib/*\": [\"src/lib/*\"]\n}"
        );
        assert!(warning.to_string().ends_with(&warning.fragment()));
    }

    #[test]
    fn test_fragment_escapes_values() {
        let warning = Warning::MissingLibPathOverride {
            file: "tsconfig.json".into(),
            lib: r#"src/"odd"\lib"#.into(),
            lib_glob: r#"src/"odd"\lib/*"#.into(),
        };

        let fragment: serde_json::Value = serde_json::from_str(&warning.fragment()).unwrap();
        assert_eq!(fragment["$lib"][0], r#"src/"odd"\lib"#);
        assert_eq!(fragment["$lib/*"][0], r#"src/"odd"\lib/*"#);

        let warning = Warning::NotExtendingGeneratedConfig {
            file: "tsconfig.json".into(),
            extends: r#"./"gen"/tsconfig.json"#.into(),
        };
        let fragment: serde_json::Value = serde_json::from_str(&warning.fragment()).unwrap();
        assert_eq!(fragment["extends"], r#"./"gen"/tsconfig.json"#);
    }
}
