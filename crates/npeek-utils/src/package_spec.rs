/// A parsed npm package specifier.
///
/// `original` keeps the user input verbatim, whitespace included;
/// `name` and `version_tag` are derived from the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub original: String,
    pub name: String,
    pub version_tag: Option<String>,
}

/// Splits a specifier into a canonical package name and an optional
/// version or dist-tag.
///
/// Scoped packages keep their leading `@`; the version separator is
/// always the last `@` in the string (after the scope's `/` for
/// scoped names), so specifiers with embedded `@`s fold everything
/// before the final one into the name. Parsing never fails: malformed
/// input becomes a name with no tag.
pub fn parse_package_spec(spec: &str) -> PackageSpec {
    let trimmed = spec.trim();

    let (name, version_tag) = if trimmed.starts_with('@') {
        // Scoped package - the scope separator is the first /, the
        // version separator (if any) is the last @ after it
        if let Some(slash) = trimmed.find('/') {
            match trimmed[slash + 1..].rfind('@') {
                Some(at) => {
                    let cut = slash + 1 + at;
                    (&trimmed[..cut], Some(&trimmed[cut + 1..]))
                }
                None => (trimmed, None),
            }
        } else {
            // Malformed scoped package, treat as regular
            split_unscoped(trimmed)
        }
    } else {
        split_unscoped(trimmed)
    };

    PackageSpec {
        original: spec.to_string(),
        name: name.to_string(),
        version_tag: version_tag.map(str::to_string),
    }
}

fn split_unscoped(trimmed: &str) -> (&str, Option<&str>) {
    match trimmed.rfind('@') {
        Some(at) if at > 0 => (&trimmed[..at], Some(&trimmed[at + 1..])),
        _ => (trimmed, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_with_tag() {
        let spec = parse_package_spec("@upstash/context7-mcp@latest");
        assert_eq!(spec.name, "@upstash/context7-mcp");
        assert_eq!(spec.version_tag.as_deref(), Some("latest"));
        assert_eq!(spec.original, "@upstash/context7-mcp@latest");
    }

    #[test]
    fn test_scoped_without_tag() {
        let spec = parse_package_spec("@angular/core");
        assert_eq!(spec.name, "@angular/core");
        assert_eq!(spec.version_tag, None);
        assert_eq!(spec.original, "@angular/core");
    }

    #[test]
    fn test_unscoped_with_version() {
        let spec = parse_package_spec("express@4.18.2");
        assert_eq!(spec.name, "express");
        assert_eq!(spec.version_tag.as_deref(), Some("4.18.2"));
    }

    #[test]
    fn test_unscoped_without_version() {
        let spec = parse_package_spec("lodash");
        assert_eq!(spec.name, "lodash");
        assert_eq!(spec.version_tag, None);
    }

    #[test]
    fn test_scoped_with_numeric_version() {
        let spec = parse_package_spec("@angular/core@16.0.0");
        assert_eq!(spec.name, "@angular/core");
        assert_eq!(spec.version_tag.as_deref(), Some("16.0.0"));
    }

    #[test]
    fn test_scoped_with_prerelease_version() {
        let spec = parse_package_spec("@vue/cli@5.0.0-beta.1");
        assert_eq!(spec.name, "@vue/cli");
        assert_eq!(spec.version_tag.as_deref(), Some("5.0.0-beta.1"));
    }

    #[test]
    fn test_multiple_at_symbols_last_wins() {
        let spec = parse_package_spec("@scope/package@1.0.0@beta");
        assert_eq!(spec.name, "@scope/package@1.0.0");
        assert_eq!(spec.version_tag.as_deref(), Some("beta"));
    }

    #[test]
    fn test_whitespace_trimmed_for_name_only() {
        let spec = parse_package_spec("  @upstash/context7-mcp@latest  ");
        assert_eq!(spec.name, "@upstash/context7-mcp");
        assert_eq!(spec.version_tag.as_deref(), Some("latest"));
        assert_eq!(spec.original, "  @upstash/context7-mcp@latest  ");
    }

    #[test]
    fn test_empty_input_is_permissive() {
        let spec = parse_package_spec("");
        assert_eq!(spec.name, "");
        assert_eq!(spec.version_tag, None);
    }

    #[test]
    fn test_scoped_without_slash_falls_back_to_regular() {
        let spec = parse_package_spec("@weird@1.0.0");
        assert_eq!(spec.name, "@weird");
        assert_eq!(spec.version_tag.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_tag_reconstructs_trimmed_original() {
        for input in ["@scope/name@1.0.0@beta", "express@4.18.2", " react@18 "] {
            let spec = parse_package_spec(input);
            let tag = spec.version_tag.as_deref();
            assert!(tag.is_some());
            let rebuilt = format!("{}@{}", spec.name, tag.unwrap_or_default());
            assert_eq!(rebuilt, input.trim());
        }
    }
}
