use std::fmt;

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a tag from the configured prefix and the bumped version
    pub fn for_version(prefix: &str, version: &str) -> Self {
        Tag {
            name: format!("{}{}", prefix, version),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_without_prefix() {
        assert_eq!(Tag::for_version("", "2024.06-0").name, "2024.06-0");
    }

    #[test]
    fn test_tag_with_prefix() {
        let tag = Tag::for_version("v", "2024.06-1");
        assert_eq!(tag.to_string(), "v2024.06-1");
    }
}
