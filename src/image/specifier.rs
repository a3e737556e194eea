//! Image references

/// Registry, image name and tag of a container image
///
/// Rendered as `registry/image:tag`. No part is validated; a malformed
/// specifier renders a malformed reference and the runtime rejects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpecifier {
    /// Registry prefix (may be empty)
    pub registry: String,
    /// Image name
    pub image: String,
    /// Tag
    pub tag: String,
}

impl ImageSpecifier {
    /// Create a new image specifier
    pub fn new(registry: &str, image: &str, tag: &str) -> Self {
        Self {
            registry: registry.to_string(),
            image: image.to_string(),
            tag: tag.to_string(),
        }
    }

    /// Same registry and image under another tag
    pub fn with_tag(&self, tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for ImageSpecifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}:{}", self.registry, self.image, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_reference() {
        let spec = ImageSpecifier::new("quay.io", "coreos/etcd", "v3.5.0");
        assert_eq!(spec.to_string(), "quay.io/coreos/etcd:v3.5.0");
    }

    #[test]
    fn test_render_with_port_in_registry() {
        let spec = ImageSpecifier::new("localhost:5000", "app", "latest");
        assert_eq!(spec.to_string(), "localhost:5000/app:latest");
    }

    #[test]
    fn test_empty_registry_keeps_leading_slash() {
        let spec = ImageSpecifier::new("", "nginx", "1.25");
        assert_eq!(spec.to_string(), "/nginx:1.25");
    }

    #[test]
    fn test_empty_image_is_not_rejected() {
        let spec = ImageSpecifier::new("registry.example.com", "", "stable");
        assert_eq!(spec.to_string(), "registry.example.com/:stable");
    }

    #[test]
    fn test_with_tag() {
        let pull = ImageSpecifier::new("registry.example.com", "api", "rc1");
        let push = pull.with_tag("stable");

        assert_eq!(push.registry, "registry.example.com");
        assert_eq!(push.image, "api");
        assert_eq!(push.to_string(), "registry.example.com/api:stable");
        assert_eq!(pull.tag, "rc1");
    }
}
