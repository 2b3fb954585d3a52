// SPDX-License-Identifier: MPL-2.0
//! Image handles for content resources.

use crate::content::Resource;
use iced::widget::image::Handle;

/// Builds a handle for a resolved resource; `None` when it is missing.
pub fn handle(resource: &Resource) -> Option<Handle> {
    match resource {
        Resource::File(path) => Some(Handle::from_path(path.clone())),
        Resource::Embedded { data, .. } => Some(Handle::from_bytes(data.clone().into_owned())),
        Resource::Missing(path) => {
            tracing::warn!(path = %path.display(), "image not found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::path::PathBuf;

    #[test]
    fn only_missing_resources_lack_a_handle() {
        assert!(handle(&Resource::Missing(PathBuf::from("absent.png"))).is_none());
        assert!(handle(&Resource::File(PathBuf::from("present.png"))).is_some());
        let embedded = Resource::Embedded {
            name: "projectImages/Blog.png".into(),
            data: Cow::Borrowed(&b"\x89PNG"[..]),
        };
        assert!(handle(&embedded).is_some());
    }
}
