// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: the static biographical data rendered by each section.
//!
//! The default content ships embedded in the binary (`assets/content/`),
//! together with the images and CV it references; a custom TOML file with the
//! same layout can replace it at startup.

use crate::error::{Error, Result};
use crate::gallery::GalleryItem;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const EMBEDDED_FILE: &str = "portfolio.toml";

/// Highest skill level; levels are percentages.
pub const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Content {
    pub about: About,
    #[serde(default)]
    pub education: Vec<Education>,
    pub cv: Option<Cv>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub project_views: Vec<GalleryItem>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    /// Directory that relative image references are resolved against.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct About {
    pub name: String,
    #[serde(default)]
    pub info: Vec<InfoEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

/// Downloadable curriculum vitae.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cv {
    pub title: String,
    pub description: String,
    pub file: String,
    /// File name suggested by the save dialog.
    pub download_name: Option<String>,
}

impl Cv {
    /// Name offered when saving: `download_name`, else the file's own name.
    pub fn suggested_name(&self) -> String {
        self.download_name.clone().unwrap_or_else(|| {
            Path::new(&self.file)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "cv.pdf".to_string())
        })
    }
}

/// Where the bytes behind a file reference (image, CV) come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// File on disk.
    File(PathBuf),
    /// Asset bundled with the embedded portfolio.
    Embedded {
        name: String,
        data: Cow<'static, [u8]>,
    },
    /// Neither bundled nor on disk; keeps the path that was tried.
    Missing(PathBuf),
}

impl Resource {
    pub fn is_available(&self) -> bool {
        !matches!(self, Resource::Missing(_))
    }

    /// Human readable origin, used in captions and error messages.
    pub fn label(&self) -> String {
        match self {
            Resource::File(path) | Resource::Missing(path) => path.display().to_string(),
            Resource::Embedded { name, .. } => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Level in percent, capped at [`MAX_SKILL_LEVEL`].
    pub fn level(&self) -> u8 {
        self.level.min(MAX_SKILL_LEVEL)
    }

    /// Level as a fraction in `0.0..=1.0`, for progress bars.
    pub fn level_fraction(&self) -> f32 {
        f32::from(self.level()) / f32::from(MAX_SKILL_LEVEL)
    }
}

impl Content {
    /// Items of the project screenshot gallery, in display order.
    pub fn gallery_items(&self) -> Vec<GalleryItem> {
        self.project_views.clone()
    }

    /// Resolves a file reference to a filesystem path.
    ///
    /// Absolute references are returned as is; relative ones are joined to the
    /// directory the content was loaded from.
    pub fn resolve_path(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Locates the bytes behind a file reference.
    ///
    /// Embedded content looks in the bundled assets first and falls back to
    /// the working directory; content loaded from a file only uses the disk.
    pub fn resource(&self, reference: &str) -> Resource {
        let path = self.resolve_path(reference);
        if self.base_dir.is_none() && path.is_relative() {
            let name = embedded_name(reference);
            if let Some(file) = Asset::get(&name) {
                return Resource::Embedded {
                    name,
                    data: file.data,
                };
            }
        }
        if path.is_file() {
            Resource::File(path)
        } else {
            Resource::Missing(path)
        }
    }

    fn validate(&self) -> Result<()> {
        let mut view_ids = HashSet::new();
        for item in &self.project_views {
            if !view_ids.insert(item.id) {
                return Err(Error::Content(format!(
                    "duplicate project view id {}",
                    item.id
                )));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id) {
                return Err(Error::Content(format!("duplicate project id {}", project.id)));
            }
        }

        for skill in self.skill_categories.iter().flat_map(|c| &c.skills) {
            if skill.level > MAX_SKILL_LEVEL {
                tracing::warn!(skill = %skill.name, level = skill.level, "skill level above 100, capping");
            }
        }
        Ok(())
    }
}

/// Parses portfolio content from a TOML string.
pub fn parse(source: &str) -> Result<Content> {
    let content: Content =
        toml::from_str(source).map_err(|err| Error::Content(err.to_string()))?;
    content.validate()?;
    Ok(content)
}

/// Loads the content bundled with the application.
pub fn load_embedded() -> Result<Content> {
    let file = Asset::get(EMBEDDED_FILE)
        .ok_or_else(|| Error::Content(format!("missing embedded {EMBEDDED_FILE}")))?;
    let source = String::from_utf8_lossy(file.data.as_ref());
    parse(&source)
}

fn embedded_name(reference: &str) -> String {
    let normalized = reference.replace('\\', "/");
    normalized.trim_start_matches("./").to_string()
}

/// Writes the bytes of `resource` to `destination`, returning the byte count.
pub fn export(resource: &Resource, destination: &Path) -> Result<u64> {
    let written = match resource {
        Resource::File(path) => fs::copy(path, destination)?,
        Resource::Embedded { data, .. } => {
            fs::write(destination, data)?;
            data.len() as u64
        }
        Resource::Missing(path) => {
            return Err(Error::Io(format!("{} not found", path.display())));
        }
    };
    tracing::info!(
        source = %resource.label(),
        destination = %destination.display(),
        bytes = written,
        "resource exported"
    );
    Ok(written)
}

/// Loads content from a TOML file; relative image references resolve
/// against the file's directory.
pub fn load_from_path(path: &Path) -> Result<Content> {
    let source = fs::read_to_string(path)?;
    let mut content = parse(&source)?;
    content.base_dir = path.parent().map(Path::to_path_buf);
    Ok(content)
}
