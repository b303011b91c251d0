//! Release-notes document rendering.
//!
//! The document is plain Markdown: a title, one section per populated
//! category in [`Category::DISPLAY_ORDER`], an "Other Changes" section, and a
//! footer whose structure never changes between runs.

use std::fmt::Write;

use crate::aggregator::CategoryBuckets;
use crate::config::FooterConfig;
use crate::domain::Category;

/// Line rendered when no commit made it into any bucket.
pub const FALLBACK_LINE: &str = "Version maintenance and minor updates";

/// Renders release notes for one version.
#[derive(Debug, Clone)]
pub struct Renderer {
    footer: FooterConfig,
}

impl Renderer {
    pub fn new(footer: FooterConfig) -> Self {
        Renderer { footer }
    }

    pub fn render(&self, version: &str, buckets: &CategoryBuckets) -> String {
        let mut notes = format!("## 🚀 Release v{}\n\n", version);

        for category in Category::DISPLAY_ORDER {
            let bucket = buckets.bucket(category);
            if bucket.is_empty() {
                continue;
            }
            let _ = writeln!(notes, "### {}", category.heading());
            for description in bucket.descriptions() {
                let _ = writeln!(notes, "- **{}**", description);
            }
            notes.push('\n');
        }

        let other = buckets.bucket(Category::Other);
        if !other.is_empty() {
            let _ = writeln!(notes, "### {}", Category::Other.heading());
            for description in other.descriptions() {
                let _ = writeln!(notes, "- {}", description);
            }
            notes.push('\n');
        }

        if buckets.is_empty() {
            let _ = write!(notes, "### 📝 Changes\n- {}\n\n", FALLBACK_LINE);
        }

        notes.push_str(&self.render_footer(version));
        notes
    }

    /// Docker, architecture, installation and attribution sections.
    pub fn render_footer(&self, version: &str) -> String {
        let image = &self.footer.docker_image;
        let mut footer = String::new();

        let _ = write!(
            footer,
            "### 📦 Docker Images\n\
             - `docker pull {image}:v{version}`\n\
             - `docker pull {image}:latest`\n\n"
        );

        footer.push_str("### 🏗️ Multi-Architecture Support\n");
        for platform in &self.footer.platforms {
            let _ = writeln!(footer, "- ✅ {}", platform);
        }
        footer.push('\n');

        let _ = write!(
            footer,
            "### 📥 Installation\n\
             ```bash\n\
             # Pull latest version\n\
             docker pull {image}:v{version}\n\
             \n\
             # Or use latest tag\n\
             docker pull {image}:latest\n\
             ```\n\n"
        );

        let _ = write!(
            footer,
            "For full setup instructions, see: {}\n\n---\n{}",
            self.footer.docs_url, self.footer.attribution
        );

        footer
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(FooterConfig::default())
    }
}
