use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::{DomainError, DomainResult};
use crate::domains::arena::ports::SceneSink;
use crate::domains::arena::types::{Circle, Scene};

pub const DEFAULT_OUTPUT_DIR: &str = "test_svgs";
pub const DEFAULT_FILE_PREFIX: &str = "arena_";

/// Render a scene as SVG markup: the arena circle first, then one circle per
/// obstacle in list order, numbers fixed to two decimals.
pub fn render_svg(scene: &Scene) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        scene.width, scene.height
    );
    write_circle(&mut out, &scene.arena);
    for obstacle in &scene.obstacles {
        write_circle(&mut out, obstacle);
    }
    out.push_str("</svg>\n");
    out
}

fn write_circle(out: &mut String, circle: &Circle) {
    let _ = writeln!(
        out,
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" />"#,
        circle.center_x, circle.center_y, circle.radius
    );
}

/// Writes each scene to `<directory>/<prefix><identifier>.svg`, creating the
/// directory on first use.
pub struct SvgFileSink {
    directory: PathBuf,
    file_prefix: String,
}

impl SvgFileSink {
    pub fn new(directory: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self { directory: directory.into(), file_prefix: file_prefix.into() }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.directory.join(format!("{}{}.svg", self.file_prefix, identifier))
    }
}

impl Default for SvgFileSink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_FILE_PREFIX)
    }
}

impl SceneSink for SvgFileSink {
    fn write_scene(&mut self, identifier: &str, scene: &Scene) -> DomainResult<()> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory)
                .map_err(|e| DomainError::InfrastructureError(format!("{}", e)))?;
        }
        let path = self.path_for(identifier);
        fs::write(&path, render_svg(scene)).map_err(|e| DomainError::Sink {
            identifier: identifier.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}
