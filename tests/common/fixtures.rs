//! Files written into a temporary workspace for each test.

use std::path::{Path, PathBuf};

use palette_mask::{PixelGrid, Rgba};
use redmask::rendering::codec;
use tempfile::TempDir;

pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
pub const RED: Rgba = Rgba::opaque(255, 0, 0);
pub const STRAY: Rgba = Rgba::opaque(12, 34, 56);

/// Three-color GIMP palette: Black, White, Red.
pub const SAMPLE_GPL: &str = "\
GIMP Palette
Name: Sample
Columns: 3
#
0 0 0 Black
255 255 255 White
255 0 0 Red
";

/// Temporary directory holding the files of one test.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, text).expect("write fixture");
        path
    }

    pub fn write_image(&self, name: &str, image: &PixelGrid) -> PathBuf {
        let path = self.path(name);
        codec::encode(image, &path).expect("encode fixture");
        path
    }

    pub fn sample_gpl(&self) -> PathBuf {
        self.write_text("sample.gpl", SAMPLE_GPL)
    }

    /// 2x2 sprite using every sample color plus `extra` in the corner.
    pub fn sprite(&self, extra: Rgba) -> PathBuf {
        self.write_image("sprite.png", &sprite_grid(extra))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sprite_grid(extra: Rgba) -> PixelGrid {
    PixelGrid::new(2, 2, vec![BLACK, WHITE, RED, extra]).expect("2x2 grid")
}

pub fn read_image(path: &Path) -> PixelGrid {
    codec::decode(path).expect("decode output")
}
