//! # Image Sources
//!
//! The `img` tag names its picture with a `src` attribute. An [`ImageLoader`]
//! turns that name into pixels, in two steps so oversized images can be
//! rejected before they are decoded:
//!
//! 1. [`ImageLoader::dimensions`] reads just the header
//! 2. [`ImageLoader::load`] decodes the whole image
//!
//! [`FileImageLoader`] reads from the filesystem (any format the `image`
//! crate recognises). [`MemoryImageLoader`] serves images that were built in
//! memory, which is handy for generated graphics and tests.

use std::collections::HashMap;

use image::DynamicImage;

use crate::error::{EscmarkError, Result};

/// Resolves `img` sources to pixels
pub trait ImageLoader {
    /// Width and height in pixels, without decoding pixel data
    fn dimensions(&self, src: &str) -> Result<(u32, u32)>;

    /// Fully decoded image
    fn load(&self, src: &str) -> Result<DynamicImage>;
}

impl<L: ImageLoader + ?Sized> ImageLoader for &L {
    fn dimensions(&self, src: &str) -> Result<(u32, u32)> {
        (**self).dimensions(src)
    }

    fn load(&self, src: &str) -> Result<DynamicImage> {
        (**self).load(src)
    }
}

/// Loads `src` as a path relative to the working directory
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn dimensions(&self, src: &str) -> Result<(u32, u32)> {
        image::image_dimensions(src).map_err(|source| EscmarkError::Image {
            src: src.to_string(),
            source,
        })
    }

    fn load(&self, src: &str) -> Result<DynamicImage> {
        image::open(src).map_err(|source| EscmarkError::Image {
            src: src.to_string(),
            source,
        })
    }
}

/// Images registered by name
#[derive(Debug, Clone, Default)]
pub struct MemoryImageLoader {
    images: HashMap<String, DynamicImage>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, src: impl Into<String>, image: DynamicImage) {
        self.images.insert(src.into(), image);
    }

    pub fn with(mut self, src: impl Into<String>, image: DynamicImage) -> Self {
        self.insert(src, image);
        self
    }

    fn get(&self, src: &str) -> Result<&DynamicImage> {
        self.images.get(src).ok_or_else(|| EscmarkError::Image {
            src: src.to_string(),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no image registered under this name",
            )),
        })
    }
}

impl ImageLoader for MemoryImageLoader {
    fn dimensions(&self, src: &str) -> Result<(u32, u32)> {
        let image = self.get(src)?;
        Ok((image.width(), image.height()))
    }

    fn load(&self, src: &str) -> Result<DynamicImage> {
        self.get(src).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    #[test]
    fn test_memory_loader() {
        let loader = MemoryImageLoader::new().with(
            "logo",
            DynamicImage::ImageLuma8(GrayImage::new(12, 3)),
        );
        assert_eq!(loader.dimensions("logo").unwrap(), (12, 3));
        assert_eq!(loader.load("logo").unwrap().width(), 12);
    }

    #[test]
    fn test_memory_loader_missing() {
        let loader = MemoryImageLoader::new();
        let err = loader.dimensions("nope").unwrap_err();
        assert!(matches!(err, EscmarkError::Image { ref src, .. } if src == "nope"));
    }

    #[test]
    fn test_file_loader_missing_file() {
        let err = FileImageLoader
            .dimensions("/nonexistent/escmark/logo.png")
            .unwrap_err();
        assert!(matches!(err, EscmarkError::Image { .. }), "{:?}", err);
    }

    #[test]
    fn test_file_loader_reads_png() {
        let path = std::env::temp_dir().join(format!(
            "escmark-loader-{}.png",
            std::process::id()
        ));
        GrayImage::new(20, 7).save(&path).unwrap();

        let src = path.to_str().unwrap();
        assert_eq!(FileImageLoader.dimensions(src).unwrap(), (20, 7));
        assert_eq!(FileImageLoader.load(src).unwrap().height(), 7);

        std::fs::remove_file(&path).unwrap();
    }
}
