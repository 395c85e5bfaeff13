// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! In-memory images and PNG import/export

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType};

use crate::color::{pack_argb, unpack_argb};
use crate::geometry::Rect;

/// opaque black, the initial value of every pixel
const BLACK: u32 = 0xFF000000;

/// in-memory image representation
///
/// Every gradient is generated into a fresh buffer that the caller owns outright. Nothing in this
/// crate keeps a reference to a buffer after returning it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// image width
    pub width: u32,
    /// image height
    pub height: u32,
    /// ARGB pixel color data, row-major, top row first
    pub pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Allocate a buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        }
    }

    /// the pixel at column `x` of row `y`, or `None` if that's outside the image
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels.get(y as usize * self.width as usize + x as usize).copied()
        } else {
            None
        }
    }

    #[inline]
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        self.rows().nth(y as usize)
    }

    /// Iterate rows top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // a zero width image has no pixels, so any nonzero chunk size yields nothing
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Iterate rows top to bottom.
    #[inline]
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u32]> {
        self.pixels.chunks_exact_mut(self.width.max(1) as usize)
    }

    /// Fill every pixel that `rect` touches with `color`. The rect is clipped to the image first;
    /// rects with no area inside the image fill nothing.
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let bounds = Rect::new(0.0, 0.0, self.width as f32, self.height as f32);
        let clipped = rect.intersect(bounds);
        if clipped.is_empty() {
            return;
        }

        // float -> int `as` casts saturate, so these can't go negative
        let x0 = clipped.left().floor() as usize;
        let y0 = clipped.top().floor() as usize;
        let x1 = (clipped.right().ceil() as usize).min(self.width as usize);
        let y1 = (clipped.bottom().ceil() as usize).min(self.height as usize);

        for row in self.rows_mut().skip(y0).take(y1.saturating_sub(y0)) {
            if let Some(span) = row.get_mut(x0..x1) {
                span.fill(color);
            }
        }
    }

    /// Convert to the RGBA byte order PNG encoders and most texture uploads expect.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&pixel| unpack_argb(pixel)).collect()
    }

    /// write the image as an 8-bit RGBA PNG
    pub fn save_png<T>(&self, path: T) -> io::Result<()>
    where
        T: AsRef<Path>,
    {
        let file = File::create(path)?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), self.width, self.height);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.to_rgba8())?;
        writer.finish()?;
        Ok(())
    }
}

/// load an 8-bit RGBA png file into an in-memory image
pub fn load_png<T>(path: T) -> io::Result<PixelBuffer>
where
    T: AsRef<Path>,
{
    let file = File::open(path)?;
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    if info.color_type != ColorType::Rgba || info.bit_depth != BitDepth::Eight {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "PNG was in {:?} {:?} format. Only {:?} {:?} format is supported. Please re-save your PNG in the required format.",
                info.bit_depth, info.color_type, BitDepth::Eight, ColorType::Rgba
            ),
        ));
    }

    // The PNG data is laid out as RGBA, one byte per channel. Repack each pixel into ARGB.
    let pixel_count = info.width as usize * info.height as usize;
    let pixels: Vec<u32> = buf[..info.buffer_size()]
        .chunks_exact(4)
        .take(pixel_count)
        .map(|rgba| pack_argb(rgba[0], rgba[1], rgba[2], rgba[3]))
        .collect();

    if pixels.len() != pixel_count {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "PNG frame was shorter than its declared size"));
    }

    Ok(PixelBuffer {
        width: info.width,
        height: info.height,
        pixels,
    })
}
