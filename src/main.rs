// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! Renders the color picker gradients described by the settings file to PNGs, with the selection
//! marker stamped in, so the kernel's output can be eyeballed without a device.

use std::path::{Path, PathBuf};
use std::{fs, io, process};

use debug_print::debug_println;
use lazy_static::lazy_static;

use picker_kernel::geometry::{Point, Rect, Size};
use picker_kernel::gradient;
use picker_kernel::util::image::PixelBuffer;

use crate::settings::Settings;

mod settings;

lazy_static! {
    pub static ref CONFIG_PATH: Option<PathBuf> = directories::ProjectDirs::from("dev.zkxs", "", "picker-kernel")
        .map(|dirs| dirs.config_dir().join("config.toml"));
}

fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // generate new settings file when it doesn't exist
            let settings = Settings::default();
            if let Err(e) = settings.save() {
                show_warning(format!("Could not write default settings.\n\n{e}"));
            }
            settings
        }
        Err(e) => {
            show_warning(format!("Error loading settings file {:?}. Using default settings.\n\n{e}", CONFIG_PATH.as_deref()));
            Settings::default()
        }
    };
    debug_println!("loaded settings from {:?}: {:?}", CONFIG_PATH.as_deref(), settings);

    if let Err(e) = render(&settings) {
        show_warning(format!("Error rendering previews into \"{}\".\n\n{e}", settings.output_dir().display()));
        process::exit(1);
    }
}

fn show_warning(text: String) {
    eprintln!("warning: {text}");
}

/// write the square and the bar for the configured color
fn render(settings: &Settings) -> io::Result<()> {
    let output_dir = settings.output_dir();
    fs::create_dir_all(output_dir)?;

    let color = settings.pinned_base_color();
    debug_println!("selected color {:?} = {:08X}", color, color.to_argb());

    let mut square = gradient::synthesize_saturation_brightness_square(color.hue);
    let marker = gradient::square_marker_position(color, pixel_centers(&square));
    stamp_marker(&mut square, marker, Size::new(settings.marker_radius, settings.marker_radius), settings.marker_color);
    save(&square, &output_dir.join("saturation_brightness.png"))?;

    let component = settings.bar_component;
    let mut bar = gradient::synthesize_hue_bar(component, color, settings.bar_width, settings.bar_height);
    let marker = gradient::bar_marker_position(component, color, pixel_centers(&bar));
    // a full height line through the bar
    let half_extent = Size::new(settings.marker_radius / 2.0, bar.height as f32);
    stamp_marker(&mut bar, marker, half_extent, settings.marker_color);
    save(&bar, &output_dir.join(format!("{}_bar.png", component.name())))?;

    Ok(())
}

/// The rect running through the first and last pixel centers. Mapping a color into this puts the
/// marker for a full-range component on the last pixel rather than just past it.
fn pixel_centers(buffer: &PixelBuffer) -> Rect {
    let last = Size::new(buffer.width.saturating_sub(1) as f32, buffer.height.saturating_sub(1) as f32);
    Rect::from_origin_size(Point::new(0.5, 0.5), last)
}

/// Fill a marker box of `half_extent` around `center`, clipped to the image.
fn stamp_marker(buffer: &mut PixelBuffer, center: Point, half_extent: Size, color: u32) {
    let marker = Rect::from_origin_size(center, Size::ZERO).inflate(half_extent.width, half_extent.height);
    debug_println!("marker at {:?}, covering {:?}", center, marker);
    buffer.fill_rect(marker, color);
}

fn save(buffer: &PixelBuffer, path: &Path) -> io::Result<()> {
    buffer.save_png(path)?;
    debug_println!("wrote {}x{} image to {}", buffer.width, buffer.height, path.display());
    Ok(())
}
