use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::DVec2;
use image::{Rgba, RgbaImage};
use racer_core::world::{WorldGeometry, CELLS_PER_METRE};
use tracing::{debug, info};

// Mask pixels of exactly this colour are off the track
const OFF_TRACK_PIXEL: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Surface {
    Paved,
    Loose,
}

// Which parts of the world are paved, sampled ten times per metre.
pub struct TrackSurfaceMap {
    width: usize,
    height: usize,
    // row-major, true = paved
    paved: Vec<bool>,
}

impl TrackSurfaceMap {
    pub fn from_fn(width: usize, height: usize, is_paved: impl Fn(usize, usize) -> bool) -> Self {
        let mut paved = Vec::with_capacity(width * height);
        for row in 0..height {
            for column in 0..width {
                paved.push(is_paved(column, row));
            }
        }
        TrackSurfaceMap {
            width,
            height,
            paved,
        }
    }

    pub fn from_mask(mask: &RgbaImage) -> Self {
        let map = Self::from_fn(mask.width() as usize, mask.height() as usize, |x, y| {
            *mask.get_pixel(x as u32, y as u32) != OFF_TRACK_PIXEL
        });
        debug!(
            "surface map has {} of {} cells paved",
            map.paved.iter().filter(|&&cell| cell).count(),
            map.paved.len()
        );
        map
    }

    // Reads the track mask image and checks that it covers the whole world.
    pub fn load(path: impl AsRef<Path>, world: &WorldGeometry) -> Result<Self> {
        let path = path.as_ref();
        info!("loading track mask from {}", path.display());
        let mask = image::open(path)
            .with_context(|| format!("could not read track mask {}", path.display()))?
            .to_rgba8();

        let expected = world.grid_size();
        let actual = (mask.width() as usize, mask.height() as usize);
        if actual != expected {
            bail!(
                "track mask {} is {}x{} but the world needs {}x{}",
                path.display(),
                actual.0,
                actual.1,
                expected.0,
                expected.1
            );
        }

        Ok(Self::from_mask(&mask))
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    // Positions outside the grid mean something upstream let the car (or an
    // obstacle) leave the world, so this panics rather than clamping
    fn cell_index(&self, position: DVec2) -> usize {
        let column = (position.x * CELLS_PER_METRE).trunc();
        let row = (position.y * CELLS_PER_METRE).trunc();
        assert!(
            column >= 0.0
                && row >= 0.0
                && (column as usize) < self.width
                && (row as usize) < self.height,
            "surface lookup at ({}, {}) is outside the {}x{} grid",
            position.x,
            position.y,
            self.width,
            self.height
        );
        row as usize * self.width + column as usize
    }

    pub fn classify(&self, position: DVec2) -> Surface {
        if self.paved[self.cell_index(position)] {
            Surface::Paved
        } else {
            Surface::Loose
        }
    }

    pub fn is_paved(&self, position: DVec2) -> bool {
        self.classify(position) == Surface::Paved
    }
}
