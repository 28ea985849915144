//! PixelSet - Foreground pixels of a binary image
//!
//! A pixel set is a set of grid points together with the domain it was
//! taken from. The domain is kept separately from the bounding box of the
//! points so that a connected component still knows the frame of the image
//! it came from.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::point::Point;

/// Set of foreground pixels inside a domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSet {
    domain: Domain,
    points: BTreeSet<Point>,
}

impl PixelSet {
    /// Create an empty pixel set over `domain`
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            points: BTreeSet::new(),
        }
    }

    /// Create a pixel set whose domain is the bounding box of `points`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `points` is empty, since there is
    /// no domain to attach the set to.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let points: BTreeSet<Point> = points.into_iter().collect();
        let domain = Domain::bounding(points.iter().copied())
            .ok_or_else(|| Error::InvalidInput("no points to build a pixel set".to_string()))?;
        Ok(Self { domain, points })
    }

    /// Threshold a raster into a pixel set
    ///
    /// `data` holds `width * height` samples in row-major order; the sample
    /// at `data[y * width + x]` becomes pixel `(x, y)`. Samples inside the
    /// inclusive `range` are foreground.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the raster is empty or `data` does
    /// not hold exactly `width * height` samples.
    pub fn from_raster(
        width: u32,
        height: u32,
        data: &[u8],
        range: RangeInclusive<u8>,
    ) -> Result<Self> {
        let domain = Domain::from_size(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidInput(format!(
                "raster of {}x{} needs {} samples, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }

        let range = &range;
        let points = data
            .chunks_exact(width as usize)
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter().enumerate().filter_map(move |(x, v)| {
                    range
                        .contains(v)
                        .then(|| Point::new(x as i32, y as i32))
                })
            })
            .collect();

        Ok(Self { domain, points })
    }

    /// Domain the set lives in
    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Add a pixel
    ///
    /// Returns `true` if the pixel was not already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointOutsideDomain`] if `p` is outside the domain.
    pub fn insert(&mut self, p: Point) -> Result<bool> {
        if !self.domain.contains(p) {
            return Err(Error::PointOutsideDomain { x: p.x, y: p.y });
        }
        Ok(self.points.insert(p))
    }

    /// Check if a pixel is foreground
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Number of foreground pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no foreground pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the pixels in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Bounding box of the foreground pixels, `None` if the set is empty
    pub fn bounding_box(&self) -> Option<Domain> {
        Domain::bounding(self.iter())
    }

    /// Pixel set over the same domain holding the given points that are
    /// also in this set
    ///
    /// Points not in this set are ignored.
    pub fn subset<I>(&self, points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self {
            domain: self.domain,
            points: points
                .into_iter()
                .filter(|p| self.points.contains(p))
                .collect(),
        }
    }
}

impl Extend<Point> for PixelSet {
    /// Points outside the domain grow the domain.
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            if !self.domain.contains(p) {
                self.domain = self.domain.union(&Domain::from_point(p));
            }
            self.points.insert(p);
        }
    }
}
