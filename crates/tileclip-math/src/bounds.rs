use glam::DVec3;

/// Axis-aligned bounding box in double precision world space.
///
/// Invariant: min.x <= max.x, min.y <= max.y, min.z <= max.z.
/// The constructor enforces this by swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    /// Create a box from two corners. Automatically sorts
    /// components so that min <= max on every axis.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bbox.include_point(p);
        }
        Some(bbox)
    }

    /// Grows the box so that it contains `p`.
    pub fn include_point(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// The 8 corners, ordered by (x, y, z) bits of the corner index.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Returns true if `other` lies entirely inside or on the boundary of self.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Returns true if this box overlaps with other
    /// (including touching edges/faces).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Midpoint of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size along each axis.
    pub fn extents(&self) -> DVec3 {
        (self.max - self.min) * 0.5
    }

    /// Returns true if the box has zero volume
    /// (degenerate on at least one axis).
    pub fn is_degenerate(&self) -> bool {
        self.min.cmpeq(self.max).any()
    }
}

/// Bounding sphere in double precision world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: DVec3,
    pub radius: f64,
}

impl BoundingSphere {
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Returns true if the two spheres overlap or touch.
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }
}

/// Box + sphere pair describing a tile or a clipping volume.
///
/// Tiles receive their bounding volume when loaded and it never changes for
/// a given tile instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingVolume {
    pub bbox: BoundingBox,
    pub sphere: BoundingSphere,
}

impl BoundingVolume {
    /// Derives the sphere circumscribing `bbox`.
    pub fn from_box(bbox: BoundingBox) -> Self {
        let sphere = BoundingSphere::new(bbox.center(), bbox.extents().length());
        Self { bbox, sphere }
    }

    /// Shorthand for `from_box(BoundingBox::new(a, b))`.
    pub fn from_corners(a: DVec3, b: DVec3) -> Self {
        Self::from_box(BoundingBox::new(a, b))
    }

    /// Overlap test that rejects through the spheres before testing the boxes.
    pub fn overlaps(&self, other: &BoundingVolume) -> bool {
        self.sphere.intersects(&other.sphere) && self.bbox.intersects(&other.bbox)
    }
}
