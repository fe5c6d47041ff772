//! Cities and the random layout generator.

use rand::Rng;

/// Side length of the square that [`generate_cities`] samples from.
pub const DEFAULT_EXTENT: f64 = 100.0;

/// A point on the plane that the salesman must visit.
///
/// Cities are immutable; a city's index in the city list is what tours
/// refer to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Euclidean distance between two cities. Symmetric; zero iff the
/// coordinates coincide.
pub fn distance(a: &City, b: &City) -> f64 {
    a.distance_to(b)
}

/// Generates `n` cities with ids `0..n` and coordinates uniform in
/// `[0, DEFAULT_EXTENT)`.
pub fn generate_cities<R: Rng>(n: usize, rng: &mut R) -> Vec<City> {
    (0..n)
        .map(|id| {
            City::new(
                id,
                rng.random_range(0.0..DEFAULT_EXTENT),
                rng.random_range(0.0..DEFAULT_EXTENT),
            )
        })
        .collect()
}
