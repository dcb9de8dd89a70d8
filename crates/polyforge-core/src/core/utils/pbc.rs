use super::rng::RandomSource;
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoxError {
    #[error("number density must be positive (got {0})")]
    NonPositiveDensity(f64),
    #[error("aspect ratio for axis {axis} must be positive (got {value})")]
    NonPositiveAspect { axis: char, value: f64 },
}

/// Axis-aligned periodic simulation box, centered at the origin.
///
/// Sized so that `xprd * yprd * zprd == n_beads / rho_star`, with per-axis
/// extents in the requested aspect ratios. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox {
    pub xlo: f64,
    pub xhi: f64,
    pub ylo: f64,
    pub yhi: f64,
    pub zlo: f64,
    pub zhi: f64,
    pub xprd: f64,
    pub yprd: f64,
    pub zprd: f64,
}

impl SimulationBox {
    /// Derives box dimensions from a bead count and a target number density.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError`] if `rho_star` or any aspect ratio is not
    /// strictly positive.
    pub fn from_density(
        n_beads: usize,
        rho_star: f64,
        aspects: (f64, f64, f64),
    ) -> Result<Self, BoxError> {
        if rho_star <= 0.0 {
            return Err(BoxError::NonPositiveDensity(rho_star));
        }
        let (ax, ay, az) = aspects;
        for (axis, value) in [('x', ax), ('y', ay), ('z', az)] {
            if value <= 0.0 {
                return Err(BoxError::NonPositiveAspect { axis, value });
            }
        }

        let volume = n_beads as f64 / rho_star;
        let side = (volume / (ax * ay * az)).cbrt();
        let (xprd, yprd, zprd) = (ax * side, ay * side, az * side);
        Ok(Self {
            xlo: -xprd / 2.0,
            xhi: xprd / 2.0,
            ylo: -yprd / 2.0,
            yhi: yprd / 2.0,
            zlo: -zprd / 2.0,
            zhi: zprd / 2.0,
            xprd,
            yprd,
            zprd,
        })
    }

    pub fn volume(&self) -> f64 {
        self.xprd * self.yprd * self.zprd
    }

    /// Box bounds as `[xlo, ylo, zlo, xhi, yhi, zhi]`.
    pub fn bounds(&self) -> [f64; 6] {
        [self.xlo, self.ylo, self.zlo, self.xhi, self.yhi, self.zhi]
    }

    /// Single-step periodic wrap: shifts each coordinate by at most one
    /// period, back into `[lo, hi)`.
    ///
    /// Correct only while the out-of-range distance stays below one period
    /// (bond length much smaller than the box), which holds for chain
    /// growth. Intentionally not a general modulo wrap; downstream files
    /// depend on this exact behavior.
    pub fn wrap(&self, p: Point3<f64>) -> Point3<f64> {
        let (mut x, mut y, mut z) = (p.x, p.y, p.z);
        if x < self.xlo {
            x += self.xprd;
        } else if x >= self.xhi {
            x -= self.xprd;
        }
        if y < self.ylo {
            y += self.yprd;
        } else if y >= self.yhi {
            y -= self.yprd;
        }
        if z < self.zlo {
            z += self.zprd;
        } else if z >= self.zhi {
            z -= self.zprd;
        }
        Point3::new(x, y, z)
    }

    /// Draws a uniformly distributed point inside the box.
    pub fn random_point(&self, rng: &mut impl RandomSource) -> Point3<f64> {
        Point3::new(
            self.xlo + rng.next_uniform() * self.xprd,
            self.ylo + rng.next_uniform() * self.yprd,
            self.zlo + rng.next_uniform() * self.zprd,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::rng::ParkMiller;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn volume_matches_bead_count_over_density() {
        for (n, rho, aspects) in [
            (6, 3.0, (1.0, 1.0, 1.0)),
            (10_000, 0.85, (1.0, 1.0, 1.0)),
            (500, 1.2, (2.0, 1.0, 0.5)),
        ] {
            let cell = SimulationBox::from_density(n, rho, aspects).unwrap();
            assert!(f64_approx_equal(cell.volume(), n as f64 / rho));
        }
    }

    #[test]
    fn box_is_centered_at_origin() {
        let cell = SimulationBox::from_density(100, 0.5, (1.0, 2.0, 3.0)).unwrap();
        assert!(f64_approx_equal(cell.xlo, -cell.xhi));
        assert!(f64_approx_equal(cell.ylo, -cell.yhi));
        assert!(f64_approx_equal(cell.zlo, -cell.zhi));
        assert!(f64_approx_equal(cell.xhi - cell.xlo, cell.xprd));
    }

    #[test]
    fn aspect_ratios_scale_the_extents() {
        let cell = SimulationBox::from_density(1000, 1.0, (2.0, 1.0, 0.5)).unwrap();
        assert!(f64_approx_equal(cell.xprd / cell.yprd, 2.0));
        assert!(f64_approx_equal(cell.zprd / cell.yprd, 0.5));
    }

    #[test]
    fn non_positive_density_is_rejected() {
        assert_eq!(
            SimulationBox::from_density(10, 0.0, (1.0, 1.0, 1.0)),
            Err(BoxError::NonPositiveDensity(0.0))
        );
        assert!(SimulationBox::from_density(10, -1.0, (1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn non_positive_aspect_is_rejected() {
        let err = SimulationBox::from_density(10, 1.0, (1.0, -2.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            BoxError::NonPositiveAspect {
                axis: 'y',
                value: -2.0
            }
        );
    }

    #[test]
    fn wrap_is_identity_inside_the_box() {
        let cell = SimulationBox::from_density(1000, 1.0, (1.0, 1.0, 1.0)).unwrap();
        let p = Point3::new(0.1, -2.3, 4.9);
        assert_eq!(cell.wrap(p), p);
    }

    #[test]
    fn wrap_shifts_coordinates_below_lo_by_one_period() {
        let cell = SimulationBox::from_density(1000, 1.0, (1.0, 1.0, 1.0)).unwrap();
        let p = Point3::new(cell.xlo - 0.3, 0.0, 0.0);
        let wrapped = cell.wrap(p);
        assert!(f64_approx_equal(wrapped.x, cell.xlo - 0.3 + cell.xprd));
        assert_eq!(wrapped.y, 0.0);
    }

    #[test]
    fn wrap_shifts_coordinates_at_or_above_hi_by_one_period() {
        let cell = SimulationBox::from_density(1000, 1.0, (1.0, 1.0, 1.0)).unwrap();
        let at_hi = cell.wrap(Point3::new(0.0, cell.yhi, 0.0));
        assert!(f64_approx_equal(at_hi.y, cell.ylo));
        let above = cell.wrap(Point3::new(0.0, 0.0, cell.zhi + 0.7));
        assert!(f64_approx_equal(above.z, cell.zhi + 0.7 - cell.zprd));
    }

    #[test]
    fn random_points_fall_inside_the_box() {
        let cell = SimulationBox::from_density(100, 2.0, (1.0, 1.0, 1.0)).unwrap();
        let mut rng = ParkMiller::new(12345);
        for _ in 0..1000 {
            let p = cell.random_point(&mut rng);
            assert!(p.x >= cell.xlo && p.x < cell.xhi);
            assert!(p.y >= cell.ylo && p.y < cell.yhi);
            assert!(p.z >= cell.zlo && p.z < cell.zhi);
        }
    }
}
