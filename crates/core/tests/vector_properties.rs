//! Property checks for `PVector` over many seeded random vectors
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sketchbook_core::math::{PI, TWO_PI};
use sketchbook_core::{PVector, VectorError};

const SAMPLES: usize = 500;

fn random_vector(rng: &mut StdRng) -> PVector {
    let scale = rng.random_range(0.1..100.0);
    PVector::random_3d_with(rng) * scale
}

#[test]
fn test_normalize_and_set_mag() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        assert_relative_eq!(v.normalized().mag(), 1.0, epsilon = 1e-12);

        let target = rng.random_range(0.5..20.0);
        let scaled = v.with_mag(target);
        assert_relative_eq!(scaled.mag(), target, epsilon = 1e-9);
        // Direction survives rescaling
        assert_relative_eq!(PVector::angle_between(v, scaled), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_limit_never_grows() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let max = rng.random_range(1.0..50.0);
        let limited = v.limited(max);
        assert!(limited.mag() <= max + 1e-9);
        if v.mag() <= max {
            assert_eq!(limited, v);
        }
    }
}

#[test]
fn test_cross_is_orthogonal() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let c = a.cross(b);
        let tolerance = 1e-9 * a.mag() * b.mag() * (a.mag() + b.mag());
        assert!(c.dot(a).abs() <= tolerance);
        assert!(c.dot(b).abs() <= tolerance);
        // Anti-commutative
        assert_eq!(b.cross(a), -c);
    }
}

#[test]
fn test_angle_between_range_and_symmetry() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let angle = PVector::angle_between(a, b);
        assert!((0.0..=PI).contains(&angle), "{angle}");
        assert_relative_eq!(angle, PVector::angle_between(b, a), epsilon = 1e-12);
        assert_relative_eq!(PVector::angle_between(a, a * 3.0), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_rotation_keeps_length() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..SAMPLES {
        let v = PVector::new_2d(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
        let theta = rng.random_range(-TWO_PI..TWO_PI);
        let r = v.rotated(theta);
        assert_relative_eq!(r.mag(), v.mag(), epsilon = 1e-9);
        assert_eq!(r.z, 0.0);
        let back = r.rotated(-theta);
        assert_relative_eq!(back.x, v.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, v.y, epsilon = 1e-9);
    }
}

#[test]
fn test_from_angle_heading_round_trip() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..SAMPLES {
        let theta = rng.random_range(-PI + 1e-6..PI);
        let v = PVector::from_angle(theta);
        assert_relative_eq!(v.mag(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.heading(), theta, epsilon = 1e-9);
    }
}

#[test]
fn test_lerp_endpoints_and_midpoint() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_eq!(a.lerp(b, 0.0), a);
        let end = a.lerp(b, 1.0);
        assert_relative_eq!(end.dist(b), 0.0, epsilon = 1e-9);
        let mid = a.lerp(b, 0.5);
        assert_relative_eq!(mid.dist(a), mid.dist(b), epsilon = 1e-9);
    }
}

#[test]
fn test_arithmetic_identities() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let n = rng.random_range(0.5..4.0);

        assert_eq!(PVector::sum(a, b), a + b);
        assert_eq!(PVector::difference(a, b), a - b);
        let round_trip = PVector::quotient(PVector::product(a, n), n);
        assert_relative_eq!(round_trip.dist(a), 0.0, epsilon = 1e-9);
        assert_relative_eq!(PVector::distance(a, b), (a - b).mag(), epsilon = 1e-12);
        assert_relative_eq!(a.dot(b), b.dot(a), epsilon = 1e-9);
    }
}

#[test]
fn test_additive_identity_and_commutativity() {
    let mut rng = StdRng::seed_from_u64(37);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        assert_eq!(a + PVector::zero(), a);
        assert_eq!(PVector::ZERO + a, a);
        assert_eq!(a + b, b + a);
        assert_eq!(PVector::sum(a, b), PVector::sum(b, a));
    }
}

#[test]
fn test_in_place_matches_static_forms() {
    let mut rng = StdRng::seed_from_u64(41);
    for _ in 0..SAMPLES {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let n = rng.random_range(0.5..4.0);

        let mut added = a;
        added += b;
        assert_eq!(added, PVector::sum(a, b));

        let mut subtracted = a;
        subtracted -= b;
        assert_eq!(subtracted, PVector::difference(a, b));

        let mut scaled = a;
        scaled *= n;
        assert_eq!(scaled, PVector::product(a, n));

        let mut divided = a;
        divided /= n;
        assert_eq!(divided, PVector::quotient(a, n));

        let mut added_xyz = a;
        added_xyz.add_xyz(b.x, b.y, b.z);
        assert_eq!(added_xyz, PVector::sum(a, b));

        let mut subtracted_xyz = a;
        subtracted_xyz.sub_xyz(b.x, b.y, b.z);
        assert_eq!(subtracted_xyz, PVector::difference(a, b));
    }
}

#[test]
fn test_magnitude_consistency() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        assert_relative_eq!(
            v.mag_sq(),
            v.x * v.x + v.y * v.y + v.z * v.z,
            max_relative = 1e-12
        );
        assert_relative_eq!(v.mag(), v.mag_sq().sqrt(), max_relative = 1e-12);
    }
}

#[test]
fn test_slice_round_trip() {
    let mut rng = StdRng::seed_from_u64(47);
    for _ in 0..SAMPLES {
        let v = random_vector(&mut rng);
        let array = v.to_array();
        assert_eq!(PVector::from_slice(&array), Ok(v));
        assert_eq!(PVector::try_from(array.to_vec()), Ok(v));

        let short = [v.x, v.y];
        assert_eq!(
            PVector::from_slice(&short),
            Err(VectorError::InvalidLength {
                expected: 3,
                actual: 2
            })
        );
        let long = [v.x, v.y, v.z, rng.random_range(-1.0..1.0)];
        assert_eq!(
            PVector::from_slice(&long),
            Err(VectorError::InvalidLength {
                expected: 3,
                actual: 4
            })
        );
    }
}
