// Host-side tests for the wave-grid noise.

use folio_core::SimplexNoise;

#[test]
fn output_stays_in_unit_range() {
    let noise = SimplexNoise::new(7);
    for i in 0..200 {
        for j in 0..50 {
            let v = noise.sample(i as f32 * 0.137 - 10.0, j as f32 * 0.29 - 4.0);
            assert!((-1.0..=1.0).contains(&v), "sample {v} out of range");
        }
    }
}

#[test]
fn same_seed_same_field() {
    let (a, b) = (SimplexNoise::new(42), SimplexNoise::new(42));
    for i in 0..100 {
        let (x, y) = (i as f32 * 0.31, i as f32 * 0.17);
        assert_eq!(a.sample(x, y), b.sample(x, y));
    }
}

#[test]
fn field_is_continuous() {
    let noise = SimplexNoise::new(1);
    let a = noise.sample(3.0, 4.0);
    let b = noise.sample(3.0001, 4.0);
    assert!((a - b).abs() < 0.01);
}
