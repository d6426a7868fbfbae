use bevy_scrolling_terrain::synth::{fractal_sum, octave_power};
use bevy_scrolling_terrain::{
    Grid, HeightfieldSynthesizer, ModifierConfig, MotionInput, NoiseSeed, NoiseSource, ScrollOffset,
};

fn sample_points() -> impl Iterator<Item = (f64, f64)> {
    (0..16).map(|i| (i as f64 * 0.37 - 2.0, i as f64 * 0.81 + 0.5))
}

#[test]
fn identical_seeds_give_identical_fields() {
    let a = NoiseSource::new(NoiseSeed::from("1234abc"));
    let b = NoiseSource::new(NoiseSeed::from("1234abc"));
    for (x, z) in sample_points() {
        assert_eq!(a.sample(x, z), b.sample(x, z));
    }
}

#[test]
fn different_seeds_give_different_fields() {
    let a = NoiseSource::new(NoiseSeed::Numeric(1));
    let b = NoiseSource::new(NoiseSeed::Numeric(2));
    let differing = sample_points()
        .filter(|&(x, z)| a.sample(x, z) != b.sample(x, z))
        .count();
    assert!(differing > 8, "only {differing} of 16 samples differ");
}

#[test]
fn reseed_matches_fresh_source() {
    let mut source = NoiseSource::new(NoiseSeed::from("before"));
    source.reseed(NoiseSeed::from("after"));
    let fresh = NoiseSource::new(NoiseSeed::from("after"));
    assert_eq!(source.seed(), fresh.seed());
    for (x, z) in sample_points() {
        assert_eq!(source.sample(x, z), fresh.sample(x, z));
    }
}

#[test]
fn samples_stay_in_half_unit_range() {
    let source = NoiseSource::new(NoiseSeed::default());
    for i in 0..400 {
        let v = source.sample(i as f64 * 0.173, i as f64 * -0.291);
        assert!((-0.5..=0.5).contains(&v), "sample {v} out of range");
    }
}

#[test]
fn field_is_not_constant() {
    let source = NoiseSource::new(NoiseSeed::default());
    let first = source.sample(0.3, 0.9);
    assert!(sample_points().any(|(x, z)| source.sample(x, z) != first));
}

#[test]
fn fractal_sum_matches_manual_octaves() {
    let source = NoiseSource::new(NoiseSeed::from("octaves"));
    let (x, z) = (12.5, -3.25);
    let manual: f32 = (1..=4)
        .map(|i| {
            let p = (0.1 * i as f64).powi(i);
            source.sample(x * p, z * p)
        })
        .sum();
    assert_eq!(fractal_sum(&source, x, z, 4), manual);
    assert_eq!(fractal_sum(&source, x, z, 0), 0.0);
}

#[test]
fn octave_power_dips_then_grows() {
    assert!(octave_power(4) < octave_power(1));
    assert!(octave_power(4) < octave_power(6));
    assert!((octave_power(10) - 1.0).abs() < 1e-5);
}

#[test]
fn height_applies_modifiers_then_scale() {
    let source = NoiseSource::new(NoiseSeed::from("scaled"));
    let modifiers = ModifierConfig::default();
    let synth = HeightfieldSynthesizer {
        noise: &source,
        modifiers: &modifiers,
        octaves: 3,
        scale: 10.0,
    };
    let (x, z) = (4.0_f32, 7.0_f32);
    let raw = fractal_sum(&source, x as f64, z as f64, 3);
    let shaped = if raw < 0.0 { raw / 8.0 } else { raw };
    assert_eq!(synth.height_at(x, z, ScrollOffset::default()), shaped * 10.0);
}

#[test]
fn offset_shifts_sample_coordinates() {
    let source = NoiseSource::new(NoiseSeed::from("scroll"));
    let modifiers = ModifierConfig::none();
    let synth = HeightfieldSynthesizer {
        noise: &source,
        modifiers: &modifiers,
        octaves: 2,
        scale: 1.0,
    };
    let offset = ScrollOffset { x: 3.0, z: -1.0 };
    assert_eq!(
        synth.height_at(2.0, 2.0, offset),
        synth.height_at(5.0, 1.0, ScrollOffset::default())
    );
}

#[test]
fn synthesize_writes_every_vertex() {
    let source = NoiseSource::new(NoiseSeed::from("fill"));
    let modifiers = ModifierConfig::none();
    let synth = HeightfieldSynthesizer {
        noise: &source,
        modifiers: &modifiers,
        octaves: 4,
        scale: 10.0,
    };
    let mut grid = Grid::new(16.0, 8.0, 1.0);
    synth.synthesize(&mut grid, ScrollOffset::default());
    for v in grid.vertices() {
        assert_eq!(v[1], synth.height_at(v[0], v[2], ScrollOffset::default()));
    }
    assert!(grid.vertices().iter().any(|v| v[1] != 0.0));
}

#[test]
fn scroll_offset_advances_with_input() {
    let mut offset = ScrollOffset::default();
    offset.advance(20.0, MotionInput::new(1, -1), 0.5, 64.0, 32.0, 0.25);
    assert_eq!(offset, ScrollOffset { x: 160.0, z: -80.0 });

    offset.advance(20.0, MotionInput::IDLE, 0.5, 64.0, 32.0, 0.25);
    assert_eq!(offset, ScrollOffset { x: 160.0, z: -80.0 });
}

#[test]
fn scroll_speed_ignores_input_magnitude() {
    let mut unit = ScrollOffset::default();
    let mut large = ScrollOffset::default();
    unit.advance(20.0, MotionInput::new(1, -1), 0.5, 64.0, 32.0, 0.25);
    large.advance(20.0, MotionInput::new(100, -100), 0.5, 64.0, 32.0, 0.25);
    assert_eq!(unit, large);
}

#[test]
fn distant_offsets_keep_fine_steps() {
    // Past 2^24 an f32 offset can no longer move by a fraction of a unit.
    let mut offset = ScrollOffset { x: 1.0e8, z: -1.0e8 };
    offset.advance(1.0, MotionInput::new(1, 1), 0.01, 1.0, 1.0, 1.0);
    assert!(offset.x > 1.0e8);
    assert!(offset.z > -1.0e8);

    let source = NoiseSource::new(NoiseSeed::from("far away"));
    let modifiers = ModifierConfig::none();
    let synth = HeightfieldSynthesizer {
        noise: &source,
        modifiers: &modifiers,
        octaves: 1,
        scale: 1.0,
    };
    let far = ScrollOffset { x: 3.0e7, z: 0.0 };
    assert_ne!(synth.height_at(0.0, 0.0, far), synth.height_at(0.5, 0.0, far));
}
