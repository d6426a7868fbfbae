use bevy_scrolling_terrain::modifier::{
    self, dampen_underwater_height, ease_in, ease_in_out_cubic, ease_in_out_quad, logarithmic,
    longer_beaches, more_water,
};
use bevy_scrolling_terrain::{Modifier, ModifierConfig};

fn only(modifier: Modifier) -> ModifierConfig {
    ModifierConfig::none().with(modifier, true)
}

#[test]
fn all_disabled_is_identity() {
    let config = ModifierConfig::none();
    for h in [-3.5, -0.2, -0.05, 0.0, 0.001, 0.4999, 0.5, 1.0, 7.25] {
        assert_eq!(modifier::apply(h, &config), h);
    }
}

#[test]
fn default_config_only_dampens() {
    let config = ModifierConfig::default();
    for m in Modifier::ALL {
        assert_eq!(config.enabled(m), m == Modifier::DampenUnderwaterHeight, "{}", m.name());
    }
}

#[test]
fn ease_in_branches() {
    // At 0.5 the upper branch applies: -1 + (4 - 1) * 0.5.
    assert_eq!(ease_in(0.5), 0.5);
    assert!((ease_in(0.4999) - 0.4).abs() < 1e-3);
    assert!((ease_in(0.0) + 0.1).abs() < 1e-7);
}

#[test]
fn ease_in_out_quad_branches() {
    assert_eq!(ease_in_out_quad(0.25), -0.125);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
}

#[test]
fn ease_in_out_cubic_branches() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(0.25), 0.0625);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
}

#[test]
fn logarithmic_collapses_at_or_below_one() {
    assert_eq!(logarithmic(0.75), 0.0);
    assert_eq!(logarithmic(1.0), 0.0);
    assert_eq!(logarithmic(-2.0), 0.0);
    assert!((logarithmic(10.0) - 9.0).abs() < 1e-6);
}

#[test]
fn sqrt_pair_only_touches_positive_heights() {
    let isqrt = only(Modifier::InverseSqrt);
    let sqrt = only(Modifier::Sqrt);
    assert_eq!(modifier::apply(4.0, &isqrt), 2.0);
    assert_eq!(modifier::apply(4.0, &sqrt), 6.0);
    assert_eq!(modifier::apply(-4.0, &isqrt), -4.0);
    assert_eq!(modifier::apply(-4.0, &sqrt), -4.0);
}

#[test]
fn floor_is_exact() {
    assert_eq!(modifier::apply(3.7, &only(Modifier::Floor)), 3.0);
    assert_eq!(modifier::apply(-0.2, &only(Modifier::Floor)), -1.0);
}

#[test]
fn longer_beaches_bands() {
    // (-0.1, 0.001) is raised to the beach floor.
    assert_eq!(longer_beaches(-0.05, 0.1, 0.001, 3.0), 0.001);
    assert_eq!(longer_beaches(0.0, 0.1, 0.001, 3.0), 0.001);
    // (-0.2, -0.1] is divided.
    assert_eq!(longer_beaches(-0.15, 0.1, 0.001, 3.0), -0.15 / 3.0);
    assert_eq!(longer_beaches(-0.1, 0.1, 0.001, 3.0), -0.1 / 3.0);
    // Outside both bands nothing changes.
    assert_eq!(longer_beaches(-0.5, 0.1, 0.001, 3.0), -0.5);
    assert_eq!(longer_beaches(0.3, 0.1, 0.001, 3.0), 0.3);
}

#[test]
fn dampen_underwater_height_divides_below_zero() {
    assert_eq!(dampen_underwater_height(-8.0, 8.0), -1.0);
    assert_eq!(dampen_underwater_height(2.0, 8.0), 2.0);
    assert_eq!(modifier::apply(-8.0, &ModifierConfig::default()), -1.0);
}

#[test]
fn more_water_lowers_shallows() {
    assert_eq!(more_water(0.0, 0.05), -0.05);
    assert_eq!(more_water(0.05, 0.05), 0.05);
}

#[test]
fn stages_run_in_fixed_order() {
    // sqrt (stage 6) runs before floor (stage 7): floor(2.25 + 1.5) = 3.
    let config = ModifierConfig::none()
        .with(Modifier::Floor, true)
        .with(Modifier::Sqrt, true);
    assert_eq!(modifier::apply(2.25, &config), 3.0);

    // dampen (stage 9) runs before more_water (stage 10).
    let config = ModifierConfig::none()
        .with(Modifier::MoreWater, true)
        .with(Modifier::DampenUnderwaterHeight, true);
    assert!((modifier::apply(-0.8, &config) - (-0.1 - 0.05)).abs() < 1e-6);
}

#[test]
fn parameters_are_honoured() {
    let mut config = only(Modifier::DampenUnderwaterHeight);
    config.dampen_factor = 2.0;
    assert_eq!(modifier::apply(-3.0, &config), -1.5);

    let mut config = only(Modifier::MoreWater);
    config.water_threshold = 0.5;
    assert_eq!(modifier::apply(0.25, &config), -0.25);
}

#[test]
fn toggle_by_name() {
    let mut config = ModifierConfig::none();
    let m = Modifier::from_name("longer_beaches").expect("known modifier");
    config.set(m, true);
    assert!(config.longer_beaches);
    config.set(m, false);
    assert!(!config.longer_beaches);
}
