use crate::config::{CloudOrbitConfig, SceneConfig};
use crate::types::{wrap_degrees, SimTime};

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..crate::constants::TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, crate::constants::TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-3);
}

#[test]
fn test_wrap_degrees_stays_in_range() {
    for angle in [-720.5_f32, -360.0, -0.1, 0.0, 359.9, 360.0, 1234.5] {
        let wrapped = wrap_degrees(angle);
        assert!(
            (0.0..360.0).contains(&wrapped),
            "{angle} wrapped to {wrapped}"
        );
    }
    assert_eq!(wrap_degrees(0.0), 0.0);
    assert!((wrap_degrees(370.0) - 10.0).abs() < 1e-4);
}

#[test]
fn test_cloud_config_spawnable_checks() {
    let config = CloudOrbitConfig::default();
    assert!(config.is_spawnable());

    let no_templates = CloudOrbitConfig {
        templates: Vec::new(),
        ..CloudOrbitConfig::default()
    };
    assert!(!no_templates.is_spawnable());

    let zero_density = CloudOrbitConfig {
        density: 0,
        ..CloudOrbitConfig::default()
    };
    assert!(!zero_density.is_spawnable());
}

#[test]
fn test_scene_config_roundtrips_through_json() {
    let config = SceneConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: SceneConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.clouds.density, config.clouds.density);
    assert_eq!(back.tag.labels, config.tag.labels);
}

#[test]
fn test_scene_config_accepts_partial_json() {
    // Hosts typically supply only the fields they override.
    let config: SceneConfig =
        serde_json::from_str(r#"{"seed": 7, "clouds": {"density": 3}}"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.clouds.density, 3);
    // Untouched fields keep their defaults.
    assert_eq!(config.clouds.radius, crate::constants::CLOUD_RADIUS);
}
