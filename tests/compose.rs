use backdrop_wasm::scenes::{compose, ComposeOptions, Section};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn primary_count_matches_request() {
    for seed in [0, 1, 99] {
        for section in Section::ALL {
            for count in [0, 1, 7, 100] {
                let mut rng = StdRng::seed_from_u64(seed);
                let scene = compose(section, &ComposeOptions::with_count(count), &mut rng);
                assert_eq!(scene.primary().len(), count as usize, "{section} seed {seed}");
            }
        }
    }
}

#[test]
fn defaults_follow_the_section() {
    let mut rng = StdRng::seed_from_u64(8);
    for section in Section::ALL {
        let scene = compose(section, &ComposeOptions::default(), &mut rng);
        assert_eq!(scene.primary().len(), section.default_count(), "{section}");
        assert_eq!(
            scene.starfield().map_or(0, |s| s.len()),
            section.default_stars(),
            "{section}"
        );
    }
    assert_eq!(Section::Background.default_count(), 55);
    assert_eq!(Section::Skills.default_count(), 80);
    assert_eq!(Section::Footer.default_count(), 0);
}

#[test]
fn non_positive_counts_give_empty_sets() {
    for section in Section::ALL {
        for count in [0, -1, -500] {
            let options = ComposeOptions {
                count: Some(count),
                star_count: Some(count),
            };
            let scene = compose(section, &options, &mut StdRng::seed_from_u64(4));
            assert!(scene.primary().is_empty(), "{section}");
            assert!(scene.starfield().map_or(true, |s| s.is_empty()), "{section}");
        }
    }
}

#[test]
fn fixtures_survive_an_empty_primary_set() {
    for section in [Section::Background, Section::About, Section::Skills, Section::Experience] {
        let scene = compose(section, &ComposeOptions::with_count(0), &mut StdRng::seed_from_u64(2));
        assert!(!scene.fixtures().is_empty(), "{section}");
        assert!(!scene.lights().is_empty(), "{section}");
    }
}

#[test]
fn links_point_at_fixtures() {
    for section in Section::ALL {
        let scene = compose(section, &ComposeOptions::with_count(13), &mut StdRng::seed_from_u64(6));
        for link in scene.links() {
            for id in [link.from, link.to] {
                assert!(id.0 >= scene.primary().len(), "{section} link into primaries");
                assert!(scene.object(id).is_some(), "{section} dangling link");
            }
        }
    }
}

#[test]
fn experience_network_is_fully_connected_between_layers() {
    let scene = compose(Section::Experience, &ComposeOptions::default(), &mut StdRng::seed_from_u64(1));
    // Two timeline links plus 4x6 and 6x4 network links.
    assert_eq!(scene.links().len(), 2 + 24 + 24);
}

#[test]
fn same_seed_same_scene() {
    for section in Section::ALL {
        let a = compose(section, &ComposeOptions::default(), &mut StdRng::seed_from_u64(77));
        let b = compose(section, &ComposeOptions::default(), &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b, "{section}");
    }
}

#[test]
fn opacities_and_sizes_are_sane() {
    let mut rng = StdRng::seed_from_u64(13);
    for section in Section::ALL {
        let scene = compose(section, &ComposeOptions::default(), &mut rng);
        for object in scene.objects() {
            assert!((0.0..=1.0).contains(&object.base.opacity), "{section} {object:?}");
            assert!(object.size > 0.0, "{section} {object:?}");
            assert!((0.0..=1.0).contains(&object.emissive), "{section} {object:?}");
        }
    }
}
