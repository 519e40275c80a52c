use approx::assert_abs_diff_eq;
use spring_chain::*;

#[test]
fn fresh_chain_has_n_bodies_and_n_plus_one_springs() {
    for n in [1usize, 2, 5, 150] {
        let chain = Chain::new(ChainConfig::default().with_body_count(n)).expect("valid config");
        assert_eq!(chain.body_count(), n);
        assert_eq!(chain.spring_count(), n + 1);

        let springs = chain.springs();
        assert_eq!(
            springs[0].endpoints(),
            (Endpoint::Anchor(AnchorSide::Left), Endpoint::Body(0))
        );
        for i in 1..n {
            assert_eq!(
                springs[i].endpoints(),
                (Endpoint::Body(i - 1), Endpoint::Body(i))
            );
        }
        assert_eq!(
            springs[n].endpoints(),
            (Endpoint::Body(n - 1), Endpoint::Anchor(AnchorSide::Right))
        );
    }
}

#[test]
fn initial_layout_is_pretensioned_along_x() {
    let chain = Chain::new(ChainConfig::default()).expect("valid config");
    let spacing = chain.config().spacing;

    assert_eq!(chain.left_anchor().kind(), AnchorKind::Kinematic);
    assert_eq!(chain.right_anchor().kind(), AnchorKind::Static);
    assert_eq!(chain.left_anchor().position(), Vec2::ZERO);
    assert_abs_diff_eq!(
        chain.right_anchor().position().x,
        151.0 * spacing,
        epsilon = 1e-3
    );

    for (i, body) in chain.bodies().iter().enumerate() {
        assert_eq!(body.index(), i);
        assert_eq!(body.velocity(), Vec2::ZERO);
        assert_eq!(body.mass(), 0.05);
        assert_abs_diff_eq!(body.position().x, (i + 1) as f32 * spacing, epsilon = 1e-3);
        assert_eq!(body.position().y, 0.0);
    }

    for i in 0..chain.spring_count() {
        let stretch = chain.spring_stretch(i).expect("spring exists");
        assert_abs_diff_eq!(stretch, 0.02, epsilon = 1e-3);
    }
}

#[test]
fn energy_of_fresh_chain_is_all_potential() {
    let config = ChainConfig::default()
        .with_body_count(10)
        .with_spacing(0.5)
        .with_rest_length(0.25)
        .with_stiffness(100.0);
    let chain = Chain::new(config).expect("valid config");

    assert_eq!(chain.kinetic_energy(), 0.0);
    // 11 springs, each stretched by 0.25: ½·100·0.0625.
    assert_abs_diff_eq!(chain.potential_energy(), 11.0 * 3.125, epsilon = 1e-3);
    assert_abs_diff_eq!(chain.total_energy(), chain.potential_energy());
}

#[test]
fn out_of_range_indices_are_errors() {
    let chain = Chain::new(ChainConfig::default().with_body_count(3)).expect("valid config");

    assert!(chain.body(2).is_ok());
    assert_eq!(
        chain.body(3).unwrap_err(),
        SpringChainError::BodyOutOfBounds { index: 3, count: 3 }
    );
    assert!(chain.spring(3).is_ok());
    assert_eq!(
        chain.spring(4).unwrap_err(),
        SpringChainError::SpringOutOfBounds { index: 4, count: 4 }
    );
    assert!(chain.spring_stretch(9).is_err());
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        (
            ChainConfig::default().with_body_count(0),
            SpringChainError::InvalidBodyCount(0),
        ),
        (
            ChainConfig::default().with_body_mass(-1.0),
            SpringChainError::InvalidMass(-1.0),
        ),
        (
            ChainConfig::default().with_stiffness(0.0),
            SpringChainError::InvalidStiffness(0.0),
        ),
        (
            ChainConfig::default().with_spring_damping(-0.5),
            SpringChainError::InvalidDamping(-0.5),
        ),
        (
            ChainConfig::default().with_rest_length(-0.1),
            SpringChainError::InvalidRestLength(-0.1),
        ),
        (
            ChainConfig::default().with_spacing(0.0),
            SpringChainError::InvalidSpacing(0.0),
        ),
    ];

    for (config, expected) in cases {
        assert_eq!(Chain::new(config).unwrap_err(), expected);
    }
}

#[test]
fn custom_positions_must_match_body_count() {
    let config = ChainConfig::default().with_body_count(2);
    let err = Chain::with_positions(config, &[Vec2::ZERO]).unwrap_err();
    assert_eq!(err, SpringChainError::InvalidBodyCount(1));

    let chain = Chain::with_positions(config, &[Vec2::new(0.3, 0.1), Vec2::new(0.5, -0.1)])
        .expect("matching count");
    assert_eq!(chain.body_positions()[1], Vec2::new(0.5, -0.1));
    assert_eq!(chain.right_anchor().position(), config.wall_position());
}

#[test]
fn error_messages_name_the_problem() {
    let err = SpringChainError::BodyOutOfBounds { index: 7, count: 3 };
    assert_eq!(err.to_string(), "body index 7 out of bounds (count: 3)");
    assert!(SpringChainError::InvalidMass(0.0)
        .to_string()
        .contains("mass"));
}

#[test]
fn endpoint_accessors_report_out_of_range_bodies() {
    let mut chain = Chain::new(ChainConfig::default().with_body_count(3)).expect("valid config");
    chain.set_left_anchor_position(Vec2::new(0.0, 0.5));

    assert_eq!(
        chain.endpoint_position(Endpoint::Body(7)).unwrap_err(),
        SpringChainError::BodyOutOfBounds { index: 7, count: 3 }
    );
    assert_eq!(
        chain.endpoint_velocity(Endpoint::Body(3)).unwrap_err(),
        SpringChainError::BodyOutOfBounds { index: 3, count: 3 }
    );

    assert_eq!(
        chain.endpoint_position(Endpoint::Anchor(AnchorSide::Left)),
        Ok(Vec2::new(0.0, 0.5))
    );
    assert_eq!(
        chain.endpoint_velocity(Endpoint::Anchor(AnchorSide::Right)),
        Ok(Vec2::ZERO)
    );
    assert_eq!(
        chain.endpoint_position(Endpoint::Body(2)),
        Ok(chain.bodies()[2].position())
    );

    assert!(chain.spring_direction(4).is_err());
    let (axis, length) = chain.spring_direction(1).expect("spring exists");
    assert_eq!(axis, Vec2::X);
    assert_abs_diff_eq!(length, chain.config().spacing, epsilon = 1e-5);
}

#[test]
fn spring_endpoints_map_to_body_indices() {
    let chain = Chain::new(ChainConfig::default().with_body_count(4)).expect("valid config");
    let indices: Vec<(Option<usize>, Option<usize>)> = chain
        .springs()
        .iter()
        .map(|s| {
            let (a, b) = s.endpoints();
            (a.body_index(), b.body_index())
        })
        .collect();

    assert_eq!(indices[0], (None, Some(0)));
    assert_eq!(indices[2], (Some(1), Some(2)));
    assert_eq!(indices[4], (Some(3), None));

    for body in chain.bodies() {
        assert_abs_diff_eq!(body.inverse_mass() * body.mass(), 1.0, epsilon = 1e-6);
    }
}
