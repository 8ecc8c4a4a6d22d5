use super::*;
use proptest::prelude::*;

#[test]
fn test_is_red() {
    assert!(is_red(1));
    assert!(is_red(3));
    assert!(is_red(32));
    assert!(is_red(36));
    assert!(!is_red(2));
    assert!(!is_red(35));
    assert!(!is_red(0));
}

#[test]
fn test_red_pocket_count() {
    let reds = (0..WHEEL_POCKETS).filter(|p| is_red(*p)).count();
    assert_eq!(reds, 18);
    assert_eq!(WHEEL_POCKETS as usize - reds, 19);
}

#[test]
fn test_theoretical_edge() {
    assert_eq!(THEORETICAL_EDGE, -1.0 / 37.0);
    let from_odds = (18.0 - 19.0) / 37.0;
    assert!((THEORETICAL_EDGE - from_odds).abs() < 1e-15);
}

#[test]
fn test_strategy_names_roundtrip() {
    for kind in StrategyKind::ALL {
        assert_eq!(kind.name().parse::<StrategyKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn test_strategy_aliases() {
    assert_eq!("flat".parse::<StrategyKind>(), Ok(StrategyKind::Flat));
    assert_eq!("FIXED".parse::<StrategyKind>(), Ok(StrategyKind::Flat));
    assert_eq!(" martingale ".parse::<StrategyKind>(), Ok(StrategyKind::Martingale));
    assert_eq!("d'alembert".parse::<StrategyKind>(), Ok(StrategyKind::DAlembert));
    assert_eq!("dalembert".parse::<StrategyKind>(), Ok(StrategyKind::DAlembert));
    assert_eq!("random".parse::<StrategyKind>(), Ok(StrategyKind::RandomStake));
    assert_eq!("random_stake".parse::<StrategyKind>(), Ok(StrategyKind::RandomStake));
}

#[test]
fn test_unknown_strategy_rejected() {
    assert_eq!(
        "labouchere".parse::<StrategyKind>(),
        Err(ConfigError::UnknownStrategy("labouchere".to_string()))
    );
    assert!(matches!(
        strategy_description(""),
        Err(ConfigError::UnknownStrategy(_))
    ));
}

#[test]
fn test_descriptions_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for kind in StrategyKind::ALL {
        let text = strategy_description(kind.name()).expect("known strategy");
        assert!(!text.is_empty());
        assert!(seen.insert(text), "duplicate description for {kind}");
    }
}

#[test]
fn test_request_rejects_zero_rounds() {
    assert_eq!(
        SimulationRequest::parse("flat", 0, 10),
        Err(ConfigError::ZeroRounds)
    );
}

#[test]
fn test_request_rejects_zero_sessions() {
    assert_eq!(
        SimulationRequest::parse("flat", 10, 0),
        Err(ConfigError::ZeroSessions)
    );
}

#[test]
fn test_request_rejects_base_stake_out_of_range() {
    assert!(matches!(
        SimulationRequest::new(StrategyKind::Flat, 1, 1, 0),
        Err(ConfigError::BaseStakeOutOfRange { got: 0, .. })
    ));
    assert!(matches!(
        SimulationRequest::new(StrategyKind::Flat, 1, 1, MAX_STAKE + 1),
        Err(ConfigError::BaseStakeOutOfRange { .. })
    ));
    assert!(SimulationRequest::new(StrategyKind::Flat, 1, 1, MAX_STAKE).is_ok());
}

#[test]
fn test_request_defaults_base_stake() {
    let request = SimulationRequest::parse("Fibonacci", 10, 5).expect("valid request");
    assert_eq!(request.strategy, StrategyKind::Fibonacci);
    assert_eq!(request.base_stake, DEFAULT_BASE_STAKE);
}

#[test]
fn test_stop_policy_labels() {
    assert!(StopPolicy::StopOnFirstWin.stops_on_win());
    assert!(!StopPolicy::PlayAllRounds.stops_on_win());
    assert_eq!(StopPolicy::ALL[0].label(), "stop_on_first_win");
    assert_eq!(StopPolicy::ALL[1].label(), "play_all_rounds");
}

#[test]
fn test_report_json_field_names() {
    let result = SessionResult {
        session_index: 3,
        rounds_played: 2,
        final_balance: -1,
        total_staked: 3,
    };
    let json = serde_json::to_value(result).expect("serialize");
    assert_eq!(json["session_index"], 3);
    assert_eq!(json["final_balance"], -1);
    assert_eq!(
        serde_json::to_value(StrategyKind::DAlembert).expect("serialize"),
        "d_alembert"
    );
}

proptest! {
    #[test]
    fn prop_valid_requests_accepted(
        rounds in 1u32..10_000,
        sessions in 1u32..10_000,
        base in MIN_STAKE..=MAX_STAKE,
    ) {
        for kind in StrategyKind::ALL {
            prop_assert!(SimulationRequest::new(kind, rounds, sessions, base).is_ok());
        }
    }
}
