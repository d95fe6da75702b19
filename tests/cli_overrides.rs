use clap::Parser;
use colony_lib::cli::{Mode, Overrides};
use colony_lib::model::AppConfig;

#[derive(Parser, Debug)]
struct TestArgs {
    #[arg(long, value_enum, default_value = "interactive")]
    mode: Mode,

    #[command(flatten)]
    overrides: Overrides,
}

fn parse(args: &[&str]) -> Result<TestArgs, clap::Error> {
    TestArgs::try_parse_from(std::iter::once("colony").chain(args.iter().copied()))
}

#[test]
fn test_overrides_replace_config_values() {
    let args = parse(&[
        "--mode",
        "headless",
        "--rule",
        "ibr",
        "--weighting",
        "inverse-euclidean",
        "--preset",
        "glider",
        "--payoff",
        "1,0,0,7/3",
        "--beta",
        "1/2",
        "--seed",
        "9",
        "--rows",
        "30",
    ])
    .unwrap();
    assert_eq!(args.mode, Mode::Headless);

    let mut config = AppConfig::default();
    args.overrides.apply(&mut config).unwrap();

    assert_eq!(config.dynamics.update_rule, "Irrational Best Response");
    assert_eq!(config.dynamics.weight_function, "Inverse Euclidean");
    assert_eq!(config.grid.preset, "Glider");
    assert_eq!(config.dynamics.payoff, [1.0, 0.0, 0.0, 7.0 / 3.0]);
    assert_eq!(config.dynamics.beta, 0.5);
    assert_eq!(config.grid.seed, Some(9));
    assert_eq!(config.grid.rows, 30);
    assert_eq!(config.grid.columns, 20);
}

#[test]
fn test_unknown_rule_is_rejected_at_parse() {
    let err = parse(&["--rule", "majority"]).unwrap_err();
    assert!(err.to_string().contains("Unsupported update rule"));
}

#[test]
fn test_bad_fraction_is_rejected_at_parse() {
    assert!(parse(&["--beta", "1/0"]).is_err());
    assert!(parse(&["--payoff", "1,0,0"]).is_err());
}

#[test]
fn test_out_of_range_override_fails_validation() {
    let args = parse(&["--silence", "3/2"]).unwrap();
    let mut config = AppConfig::default();
    assert!(args.overrides.apply(&mut config).is_err());

    let args = parse(&["--threshold", "9"]).unwrap();
    let mut config = AppConfig::default();
    assert!(args.overrides.apply(&mut config).is_err());
}

#[test]
fn test_no_overrides_keep_defaults() {
    let args = parse(&[]).unwrap();
    let mut config = AppConfig::default();
    args.overrides.apply(&mut config).unwrap();
    assert_eq!(config, AppConfig::default());
}
