//! Session walkthrough
//!
//! Plays a few turns for one character and prints the report after each
//! interaction, the way a form front end would redraw.
//!
//! Run with `RUST_LOG=debug` to see the evaluation and turn logs. Pass a
//! path to a TOML rules file as the first argument to change the rules.

use epstat::*;
use tracing_subscriber::EnvFilter;

fn load_rules() -> Result<RulesConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(RulesConfig::from_toml_str(&std::fs::read_to_string(path)?)?),
        None => Ok(RulesConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rules = load_rules()?;
    let sheet = CharacterSheet::builder()
        .endurance(5)
        .power1(7, true)
        .power2(3, true)
        .upkeep_power2(true)
        .range(4, true)
        .control(3, true)
        .mobility(5, true)
        .buff_debuff(1)
        .extra_costs(0.5)
        .build()?;

    let mut session = Session::new(rules, sheet)?;
    println!("{}\n", session.evaluate());

    for _ in 0..4 {
        let outcome = session.next_turn();
        println!(
            "-- turn {}: +{} regen, -{} cost, {} -> {} EP",
            outcome.turn, outcome.regen, outcome.cost, outcome.ep_before, outcome.ep_after
        );
        println!("{}\n", session.evaluate());
    }

    session.reset();
    println!("-- reset\n{}", session.evaluate());

    Ok(())
}
