//! Rotation example: compare two gear sets over a short opener
//!
//! This example demonstrates:
//! - Building stats and hit contexts
//! - Computing action and auto-attack damage
//! - Reducing outcomes to expected damage
//!
//! Run with `RUST_LOG=xivcalc=trace` to see every truncation step.

use tracing_subscriber::EnvFilter;
use xivcalc::convert::recast_time;
use xivcalc::*;

/// `(name, potency, guaranteed crit, guaranteed direct hit)`
const OPENER: [(&str, i64, bool, bool); 6] = [
    ("Cascade", 220, false, false),
    ("Fountain", 280, false, false),
    ("Reverse Cascade", 280, false, false),
    ("Fountainfall", 340, false, false),
    ("Saber Dance", 480, false, false),
    ("Starfall Dance", 600, true, true),
];

fn opener_damage(engine: &DamageEngine, stats: &CharacterStats) -> Result<f64, CalcError> {
    let raid_buffs = [1.05, 1.03];
    let mut total = 0.0;

    for (name, potency, auto_crit, auto_direct_hit) in OPENER {
        let context = HitContext::new()
            .with_critical_rate_bonus(0.10)
            .with_direct_hit_rate_bonus(0.20)
            .with_buffs(raid_buffs)
            .with_auto_crit(auto_crit)
            .with_auto_direct_hit(auto_direct_hit);
        let outcome = engine.checked_action(potency, stats, &context)?;
        println!("  {:<16} {:>12.1}", name, outcome.expected());
        total += outcome.expected();
    }

    let auto = engine.checked_auto_attack(stats, &HitContext::new().with_buffs(raid_buffs))?;
    println!("  {:<16} {:>12.1}", "Auto-attack", auto.expected());
    total += auto.expected();

    Ok(total)
}

fn main() -> Result<(), CalcError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = DamageEngine::from_table(&JobTable::default(), Job::Dancer, 90)?;

    let crit_set = CharacterStats {
        wd: 126,
        w_delay: 3.12,
        dex: 2560,
        crit: 2300,
        det: 1800,
        dh: 1400,
        sks: 500,
    };
    let det_set = CharacterStats {
        crit: 2000,
        det: 2100,
        ..crit_set
    };

    for (label, stats) in [("Crit set", crit_set), ("Det set", det_set)] {
        println!("\n=== {} (GCD {:.2}s) ===", label, recast_time(stats.sks));
        let total = opener_damage(&engine, &stats)?;
        println!("  {:<16} {:>12.1}", "Total", total);
    }

    Ok(())
}
