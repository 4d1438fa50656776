//! Pokedex demo entry point.

use std::process::ExitCode;

use pokedex_concepts::{
    KnownType, PokemonEntry, PokemonEntryDraft, PokemonEntryPatch, TypePatch, seed,
};
use pokedex_foundation::RecordId;
use pokedex_runtime::{Pokedex, Result, RuntimeConfig, logging};

fn main() -> ExitCode {
    match run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl IntoIterator<Item = String>) -> Result<()> {
    let config = RuntimeConfig::from_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("pokedex {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(&config.log_filter)?;

    let mut pokedex = Pokedex::new(&config)?;
    if !config.quiet {
        walkthrough(&mut pokedex)?;
    }
    report(&pokedex);
    Ok(())
}

fn walkthrough(pokedex: &mut Pokedex) -> Result<()> {
    println!("\x1b[1;36m=== Views ===\x1b[0m");
    for id in [25, 6, 151].map(RecordId::new) {
        match pokedex.entries().view(id) {
            Some(entry) => println!("  #{id} {}: {}", entry.name, entry.description),
            None => println!("  #{id} not found"),
        }
    }

    println!("\x1b[1;36m=== Updates ===\x1b[0m");
    if let Some(electric) = pokedex.types_mut().update(
        KnownType::Electric.id(),
        TypePatch::default()
            .relation(KnownType::Flying, 2.0)
            .relation(KnownType::Ground, 0.0),
    ) {
        println!("  {} relations: {:?}", electric.name, electric.damage_relations);
    }

    if let Some(pikachu) = pokedex.entries_mut().update(
        RecordId::new(25),
        PokemonEntryPatch::default()
            .moveset_ids([seed::MOVE_THUNDERBOLT, seed::MOVE_QUICK_ATTACK]),
    ) {
        println!("  {} moves: {:?}", pikachu.name, pikachu.moveset_ids);
    }

    let ivysaur = PokemonEntryDraft::new(
        "Ivysaur",
        "When the bulb on its back grows large, it appears to lose the ability to stand on its hind legs.",
        seed::GAME_RED,
    )
    .with_types([KnownType::Grass, KnownType::Poison])
    .with_moves([seed::MOVE_VINE_WHIP, seed::MOVE_TACKLE]);
    if let Some(created) = create_species(pokedex, ivysaur)? {
        println!("  created #{} {}", created.id, created.name);
    }

    println!("\x1b[1;36m=== Effectiveness ===\x1b[0m");
    for (attacker, defender) in [
        (KnownType::Electric, RecordId::new(6)),
        (KnownType::Fire, RecordId::new(1)),
        (KnownType::Normal, RecordId::new(493)),
    ] {
        match pokedex.effectiveness(attacker.id(), defender) {
            Some(multiplier) => println!("  {attacker} -> #{defender}: x{multiplier}"),
            None => println!("  {attacker} -> #{defender}: unknown"),
        }
    }

    Ok(())
}

/// Creates a species under an auto-assigned number.
///
/// A collision is reported and yields `None`; other errors propagate.
fn create_species(
    pokedex: &mut Pokedex,
    draft: PokemonEntryDraft,
) -> Result<Option<PokemonEntry>> {
    match pokedex.entries_mut().create(None, draft) {
        Ok(created) => Ok(Some(created)),
        Err(e) if e.is_duplicate() => {
            println!("  \x1b[33mskipped: {e}\x1b[0m");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn report(pokedex: &Pokedex) {
    println!("\x1b[1;36m=== Sync Events ===\x1b[0m");
    for event in pokedex.engine().events() {
        println!("  [{}] {} {}", event.sequence, event.concept, event.id);
    }
    println!(
        "Species: {}, Types: {}",
        pokedex.entries().len(),
        pokedex.types().len()
    );
}

fn print_help() {
    println!(
        "\x1b[1mPokedex\x1b[0m - Concept registries with synchronization triggers

\x1b[1mUSAGE:\x1b[0m
    pokedex [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -q, --quiet          Skip the walkthrough, print only the sync event log
    --no-seed            Start with empty registries
    --sequential-ids     Use the raw auto-increment counter (may collide)
    --log FILTER         Log filter directive (default: info; RUST_LOG wins)

\x1b[1mEXAMPLES:\x1b[0m
    pokedex                      Seed, walk through the demo, print events
    pokedex --log debug          Include view and trigger diagnostics
    pokedex -q --no-seed         Print an empty event log"
    );
}
