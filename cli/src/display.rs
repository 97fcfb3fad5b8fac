//! Terminal formatting for lookups and the roster

use std::fmt::Display;
use std::rc::Rc;

use trainer_coverage::{
    DamageRelation, HasTypeCoverage, Move, MoveSet, Species, Stat, StatSet, Type, TypeCoverage,
    TypeRef,
};
use trainer_team::{Pokemon, Team, TeamLineup, TeamPosition};

/// Offensive and defensive sections, strongest relation first. Families
/// with no entries are left out.
pub fn coverage_table(coverage: &TypeCoverage) -> String {
    let sections = [
        ("Offensive Type Effectiveness", DamageRelation::TO),
        ("Defensive Type Effectiveness", DamageRelation::FROM),
    ];

    let mut blocks = Vec::new();
    for (title, family) in sections {
        let rows: Vec<String> = family
            .into_iter()
            .rev()
            .filter(|relation| !coverage.get(*relation).is_empty())
            .map(|relation| {
                format!(
                    "  {:>5}  {}",
                    relation.multiplier_label(),
                    type_list(coverage.get(relation))
                )
            })
            .collect();

        if !rows.is_empty() {
            blocks.push(format!("{title}\n{}", rows.join("\n")));
        }
    }
    blocks.join("\n\n")
}

/// Sorted type names; repeats are folded into a count.
fn type_list(types: &[TypeRef]) -> String {
    let mut sorted: Vec<&TypeRef> = types.iter().collect();
    sorted.sort();

    let mut parts = Vec::new();
    let mut iter = sorted.into_iter().peekable();
    while let Some(type_ref) = iter.next() {
        let mut count = 1;
        while iter.peek() == Some(&type_ref) {
            iter.next();
            count += 1;
        }
        if count > 1 {
            parts.push(format!("{type_ref} x{count}"));
        } else {
            parts.push(type_ref.to_string());
        }
    }
    parts.join(", ")
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn type_details(type_: &Type) -> String {
    format!(
        "{}\n\n{}",
        type_.name(),
        coverage_table(&type_.coverage().unique())
    )
}

pub fn species_header(species: &Species) -> String {
    let types: Vec<&str> = species.types().iter().map(|t| t.name()).collect();
    format!(
        "#{:03} {:<10} ({})",
        species.id(),
        species.name(),
        types.join(", ")
    )
}

pub fn species_details(species: &Species) -> String {
    format!(
        "{}\n\n{}",
        species_header(species),
        coverage_table(&species.type_coverage().defensive())
    )
}

pub fn move_details(move_: &Move) -> String {
    let meta = &move_.meta;
    let mut lines = vec![
        format!(
            "{} ({}, {}, {})",
            move_.name(),
            move_.damage_class(),
            move_.move_type().name(),
            move_.generation()
        ),
        format!("power:    {}", or_dash(meta.power)),
        format!("accuracy: {}", or_dash(meta.accuracy)),
        format!("pp:       {}", or_dash(meta.pp)),
    ];

    if let Some(effect) = &meta.short_effect {
        lines.push(String::new());
        lines.push(effect.clone());
    }

    let coverage = coverage_table(&move_.type_coverage().effective_offensive_coverage());
    if !coverage.is_empty() {
        lines.push(String::new());
        lines.push(coverage);
    }

    let extras: Vec<String> = [
        ("effect chance", meta.effect_chance.map(i64::from)),
        ("crit rate", meta.crit_rate.map(i64::from)),
        ("drain", meta.drain.map(i64::from)),
        ("flinch chance", meta.flinch_chance.map(i64::from)),
        ("healing", meta.healing.map(i64::from)),
        ("min hits", meta.min_hits.map(i64::from)),
        ("max hits", meta.max_hits.map(i64::from)),
        ("min turns", meta.min_turns.map(i64::from)),
        ("max turns", meta.max_turns.map(i64::from)),
        ("stat chance", meta.stat_chance.map(i64::from)),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| format!("  {label:<14}{v}")))
    .collect();

    if !extras.is_empty() {
        lines.push(String::new());
        lines.push("Meta".to_string());
        lines.extend(extras);
    }

    lines.join("\n")
}

fn slot_name(slot: &Option<Rc<Move>>) -> String {
    or_dash(slot.as_ref().map(|m| m.name()))
}

pub fn move_set(set: &MoveSet) -> String {
    format!(
        "1. {:<16} 2. {}\n3. {:<16} 4. {}",
        set.first.name(),
        slot_name(&set.second),
        slot_name(&set.third),
        slot_name(&set.fourth)
    )
}

/// Two rows of three stats
pub fn stat_block(stats: &StatSet) -> String {
    Stat::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|stat| format!("{:<17}{:<5}", format!("{}:", stat.label()), stats.get(*stat)))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stat_gains(gained: &StatSet) -> String {
    let parts: Vec<String> = gained
        .non_zero()
        .into_iter()
        .map(|(stat, value)| format!("+{value} {}", stat.label()))
        .collect();

    if parts.is_empty() {
        "no effort values gained".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn pokemon_line(pokemon: &Pokemon) -> String {
    format!("{:>4}  {pokemon}", format!("#{}", pokemon.id))
}

pub fn pokemon_details(pokemon: &Pokemon) -> String {
    let mut lines = vec![
        format!("#{} {}", pokemon.id, pokemon.name()),
        species_header(pokemon.species()),
    ];
    if let Some(item) = pokemon.item {
        lines.push(format!("Item Held: {item}"));
    }
    if pokemon.pokerus {
        lines.push("Pokerus".to_string());
    }

    lines.push(String::new());
    lines.push(format!("EVs ({}/{})", pokemon.evs.total(), StatSet::MAX_TOTAL));
    lines.push(stat_block(&pokemon.evs));

    if !pokemon.stats.is_zero() {
        lines.push(String::new());
        lines.push("Stats".to_string());
        lines.push(stat_block(&pokemon.stats));
    }

    if let Some(set) = &pokemon.move_set {
        lines.push(String::new());
        lines.push("Moves".to_string());
        lines.push(move_set(set));
    }

    let coverage = coverage_table(&pokemon.type_coverage());
    if !coverage.is_empty() {
        lines.push(String::new());
        lines.push(coverage);
    }

    lines.join("\n")
}

pub fn team_line(team: &Team, active: bool) -> String {
    let marker = if active { '*' } else { ' ' };
    format!(
        "{marker}{:>3}  {} ({}/6)",
        team.id,
        team.name,
        team.members().len()
    )
}

pub fn team_details(lineup: &TeamLineup<'_>) -> String {
    let mut lines = vec![format!("{} (team {})", lineup.team.name, lineup.team.id)];

    for position in TeamPosition::ALL {
        let member = lineup
            .members
            .iter()
            .find(|(at, _)| *at == position)
            .map(|(_, pokemon)| pokemon);
        match member {
            Some(pokemon) => lines.push(format!("  {position:<7} #{} {pokemon}", pokemon.id)),
            None => lines.push(format!("  {position:<7} -")),
        }
    }

    let coverage = coverage_table(&lineup.type_coverage());
    if !coverage.is_empty() {
        lines.push(String::new());
        lines.push(coverage);
    }

    lines.join("\n")
}
