#[cfg(test)]
mod tests {
    use crate::record::{MoveRecord, PokemonRecord, TypeRecord};
    use crate::testing::{MOVES_JSON, POKEMON_JSON, TYPES_JSON};

    fn types() -> Vec<TypeRecord> {
        serde_json::from_str(TYPES_JSON).unwrap()
    }

    #[test]
    fn test_decode_type_records() {
        let records = types();
        assert_eq!(records.len(), 18);

        let fire = records.iter().find(|t| t.name == "fire").unwrap();
        assert_eq!(fire.id, 10);

        let weak_to: Vec<&str> = fire
            .damage_relations
            .double_damage_from
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(weak_to, vec!["ground", "rock", "water"]);
    }

    #[test]
    fn test_missing_relation_lists_default_to_empty() {
        let record: TypeRecord =
            serde_json::from_str(r#"{"id": 99, "name": "shadow", "damage_relations": {}}"#).unwrap();

        assert!(record.damage_relations.no_damage_to.is_empty());
        assert!(
            record
                .damage_relations
                .entries()
                .iter()
                .all(|(_, list)| list.is_empty())
        );
    }

    #[test]
    fn test_decode_move_record() {
        let moves: Vec<MoveRecord> = serde_json::from_str(MOVES_JSON).unwrap();
        let thunderbolt = moves.iter().find(|m| m.name == "thunderbolt").unwrap();

        assert_eq!(thunderbolt.id, 85);
        assert_eq!(thunderbolt.power, Some(90));
        assert_eq!(thunderbolt.type_.name, "electric");
        assert_eq!(thunderbolt.damage_class.name, "special");
        assert!(thunderbolt.short_effect("en").is_some());
        assert!(thunderbolt.short_effect("xx").is_none());
    }

    #[test]
    fn test_decode_status_move_without_power() {
        let moves: Vec<MoveRecord> = serde_json::from_str(MOVES_JSON).unwrap();
        let swords_dance = moves.iter().find(|m| m.name == "swords-dance").unwrap();

        assert_eq!(swords_dance.power, None);
        assert_eq!(swords_dance.accuracy, None);
        assert_eq!(swords_dance.damage_class.name, "status");
    }

    #[test]
    fn test_decode_pokemon_record() {
        let pokemon: Vec<PokemonRecord> = serde_json::from_str(POKEMON_JSON).unwrap();
        let charizard = pokemon.iter().find(|p| p.name == "charizard").unwrap();

        let types: Vec<&str> = charizard
            .sorted_types()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(types, vec!["fire", "flying"]);
        assert_eq!(charizard.stats.len(), 6);
    }

    #[test]
    fn test_sorted_types_follows_slot() {
        let json = r#"{
            "id": 1, "name": "x",
            "types": [
                {"slot": 2, "type": {"name": "b", "url": "/type/2/"}},
                {"slot": 1, "type": {"name": "a", "url": "/type/1/"}}
            ]
        }"#;
        let record: PokemonRecord = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = record.sorted_types().iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["a", "b"]);
    }
}
