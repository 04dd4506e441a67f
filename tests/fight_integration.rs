//! Fight integration tests
//!
//! Full fights from creation to verdict, with seeded randomness.

use brawl::combat::{blocked, roll_damage, DefencePair, FighterState, Move, Zone};
use brawl::core::config::FightConfig;
use brawl::core::error::Result;
use brawl::core::types::Side;
use brawl::data::OpponentCatalog;
use brawl::entity::{Character, SkillId, SkillSet};
use brawl::fight::{
    Fight, FightEvent, FightEventType, FightObserver, FightOutcome, FightPhase, HumanMoves,
    MoveSource, NullObserver, RandomMoves,
};
use brawl::ui::menus::{choose_opponent, choose_skill};
use brawl::ui::{ConsoleRenderer, ScriptedInput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Plays one move forever
struct Always(Move);

impl MoveSource for Always {
    fn choose_move(
        &mut self,
        _me: &FighterState,
        _opponent: &FighterState,
        _rng: &mut dyn RngCore,
    ) -> Result<Move> {
        Ok(self.0)
    }
}

/// Collects events like a presentation sink would
#[derive(Default)]
struct Recorder {
    events: Vec<FightEvent>,
}

impl FightObserver for Recorder {
    fn on_event(&mut self, event: &FightEvent) {
        self.events.push(event.clone());
    }
}

fn no_noise() -> FightConfig {
    FightConfig {
        damage_noise: 0,
        ..FightConfig::default()
    }
}

#[test]
fn test_baseline_against_private_wolf_without_blocks() {
    let a = Character::new("A", "John Doe");
    let b = Character::from_skills("B", "Corey Nicholson", 0, SkillSet::new(3, 4, 4, 4));
    assert_eq!((a.max_hp(), a.punch()), (30, 6));
    assert_eq!((b.max_hp(), b.punch()), (36, 6));

    let mut fight = Fight::new(a, b, no_noise());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    // Both attack legs and guard head/chest, so nothing is ever blocked
    let mut first = Always(Move::new(Zone::Legs, DefencePair::HeadChest));
    let mut second = Always(Move::new(Zone::Legs, DefencePair::HeadChest));

    for round in 1..=4 {
        let phase = fight
            .run_round(&mut first, &mut second, &mut rng, &mut NullObserver)
            .unwrap();
        assert_eq!(phase, FightPhase::InProgress);
        assert_eq!(fight.fighter(Side::First).hp_left, 30 - 6 * round);
        assert_eq!(fight.fighter(Side::Second).hp_left, 36 - 6 * round);
    }

    let phase = fight
        .run_round(&mut first, &mut second, &mut rng, &mut NullObserver)
        .unwrap();

    assert_eq!(
        phase,
        FightPhase::Finished(FightOutcome::Victory {
            winner: Side::Second
        })
    );
    assert_eq!(fight.round(), 5);
    assert_eq!(fight.fighter(Side::First).hp_left, 0);
    assert_eq!(fight.fighter(Side::Second).hp_left, 6);

    let (a, b) = fight.into_characters();
    assert_eq!(a.experience, 0);
    assert_eq!(b.experience, 15);
}

#[test]
fn test_seeded_random_fights_terminate() {
    let catalog = OpponentCatalog::with_defaults();

    for seed in 0..50 {
        for selection in 1..=catalog.len() {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut fight = Fight::new(
                Character::new("Hero", "John Doe"),
                catalog.build_character(selection).unwrap(),
                FightConfig::default(),
            );

            let outcome = fight
                .run(&mut RandomMoves, &mut RandomMoves, &mut rng, &mut NullObserver)
                .unwrap();

            let first = fight.fighter(Side::First).hp_left;
            let second = fight.fighter(Side::Second).hp_left;
            match outcome {
                FightOutcome::Draw => assert!(first == 0 && second == 0),
                FightOutcome::Victory { winner: Side::First } => {
                    assert!(first > 0 && second == 0)
                }
                FightOutcome::Victory { winner: Side::Second } => {
                    assert!(first == 0 && second > 0)
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_fight() {
    let play = |seed: u64| {
        let catalog = OpponentCatalog::with_defaults();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut fight = Fight::new(
            Character::new("Hero", "John Doe"),
            catalog.build_character(2).unwrap(),
            FightConfig::default(),
        );
        fight
            .run(&mut RandomMoves, &mut RandomMoves, &mut rng, &mut NullObserver)
            .unwrap();
        (fight.round(), fight.outcome(), fight.log().to_vec())
    };

    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_round_draws_moves_before_damage() {
    // Replays the shared generator by hand: first move, second move, then
    // the first side's damage and the second side's damage
    let catalog = OpponentCatalog::with_defaults();
    let noise = FightConfig::default().damage_noise;

    for seed in 0..32 {
        let hero = FighterState::new(Character::new("Hero", "John Doe"));
        let pharos = FighterState::new(catalog.build_character(2).unwrap());

        let mut replay = ChaCha8Rng::seed_from_u64(seed);
        let first_move = RandomMoves.choose_move(&hero, &pharos, &mut replay).unwrap();
        let second_move = RandomMoves.choose_move(&pharos, &hero, &mut replay).unwrap();
        let to_second = if blocked(first_move.attack, second_move.defence) {
            0
        } else {
            roll_damage(&hero.character, noise, &mut replay)
        };
        let to_first = if blocked(second_move.attack, first_move.defence) {
            0
        } else {
            roll_damage(&pharos.character, noise, &mut replay)
        };

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut fight = Fight::new(hero.character, pharos.character, FightConfig::default());
        fight
            .run_round(&mut RandomMoves, &mut RandomMoves, &mut rng, &mut NullObserver)
            .unwrap();

        let attacks: Vec<_> = fight
            .log()
            .iter()
            .filter_map(|e| match &e.event_type {
                FightEventType::AttackResolved(a) => Some(*a),
                _ => None,
            })
            .collect();
        assert_eq!(attacks[0].zone, first_move.attack, "seed {}", seed);
        assert_eq!(attacks[1].zone, second_move.attack, "seed {}", seed);
        assert_eq!(attacks[0].damage, to_second, "seed {}", seed);
        assert_eq!(attacks[1].damage, to_first, "seed {}", seed);
        assert_eq!(fight.fighter(Side::Second).hp_left, (30 - to_second).max(0));
        assert_eq!(fight.fighter(Side::First).hp_left, (30 - to_first).max(0));

        // Both generators are at the same point afterwards
        assert_eq!(rng.next_u64(), replay.next_u64(), "seed {}", seed);
    }
}

#[test]
fn test_observer_sees_every_logged_event() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut recorder = Recorder::default();
    let mut fight = Fight::new(
        Character::new("Hero", "John Doe"),
        Character::new("Rival", "Jamie Williams"),
        FightConfig::default(),
    );

    fight
        .run(&mut RandomMoves, &mut RandomMoves, &mut rng, &mut recorder)
        .unwrap();

    assert_eq!(recorder.events, fight.log());

    let attacks = recorder
        .events
        .iter()
        .filter(|e| matches!(e.event_type, FightEventType::AttackResolved(_)))
        .count();
    assert_eq!(attacks as u32, 2 * fight.round());

    let ended = recorder
        .events
        .iter()
        .filter(|e| matches!(e.event_type, FightEventType::FightEnded { .. }))
        .count();
    assert_eq!(ended, 1);
}

#[test]
fn test_attack_events_carry_presentation_data() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut fight = Fight::new(
        Character::new("Hero", "John Doe"),
        Character::new("Rival", "Jamie Williams"),
        no_noise(),
    );

    fight
        .run_round(
            &mut Always(Move::new(Zone::Belly, DefencePair::HeadChest)),
            &mut Always(Move::new(Zone::Head, DefencePair::LegsHead)),
            &mut rng,
            &mut NullObserver,
        )
        .unwrap();

    let attacks: Vec<_> = fight
        .log()
        .iter()
        .filter_map(|e| match &e.event_type {
            FightEventType::AttackResolved(a) => Some(*a),
            _ => None,
        })
        .collect();

    assert_eq!(attacks.len(), 2);
    let by_first = attacks[0];
    assert_eq!(by_first.attacker, Side::First);
    assert_eq!(by_first.zone, Zone::Belly);
    assert!(!by_first.blocked);
    assert_eq!(by_first.damage, 6);
    assert_eq!(by_first.defender_hp_left, 24);

    let by_second = attacks[1];
    assert_eq!(by_second.zone, Zone::Head);
    assert!(by_second.blocked);
    assert_eq!(by_second.damage, 0);
    assert_eq!(by_second.defender_hp_left, 30);
}

#[test]
fn test_scripted_player_session() {
    // Two power points, one strength, then pick Pharos
    let mut input = ScriptedInput::new(["1", "1", "4", "2"]);
    let mut hero = Character::new("Hero", "Toby Robinson");
    hero.apply_initial_skill_improvements(3, |_, _| choose_skill(&mut input))
        .unwrap();
    assert_eq!(hero.skills().as_array(), [5, 3, 3, 4]);
    assert_eq!(hero.skills().get(SkillId::Power), 5);

    let opponent = choose_opponent(&mut input, &OpponentCatalog::with_defaults()).unwrap();
    assert_eq!(opponent.name, "Pharos");
    assert_eq!(input.remaining(), 0);

    // Player always goes for the head and guards belly/legs
    let answers: Vec<&str> = std::iter::repeat(["1", "3"]).take(100).flatten().collect();
    let mut player = HumanMoves::new(ScriptedInput::new(answers));
    let mut renderer = ConsoleRenderer::plain(Vec::new());
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut fight = Fight::new(hero, opponent, FightConfig::default());

    let outcome = fight
        .run(&mut player, &mut RandomMoves, &mut rng, &mut renderer)
        .unwrap();

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(text.contains("Quick Hero decided to hit the opponent"));
    assert!(text.contains("Naughty Pharos swung at the enemy"));
    match outcome {
        FightOutcome::Draw => assert!(text.contains("The battle is over. Draw.")),
        FightOutcome::Victory { winner } => {
            let name = &fight.fighter(winner).character.name;
            assert!(text.contains(&format!("The winner is {}.", name)));
            assert!(text.contains(&format!("Brave warrior {} has received 15XP.", name)));
        }
    }
}

#[test]
fn test_round_cap_is_opt_in() {
    let stalemate = || {
        (
            Always(Move::new(Zone::Head, DefencePair::ChestBelly)),
            Always(Move::new(Zone::Chest, DefencePair::HeadChest)),
        )
    };

    let config = FightConfig {
        max_rounds: Some(25),
        ..FightConfig::default()
    };
    let mut fight = Fight::new(
        Character::new("A", "a"),
        Character::new("B", "b"),
        config,
    );
    let (mut first, mut second) = stalemate();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let outcome = fight
        .run(&mut first, &mut second, &mut rng, &mut NullObserver)
        .unwrap();

    assert_eq!(outcome, FightOutcome::Draw);
    assert_eq!(fight.round(), 25);

    // Without a cap the same stalemate just keeps going
    let mut uncapped = Fight::new(
        Character::new("A", "a"),
        Character::new("B", "b"),
        FightConfig::default(),
    );
    let (mut first, mut second) = stalemate();
    for _ in 0..200 {
        uncapped
            .run_round(&mut first, &mut second, &mut rng, &mut NullObserver)
            .unwrap();
    }
    assert!(!uncapped.is_finished());
}
