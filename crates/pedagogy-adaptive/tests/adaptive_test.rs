use std::collections::HashSet;

use pedagogy_adaptive::*;
use pedagogy_core::config::PedagogyConfig;
use pedagogy_core::{BloomsDistribution, BloomsLevel, StudentProfile};
use test_fixtures::{balanced_pool, level_pool, profile, question, subject_question};

// ── Profile updates ──────────────────────────────────────────────────────

#[test]
fn single_correct_answer_at_difficulty_scenario() {
    let engine = PedagogicalEngine::new();
    let mut learner = profile("u1", 0.0);
    let q = question("q", 0.0, BloomsLevel::Apply);

    engine.update_profile(&mut learner, &q, true, 30.0);

    assert!((learner.ability_level.value() - 0.05).abs() < 1e-12);
    assert!((learner.blooms_progress.get(BloomsLevel::Apply) - 0.1).abs() < 1e-12);
    assert_eq!(learner.blooms_progress.to_map().len(), 6);
}

#[test]
fn subjects_are_tracked_independently() {
    let engine = PedagogicalEngine::new();
    let mut learner = StudentProfile::new("u2");
    for i in 0..5 {
        let q = subject_question(&format!("m{i}"), "math", 0.0, BloomsLevel::Apply);
        engine.update_profile(&mut learner, &q, true, 0.0);
    }
    for i in 0..5 {
        let q = subject_question(&format!("h{i}"), "history", 0.0, BloomsLevel::Remember);
        engine.update_profile(&mut learner, &q, false, 0.0);
    }
    assert!(learner.subject_abilities["math"] > learner.subject_abilities["history"]);
}

#[test]
fn config_learning_rate_flows_into_updates() {
    let config = PedagogyConfig::from_toml("[adaptation]\nlearning_rate = 0.2").unwrap();
    let engine = PedagogicalEngine::from_config(&config);
    let mut learner = profile("u3", 0.0);
    engine.update_profile(&mut learner, &question("q", 0.0, BloomsLevel::Apply), true, 0.0);
    assert!((learner.ability_level.value() - 0.1).abs() < 1e-12);
}

// ── Selection ────────────────────────────────────────────────────────────

#[test]
fn identical_candidates_without_target_pick_first() {
    let engine = PedagogicalEngine::new();
    let learner = profile("u", 0.3);
    let candidates = vec![
        question("a", 1.0, BloomsLevel::Analyze),
        question("b", 1.0, BloomsLevel::Analyze),
        question("c", 1.0, BloomsLevel::Analyze),
    ];
    assert_eq!(engine.select_next(&learner, &candidates, None).unwrap().id, "a");
}

#[test]
fn adjacent_level_beats_distant_level_with_equal_information() {
    let engine = PedagogicalEngine::new();
    let learner = profile("u", 0.0);
    let candidates = vec![
        question("distant", 0.0, BloomsLevel::Create),
        question("adjacent", 0.0, BloomsLevel::Understand),
    ];
    let chosen = engine
        .select_next(&learner, &candidates, Some(BloomsLevel::Apply))
        .unwrap();
    assert_eq!(chosen.id, "adjacent");
}

// ── Assembly ─────────────────────────────────────────────────────────────

#[test]
fn balanced_pool_follows_default_distribution() {
    let engine = PedagogicalEngine::new();
    let pool = balanced_pool(5);
    let quiz = engine.assemble_quiz(&profile("u", 0.0), &pool, 10, None);

    assert_eq!(quiz.len(), 10);
    let count = |level| quiz.iter().filter(|q| q.blooms_level == level).count();
    assert_eq!(count(BloomsLevel::Remember), 1);
    assert_eq!(count(BloomsLevel::Understand), 2);
    assert_eq!(count(BloomsLevel::Apply), 3);
    assert_eq!(count(BloomsLevel::Analyze), 2);
    assert_eq!(count(BloomsLevel::Evaluate), 1);
    assert_eq!(count(BloomsLevel::Create), 1);
}

#[test]
fn levels_come_out_in_taxonomy_order() {
    let engine = PedagogicalEngine::new();
    let quiz = engine.assemble_quiz(&profile("u", 0.0), &balanced_pool(5), 10, None);
    let levels: Vec<_> = quiz.iter().map(|q| q.blooms_level).collect();
    let mut sorted = levels.clone();
    sorted.sort();
    assert_eq!(levels, sorted);
}

#[test]
fn missing_levels_are_backfilled_from_the_rest_of_the_pool() {
    let engine = PedagogicalEngine::new();
    // Only Remember items, whose quota floors to zero at six questions:
    // every slot comes from the fill pass.
    let pool = level_pool(BloomsLevel::Remember, 8);
    let quiz = engine.assemble_quiz(&profile("u", 0.0), &pool, 6, None);
    assert_eq!(quiz.len(), 6);
}

#[test]
fn short_pool_gives_short_quiz() {
    let engine = PedagogicalEngine::new();
    let pool = balanced_pool(1);
    let quiz = engine.assemble_quiz(&profile("u", 0.0), &pool, 20, None);
    assert_eq!(quiz.len(), 6);
}

#[test]
fn duplicate_ids_in_pool_are_not_repeated() {
    let engine = PedagogicalEngine::new();
    let pool = vec![
        question("dup", 0.0, BloomsLevel::Apply),
        question("dup", 0.0, BloomsLevel::Apply),
        question("other", 0.5, BloomsLevel::Apply),
    ];
    let quiz = engine.assemble_quiz(&profile("u", 0.0), &pool, 3, None);
    let ids: HashSet<_> = quiz.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids.len(), quiz.len());
    assert_eq!(quiz.len(), 2);
}

#[test]
fn overweighted_distribution_never_exceeds_target() {
    let engine = PedagogicalEngine::new();
    let d: BloomsDistribution = BloomsLevel::ALL.iter().map(|l| (*l, 0.5)).collect();
    let quiz = engine.assemble_quiz(&profile("u", 0.0), &balanced_pool(5), 8, Some(&d));
    assert_eq!(quiz.len(), 8);
}

#[test]
fn zero_target_gives_empty_quiz() {
    let engine = PedagogicalEngine::new();
    assert!(engine
        .assemble_quiz(&profile("u", 0.0), &balanced_pool(2), 0, None)
        .is_empty());
}

#[test]
fn targeted_distribution_concentrates_on_requested_levels() {
    let engine = PedagogicalEngine::new();
    let d = BloomsDistribution::uniform(&[BloomsLevel::Analyze, BloomsLevel::Evaluate]);
    let quiz = engine.assemble_quiz(&profile("u", 0.0), &balanced_pool(5), 10, Some(&d));
    let on_target = quiz
        .iter()
        .filter(|q| matches!(q.blooms_level, BloomsLevel::Analyze | BloomsLevel::Evaluate))
        .count();
    assert_eq!(on_target, 10);
}
