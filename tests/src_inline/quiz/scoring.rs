use super::*;
use crate::model::features::FeatureKey;
use crate::model::quiz::QUESTION_COUNT;

fn key_for(answers: &[Option<usize>]) -> FeatureKey {
    calculate_result(answers).key
}

#[test]
fn test_first_options_pick_pray() {
    let answers = [Some(0); QUESTION_COUNT];
    assert_eq!(score_answers(&answers).get(FeatureKey::Pray), 8);
    assert_eq!(key_for(&answers), FeatureKey::Pray);
}

#[test]
fn test_journal_heavy_answers() {
    let answers = [Some(1), Some(2), Some(1), Some(0), Some(0)];
    assert_eq!(score_answers(&answers).get(FeatureKey::Journal), 8);
    assert_eq!(key_for(&answers), FeatureKey::Journal);
}

#[test]
fn test_music_heavy_answers() {
    let answers = [Some(2), Some(0), Some(3), Some(1), Some(1)];
    assert_eq!(score_answers(&answers).get(FeatureKey::Music), 8);
    assert_eq!(key_for(&answers), FeatureKey::Music);
}

#[test]
fn test_meditate_heavy_answers() {
    let answers = [Some(1), Some(1), Some(2), Some(2), Some(2)];
    assert_eq!(score_answers(&answers).get(FeatureKey::Meditate), 8);
    assert_eq!(key_for(&answers), FeatureKey::Meditate);
}

#[test]
fn test_prayer_wall_heavy_answers() {
    let answers = [Some(3), Some(3), Some(0), Some(3), Some(0)];
    let scores = score_answers(&answers);
    assert_eq!(scores.get(FeatureKey::PrayerWall), 5);
    assert_eq!(scores.get(FeatureKey::Pray), 4);
    assert_eq!(key_for(&answers), FeatureKey::PrayerWall);
}

#[test]
fn test_partial_answers_only_count_answered() {
    let answers = [None, None, None, Some(2), None];
    let scores = score_answers(&answers);
    assert_eq!(scores.get(FeatureKey::SleepRest), 2);
    assert_eq!(scores.get(FeatureKey::Music), 1);
    assert_eq!(scores.get(FeatureKey::Pray), 0);
    assert_eq!(key_for(&answers), FeatureKey::SleepRest);
}

#[test]
fn test_pray_wins_tie_with_meditate() {
    let answers = [Some(1), Some(1), Some(0), Some(1), Some(2)];
    let scores = score_answers(&answers);
    assert_eq!(scores.get(FeatureKey::Pray), 5);
    assert_eq!(scores.get(FeatureKey::Meditate), 5);
    assert_eq!(key_for(&answers), FeatureKey::Pray);
}

#[test]
fn test_tie_between_non_pray_features_goes_to_earlier_key() {
    // journal 2+1 = 3, prayerWall 1+2 = 3, music 1
    let answers = [None, Some(2), None, None, Some(0)];
    let scores = score_answers(&answers);
    assert_eq!(scores.get(FeatureKey::Journal), 3);
    assert_eq!(scores.get(FeatureKey::PrayerWall), 3);
    assert_eq!(key_for(&answers), FeatureKey::Journal);

    // music 1+1, sleepRest 2
    let answers = [None, None, None, Some(2), Some(1)];
    let scores = score_answers(&answers);
    assert_eq!(scores.get(FeatureKey::Music), 2);
    assert_eq!(scores.get(FeatureKey::SleepRest), 2);
    assert_eq!(key_for(&answers), FeatureKey::Music);
}

#[test]
fn test_all_unanswered_defaults_to_pray() {
    let answers = [None; QUESTION_COUNT];
    assert_eq!(score_answers(&answers), FeatureScores::default());
    assert_eq!(key_for(&answers), FeatureKey::Pray);
}

#[test]
fn test_empty_and_short_vectors_are_total() {
    assert_eq!(key_for(&[]), FeatureKey::Pray);
    assert_eq!(key_for(&[None, None, None, Some(2)]), FeatureKey::SleepRest);
}

#[test]
fn test_out_of_range_and_extra_entries_are_skipped() {
    let answers = [Some(4), Some(99), None, Some(2), None, Some(0), Some(3)];
    let scores = score_answers(&answers);
    assert_eq!(scores.get(FeatureKey::SleepRest), 2);
    assert_eq!(scores.get(FeatureKey::Music), 1);
    assert_eq!(scores.get(FeatureKey::Pray), 0);
    assert_eq!(key_for(&answers), FeatureKey::SleepRest);
}

#[test]
fn test_result_is_always_a_known_destination() {
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                let answers = [Some(a), Some(b), Some(c), Some((a + b) % 4), None];
                let result = calculate_result(&answers);
                assert!(
                    crate::quiz::defs::builtin_destinations()
                        .iter()
                        .any(|d| d == result)
                );
            }
        }
    }
}

#[test]
fn test_repeated_calls_are_equal() {
    let answers = [Some(2), Some(3), Some(1), Some(0), Some(1)];
    let first = calculate_result(&answers);
    let second = calculate_result(&answers);
    assert_eq!(first, second);
    assert_eq!(answers, [Some(2), Some(3), Some(1), Some(0), Some(1)]);
}

#[test]
fn test_destination_for_every_feature() {
    for &key in crate::model::features::feature_order() {
        assert_eq!(destination_for(key).key, key);
    }
}

#[test]
fn test_scores_serialize_in_canonical_order() {
    let scores = score_answers(&[Some(0), Some(0), Some(0), Some(0), Some(0)]);
    let json = serde_json::to_string(&scores).unwrap();
    assert_eq!(
        json,
        r#"{"pray":8,"journal":2,"meditate":0,"music":1,"sleepRest":0,"prayerWall":2,"localSupport":1}"#
    );
}

#[test]
fn test_feature_index_matches_canonical_order() {
    for (i, key) in crate::model::features::feature_order().iter().enumerate() {
        assert_eq!(key.index(), i);
    }
}
