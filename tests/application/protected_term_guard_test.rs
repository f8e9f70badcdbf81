use edgescribe::application::services::{ProtectedTermGuard, placeholder};

fn guard() -> ProtectedTermGuard {
    ProtectedTermGuard::new(&["Paris", "Louis", "Louis Vuitton", "Google"]).unwrap()
}

#[test]
fn given_protected_city_when_round_tripped_then_original_restored() {
    let guard = guard();
    let protected = guard.protect("I flew to Paris last week.");

    assert_eq!(protected.text, "I flew to __PROTECTED_0__ last week.");
    assert_eq!(protected.terms.get(0), Some("Paris"));

    let restored = guard.restore("Volé a __PROTECTED_0__ la semana pasada.", &protected.terms);
    assert_eq!(restored, "Volé a Paris la semana pasada.");
}

#[test]
fn given_term_inside_longer_word_when_protected_then_left_alone() {
    let protected = guard().protect("A Parisian cafe.");

    assert_eq!(protected.text, "A Parisian cafe.");
    assert!(protected.terms.is_empty());
}

#[test]
fn given_overlapping_terms_when_protected_then_longest_wins() {
    let protected = guard().protect("Louis Vuitton and Louis met.");

    assert_eq!(protected.text, "__PROTECTED_0__ and __PROTECTED_1__ met.");
    assert_eq!(protected.terms.get(0), Some("Louis Vuitton"));
    assert_eq!(protected.terms.get(1), Some("Louis"));
}

#[test]
fn given_mixed_case_occurrences_when_round_tripped_then_each_spelling_kept() {
    let guard = guard();
    let protected = guard.protect("GOOGLE bought google.");

    assert_eq!(protected.terms.len(), 2);
    let restored = guard.restore(&protected.text, &protected.terms);
    assert_eq!(restored, "GOOGLE bought google.");
}

#[test]
fn given_recased_placeholder_when_restored_then_still_matched() {
    let guard = guard();
    let protected = guard.protect("Meet me in Paris.");

    let restored = guard.restore("Rendez-vous à __protected_0__.", &protected.terms);

    assert_eq!(restored, "Rendez-vous à Paris.");
}

#[test]
fn given_unknown_placeholder_index_when_restored_then_kept_verbatim() {
    let guard = guard();
    let protected = guard.protect("Paris.");

    let restored = guard.restore("__PROTECTED_0__ __PROTECTED_7__", &protected.terms);

    assert_eq!(restored, "Paris __PROTECTED_7__");
}

#[test]
fn given_empty_vocabulary_when_protecting_then_text_unchanged() {
    let guard = ProtectedTermGuard::new::<&str>(&[]).unwrap();
    let protected = guard.protect("Paris is lovely.");

    assert_eq!(guard.vocabulary_size(), 0);
    assert_eq!(protected.text, "Paris is lovely.");
    assert!(protected.terms.is_empty());
}

#[test]
fn given_protected_text_when_entries_listed_then_placeholders_in_order() {
    let protected = guard().protect("Google in Paris.");

    let entries: Vec<_> = protected.terms.entries().collect();

    assert_eq!(
        entries,
        vec![(placeholder(0), "Google"), (placeholder(1), "Paris")]
    );
}
