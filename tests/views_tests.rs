//! Derived-view tests: sport filtering, the conflict-only view, and the
//! revision-keyed memoization.

mod support;

use std::sync::Arc;

use courtplan::api::{AssignmentRequest, CourtId, PersonId};
use courtplan::config::EngineConfig;
use courtplan::models::{PlacementStatus, Sport, SportFilter};
use courtplan::store::FullStore;
use courtplan::views::DerivedViews;
use support::{coach, harness, player};

fn views_for(h: &support::Harness) -> DerivedViews {
    let dyn_store: Arc<dyn FullStore> = h.store.clone();
    DerivedViews::new(dyn_store, EngineConfig::default().time_grid().unwrap())
}

#[tokio::test]
async fn test_view_filters_courts_and_people() {
    let mut padel_only = player("p1", "Anna");
    padel_only.sports = vec![Sport::Padel];
    let unrestricted = player("p2", "Bruno");
    let mut tennis_coach = coach("k1", "Marco");
    tennis_coach.sports = vec![Sport::TennisClay, Sport::TennisHard];

    let h = harness(vec![padel_only, unrestricted, tennis_coach]);
    let views = views_for(&h);

    let view = views.current(SportFilter::Tennis).await.unwrap();
    // Default courts: one padel, one clay, one hard.
    assert_eq!(view.courts.len(), 2);
    assert!(view.courts.iter().all(|c| c.sport != Sport::Padel));
    // The padel-only player is excluded, the unrestricted one passes.
    assert_eq!(view.players.len(), 1);
    assert_eq!(view.players[0].id, PersonId::new("p2"));
    assert_eq!(view.coaches.len(), 1);

    let view = views.current(SportFilter::Padel).await.unwrap();
    assert_eq!(view.courts.len(), 1);
    assert_eq!(view.players.len(), 2);
    // The tennis-restricted coach is not bookable for padel.
    assert!(view.coaches.is_empty());
}

#[tokio::test]
async fn test_view_exposes_conflict_courts() {
    let marco = coach("k1", "Marco");
    let h = harness(vec![marco.clone()]);
    let views = views_for(&h);

    let view = views.current(SportFilter::Tennis).await.unwrap();
    assert!(view.conflicts.is_empty());
    assert!(view.conflict_courts.is_empty());

    h.service
        .assign(AssignmentRequest::new(CourtId::new("c2"), marco.clone()).at_slot("09:00"))
        .await
        .unwrap();
    h.service
        .assign(
            AssignmentRequest::new(CourtId::new("c3"), marco)
                .at_slot("09:00")
                .with_status(PlacementStatus::Conflict),
        )
        .await
        .unwrap();

    let view = views.current(SportFilter::Tennis).await.unwrap();
    assert_eq!(view.conflict_courts.len(), 2);
    assert!(view.conflicts.contains_key(&CourtId::new("c2")));
    assert!(view.conflicts.contains_key(&CourtId::new("c3")));
}

#[tokio::test]
async fn test_view_recomputes_on_revision_or_filter_change() {
    let anna = player("p1", "Anna");
    let h = harness(vec![anna.clone()]);
    let views = views_for(&h);

    let first = views.current(SportFilter::Padel).await.unwrap();
    assert_eq!(first.players.len(), 1);

    // Unchanged store and filter: same revision, same content.
    let second = views.current(SportFilter::Padel).await.unwrap();
    assert_eq!(second.revision, first.revision);
    assert_eq!(second.players.len(), 1);

    // A filter change alone recomputes.
    let tennis = views.current(SportFilter::Tennis).await.unwrap();
    assert_eq!(tennis.filter, SportFilter::Tennis);

    // A mutation bumps the revision and the next read sees it.
    h.service
        .assign(AssignmentRequest::new(CourtId::new("c1"), anna).at_slot("10:00"))
        .await
        .unwrap();
    let third = views.current(SportFilter::Padel).await.unwrap();
    assert!(third.revision > first.revision);
    assert!(third.players.is_empty());
    assert_eq!(
        third
            .courts
            .iter()
            .map(|c| c.occupants.len())
            .sum::<usize>(),
        1
    );
}

#[tokio::test]
async fn test_view_invalidate_forces_recompute() {
    let h = harness(vec![player("p1", "Anna")]);
    let views = views_for(&h);

    let before = views.current(SportFilter::Padel).await.unwrap();
    views.invalidate();
    let after = views.current(SportFilter::Padel).await.unwrap();
    assert_eq!(after.revision, before.revision);
    assert_eq!(after.players.len(), before.players.len());
}
