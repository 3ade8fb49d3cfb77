//! End-to-end scenarios against the public API, with mock collaborators.

use std::sync::Arc;

use soft_lepton::{
    Config, Dataset, DatasetKind, EventStore, Jet, JetTracksAssociation, MockSetupService,
    MockTagger, Muon, NdofSorter, NOMINAL_VERTEX, ProduceError, ResolveError, TRACK_BUILDER_RESOURCE,
    TagProducer, Track, TrackBuilder, Vertex,
};

fn jet(pt: f64) -> Arc<Jet> {
    Arc::new(Jet {
        pt,
        eta: 0.5,
        phi: 1.0,
        energy: pt * 1.2,
    })
}

fn track(pt: f64) -> Arc<Track> {
    Arc::new(Track {
        pt,
        eta: 0.4,
        phi: 0.9,
        charge: -1,
    })
}

fn fitted_vertex() -> Vertex {
    Vertex {
        position: [0.01, -0.01, 0.35],
        covariance: [2e-6, 0.0, 2e-6, 0.0, 0.0, 5e-3],
        chi2: 14.0,
        ndof: 8.0,
        track_count: 13,
    }
}

fn setup_service() -> MockSetupService {
    MockSetupService::with_builder(
        TRACK_BUILDER_RESOURCE,
        TrackBuilder {
            field_tesla: 3.8,
            epoch: 1,
        },
    )
}

fn producer() -> TagProducer<MockTagger, NdofSorter> {
    TagProducer::new(
        Config::default(),
        MockTagger::new(),
        NdofSorter,
        &setup_service(),
    )
    .expect("should build producer")
}

/// Builds the reference event: three associated jets with 2/1/0 tracks, one
/// fitted vertex, and a muon collection with one valid and one invalid
/// element.
fn reference_event() -> EventStore {
    let mut store = EventStore::new();
    store.put(
        "jets",
        Dataset::AssociatedJets(vec![
            JetTracksAssociation {
                jet: jet(90.0),
                tracks: vec![track(12.0), track(7.0)],
            },
            JetTracksAssociation {
                jet: jet(55.0),
                tracks: vec![track(4.0)],
            },
            JetTracksAssociation {
                jet: jet(30.0),
                tracks: vec![],
            },
        ]),
    );
    store.put("primaryVertex", Dataset::Vertices(vec![fitted_vertex()]));
    store.put(
        "leptons",
        Dataset::Muons(vec![
            Muon {
                combined_track: Some(track(9.0)),
            },
            Muon {
                combined_track: None,
            },
        ]),
    );
    store
}

#[test]
fn test_reference_event_produces_three_ordered_tags() {
    let producer = producer();
    let mut store = reference_event();

    producer.produce(&mut store).expect("event should succeed");

    let infos = store
        .get("softLeptonTags", DatasetKind::TagInfos)
        .and_then(Dataset::as_tag_infos)
        .expect("output should be published");

    // one result per jet, in input order
    assert_eq!(infos.len(), 3);
    assert_eq!(infos[0].jet().pt, 90.0);
    assert_eq!(infos[1].jet().pt, 55.0);
    assert_eq!(infos[2].jet().pt, 30.0);
}

#[test]
fn test_reference_event_lepton_and_vertex_inputs() {
    let producer = producer();
    let mut store = reference_event();

    producer.produce(&mut store).expect("event should succeed");

    let calls = producer.tagger().calls();
    assert_eq!(calls.len(), 3);

    // the invalid muon was dropped: every call sees exactly one lepton
    assert!(calls.iter().all(|call| call.lepton_count == 1));

    // the fitted vertex was selected, not the nominal fallback
    assert!(calls.iter().all(|call| call.vertex_ndof == 8.0));
    assert!(
        calls
            .iter()
            .all(|call| call.vertex_ndof != NOMINAL_VERTEX.ndof)
    );

    // track sets are per-jet
    assert_eq!(calls[0].track_count, 2);
    assert_eq!(calls[1].track_count, 1);
    assert_eq!(calls[2].track_count, 0);
}

#[test]
fn test_unresolvable_lepton_label_fails_event_without_output() {
    let producer = producer();

    // the lepton label holds only an unrelated schema
    let mut store = EventStore::new();
    store.put("jets", Dataset::Jets(vec![jet(40.0)]));
    store.put("primaryVertex", Dataset::Vertices(vec![fitted_vertex()]));
    store.put("leptons", Dataset::Jets(vec![jet(10.0)]));

    let err = producer.produce(&mut store).expect_err("event should fail");
    assert!(matches!(
        err,
        ProduceError::Resolve(ResolveError::MissingInput { .. })
    ));
    assert!(!store.contains("softLeptonTags", DatasetKind::TagInfos));
}

#[test]
fn test_plain_jets_and_disabled_vertex() {
    let config = Config {
        primary_vertex: "none".to_string(),
        ..Default::default()
    };
    let producer = TagProducer::new(config, MockTagger::new(), NdofSorter, &setup_service())
        .expect("should build producer");

    let mut store = EventStore::new();
    store.put("jets", Dataset::Jets(vec![jet(70.0), jet(45.0)]));
    store.put("leptons", Dataset::Tracks(vec![track(6.0)]));

    producer.produce(&mut store).expect("event should succeed");

    let infos = store
        .get("softLeptonTags", DatasetKind::TagInfos)
        .and_then(Dataset::as_tag_infos)
        .expect("output should be published");
    assert_eq!(infos.len(), 2);

    let calls = producer.tagger().calls();
    // plain-jet fallback: every track set empty; disabled vertex: nominal
    assert!(calls.iter().all(|call| call.track_count == 0));
    assert!(
        calls
            .iter()
            .all(|call| call.vertex_ndof == NOMINAL_VERTEX.ndof)
    );
}

#[test]
fn test_refresh_between_events_changes_calibration() {
    let service = setup_service();
    let producer = TagProducer::new(Config::default(), MockTagger::new(), NdofSorter, &service)
        .expect("should build producer");

    let mut first = reference_event();
    producer.produce(&mut first).expect("first event");

    service.register(
        TRACK_BUILDER_RESOURCE,
        TrackBuilder {
            field_tesla: 3.8,
            epoch: 2,
        },
    );
    producer.refresh(&service).expect("refresh");

    let mut second = reference_event();
    producer.produce(&mut second).expect("second event");

    let calls = producer.tagger().calls();
    assert_eq!(calls.len(), 6);
    assert!(calls[..3].iter().all(|call| call.builder_epoch == 1));
    assert!(calls[3..].iter().all(|call| call.builder_epoch == 2));
}
