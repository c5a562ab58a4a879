//! Shared-registry behavior under concurrent registration and lookup.

use std::sync::{Arc, Barrier};
use std::thread;

use evalkit::metrics::service::{mae_fn, mse_fn};
use evalkit::{ErrorCode, ModelKind, ModelKindRegistry};

#[test]
fn racing_registrations_admit_exactly_one_winner() {
    let registry = Arc::new(ModelKindRegistry::new());
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.register("contested", mse_fn())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    for err in results.into_iter().filter_map(Result::err) {
        assert_eq!(err.code(), ErrorCode::DuplicateKind);
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn readers_see_registrations_from_other_threads() {
    let registry = Arc::new(ModelKindRegistry::with_defaults());

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.register(format!("kind_{i}"), mae_fn()).unwrap())
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let readers: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let kind = ModelKind::new(format!("kind_{i}"));
                registry.resolve(&kind).map(|m| m.name().to_string())
            })
        })
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap().unwrap(), "mae");
    }
    assert_eq!(registry.len(), 6);
}
