use std::{fs, io::Cursor};

use wc::{CountConfig, CountReport, Counts, DecodePolicy, InputError, count, count_all};

#[test]
fn facade_counts_a_reader() {
    let config = CountConfig::default().with_chunk_size(4);
    let counts = count(&mut Cursor::new("hello\nworld\n"), &config).unwrap();
    assert_eq!(counts, Counts::new(2, 2, 12));
}

#[test]
fn facade_respects_decode_policy() {
    let config = CountConfig::default().with_decode_policy(DecodePolicy::Strict);
    let err = count(&mut Cursor::new(&b"ok\n\xC3"[..]), &config).unwrap_err();
    assert!(matches!(err, InputError::Malformed { offset: 3 }));
}

#[test]
fn batch_keeps_order_and_totals_successes() {
    let dir = tempfile::tempdir().unwrap();
    let names: Vec<String> = (0..12)
        .map(|i| {
            let path = dir.path().join(format!("f{i}.txt"));
            fs::write(&path, "w\n".repeat(i + 1)).unwrap();
            path.to_string_lossy().into_owned()
        })
        .collect();
    let mut identifiers = names.clone();
    identifiers.insert(5, dir.path().join("nope").to_string_lossy().into_owned());

    let config = CountConfig::default().with_jobs(3);
    let CountReport::Batch(batch) = count_all(&identifiers, &config).unwrap() else {
        panic!("expected a batch report");
    };

    let got: Vec<_> = batch.results.iter().map(|r| r.identifier.clone()).collect();
    assert_eq!(got, identifiers);
    assert_eq!(batch.failures().count(), 1);
    // 1 + 2 + ... + 12 lines, one word per line, two bytes per line
    assert_eq!(batch.total, Counts::new(78, 78, 156));
}
