// tests/grammar_test.rs
use std::cmp::Ordering;

use version_scout::domain::SemanticVersion;
use version_scout::grammar;
use version_scout::VersionScoutError;

#[test]
fn test_round_trip_preserves_components() {
    for input in [
        "1.2.3",
        "0.0.1",
        "1.0.0-alpha",
        "1.0.0-alpha.beta.2",
        "2.1.0+build.42",
        "1.0.0-rc.1+sha.5114f85",
    ] {
        let parsed = grammar::parse(input).unwrap();
        assert_eq!(parsed.to_string(), input, "round trip failed for '{}'", input);
    }
}

#[test]
fn test_precedence_fixture_from_semver_spec() {
    let chain = [
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
    ];

    let versions: Vec<SemanticVersion> = chain
        .iter()
        .map(|s| grammar::parse(s).unwrap())
        .collect();

    for window in versions.windows(2) {
        assert!(
            window[0] < window[1],
            "expected {} < {}",
            window[0],
            window[1]
        );
    }
}

#[test]
fn test_comparator_totality_and_inversion() {
    let fixtures = [
        "1.0.0",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0+build",
        "2.0.0",
        "0.9.9",
    ];

    for a in &fixtures {
        for b in &fixtures {
            let va = grammar::parse(a).unwrap();
            let vb = grammar::parse(b).unwrap();
            let forward = va.cmp(&vb);
            let backward = vb.cmp(&va);
            assert_eq!(
                forward,
                backward.reverse(),
                "cmp({}, {}) must invert cmp({}, {})",
                a,
                b,
                b,
                a
            );
        }
    }
}

#[test]
fn test_build_metadata_is_comparison_irrelevant() {
    let a = grammar::parse("1.0.0+a").unwrap();
    let b = grammar::parse("1.0.0+b").unwrap();
    assert_eq!(a.cmp(&b), Ordering::Equal);

    let bare = grammar::parse("1.0.0").unwrap();
    assert_eq!(a.cmp(&bare), Ordering::Equal);
}

#[test]
fn test_rejection_set() {
    for input in ["1.0", "01.2.3", "1.2.3-01", "1.2.3-", "1.2.3+"] {
        let result = grammar::parse(input);
        assert!(
            matches!(result, Err(VersionScoutError::InvalidFormat(_))),
            "expected InvalidFormat for '{}', got {:?}",
            input,
            result
        );
    }
}

#[test]
fn test_find_first_embedded_in_gemspec_text() {
    let text = concat!(
        "Gem::Specification.new do |spec|\n",
        "  spec.version = '1.2.3-beta.4'\n",
        "end\n",
    );
    let found = grammar::find_first(text).unwrap();
    assert_eq!(found.version, grammar::parse("1.2.3-beta.4").unwrap());
    assert_eq!(&text[found.span.clone()], "1.2.3-beta.4");
}
