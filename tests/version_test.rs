//! Integration tests for version calculation.

use pkg_release::error::VersionError;
use pkg_release::version::{BumpAction, BumpOptions, BumpType, PrereleaseStage};
use semver::Version;

fn bump(current: &str, options: &BumpOptions) -> Result<String, VersionError> {
    BumpAction::resolve(options).apply(Some(current))
}

fn prerelease() -> BumpOptions {
    BumpOptions {
        prerelease: true,
        ..Default::default()
    }
}

#[test]
fn test_prerelease_cycle_from_stable() {
    let mut current = "1.2.3".to_string();
    let mut seen = Vec::new();

    for _ in 0..4 {
        current = bump(&current, &prerelease()).unwrap();
        seen.push(current.clone());
    }

    assert_eq!(seen, ["1.2.4-alpha.0", "1.2.4-beta.0", "1.2.4-rc.0", "1.2.4"]);
}

#[test]
fn test_prerelease_cycle_repeats() {
    let mut current = "1.2.4".to_string();
    let mut seen = Vec::new();

    for _ in 0..4 {
        current = bump(&current, &prerelease()).unwrap();
        seen.push(current.clone());
    }

    assert_eq!(seen, ["1.2.5-alpha.0", "1.2.5-beta.0", "1.2.5-rc.0", "1.2.5"]);
}

#[test]
fn test_prerelease_stages_only_move_forward() {
    let mut current = Version::parse("0.9.0").unwrap();

    for _ in 0..12 {
        let next = Version::parse(&bump(&current.to_string(), &prerelease()).unwrap()).unwrap();
        assert!(next > current, "{} -> {}", current, next);

        let stage = |v: &Version| {
            v.pre
                .as_str()
                .split('.')
                .next()
                .and_then(|t| t.parse::<PrereleaseStage>().ok())
        };
        if let (Some(from), Some(to)) = (stage(&current), stage(&next)) {
            assert_eq!(from.next(), Some(to));
        }

        current = next;
    }
}

#[test]
fn test_unknown_prerelease_tag_is_an_error() {
    let result = bump("2.0.0-preview.1", &prerelease());
    assert!(matches!(
        result,
        Err(VersionError::UnknownPrereleaseTag { ref tag, .. }) if tag == "preview"
    ));
}

#[test]
fn test_explicit_override_regardless_of_current() {
    let options = BumpOptions {
        major: true,
        prerelease: true,
        version: Some("9.9.9".to_string()),
        ..Default::default()
    };

    for current in ["0.0.1", "1.2.3-rc.0", "garbage"] {
        assert_eq!(bump(current, &options).unwrap(), "9.9.9");
    }
}

#[test]
fn test_default_is_patch() {
    assert_eq!(bump("1.0.0", &BumpOptions::default()).unwrap(), "1.0.1");
}

#[test]
fn test_prerelease_takes_precedence_over_major() {
    let options = BumpOptions {
        major: true,
        prerelease: true,
        ..Default::default()
    };
    assert_eq!(bump("1.2.3", &options).unwrap(), "1.2.4-alpha.0");
}

#[test]
fn test_major_minor_patch_reset_lower_components() {
    let cases = [
        (BumpType::Major, "3.7.9", "4.0.0"),
        (BumpType::Minor, "3.7.9", "3.8.0"),
        (BumpType::Patch, "3.7.9", "3.7.10"),
        (BumpType::Major, "3.7.9-beta.2", "4.0.0"),
        (BumpType::Minor, "3.7.9-beta.2", "3.8.0"),
        (BumpType::Patch, "3.7.9-beta.2", "3.7.9"),
    ];

    for (bump_type, from, expected) in cases {
        let next = BumpAction::Increment(bump_type).apply(Some(from)).unwrap();
        assert_eq!(next, expected, "{:?} from {}", bump_type, from);
        assert!(Version::parse(&next).unwrap() > Version::parse(from).unwrap());
    }
}

#[test]
fn test_invalid_current_version_propagates_parse_error() {
    let result = bump("v1.0.0", &BumpOptions::default());
    match result {
        Err(VersionError::ParseFailed(raw, source)) => {
            assert_eq!(raw, "v1.0.0");
            assert!(!source.to_string().is_empty());
        }
        other => panic!("expected ParseFailed, got {:?}", other),
    }
}
