//! End-to-end derivation through the public generator API.

use rndphrase::{ClassRule, ClassSpec, Config, Error, PhraseGenerator};

// Keep the KDF cheap; round count does not change any property under test.
const TEST_ROUNDS: u32 = 8;

fn base_config() -> Config {
    Config {
        seed: "correct horse battery staple".into(),
        uri: "example.com".into(),
        ..Default::default()
    }
}

fn derive(config: &Config, password: &str) -> String {
    PhraseGenerator::new(config)
        .unwrap()
        .base_rounds(TEST_ROUNDS)
        .generate(password)
        .unwrap()
}

fn is_capital(c: char) -> bool {
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ".contains(c)
}

#[test]
fn identical_inputs_reproduce_the_phrase() {
    let config = base_config();
    let first = derive(&config, "hunter2");
    let second = derive(&config, "hunter2");
    assert_eq!(first, second, "derivation must be reproducible");
    assert_eq!(first.chars().count(), 16);
}

#[test]
fn each_input_diverges_the_phrase() {
    let config = base_config();
    let reference = derive(&config, "hunter2");

    let mut other_seed = base_config();
    other_seed.seed = "a different seed".into();
    assert_ne!(derive(&other_seed, "hunter2"), reference);

    let mut other_uri = base_config();
    other_uri.uri = "example.org".into();
    assert_ne!(derive(&other_uri, "hunter2"), reference);

    let mut other_version = base_config();
    other_version.version = 2;
    assert_ne!(derive(&other_version, "hunter2"), reference);

    assert_ne!(derive(&config, "hunter3"), reference);
}

#[test]
fn requested_length_is_exact() {
    for size in [8, 16, 40] {
        let mut config = base_config();
        config.size = size;
        config.max_retries = 64;
        assert_eq!(derive(&config, "hunter2").chars().count(), size);
    }
}

#[test]
fn class_minimums_are_honored() {
    let mut config = base_config();
    config.max_retries = 64;
    config.capital = ClassRule::Custom(ClassSpec {
        min: Some(3),
        ..Default::default()
    });
    config.numeric = ClassRule::Custom(ClassSpec {
        min: Some(2),
        ..Default::default()
    });
    let phrase = derive(&config, "hunter2");
    assert!(phrase.chars().filter(|&c| is_capital(c)).count() >= 3);
    assert!(phrase.chars().filter(|c| c.is_ascii_digit()).count() >= 2);
}

#[test]
fn capped_class_emits_exactly_its_quota() {
    // size 16 with capital min = max = 4: exactly four capitals, the rest
    // padded from the remaining classes.
    let mut config = base_config();
    config.max_retries = 64;
    config.capital = ClassRule::Custom(ClassSpec {
        min: Some(4),
        max: Some(4),
        ..Default::default()
    });
    let phrase = derive(&config, "hunter2");
    assert_eq!(phrase.chars().count(), 16);
    assert_eq!(phrase.chars().filter(|&c| is_capital(c)).count(), 4);
    assert_eq!(phrase, derive(&config, "hunter2"));
}

#[test]
fn disabled_class_never_appears() {
    let mut config = base_config();
    config.special = ClassRule::Disabled;
    config.capital = ClassRule::Disabled;
    let phrase = derive(&config, "hunter2");
    assert!(
        phrase.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
        "unexpected character class in {:?}",
        phrase
    );
}

#[test]
fn global_alphabet_limits_every_draw() {
    let mut config = base_config();
    config.alphabet = Some("ABCdef123".into());
    let phrase = derive(&config, "hunter2");
    assert!(phrase.chars().all(|c| "ABCdef123".contains(c)));
}

#[test]
fn custom_class_alphabet_is_used() {
    let mut config = base_config();
    config.capital = ClassRule::Disabled;
    config.minuscule = ClassRule::Disabled;
    config.special = ClassRule::Disabled;
    config.numeric = ClassRule::Custom(ClassSpec {
        alphabet: Some("01".into()),
        ..Default::default()
    });
    let phrase = derive(&config, "hunter2");
    assert_eq!(phrase.chars().count(), 16);
    assert!(phrase.chars().all(|c| c == '0' || c == '1'));
}

#[test]
fn statistically_unreachable_quota_exhausts_the_budget() {
    // Eight copies of a one-in-seventy character will not show up in any
    // sane number of attempts; the bounded loop must give up cleanly.
    let mut config = base_config();
    config.max_retries = 4;
    config.capital = ClassRule::Custom(ClassSpec {
        min: Some(8),
        alphabet: Some("A".into()),
        ..Default::default()
    });
    let result = PhraseGenerator::new(&config)
        .unwrap()
        .base_rounds(TEST_ROUNDS)
        .generate("hunter2");
    assert_eq!(result, Err(Error::RetryLimitExceeded { attempts: 4 }));
}

#[test]
fn configuration_errors_surface_before_derivation() {
    let mut no_uri = base_config();
    no_uri.uri.clear();
    assert!(matches!(
        PhraseGenerator::new(&no_uri),
        Err(Error::MissingUri)
    ));

    let mut all_off = base_config();
    all_off.capital = ClassRule::Disabled;
    all_off.minuscule = ClassRule::Disabled;
    all_off.numeric = ClassRule::Disabled;
    all_off.special = ClassRule::Disabled;
    assert!(matches!(
        PhraseGenerator::new(&all_off),
        Err(Error::EmptyConstraintSet)
    ));

    let mut greedy = base_config();
    greedy.size = 4;
    greedy.capital = ClassRule::Custom(ClassSpec {
        min: Some(5),
        ..Default::default()
    });
    assert!(matches!(
        PhraseGenerator::new(&greedy),
        Err(Error::MinimaExceedLength { .. })
    ));

    let mut starved = base_config();
    starved.capital = ClassRule::Custom(ClassSpec {
        min: Some(1),
        max: Some(2),
        ..Default::default()
    });
    starved.minuscule = ClassRule::Custom(ClassSpec {
        min: Some(1),
        max: Some(2),
        ..Default::default()
    });
    starved.numeric = ClassRule::Disabled;
    starved.special = ClassRule::Disabled;
    assert!(matches!(
        PhraseGenerator::new(&starved),
        Err(Error::CapsBelowLength { .. })
    ));
}

#[test]
fn empty_seed_is_allowed() {
    let mut config = base_config();
    config.seed.clear();
    let phrase = derive(&config, "hunter2");
    assert_eq!(phrase.chars().count(), 16);
    assert_ne!(phrase, derive(&base_config(), "hunter2"));
}
