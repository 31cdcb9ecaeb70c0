//! Tests for the auth module

use super::*;
use crate::error::Error;
use std::io::Write;
use tokio_test::{assert_pending, assert_ready, task};
use std::time::Duration;

#[test]
fn test_apply_sets_authorization_header() {
    let ctx = CallContext::new().with_credentials(Credentials::new("acme-1234", "s3cr3t"));
    let client = reqwest::Client::new();
    let req = client.get("https://example.com/v2/labels");

    let req = Authenticator::new().apply(&ctx, req).unwrap();

    let built = req.build().unwrap();
    assert_eq!(
        built.headers().get(AUTHORIZATION_HEADER).unwrap(),
        "acme-1234:s3cr3t"
    );
}

#[test]
fn test_with_credentials_derives_new_context() {
    let base = CallContext::new().with_timeout(Duration::from_secs(5));
    let derived = with_credentials(&base, "org-a", "key-a");

    assert_eq!(credentials_of(&derived).unwrap(), Credentials::new("org-a", "key-a"));
    assert_eq!(derived.timeout(), Some(Duration::from_secs(5)));

    let other = with_credentials(&derived, "org-b", "key-b");
    assert_eq!(credentials_of(&derived).unwrap().slug(), "org-a");
    assert_eq!(credentials_of(&other).unwrap().slug(), "org-b");
}

#[test]
fn test_contexts_do_not_share_credentials() {
    let base = CallContext::new();
    let a = with_credentials(&base, "org-a", "key-a");
    let b = with_credentials(&base, "org-b", "key-b");

    let handles: Vec<_> = [a, b]
        .into_iter()
        .map(|ctx| std::thread::spawn(move || credentials_of(&ctx).unwrap().authorization()))
        .collect();
    let values: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(values, vec!["org-a:key-a", "org-b:key-b"]);
}

// The only test touching the process-wide slot, so it cannot race others.
#[test]
fn test_default_credentials_lookup_order() {
    clear_default_credentials();
    let empty = CallContext::new();
    assert!(matches!(
        credentials_of(&empty),
        Err(Error::MissingCredentials)
    ));

    set_default_credentials("default-org", "default-key");
    assert_eq!(credentials_of(&empty).unwrap().slug(), "default-org");

    // explicit context value wins over the default
    let explicit = with_credentials(&empty, "explicit-org", "explicit-key");
    assert_eq!(credentials_of(&explicit).unwrap().slug(), "explicit-org");

    clear_default_credentials();
    assert!(default_credentials().is_none());
    assert!(credentials_of(&empty).is_err());
}

#[test]
fn test_credentials_debug_redacts_secret() {
    let credentials = Credentials::new("acme", "very-secret");
    let debug = format!("{credentials:?}");
    assert!(debug.contains("acme"));
    assert!(!debug.contains("very-secret"));

    let ctx = CallContext::new().with_credentials(credentials);
    assert!(!format!("{ctx:?}").contains("very-secret"));
}

#[test]
fn test_credentials_from_yaml_and_json() {
    let yaml = Credentials::from_str("slug: acme\nsecret_key: abc\n").unwrap();
    assert_eq!(yaml.authorization(), "acme:abc");

    // PascalCase keys are accepted too
    let json = Credentials::from_str(r#"{"Slug": "acme", "SecretKey": "abc"}"#).unwrap();
    assert_eq!(json, yaml);

    assert!(matches!(
        Credentials::from_str("slug: acme\nsecret_key: \"\"\n"),
        Err(Error::MissingCredentials)
    ));
    assert!(Credentials::from_str("slug: [").is_err());
}

#[test]
fn test_credentials_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "slug: file-org").unwrap();
    writeln!(file, "secret_key: file-key").unwrap();

    let credentials = Credentials::from_file(file.path()).unwrap();
    assert_eq!(credentials.slug(), "file-org");
    assert_eq!(credentials.secret_key(), "file-key");

    assert!(matches!(
        Credentials::from_file("/definitely/not/here.yaml"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_credentials_from_env() {
    std::env::set_var(SLUG_ENV, "env-org");
    std::env::set_var(SECRET_KEY_ENV, "env-key");
    let credentials = Credentials::from_env().unwrap();
    assert_eq!(credentials.authorization(), "env-org:env-key");

    std::env::remove_var(SECRET_KEY_ENV);
    assert!(Credentials::from_env().is_err());
    std::env::remove_var(SLUG_ENV);
}

#[test]
fn test_cancel_token() {
    let token = CancelToken::new();
    let ctx = CallContext::new().with_cancel_token(token.clone());
    assert!(!ctx.is_cancelled());

    let mut waiter = task::spawn(token.cancelled());
    assert_pending!(waiter.poll());

    token.cancel();
    assert!(waiter.is_woken());
    assert_ready!(waiter.poll());
    assert!(ctx.is_cancelled());

    // already-cancelled tokens resolve on first poll
    assert_ready!(task::spawn(token.cancelled()).poll());
}
