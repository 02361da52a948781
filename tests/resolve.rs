// tests/resolve.rs

//! End-to-end credential resolution as a call-setup hook would drive it.

use wincred::binding::{self, BindingParameters, ClientCredentials};
use wincred::{
    resolve, AuthIdentity, CredentialConfig, Error, ExternalCredentialState, ImpersonationLevel,
    Resolution, ResolvedCredential,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_embedded_domain_end_to_end() {
    init_logging();

    let config = CredentialConfig::new()
        .username(r"CORP\alice")
        .password("p")
        .impersonation_level(ImpersonationLevel::Impersonation);

    match resolve(&config, ExternalCredentialState::unset()).unwrap() {
        Resolution::Resolved { credential, generic } => {
            let generic = generic.expect("generic slot should be written");
            assert_eq!(generic.username(), r"CORP\alice");
            assert_eq!(generic.password(), "p");

            assert_eq!(credential.domain(), "corp");
            assert_eq!(credential.username(), "alice");
            assert_eq!(credential.password(), "p");
            assert_eq!(
                credential.impersonation_level(),
                ImpersonationLevel::Impersonation
            );
        }
        Resolution::Disabled => panic!("credentials are enabled"),
    }
}

#[test]
fn test_conflicting_domains_are_rejected() {
    init_logging();

    let config = CredentialConfig::new()
        .username(r"CORP\alice")
        .domain("OTHER")
        .password("p");

    let err = resolve(&config, ExternalCredentialState::unset()).unwrap_err();
    match err {
        Error::DomainClash { domain, username } => {
            assert_eq!(domain, "OTHER");
            assert_eq!(username, r"CORP\alice");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_matching_domains_in_any_case() {
    for domain in ["corp", "CORP", "Corp"] {
        let config = CredentialConfig::new().username(r"CORP\Alice").domain(domain);
        match resolve(&config, ExternalCredentialState::unset()).unwrap() {
            Resolution::Resolved { credential, .. } => {
                assert_eq!(credential.domain(), "corp");
                assert_eq!(credential.username(), "alice");
            }
            Resolution::Disabled => panic!("credentials are enabled"),
        }
    }
}

#[test]
fn test_hook_flow_with_adapter_credentials() {
    init_logging();

    // The adapter configured its own user; the Windows slot still follows the config.
    let config = CredentialConfig::new()
        .username(r"CORP\alice")
        .password("p")
        .impersonation_level(ImpersonationLevel::Delegation);
    let mut credentials = ClientCredentials::default();
    credentials.user_name.username = "svc".into();
    credentials.user_name.password = "svc-pass".into();
    let mut parameters = BindingParameters::new();

    assert!(binding::apply(&config, &mut credentials, Some(&mut parameters)).unwrap());
    assert!(binding::apply(&config, &mut credentials, Some(&mut parameters)).unwrap());

    assert_eq!(credentials.user_name.username, "svc");
    assert_eq!(credentials.user_name.password, "svc-pass");
    assert_eq!(credentials.windows.domain, "corp");
    assert_eq!(credentials.windows.username, "alice");
    assert_eq!(
        credentials.windows.allowed_impersonation_level,
        ImpersonationLevel::Delegation
    );
    assert_eq!(parameters.len(), 1);

    let registered = parameters.find::<ResolvedCredential>().unwrap();
    let identity = AuthIdentity::try_from(registered).unwrap();
    assert_eq!(String::from_utf16(identity.user()).unwrap(), "alice");
    assert_eq!(String::from_utf16(identity.domain()).unwrap(), "corp");
    assert_eq!(identity.impersonation_level(), 3);
}

#[test]
fn test_generic_slot_feeds_basic_auth() {
    let config = CredentialConfig::new()
        .username("alice")
        .domain("CORP")
        .password("p");
    let mut credentials = ClientCredentials::default();
    let mut parameters = BindingParameters::new();

    binding::apply(&config, &mut credentials, Some(&mut parameters)).unwrap();
    assert_eq!(credentials.user_name.username, r"CORP\alice");

    let generic = match resolve(&config, ExternalCredentialState::unset()).unwrap() {
        Resolution::Resolved { generic, .. } => generic.unwrap(),
        Resolution::Disabled => panic!("credentials are enabled"),
    };
    // base64("CORP\alice:p")
    assert_eq!(generic.basic_auth_header(), "Basic Q09SUFxhbGljZTpw");
}

#[test]
fn test_resolve_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let config = CredentialConfig::new().username(format!(r"DOM{}\user{}", i, i));
                match resolve(&config, ExternalCredentialState::unset()).unwrap() {
                    Resolution::Resolved { credential, .. } => {
                        assert_eq!(credential.domain(), format!("dom{}", i));
                        assert_eq!(credential.username(), format!("user{}", i));
                    }
                    Resolution::Disabled => panic!("credentials are enabled"),
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
