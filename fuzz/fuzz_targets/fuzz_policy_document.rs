#![no_main]

// Policy document fuzzer
//
// Feeds arbitrary text to the TOML policy loader. Anything that loads is
// exported back to TOML text and reloaded; the reloaded policy must make
// identical decisions for every role, permission and listed route.

use libfuzzer_sys::fuzz_target;
use portal_rbac::{Authorizer, Permission, PolicyDocument, Role};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = PolicyDocument::from_toml(text) else {
        return;
    };
    let Ok(authorizer) = document.into_authorizer() else {
        return;
    };
    let authorizer = authorizer.without_audit();

    let exported = toml::to_string(&PolicyDocument::from_authorizer(&authorizer))
        .expect("a loaded policy must serialize to TOML");
    let reloaded: Authorizer = PolicyDocument::from_toml(&exported)
        .and_then(PolicyDocument::into_authorizer)
        .expect("exported TOML must load again")
        .without_audit();

    for role in Role::ALL {
        for permission in Permission::ALL {
            assert_eq!(
                authorizer.has_permission(role, permission),
                reloaded.has_permission(role, permission),
                "{role} / {permission} changed across a reload"
            );
        }
        for (path, _) in authorizer.routes().iter() {
            assert_eq!(
                authorizer.can_access_route(role, path),
                reloaded.can_access_route(role, path),
                "{role} / {path} changed across a reload"
            );
        }
    }
});
