#![no_main]

// String-keyed authorization fuzzer
//
// Checks that free-form identifiers never grant more than the catalog does:
// unknown names are denied, quantifiers agree with single checks, and an
// unauthenticated context is denied every route.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use portal_rbac::{AccessContext, Authorizer, Permission, Role};

#[derive(Debug, Arbitrary)]
struct Input {
    role: u8,
    names: Vec<String>,
    path: String,
    namespace: String,
}

fuzz_target!(|input: Input| {
    let authorizer = Authorizer::standard().without_audit();
    let role = Role::ALL[usize::from(input.role) % Role::ALL.len()];

    for name in &input.names {
        let granted = authorizer.has_permission_named(role, name);
        match name.parse::<Permission>() {
            Ok(permission) => assert_eq!(granted, authorizer.has_permission(role, permission)),
            Err(_) => assert!(!granted, "unknown identifier {name:?} was granted"),
        }
    }

    let any = authorizer.has_any_permission_named(role, &input.names);
    let all = authorizer.has_all_permissions_named(role, &input.names);
    let singles: Vec<bool> = input
        .names
        .iter()
        .map(|name| authorizer.has_permission_named(role, name))
        .collect();
    assert_eq!(any, singles.iter().any(|granted| *granted));
    assert_eq!(all, singles.iter().all(|granted| *granted));

    let access = authorizer.feature_access_named(role, &input.namespace);
    if access.any() {
        assert!(input.namespace.parse::<portal_rbac::Namespace>().is_ok());
    }

    let anonymous = AccessContext::new(&authorizer, None);
    assert!(!anonymous.can_access_route(&input.path));
    assert!(!anonymous.feature_access_named(&input.namespace).any());
});
