use super::*;

/// Tests that each permission admits exactly its roles.
///
/// Expected: Admin admits admin; Staff admits admin and hr; Manager admits admin, hr and manager
#[test]
fn permissions_admit_expected_roles() {
    let tokens = tokens();
    let cases = [
        (UserRole::Admin, [true, true, true]),
        (UserRole::Hr, [false, true, true]),
        (UserRole::Manager, [false, false, true]),
        (UserRole::Employee, [false, false, false]),
    ];

    for (role, [admin, staff, manager]) in cases {
        let headers = bearer_for(&tokens, role);
        let guard = AuthGuard::new(&tokens, &headers);

        assert_eq!(guard.require(&[Permission::Admin]).is_ok(), admin, "{role} admin");
        assert_eq!(guard.require(&[Permission::Staff]).is_ok(), staff, "{role} staff");
        assert_eq!(
            guard.require(&[Permission::Manager]).is_ok(),
            manager,
            "{role} manager"
        );
    }
}

/// Tests that a denied permission reports the caller and maps to 403.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[test]
fn denies_employee_staff_access() {
    let tokens = tokens();
    let headers = bearer_for(&tokens, UserRole::Employee);

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::Staff]);

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, "user-1");
            assert!(msg.contains("staff"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|p| p.user_id)),
    }
}

/// Tests that every listed permission must be satisfied.
///
/// Expected: Err for a manager asked for Manager and Admin
#[test]
fn requires_all_permissions() {
    let tokens = tokens();
    let headers = bearer_for(&tokens, UserRole::Manager);

    let result =
        AuthGuard::new(&tokens, &headers).require(&[Permission::Manager, Permission::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}

/// Tests that an empty permission list only requires authentication.
///
/// Expected: Ok(TokenPayload) with the caller's claims
#[test]
fn empty_permission_list_grants_access() {
    let tokens = tokens();
    let headers = bearer_for(&tokens, UserRole::Employee);

    let payload = AuthGuard::new(&tokens, &headers).require(&[]).unwrap();

    assert_eq!(payload.role, UserRole::Employee);
    assert_eq!(payload.employee_id, "emp-1");
}
