use std::sync::{Arc, Mutex};

use tradepost_commerce::error::CommerceServiceError;
use tradepost_commerce::usecase::employee::{
    AddEmployeeInput, AddEmployeeUseCase, RemoveEmployeeUseCase,
};
use tradepost_commerce::usecase::policy::BusinessPolicy;
use tradepost_domain::business::EmployeeRole;

use crate::helpers::{
    MockBusinessRepo, MockEmployeeRepo, MockUserRepo, test_business, test_membership, test_user,
};

fn add_usecase(
    businesses: Vec<tradepost_commerce::domain::types::Business>,
    memberships: Vec<tradepost_commerce::domain::types::EmployeeMembership>,
    users: Vec<tradepost_commerce::domain::types::UserProfile>,
) -> AddEmployeeUseCase<MockBusinessRepo, MockEmployeeRepo, MockUserRepo> {
    let memberships = Arc::new(Mutex::new(memberships));
    AddEmployeeUseCase {
        policy: BusinessPolicy {
            businesses: MockBusinessRepo::new(businesses, Arc::clone(&memberships)),
            employees: MockEmployeeRepo::new(memberships),
        },
        users: MockUserRepo::new(users),
    }
}

#[tokio::test]
async fn should_add_employee_as_owner() {
    let business = test_business("usr_owner", "Burger Shot");
    let usecase = add_usecase(
        vec![business.clone()],
        vec![],
        vec![test_user("usr_new")],
    );

    let membership = usecase
        .execute(
            "usr_owner",
            business.id,
            AddEmployeeInput {
                user_id: "usr_new".to_owned(),
                role: EmployeeRole::Manager,
            },
        )
        .await
        .unwrap();
    assert_eq!(membership.user_id, "usr_new");
    assert_eq!(membership.role, EmployeeRole::Manager);
}

#[tokio::test]
async fn should_reject_duplicate_membership() {
    let business = test_business("usr_owner", "Burger Shot");
    let usecase = add_usecase(
        vec![business.clone()],
        vec![test_membership(business.id, "usr_new")],
        vec![test_user("usr_new")],
    );

    let result = usecase
        .execute(
            "usr_owner",
            business.id,
            AddEmployeeInput {
                user_id: "usr_new".to_owned(),
                role: EmployeeRole::Employee,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(CommerceServiceError::EmployeeAlreadyExists)
    ));
}

#[tokio::test]
async fn should_reject_adding_the_owner_as_employee() {
    let business = test_business("usr_owner", "Burger Shot");
    let usecase = add_usecase(
        vec![business.clone()],
        vec![],
        vec![test_user("usr_owner")],
    );

    let result = usecase
        .execute(
            "usr_owner",
            business.id,
            AddEmployeeInput {
                user_id: "usr_owner".to_owned(),
                role: EmployeeRole::Employee,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(CommerceServiceError::EmployeeAlreadyExists)
    ));
}

#[tokio::test]
async fn should_reject_unknown_target_user() {
    let business = test_business("usr_owner", "Burger Shot");
    let usecase = add_usecase(vec![business.clone()], vec![], vec![]);

    let result = usecase
        .execute(
            "usr_owner",
            business.id,
            AddEmployeeInput {
                user_id: "usr_ghost".to_owned(),
                role: EmployeeRole::Employee,
            },
        )
        .await;
    assert!(matches!(result, Err(CommerceServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reject_employee_managing_employees() {
    let business = test_business("usr_owner", "Burger Shot");
    let usecase = add_usecase(
        vec![business.clone()],
        vec![test_membership(business.id, "usr_employee")],
        vec![test_user("usr_new")],
    );

    let result = usecase
        .execute(
            "usr_employee",
            business.id,
            AddEmployeeInput {
                user_id: "usr_new".to_owned(),
                role: EmployeeRole::Employee,
            },
        )
        .await;
    assert!(matches!(result, Err(CommerceServiceError::Forbidden)));
}

#[tokio::test]
async fn should_remove_employee_and_report_missing_membership() {
    let business = test_business("usr_owner", "Burger Shot");
    let memberships = Arc::new(Mutex::new(vec![test_membership(
        business.id,
        "usr_employee",
    )]));
    let usecase = RemoveEmployeeUseCase {
        policy: BusinessPolicy {
            businesses: MockBusinessRepo::new(vec![business.clone()], Arc::clone(&memberships)),
            employees: MockEmployeeRepo::new(Arc::clone(&memberships)),
        },
    };

    usecase
        .execute("usr_owner", business.id, "usr_employee")
        .await
        .unwrap();
    assert!(memberships.lock().unwrap().is_empty());

    let result = usecase
        .execute("usr_owner", business.id, "usr_employee")
        .await;
    assert!(matches!(
        result,
        Err(CommerceServiceError::EmployeeNotFound)
    ));
}
