use std::sync::{Arc, Mutex};

use uuid::Uuid;

use tradepost_commerce::domain::types::{Business, EmployeeMembership};
use tradepost_commerce::error::CommerceServiceError;
use tradepost_commerce::usecase::policy::BusinessPolicy;
use tradepost_domain::business::AccessLevel;

use crate::helpers::{MockBusinessRepo, MockEmployeeRepo, test_business, test_membership};

fn policy(
    businesses: Vec<Business>,
    memberships: Vec<EmployeeMembership>,
) -> BusinessPolicy<MockBusinessRepo, MockEmployeeRepo> {
    let memberships = Arc::new(Mutex::new(memberships));
    BusinessPolicy {
        businesses: MockBusinessRepo::new(businesses, Arc::clone(&memberships)),
        employees: MockEmployeeRepo::new(memberships),
    }
}

#[tokio::test]
async fn should_authorize_owner_as_member_and_owner() {
    let business = test_business("usr_owner", "Burger Shot");
    let policy = policy(vec![business.clone()], vec![]);

    assert!(
        policy
            .require("usr_owner", business.id, AccessLevel::Member)
            .await
            .is_ok()
    );
    assert!(
        policy
            .require("usr_owner", business.id, AccessLevel::Owner)
            .await
            .is_ok()
    );
    assert!(policy.is_authorized("usr_owner", business.id).await.unwrap());
}

#[tokio::test]
async fn should_authorize_employee_as_member_but_not_owner() {
    let business = test_business("usr_owner", "Burger Shot");
    let policy = policy(
        vec![business.clone()],
        vec![test_membership(business.id, "usr_employee")],
    );

    assert!(
        policy
            .require("usr_employee", business.id, AccessLevel::Member)
            .await
            .is_ok()
    );
    let result = policy
        .require("usr_employee", business.id, AccessLevel::Owner)
        .await;
    assert!(matches!(result, Err(CommerceServiceError::Forbidden)));
    assert!(
        policy
            .is_authorized("usr_employee", business.id)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn should_not_authorize_employee_of_a_different_business() {
    let business = test_business("usr_owner", "Burger Shot");
    let other = test_business("usr_other", "Benny's Motorworks");
    let policy = policy(
        vec![business.clone(), other.clone()],
        vec![test_membership(other.id, "usr_employee")],
    );

    let result = policy
        .require("usr_employee", business.id, AccessLevel::Member)
        .await;
    assert!(matches!(result, Err(CommerceServiceError::Forbidden)));
    assert!(
        !policy
            .is_authorized("usr_employee", business.id)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn should_not_authorize_stranger() {
    let business = test_business("usr_owner", "Burger Shot");
    let policy = policy(vec![business.clone()], vec![]);

    let result = policy
        .require("usr_stranger", business.id, AccessLevel::Member)
        .await;
    assert!(matches!(result, Err(CommerceServiceError::Forbidden)));
    assert!(
        !policy
            .is_authorized("usr_stranger", business.id)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn should_report_not_found_for_unknown_business() {
    let policy = policy(vec![], vec![]);
    let unknown = Uuid::now_v7();

    let result = policy
        .require("usr_owner", unknown, AccessLevel::Member)
        .await;
    assert!(matches!(
        result,
        Err(CommerceServiceError::BusinessNotFound)
    ));
    assert!(!policy.is_authorized("usr_owner", unknown).await.unwrap());
}
