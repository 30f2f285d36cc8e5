use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use tradepost_commerce::usecase::dashboard::DashboardStatsUseCase;

use crate::helpers::{
    MockBusinessRepo, MockProductRepo, MockSaleRepo, test_business, test_membership,
    test_product, test_sale,
};

#[tokio::test]
async fn should_aggregate_over_owned_and_member_businesses() {
    let owned = test_business("usr_kara", "Burger Shot");
    let works_at = test_business("usr_other", "Benny's Motorworks");
    let unrelated = test_business("usr_other", "Vanilla Nightclub");

    let memberships = Arc::new(Mutex::new(vec![test_membership(works_at.id, "usr_kara")]));
    let products = Arc::new(Mutex::new(vec![
        test_product(owned.id, "Fries", "4.25", 2),       // low stock
        test_product(owned.id, "Bleeder Burger", "12.50", 50),
        test_product(works_at.id, "Engine Oil", "30.00", 5), // at threshold
        test_product(unrelated.id, "Champagne", "80.00", 1), // not accessible
    ]));

    let sale_repo = MockSaleRepo::new(Arc::clone(&products));
    *sale_repo.sales.lock().unwrap() = vec![
        test_sale(owned.id, "usr_kara", "100.00", Utc::now()),
        test_sale(works_at.id, "usr_kara", "25.00", Utc::now()),
        // Committed two days ago: counts toward the total, not toward today.
        test_sale(owned.id, "usr_kara", "999.00", Utc::now() - Duration::days(2)),
        // Not accessible to usr_kara at all.
        test_sale(unrelated.id, "usr_other", "500.00", Utc::now()),
    ];

    let usecase = DashboardStatsUseCase {
        businesses: MockBusinessRepo::new(
            vec![owned, works_at, unrelated],
            Arc::clone(&memberships),
        ),
        sales: sale_repo,
        products: MockProductRepo::new(products),
        low_stock_threshold: 5,
    };

    let stats = usecase.execute("usr_kara").await.unwrap();
    assert_eq!(stats.today_revenue, "125.00".parse::<Decimal>().unwrap());
    assert_eq!(stats.completed_sales, 3);
    assert_eq!(stats.low_stock_products, 2);
    assert_eq!(stats.businesses, 2);
}

#[tokio::test]
async fn should_return_zeroes_for_user_with_no_businesses() {
    let memberships = Arc::new(Mutex::new(Vec::new()));
    let products = Arc::new(Mutex::new(Vec::new()));
    let usecase = DashboardStatsUseCase {
        businesses: MockBusinessRepo::new(Vec::new(), Arc::clone(&memberships)),
        sales: MockSaleRepo::new(Arc::clone(&products)),
        products: MockProductRepo::new(products),
        low_stock_threshold: 5,
    };

    let stats = usecase.execute("usr_nobody").await.unwrap();
    assert_eq!(stats.today_revenue, Decimal::ZERO);
    assert_eq!(stats.completed_sales, 0);
    assert_eq!(stats.low_stock_products, 0);
    assert_eq!(stats.businesses, 0);
}
