use super::*;

/// Tests the plan lifecycle: create, list ordered by price, update, delete.
///
/// Expected: Ok through every step with the listing reflecting each change
#[tokio::test]
async fn plan_lifecycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SubscriptionPlan)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubscriptionPlanRepository::new(db);

    let basic = repo
        .create(UpsertPlanParam {
            name: "Basic".to_string(),
            description: "Entry tier.".to_string(),
            price_cents: 999,
            duration_days: 30,
        })
        .await?;
    create_plan(db, 499).await?;

    // Cheapest first
    let plans = repo.get_all().await?;
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].price_cents, 499);

    let updated = repo
        .update(
            basic.id,
            UpsertPlanParam {
                name: "Basic".to_string(),
                description: "Entry tier.".to_string(),
                price_cents: 1299,
                duration_days: 30,
            },
        )
        .await?;
    assert_eq!(updated.price_cents, 1299);

    repo.delete(basic.id).await?;
    assert!(repo.get_by_id(basic.id).await?.is_none());

    Ok(())
}
