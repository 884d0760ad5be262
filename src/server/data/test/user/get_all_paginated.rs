use super::*;

/// Tests paging through users ordered by full name.
///
/// Creates three users and requests pages of two, verifying ordering, totals and
/// the short last page.
///
/// Expected: Ok with two pages
#[tokio::test]
async fn pages_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::user::UserFactory::new(db)
            .full_name(name)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let first = repo
        .get_all_paginated(PageParams::new(Some(1), Some(2)))
        .await?;
    let second = repo
        .get_all_paginated(PageParams::new(Some(2), Some(2)))
        .await?;

    let names: Vec<_> = first.items.iter().map(|u| u.full_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].full_name, "Charlie");

    Ok(())
}

/// Tests that deleted users are excluded from listings and totals.
///
/// Expected: Ok with only the live user
#[tokio::test]
async fn excludes_deleted_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .deleted_at(Some(chrono::Utc::now()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let page = repo.get_all_paginated(PageParams::default()).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, live.id);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
